//! Artificial Bee Colony configuration.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// How an employed bee proposes a neighbor of its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MutationKind {
    /// Always propose a pair swap.
    #[default]
    Swap,
    /// Keep a pair swap with probability `1 / (1 + exp(-length))` of the
    /// swapped path, otherwise propose the unchanged path.
    Sigmoid,
}

/// Configuration parameters for the bee colony search.
///
/// The hive holds `floor(population_size * onlooker_fraction)` onlookers and
/// `floor(population_size * employed_fraction)` employed bees. Each iteration
/// the `ceil(population_size * scout_fraction)` worst employed bees are sent
/// scouting.
///
/// # Examples
///
/// ```
/// use u_hive::abc::AbcConfig;
///
/// let config = AbcConfig::default()
///     .with_population_size(20)
///     .with_max_iterations(500)
///     .with_seed(42);
/// assert_eq!(config.employed_count(), 10);
/// assert_eq!(config.onlooker_count(), 10);
/// assert_eq!(config.scout_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbcConfig {
    /// Number of bees the role fractions apply to.
    pub population_size: usize,
    /// Fraction of the population tagged employed.
    pub employed_fraction: f64,
    /// Fraction of the population tagged onlooker.
    pub onlooker_fraction: f64,
    /// Fraction of the population forced to scout after each employed phase.
    pub scout_fraction: f64,
    /// Non-improving steps before an employed bee abandons its path.
    pub limit: usize,
    /// Number of iterations; there is no early stop.
    pub max_iterations: usize,
    /// Employed-bee proposal rule.
    pub mutation: MutationKind,
    /// Random seed (None seeds from the OS).
    pub seed: Option<u64>,
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            employed_fraction: 0.5,
            onlooker_fraction: 0.5,
            scout_fraction: 0.01,
            limit: 10,
            max_iterations: 100,
            mutation: MutationKind::Swap,
            seed: None,
        }
    }
}

impl AbcConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the employed, onlooker and scout fractions.
    pub fn with_fractions(mut self, employed: f64, onlooker: f64, scout: f64) -> Self {
        self.employed_fraction = employed;
        self.onlooker_fraction = onlooker;
        self.scout_fraction = scout;
        self
    }

    /// Sets the non-improvement limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the employed-bee proposal rule.
    pub fn with_mutation(mut self, mutation: MutationKind) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of employed bees.
    pub fn employed_count(&self) -> usize {
        (self.population_size as f64 * self.employed_fraction).floor() as usize
    }

    /// Number of onlooker bees.
    pub fn onlooker_count(&self) -> usize {
        (self.population_size as f64 * self.onlooker_fraction).floor() as usize
    }

    /// Number of worst employed bees forced to scout each iteration.
    pub fn scout_count(&self) -> usize {
        (self.population_size as f64 * self.scout_fraction).ceil() as usize
    }

    /// Checks that the configuration describes a runnable hive.
    pub fn validate(&self) -> Result<(), RoutingError> {
        for (name, value) in [
            ("employed_fraction", self.employed_fraction),
            ("onlooker_fraction", self.onlooker_fraction),
            ("scout_fraction", self.scout_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RoutingError::config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.employed_fraction + self.onlooker_fraction > 1.0 + 1e-9 {
            return Err(RoutingError::config(
                "employed and onlooker fractions exceed the population",
            ));
        }
        if self.employed_count() == 0 {
            return Err(RoutingError::config("hive has no employed bees"));
        }
        if self.max_iterations == 0 {
            return Err(RoutingError::config("max_iterations must be positive"));
        }
        Ok(())
    }
}
