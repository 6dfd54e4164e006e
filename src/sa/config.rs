//! Simulated annealing configuration.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Perturbation applied to the current path each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveKind {
    /// Exchange two random positions.
    #[default]
    PairSwap,
    /// Rotate three random positions.
    TripleRotate,
}

/// Starting path of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InitialPath {
    /// The identity order `0..n`.
    #[default]
    Ordered,
    /// A uniformly random permutation.
    Shuffled,
}

/// Configuration parameters for simulated annealing.
///
/// The temperature runs from `10^high_exponent` down to `10^low_exponent`
/// over `iterations` log-spaced steps.
///
/// # Examples
///
/// ```
/// use u_hive::sa::{MoveKind, SaConfig};
///
/// let config = SaConfig::variant(MoveKind::TripleRotate, 10.0)
///     .with_iterations(5000)
///     .with_seed(7);
/// assert_eq!(config.high_exponent, 10.0);
/// assert_eq!(config.move_kind, MoveKind::TripleRotate);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaConfig {
    /// Number of temperature steps (one proposal each).
    pub iterations: usize,
    /// Exponent of the final temperature.
    pub low_exponent: f64,
    /// Exponent of the initial temperature.
    pub high_exponent: f64,
    /// Perturbation kind.
    pub move_kind: MoveKind,
    /// Starting path.
    pub initial: InitialPath,
    /// Random seed (None seeds from the OS).
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            low_exponent: 0.0,
            high_exponent: 5.0,
            move_kind: MoveKind::PairSwap,
            initial: InitialPath::Ordered,
            seed: None,
        }
    }
}

impl SaConfig {
    /// A configuration cooling from `10^high_exponent` to 1 with the given move.
    pub fn variant(move_kind: MoveKind, high_exponent: f64) -> Self {
        Self {
            move_kind,
            high_exponent,
            ..Self::default()
        }
    }

    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the temperature exponent range.
    pub fn with_exponents(mut self, low: f64, high: f64) -> Self {
        self.low_exponent = low;
        self.high_exponent = high;
        self
    }

    /// Sets the perturbation kind.
    pub fn with_move(mut self, move_kind: MoveKind) -> Self {
        self.move_kind = move_kind;
        self
    }

    /// Sets the starting path.
    pub fn with_initial(mut self, initial: InitialPath) -> Self {
        self.initial = initial;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the schedule is well formed.
    pub fn validate(&self) -> Result<(), RoutingError> {
        if self.iterations == 0 {
            return Err(RoutingError::config("iterations must be positive"));
        }
        if !self.low_exponent.is_finite() || !self.high_exponent.is_finite() {
            return Err(RoutingError::config("temperature exponents must be finite"));
        }
        if self.low_exponent > self.high_exponent {
            return Err(RoutingError::config(format!(
                "low_exponent {} is above high_exponent {}",
                self.low_exponent, self.high_exponent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SaConfig::default();
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.low_exponent, 0.0);
        assert_eq!(config.high_exponent, 5.0);
        assert_eq!(config.move_kind, MoveKind::PairSwap);
        assert_eq!(config.initial, InitialPath::Ordered);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_variant() {
        let config = SaConfig::variant(MoveKind::PairSwap, 10.0);
        assert_eq!(config.high_exponent, 10.0);
        assert_eq!(config.low_exponent, 0.0);
    }

    #[test]
    fn test_inverted_exponents_rejected() {
        let config = SaConfig::default().with_exponents(3.0, 1.0);
        assert!(matches!(
            config.validate(),
            Err(RoutingError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(SaConfig::default().with_iterations(0).validate().is_err());
    }

    #[test]
    fn test_deserialize() {
        let config: SaConfig =
            serde_json::from_str(r#"{"iterations": 50, "move_kind": "TripleRotate"}"#)
                .expect("valid json");
        assert_eq!(config.iterations, 50);
        assert_eq!(config.move_kind, MoveKind::TripleRotate);
        assert_eq!(config.high_exponent, 5.0);
    }
}
