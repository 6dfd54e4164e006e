//! Bee colony search loop.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::error::RoutingError;
use crate::evaluation::{Partition, RouteEvaluator};
use crate::models::Instance;
use crate::operators::{create_rng, pair_swap, random_path, sample_positions};

use super::bee::{Bee, Role};
use super::config::{AbcConfig, MutationKind};

/// A strict improvement of the hive's global best.
#[derive(Debug, Clone, PartialEq)]
pub struct Improvement {
    /// Iteration (1-based) in which the improvement happened.
    pub iteration: usize,
    /// New best distance.
    pub distance: f64,
    /// Role of the bee that found it.
    pub role: Role,
}

/// Outcome of a bee colony run.
#[derive(Debug, Clone)]
pub struct AbcResult {
    /// Best path found.
    pub best_path: Vec<usize>,
    /// Distance of [`best_path`](Self::best_path).
    pub best_distance: f64,
    /// Global best distance after each iteration; non-increasing.
    pub history: Vec<f64>,
    /// Iteration (1-based) in which the best path was found.
    pub iteration_found: usize,
    /// Role of the bee that found the best path.
    pub found_by: Role,
    /// Every strict improvement, in order.
    pub improvements: Vec<Improvement>,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl AbcResult {
    /// Per-vehicle breakdown of the best path.
    pub fn partition(&self, instance: &Instance) -> Partition {
        RouteEvaluator::new(instance).partition(&self.best_path)
    }
}

/// Runs the Artificial Bee Colony search.
///
/// # Examples
///
/// ```
/// use u_hive::models::{Instance, Node};
/// use u_hive::abc::{AbcConfig, AbcRunner};
///
/// let nodes = vec![
///     Node::new(0, 0.0, 0.0),
///     Node::new(1, 0.0, 1.0),
///     Node::new(2, 1.0, 1.0),
///     Node::new(3, 1.0, 0.0),
/// ];
/// let instance = Instance::tsp(nodes).unwrap();
/// let config = AbcConfig::default()
///     .with_population_size(10)
///     .with_max_iterations(50)
///     .with_seed(42);
///
/// let result = AbcRunner::run(&instance, &config).unwrap();
/// assert!((result.best_distance - 4.0).abs() < 1e-9);
/// assert_eq!(result.history.len(), 50);
/// ```
pub struct AbcRunner;

impl AbcRunner {
    /// Searches `instance` for `config.max_iterations` iterations.
    pub fn run(instance: &Instance, config: &AbcConfig) -> Result<AbcResult, RoutingError> {
        config.validate()?;
        let started = Instant::now();
        let mut rng = create_rng(config.seed);
        let evaluator = RouteEvaluator::new(instance);

        info!(
            nodes = instance.node_count(),
            mode = ?instance.mode(),
            employed = config.employed_count(),
            onlookers = config.onlooker_count(),
            iterations = config.max_iterations,
            "starting bee colony search"
        );

        let mut hive = initial_hive(instance.node_count(), config, &evaluator, &mut rng);
        let onlookers = hive.iter().filter(|b| b.role() == Role::Onlooker).count();
        let mut best = GlobalBest::default();
        let mut history = Vec::with_capacity(config.max_iterations);

        for iteration in 1..=config.max_iterations {
            employed_phase(&mut hive, &mut best, iteration, config, &evaluator, &mut rng);
            onlooker_phase(onlookers, &mut best, iteration, &evaluator, &mut rng);
            history.push(best.distance);
        }

        let elapsed = started.elapsed();
        let parts = evaluator.partition(&best.path);
        if !parts.is_complete() {
            warn!(
                unplaced = parts.unplaced().len(),
                "best path leaves nodes outside the fleet"
            );
        }
        info!(
            distance = best.distance,
            iteration = best.iteration,
            role = ?best.role,
            elapsed_ms = elapsed.as_millis() as u64,
            "bee colony search finished"
        );

        Ok(AbcResult {
            best_path: best.path,
            best_distance: best.distance,
            history,
            iteration_found: best.iteration,
            found_by: best.role,
            improvements: best.improvements,
            elapsed,
        })
    }
}

struct GlobalBest {
    path: Vec<usize>,
    distance: f64,
    iteration: usize,
    role: Role,
    improvements: Vec<Improvement>,
}

impl Default for GlobalBest {
    fn default() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
            iteration: 0,
            role: Role::Employed,
            improvements: Vec::new(),
        }
    }
}

impl GlobalBest {
    /// Accepts strictly shorter paths only.
    fn improve(&mut self, iteration: usize, role: Role, path: &[usize], distance: f64) {
        if distance >= self.distance {
            return;
        }
        debug!(iteration, ?role, distance, "new global best");
        self.path = path.to_vec();
        self.distance = distance;
        self.iteration = iteration;
        self.role = role;
        self.improvements.push(Improvement {
            iteration,
            distance,
            role,
        });
    }
}

fn initial_hive<R: Rng>(
    n: usize,
    config: &AbcConfig,
    evaluator: &RouteEvaluator<'_>,
    rng: &mut R,
) -> Vec<Bee> {
    let mut hive: Vec<Bee> = (0..config.onlooker_count()).map(|_| Bee::onlooker()).collect();
    for _ in 0..config.employed_count() {
        let path = random_path(n, rng);
        let distance = evaluator.evaluate(&path);
        hive.push(Bee::employed(path, distance));
    }
    hive
}

/// Proposes a pair-swap neighbor of `path`, returning it with its distance.
fn propose<R: Rng>(
    path: &[usize],
    distance: f64,
    mutation: MutationKind,
    evaluator: &RouteEvaluator<'_>,
    rng: &mut R,
) -> (Vec<usize>, f64) {
    let Some([i, j]) = sample_positions::<_, 2>(path.len(), rng) else {
        return (path.to_vec(), distance);
    };
    let swapped = pair_swap(path, i, j);
    let swapped_distance = evaluator.evaluate(&swapped);
    match mutation {
        MutationKind::Swap => (swapped, swapped_distance),
        MutationKind::Sigmoid => {
            let keep = 1.0 / (1.0 + (-swapped_distance).exp());
            if keep > rng.random::<f64>() {
                (swapped, swapped_distance)
            } else {
                (path.to_vec(), distance)
            }
        }
    }
}

/// Employed bees refine their paths, scouts restart, then the worst employed
/// bees are sent scouting.
fn employed_phase<R: Rng>(
    hive: &mut [Bee],
    best: &mut GlobalBest,
    iteration: usize,
    config: &AbcConfig,
    evaluator: &RouteEvaluator<'_>,
    rng: &mut R,
) {
    let mut ranked: Vec<(usize, f64)> = Vec::new();

    for (idx, bee) in hive.iter_mut().enumerate() {
        match bee.role() {
            Role::Employed => {
                let (path, distance) =
                    propose(bee.path(), bee.distance(), config.mutation, evaluator, rng);
                bee.offer(path, distance, config.limit);
                best.improve(iteration, Role::Employed, bee.path(), bee.distance());
                ranked.push((idx, bee.distance()));
            }
            Role::Scout => {
                let path = random_path(bee.path().len(), rng);
                let distance = evaluator.evaluate(&path);
                trace!(iteration, bee = idx, distance, "scout restarted");
                bee.restart(path, distance);
            }
            Role::Onlooker => {}
        }
    }

    // Worst first; equal distances keep hive order.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    for &(idx, _) in ranked.iter().take(config.scout_count()) {
        hive[idx].force_scout();
    }
}

/// Each onlooker perturbs the current global best and keeps strict
/// improvements, in hive order.
fn onlooker_phase<R: Rng>(
    onlookers: usize,
    best: &mut GlobalBest,
    iteration: usize,
    evaluator: &RouteEvaluator<'_>,
    rng: &mut R,
) {
    for _ in 0..onlookers {
        let Some([i, j]) = sample_positions::<_, 2>(best.path.len(), rng) else {
            return;
        };
        let candidate = pair_swap(&best.path, i, j);
        let distance = evaluator.evaluate(&candidate);
        best.improve(iteration, Role::Onlooker, &candidate, distance);
    }
}
