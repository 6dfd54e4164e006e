//! Simulated annealing search loop.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::RoutingError;
use crate::evaluation::{Partition, RouteEvaluator};
use crate::models::Instance;
use crate::operators::{
    create_rng, ordered_path, pair_swap, random_path, sample_positions, triple_rotate,
};

use super::config::{InitialPath, MoveKind, SaConfig};
use super::schedule::{acceptance_probability, TemperatureSchedule};

/// Outcome of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Shortest path visited.
    pub best_path: Vec<usize>,
    /// Distance of [`best_path`](Self::best_path).
    pub best_distance: f64,
    /// Trajectory state when the schedule ran out.
    pub final_path: Vec<usize>,
    /// Distance of [`final_path`](Self::final_path).
    pub final_distance: f64,
    /// Best distance after each iteration; non-increasing.
    pub history: Vec<f64>,
    /// Current distance after each iteration.
    pub trajectory: Vec<f64>,
    /// Iteration (1-based) in which the best path was reached; 0 for the start path.
    pub iteration_found: usize,
    /// Number of accepted proposals.
    pub accepted: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl SaResult {
    /// Per-vehicle breakdown of the best path.
    pub fn partition(&self, instance: &Instance) -> Partition {
        RouteEvaluator::new(instance).partition(&self.best_path)
    }
}

/// Runs simulated annealing over a single trajectory.
///
/// Each iteration proposes a copy of the current path, scores it, and only
/// commits the copy when the Metropolis test accepts it, so a rejected
/// proposal never leaks into the next iteration.
///
/// # Examples
///
/// ```
/// use u_hive::models::{Instance, Node};
/// use u_hive::sa::{SaConfig, SaRunner};
///
/// let nodes = vec![
///     Node::new(0, 0.0, 0.0),
///     Node::new(1, 1.0, 1.0),
///     Node::new(2, 0.0, 1.0),
///     Node::new(3, 1.0, 0.0),
/// ];
/// let instance = Instance::tsp(nodes).unwrap();
/// let config = SaConfig::default().with_iterations(2000).with_seed(3);
///
/// let result = SaRunner::run(&instance, &config).unwrap();
/// assert!((result.best_distance - 4.0).abs() < 1e-9);
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Anneals `instance` over the configured schedule.
    pub fn run(instance: &Instance, config: &SaConfig) -> Result<SaResult, RoutingError> {
        config.validate()?;
        let started = Instant::now();
        let mut rng = create_rng(config.seed);
        let evaluator = RouteEvaluator::new(instance);
        let schedule = TemperatureSchedule::log_spaced(
            config.low_exponent,
            config.high_exponent,
            config.iterations,
        );

        info!(
            nodes = instance.node_count(),
            mode = ?instance.mode(),
            iterations = config.iterations,
            move_kind = ?config.move_kind,
            "starting simulated annealing"
        );

        let n = instance.node_count();
        let mut current = match config.initial {
            InitialPath::Ordered => ordered_path(n),
            InitialPath::Shuffled => random_path(n, &mut rng),
        };
        let mut current_distance = evaluator.evaluate(&current);
        let mut best = current.clone();
        let mut best_distance = current_distance;
        let mut iteration_found = 0;
        let mut accepted = 0;
        let mut history = Vec::with_capacity(schedule.len());
        let mut trajectory = Vec::with_capacity(schedule.len());

        for (step, temperature) in schedule.iter().enumerate() {
            let iteration = step + 1;
            if let Some(candidate) = propose(&current, config.move_kind, &mut rng) {
                let candidate_distance = evaluator.evaluate(&candidate);
                let p = acceptance_probability(current_distance, candidate_distance, temperature);
                if rng.random::<f64>() < p {
                    current = candidate;
                    current_distance = candidate_distance;
                    accepted += 1;
                    if current_distance < best_distance {
                        debug!(iteration, temperature, distance = current_distance, "new best");
                        best.clone_from(&current);
                        best_distance = current_distance;
                        iteration_found = iteration;
                    }
                }
            }
            history.push(best_distance);
            trajectory.push(current_distance);
        }

        let elapsed = started.elapsed();
        let parts = evaluator.partition(&best);
        if !parts.is_complete() {
            warn!(
                unplaced = parts.unplaced().len(),
                "best path leaves nodes outside the fleet"
            );
        }
        info!(
            best = best_distance,
            last = current_distance,
            accepted,
            iteration = iteration_found,
            elapsed_ms = elapsed.as_millis() as u64,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best_path: best,
            best_distance,
            final_path: current,
            final_distance: current_distance,
            history,
            trajectory,
            iteration_found,
            accepted,
            elapsed,
        })
    }
}

/// A perturbed copy of `path`, or `None` if the path is too short for the move.
fn propose<R: Rng>(path: &[usize], move_kind: MoveKind, rng: &mut R) -> Option<Vec<usize>> {
    match move_kind {
        MoveKind::PairSwap => {
            let [a, b] = sample_positions::<_, 2>(path.len(), rng)?;
            Some(pair_swap(path, a, b))
        }
        MoveKind::TripleRotate => {
            let [a, b, c] = sample_positions::<_, 3>(path.len(), rng)?;
            Some(triple_rotate(path, a, b, c))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Node, Vehicle};

    fn ring(n: usize) -> Instance {
        let nodes = (0..n)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / n as f64;
                Node::new(i, 10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect();
        Instance::tsp(nodes).expect("valid")
    }

    fn shuffled_ring_config() -> SaConfig {
        SaConfig::default()
            .with_iterations(3000)
            .with_initial(InitialPath::Shuffled)
            .with_seed(11)
    }

    #[test]
    fn test_history_lengths() {
        let result = SaRunner::run(&ring(8), &shuffled_ring_config()).expect("runs");
        assert_eq!(result.history.len(), 3000);
        assert_eq!(result.trajectory.len(), 3000);
        assert_eq!(*result.trajectory.last().expect("non-empty"), result.final_distance);
    }

    #[test]
    fn test_best_never_regresses() {
        let result = SaRunner::run(&ring(10), &shuffled_ring_config()).expect("runs");
        for w in result.history.windows(2) {
            assert!(w[1] <= w[0]);
        }
        assert!(result.best_distance <= result.final_distance);
        for d in &result.trajectory {
            assert!(result.best_distance <= *d);
        }
    }

    #[test]
    fn test_reported_distances_match_paths() {
        let inst = ring(9);
        let result = SaRunner::run(&inst, &shuffled_ring_config()).expect("runs");
        let eval = RouteEvaluator::new(&inst);
        assert_eq!(eval.evaluate(&result.best_path), result.best_distance);
        assert_eq!(eval.evaluate(&result.final_path), result.final_distance);
    }

    #[test]
    fn test_trajectory_changes_only_on_accept() {
        let result = SaRunner::run(&ring(7), &shuffled_ring_config()).expect("runs");
        let changes = result
            .trajectory
            .windows(2)
            .filter(|w| w[0] != w[1])
            .count();
        assert!(changes <= result.accepted);
    }

    #[test]
    fn test_triple_rotate_keeps_permutation() {
        let config = shuffled_ring_config().with_move(MoveKind::TripleRotate);
        let result = SaRunner::run(&ring(8), &config).expect("runs");
        let mut sorted = result.final_path.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, ordered_path(8));
    }

    #[test]
    fn test_ordered_start_on_ring_is_optimal() {
        // The identity order already traces the ring, so the best stays put.
        let inst = ring(6);
        let config = SaConfig::default().with_iterations(200).with_seed(5);
        let start = RouteEvaluator::new(&inst).evaluate(&ordered_path(6));
        let result = SaRunner::run(&inst, &config).expect("runs");
        assert!((result.best_distance - start).abs() < 1e-9);
    }

    #[test]
    fn test_short_path_skips_moves() {
        let inst = Instance::tsp(vec![Node::new(0, 0.0, 0.0), Node::new(1, 1.0, 0.0)])
            .expect("valid");
        let config = SaConfig::default()
            .with_move(MoveKind::TripleRotate)
            .with_iterations(10)
            .with_seed(1);
        let result = SaRunner::run(&inst, &config).expect("runs");
        assert_eq!(result.accepted, 0);
        assert_eq!(result.final_path, vec![0, 1]);
    }

    #[test]
    fn test_cvrp_anneal() {
        let nodes = (0..8)
            .map(|i| {
                let x = (i % 4) as f64 * 2.0 - 3.0;
                let y = (i / 4) as f64 * 4.0 - 2.0;
                Node::new(i, x, y).with_demand(3.0)
            })
            .collect();
        let fleet = vec![Vehicle::new(0, 12.0), Vehicle::new(1, 12.0)];
        let inst = Instance::cvrp(Node::new(0, 0.0, 0.0), nodes, fleet).expect("valid");
        let config = SaConfig::default().with_iterations(2000).with_seed(9);
        let result = SaRunner::run(&inst, &config).expect("runs");
        let start = RouteEvaluator::new(&inst).evaluate(&ordered_path(8));
        assert!(result.best_distance <= start);
        assert!(result.partition(&inst).is_complete());
    }
}
