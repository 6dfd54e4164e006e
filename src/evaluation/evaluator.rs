//! Path scoring for closed tours and capacitated sub-routes.

use crate::distance::DistanceMatrix;
use crate::models::{Instance, Mode};

use super::partition::{partition, Partition};

/// Length of the closed cycle `path[0] → … → path[n-1] → path[0]`.
///
/// Invariant under rotation and, for a symmetric table, under reversal.
///
/// ```
/// use u_hive::models::Node;
/// use u_hive::distance::DistanceMatrix;
/// use u_hive::evaluation::route_length;
///
/// let nodes = vec![
///     Node::new(0, 0.0, 0.0),
///     Node::new(1, 0.0, 1.0),
///     Node::new(2, 1.0, 1.0),
///     Node::new(3, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// assert!((route_length(&[0, 1, 2, 3], &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn route_length(path: &[usize], distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return 0.0;
    };
    let inner: f64 = path.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    inner + distances.get(last, first)
}

/// Length of `depot → route[0] → … → route[n-1] → depot`.
///
/// An empty route has length zero.
pub fn sub_route_length(route: &[usize], depot: usize, distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };
    let inner: f64 = route.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    distances.get(depot, first) + inner + distances.get(last, depot)
}

/// Rounds a distance for display. Never feed the result back into a search.
///
/// Negative `places` round to tens, hundreds, and so on.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Scores candidate paths against one instance.
///
/// In TSP mode a path is scored as a closed cycle. In CVRP mode the path is
/// partitioned across the fleet and each depot-bracketed slice is summed;
/// nodes that do not fit any vehicle are costed as one extra depot-bracketed
/// tail, so leaving nodes unplaced never shortens a path.
///
/// Evaluation is a pure function of the path and the instance.
///
/// # Examples
///
/// ```
/// use u_hive::models::{Instance, Node, Vehicle};
/// use u_hive::evaluation::RouteEvaluator;
///
/// let nodes = vec![
///     Node::new(0, 1.0, 0.0).with_demand(10.0),
///     Node::new(1, 2.0, 0.0).with_demand(10.0),
///     Node::new(2, 3.0, 0.0).with_demand(10.0),
/// ];
/// let fleet = vec![Vehicle::new(0, 20.0), Vehicle::new(1, 20.0)];
/// let inst = Instance::cvrp(Node::new(0, 0.0, 0.0), nodes, fleet).unwrap();
///
/// let eval = RouteEvaluator::new(&inst);
/// // [0, 1] then [2]: (1 + 1 + 2) + (3 + 3) = 10
/// assert!((eval.evaluate(&[0, 1, 2]) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Total distance of `path` under the instance's mode.
    pub fn evaluate(&self, path: &[usize]) -> f64 {
        let distances = self.instance.distances();
        match (self.instance.mode(), self.instance.depot_index()) {
            (Mode::Cvrp, Some(depot)) => {
                let parts = self.partition(path);
                let mut total = 0.0;
                let mut start = 0;
                for &cut in parts.cut_points() {
                    total += sub_route_length(&path[start..cut], depot, distances);
                    start = cut;
                }
                total + sub_route_length(&path[start..], depot, distances)
            }
            _ => route_length(path, distances),
        }
    }

    /// Partitions `path` across the instance's fleet.
    pub fn partition(&self, path: &[usize]) -> Partition {
        partition(path, self.instance.demands(), self.instance.vehicles())
    }

    /// Length of every vehicle's sub-route, in fleet order.
    ///
    /// Empty in TSP mode.
    pub fn sub_route_lengths(&self, path: &[usize]) -> Vec<f64> {
        let Some(depot) = self.instance.depot_index() else {
            return Vec::new();
        };
        self.partition(path)
            .routes()
            .iter()
            .map(|r| sub_route_length(r, depot, self.instance.distances()))
            .collect()
    }
}
