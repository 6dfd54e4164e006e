//! Greedy capacity partitioning of a path into per-vehicle sub-routes.
//!
//! # Algorithm
//!
//! Walks the path once, filling vehicles in fleet order. A node joins the
//! current vehicle unless its demand would push the load above capacity; in
//! that case the vehicle is closed and the node becomes the first candidate
//! for the next vehicle. A load equal to capacity is allowed.
//!
//! Nodes left over after the last vehicle closes are reported as unplaced
//! rather than dropped.
//!
//! # Complexity
//!
//! O(n + m) for n path nodes and m vehicles.

use crate::models::Vehicle;

/// Result of partitioning a path across the fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    cut_points: Vec<usize>,
    loads: Vec<f64>,
    routes: Vec<Vec<usize>>,
    unplaced: Vec<usize>,
}

impl Partition {
    /// Exclusive end position in the path of each vehicle's slice.
    ///
    /// One entry per vehicle, non-decreasing. Vehicle `k` serves
    /// `path[cut_points[k - 1]..cut_points[k]]` (starting at 0 for `k = 0`).
    pub fn cut_points(&self) -> &[usize] {
        &self.cut_points
    }

    /// Cumulative demand served by each vehicle.
    pub fn loads(&self) -> &[f64] {
        &self.loads
    }

    /// Node sequence of each vehicle, depot excluded. May contain empty routes.
    pub fn routes(&self) -> &[Vec<usize>] {
        &self.routes
    }

    /// Nodes that did not fit in any vehicle, in path order.
    pub fn unplaced(&self) -> &[usize] {
        &self.unplaced
    }

    /// Returns `true` if every path node was assigned to a vehicle.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Number of vehicles that received at least one node.
    pub fn vehicles_used(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }
}

/// Partitions `path` into contiguous capacity-respecting slices.
///
/// # Arguments
///
/// * `path`: Node indices in visiting order (depot excluded)
/// * `demands`: Demand of every node, indexed by node
/// * `vehicles`: Fleet, in the order vehicles are filled
///
/// # Examples
///
/// ```
/// use u_hive::models::Vehicle;
/// use u_hive::evaluation::partition;
///
/// let demands = [4.0, 4.0, 4.0];
/// let fleet = [Vehicle::new(0, 8.0), Vehicle::new(1, 8.0)];
/// let p = partition(&[2, 0, 1], &demands, &fleet);
/// assert_eq!(p.routes(), &[vec![2, 0], vec![1]]);
/// assert_eq!(p.loads(), &[8.0, 4.0]);
/// assert!(p.is_complete());
/// ```
pub fn partition(path: &[usize], demands: &[f64], vehicles: &[Vehicle]) -> Partition {
    let mut cut_points = Vec::with_capacity(vehicles.len());
    let mut loads = Vec::with_capacity(vehicles.len());
    let mut pos = 0;

    for vehicle in vehicles {
        let mut load = 0.0;
        while pos < path.len() {
            let demand = demands[path[pos]];
            if load + demand > vehicle.capacity() {
                break;
            }
            load += demand;
            pos += 1;
        }
        cut_points.push(pos);
        loads.push(load);
    }

    let mut routes = slice_path(&cut_points, path);
    routes.truncate(vehicles.len());

    Partition {
        cut_points,
        loads,
        routes,
        unplaced: path[pos..].to_vec(),
    }
}

/// Splits `path` at the given cut points into contiguous sub-sequences.
///
/// Cut points are exclusive end positions; the first slice starts at 0.
/// Positions past the end of the path are clamped. If the last cut point
/// leaves a tail, the tail is appended as a final slice.
///
/// # Examples
///
/// ```
/// use u_hive::evaluation::slice_path;
///
/// let subs = slice_path(&[2, 2, 3], &[7, 8, 9, 10, 11]);
/// assert_eq!(subs, vec![vec![7, 8], vec![], vec![9], vec![10, 11]]);
/// ```
pub fn slice_path(cut_points: &[usize], path: &[usize]) -> Vec<Vec<usize>> {
    let mut subs = Vec::with_capacity(cut_points.len() + 1);
    let mut start = 0;
    for &cut in cut_points {
        let end = cut.clamp(start, path.len());
        subs.push(path[start..end].to_vec());
        start = end;
    }
    if start < path.len() {
        subs.push(path[start..].to_vec());
    }
    subs
}
