//! Path evaluation.
//!
//! - [`partition`] / [`slice_path`]: greedy capacity partitioning across the fleet
//! - [`RouteEvaluator`]: total distance of a path for TSP or CVRP instances

mod evaluator;
mod partition;

pub use evaluator::{round_to, route_length, sub_route_length, RouteEvaluator};
pub use partition::{partition, slice_path, Partition};
