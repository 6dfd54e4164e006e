//! Domain model types for the routing problems.
//!
//! Nodes with coordinates and demands, vehicles with capacities, and the
//! validated [`Instance`] that ties them to a distance table.

mod instance;
mod node;
mod vehicle;

pub use instance::{Instance, Mode};
pub use node::Node;
pub use vehicle::Vehicle;
