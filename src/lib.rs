//! # u-hive
//!
//! Route optimization for the Traveling Salesman Problem (TSP) and the
//! Capacitated Vehicle Routing Problem (CVRP) with two metaheuristics:
//! Artificial Bee Colony and Simulated Annealing.
//!
//! A solution is a permutation of node indices. In CVRP mode the permutation
//! is split greedily across the fleet, in fleet order, into depot-bracketed
//! sub-routes that respect each vehicle's capacity.
//!
//! ## Modules
//!
//! - [`models`]: Nodes, vehicles, and the validated [`Instance`](models::Instance)
//! - [`distance`]: Euclidean distance and the distance matrix
//! - [`evaluation`]: Capacity partitioning and path scoring
//! - [`operators`]: Pair-swap and triple-rotate moves, seeded randomness
//! - [`abc`]: Artificial Bee Colony search
//! - [`sa`]: Simulated Annealing search
//! - [`source`]: CSV loaders for nodes and vehicles
//!
//! ## Example
//!
//! ```
//! use u_hive::abc::{AbcConfig, AbcRunner};
//! use u_hive::models::{Instance, Node, Vehicle};
//!
//! let depot = Node::new(0, 0.0, 0.0);
//! let nodes = vec![
//!     Node::new(0, 1.0, 0.0).with_demand(4.0),
//!     Node::new(1, 1.0, 1.0).with_demand(4.0),
//!     Node::new(2, -1.0, 0.0).with_demand(4.0),
//!     Node::new(3, -1.0, -1.0).with_demand(4.0),
//! ];
//! let fleet = vec![Vehicle::new(0, 8.0), Vehicle::new(1, 8.0)];
//! let instance = Instance::cvrp(depot, nodes, fleet).unwrap();
//!
//! let config = AbcConfig::default().with_population_size(20).with_seed(1);
//! let result = AbcRunner::run(&instance, &config).unwrap();
//! let breakdown = result.partition(&instance);
//! assert!(breakdown.is_complete());
//! assert_eq!(breakdown.routes().len(), 2);
//! ```

pub mod abc;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod operators;
pub mod sa;
pub mod source;

pub use error::RoutingError;
