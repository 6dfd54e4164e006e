//! Simulated Annealing (SA).
//!
//! A single-trajectory search that perturbs the current path with a pair
//! swap or a three-position rotation and accepts worsening proposals with a
//! probability that falls as the log-spaced temperature schedule cools.
//!
//! # References
//!
//! Kirkpatrick, S., Gelatt, C.D., Vecchi, M.P. (1983). "Optimization by
//! Simulated Annealing", *Science* 220(4598), 671-680.

mod config;
mod runner;
mod schedule;

pub use config::{InitialPath, MoveKind, SaConfig};
pub use runner::{SaResult, SaRunner};
pub use schedule::{acceptance_probability, TemperatureSchedule};
