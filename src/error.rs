//! Error type shared by instance construction, configuration, and the runners.

use thiserror::Error;

/// Errors raised before any search iteration begins.
///
/// Partitioning never produces an error: a path that does not fit the fleet
/// is reported through [`Partition::unplaced`](crate::evaluation::Partition::unplaced).
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("instance has no nodes")]
    NoNodes,

    #[error("capacitated instance has no vehicles")]
    NoVehicles,

    #[error("node {index} is invalid: {reason}")]
    InvalidNode { index: usize, reason: String },

    #[error("vehicle {index} is invalid: {reason}")]
    InvalidVehicle { index: usize, reason: String },

    #[error("total demand {demand} exceeds total fleet capacity {capacity}")]
    InsufficientFleet { demand: f64, capacity: f64 },

    #[error("invalid distance table: {reason}")]
    InvalidMatrix { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl RoutingError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
