//! Vehicle type with capacity.

use serde::{Deserialize, Serialize};

/// A vehicle of the fleet.
///
/// Vehicles are consumed in their fleet order by the capacity partitioner:
/// the first vehicle serves the first slice of a path, and so on.
///
/// # Examples
///
/// ```
/// use u_hive::models::Vehicle;
///
/// let v = Vehicle::new(0, 200.0);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    pub fn new(id: usize, capacity: f64) -> Self {
        Self { id, capacity }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum cumulative demand this vehicle may serve.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}
