//! Node type.

use serde::{Deserialize, Serialize};

/// A location in a routing problem.
///
/// Nodes are indexed by their position in the instance (`0..n`). The depot of
/// a capacitated instance is also a `Node`, but it never appears in a path.
/// TSP nodes carry a demand of zero.
///
/// # Examples
///
/// ```
/// use u_hive::models::Node;
///
/// let n = Node::new(1, 41.0, 49.0).with_demand(10.0);
/// assert_eq!(n.id(), 1);
/// assert_eq!(n.demand(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    x: f64,
    y: f64,
    demand: f64,
}

impl Node {
    /// Creates a node with zero demand.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            demand: 0.0,
        }
    }

    /// Sets the quantity this node requires.
    pub fn with_demand(mut self, demand: f64) -> Self {
        self.demand = demand;
        self
    }

    /// Node identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinates as an `(x, y)` pair.
    pub fn point(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Demand at this node.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        crate::distance::euclidean(self.point(), other.point())
    }

    /// Returns the reason this node cannot be used, if any.
    pub(crate) fn defect(&self) -> Option<&'static str> {
        if !self.x.is_finite() || !self.y.is_finite() {
            Some("coordinates must be finite")
        } else if !self.demand.is_finite() || self.demand < 0.0 {
            Some("demand must be finite and non-negative")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let n = Node::new(3, 10.0, 20.0);
        assert_eq!(n.id(), 3);
        assert_eq!(n.x(), 10.0);
        assert_eq!(n.y(), 20.0);
        assert_eq!(n.demand(), 0.0);
        assert_eq!(n.point(), (10.0, 20.0));
    }

    #[test]
    fn test_node_distance() {
        let a = Node::new(0, 0.0, 0.0);
        let b = Node::new(1, 3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_node_defects() {
        assert!(Node::new(0, 1.0, 1.0).defect().is_none());
        assert!(Node::new(0, f64::NAN, 1.0).defect().is_some());
        assert!(Node::new(0, 1.0, f64::INFINITY).defect().is_some());
        assert!(Node::new(0, 1.0, 1.0).with_demand(-1.0).defect().is_some());
    }
}
