//! Validated problem instance.

use crate::distance::DistanceMatrix;
use crate::error::RoutingError;

use super::{Node, Vehicle};

/// Whether an instance is a single closed tour or a capacitated fleet problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One closed tour through every node, no depot.
    Tsp,
    /// Depot-bracketed sub-routes, one per vehicle, split by capacity.
    Cvrp,
}

/// A routing problem ready for search.
///
/// Path indices `0..node_count()` address the non-depot nodes. In CVRP mode
/// the depot occupies the last row of the distance table, index
/// `node_count()`, and never appears in a path.
///
/// # Examples
///
/// ```
/// use u_hive::models::{Instance, Mode, Node, Vehicle};
///
/// let depot = Node::new(0, 0.0, 0.0);
/// let nodes = vec![
///     Node::new(0, 1.0, 0.0).with_demand(5.0),
///     Node::new(1, 2.0, 0.0).with_demand(5.0),
/// ];
/// let instance = Instance::cvrp(depot, nodes, vec![Vehicle::new(0, 10.0)]).unwrap();
/// assert_eq!(instance.mode(), Mode::Cvrp);
/// assert_eq!(instance.node_count(), 2);
/// assert_eq!(instance.depot_index(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    nodes: Vec<Node>,
    depot: Option<Node>,
    vehicles: Vec<Vehicle>,
    demands: Vec<f64>,
    distances: DistanceMatrix,
}

impl Instance {
    /// Builds a TSP instance from node coordinates.
    pub fn tsp(nodes: Vec<Node>) -> Result<Self, RoutingError> {
        check_nodes(&nodes)?;
        let distances = DistanceMatrix::from_nodes(&nodes);
        Ok(Self {
            demands: vec![0.0; nodes.len()],
            nodes,
            depot: None,
            vehicles: Vec::new(),
            distances,
        })
    }

    /// Builds a TSP instance straight from an explicit distance table.
    ///
    /// The instance carries no coordinates; [`nodes`](Self::nodes) is empty.
    pub fn from_matrix(rows: Vec<Vec<f64>>) -> Result<Self, RoutingError> {
        let distances = DistanceMatrix::from_rows(rows)?;
        if distances.size() == 0 {
            return Err(RoutingError::NoNodes);
        }
        Ok(Self {
            demands: vec![0.0; distances.size()],
            nodes: Vec::new(),
            depot: None,
            vehicles: Vec::new(),
            distances,
        })
    }

    /// Builds a capacitated instance.
    ///
    /// Fails when the fleet is empty or when the total demand cannot fit in
    /// the total fleet capacity.
    pub fn cvrp(depot: Node, nodes: Vec<Node>, vehicles: Vec<Vehicle>) -> Result<Self, RoutingError> {
        check_nodes(&nodes)?;
        if let Some(reason) = depot.defect() {
            return Err(RoutingError::InvalidNode {
                index: nodes.len(),
                reason: format!("depot: {reason}"),
            });
        }
        if vehicles.is_empty() {
            return Err(RoutingError::NoVehicles);
        }
        for (index, vehicle) in vehicles.iter().enumerate() {
            if !vehicle.capacity().is_finite() || vehicle.capacity() < 0.0 {
                return Err(RoutingError::InvalidVehicle {
                    index,
                    reason: "capacity must be finite and non-negative".into(),
                });
            }
        }

        let mut locations = nodes.clone();
        locations.push(depot.clone());
        let instance = Self {
            demands: nodes.iter().map(Node::demand).collect(),
            distances: DistanceMatrix::from_nodes(&locations),
            nodes,
            depot: Some(depot),
            vehicles,
        };

        let demand = instance.total_demand();
        let capacity = instance.total_capacity();
        if demand > capacity {
            return Err(RoutingError::InsufficientFleet { demand, capacity });
        }
        Ok(instance)
    }

    /// TSP or CVRP.
    pub fn mode(&self) -> Mode {
        if self.depot.is_some() {
            Mode::Cvrp
        } else {
            Mode::Tsp
        }
    }

    /// Number of path nodes (depot excluded).
    pub fn node_count(&self) -> usize {
        self.demands.len()
    }

    /// Path nodes, empty when built from a distance table.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The depot, in CVRP mode.
    pub fn depot(&self) -> Option<&Node> {
        self.depot.as_ref()
    }

    /// Row of the depot in the distance table, in CVRP mode.
    pub fn depot_index(&self) -> Option<usize> {
        self.depot.as_ref().map(|_| self.node_count())
    }

    /// Fleet in partitioning order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Demand of every path node, indexed like the path.
    pub fn demands(&self) -> &[f64] {
        &self.demands
    }

    /// Sum of all node demands.
    pub fn total_demand(&self) -> f64 {
        self.demands.iter().sum()
    }

    /// Sum of all vehicle capacities.
    pub fn total_capacity(&self) -> f64 {
        self.vehicles.iter().map(Vehicle::capacity).sum()
    }

    /// Distance table over path nodes (and the depot, in CVRP mode).
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}

fn check_nodes(nodes: &[Node]) -> Result<(), RoutingError> {
    if nodes.is_empty() {
        return Err(RoutingError::NoNodes);
    }
    for (index, node) in nodes.iter().enumerate() {
        if let Some(reason) = node.defect() {
            return Err(RoutingError::InvalidNode {
                index,
                reason: reason.into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Node> {
        vec![
            Node::new(0, 0.0, 0.0),
            Node::new(1, 0.0, 1.0),
            Node::new(2, 1.0, 1.0),
            Node::new(3, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_tsp_instance() {
        let inst = Instance::tsp(square()).expect("valid");
        assert_eq!(inst.mode(), Mode::Tsp);
        assert_eq!(inst.node_count(), 4);
        assert_eq!(inst.depot_index(), None);
        assert_eq!(inst.distances().size(), 4);
        assert!((inst.distances().get(0, 2) - 2f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_empty_nodes_rejected() {
        assert!(matches!(Instance::tsp(vec![]), Err(RoutingError::NoNodes)));
        let depot = Node::new(0, 0.0, 0.0);
        assert!(matches!(
            Instance::cvrp(depot, vec![], vec![Vehicle::new(0, 1.0)]),
            Err(RoutingError::NoNodes)
        ));
    }

    #[test]
    fn test_bad_coordinate_rejected() {
        let nodes = vec![Node::new(0, 0.0, 0.0), Node::new(1, f64::NAN, 0.0)];
        assert!(matches!(
            Instance::tsp(nodes),
            Err(RoutingError::InvalidNode { index: 1, .. })
        ));
    }

    #[test]
    fn test_cvrp_instance() {
        let nodes = vec![
            Node::new(0, 1.0, 0.0).with_demand(5.0),
            Node::new(1, 2.0, 0.0).with_demand(6.0),
        ];
        let vehicles = vec![Vehicle::new(0, 10.0), Vehicle::new(1, 10.0)];
        let inst = Instance::cvrp(Node::new(9, 0.0, 0.0), nodes, vehicles).expect("valid");
        assert_eq!(inst.mode(), Mode::Cvrp);
        assert_eq!(inst.depot_index(), Some(2));
        assert_eq!(inst.distances().size(), 3);
        assert!((inst.distances().get(2, 1) - 2.0).abs() < 1e-10);
        assert_eq!(inst.demands(), &[5.0, 6.0]);
        assert_eq!(inst.total_demand(), 11.0);
        assert_eq!(inst.total_capacity(), 20.0);
    }

    #[test]
    fn test_cvrp_without_vehicles() {
        let nodes = vec![Node::new(0, 1.0, 0.0).with_demand(1.0)];
        assert!(matches!(
            Instance::cvrp(Node::new(0, 0.0, 0.0), nodes, vec![]),
            Err(RoutingError::NoVehicles)
        ));
    }

    #[test]
    fn test_cvrp_insufficient_fleet() {
        let nodes = vec![
            Node::new(0, 1.0, 0.0).with_demand(5.0),
            Node::new(1, 2.0, 0.0).with_demand(6.0),
        ];
        let result = Instance::cvrp(Node::new(0, 0.0, 0.0), nodes, vec![Vehicle::new(0, 10.0)]);
        match result {
            Err(RoutingError::InsufficientFleet { demand, capacity }) => {
                assert_eq!(demand, 11.0);
                assert_eq!(capacity, 10.0);
            }
            other => panic!("expected InsufficientFleet, got {other:?}"),
        }
    }

    #[test]
    fn test_cvrp_exact_fit_accepted() {
        let nodes = vec![
            Node::new(0, 1.0, 0.0).with_demand(4.0),
            Node::new(1, 2.0, 0.0).with_demand(6.0),
        ];
        let inst = Instance::cvrp(Node::new(0, 0.0, 0.0), nodes, vec![Vehicle::new(0, 10.0)])
            .expect("valid");
        assert_eq!(inst.total_demand(), inst.total_capacity());
    }

    #[test]
    fn test_cvrp_negative_capacity() {
        let nodes = vec![Node::new(0, 1.0, 0.0)];
        let result = Instance::cvrp(
            Node::new(0, 0.0, 0.0),
            nodes,
            vec![Vehicle::new(0, 5.0), Vehicle::new(1, -1.0)],
        );
        assert!(matches!(
            result,
            Err(RoutingError::InvalidVehicle { index: 1, .. })
        ));
    }

    #[test]
    fn test_from_matrix() {
        let inst = Instance::from_matrix(vec![
            vec![0.0, 2.0, 3.0],
            vec![2.0, 0.0, 4.0],
            vec![3.0, 4.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(inst.mode(), Mode::Tsp);
        assert_eq!(inst.node_count(), 3);
        assert!(inst.nodes().is_empty());
        assert_eq!(inst.distances().get(1, 2), 4.0);
    }

    #[test]
    fn test_from_matrix_empty() {
        assert!(matches!(
            Instance::from_matrix(vec![]),
            Err(RoutingError::NoNodes)
        ));
    }
}
