use u_hive::abc::{AbcConfig, AbcRunner};
use u_hive::evaluation::{partition, slice_path};
use u_hive::models::{Instance, Node, Vehicle};
use u_hive::sa::{InitialPath, MoveKind, SaConfig, SaRunner};
use u_hive::source;
use u_hive::RoutingError;

fn unit_square() -> Instance {
    Instance::tsp(vec![
        Node::new(0, 0.0, 0.0),
        Node::new(1, 0.0, 1.0),
        Node::new(2, 1.0, 1.0),
        Node::new(3, 1.0, 0.0),
    ])
    .expect("valid")
}

fn clustered_cvrp() -> Instance {
    // Two clusters on either side of the depot.
    let coords = [
        (10.0, 1.0),
        (-10.0, 1.0),
        (11.0, 0.0),
        (-11.0, 0.0),
        (10.0, -1.0),
        (-10.0, -1.0),
    ];
    let nodes = coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Node::new(i, x, y).with_demand(5.0))
        .collect();
    let fleet = vec![Vehicle::new(0, 15.0), Vehicle::new(1, 15.0)];
    Instance::cvrp(Node::new(0, 0.0, 0.0), nodes, fleet).expect("valid")
}

#[test]
fn test_abc_square_tour_is_perimeter() {
    let config = AbcConfig::default()
        .with_population_size(20)
        .with_max_iterations(200)
        .with_seed(2024);
    let result = AbcRunner::run(&unit_square(), &config).expect("runs");
    assert!((result.best_distance - 4.0).abs() < 1e-9);
}

#[test]
fn test_sa_square_tour_is_perimeter() {
    for move_kind in [MoveKind::PairSwap, MoveKind::TripleRotate] {
        let config = SaConfig::variant(move_kind, 5.0)
            .with_iterations(2000)
            .with_initial(InitialPath::Shuffled)
            .with_seed(17);
        let result = SaRunner::run(&unit_square(), &config).expect("runs");
        assert!((result.best_distance - 4.0).abs() < 1e-9);
    }
}

#[test]
fn test_overloaded_pair_reports_unplaced_node() {
    let demands = [5.0, 6.0];
    let parts = partition(&[0, 1], &demands, &[Vehicle::new(0, 10.0)]);
    assert_eq!(parts.routes(), &[vec![0]]);
    assert_eq!(parts.loads(), &[5.0]);
    assert_eq!(parts.unplaced(), &[1]);
    assert!(!parts.is_complete());
    // The tail stays visible to slicing.
    assert_eq!(slice_path(parts.cut_points(), &[0, 1]), vec![vec![0], vec![1]]);
}

#[test]
fn test_overloaded_fleet_rejected_up_front() {
    let nodes = vec![
        Node::new(0, 1.0, 0.0).with_demand(5.0),
        Node::new(1, 2.0, 0.0).with_demand(6.0),
    ];
    let err = Instance::cvrp(Node::new(0, 0.0, 0.0), nodes, vec![Vehicle::new(0, 10.0)])
        .expect_err("fleet too small");
    assert!(matches!(err, RoutingError::InsufficientFleet { .. }));
}

#[test]
fn test_abc_seeded_replay() {
    let inst = clustered_cvrp();
    let config = AbcConfig::default()
        .with_population_size(16)
        .with_max_iterations(150)
        .with_seed(99);
    let a = AbcRunner::run(&inst, &config).expect("runs");
    let b = AbcRunner::run(&inst, &config).expect("runs");
    assert_eq!(a.best_path, b.best_path);
    assert_eq!(a.best_distance, b.best_distance);
    assert_eq!(a.history, b.history);
    assert_eq!(a.improvements, b.improvements);
}

#[test]
fn test_sa_seeded_replay() {
    let inst = clustered_cvrp();
    let config = SaConfig::default().with_iterations(1500).with_seed(4);
    let a = SaRunner::run(&inst, &config).expect("runs");
    let b = SaRunner::run(&inst, &config).expect("runs");
    assert_eq!(a.final_path, b.final_path);
    assert_eq!(a.trajectory, b.trajectory);
}

#[test]
fn test_abc_cvrp_breakdown_respects_capacity() {
    let inst = clustered_cvrp();
    let config = AbcConfig::default()
        .with_population_size(20)
        .with_max_iterations(300)
        .with_seed(5);
    let result = AbcRunner::run(&inst, &config).expect("runs");
    let parts = result.partition(&inst);
    assert!(parts.is_complete());
    let served: usize = parts.routes().iter().map(Vec::len).sum();
    assert_eq!(served, inst.node_count());
    for (load, vehicle) in parts.loads().iter().zip(inst.vehicles()) {
        assert!(*load <= vehicle.capacity());
    }
}

#[test]
fn test_csv_instance_end_to_end() {
    let nodes = "1,0,3\n0,1,3\n-1,0,3\n0,-1,3\n0,0,0\n";
    let vehicles = "0,6\n1,6\n";
    let inst = source::read_cvrp(nodes.as_bytes(), vehicles.as_bytes()).expect("valid");
    let config = SaConfig::default().with_iterations(500).with_seed(8);
    let result = SaRunner::run(&inst, &config).expect("runs");
    assert_eq!(result.partition(&inst).routes().len(), 2);
}

#[test]
fn test_matrix_instance() {
    let inst = Instance::from_matrix(vec![
        vec![0.0, 1.0, 9.0, 1.0],
        vec![1.0, 0.0, 1.0, 9.0],
        vec![9.0, 1.0, 0.0, 1.0],
        vec![1.0, 9.0, 1.0, 0.0],
    ])
    .expect("valid");
    let config = AbcConfig::default()
        .with_population_size(10)
        .with_max_iterations(100)
        .with_seed(12);
    let result = AbcRunner::run(&inst, &config).expect("runs");
    assert!((result.best_distance - 4.0).abs() < 1e-9);
}
