use k_paths::{Network, Yen};
use k_paths::graph::MutableGraph;
use ordered_float::OrderedFloat;
use std::collections::HashSet;

// Two equal-cost loopless routes from A to D
fn create_diamond() -> Network<&'static str, OrderedFloat<f64>> {
    let mut network = Network::new();
    network.add_edge("A", "B", OrderedFloat(1.0));
    network.add_edge("B", "D", OrderedFloat(2.0));
    network.add_edge("A", "C", OrderedFloat(2.0));
    network.add_edge("C", "D", OrderedFloat(1.0));
    network
}

// The classic worked example: three successively longer routes from C to H
fn create_ring_road() -> Network<&'static str, OrderedFloat<f64>> {
    let mut network = Network::new();
    network.add_edge("C", "D", OrderedFloat(3.0));
    network.add_edge("C", "E", OrderedFloat(2.0));
    network.add_edge("D", "F", OrderedFloat(4.0));
    network.add_edge("E", "D", OrderedFloat(1.0));
    network.add_edge("E", "F", OrderedFloat(2.0));
    network.add_edge("E", "G", OrderedFloat(3.0));
    network.add_edge("F", "G", OrderedFloat(2.0));
    network.add_edge("F", "H", OrderedFloat(1.0));
    network.add_edge("G", "H", OrderedFloat(2.0));
    network
}

#[test]
fn test_two_equal_cost_paths() {
    let mut network = create_diamond();
    let distances = Yen::new().k_shortest_distances(&mut network, &"A", &"D", 2);
    assert_eq!(distances, vec![OrderedFloat(3.0), OrderedFloat(3.0)]);
}

#[test]
fn test_k_larger_than_path_count() {
    let mut network = create_diamond();
    let distances = Yen::new().k_shortest_distances(&mut network, &"A", &"D", 5);
    assert_eq!(
        distances,
        vec![OrderedFloat(3.0), OrderedFloat(3.0)],
        "only two loopless paths exist"
    );
}

#[test]
fn test_single_edge_graph() {
    let mut network = Network::new();
    network.add_edge("A", "B", OrderedFloat(5.0));
    let distances = Yen::new().k_shortest_distances(&mut network, &"A", &"B", 1);
    assert_eq!(distances, vec![OrderedFloat(5.0)]);
}

#[test]
fn test_unreachable_destination_yields_empty() {
    let mut network = create_diamond();
    network.add_edge("Y", "Z", OrderedFloat(1.0));
    let distances = Yen::new().k_shortest_distances(&mut network, &"A", &"Z", 3);
    assert!(distances.is_empty());
}

#[test]
fn test_source_equals_destination() {
    let mut network = create_diamond();
    let paths = Yen::new().k_shortest_paths(&mut network, &"A", &"A", 3);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].vertices, vec!["A"]);
    assert_eq!(paths[0].distance, OrderedFloat(0.0));
}

#[test]
fn test_ring_road_distances() {
    let mut network = create_ring_road();
    let paths = Yen::new().k_shortest_paths(&mut network, &"C", &"H", 3);

    let distances: Vec<_> = paths.iter().map(|path| path.distance).collect();
    assert_eq!(
        distances,
        vec![OrderedFloat(5.0), OrderedFloat(7.0), OrderedFloat(8.0)]
    );
    assert_eq!(paths[0].vertices, vec!["C", "E", "F", "H"]);
}

#[test]
fn test_result_set_properties() {
    let mut network = create_ring_road();
    let paths = Yen::new().k_shortest_paths(&mut network, &"C", &"H", 10);

    assert!(!paths.is_empty());
    for window in paths.windows(2) {
        assert!(
            window[0].distance <= window[1].distance,
            "distances must be non-decreasing"
        );
    }

    let mut seen = HashSet::new();
    for path in &paths {
        assert_eq!(path.source(), Some(&"C"), "path should start at source");
        assert_eq!(path.destination(), Some(&"H"), "path should end at destination");
        assert!(path.is_loopless(), "path should not repeat a vertex");
        assert!(
            seen.insert(path.vertices.clone()),
            "no two paths may share a vertex sequence"
        );
    }
}

#[test]
fn test_weights_restored_after_run() {
    let mut network = create_ring_road();
    let before = network.clone();

    // k chosen well past exhaustion so the no-path spur branches are hit
    let _ = Yen::new().k_shortest_paths(&mut network, &"C", &"H", 50);

    assert_eq!(network, before, "weights must be restored after enumeration");
}

#[test]
fn test_weights_restored_when_no_path_exists() {
    let mut network = create_diamond();
    network.add_edge("Y", "Z", OrderedFloat(1.0));
    let before = network.clone();

    let _ = Yen::new().k_shortest_paths(&mut network, &"A", &"Z", 4);

    assert_eq!(network, before);
}

#[test]
fn test_parallel_matches_sequential() {
    let mut sequential_network = create_ring_road();
    let mut parallel_network = create_ring_road();

    let sequential = Yen::new().k_shortest_paths(&mut sequential_network, &"C", &"H", 10);
    let parallel = Yen::new()
        .with_parallel_spurs(true)
        .k_shortest_paths(&mut parallel_network, &"C", &"H", 10);

    assert_eq!(sequential, parallel);
    assert_eq!(sequential_network, parallel_network);
}

#[test]
fn test_deterministic_across_runs() {
    let mut network = create_ring_road();
    let first_run = Yen::new().k_shortest_paths(&mut network, &"C", &"H", 10);
    let second_run = Yen::new().k_shortest_paths(&mut network, &"C", &"H", 10);
    assert_eq!(first_run, second_run);
}

// Alternatives that branch at the source itself must be discoverable
#[test]
fn test_branch_at_source() {
    let mut network = Network::new();
    network.add_edge("A", "B", OrderedFloat(1.0));
    network.add_edge("B", "Z", OrderedFloat(1.0));
    network.add_edge("A", "C", OrderedFloat(3.0));
    network.add_edge("C", "Z", OrderedFloat(3.0));

    let paths = Yen::new().k_shortest_paths(&mut network, &"A", &"Z", 2);
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].vertices, vec!["A", "B", "Z"]);
    assert_eq!(paths[0].distance, OrderedFloat(2.0));
    assert_eq!(paths[1].vertices, vec!["A", "C", "Z"]);
    assert_eq!(paths[1].distance, OrderedFloat(6.0));
}

// A spur detour must not re-enter the root prefix
#[test]
fn test_candidates_stay_loopless() {
    let mut network = Network::new();
    network.add_edge("A", "B", OrderedFloat(1.0));
    network.add_edge("B", "C", OrderedFloat(1.0));
    network.add_edge("C", "Z", OrderedFloat(1.0));
    // Detour from C that would loop back through B
    network.add_edge("C", "B", OrderedFloat(0.5));
    // Genuine alternative tail
    network.add_edge("B", "Z", OrderedFloat(5.0));

    let paths = Yen::new().k_shortest_paths(&mut network, &"A", &"Z", 4);
    for path in &paths {
        assert!(path.is_loopless(), "looping path {:?} returned", path.vertices);
    }
}

#[test]
fn test_zero_k_yields_empty() {
    let mut network = create_diamond();
    assert!(Yen::new().k_shortest_paths(&mut network, &"A", &"D", 0).is_empty());
}
