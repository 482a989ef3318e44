use super::*;
use crate::debug_invariants::DebugInvariants;
use crate::graph::UndiGraph;

fn n(raw: u64) -> NodeId {
    NodeId::new(raw)
}

fn graph(edges: &[(u64, u64)]) -> UndiGraph {
    UndiGraph::from_edges(edges.iter().map(|&(a, b)| (n(a), n(b))))
}

fn uniform_mods(g: &UndiGraph, value: f64) -> NodeProperty<f64> {
    g.nodes().map(|x| (x, value)).collect()
}

fn ln2() -> f64 {
    2f64.ln()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Triangle 1-2-3 plus the pendant 3-4.
const TRIANGLE_WITH_PENDANT: &[(u64, u64)] = &[(1, 2), (1, 3), (2, 3), (3, 4)];

#[test]
fn triangle_with_pendant_classification() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();

    assert_eq!(set.adjacent_neighbour_count(n(3)), Some(1));
    assert!(set.is_simplicial(n(1)));
    assert!(set.is_simplicial(n(2)));
    assert!(set.is_simplicial(n(4)));
    assert!(!set.is_simplicial(n(3)));
    assert!(set.is_almost_simplicial(n(3)));
    assert!(set.validate_invariants().is_ok());

    assert!(close(set.log_weights()[&n(3)], 4.0 * ln2()));
    assert!(close(set.log_weights()[&n(4)], 2.0 * ln2()));
    assert!(close(set.log_tree_width(), 2.0 * ln2()));
}

#[test]
fn initial_weights_and_stale_set() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    w.insert(n(1), 123.0);
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();

    assert!(close(set.log_weights()[&n(1)], 3.0 * ln2()));
    for i in 1..=4 {
        assert!(set.is_stale(n(i)));
        assert_eq!(set.classification(n(i)), Some(Classification::Unclassified));
    }
    assert!(set.has_simplicial_node());
    for i in 1..=4 {
        assert!(!set.is_stale(n(i)));
    }
    assert_eq!(set.nb_simplicial_nodes(), 3);
    assert_eq!(set.nb_almost_simplicial_nodes(), 1);
}

#[test]
fn almost_simplicial_needs_weight_within_threshold() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    // Node 3 weighs 4 ln 2 while the bound is 2 ln 2.
    assert!(!set.has_almost_simplicial_node());
    assert_eq!(
        set.best_almost_simplicial_node(),
        Err(ElimError::NoCandidate(Classification::AlmostSimplicial))
    );

    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    let cfg = SimplicialConfig { fill_threshold: 10.0, ..Default::default() };
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, cfg).unwrap();
    assert!(set.has_almost_simplicial_node());
    assert_eq!(set.best_almost_simplicial_node(), Ok(n(3)));
}

#[test]
fn erase_missing_edge_leaves_state_untouched() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    let triangles_before = set.triangles.clone();
    let adjacency_before = set.adjacency.clone();
    let weights_before = set.log_weights().clone();

    let missing = Edge::new(n(1), n(4));
    assert_eq!(set.erase_edge(missing), Err(ElimError::EdgeNotFound(missing)));
    assert_eq!(set.triangles, triangles_before);
    assert_eq!(set.adjacency, adjacency_before);
    assert_eq!(set.log_weights(), &weights_before);
    assert_eq!(set.graph().edge_count(), 4);
}

#[test]
fn erase_deserialised_reversed_edge() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();

    let e: Edge = serde_json::from_str(r#"{"first":4,"second":3}"#).unwrap();
    assert_eq!(set.triangle_count(e), Some(0));
    set.erase_edge(e).unwrap();
    assert!(!set.graph().exists_edge(n(3), n(4)));
    assert_eq!(set.triangle_count(Edge::new(n(3), n(4))), None);
    assert!(set.validate_invariants().is_ok());
}

#[test]
fn make_clique_uses_pivot_edges() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    set.set_fill_ins(true);

    assert!(set.is_almost_simplicial(n(3)));
    assert_eq!(set.almost_simplicial_pivot(n(3)), Some(n(4)));
    set.make_clique(n(3)).unwrap();

    let mut fill: Vec<Edge> = set.fill_ins().iter().copied().collect();
    fill.sort();
    assert_eq!(fill, vec![Edge::new(n(1), n(4)), Edge::new(n(2), n(4))]);
    assert_eq!(set.graph().edge_count(), 6);
    assert_eq!(set.classification(n(3)), Some(Classification::Simplicial));
    assert!(!set.is_stale(n(3)));
    assert_eq!(set.adjacent_neighbour_count(n(3)), Some(3));
    assert_eq!(set.triangle_count(Edge::new(n(3), n(4))), Some(2));
    assert!(set.validate_invariants().is_ok());
}

#[test]
fn make_clique_is_idempotent() {
    // Path 1-2-3-4-5: node 3 needs the single edge 2-4.
    let mut g = graph(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    set.set_fill_ins(true);

    set.make_clique(n(3)).unwrap();
    assert!(set.graph().exists_edge(n(2), n(4)));
    let edges = set.graph().edge_count();
    let fill = set.fill_ins().len();
    assert_eq!(fill, 1);

    set.make_clique(n(3)).unwrap();
    assert_eq!(set.graph().edge_count(), edges);
    assert_eq!(set.fill_ins().len(), fill);
    assert!(set.validate_invariants().is_ok());
}

#[test]
fn make_clique_naive_path_on_unclassified_node() {
    // Star with four leaves: no pivot can fix six missing pairs.
    let mut g = graph(&[(1, 2), (1, 3), (1, 4), (1, 5)]);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    assert!(!set.is_almost_simplicial(n(1)));
    assert_eq!(set.classification(n(1)), Some(Classification::Unclassified));

    set.make_clique(n(1)).unwrap();
    assert_eq!(set.graph().edge_count(), 10);
    assert!(set.is_simplicial(n(1)));
    assert!(close(set.log_weights()[&n(2)], 5.0));
    assert!(set.validate_invariants().is_ok());
}

#[test]
fn add_then_erase_edge_round_trips() {
    let mut g = graph(&[(1, 2), (1, 3), (2, 3), (3, 4), (2, 5), (4, 5)]);
    let mods: NodeProperty<f64> = (1..=5).map(|i| (n(i), i as f64 * 0.5)).collect();
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    let triangles_before = set.triangles.clone();
    let adjacency_before = set.adjacency.clone();
    let weights_before = set.log_weights().clone();

    set.add_edge(n(1), n(4)).unwrap();
    assert_eq!(set.triangle_count(Edge::new(n(1), n(4))), Some(1));
    assert!(set.validate_invariants().is_ok());
    set.erase_edge(Edge::new(n(4), n(1))).unwrap();

    assert_eq!(set.triangles, triangles_before);
    assert_eq!(set.adjacency, adjacency_before);
    for (node, &before) in &weights_before {
        assert!(close(set.log_weights()[node], before));
    }
}

#[test]
fn add_edge_preconditions() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();

    assert_eq!(set.add_edge(n(1), n(9)), Err(ElimError::NodeNotFound(n(9))));
    assert!(matches!(set.add_edge(n(2), n(2)), Err(ElimError::InvalidArgument(_))));
    let before = set.log_weights().clone();
    set.add_edge(n(2), n(1)).unwrap();
    assert_eq!(set.log_weights(), &before);
    assert_eq!(set.graph().edge_count(), 4);
}

#[test]
fn every_neighbourhood_a_clique() {
    // K4 plus a disjoint K2.
    let mut g = graph(&[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4), (5, 6)]);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();

    assert!(set.has_simplicial_node());
    set.set_fill_ins(true);
    for i in 1..=6 {
        set.make_clique(n(i)).unwrap();
    }
    assert_eq!(set.graph().edge_count(), 7);
    assert!(set.fill_ins().is_empty());
    assert_eq!(set.nb_simplicial_nodes(), 6);
    // K2 nodes weigh 2, K4 nodes 4.
    let best = set.best_simplicial_node().unwrap();
    assert_eq!(best, n(5));
}

#[test]
fn erase_clique_rejects_non_clique() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    let triangles_before = set.triangles.clone();

    assert_eq!(set.erase_clique(n(3)), Err(ElimError::NotAClique(n(3))));
    assert_eq!(set.erase_clique(n(8)), Err(ElimError::NodeNotFound(n(8))));
    assert_eq!(set.triangles, triangles_before);
    assert!(set.graph().exists(n(3)));
}

#[test]
fn erase_clique_raises_tree_width() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();

    set.erase_clique(n(1)).unwrap();
    assert!(close(set.log_tree_width(), 3.0 * ln2()));
    assert!(!set.graph().exists(n(1)));
    assert!(!set.log_weights().contains_key(&n(1)));
    assert_eq!(set.classification(n(1)), None);
    assert_eq!(set.triangle_count(Edge::new(n(1), n(2))), None);
    assert_eq!(set.triangle_count(Edge::new(n(2), n(3))), Some(0));
    assert_eq!(set.adjacent_neighbour_count(n(3)), Some(0));
    assert!(close(set.log_weights()[&n(3)], 3.0 * ln2()));
    assert!(set.is_almost_simplicial(n(3)));
    assert!(set.validate_invariants().is_ok());

    // Erasing a lighter clique never lowers the bound.
    set.erase_clique(n(4)).unwrap();
    assert!(close(set.log_tree_width(), 3.0 * ln2()));
}

#[test]
fn erase_node_goes_edge_by_edge() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, ln2());
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    set.refresh_all();

    set.erase_node(n(3)).unwrap();
    assert_eq!(set.erase_node(n(3)), Err(ElimError::NodeNotFound(n(3))));
    assert_eq!(set.graph().edge_count(), 1);
    assert!(close(set.log_weights()[&n(1)], 2.0 * ln2()));
    assert!(close(set.log_weights()[&n(4)], ln2()));
    assert_eq!(set.adjacent_neighbour_count(n(1)), Some(0));
    assert!(set.is_stale(n(4)));
    assert!(set.is_simplicial(n(4)));
    assert!(set.validate_invariants().is_ok());
}

#[test]
fn quasi_simplicial_needs_two_disjoint_gaps() {
    // Hub 1 over 2..5; neighbour edges miss 2-3 and 4-5.
    let mut g = graph(&[(1, 2), (1, 3), (1, 4), (1, 5), (2, 4), (2, 5), (3, 4), (3, 5)]);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let cfg = SimplicialConfig { quasi_ratio: 0.6, fill_threshold: 100.0 };
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, cfg).unwrap();

    assert_eq!(set.adjacent_neighbour_count(n(1)), Some(4));
    assert!(!set.is_almost_simplicial(n(1)));
    assert!(set.is_quasi_simplicial(n(1)));
    assert!(set.has_quasi_simplicial_node());
    assert_eq!(set.best_quasi_simplicial_node(), Ok(n(1)));

    let mut g = graph(&[(1, 2), (1, 3), (1, 4), (1, 5), (2, 4), (2, 5), (3, 4), (3, 5)]);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let cfg = SimplicialConfig { quasi_ratio: 0.7, fill_threshold: 100.0 };
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, cfg).unwrap();
    assert!(!set.is_quasi_simplicial(n(1)));
    assert_eq!(set.classification(n(1)), Some(Classification::Unclassified));
}

#[test]
fn reclassification_follows_mutations() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    assert!(set.is_simplicial(n(1)));

    // 1 gains the neighbour 4, which is adjacent to 3 only.
    set.add_edge(n(1), n(4)).unwrap();
    assert!(set.is_stale(n(1)));
    assert!(set.is_almost_simplicial(n(1)));
    assert!(set.is_simplicial(n(4)));
    assert!(set.validate_invariants().is_ok());
}

#[test]
fn missing_modality_is_invalid() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mut mods = uniform_mods(&g, 1.0);
    mods.remove(&n(2));
    let mut w = NodeProperty::new();
    let err = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap_err();
    assert!(matches!(err, ElimError::InvalidArgument(_)));

    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let cfg = SimplicialConfig { fill_threshold: f64::INFINITY, ..Default::default() };
    let err = SimplicialSet::new(&mut g, &mods, &mut w, cfg).unwrap_err();
    assert!(matches!(err, ElimError::InvalidArgument(_)));
}

#[test]
fn set_graph_rebuilds_and_keeps_state_on_error() {
    let mut g1 = graph(TRIANGLE_WITH_PENDANT);
    let mut g2 = graph(&[(10, 11), (11, 12)]);
    let mut g3 = graph(&[(20, 21)]);
    let mods1 = uniform_mods(&g1, 1.0);
    let mods2 = uniform_mods(&g2, 1.0);
    let empty = NodeProperty::new();
    let mut w1 = NodeProperty::new();
    let mut w2 = NodeProperty::new();
    let mut w3 = NodeProperty::new();

    let mut set = SimplicialSet::new(&mut g1, &mods1, &mut w1, SimplicialConfig::default()).unwrap();
    set.set_fill_ins(true);
    set.make_clique(n(3)).unwrap();
    assert!(!set.fill_ins().is_empty());

    let err = set.set_graph(&mut g3, &empty, &mut w3, SimplicialConfig::default());
    assert!(matches!(err, Err(ElimError::InvalidArgument(_))));
    assert_eq!(set.graph().node_count(), 4);

    set.set_graph(&mut g2, &mods2, &mut w2, SimplicialConfig::default()).unwrap();
    assert_eq!(set.graph().node_count(), 3);
    assert!(set.fill_ins().is_empty());
    assert!(close(set.log_weights()[&n(11)], 3.0));
    assert!(close(set.log_tree_width(), 2.0));
    assert!(set.is_almost_simplicial(n(11)));
    assert!(set.validate_invariants().is_ok());
}

#[test]
fn replace_log_weights_swaps_maps() {
    let mut g = graph(TRIANGLE_WITH_PENDANT);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let mut partial = NodeProperty::new();
    partial.insert(n(1), 0.0);
    let mut full: NodeProperty<f64> =
        [(1, 3.0), (2, 3.0), (3, 4.0), (4, 2.0)].into_iter().map(|(i, x)| (n(i), x)).collect();

    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    assert!(matches!(set.replace_log_weights(&mut partial), Err(ElimError::InvalidArgument(_))));

    let old = set.replace_log_weights(&mut full).unwrap();
    assert!(close(old[&n(3)], 4.0));
    set.add_edge(n(1), n(4)).unwrap();
    assert!(close(set.log_weights()[&n(4)], 3.0));
    assert!(close(set.log_weights()[&n(1)], 4.0));
}

#[test]
fn disabling_fill_ins_clears_record() {
    let mut g = graph(&[(1, 2), (2, 3)]);
    let mods = uniform_mods(&g, 1.0);
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    set.make_clique(n(2)).unwrap();
    assert!(set.fill_ins().is_empty());

    set.set_fill_ins(true);
    set.erase_edge(Edge::new(n(1), n(3))).unwrap();
    set.make_clique(n(2)).unwrap();
    assert_eq!(set.fill_ins().len(), 1);
    set.set_fill_ins(false);
    assert!(set.fill_ins().is_empty());
}

#[test]
fn empty_graph() {
    let mut g = UndiGraph::new();
    let mods = NodeProperty::new();
    let mut w = NodeProperty::new();
    let mut set = SimplicialSet::new(&mut g, &mods, &mut w, SimplicialConfig::default()).unwrap();
    assert!(!set.has_simplicial_node());
    assert!(!set.has_almost_simplicial_node());
    assert!(!set.has_quasi_simplicial_node());
    assert_eq!(set.log_tree_width(), f64::INFINITY);
    assert!(set.validate_invariants().is_ok());
}
