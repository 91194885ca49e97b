use std::collections::BTreeSet;

use plexus_core::{DigraphSink, EdgeId, HypergraphView};
use plexus_graph::{DiGraph, Hypergraph};

#[test]
fn labelled_hypergraph_round_trip() {
    let mut graph: Hypergraph<&str, &str> =
        Hypergraph::from_edge_dict([("e1", vec!["a", "b"]), ("e2", vec!["b", "c", "d"])])
            .unwrap();
    graph.add_node("z");
    assert_eq!(graph.num_nodes(), 5);
    assert_eq!(graph.num_edges(), 2);
    assert_eq!(graph.memberships(&"b").unwrap().len(), 2);
    assert!(graph.memberships(&"z").unwrap().is_empty());

    let err = graph.add_edge("e1", ["q"]).unwrap_err();
    assert_eq!(err.info().code, "duplicate-edge-id");

    let removed = graph.remove_edge(&"e1").unwrap();
    assert_eq!(removed, BTreeSet::from(["a", "b"]));
    assert_eq!(graph.memberships(&"b").unwrap().len(), 1);
    assert!(graph.members(&"e1").is_err());
}

#[test]
fn edge_list_numbers_edges_in_order() {
    let graph = Hypergraph::from_edge_list(vec![vec![0u32, 1], vec![1, 2], vec![0, 1]]);
    let ids: Vec<_> = graph.edges().collect();
    assert_eq!(ids, (0..3).map(EdgeId::from_raw).collect::<Vec<_>>());
    assert_eq!(
        graph.members(&EdgeId::from_raw(0)).unwrap(),
        graph.members(&EdgeId::from_raw(2)).unwrap()
    );
}

#[test]
fn digraph_tracks_both_directions() {
    let mut dag = DiGraph::new();
    dag.add_node(4u8);
    dag.add_edge(1u8, 2);
    dag.add_edge(2, 3);
    assert_eq!(dag.number_of_nodes(), 4);
    assert_eq!(dag.number_of_edges(), 2);
    assert_eq!(dag.predecessors(&3), vec![2]);
    assert_eq!(dag.successors(&1), vec![2]);
    assert!(dag.successors(&4).is_empty());
    assert!(dag.transitive_closure().contains(&(1, 3)));
    assert!(dag.is_acyclic());

    dag.add_edge(3, 1);
    assert!(!dag.is_acyclic());
    assert!(dag.remove_edge(&3, &1));
    assert!(!dag.remove_edge(&3, &1));
    assert_eq!(dag.edges(), vec![(1, 2), (2, 3)]);
}
