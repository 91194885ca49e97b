use std::collections::BTreeSet;

use plexus_core::PlexusError;
use plexus_graph::{subfaces, subfaces_of};

fn set(nodes: &[u32]) -> BTreeSet<u32> {
    nodes.iter().copied().collect()
}

#[test]
fn shared_faces_are_deduplicated() {
    let edges = vec![set(&[1, 2, 3]), set(&[2, 3, 4])];
    let faces = subfaces(&edges, Some(1)).unwrap();
    assert_eq!(
        faces,
        vec![
            set(&[1, 2]),
            set(&[1, 3]),
            set(&[2, 3]),
            set(&[2, 4]),
            set(&[3, 4]),
        ]
    );
}

#[test]
fn all_orders_cover_every_proper_subset() {
    let faces = subfaces(&[set(&[1, 2, 3, 4])], None).unwrap();
    assert_eq!(faces.len(), 14);
    let unique: BTreeSet<_> = faces.iter().cloned().collect();
    assert_eq!(unique.len(), faces.len());
}

#[test]
fn order_larger_than_edge_is_rejected() {
    let err = subfaces(&[set(&[1, 2, 3]), set(&[5, 6])], Some(2)).unwrap_err();
    match err {
        PlexusError::Order(info) => {
            assert_eq!(info.code, "invalid-order");
            assert_eq!(info.context.get("edge_size"), Some(&"2".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn order_zero_yields_vertices() {
    let faces = subfaces_of(&set(&[3, 1, 2]), Some(0)).unwrap();
    assert_eq!(faces, vec![set(&[1]), set(&[2]), set(&[3])]);
}

#[test]
fn empty_input_yields_nothing() {
    let edges: Vec<BTreeSet<u32>> = Vec::new();
    assert!(subfaces(&edges, Some(3)).unwrap().is_empty());
}
