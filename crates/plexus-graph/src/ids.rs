use std::collections::BTreeSet;

use plexus_core::{EdgeId, Label, NodeId};

/// Creates a [`NodeId`] from an index.
pub(crate) fn make_node(index: usize) -> NodeId {
    NodeId::from_raw(index as u64)
}

/// Creates an [`EdgeId`] from an index.
pub(crate) fn make_edge(index: u64) -> EdgeId {
    EdgeId::from_raw(index)
}

/// Collects node labels into a sorted, duplicate-free set.
pub(crate) fn node_set<N: Label>(nodes: impl IntoIterator<Item = N>) -> BTreeSet<N> {
    nodes.into_iter().collect()
}
