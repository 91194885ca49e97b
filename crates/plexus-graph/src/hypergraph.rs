use std::collections::{BTreeMap, BTreeSet};

use plexus_core::errors::{ErrorInfo, PlexusError};
use plexus_core::{EdgeId, HypergraphView, Label, NodeId};

use crate::ids::{make_edge, node_set};

/// Labelled hypergraph: edge ids mapped to arbitrary node sets.
///
/// Unlike [`SimplicialComplex`](crate::SimplicialComplex) nothing is closed
/// downward, and two edges may carry identical node sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypergraph<N: Label = NodeId, E: Label = EdgeId> {
    memberships: BTreeMap<N, BTreeSet<E>>,
    edges: BTreeMap<E, BTreeSet<N>>,
}

impl<N: Label, E: Label> Hypergraph<N, E> {
    /// Creates an empty hypergraph.
    pub fn new() -> Self {
        Self {
            memberships: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Builds a hypergraph from `(edge id, members)` pairs.
    pub fn from_edge_dict<M>(edges: impl IntoIterator<Item = (E, M)>) -> Result<Self, PlexusError>
    where
        M: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (id, members) in edges {
            graph.add_edge(id, members)?;
        }
        Ok(graph)
    }

    /// Adds an isolated node. Existing nodes are left untouched.
    pub fn add_node(&mut self, node: N) {
        self.memberships.entry(node).or_default();
    }

    /// Adds several nodes.
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = N>) {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Adds an edge under `id`. Member nodes are registered as needed.
    pub fn add_edge(
        &mut self,
        id: E,
        members: impl IntoIterator<Item = N>,
    ) -> Result<(), PlexusError> {
        if self.edges.contains_key(&id) {
            return Err(graph_error("duplicate-edge-id", "edge id already in use")
                .with_context("edge", format!("{id:?}")));
        }
        let members = node_set(members);
        for node in &members {
            self.memberships
                .entry(node.clone())
                .or_default()
                .insert(id.clone());
        }
        self.edges.insert(id, members);
        Ok(())
    }

    /// Removes an edge, keeping its nodes.
    pub fn remove_edge(&mut self, id: &E) -> Result<BTreeSet<N>, PlexusError> {
        let members = self.edges.remove(id).ok_or_else(|| unknown_edge(id))?;
        for node in &members {
            if let Some(edges) = self.memberships.get_mut(node) {
                edges.remove(id);
            }
        }
        Ok(members)
    }

    /// Returns the ids of the edges containing `node`.
    pub fn memberships(&self, node: &N) -> Result<&BTreeSet<E>, PlexusError> {
        self.memberships.get(node).ok_or_else(|| {
            graph_error("unknown-node", "node does not exist")
                .with_context("node", format!("{node:?}"))
        })
    }

    /// Number of nodes, isolated ones included.
    pub fn num_nodes(&self) -> usize {
        self.memberships.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

impl<N: Label> Hypergraph<N, EdgeId> {
    /// Builds a hypergraph from an edge list, numbering edges from zero.
    pub fn from_edge_list<M>(edges: impl IntoIterator<Item = M>) -> Self
    where
        M: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (index, members) in edges.into_iter().enumerate() {
            let id = make_edge(index as u64);
            let members = node_set(members);
            for node in &members {
                graph.memberships.entry(node.clone()).or_default().insert(id);
            }
            graph.edges.insert(id, members);
        }
        graph
    }
}

impl<N: Label, E: Label> Default for Hypergraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Label, E: Label> HypergraphView for Hypergraph<N, E> {
    type Node = N;
    type Edge = E;

    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = N> + '_> {
        Box::new(self.memberships.keys().cloned())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = E> + '_> {
        Box::new(self.edges.keys().cloned())
    }

    fn members(&self, edge: &E) -> Result<&BTreeSet<N>, PlexusError> {
        self.edges.get(edge).ok_or_else(|| unknown_edge(edge))
    }
}

pub(crate) fn unknown_edge(edge: &impl std::fmt::Debug) -> PlexusError {
    graph_error("unknown-edge", "edge does not exist").with_context("edge", format!("{edge:?}"))
}

pub(crate) fn graph_error(code: impl Into<String>, message: impl Into<String>) -> PlexusError {
    PlexusError::Graph(ErrorInfo::new(code, message))
}

pub(crate) trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> PlexusError;
}

impl ContextExt for PlexusError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> PlexusError {
        match self {
            PlexusError::Graph(info) => PlexusError::Graph(info.with_context(key, value)),
            other => other,
        }
    }
}
