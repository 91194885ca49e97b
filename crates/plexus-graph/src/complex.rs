use std::collections::{BTreeMap, BTreeSet};

use plexus_core::errors::{ErrorInfo, PlexusError};
use plexus_core::{EdgeId, HypergraphView, Label, NodeId};
use tracing::trace;

use crate::hypergraph::{graph_error, unknown_edge, ContextExt};
use crate::ids::{make_edge, node_set};
use crate::subfaces::subfaces_of;

/// Simplicial complex under construction.
///
/// Every call that returns leaves the complex downward closed: each non-empty
/// subset of a stored simplex is itself stored. Simplices are unique by node
/// set and numbered sequentially in insertion order, faces before cofaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplicialComplex<N: Label = NodeId> {
    memberships: BTreeMap<N, BTreeSet<EdgeId>>,
    simplices: BTreeMap<EdgeId, BTreeSet<N>>,
    index: BTreeMap<BTreeSet<N>, EdgeId>,
    next_edge: u64,
}

impl<N: Label> SimplicialComplex<N> {
    /// Creates an empty complex.
    pub fn new() -> Self {
        Self {
            memberships: BTreeMap::new(),
            simplices: BTreeMap::new(),
            index: BTreeMap::new(),
            next_edge: 0,
        }
    }

    /// Adds a node without incident simplices. Idempotent.
    ///
    /// A node is a vertex of the complex, not a 0-simplex; add `[node]` as a
    /// simplex to store the latter.
    pub fn add_node(&mut self, node: N) {
        self.memberships.entry(node).or_default();
    }

    /// Adds several nodes.
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = N>) {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Adds one simplex together with all of its faces.
    pub fn add_simplex(&mut self, simplex: impl IntoIterator<Item = N>) -> Result<(), PlexusError> {
        self.add_simplices([simplex], None)
    }

    /// Adds simplices, closing each one downward.
    ///
    /// When `max_order` is set, a simplex of higher order is replaced by its
    /// faces of order exactly `max_order`. Every input is validated first, so
    /// on error the complex is unchanged. Already present simplices are
    /// skipped.
    pub fn add_simplices<I, S>(
        &mut self,
        simplices: I,
        max_order: Option<usize>,
    ) -> Result<(), PlexusError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = N>,
    {
        let simplices: Vec<BTreeSet<N>> = simplices.into_iter().map(node_set).collect();
        if let Some(position) = simplices.iter().position(BTreeSet::is_empty) {
            return Err(PlexusError::Order(
                ErrorInfo::new("empty-simplex", "simplices need at least one node")
                    .with_context("position", position),
            ));
        }

        let mut to_add = Vec::with_capacity(simplices.len());
        for simplex in simplices {
            match max_order {
                Some(order) if simplex.len() > order + 1 => {
                    to_add.extend(subfaces_of(&simplex, Some(order))?);
                }
                _ => to_add.push(simplex),
            }
        }

        let before = self.simplices.len();
        for simplex in to_add {
            self.insert_closed(simplex)?;
        }
        trace!(
            added = self.simplices.len() - before,
            total = self.simplices.len(),
            ?max_order,
            "added simplices"
        );
        Ok(())
    }

    fn insert_closed(&mut self, simplex: BTreeSet<N>) -> Result<(), PlexusError> {
        if self.index.contains_key(&simplex) {
            return Ok(());
        }
        for face in subfaces_of(&simplex, None)? {
            self.insert_face(face);
        }
        self.insert_face(simplex);
        Ok(())
    }

    fn insert_face(&mut self, face: BTreeSet<N>) {
        if self.index.contains_key(&face) {
            return;
        }
        let id = make_edge(self.next_edge);
        self.next_edge += 1;
        for node in &face {
            self.memberships.entry(node.clone()).or_default().insert(id);
        }
        self.index.insert(face.clone(), id);
        self.simplices.insert(id, face);
    }

    /// Returns whether a simplex with exactly this node set is stored.
    pub fn contains(&self, simplex: &BTreeSet<N>) -> bool {
        self.index.contains_key(simplex)
    }

    /// Returns the id of the simplex with this node set.
    pub fn simplex_id(&self, simplex: &BTreeSet<N>) -> Option<EdgeId> {
        self.index.get(simplex).copied()
    }

    /// Returns the order of a stored simplex.
    pub fn order(&self, edge: EdgeId) -> Result<usize, PlexusError> {
        Ok(self.members(&edge)?.len() - 1)
    }

    /// Returns every simplex of order `order`, sorted.
    pub fn simplices_of_order(&self, order: usize) -> Vec<BTreeSet<N>> {
        self.index
            .keys()
            .filter(|simplex| simplex.len() == order + 1)
            .cloned()
            .collect()
    }

    /// Returns every stored simplex, sorted.
    pub fn simplices(&self) -> Vec<BTreeSet<N>> {
        self.index.keys().cloned().collect()
    }

    /// Highest simplex order, or `None` for a complex without simplices.
    pub fn max_order(&self) -> Option<usize> {
        self.index.keys().map(|simplex| simplex.len() - 1).max()
    }

    /// Returns the simplices containing `node`.
    pub fn memberships(&self, node: &N) -> Result<&BTreeSet<EdgeId>, PlexusError> {
        self.memberships.get(node).ok_or_else(|| {
            graph_error("unknown-node", "node does not exist")
                .with_context("node", format!("{node:?}"))
        })
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.memberships.len()
    }

    /// Number of simplices of every order.
    pub fn num_edges(&self) -> usize {
        self.simplices.len()
    }

    /// Checks the downward-closure invariant from scratch.
    pub fn is_downward_closed(&self) -> bool {
        self.index.keys().all(|simplex| {
            subfaces_of(simplex, None)
                .map(|faces| faces.iter().all(|face| self.index.contains_key(face)))
                .unwrap_or(false)
        })
    }
}

impl<N: Label> Default for SimplicialComplex<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Label> HypergraphView for SimplicialComplex<N> {
    type Node = N;
    type Edge = EdgeId;

    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = N> + '_> {
        Box::new(self.memberships.keys().cloned())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_> {
        Box::new(self.simplices.keys().copied())
    }

    fn members(&self, edge: &EdgeId) -> Result<&BTreeSet<N>, PlexusError> {
        self.simplices.get(edge).ok_or_else(|| unknown_edge(edge))
    }
}
