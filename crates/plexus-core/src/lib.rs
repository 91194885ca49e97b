#![deny(missing_docs)]
#![doc = "Core traits and data types shared by the plexus hypergraph and simplicial complex crates."]

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{validate_probabilities, validate_probability, ErrorInfo, PlexusError};
pub use rng::RngHandle;

/// Bound satisfied by anything usable as a node or edge label.
///
/// Labels need a total order: containers keep them sorted and the
/// encapsulation engine breaks ties between equal node sets by label order.
pub trait Label: Ord + Clone + Debug {}

impl<T> Label for T where T: Ord + Clone + Debug {}

/// Identifier for a node produced by the plexus generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Identifier for an edge assigned sequentially by plexus containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Read access to an edge-id to node-set mapping.
///
/// This is all the encapsulation and line-graph engines need from a
/// hypergraph-like container.
pub trait HypergraphView {
    /// Node label type.
    type Node: Label;
    /// Edge label type.
    type Edge: Label;

    /// Returns an iterator over all node identifiers.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = Self::Node> + '_>;

    /// Returns an iterator over all edge identifiers.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = Self::Edge> + '_>;

    /// Returns the node set of the specified edge.
    fn members(&self, edge: &Self::Edge) -> Result<&BTreeSet<Self::Node>, PlexusError>;
}

/// Read access to a simple undirected graph.
pub trait SimpleGraph {
    /// Node label type.
    type Node: Label;

    /// Returns an iterator over all nodes.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = Self::Node> + '_>;

    /// Returns every undirected edge once, as `(smaller, larger)`.
    fn edges(&self) -> Box<dyn Iterator<Item = (Self::Node, Self::Node)> + '_>;

    /// Returns the neighbours of `node`.
    fn neighbors(&self, node: &Self::Node) -> Result<Vec<Self::Node>, PlexusError>;
}

/// Construction contract for a directed graph receiving analysis output.
pub trait DigraphSink<V> {
    /// Adds a node; adding an existing node is a no-op.
    fn add_node(&mut self, node: V);

    /// Adds the arc `source -> target`, registering both endpoints.
    fn add_edge(&mut self, source: V, target: V);
}
