#![deny(missing_docs)]

//! Containers and combinatorial building blocks for plexus: simplicial
//! complexes closed under the subface axiom, labelled hypergraphs, simple
//! graphs with clique finding, and the directed graph used for analysis
//! output.

mod cliques;
mod complex;
mod digraph;
mod graph;
mod hash;
mod hypergraph;
mod ids;
mod subfaces;

pub use cliques::{find_triangles, maximal_cliques};
pub use complex::SimplicialComplex;
pub use digraph::DiGraph;
pub use graph::{complete_graph, gnp_random_graph, Graph};
pub use hash::canonical_hash;
pub use hypergraph::Hypergraph;
pub use subfaces::{subfaces, subfaces_of};

/// Re-export of the traits implemented by the containers in this crate.
pub use plexus_core::{DigraphSink, HypergraphView, SimpleGraph};
