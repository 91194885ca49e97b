use std::collections::BTreeMap;

use itertools::Itertools;
use plexus_core::{HypergraphView, Label, PlexusError};
use plexus_graph::Graph;
use tracing::debug;

use crate::options::LineGraphOptions;

/// The s-line graph of a hypergraph with optional edge weights.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGraph<E: Label> {
    graph: Graph<E>,
    weights: BTreeMap<(E, E), f64>,
}

impl<E: Label> LineGraph<E> {
    /// The underlying undirected graph; its nodes are hyperedge ids.
    pub fn graph(&self) -> &Graph<E> {
        &self.graph
    }

    /// Weight of the link between `u` and `v`, if weights were requested
    /// and the link exists.
    pub fn weight(&self, u: &E, v: &E) -> Option<f64> {
        self.weights.get(&ordered_pair(u, v)).copied()
    }
}

/// Builds the s-line graph of `hypergraph`.
///
/// Two hyperedges are linked when they share at least `s` nodes. Weights are
/// the intersection size, optionally divided by the size of the smaller
/// hyperedge (zero when that hyperedge is empty).
pub fn to_line_graph<H: HypergraphView>(
    hypergraph: &H,
    options: &LineGraphOptions,
) -> Result<LineGraph<H::Edge>, PlexusError> {
    let mut edges = Vec::with_capacity(hypergraph.edges().len());
    for edge in hypergraph.edges() {
        let members = hypergraph.members(&edge)?;
        edges.push((edge, members));
    }

    let mut graph = Graph::new();
    let mut weights = BTreeMap::new();
    for (edge, _) in &edges {
        graph.add_node(edge.clone());
    }
    for ((first, first_nodes), (second, second_nodes)) in edges.iter().tuple_combinations() {
        let shared = first_nodes.intersection(second_nodes).count();
        if shared < options.s {
            continue;
        }
        graph.add_edge(first.clone(), second.clone())?;
        if options.weighted {
            let smaller = first_nodes.len().min(second_nodes.len());
            let weight = match (options.normalize_weights, smaller) {
                (false, _) => shared as f64,
                (true, 0) => 0.0,
                (true, smaller) => shared as f64 / smaller as f64,
            };
            weights.insert(ordered_pair(first, second), weight);
        }
    }

    debug!(
        s = options.s,
        nodes = graph.num_nodes(),
        links = graph.num_edges(),
        "built line graph"
    );
    Ok(LineGraph { graph, weights })
}

fn ordered_pair<E: Label>(u: &E, v: &E) -> (E, E) {
    if u <= v {
        (u.clone(), v.clone())
    } else {
        (v.clone(), u.clone())
    }
}
