use std::collections::{BTreeMap, BTreeSet};

use plexus_core::errors::{ErrorInfo, PlexusError};
use plexus_core::rng::RngHandle;
use plexus_core::{validate_probability, Label, NodeId, SimpleGraph};
use tracing::debug;

use crate::ids::make_node;

/// Undirected simple graph with sorted adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N: Label = NodeId> {
    adjacency: BTreeMap<N, BTreeSet<N>>,
}

impl<N: Label> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds a graph from an edge list; endpoints become nodes.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N)>) -> Result<Self, PlexusError> {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds a node. Existing nodes are left untouched.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds an undirected edge. Self-loops are rejected.
    pub fn add_edge(&mut self, u: N, v: N) -> Result<(), PlexusError> {
        if u == v {
            return Err(PlexusError::Graph(
                ErrorInfo::new("self-loop", "simple graphs cannot hold self-loops")
                    .with_context("node", format!("{u:?}")),
            ));
        }
        self.link(u, v);
        Ok(())
    }

    fn link(&mut self, u: N, v: N) {
        self.adjacency.entry(u.clone()).or_default().insert(v.clone());
        self.adjacency.entry(v).or_default().insert(u);
    }

    /// Returns whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.adjacency
            .get(u)
            .map(|neighbours| neighbours.contains(v))
            .unwrap_or(false)
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Degree of `node`, or `None` when the node is unknown.
    pub fn degree(&self, node: &N) -> Option<usize> {
        self.adjacency.get(node).map(BTreeSet::len)
    }
}

impl<N: Label> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Label> SimpleGraph for Graph<N> {
    type Node = N;

    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = N> + '_> {
        Box::new(self.adjacency.keys().cloned())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (N, N)> + '_> {
        Box::new(self.adjacency.iter().flat_map(|(u, neighbours)| {
            neighbours
                .range((std::ops::Bound::Excluded(u), std::ops::Bound::Unbounded))
                .map(move |v| (u.clone(), v.clone()))
        }))
    }

    fn neighbors(&self, node: &N) -> Result<Vec<N>, PlexusError> {
        self.adjacency
            .get(node)
            .map(|neighbours| neighbours.iter().cloned().collect())
            .ok_or_else(|| {
                PlexusError::Graph(
                    ErrorInfo::new("unknown-node", "node does not exist")
                        .with_context("node", format!("{node:?}")),
                )
            })
    }
}

/// Complete graph over nodes `0..n`.
pub fn complete_graph(n: usize) -> Graph<NodeId> {
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_node(make_node(v));
        for w in 0..v {
            graph.link(make_node(v), make_node(w));
        }
    }
    graph
}

/// Erdős-Rényi `G(n, p)` graph over nodes `0..n`.
///
/// Uses geometric skipping (Batagelj and Brandes), one uniform draw per
/// generated edge plus one per row boundary. `p = 0` and `p = 1` are
/// resolved without consuming draws.
pub fn gnp_random_graph(
    n: usize,
    p: f64,
    rng: &mut RngHandle,
) -> Result<Graph<NodeId>, PlexusError> {
    validate_probability(p)?;
    if p >= 1.0 {
        return Ok(complete_graph(n));
    }
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_node(make_node(v));
    }
    if p <= 0.0 {
        return Ok(graph);
    }

    let lp = (-p).ln_1p();
    let n = n as i64;
    let pairs = (n * (n - 1) / 2) as f64;
    let mut v: i64 = 1;
    let mut w: i64 = -1;
    while v < n {
        let lr = (1.0 - rng.uniform()).ln();
        let skip = (lr / lp).floor();
        // A skip past every remaining pair ends the graph.
        if !skip.is_finite() || skip >= pairs {
            break;
        }
        w += 1 + skip as i64;
        while w >= v && v < n {
            w -= v;
            v += 1;
        }
        if v < n {
            graph.add_edge(make_node(v as usize), make_node(w as usize))?;
        }
    }
    debug!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        p,
        "generated G(n, p) graph"
    );
    Ok(graph)
}
