use std::collections::{BTreeMap, BTreeSet};

use plexus_core::{DigraphSink, Label};

/// Directed graph with sorted successor and predecessor sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiGraph<V: Label> {
    successors: BTreeMap<V, BTreeSet<V>>,
    predecessors: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Label> DiGraph<V> {
    /// Creates an empty directed graph.
    pub fn new() -> Self {
        Self {
            successors: BTreeMap::new(),
            predecessors: BTreeMap::new(),
        }
    }

    /// Removes the arc `source -> target`, returning whether it existed.
    pub fn remove_edge(&mut self, source: &V, target: &V) -> bool {
        let removed = self
            .successors
            .get_mut(source)
            .map(|targets| targets.remove(target))
            .unwrap_or(false);
        if let Some(sources) = self.predecessors.get_mut(target) {
            sources.remove(source);
        }
        removed
    }

    /// Iterates over the nodes in order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.successors.keys()
    }

    /// Returns all arcs as sorted `(source, target)` pairs.
    pub fn edges(&self) -> Vec<(V, V)> {
        self.successors
            .iter()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |target| (source.clone(), target.clone()))
            })
            .collect()
    }

    /// Returns the direct successors of `node`; empty when unknown.
    pub fn successors(&self, node: &V) -> Vec<V> {
        self.successors
            .get(node)
            .map(|targets| targets.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the direct predecessors of `node`; empty when unknown.
    pub fn predecessors(&self, node: &V) -> Vec<V> {
        self.predecessors
            .get(node)
            .map(|sources| sources.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns whether `node` is present.
    pub fn has_node(&self, node: &V) -> bool {
        self.successors.contains_key(node)
    }

    /// Returns whether the arc `source -> target` is present.
    pub fn has_edge(&self, source: &V, target: &V) -> bool {
        self.successors
            .get(source)
            .map(|targets| targets.contains(target))
            .unwrap_or(false)
    }

    /// Number of nodes.
    pub fn number_of_nodes(&self) -> usize {
        self.successors.len()
    }

    /// Number of arcs.
    pub fn number_of_edges(&self) -> usize {
        self.successors.values().map(BTreeSet::len).sum()
    }

    /// Returns every pair `(u, v)` with a non-empty directed path from `u` to `v`.
    pub fn transitive_closure(&self) -> BTreeSet<(V, V)> {
        let mut closure = BTreeSet::new();
        for start in self.successors.keys() {
            let mut stack: Vec<&V> = self.successors[start].iter().collect();
            let mut seen: BTreeSet<&V> = BTreeSet::new();
            while let Some(node) = stack.pop() {
                if !seen.insert(node) {
                    continue;
                }
                closure.insert((start.clone(), node.clone()));
                if let Some(next) = self.successors.get(node) {
                    stack.extend(next.iter());
                }
            }
        }
        closure
    }

    /// Returns whether the graph has no directed cycle.
    pub fn is_acyclic(&self) -> bool {
        self.transitive_closure()
            .iter()
            .all(|(source, target)| source != target)
    }
}

impl<V: Label> Default for DiGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Label> DigraphSink<V> for DiGraph<V> {
    fn add_node(&mut self, node: V) {
        self.successors.entry(node.clone()).or_default();
        self.predecessors.entry(node).or_default();
    }

    fn add_edge(&mut self, source: V, target: V) {
        self.add_node(source.clone());
        self.add_node(target.clone());
        if let Some(targets) = self.successors.get_mut(&source) {
            targets.insert(target.clone());
        }
        if let Some(sources) = self.predecessors.get_mut(&target) {
            sources.insert(source);
        }
    }
}
