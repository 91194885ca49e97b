use std::collections::{BTreeMap, BTreeSet};

use plexus_core::{DigraphSink, HypergraphView, Label, PlexusError};
use plexus_graph::DiGraph;
use tracing::{debug, trace};

use crate::options::{DuplicatePolicy, EncapsulationOptions, Relations};

/// Maps each edge to the edges that encapsulate it.
type Encapsulators<E> = BTreeMap<E, BTreeSet<E>>;

/// Builds the encapsulation DAG of a hypergraph.
///
/// DAG nodes are the hypergraph's edge ids, isolated ones included; an arc
/// `u -> v` means the node set of `u` is contained in the node set of `v`.
/// A hypergraph without edges yields an empty DAG.
pub fn to_encapsulation_dag<H: HypergraphView>(
    hypergraph: &H,
    relations: Relations,
) -> Result<DiGraph<H::Edge>, PlexusError> {
    to_encapsulation_dag_with(hypergraph, &EncapsulationOptions::new(relations))
}

/// [`to_encapsulation_dag`] with an explicit duplicate policy.
pub fn to_encapsulation_dag_with<H: HypergraphView>(
    hypergraph: &H,
    options: &EncapsulationOptions,
) -> Result<DiGraph<H::Edge>, PlexusError> {
    let mut dag = DiGraph::new();
    write_encapsulation_dag(hypergraph, options, &mut dag)?;
    Ok(dag)
}

/// Writes the encapsulation DAG into any directed graph sink.
///
/// All arcs are computed before the sink is touched, so on error it is left
/// as it was.
pub fn write_encapsulation_dag<H, S>(
    hypergraph: &H,
    options: &EncapsulationOptions,
    sink: &mut S,
) -> Result<(), PlexusError>
where
    H: HypergraphView,
    S: DigraphSink<H::Edge>,
{
    let inclusion = inclusion_relation(hypergraph, options.duplicates)?;
    let arcs = match options.relations {
        Relations::Inclusion => inclusion,
        Relations::Immediate => transitive_reduction(&inclusion),
        Relations::Empirical => nearest_by_size(hypergraph, &inclusion)?,
    };

    let mut num_arcs = 0usize;
    for edge in hypergraph.edges() {
        sink.add_node(edge);
    }
    for (edge, encapsulators) in arcs {
        for encapsulator in encapsulators {
            sink.add_edge(edge.clone(), encapsulator);
            num_arcs += 1;
        }
    }
    debug!(
        relations = %options.relations,
        edges = hypergraph.edges().len(),
        arcs = num_arcs,
        "built encapsulation dag"
    );
    Ok(())
}

/// Every containment pair, discovered through shared nodes.
fn inclusion_relation<H: HypergraphView>(
    hypergraph: &H,
    duplicates: DuplicatePolicy,
) -> Result<Encapsulators<H::Edge>, PlexusError> {
    let mut members: BTreeMap<H::Edge, &BTreeSet<H::Node>> = BTreeMap::new();
    let mut incidence: BTreeMap<&H::Node, Vec<H::Edge>> = BTreeMap::new();
    for edge in hypergraph.edges() {
        let nodes = hypergraph.members(&edge)?;
        for node in nodes {
            incidence.entry(node).or_default().push(edge.clone());
        }
        members.insert(edge, nodes);
    }

    let mut relation: Encapsulators<H::Edge> = BTreeMap::new();
    for (edge, nodes) in &members {
        let candidates: BTreeSet<&H::Edge> = nodes
            .iter()
            .filter_map(|node| incidence.get(node))
            .flatten()
            .filter(|candidate| *candidate != edge)
            .collect();
        trace!(edge = ?edge, candidates = candidates.len(), "encapsulation candidates");

        let encapsulators = relation.entry(edge.clone()).or_default();
        for candidate in candidates {
            let candidate_nodes = members[candidate];
            if nodes.len() > candidate_nodes.len() || !nodes.is_subset(candidate_nodes) {
                continue;
            }
            let strict = nodes.len() < candidate_nodes.len();
            let tie = duplicates == DuplicatePolicy::LowerIntoHigher && edge < candidate;
            if strict || tie {
                encapsulators.insert(candidate.clone());
            }
        }
    }
    Ok(relation)
}

/// Drops `a -> c` whenever some `b` has `a -> b` and `b -> c`.
///
/// `relation` must be transitively closed, which the inclusion relation is.
fn transitive_reduction<E: Label>(relation: &Encapsulators<E>) -> Encapsulators<E> {
    relation
        .iter()
        .map(|(edge, encapsulators)| {
            let covering: BTreeSet<E> = encapsulators
                .iter()
                .filter(|target| {
                    !encapsulators.iter().any(|middle| {
                        relation
                            .get(middle)
                            .map(|above| above.contains(*target))
                            .unwrap_or(false)
                    })
                })
                .cloned()
                .collect();
            (edge.clone(), covering)
        })
        .collect()
}

/// Keeps, for each edge, only the encapsulators of minimum size.
fn nearest_by_size<H: HypergraphView>(
    hypergraph: &H,
    relation: &Encapsulators<H::Edge>,
) -> Result<Encapsulators<H::Edge>, PlexusError> {
    let mut nearest = BTreeMap::new();
    for (edge, encapsulators) in relation {
        let mut sized = Vec::with_capacity(encapsulators.len());
        for encapsulator in encapsulators {
            sized.push((hypergraph.members(encapsulator)?.len(), encapsulator));
        }
        let smallest = sized.iter().map(|(size, _)| *size).min();
        let kept: BTreeSet<H::Edge> = sized
            .into_iter()
            .filter(|(size, _)| Some(*size) == smallest)
            .map(|(_, encapsulator)| encapsulator.clone())
            .collect();
        nearest.insert(edge.clone(), kept);
    }
    Ok(nearest)
}
