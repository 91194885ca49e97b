//! Clique finding over any [`SimpleGraph`].

use std::collections::{BTreeMap, BTreeSet};

use plexus_core::{Label, PlexusError, SimpleGraph};

type Adjacency<N> = BTreeMap<N, BTreeSet<N>>;

fn adjacency_of<G: SimpleGraph>(graph: &G) -> Result<Adjacency<G::Node>, PlexusError> {
    let mut adjacency = BTreeMap::new();
    for node in graph.nodes() {
        let mut neighbours: BTreeSet<G::Node> = graph.neighbors(&node)?.into_iter().collect();
        neighbours.remove(&node);
        adjacency.insert(node, neighbours);
    }
    Ok(adjacency)
}

/// Returns every maximal clique of `graph`, sorted.
///
/// Bron-Kerbosch with pivoting. Isolated nodes come out as one-node cliques.
pub fn maximal_cliques<G: SimpleGraph>(graph: &G) -> Result<Vec<BTreeSet<G::Node>>, PlexusError> {
    let adjacency = adjacency_of(graph)?;
    let mut cliques = Vec::new();
    let candidates: BTreeSet<G::Node> = adjacency.keys().cloned().collect();
    expand(
        &adjacency,
        &mut Vec::new(),
        candidates,
        BTreeSet::new(),
        &mut cliques,
    );
    cliques.sort();
    Ok(cliques)
}

fn expand<N: Label>(
    adjacency: &Adjacency<N>,
    clique: &mut Vec<N>,
    mut candidates: BTreeSet<N>,
    mut excluded: BTreeSet<N>,
    out: &mut Vec<BTreeSet<N>>,
) {
    if candidates.is_empty() {
        if excluded.is_empty() {
            out.push(clique.iter().cloned().collect());
        }
        return;
    }

    let empty = BTreeSet::new();
    let neighbours = |node: &N| adjacency.get(node).unwrap_or(&empty);
    let pivot = candidates
        .iter()
        .chain(excluded.iter())
        .max_by_key(|node| neighbours(*node).intersection(&candidates).count())
        .cloned();
    let pivot_neighbours = pivot.as_ref().map(neighbours).unwrap_or(&empty);
    let branch: Vec<N> = candidates.difference(pivot_neighbours).cloned().collect();

    for node in branch {
        let adjacent = neighbours(&node);
        clique.push(node.clone());
        expand(
            adjacency,
            clique,
            candidates.intersection(adjacent).cloned().collect(),
            excluded.intersection(adjacent).cloned().collect(),
            out,
        );
        clique.pop();
        candidates.remove(&node);
        excluded.insert(node);
    }
}

/// Returns every triangle (3-clique) of `graph`, sorted.
pub fn find_triangles<G: SimpleGraph>(graph: &G) -> Result<Vec<BTreeSet<G::Node>>, PlexusError> {
    let adjacency = adjacency_of(graph)?;
    let mut triangles = Vec::new();
    for (u, u_neighbours) in &adjacency {
        for v in u_neighbours.iter().filter(|v| *v > u) {
            let Some(v_neighbours) = adjacency.get(v) else {
                continue;
            };
            for w in u_neighbours.intersection(v_neighbours).filter(|w| *w > v) {
                triangles.push(BTreeSet::from([u.clone(), v.clone(), w.clone()]));
            }
        }
    }
    Ok(triangles)
}
