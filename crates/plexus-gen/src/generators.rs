use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use plexus_core::errors::PlexusError;
use plexus_core::rng::RngHandle;
use plexus_core::{validate_probabilities, validate_probability, Label, NodeId, SimpleGraph};
use plexus_graph::{
    find_triangles, gnp_random_graph, maximal_cliques, subfaces_of, SimplicialComplex,
};
use tracing::{debug, trace};

use crate::options::FlagComplexOptions;

/// Samples a random simplicial complex over nodes `0..n`.
///
/// For each order `d` from 1 to `ps.len()`, every `(d + 1)`-node combination
/// is drawn in lexicographic order and kept with probability `ps[d - 1]`.
/// Kept simplices are closed downward. The number of candidates is
/// `C(n, d + 1)` per order, so `n` and `ps.len()` must stay small.
pub fn random_simplicial_complex(
    n: usize,
    ps: &[f64],
    rng: &mut RngHandle,
) -> Result<SimplicialComplex<NodeId>, PlexusError> {
    validate_probabilities(ps)?;

    let nodes: Vec<NodeId> = (0..n as u64).map(NodeId::from_raw).collect();
    let mut simplices = Vec::new();
    for (index, &p) in ps.iter().enumerate() {
        let order = index + 1;
        let before = simplices.len();
        for candidate in nodes.iter().copied().combinations(order + 1) {
            if rng.accept(p) {
                simplices.push(candidate);
            }
        }
        trace!(order, p, kept = simplices.len() - before, "sampled faces");
    }

    let mut complex = SimplicialComplex::new();
    complex.add_nodes(nodes);
    complex.add_simplices(simplices, None)?;
    debug!(
        nodes = complex.num_nodes(),
        simplices = complex.num_edges(),
        max_order = ?complex.max_order(),
        "generated random simplicial complex"
    );
    Ok(complex)
}

/// Builds the flag (clique) complex of `graph`.
///
/// Nodes and edges of the graph enter as 0- and 1-simplices (edges only when
/// `max_order` allows them). Without
/// promotion probabilities every maximal clique is filled, truncated to
/// `max_order`. With probabilities, cliques above `max_order` are first
/// split into their faces of that order, candidates are grouped by size, and
/// each candidate of order `i + 2` is kept with probability `ps[i]`, drawn in
/// group order. Only the first `max_order - 1` entries of `ps` are used.
pub fn flag_complex<G: SimpleGraph>(
    graph: &G,
    options: &FlagComplexOptions,
    rng: &mut RngHandle,
) -> Result<SimplicialComplex<G::Node>, PlexusError> {
    validate_probabilities(&options.ps)?;

    let cliques = maximal_cliques(graph)?;
    let mut complex = skeleton(graph, options.max_order)?;

    if options.ps.is_empty() {
        complex.add_simplices(cliques, options.max_order)?;
        log_complex("flag complex", &complex);
        return Ok(complex);
    }

    let candidates = match options.max_order {
        Some(order) => truncate_cliques(&cliques, order)?,
        None => cliques,
    };
    let mut by_size: BTreeMap<usize, Vec<BTreeSet<G::Node>>> = BTreeMap::new();
    for candidate in candidates {
        by_size.entry(candidate.len()).or_default().push(candidate);
    }

    for (index, &p) in options.ps.iter().take(options.active_orders()).enumerate() {
        let order = index + 2;
        let group = by_size.remove(&(order + 1)).unwrap_or_default();
        let total = group.len();
        let kept: Vec<_> = group.into_iter().filter(|_| rng.accept(p)).collect();
        trace!(order, p, candidates = total, kept = kept.len(), "promoted cliques");
        complex.add_simplices(kept, options.max_order)?;
    }

    log_complex("flag complex", &complex);
    Ok(complex)
}

/// Builds the flag complex of `graph` up to order 2.
///
/// Every triangle of the graph is filled, or, when `p2` is given, kept with
/// probability `p2` (one draw per triangle in sorted order). Cheaper than
/// [`flag_complex`] because no clique enumeration is needed.
pub fn flag_complex_d2<G: SimpleGraph>(
    graph: &G,
    p2: Option<f64>,
    rng: &mut RngHandle,
) -> Result<SimplicialComplex<G::Node>, PlexusError> {
    if let Some(p) = p2 {
        validate_probability(p)?;
    }

    let mut complex = skeleton(graph, None)?;
    let triangles = find_triangles(graph)?;
    let total = triangles.len();
    let kept: Vec<_> = match p2 {
        Some(p) => triangles.into_iter().filter(|_| rng.accept(p)).collect(),
        None => triangles,
    };
    trace!(candidates = total, kept = kept.len(), "filled triangles");
    complex.add_simplices(kept, None)?;

    log_complex("flag complex d2", &complex);
    Ok(complex)
}

/// Fills every triangle of a `G(n, p)` random graph.
///
/// Graph generation consumes the stream first.
pub fn random_flag_complex_d2(
    n: usize,
    p: f64,
    rng: &mut RngHandle,
) -> Result<SimplicialComplex<NodeId>, PlexusError> {
    validate_probability(p)?;
    let graph = gnp_random_graph(n, p, rng)?;
    flag_complex_d2(&graph, None, rng)
}

/// Fills every clique of a `G(n, p)` random graph up to `max_order`.
pub fn random_flag_complex(
    n: usize,
    p: f64,
    max_order: Option<usize>,
    rng: &mut RngHandle,
) -> Result<SimplicialComplex<NodeId>, PlexusError> {
    validate_probability(p)?;
    let graph = gnp_random_graph(n, p, rng)?;
    flag_complex(&graph, &FlagComplexOptions::up_to(max_order), rng)
}

/// Nodes as 0-simplices and edges as 1-simplices, capped at `max_order`.
fn skeleton<G: SimpleGraph>(
    graph: &G,
    max_order: Option<usize>,
) -> Result<SimplicialComplex<G::Node>, PlexusError> {
    let mut complex = SimplicialComplex::new();
    complex.add_simplices(graph.nodes().map(|node| [node]), None)?;
    complex.add_simplices(graph.edges().map(|(u, v)| [u, v]), max_order)?;
    Ok(complex)
}

/// Splits cliques above `order` into their faces of that order.
fn truncate_cliques<N: Label>(
    cliques: &[BTreeSet<N>],
    order: usize,
) -> Result<Vec<BTreeSet<N>>, PlexusError> {
    let mut seen = BTreeSet::new();
    let mut faces = Vec::new();
    for clique in cliques {
        let pieces = if clique.len() > order + 1 {
            subfaces_of(clique, Some(order))?
        } else {
            vec![clique.clone()]
        };
        for piece in pieces {
            if seen.insert(piece.clone()) {
                faces.push(piece);
            }
        }
    }
    Ok(faces)
}

fn log_complex<N: Label>(kind: &str, complex: &SimplicialComplex<N>) {
    debug!(
        kind,
        nodes = complex.num_nodes(),
        simplices = complex.num_edges(),
        max_order = ?complex.max_order(),
        "generated complex"
    );
}
