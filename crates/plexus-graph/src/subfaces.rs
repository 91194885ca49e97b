//! Combinatorial enumeration of the faces of an edge.

use std::collections::BTreeSet;

use itertools::Itertools;
use plexus_core::{Label, PlexusError};

/// Returns the subfaces of one edge.
///
/// With `order = None` every proper non-empty subset is produced, smallest
/// first. With `order = Some(m)` every subset of `m + 1` nodes is produced,
/// which for `m` equal to the edge order is the edge itself. Subsets come out
/// in lexicographic order of the sorted edge.
pub fn subfaces_of<N: Label>(
    edge: &BTreeSet<N>,
    order: Option<usize>,
) -> Result<Vec<BTreeSet<N>>, PlexusError> {
    let size = edge.len();
    match order {
        None => Ok((1..size)
            .flat_map(|k| edge.iter().cloned().combinations(k))
            .map(BTreeSet::from_iter)
            .collect()),
        Some(order) => {
            if order + 1 > size {
                return Err(PlexusError::invalid_order(order, size));
            }
            Ok(edge
                .iter()
                .cloned()
                .combinations(order + 1)
                .map(BTreeSet::from_iter)
                .collect())
        }
    }
}

/// Returns the deduplicated subfaces of a collection of edges.
///
/// Every edge is validated against `order` before anything is enumerated.
/// The result keeps first-seen order: edges in input order, then subsets as
/// [`subfaces_of`] yields them.
pub fn subfaces<N: Label>(
    edges: &[BTreeSet<N>],
    order: Option<usize>,
) -> Result<Vec<BTreeSet<N>>, PlexusError> {
    if let Some(order) = order {
        if let Some(edge) = edges.iter().find(|edge| order + 1 > edge.len()) {
            return Err(PlexusError::invalid_order(order, edge.len()));
        }
    }

    let mut seen = BTreeSet::new();
    let mut faces = Vec::new();
    for edge in edges {
        for face in subfaces_of(edge, order)? {
            if seen.insert(face.clone()) {
                faces.push(face);
            }
        }
    }
    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(nodes: &[u32]) -> BTreeSet<u32> {
        nodes.iter().copied().collect()
    }

    #[test]
    fn proper_subfaces_exclude_edge_itself() {
        let faces = subfaces_of(&set(&[1, 2, 3]), None).unwrap();
        assert_eq!(faces.len(), 6);
        assert!(!faces.contains(&set(&[1, 2, 3])));
        assert_eq!(faces[0], set(&[1]));
    }

    #[test]
    fn top_order_yields_the_edge() {
        let faces = subfaces_of(&set(&[4, 5]), Some(1)).unwrap();
        assert_eq!(faces, vec![set(&[4, 5])]);
    }

    #[test]
    fn singleton_has_no_proper_subfaces() {
        assert!(subfaces_of(&set(&[7]), None).unwrap().is_empty());
    }
}
