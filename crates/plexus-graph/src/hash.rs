use sha2::{Digest, Sha256};

use plexus_core::Label;

use crate::complex::SimplicialComplex;

/// Computes the canonical structural hash of a complex.
///
/// Covers the node set and the sorted simplex node sets, not the edge ids, so
/// two complexes holding the same simplices hash equal regardless of the
/// insertion order. Node labels are encoded through their `Debug` form.
pub fn canonical_hash<N: Label>(complex: &SimplicialComplex<N>) -> String {
    let mut hasher = Sha256::new();

    hasher.update((complex.num_nodes() as u64).to_le_bytes());
    for node in plexus_core::HypergraphView::nodes(complex) {
        update_label(&node, &mut hasher);
    }

    let simplices = complex.simplices();
    hasher.update((simplices.len() as u64).to_le_bytes());
    for simplex in simplices {
        hasher.update((simplex.len() as u64).to_le_bytes());
        for node in &simplex {
            update_label(node, &mut hasher);
        }
    }

    format!("{:x}", hasher.finalize())
}

fn update_label<N: Label>(label: &N, hasher: &mut Sha256) {
    let encoded = format!("{label:?}");
    hasher.update((encoded.len() as u64).to_le_bytes());
    hasher.update(encoded.as_bytes());
}
