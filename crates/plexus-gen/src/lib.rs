#![deny(missing_docs)]

//! Random and flag (clique) simplicial complex generators.
//!
//! Every generator takes an explicit [`RngHandle`](plexus_core::RngHandle);
//! the same seed always reproduces the same complex.

mod generators;
mod options;

pub use generators::{
    flag_complex, flag_complex_d2, random_flag_complex, random_flag_complex_d2,
    random_simplicial_complex,
};
pub use options::FlagComplexOptions;
