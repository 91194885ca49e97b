//! Deterministic RNG wrapper.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random stream threaded explicitly through every generator call.
///
/// The handle is a thin wrapper around `StdRng`. Nothing in plexus keeps a
/// process-wide seed: two calls given handles built from the same seed
/// consume identical streams, and calls on different threads with their own
/// handles never interfere.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a handle seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draws one Bernoulli sample, `true` with probability `p`.
    ///
    /// `p` must already be validated; `0.0` never succeeds and `1.0` always
    /// does. One draw is consumed for every `p < 1.0`.
    pub fn accept(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Draws a uniform sample from `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
