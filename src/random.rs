//! Seeded pseudo-random streams.
//!
//! Every stochastic component receives its stream explicitly, created
//! here from a `u64` seed, so identical seeds replay identical runs.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic stream for `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
