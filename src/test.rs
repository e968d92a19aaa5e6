//! Shared helpers for unit tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `n` points uniformly distributed in `[0, cube_size)^dim`.
///
/// Seeded so every test run sees the same point set.
pub(crate) fn hypercube_points(n: usize, cube_size: f64, dim: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dim).map(|_| rng.gen_range(0.0..cube_size)).collect())
        .collect()
}
