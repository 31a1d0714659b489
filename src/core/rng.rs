//! Deterministic random move generation for scrambles.
//!
//! Scrambles draw their moves through an explicit, seedable generator rather
//! than ambient process randomness, so a test (or a replay) can pin the seed
//! and get the exact same move sequence every time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::moves::CubeMove;
use super::rotation::Rotation;
use super::side::FaceSide;

/// Deterministic RNG for scramble move selection.
///
/// Uses ChaCha8: fast, portable, and stable across platforms, so a seed
/// pins the scramble sequence everywhere.
#[derive(Clone, Debug)]
pub struct CubeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CubeRng {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniformly random face side.
    pub fn side(&mut self) -> FaceSide {
        FaceSide::ALL[self.inner.gen_range(0..FaceSide::ALL.len())]
    }

    /// Draw a uniformly random rotation direction.
    pub fn rotation(&mut self) -> Rotation {
        Rotation::ALL[self.inner.gen_range(0..Rotation::ALL.len())]
    }

    /// Draw a uniformly random move.
    pub fn next_move(&mut self) -> CubeMove {
        CubeMove::new(self.side(), self.rotation())
    }
}
