//! RNG injection for deterministic tie-breaking.

use rand::{Rng, SeedableRng};

/// The single randomness primitive the router is allowed to use.
///
/// Restricting the router to this one method — rather than letting it
/// reach into a general-purpose RNG trait — is what keeps tie-break
/// selection reproducible across independent implementations for a fixed
/// seed (§5, §8 property 5).
pub trait ChoiceRng {
    /// Draws a uniformly random index in `0..len`. `len` must be nonzero.
    fn choice(&mut self, len: usize) -> usize;
}

/// A [`ChoiceRng`] backed by `rand`'s PRNG.
pub struct StdChoiceRng {
    inner: rand::rngs::StdRng,
}

impl StdChoiceRng {
    /// Creates a deterministic RNG from a fixed seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    /// Creates an RNG seeded from the OS entropy source.
    pub fn from_entropy() -> Self {
        Self {
            inner: rand::rngs::StdRng::from_entropy(),
        }
    }
}

impl ChoiceRng for StdChoiceRng {
    fn choice(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "choice over an empty sequence");
        self.inner.gen_range(0..len)
    }
}
