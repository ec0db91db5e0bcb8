//! Random number generation for Monte Carlo simulation.
//!
//! This module provides [`SimRng`], a seeded PRNG wrapper with batch
//! sampling of standard normal variates. Generators are scoped to one
//! pricing call each: seeded runs reproduce bit-for-bit, and unseeded runs
//! draw a fresh entropy seed instead of mutating process-wide state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Simulation random number generator.
///
/// Wraps a seeded [`StdRng`] and records the seed so reproducibility
/// issues can be logged and replayed.
///
/// # Examples
///
/// ```rust
/// use optstrat_pricing::rng::SimRng;
///
/// let mut rng1 = SimRng::from_seed(42);
/// let mut rng2 = SimRng::from_seed(42);
///
/// // Same seed produces identical sequences.
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// ```
pub struct SimRng {
    inner: StdRng,
    seed: u64,
}

impl SimRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of draws for a
    /// fixed set of simulation parameters.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a fresh entropy seed.
    ///
    /// The drawn seed is recorded and reportable via [`seed`](Self::seed),
    /// so even unseeded runs can be replayed after the fact.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed this generator was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a single standard normal variate.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with independent standard normal variates.
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller. An
    /// empty buffer is a no-op.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
