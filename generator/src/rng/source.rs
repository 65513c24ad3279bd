//! Random source capabilities used by the generator
//!
//! The sampler and allocator never talk to a concrete RNG. They ask for
//! seeds, uniform reals, exponential reals and permutations, and any
//! [`rand::Rng`] provides all four.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Exp1};

/// Capabilities the generator needs from a caller-owned random source.
///
/// Every call advances the source's state. Reproducibility depends on an
/// undisturbed sequence of draws, so a source must not be shared between two
/// concurrent generation calls.
pub trait RandomSource {
    /// Draw a seed for a child source.
    fn next_seed(&mut self) -> u64;

    /// Uniform real in `[0.0, 1.0)`.
    fn uniform(&mut self) -> f64;

    /// Exponentially distributed real with the given rate (mean `1 / rate`).
    ///
    /// `rate` must be positive and finite.
    fn exponential(&mut self, rate: f64) -> f64;

    /// Permute `items` uniformly at random in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng> RandomSource for R {
    fn next_seed(&mut self) -> u64 {
        self.next_u64()
    }

    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn exponential(&mut self, rate: f64) -> f64 {
        let standard: f64 = Exp1.sample(self);
        standard / rate
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}
