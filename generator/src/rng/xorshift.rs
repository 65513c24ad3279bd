//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for scenario generation.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers → same scenario. The generator
//! also hands out child sources seeded from this one, so a whole scenario
//! replays from a single recorded state.

use rand::{Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// Deterministic random number generator using xorshift64*
///
/// Implements [`RngCore`], so it plugs into the `rand` ecosystem and gets
/// the [`RandomSource`](super::RandomSource) capabilities for free.
///
/// # Example
/// ```
/// use poisson_arrivals::ScenarioRng;
///
/// let mut rng = ScenarioRng::new(12345);
/// let value = rng.next();
/// assert_ne!(rng.state(), 12345);
/// # let _ = value;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRng {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl ScenarioRng {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1, since xorshift never leaves the zero state.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value, advancing the internal state.
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(MULTIPLIER)
    }

    /// Current RNG state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use poisson_arrivals::ScenarioRng;
    ///
    /// let mut rng = ScenarioRng::new(7);
    /// rng.next();
    /// let mut replay = ScenarioRng::new(rng.state());
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RngCore for ScenarioRng {
    fn next_u32(&mut self) -> u32 {
        // High bits of xorshift64* are the strongest
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for ScenarioRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// Uses the seed directly as the state, so `seed_from_u64(s)` and
    /// `ScenarioRng::new(s)` produce the same sequence.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
