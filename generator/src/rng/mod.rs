//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number generation.
//! CRITICAL: All randomness in the generator MUST go through a caller-owned source.

mod source;
mod xorshift;

pub use source::RandomSource;
pub use xorshift::ScenarioRng;
