//! Poisson Arrival Times - Scenario Order Generator
//!
//! Generates the order arrival timestamps of a simulation scenario. Announcements
//! arrive as a Poisson process and each announcement spawns one or more orders.
//!
//! # Architecture
//!
//! - **arrivals**: The generator, the arrival-time sampler and the order-count allocator
//! - **config**: Generator parameters and their validation
//! - **core**: Numeric rounding helpers shared by the sampler and allocator
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All timestamps are whole minutes in `[0, scenario_length)`
//! 2. All randomness is deterministic (caller-owned, seeded RNG)
//! 3. Invalid parameters are rejected at construction, never at generation

pub mod arrivals;
pub mod config;
pub mod core;
pub mod rng;

pub use arrivals::{
    ArrivalTimesGenerator, GeneratedArrivals, OrderCountAssignment, PoissonProcessArrivalTimes,
};
pub use config::{ConfigError, GeneratorConfig, MAX_ORDERS_PER_ANNOUNCEMENT};
pub use rng::{RandomSource, ScenarioRng};
