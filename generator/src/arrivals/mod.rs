//! Arrival-times generation for scenario orders.
//!
//! The generator runs in two phases. The [`sampler`] draws the announcement
//! timestamps of a Poisson process over the scenario horizon, then the
//! [`allocation`] phase expands each announcement into its orders. Both phases
//! draw from the same caller-owned random source.
//!
//! # Key Principles
//!
//! 1. **Determinism**: Same source state + same config → same arrival times
//! 2. **Eager validation**: A constructed generator never fails to generate
//! 3. **Fair allocation**: Fractional order means are rounded without positional bias
//!
//! # Example
//!
//! ```
//! use poisson_arrivals::{ArrivalTimesGenerator, PoissonProcessArrivalTimes, ScenarioRng};
//!
//! let generator = PoissonProcessArrivalTimes::new(480, 10.0, 1.2).unwrap();
//! let mut rng = ScenarioRng::new(42);
//!
//! let arrival_times = generator.generate(&mut rng);
//! assert!(arrival_times.windows(2).all(|w| w[0] <= w[1]));
//! assert!(arrival_times.iter().all(|&t| t < 480));
//! ```

pub mod allocation;
pub mod sampler;

pub use allocation::OrderCountAssignment;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GeneratorConfig};
use crate::rng::RandomSource;

/// A source of order arrival times for a scenario.
pub trait ArrivalTimesGenerator {
    /// Generate the non-decreasing order arrival times, in minutes.
    fn generate<R: RandomSource>(&self, rng: &mut R) -> Vec<u64>;
}

/// Everything one generation call produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArrivals {
    /// Strictly increasing announcement timestamps
    pub announcements: Vec<u64>,

    /// Orders spawned by each announcement
    pub order_counts: OrderCountAssignment,

    /// One timestamp per order, non-decreasing
    pub arrival_times: Vec<u64>,
}

/// Arrival times of orders announced by a Poisson process.
///
/// Discretizing gaps to whole minutes and dropping zero gaps after the first
/// announcement makes the realized announcement count slightly lower than the
/// continuous Poisson mean.
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonProcessArrivalTimes {
    config: GeneratorConfig,
}

impl PoissonProcessArrivalTimes {
    /// Create a generator.
    ///
    /// # Arguments
    ///
    /// * `scenario_length` - Scenario horizon in minutes
    /// * `announcement_rate` - Mean announcements per hour
    /// * `orders_per_announcement` - Mean orders per announcement
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any parameter is not positive.
    pub fn new(
        scenario_length: u64,
        announcement_rate: f64,
        orders_per_announcement: f64,
    ) -> Result<Self, ConfigError> {
        Self::from_config(GeneratorConfig {
            scenario_length,
            announcement_rate,
            orders_per_announcement,
        })
    }

    /// Create a generator from an existing config, validating it first.
    pub fn from_config(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn scenario_length(&self) -> u64 {
        self.config.scenario_length
    }

    pub fn announcement_rate(&self) -> f64 {
        self.config.announcement_rate
    }

    pub fn orders_per_announcement(&self) -> f64 {
        self.config.orders_per_announcement
    }

    /// Mean gap between announcements before discretization, in minutes
    pub fn mean_interarrival_minutes(&self) -> f64 {
        1.0 / self.config.rate_per_minute()
    }

    /// Generate arrival times, keeping the intermediate announcements and counts.
    pub fn generate_detailed<R: RandomSource>(&self, rng: &mut R) -> GeneratedArrivals {
        let announcements = sampler::sample_announcements(
            rng,
            self.config.scenario_length,
            self.config.announcement_rate,
        );
        let order_counts = allocation::allocate_order_counts(
            rng,
            &announcements,
            self.config.orders_per_announcement,
        );
        let arrival_times = allocation::expand_orders(&announcements, &order_counts);

        debug!(
            "generated {} announcements, {} orders over {} minutes",
            announcements.len(),
            arrival_times.len(),
            self.config.scenario_length
        );

        GeneratedArrivals {
            announcements,
            order_counts,
            arrival_times,
        }
    }
}

impl ArrivalTimesGenerator for PoissonProcessArrivalTimes {
    fn generate<R: RandomSource>(&self, rng: &mut R) -> Vec<u64> {
        self.generate_detailed(rng).arrival_times
    }
}
