//! Generator configuration
//!
//! The three scenario parameters, their validation, and loading them from
//! JSON. A [`GeneratorConfig`] that passed [`GeneratorConfig::validate`] is
//! always safe to generate from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest mean order count; per-announcement counts are `u32`.
pub const MAX_ORDERS_PER_ANNOUNCEMENT: f64 = u32::MAX as f64;

/// Errors raised while building a generator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Scenario length must be positive")]
    InvalidScenarioLength,

    #[error("Announcement rate must be positive and finite, got {0}")]
    InvalidAnnouncementRate(f64),

    #[error("Orders per announcement must be positive, finite and fit a u32 count, got {0}")]
    InvalidOrdersPerAnnouncement(f64),

    #[error("Failed to parse generator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameters of a Poisson arrival-times generator.
///
/// # Example
/// ```
/// use poisson_arrivals::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json(
///     r#"{"scenario_length": 480, "announcement_rate": 10.0, "orders_per_announcement": 1.2}"#,
/// ).unwrap();
/// assert_eq!(config.scenario_length, 480);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Scenario horizon in minutes; every timestamp is strictly below it
    pub scenario_length: u64,

    /// Mean number of announcements per hour
    pub announcement_rate: f64,

    /// Mean number of orders spawned by one announcement
    pub orders_per_announcement: f64,
}

impl GeneratorConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is positive (and finite for the reals).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scenario_length == 0 {
            return Err(ConfigError::InvalidScenarioLength);
        }

        if !is_positive_finite(self.announcement_rate) {
            return Err(ConfigError::InvalidAnnouncementRate(
                self.announcement_rate,
            ));
        }

        if !is_positive_finite(self.orders_per_announcement)
            || self.orders_per_announcement > MAX_ORDERS_PER_ANNOUNCEMENT
        {
            return Err(ConfigError::InvalidOrdersPerAnnouncement(
                self.orders_per_announcement,
            ));
        }

        Ok(())
    }

    /// Announcement rate converted to announcements per minute.
    pub fn rate_per_minute(&self) -> f64 {
        self.announcement_rate / 60.0
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(length: u64, rate: f64, opa: f64) -> GeneratorConfig {
        GeneratorConfig {
            scenario_length: length,
            announcement_rate: rate,
            orders_per_announcement: opa,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config(480, 12.0, 1.5).validate().is_ok());
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            config(0, 12.0, 1.0).validate(),
            Err(ConfigError::InvalidScenarioLength)
        ));
    }

    #[test]
    fn test_nan_rate_rejected() {
        assert!(matches!(
            config(10, f64::NAN, 1.0).validate(),
            Err(ConfigError::InvalidAnnouncementRate(_))
        ));
    }

    #[test]
    fn test_orders_above_count_range_rejected() {
        assert!(matches!(
            config(10, 1.0, 5e9 + 0.5).validate(),
            Err(ConfigError::InvalidOrdersPerAnnouncement(_))
        ));
        assert!(config(10, 1.0, MAX_ORDERS_PER_ANNOUNCEMENT).validate().is_ok());
    }

    #[test]
    fn test_rate_per_minute() {
        assert_eq!(config(10, 30.0, 1.0).rate_per_minute(), 0.5);
    }
}
