//! Tests for generator configuration and eager validation

use poisson_arrivals::{
    ConfigError, GeneratorConfig, PoissonProcessArrivalTimes, MAX_ORDERS_PER_ANNOUNCEMENT,
};

#[test]
fn test_config_from_json() {
    let config = GeneratorConfig::from_json(
        r#"{
            "scenario_length": 480,
            "announcement_rate": 10.0,
            "orders_per_announcement": 1.2
        }"#,
    )
    .unwrap();

    assert_eq!(config.scenario_length, 480);
    assert_eq!(config.announcement_rate, 10.0);
    assert_eq!(config.orders_per_announcement, 1.2);
}

#[test]
fn test_config_from_json_validates() {
    let result = GeneratorConfig::from_json(
        r#"{"scenario_length": 480, "announcement_rate": 0.0, "orders_per_announcement": 1.0}"#,
    );
    assert!(matches!(result, Err(ConfigError::InvalidAnnouncementRate(r)) if r == 0.0));
}

#[test]
fn test_config_from_json_missing_field() {
    let result = GeneratorConfig::from_json(r#"{"scenario_length": 480}"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_from_json_negative_length() {
    let result = GeneratorConfig::from_json(
        r#"{"scenario_length": -5, "announcement_rate": 1.0, "orders_per_announcement": 1.0}"#,
    );
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_serde_roundtrip() {
    let config = GeneratorConfig {
        scenario_length: 720,
        announcement_rate: 24.0,
        orders_per_announcement: 2.5,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_generator_rejects_non_positive_parameters() {
    assert!(matches!(
        PoissonProcessArrivalTimes::new(0, 10.0, 1.0),
        Err(ConfigError::InvalidScenarioLength)
    ));
    assert!(matches!(
        PoissonProcessArrivalTimes::new(100, -2.0, 1.0),
        Err(ConfigError::InvalidAnnouncementRate(_))
    ));
    assert!(matches!(
        PoissonProcessArrivalTimes::new(100, 10.0, 0.0),
        Err(ConfigError::InvalidOrdersPerAnnouncement(_))
    ));
    assert!(matches!(
        PoissonProcessArrivalTimes::new(100, f64::INFINITY, 1.0),
        Err(ConfigError::InvalidAnnouncementRate(_))
    ));
}

#[test]
fn test_orders_per_announcement_must_fit_count_type() {
    assert!(matches!(
        PoissonProcessArrivalTimes::new(100, 10.0, 5e9 + 0.5),
        Err(ConfigError::InvalidOrdersPerAnnouncement(v)) if v == 5e9 + 0.5
    ));

    let result = GeneratorConfig::from_json(
        r#"{"scenario_length": 100, "announcement_rate": 10.0, "orders_per_announcement": 1e12}"#,
    );
    assert!(matches!(result, Err(ConfigError::InvalidOrdersPerAnnouncement(_))));

    assert!(PoissonProcessArrivalTimes::new(100, 10.0, MAX_ORDERS_PER_ANNOUNCEMENT).is_ok());
}

#[test]
fn test_generator_from_config_keeps_values() {
    let config = GeneratorConfig {
        scenario_length: 60,
        announcement_rate: 5.0,
        orders_per_announcement: 1.0,
    };
    let generator = PoissonProcessArrivalTimes::from_config(config.clone()).unwrap();
    assert_eq!(generator.config(), &config);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::InvalidScenarioLength.to_string(),
        "Scenario length must be positive"
    );
    assert_eq!(
        ConfigError::InvalidOrdersPerAnnouncement(-1.5).to_string(),
        "Orders per announcement must be positive, finite and fit a u32 count, got -1.5"
    );
}
