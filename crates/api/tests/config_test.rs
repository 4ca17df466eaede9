use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use salonslot_api::config::ApiConfig;
use salonslot_core::availability::SlotPolicy;
use tracing::Level;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/salon")])).unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.database_url, "postgres://localhost/salon");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.slot_policy, SlotPolicy::default());
}

#[test]
fn test_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/salon"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "DEBUG"),
        ("API_CORS_ORIGINS", "http://a.test, ,http://b.test"),
        ("SLOT_APPOINTMENT_BUFFER_MINUTES", "5"),
        ("SLOT_CADENCE_MINUTES", " 20 "),
    ]))
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
    );
    assert_eq!(config.slot_policy.appointment_buffer_minutes, 5);
    assert_eq!(config.slot_policy.cadence_minutes, 20);
    assert_eq!(config.slot_policy.rounding_minutes, 15);
}

#[test]
fn test_database_url_is_required() {
    let err = ApiConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(err.to_string().contains("DATABASE_URL"));
}

#[rstest]
#[case("API_PORT", "not-a-port")]
#[case("SLOT_CADENCE_MINUTES", "0")]
#[case("SLOT_ROUNDING_MINUTES", "fifteen")]
#[case("SLOT_PREPARATION_BUFFER_MINUTES", "-5")]
fn test_invalid_values_are_rejected(#[case] key: &str, #[case] value: &str) {
    let result = ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db/salon"), (key, value)]));
    assert!(result.is_err());
}
