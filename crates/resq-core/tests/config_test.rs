use std::collections::HashMap;
use std::io::Write;

use resq_core::config::*;
use resq_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ResqConfig::from_toml("").unwrap();

    assert_eq!(config.gesture.required_taps, 3);
    assert_eq!(config.gesture.tap_timeout_ms, 2_000);

    assert_eq!(config.dashboard.poll_interval_secs, 30);
    assert_eq!(config.dashboard.default_filter, "all");

    assert!(config.store.endpoint_url.is_none());
    assert!(!config.store.is_remote());
    assert_eq!(config.store.alerts_table, "emergency_alerts");
    assert_eq!(config.store.contacts_table, "authority_contacts");
    assert_eq!(config.store.evidence_bucket, "evidence");

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[gesture]
tap_timeout_ms = 3000

[store]
endpoint_url = "https://backend.example"
"#;
    let config = ResqConfig::from_toml(toml).unwrap();
    assert_eq!(config.gesture.tap_timeout_ms, 3000);
    assert_eq!(config.gesture.required_taps, 3); // default
    assert!(config.store.is_remote());
    assert_eq!(config.store.request_timeout_secs, 30); // default
}

#[test]
fn config_serde_roundtrip() {
    let config = ResqConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = ResqConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ResqConfig::from_toml("[gesture\nrequired_taps = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_tap_timeout_fails_validation() {
    let mut config = ResqConfig::default();
    config.gesture.tap_timeout_ms = 0;
    match config.validate() {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "gesture.tap_timeout_ms")
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn single_tap_gesture_fails_validation() {
    let mut config = ResqConfig::default();
    config.gesture.required_taps = 1;
    assert!(config.validate().is_err());
}

#[test]
fn unknown_default_filter_fails_validation() {
    let mut config = ResqConfig::default();
    config.dashboard.default_filter = "urgent".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn env_overrides_take_precedence() {
    let mut env = HashMap::new();
    env.insert("RESQ_STORE_URL", "https://env.example");
    env.insert("RESQ_TAP_TIMEOUT_MS", "2500");
    env.insert("RESQ_POLL_INTERVAL_SECS", "10");
    env.insert("RESQ_LOG_LEVEL", "debug");

    let mut config = ResqConfig::from_toml("[gesture]\ntap_timeout_ms = 3000").unwrap();
    config
        .apply_env_with(|k| env.get(k).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.store.endpoint_url.as_deref(), Some("https://env.example"));
    assert_eq!(config.gesture.tap_timeout_ms, 2500);
    assert_eq!(config.dashboard.poll_interval_secs, 10);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn non_numeric_env_override_is_rejected() {
    let mut config = ResqConfig::default();
    let err = config
        .apply_env_with(|k| (k == "RESQ_TAP_TIMEOUT_MS").then(|| "soon".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn from_file_reads_toml_and_reports_missing_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[dashboard]\npoll_interval_secs = 5").unwrap();
    let config = ResqConfig::from_file(file.path()).unwrap();
    assert_eq!(config.dashboard.poll_interval_secs, 5);

    let missing = std::path::Path::new("/definitely/not/here/resq.toml");
    assert!(matches!(
        ResqConfig::from_file(missing),
        Err(ConfigError::FileNotFound { .. })
    ));
}
