//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env() -> impl Fn(&str) -> Option<String> {
    |_| None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the serialized default config parses back to the same values
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();
    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let config = Config::from_sources(parsed.unwrap(), no_env());
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.api_url = "https://crm.example.com".into();
    config.request_timeout_secs = 30;
    config.theme = "nord".into();
    config.username = "ana \"the admin\"".into();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed = Config::parse_file_config(&config.to_toml()).expect("custom config parses");
    assert_eq!(Config::from_sources(parsed, no_env()), config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_sources(FileConfig::default(), no_env());
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(config.theme, "dark");
    assert_eq!(config.username, "");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
api_url = "http://file:5000"
theme = "light"
request_timeout_secs = 20
"#,
    )
    .unwrap();
    let config = Config::from_sources(
        file,
        env_from(&[
            ("SMART_CONNECT_API_URL", "http://env:8000/"),
            ("SMART_CONNECT_THEME", "nord"),
        ]),
    );
    assert_eq!(config.api_url, "http://env:8000");
    assert_eq!(config.theme, "nord");
    assert_eq!(config.request_timeout_secs, 20);
}

#[test]
fn test_invalid_env_timeout_falls_through() {
    let file = Config::parse_file_config("request_timeout_secs = 9").unwrap();
    let config = Config::from_sources(file, env_from(&[("SMART_CONNECT_TIMEOUT", "soon")]));
    assert_eq!(config.request_timeout_secs, 9);
}

#[test]
fn test_zero_timeouts_use_defaults() {
    let file =
        Config::parse_file_config("request_timeout_secs = 0\nconnect_timeout_secs = 0").unwrap();
    let config = Config::from_sources(file, no_env());
    assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(config.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn test_partial_logging_section() {
    let file = Config::parse_file_config("[logging]\nlevel = \"debug\"").unwrap();
    let config = Config::from_sources(file, no_env());
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.filter_directive(), "smart_connect=debug");
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file_config("api_url = ").is_err());
    assert!(Config::parse_file_config("request_timeout_secs = \"ten\"").is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// LogRotation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    for rotation in [LogRotation::Hourly, LogRotation::Daily, LogRotation::Never] {
        assert_eq!(LogRotation::parse(rotation.as_str()), rotation);
    }
}
