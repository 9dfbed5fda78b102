use league_live_wasm::domain::logging::LogLevel;
use league_live_wasm::infrastructure::config::AppConfig;
use std::time::Duration;

#[test]
fn empty_object_gives_defaults() {
    let config = AppConfig::from_json("{}").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.standings_path, "/ws/standings");
    assert_eq!(config.reconnect_delay(), Duration::from_millis(2000));
    assert_eq!(config.notification_ms, 3000);
    assert_eq!(config.api_base, "");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = AppConfig::from_json(r#"{"reconnectDelayMs": 500, "logLevel": "warn"}"#).unwrap();
    assert_eq!(config.reconnect_delay(), Duration::from_millis(500));
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.standings_path, "/ws/standings");
}

#[test]
fn unknown_log_level_is_rejected() {
    assert!(AppConfig::from_json(r#"{"logLevel": "verbose"}"#).is_err());
}

#[test]
fn unknown_keys_are_ignored() {
    let config = AppConfig::from_json(r#"{"apiBase": "https://api.example.com", "theme": "dark"}"#).unwrap();
    assert_eq!(config.api_base, "https://api.example.com");
}

#[test]
fn levels_are_ordered_by_severity() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Info < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Error);
}
