// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_new_bounds() {
    assert!(LogLevel::new(0).is_ok(), "0 (silent) should be accepted");
    assert!(LogLevel::new(5).is_ok(), "5 (trace) should be accepted");

    let err = LogLevel::new(6).expect_err("6 should be rejected");
    let msg = err.to_string();
    assert!(
        msg.contains("log_level") && msg.contains('6'),
        "error should name the key and the bad value: {msg}"
    );
}

#[test]
fn test_log_level_from_int_saturates() {
    assert_eq!(LogLevel::from_int(0), LogLevel::SILENT);
    assert_eq!(LogLevel::from_int(3), LogLevel::INFO);
    assert_eq!(LogLevel::from_int(5), LogLevel::TRACE);
    assert_eq!(
        LogLevel::from_int(100),
        LogLevel::TRACE,
        "out-of-range values should saturate at trace"
    );
}

#[test]
fn test_log_level_filter_strings() {
    let directives: Vec<_> = (0..=5)
        .map(|level| LogLevel::from_int(level).to_filter_string())
        .collect();
    assert_eq!(directives, ["off", "error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_log_level_serde_roundtrip() {
    let json = serde_json::to_string(&LogLevel::DEBUG).expect("serialize should succeed");
    assert_eq!(json, "4", "log level should serialize as a bare number");

    let level: LogLevel = serde_json::from_str(&json).expect("deserialize should succeed");
    assert_eq!(level, LogLevel::DEBUG);

    let out_of_range: Result<LogLevel, _> = serde_json::from_str("9");
    assert!(out_of_range.is_err(), "9 should fail to deserialize");
}

#[test]
fn test_log_config_builder_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder_overrides() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::ERROR)
        .with_file_level(LogLevel::DEBUG)
        .with_log_file("herd.log".to_string())
        .with_show_target(true)
        .build();

    assert_eq!(config.console_level(), LogLevel::ERROR);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("herd.log"));
    assert!(config.show_target());
}
