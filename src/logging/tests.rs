// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(7), None);
}

#[test]
fn test_log_level_filter_strings() {
    let directives = [
        LogLevel::SILENT.to_filter_string(),
        LogLevel::ERROR.to_filter_string(),
        LogLevel::WARN.to_filter_string(),
        LogLevel::INFO.to_filter_string(),
        LogLevel::DEBUG.to_filter_string(),
        LogLevel::TRACE.to_filter_string(),
    ];
    insta::assert_debug_snapshot!(
        directives,
        @r#"
    [
        "off",
        "error",
        "warn",
        "info",
        "debug",
        "trace",
    ]
    "#
    );
}

#[test]
fn test_log_level_serde_round_trip() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&level).unwrap(), "4");
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_file_level(LogLevel::DEBUG)
        .with_log_file("out/build.log".to_string())
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("out/build.log"));
}
