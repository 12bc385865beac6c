//! # Configuration Tests
//!
//! Defaults, JSON deserialization, file loading, and validation.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvtb_core::HarnessError;
use rvtb_core::config::*;
use std::io::Write;

#[test]
fn test_config_default() {
    let config = TestbenchConfig::default();
    assert_eq!(config.max_sim_time, 10_000_000);
    assert_eq!(config.reset.window, 100);
    assert_eq!(config.reset.polarity, ResetPolarity::ActiveHigh);
    assert_eq!(config.signals.clock, "clk");
    assert_eq!(config.signals.reset, "arst");
    assert!(!config.trace_steps);
}

#[test]
fn test_default_config_is_valid() {
    assert!(TestbenchConfig::default().validate().is_ok());
}

#[test]
fn test_empty_json_takes_defaults() {
    let config = TestbenchConfig::from_json("{}").unwrap();
    assert_eq!(config, TestbenchConfig::default());
}

#[test]
fn test_json_full_document() {
    let json = r#"{
        "max_sim_time": 4096,
        "reset": { "window": 20, "polarity": "ActiveLow" },
        "signals": { "clock": "clock", "reset": "rst_n" },
        "trace_steps": true
    }"#;
    let config = TestbenchConfig::from_json(json).unwrap();
    assert_eq!(config.max_sim_time, 4096);
    assert_eq!(config.reset.window, 20);
    assert_eq!(config.reset.polarity, ResetPolarity::ActiveLow);
    assert_eq!(config.signals.clock, "clock");
    assert_eq!(config.signals.reset, "rst_n");
    assert!(config.trace_steps);
}

#[test]
fn test_json_partial_reset_section() {
    let config = TestbenchConfig::from_json(r#"{ "reset": { "window": 7 } }"#).unwrap();
    assert_eq!(config.reset.window, 7);
    assert_eq!(config.reset.polarity, ResetPolarity::ActiveHigh);
    assert_eq!(config.max_sim_time, 10_000_000);
}

#[rstest]
#[case("\"ActiveHigh\"", ResetPolarity::ActiveHigh)]
#[case("\"high\"", ResetPolarity::ActiveHigh)]
#[case("\"active_high\"", ResetPolarity::ActiveHigh)]
#[case("\"ActiveLow\"", ResetPolarity::ActiveLow)]
#[case("\"low\"", ResetPolarity::ActiveLow)]
#[case("\"active_low\"", ResetPolarity::ActiveLow)]
fn test_polarity_names(#[case] json: &str, #[case] expected: ResetPolarity) {
    let polarity: ResetPolarity = serde_json::from_str(json).unwrap();
    assert_eq!(polarity, expected);
}

#[test]
fn test_unknown_polarity_rejected() {
    let err = TestbenchConfig::from_json(r#"{ "reset": { "polarity": "Sideways" } }"#).unwrap_err();
    assert!(matches!(err, HarnessError::ConfigParse(_)));
}

#[test]
fn test_negative_bound_rejected_by_parser() {
    let err = TestbenchConfig::from_json(r#"{ "max_sim_time": -1 }"#).unwrap_err();
    assert!(matches!(err, HarnessError::ConfigParse(_)));
}

#[rstest]
#[case(0, 100, "max_sim_time")]
#[case(1000, 0, "reset.window")]
#[case(0, 0, "max_sim_time")]
fn test_validate_rejects_zero(#[case] max: u64, #[case] window: u64, #[case] field: &str) {
    let mut config = TestbenchConfig::default();
    config.max_sim_time = max;
    config.reset.window = window;
    match config.validate() {
        Err(HarnessError::InvalidConfiguration { field: f, .. }) => assert_eq!(f, field),
        other => panic!("expected InvalidConfiguration, got {other:?}"),
    }
}

#[test]
fn test_window_longer_than_run_is_valid() {
    let mut config = TestbenchConfig::default();
    config.max_sim_time = 10;
    config.reset.window = 1000;
    assert!(config.validate().is_ok());
}

#[rstest]
#[case(ResetPolarity::ActiveHigh, true, true)]
#[case(ResetPolarity::ActiveHigh, false, false)]
#[case(ResetPolarity::ActiveLow, true, false)]
#[case(ResetPolarity::ActiveLow, false, true)]
fn test_polarity_level(
    #[case] polarity: ResetPolarity,
    #[case] asserted: bool,
    #[case] level: bool,
) {
    assert_eq!(polarity.level(asserted), level);
    assert_eq!(polarity.is_asserted_level(level), asserted);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "max_sim_time": 64, "reset": {{ "window": 4 }} }}"#).unwrap();
    let config = TestbenchConfig::from_file(file.path()).unwrap();
    assert_eq!(config.max_sim_time, 64);
    assert_eq!(config.reset.window, 4);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TestbenchConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }));
}
