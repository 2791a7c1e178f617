use super::defaults::{DEFAULT_BUFFER_SIZE, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
use super::AppConfig;
use clap::Parser;

#[test]
fn defaults_match_classic_layout() {
    let cfg = AppConfig::parse_from(["test-app"]);
    assert_eq!(cfg.grid_size, DEFAULT_GRID_SIZE);
    assert_eq!(cfg.buffer_size, DEFAULT_BUFFER_SIZE);
    assert_eq!(cfg.sequence_count, 3);
    assert_eq!(cfg.sequence_length, 3);
    assert!(cfg.seed.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn rejects_grid_size_out_of_bounds() {
    let cfg = AppConfig::parse_from(["test-app", "--grid-size", "1"]);
    assert!(cfg.validate().is_err());

    let too_big = (MAX_GRID_SIZE + 1).to_string();
    let cfg = AppConfig::parse_from(["test-app", "--grid-size", too_big.as_str()]);
    assert!(cfg.validate().is_err());
}

#[test]
fn accepts_grid_size_bounds() {
    let cfg = AppConfig::parse_from(["test-app", "--grid-size", "2"]);
    assert!(cfg.validate().is_ok());

    let max = MAX_GRID_SIZE.to_string();
    let cfg = AppConfig::parse_from(["test-app", "--grid-size", max.as_str()]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn rejects_empty_buffer() {
    let cfg = AppConfig::parse_from(["test-app", "--buffer-size", "0"]);
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("--buffer-size"));
}

#[test]
fn rejects_sequence_longer_than_buffer() {
    let cfg = AppConfig::parse_from([
        "test-app",
        "--buffer-size",
        "4",
        "--sequence-length",
        "5",
    ]);
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("--sequence-length"));
}

#[test]
fn rejects_zero_sequences() {
    let cfg = AppConfig::parse_from(["test-app", "--sequences", "0"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn parses_seed() {
    let cfg = AppConfig::parse_from(["test-app", "--seed", "42"]);
    assert_eq!(cfg.seed, Some(42));
}

#[test]
fn no_logs_overrides_logs() {
    let cfg = AppConfig::parse_from(["test-app", "--logs"]);
    assert!(cfg.logging_enabled());

    let cfg = AppConfig::parse_from(["test-app", "--logs", "--no-logs"]);
    assert!(!cfg.logging_enabled());
}
