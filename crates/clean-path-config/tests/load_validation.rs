//! Config loading tests for clean-path-config.
// clean-path-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate file loading limits and failure modes.
// Purpose: Ensure loading is strict and fails closed.
// =============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;

use clean_path_config::CleanPathConfig;
use clean_path_config::ConfigError;
use clean_path_core::TrailingSlash;

#[test]
fn load_from_path_reads_a_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean-path.toml");
    fs::write(&path, "[middleware]\ntrailing_slash = \"never\"\n").unwrap();
    let config = CleanPathConfig::load_from_path(&path).unwrap();
    assert_eq!(config.middleware.trailing_slash, TrailingSlash::Never);
}

#[test]
fn load_from_path_rejects_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let result = CleanPathConfig::load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn load_from_path_rejects_oversized_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean-path.toml");
    let mut raw = String::from("# padding\n");
    raw.push_str(&"#".repeat(2 * 1024 * 1024));
    fs::write(&path, raw).unwrap();
    let result = CleanPathConfig::load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::TooLarge { .. })));
}

#[test]
fn load_from_path_rejects_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean-path.toml");
    fs::write(&path, "[middleware\n").unwrap();
    let result = CleanPathConfig::load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn load_from_path_validates_after_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean-path.toml");
    fs::write(&path, "[middleware]\nmax_path_bytes = 1\n").unwrap();
    let result = CleanPathConfig::load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::Policy(_))));
}
