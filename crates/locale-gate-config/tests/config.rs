// locale-gate-config/tests/config.rs
// ============================================================================
// Module: Configuration Tests
// Description: Fail-closed parsing and validation tests.
// Purpose: Ensure malformed or inconsistent policy never reaches the gate.
// Dependencies: locale-gate-config, tempfile
// ============================================================================
//! ## Overview
//! Validates TOML parsing, defaulting, tier consistency rules, and the JSON
//! policy list loaders.

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
use std::path::PathBuf;

use locale_gate_config::ConfigError;
use locale_gate_config::GateConfig;
use locale_gate_config::load_allowlist;
use locale_gate_config::load_critical_keys;
use locale_gate_core::CoverageTier;
use locale_gate_core::LocaleCode;

fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("locale-gate.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

#[test]
fn full_config_parses() {
    let (_dir, path) = write_config(
        r#"
        [catalog]
        base_locale = "en"
        messages_dir = "messages"
        sentinel_prefix = "[TODO_TRANSLATE] "

        [source]
        dir = "src"
        extensions = [".ts", ".tsx"]

        [policy]
        blocking = ["es"]
        thresholded = ["fr", "de"]
        threshold = 50
        allowlist_path = "qa-i18n/allowlist.json"

        [strict]
        critical_keys_path = "qa-i18n/critical-keys.json"
        brand_keys = ["Header.title"]

        [report]
        path = "qa-i18n/i18n-report.md"
        "#,
    );
    let config = GateConfig::load(Some(path.as_path())).expect("config should load");
    assert_eq!(config.catalog.base_locale, LocaleCode::new("en"));
    assert_eq!(config.effective_threshold(), 50);
    assert_eq!(
        config.targets(),
        vec![
            (LocaleCode::new("es"), CoverageTier::Blocking),
            (LocaleCode::new("fr"), CoverageTier::Thresholded),
            (LocaleCode::new("de"), CoverageTier::Thresholded),
        ]
    );
    assert_eq!(config.catalog_path(&LocaleCode::new("fr")), PathBuf::from("messages/fr.json"));
}

#[test]
fn empty_config_uses_defaults() {
    let (_dir, path) = write_config("");
    let config = GateConfig::load(Some(path.as_path())).expect("defaults should load");
    assert_eq!(config.catalog.base_locale, LocaleCode::new("en"));
    assert_eq!(config.catalog.sentinel_prefix, "[TODO_TRANSLATE] ");
    assert_eq!(config.source.extensions, vec![".ts".to_string(), ".tsx".to_string()]);
    assert!(config.targets().is_empty());
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let result = GateConfig::load(Some(path.as_path()));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn unknown_fields_are_rejected() {
    let (_dir, path) = write_config("[catalog]\nbase = \"en\"\n");
    assert!(matches!(GateConfig::load(Some(path.as_path())), Err(ConfigError::Parse(_))));
}

#[test]
fn canonical_locale_in_tier_is_rejected() {
    let (_dir, path) = write_config("[policy]\nblocking = [\"en\"]\n");
    assert!(matches!(GateConfig::load(Some(path.as_path())), Err(ConfigError::Invalid(_))));
}

#[test]
fn locale_in_both_tiers_is_rejected() {
    let (_dir, path) = write_config("[policy]\nblocking = [\"es\"]\nthresholded = [\"es\"]\n");
    assert!(matches!(GateConfig::load(Some(path.as_path())), Err(ConfigError::Invalid(_))));
}

#[test]
fn empty_sentinel_is_rejected() {
    let (_dir, path) = write_config("[catalog]\nsentinel_prefix = \"\"\n");
    assert!(matches!(GateConfig::load(Some(path.as_path())), Err(ConfigError::Invalid(_))));
}

#[test]
fn allowlist_loads_and_validates_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("allowlist.json");
    fs::write(&path, r#"["fr:Legal.disclaimer", "de:Nav.home"]"#).expect("write list");

    let allowlist = load_allowlist(Some(path.as_path())).expect("allowlist should load");
    assert!(allowlist.contains("fr:Legal.disclaimer"));
    assert_eq!(allowlist.len(), 2);

    fs::write(&path, r#"["no-separator"]"#).expect("rewrite list");
    assert!(matches!(load_allowlist(Some(path.as_path())), Err(ConfigError::Invalid(_))));
}

#[test]
fn absent_lists_yield_empty_policy() {
    assert!(load_allowlist(None).expect("empty allowlist").is_empty());
    assert!(load_critical_keys(None).expect("empty critical keys").is_empty());
}

#[test]
fn malformed_critical_keys_is_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("critical-keys.json");
    fs::write(&path, r#"{"not": "an array"}"#).expect("write list");
    assert!(matches!(load_critical_keys(Some(path.as_path())), Err(ConfigError::Parse(_))));
}
