// locale-gate-cli/tests/gate_lifecycle.rs
// ============================================================================
// Module: Gate Lifecycle Tests
// Description: End-to-end subcommand runs against a fixture project.
// Purpose: Ensure the report artifact is rewritten on every run, pass or fail.
// Dependencies: locale-gate-cli binary, tempfile
// ============================================================================
//! ## Overview
//! Spawns the `locale-gate` binary against a temporary project tree and
//! checks exit codes and the report artifact across consecutive runs.

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
use std::path::Path;
use std::process::Command;

fn write_fixture(root: &Path) {
    let messages = root.join("messages");
    fs::create_dir_all(&messages).expect("mkdir messages");
    fs::write(messages.join("en.json"), r#"{ "Nav": { "home": "Home" } }"#).expect("write en");
    fs::write(
        root.join("locale-gate.toml"),
        r#"
        [policy]
        blocking = ["es"]

        [report]
        path = "i18n-report.md"
        "#,
    )
    .expect("write config");
}

fn run_subcommand(root: &Path, subcommand: &str) -> std::process::ExitStatus {
    Command::new(env!("CARGO_BIN_EXE_locale-gate"))
        .arg("--config")
        .arg(root.join("locale-gate.toml"))
        .arg(subcommand)
        .current_dir(root)
        .status()
        .expect("binary should run")
}

#[test]
fn failing_coverage_run_writes_report_and_exits_nonzero() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());

    let status = run_subcommand(dir.path(), "coverage");
    assert!(!status.success());

    let report = fs::read_to_string(dir.path().join("i18n-report.md")).expect("report exists");
    assert!(report.starts_with("# i18n Coverage Report"));
    assert!(report.contains("**STATUS: FAIL**"));
    assert!(report.contains("Catalog file missing"));
}

#[test]
fn strict_run_without_critical_keys_still_rewrites_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());

    // A failing coverage run leaves a FAIL verdict in the artifact.
    let coverage = run_subcommand(dir.path(), "coverage");
    assert!(!coverage.success());

    // Strict with no configured critical keys must replace it, not skip it.
    let strict = run_subcommand(dir.path(), "strict");
    assert!(strict.success());

    let report = fs::read_to_string(dir.path().join("i18n-report.md")).expect("report exists");
    assert!(report.starts_with("# Strict i18n Quality Gate Report"));
    assert!(report.contains("✅ **STATUS: PASS**"));
    assert!(!report.contains("Coverage Report"));
}
