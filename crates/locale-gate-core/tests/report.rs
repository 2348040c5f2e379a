// locale-gate-core/tests/report.rs
// ============================================================================
// Module: Report Renderer Tests
// Description: Markdown artifact rendering tests.
// Purpose: Ensure reports are deterministic and carry the gate verdict.
// Dependencies: locale-gate-core, serde_json
// ============================================================================
//! ## Overview
//! Validates report chrome, per-locale sections, detail blocks, and the
//! absence of nondeterministic content.

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

use std::collections::BTreeSet;

use locale_gate_core::CatalogFileState;
use locale_gate_core::CoveragePolicy;
use locale_gate_core::CoverageReport;
use locale_gate_core::CoverageTier;
use locale_gate_core::GateStatus;
use locale_gate_core::LocaleCode;
use locale_gate_core::LocaleCoverage;
use locale_gate_core::MemoryCatalogStore;
use locale_gate_core::MessageTree;
use locale_gate_core::StrictPolicy;
use locale_gate_core::evaluate_coverage;
use locale_gate_core::render_coverage_markdown;
use locale_gate_core::render_strict_markdown;
use locale_gate_core::validate_strict;
use serde_json::Value;
use serde_json::json;

fn tree(value: Value) -> MessageTree {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn sample_coverage_markdown() -> String {
    let canonical = tree(json!({
        "Nav": { "home": "Home", "about": "About" }
    }));
    let mut store = MemoryCatalogStore::new();
    store.insert("es", tree(json!({ "Nav": { "home": "Inicio" } })));

    let policy = CoveragePolicy {
        targets: vec![(LocaleCode::new("es"), CoverageTier::Blocking)],
        threshold: 50,
        allowlist: BTreeSet::new(),
        sentinel_prefix: "[TODO_TRANSLATE] ".to_string(),
    };
    render_coverage_markdown(&evaluate_coverage(&canonical, &store, &policy))
}

#[test]
fn coverage_report_carries_verdict_and_details() {
    let markdown = sample_coverage_markdown();

    assert!(markdown.starts_with("# i18n Coverage Report"));
    assert!(markdown.contains("**STATUS: FAIL**"));
    assert!(markdown.contains("### ❌ es - FAIL"));
    assert!(markdown.contains("- **Tier:** blocking"));
    assert!(markdown.contains("<details><summary>View Missing Keys</summary>"));
    assert!(markdown.contains("Nav.about"));
}

#[test]
fn coverage_report_distinguishes_malformed_from_missing() {
    let entry = |locale: &str, file_state| LocaleCoverage {
        locale: LocaleCode::new(locale),
        tier: CoverageTier::Blocking,
        status: GateStatus::Fail,
        file_state,
        total_keys: 0,
        deficiencies: vec!["Nav.home".to_string()],
    };
    let report = CoverageReport {
        canonical_total: 1,
        canonical_placeholders: 0,
        locales: vec![
            entry("es", CatalogFileState::Malformed),
            entry("fr", CatalogFileState::Missing),
        ],
    };
    let markdown = render_coverage_markdown(&report);

    assert!(markdown.contains("- **❌ Catalog file malformed**"));
    assert!(markdown.contains("- **❌ Catalog file missing**"));
}

#[test]
fn coverage_report_is_deterministic() {
    assert_eq!(sample_coverage_markdown(), sample_coverage_markdown());
}

#[test]
fn passing_strict_report_is_a_single_banner() {
    let canonical = tree(json!({ "Nav": { "home": "Home" } }));
    let mut store = MemoryCatalogStore::new();
    store.insert("es", tree(json!({ "Nav": { "home": "Inicio" } })));

    let policy = StrictPolicy {
        critical_keys: vec!["Nav.home".to_string()],
        brand_keys: BTreeSet::new(),
    };
    let report = validate_strict(&canonical, &store, &[LocaleCode::new("es")], &policy);
    let markdown = render_strict_markdown(&report);

    assert!(markdown.contains("✅ **STATUS: PASS**"));
    assert!(!markdown.contains("| Key |"));
}

#[test]
fn failing_strict_report_groups_errors_by_locale() {
    let canonical = tree(json!({ "Nav": { "home": "Home", "about": "About" } }));
    let mut store = MemoryCatalogStore::new();
    store.insert("es", tree(json!({ "Nav": { "home": "", "about": "About" } })));

    let policy = StrictPolicy {
        critical_keys: vec!["Nav.home".to_string(), "Nav.about".to_string()],
        brand_keys: BTreeSet::new(),
    };
    let report = validate_strict(&canonical, &store, &[LocaleCode::new("es")], &policy);
    let markdown = render_strict_markdown(&report);

    assert!(markdown.contains("❌ **STATUS: FAIL** - Found 2 validation errors."));
    assert!(markdown.contains("## Locale: es (2 errors)"));
    assert!(markdown.contains("| `Nav.home` | `EMPTY` | Value is empty |"));
    assert!(markdown.contains("Value is identical to the source language"));
    assert!(markdown.contains("### How to fix"));
}
