// crates/locale-gate-core/src/report.rs
// ============================================================================
// Module: Locale Gate Report Renderer
// Description: Deterministic Markdown rendering for gate results.
// Purpose: Produce the CI report artifact shared by coverage and strict runs.
// Dependencies: crate::runtime
// ============================================================================

//! ## Overview
//! The report renderer turns gate results into a Markdown artifact written to
//! a fixed path on every run, pass or fail. Output is fully deterministic:
//! no timestamps, stable key ordering, and collapsible detail blocks for
//! itemized key lists.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;

use crate::runtime::coverage::CatalogFileState;
use crate::runtime::coverage::CoverageReport;
use crate::runtime::coverage::GateStatus;
use crate::runtime::strict::StrictReport;

// ============================================================================
// SECTION: Shared Chrome
// ============================================================================

/// Returns the status icon used in section headings.
const fn status_icon(status: GateStatus) -> &'static str {
    match status {
        GateStatus::Pass => "✅",
        GateStatus::Warn => "⚠️",
        GateStatus::Fail => "❌",
    }
}

/// Appends a collapsible detail block listing keys, one per line.
fn push_detail_block(output: &mut String, summary: &str, keys: &[String]) {
    let _ = writeln!(output, "\n<details><summary>{summary}</summary>\n");
    output.push_str("```\n");
    for key in keys {
        output.push_str(key);
        output.push('\n');
    }
    output.push_str("```\n</details>\n");
}

// ============================================================================
// SECTION: Coverage Report
// ============================================================================

/// Renders the coverage gate report as Markdown.
#[must_use]
pub fn render_coverage_markdown(report: &CoverageReport) -> String {
    let mut output = String::new();
    output.push_str("# i18n Coverage Report\n\n");
    if report.passed() {
        output.push_str("🟢 **STATUS: PASS**\n");
    } else {
        output.push_str("🔴 **STATUS: FAIL**\n");
    }

    output.push_str("\n## Canonical Catalog Health\n");
    let _ = writeln!(output, "- **Total Keys:** {}", report.canonical_total);
    if report.canonical_placeholders > 0 {
        let _ = writeln!(
            output,
            "- **⚠️ Placeholders awaiting copy:** {}",
            report.canonical_placeholders
        );
    }

    for entry in &report.locales {
        let _ = writeln!(
            output,
            "\n### {} {} - {}",
            status_icon(entry.status),
            entry.locale,
            entry.status.as_str()
        );
        let _ = writeln!(output, "- **Tier:** {}", entry.tier.as_str());
        match entry.file_state {
            CatalogFileState::Missing => output.push_str("- **❌ Catalog file missing**\n"),
            CatalogFileState::Malformed => output.push_str("- **❌ Catalog file malformed**\n"),
            CatalogFileState::Present => {}
        }
        let _ = writeln!(output, "- **Total Keys:** {}", entry.total_keys);
        let _ = writeln!(
            output,
            "- **Missing/Untranslated relative to canonical:** {}",
            entry.deficiencies.len()
        );
        if !entry.deficiencies.is_empty() {
            push_detail_block(&mut output, "View Missing Keys", &entry.deficiencies);
        }
    }

    output
}

// ============================================================================
// SECTION: Strict Report
// ============================================================================

/// Renders the strict gate report as Markdown.
#[must_use]
pub fn render_strict_markdown(report: &StrictReport) -> String {
    let mut output = String::new();
    output.push_str("# Strict i18n Quality Gate Report\n\n");
    if report.passed() {
        output.push_str("✅ **STATUS: PASS** - All critical keys are strictly translated.\n");
        return output;
    }
    let _ =
        writeln!(output, "❌ **STATUS: FAIL** - Found {} validation errors.", report.errors.len());

    let mut current_locale = None;
    for error in &report.errors {
        if current_locale != Some(&error.locale) {
            let count =
                report.errors.iter().filter(|other| other.locale == error.locale).count();
            let _ = writeln!(output, "\n## Locale: {} ({count} errors)", error.locale);
            output.push_str("| Key | Value | Reason |\n");
            output.push_str("| :--- | :--- | :--- |\n");
            current_locale = Some(&error.locale);
        }
        let _ = writeln!(output, "| `{}` | `{}` | {} |", error.key, error.value, error.reason);
    }

    output.push_str("\n### How to fix\n");
    output.push_str("1. Open the failing locale catalog under the messages directory.\n");
    output.push_str(
        "2. Provide a real, unique translation for the failing keys (no TODOs, no source copy).\n",
    );
    output.push_str("3. Re-run `locale-gate strict`.\n");

    output
}
