// crates/locale-gate-core/src/lib.rs
// ============================================================================
// Module: Locale Gate Core Library
// Description: Public API surface for the Locale Gate core.
// Purpose: Expose catalog types, tree operations, gate runtimes, and reports.
// Dependencies: crate::{core, interfaces, report, runtime}
// ============================================================================

//! ## Overview
//! Locale Gate core provides deterministic translation-catalog analysis for
//! release gating: flattening and patching of nested message trees, tiered
//! coverage evaluation, strict content validation of critical keys, and
//! Markdown report rendering. All evaluation is pure; filesystem access goes
//! through explicit [`interfaces::CatalogStore`] adapters.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod report;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::CatalogError;
pub use interfaces::CatalogStore;
pub use interfaces::MemoryCatalogStore;
pub use report::render_coverage_markdown;
pub use report::render_strict_markdown;
pub use runtime::CatalogFileState;
pub use runtime::CoveragePolicy;
pub use runtime::CoverageReport;
pub use runtime::GateStatus;
pub use runtime::LocaleCoverage;
pub use runtime::PatchOutcome;
pub use runtime::StrictPolicy;
pub use runtime::StrictReport;
pub use runtime::evaluate_coverage;
pub use runtime::evaluate_locale;
pub use runtime::missing_usage_keys;
pub use runtime::patch_canonical;
pub use runtime::validate_strict;
