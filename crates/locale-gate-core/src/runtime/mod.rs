// crates/locale-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Locale Gate Runtimes
// Description: Canonical patching, coverage evaluation, and strict validation.
// Purpose: Pure gate evaluation over catalog stores and flattened trees.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Gate runtimes implement the release-gate lifecycle: patch the canonical
//! catalog from extractor output, diff every target locale against it under
//! tiered policy, and run the zero-tolerance content battery on critical
//! keys. Per-locale evaluation is independent; a failing locale never aborts
//! its siblings.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod coverage;
pub mod patch;
pub mod strict;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use coverage::CatalogFileState;
pub use coverage::CoveragePolicy;
pub use coverage::CoverageReport;
pub use coverage::GateStatus;
pub use coverage::LocaleCoverage;
pub use coverage::evaluate_coverage;
pub use coverage::evaluate_locale;
pub use patch::PatchOutcome;
pub use patch::missing_usage_keys;
pub use patch::patch_canonical;
pub use strict::StrictPolicy;
pub use strict::StrictReport;
pub use strict::validate_strict;
