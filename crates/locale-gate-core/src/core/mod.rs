// crates/locale-gate-core/src/core/mod.rs
// ============================================================================
// Module: Locale Gate Core Types
// Description: Canonical catalog, locale, and validation structures.
// Purpose: Provide stable, serializable types shared by all gate runtimes.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types define locales, coverage tiers, flattened catalogs, and
//! validation errors. These types are the canonical vocabulary for the
//! extractor, patcher, coverage evaluator, and strict validator.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod locale;
pub mod tree;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use locale::CoverageTier;
pub use locale::LocaleCode;
pub use tree::FlattenedCatalog;
pub use tree::MessageTree;
pub use tree::TreeError;
pub use tree::VALUE_KEY;
pub use tree::flatten;
pub use tree::key_depth;
pub use tree::rebuild;
pub use tree::set_deep;
pub use validation::ValidationError;
pub use validation::ValidationReason;
