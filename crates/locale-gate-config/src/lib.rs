// crates/locale-gate-config/src/lib.rs
// ============================================================================
// Module: Locale Gate Config Library
// Description: Canonical config model, validation, and policy list loading.
// Purpose: Single source of truth for locale-gate.toml semantics.
// Dependencies: locale-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `locale-gate-config` defines the canonical configuration model for the
//! locale gate. It provides strict, fail-closed validation and loaders for
//! the JSON policy lists (coverage allowlist, critical keys) the gate reads
//! at run time.
//!
//! Config inputs are untrusted; malformed or inconsistent configuration
//! aborts the run rather than degrading the gate.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod lists;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use lists::load_allowlist;
pub use lists::load_critical_keys;
