// crates/locale-gate-cli/src/lib.rs
// ============================================================================
// Module: Locale Gate CLI Library
// Description: Shared CLI support code for the locale-gate binary.
// Purpose: Expose the i18n catalog and filesystem catalog store for reuse.
// Dependencies: locale-gate-core, serde_json
// ============================================================================

//! ## Overview
//! Library half of the `locale-gate` binary. Hosts the CLI message catalog
//! (the gate localizes its own console output) and the filesystem-backed
//! [`CatalogStore`](locale_gate_core::CatalogStore) implementation used by
//! every subcommand.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::FsCatalogStore;
