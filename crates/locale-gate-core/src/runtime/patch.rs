// crates/locale-gate-core/src/runtime/patch.rs
// ============================================================================
// Module: Locale Gate Canonical Patcher
// Description: Merges extracted usage keys into the canonical catalog.
// Purpose: Keep the canonical catalog a superset of every key used in code.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The patcher reconciles the usage-key set produced by the extractor with
//! the canonical (base-language) catalog. Keys missing from the catalog are
//! inserted with a sentinel placeholder value so translators can find them.
//! Re-running on an unchanged source tree is a no-op.
//!
//! ## Invariants
//! - Missing keys are inserted deepest-first so a shallow insertion never
//!   collides with a not-yet-processed deeper one.
//! - A usage key covered by an existing namespace prefix is not missing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde_json::Value;

use crate::core::tree::FlattenedCatalog;
use crate::core::tree::MessageTree;
use crate::core::tree::TreeError;
use crate::core::tree::flatten;
use crate::core::tree::key_depth;
use crate::core::tree::set_deep;

// ============================================================================
// SECTION: Missing Key Computation
// ============================================================================

/// Computes the usage keys absent from the canonical catalog.
///
/// A usage key is covered when it addresses a leaf, a namespace node, or a
/// namespace prefix with at least one populated leaf below it (the template-
/// literal case where only the static prefix is known).
///
/// The result is ordered by descending dot-depth, then lexicographically.
#[must_use]
pub fn missing_usage_keys(usage: &BTreeSet<String>, canonical: &FlattenedCatalog) -> Vec<String> {
    let mut missing: Vec<String> = usage
        .iter()
        .filter(|key| {
            !canonical.has_leaf(key)
                && !canonical.namespaces.contains(*key)
                && !canonical.has_leaf_under(key)
        })
        .cloned()
        .collect();
    missing.sort_by(|a, b| key_depth(b).cmp(&key_depth(a)).then_with(|| a.cmp(b)));
    missing
}

// ============================================================================
// SECTION: Patch
// ============================================================================

/// Outcome of one canonical patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Keys inserted into the canonical catalog, deepest-first.
    pub inserted: Vec<String>,
}

impl PatchOutcome {
    /// Returns true when the patch changed the catalog.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.inserted.is_empty()
    }
}

/// Inserts every missing usage key into the canonical tree with a sentinel
/// placeholder value derived from the leaf segment.
///
/// # Errors
///
/// Returns [`TreeError`] when a usage key is malformed (empty segment).
pub fn patch_canonical(
    tree: &mut MessageTree,
    usage: &BTreeSet<String>,
    sentinel_prefix: &str,
) -> Result<PatchOutcome, TreeError> {
    let canonical = flatten(tree);
    let missing = missing_usage_keys(usage, &canonical);

    for key in &missing {
        let leaf = key.rsplit('.').next().unwrap_or(key.as_str());
        let placeholder = format!("{sentinel_prefix}{leaf}");
        set_deep(tree, key, Value::String(placeholder))?;
    }

    Ok(PatchOutcome {
        inserted: missing,
    })
}
