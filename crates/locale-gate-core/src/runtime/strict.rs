// crates/locale-gate-core/src/runtime/strict.rs
// ============================================================================
// Module: Locale Gate Strict Validator
// Description: Zero-tolerance content checks over curated critical keys.
// Purpose: Catch placeholder, empty, and untranslated values that coverage
//          counting alone cannot see.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The strict validator runs an ordered, short-circuiting check battery for
//! every `(critical key, target locale)` pair: existence, non-emptiness,
//! key-name echo, placeholder markers, and identity with the canonical value.
//! The first failing check wins, so each pair yields at most one
//! [`ValidationError`]. Any error fails the gate; there is no threshold.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::locale::LocaleCode;
use crate::core::tree::FlattenedCatalog;
use crate::core::tree::MessageTree;
use crate::core::tree::flatten;
use crate::core::validation::ValidationError;
use crate::core::validation::ValidationReason;
use crate::interfaces::CatalogStore;

// ============================================================================
// SECTION: Placeholder Markers
// ============================================================================

/// Case-insensitive substrings that mark a value as untranslated scaffolding.
///
/// These also subsume the bracketed marker forms (`[TODO]`, `TODO:`,
/// `[MISSING]`), so no separate token list is needed.
const PLACEHOLDER_SUBSTRINGS: &[&str] = &["TODO", "TBD", "TRANSLATE", "__MISSING__", "MISSING"];

/// Returns true when the value matches the placeholder blocklist.
fn has_placeholder_marker(value: &str) -> bool {
    let upper = value.to_uppercase();
    PLACEHOLDER_SUBSTRINGS.iter().any(|marker| upper.contains(marker))
}

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Static strict-validation policy for one gate run.
#[derive(Debug, Clone)]
pub struct StrictPolicy {
    /// Curated business-critical keys, independent of locale tiers.
    pub critical_keys: Vec<String>,
    /// Keys allowed to match the canonical value verbatim (brand terms).
    pub brand_keys: BTreeSet<String>,
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Aggregated strict-validation result for one gate run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrictReport {
    /// All validation errors across all locales, in evaluation order.
    pub errors: Vec<ValidationError>,
}

impl StrictReport {
    /// Returns true when no check failed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================================
// SECTION: Check Battery
// ============================================================================

/// Runs the ordered check battery for one key in one locale.
///
/// Returns the first failing rule, or `None` when every check passes.
fn check_key(
    key: &str,
    target: &FlattenedCatalog,
    canonical: &FlattenedCatalog,
    policy: &StrictPolicy,
) -> Option<(ValidationReason, String)> {
    let Some(value) = target.string_value(key) else {
        return Some((ValidationReason::KeyMissing, "UNDEFINED".to_string()));
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some((ValidationReason::Empty, "EMPTY".to_string()));
    }
    if trimmed == key {
        return Some((ValidationReason::SameAsKey, value.to_string()));
    }
    if has_placeholder_marker(trimmed) {
        return Some((ValidationReason::Placeholder, value.to_string()));
    }
    if let Some(source) = canonical.string_value(key)
        && trimmed == source.trim()
        && !policy.brand_keys.contains(key)
    {
        return Some((ValidationReason::SameAsSource, value.to_string()));
    }
    None
}

// ============================================================================
// SECTION: Run Validation
// ============================================================================

/// Validates every critical key for every target locale.
///
/// A target catalog that fails to load yields a single file-missing error for
/// that locale; the remaining locales are still validated.
#[must_use]
pub fn validate_strict(
    canonical_tree: &MessageTree,
    store: &dyn CatalogStore,
    targets: &[LocaleCode],
    policy: &StrictPolicy,
) -> StrictReport {
    let canonical = flatten(canonical_tree);
    let mut report = StrictReport::default();

    for locale in targets {
        let Some(tree) = store.load(locale).ok().flatten() else {
            report.errors.push(ValidationError {
                locale: locale.clone(),
                key: "FILE".to_string(),
                value: "MISSING".to_string(),
                reason: ValidationReason::FileMissing,
            });
            continue;
        };
        let flat = flatten(&tree);

        for key in &policy.critical_keys {
            if let Some((reason, value)) = check_key(key, &flat, &canonical, policy) {
                report.errors.push(ValidationError {
                    locale: locale.clone(),
                    key: key.clone(),
                    value,
                    reason,
                });
            }
        }
    }

    report
}
