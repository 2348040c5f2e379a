// crates/locale-gate-core/src/runtime/coverage.rs
// ============================================================================
// Module: Locale Gate Coverage Evaluator
// Description: Per-locale catalog diffing under tiered release policy.
// Purpose: Decide whether translation coverage permits a release.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The coverage evaluator diffs every target locale against the canonical
//! catalog. A key is deficient when it is missing from the target or still
//! carries the sentinel placeholder prefix. Blocking-tier locales tolerate
//! zero deficiencies; thresholded-tier locales warn up to a configured bound
//! and fail beyond it. Locales are evaluated independently so one broken
//! catalog never hides the state of its siblings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::locale::CoverageTier;
use crate::core::locale::LocaleCode;
use crate::core::tree::FlattenedCatalog;
use crate::core::tree::MessageTree;
use crate::core::tree::flatten;
use crate::interfaces::CatalogStore;

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Static coverage policy for one gate run.
///
/// # Invariants
/// - `targets` excludes the canonical locale.
/// - `threshold` applies to [`CoverageTier::Thresholded`] locales only.
#[derive(Debug, Clone)]
pub struct CoveragePolicy {
    /// Target locales with their assigned tier, in report order.
    pub targets: Vec<(LocaleCode, CoverageTier)>,
    /// Maximum tolerated deficiency count for thresholded locales.
    pub threshold: usize,
    /// Exempted `"locale:key"` entries.
    pub allowlist: BTreeSet<String>,
    /// Placeholder prefix marking a present-but-untranslated leaf.
    pub sentinel_prefix: String,
}

// ============================================================================
// SECTION: Results
// ============================================================================

/// How one target catalog file loaded for the run.
///
/// Missing and malformed catalogs are both fully deficient, but the report
/// must not tell translators a file is absent when it exists and is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogFileState {
    /// Catalog file loaded as a JSON object.
    Present,
    /// Catalog file does not exist.
    Missing,
    /// Catalog file exists but could not be read or parsed.
    Malformed,
}

impl CatalogFileState {
    /// Returns true when the catalog contributed a usable tree.
    #[must_use]
    pub const fn is_usable(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Gate outcome for one locale or for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    /// No deficiencies.
    Pass,
    /// Deficiencies within the tolerated threshold.
    Warn,
    /// Deficiencies exceed policy.
    Fail,
}

impl GateStatus {
    /// Returns a stable label for report output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
        }
    }
}

/// Coverage result for one target locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCoverage {
    /// Locale under evaluation.
    pub locale: LocaleCode,
    /// Tier the locale is assigned to.
    pub tier: CoverageTier,
    /// Gate outcome for this locale.
    pub status: GateStatus,
    /// How the catalog file loaded.
    pub file_state: CatalogFileState,
    /// Total leaf keys found in the locale catalog.
    pub total_keys: usize,
    /// Deficient keys (missing or sentinel-valued), allowlist applied.
    pub deficiencies: Vec<String>,
}

/// Aggregated coverage result for one gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Total leaf keys in the canonical catalog.
    pub canonical_total: usize,
    /// Canonical leaves still carrying the sentinel prefix (warning only).
    pub canonical_placeholders: usize,
    /// Per-locale results in policy order.
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Returns true when no locale hard-failed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.locales.iter().all(|entry| entry.status != GateStatus::Fail)
    }

    /// Returns itemized failure descriptions for console output.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.locales
            .iter()
            .filter(|entry| entry.status == GateStatus::Fail)
            .map(|entry| match entry.file_state {
                CatalogFileState::Missing => {
                    format!("{} (catalog file missing, {} tier)", entry.locale, entry.tier.as_str())
                }
                CatalogFileState::Malformed => format!(
                    "{} (catalog file malformed, {} tier)",
                    entry.locale,
                    entry.tier.as_str()
                ),
                CatalogFileState::Present => format!(
                    "{} ({} missing/untranslated keys, {} tier)",
                    entry.locale,
                    entry.deficiencies.len(),
                    entry.tier.as_str()
                ),
            })
            .collect()
    }
}

// ============================================================================
// SECTION: Per-Locale Evaluation
// ============================================================================

/// Evaluates one target locale against the flattened canonical catalog.
///
/// `target` is `None` exactly when `file_state` is not
/// [`CatalogFileState::Present`]; an unusable catalog counts as 100%
/// deficient.
#[must_use]
pub fn evaluate_locale(
    canonical: &FlattenedCatalog,
    target: Option<&MessageTree>,
    file_state: CatalogFileState,
    locale: &LocaleCode,
    tier: CoverageTier,
    policy: &CoveragePolicy,
) -> LocaleCoverage {
    let flat = target.map(flatten).unwrap_or_default();

    let mut deficient: BTreeSet<String> = BTreeSet::new();
    for key in canonical.leaves.keys() {
        if !flat.has_leaf(key) {
            deficient.insert(key.clone());
        }
    }
    for (key, value) in &flat.leaves {
        if value.as_str().is_some_and(|text| text.starts_with(&policy.sentinel_prefix)) {
            deficient.insert(key.clone());
        }
    }
    deficient.retain(|key| !policy.allowlist.contains(&format!("{locale}:{key}")));

    let count = deficient.len();
    let status = match tier {
        CoverageTier::Blocking if !file_state.is_usable() || count > 0 => GateStatus::Fail,
        CoverageTier::Thresholded if count > policy.threshold => GateStatus::Fail,
        CoverageTier::Thresholded if count > 0 => GateStatus::Warn,
        CoverageTier::Blocking | CoverageTier::Thresholded => GateStatus::Pass,
    };

    LocaleCoverage {
        locale: locale.clone(),
        tier,
        status,
        file_state,
        total_keys: flat.leaves.len(),
        deficiencies: deficient.into_iter().collect(),
    }
}

// ============================================================================
// SECTION: Run Evaluation
// ============================================================================

/// Evaluates every target locale in the policy against the canonical tree.
///
/// A target catalog that exists but fails to load is classified as
/// malformed, not absent; the remaining locales are still evaluated.
#[must_use]
pub fn evaluate_coverage(
    canonical_tree: &MessageTree,
    store: &dyn CatalogStore,
    policy: &CoveragePolicy,
) -> CoverageReport {
    let canonical = flatten(canonical_tree);
    let canonical_placeholders = canonical
        .leaves
        .values()
        .filter(|value| {
            value.as_str().is_some_and(|text| text.starts_with(&policy.sentinel_prefix))
        })
        .count();

    let locales = policy
        .targets
        .iter()
        .map(|(locale, tier)| {
            let (tree, file_state) = match store.load(locale) {
                Ok(Some(tree)) => (Some(tree), CatalogFileState::Present),
                Ok(None) => (None, CatalogFileState::Missing),
                Err(_) => (None, CatalogFileState::Malformed),
            };
            evaluate_locale(&canonical, tree.as_ref(), file_state, locale, *tier, policy)
        })
        .collect();

    CoverageReport {
        canonical_total: canonical.leaves.len(),
        canonical_placeholders,
        locales,
    }
}
