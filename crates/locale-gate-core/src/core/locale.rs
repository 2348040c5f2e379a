// crates/locale-gate-core/src/core/locale.rs
// ============================================================================
// Module: Locale Gate Identifiers
// Description: Locale codes and coverage-tier classification.
// Purpose: Provide strongly typed locale identity with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Locale codes are opaque lowercase tags (`"es"`, `"zh"`). Validation of the
//! tier assignment happens at configuration boundaries rather than within
//! these simple wrappers. Exactly one locale per deployment is canonical; all
//! others are targets carrying a [`CoverageTier`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Locale Code
// ============================================================================

/// Locale identifier for one message catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Creates a new locale code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LocaleCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocaleCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Coverage Tier
// ============================================================================

/// Release-policy class assigned to a target locale.
///
/// # Invariants
/// - Exactly two tiers exist; there is no intermediate class.
/// - [`CoverageTier::Blocking`] tolerates zero deficiencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTier {
    /// Any deficiency blocks the release.
    Blocking,
    /// Deficiencies up to a configured threshold produce a warning only.
    Thresholded,
}

impl CoverageTier {
    /// Returns a stable label for report output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocking => "blocking",
            Self::Thresholded => "thresholded",
        }
    }
}
