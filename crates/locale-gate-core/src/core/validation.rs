// crates/locale-gate-core/src/core/validation.rs
// ============================================================================
// Module: Locale Gate Validation Types
// Description: Content-validation errors produced by the strict gate.
// Purpose: Provide stable reason codes and display forms for reports.
// Dependencies: crate::core::locale, serde
// ============================================================================

//! ## Overview
//! A [`ValidationError`] records exactly one failed check for one
//! `(locale, key)` pair. The strict validator short-circuits its check
//! battery, so the reason code always reflects the first rule that failed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::locale::LocaleCode;

// ============================================================================
// SECTION: Reason Codes
// ============================================================================

/// Reason a critical key failed strict validation.
///
/// # Invariants
/// - Ordering of the check battery is fixed; the first failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// The locale catalog file is entirely absent.
    FileMissing,
    /// The key does not exist in the locale catalog.
    KeyMissing,
    /// The trimmed value is empty.
    Empty,
    /// The trimmed value equals the key name itself.
    SameAsKey,
    /// The value matches the placeholder/TODO blocklist.
    Placeholder,
    /// The value is byte-identical to the canonical-language value.
    SameAsSource,
}

impl ValidationReason {
    /// Returns the human-readable description used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileMissing => "Translation file is missing",
            Self::KeyMissing => "Key is missing",
            Self::Empty => "Value is empty",
            Self::SameAsKey => "Value is same as key name",
            Self::Placeholder => "Value contains placeholder/TODO string",
            Self::SameAsSource => "Value is identical to the source language",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Validation Error
// ============================================================================

/// One failed strict check for one `(locale, key)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Locale whose catalog failed the check.
    pub locale: LocaleCode,
    /// Dot-joined critical key under test.
    pub key: String,
    /// Offending value as found in the catalog.
    pub value: String,
    /// First failing rule.
    pub reason: ValidationReason,
}
