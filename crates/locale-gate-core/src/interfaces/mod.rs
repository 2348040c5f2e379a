// crates/locale-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Locale Gate Interfaces
// Description: Backend-agnostic catalog storage for gate runtimes.
// Purpose: Keep evaluation pure; all filesystem access goes through adapters.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Gate runtimes never touch the filesystem directly. A [`CatalogStore`]
//! loads and saves per-locale message trees; the CLI provides the real
//! filesystem adapter while tests use [`MemoryCatalogStore`]. Implementations
//! must be deterministic and fail closed on malformed data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::locale::LocaleCode;
use crate::core::tree::MessageTree;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog loading or saving failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O failure while reading or writing a catalog.
    #[error("catalog io error for {locale}: {message}")]
    Io {
        /// Locale whose catalog failed.
        locale: LocaleCode,
        /// Underlying error description.
        message: String,
    },
    /// Catalog content was not valid JSON or not a JSON object.
    #[error("malformed catalog for {locale}: {message}")]
    Malformed {
        /// Locale whose catalog failed.
        locale: LocaleCode,
        /// Underlying error description.
        message: String,
    },
}

// ============================================================================
// SECTION: Catalog Store
// ============================================================================

/// Storage adapter for per-locale message catalogs.
pub trait CatalogStore {
    /// Loads the message tree for a locale, or `None` when the catalog file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalog exists but cannot be read or
    /// parsed. An absent catalog is not an error; the coverage evaluator
    /// classifies it as a structural deficiency.
    fn load(&self, locale: &LocaleCode) -> Result<Option<MessageTree>, CatalogError>;

    /// Saves the message tree for a locale.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalog cannot be written.
    fn save(&mut self, locale: &LocaleCode, tree: &MessageTree) -> Result<(), CatalogError>;
}

// ============================================================================
// SECTION: Memory Store
// ============================================================================

/// In-memory catalog store used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    /// Trees keyed by locale code.
    trees: BTreeMap<LocaleCode, MessageTree>,
}

impl MemoryCatalogStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tree for a locale, replacing any previous tree.
    pub fn insert(&mut self, locale: impl Into<LocaleCode>, tree: MessageTree) {
        self.trees.insert(locale.into(), tree);
    }

    /// Returns the stored tree for a locale, if present.
    #[must_use]
    pub fn get(&self, locale: &LocaleCode) -> Option<&MessageTree> {
        self.trees.get(locale)
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn load(&self, locale: &LocaleCode) -> Result<Option<MessageTree>, CatalogError> {
        Ok(self.trees.get(locale).cloned())
    }

    fn save(&mut self, locale: &LocaleCode, tree: &MessageTree) -> Result<(), CatalogError> {
        self.trees.insert(locale.clone(), tree.clone());
        Ok(())
    }
}
