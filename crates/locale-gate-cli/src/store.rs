// crates/locale-gate-cli/src/store.rs
// ============================================================================
// Module: Filesystem Catalog Store
// Description: JSON catalog persistence under the messages directory.
// Purpose: Load and save per-locale catalogs as `<locale>.json` files.
// Dependencies: locale-gate-core, serde_json
// ============================================================================

//! ## Overview
//! Catalogs live as one JSON object per locale under the configured messages
//! directory. An absent file loads as `None` so callers can distinguish a
//! missing catalog from a malformed one; malformed JSON and non-object roots
//! are hard errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use locale_gate_core::CatalogError;
use locale_gate_core::CatalogStore;
use locale_gate_core::LocaleCode;
use locale_gate_core::MessageTree;
use serde_json::Value;

// ============================================================================
// SECTION: Store
// ============================================================================

/// Catalog store backed by `<messages_dir>/<locale>.json` files.
#[derive(Debug, Clone)]
pub struct FsCatalogStore {
    /// Directory holding the per-locale catalog files.
    messages_dir: PathBuf,
}

impl FsCatalogStore {
    /// Creates a store rooted at the given messages directory.
    #[must_use]
    pub fn new(messages_dir: impl Into<PathBuf>) -> Self {
        Self {
            messages_dir: messages_dir.into(),
        }
    }

    /// Returns the catalog file path for one locale.
    #[must_use]
    pub fn path_for(&self, locale: &LocaleCode) -> PathBuf {
        self.messages_dir.join(format!("{locale}.json"))
    }
}

impl CatalogStore for FsCatalogStore {
    fn load(&self, locale: &LocaleCode) -> Result<Option<MessageTree>, CatalogError> {
        let path = self.path_for(locale);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|err| CatalogError::Io {
            locale: locale.clone(),
            message: format!("{}: {err}", path.display()),
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|err| CatalogError::Malformed {
            locale: locale.clone(),
            message: format!("{}: {err}", path.display()),
        })?;
        let Value::Object(tree) = value else {
            return Err(CatalogError::Malformed {
                locale: locale.clone(),
                message: format!("{}: root must be a JSON object", path.display()),
            });
        };
        Ok(Some(tree))
    }

    fn save(&mut self, locale: &LocaleCode, tree: &MessageTree) -> Result<(), CatalogError> {
        let path = self.path_for(locale);
        let mut content =
            serde_json::to_string_pretty(tree).map_err(|err| CatalogError::Malformed {
                locale: locale.clone(),
                message: err.to_string(),
            })?;
        content.push('\n');
        write_file(&path, &content).map_err(|err| CatalogError::Io {
            locale: locale.clone(),
            message: format!("{}: {err}", path.display()),
        })
    }
}

/// Writes a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
