// crates/locale-gate-config/src/lists.rs
// ============================================================================
// Module: Policy List Loading
// Description: JSON loaders for the allowlist and critical-key list.
// Purpose: Read the reviewed policy lists the gate consults at run time.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Policy lists live next to the config as plain JSON arrays so reviewers can
//! diff them without tooling. An absent path yields an empty list; a present
//! but malformed file is a hard error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::config::ConfigError;

// ============================================================================
// SECTION: Loaders
// ============================================================================

/// Reads a JSON string array from disk.
fn load_string_array(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|err| ConfigError::Parse(format!("{}: {err}", path.display())))
}

/// Loads the coverage allowlist of `"locale:key"` exemptions.
///
/// `None` means no allowlist is configured and yields an empty set.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file is unreadable or not a JSON string
/// array, or when an entry is not of the form `"locale:key"`.
pub fn load_allowlist(path: Option<&Path>) -> Result<BTreeSet<String>, ConfigError> {
    let Some(path) = path else {
        return Ok(BTreeSet::new());
    };
    let entries = load_string_array(path)?;
    for entry in &entries {
        let Some((locale, key)) = entry.split_once(':') else {
            return Err(ConfigError::Invalid(format!(
                "allowlist entry {entry:?} must be \"locale:key\""
            )));
        };
        if locale.is_empty() || key.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "allowlist entry {entry:?} must be \"locale:key\""
            )));
        }
    }
    Ok(entries.into_iter().collect())
}

/// Loads the curated critical-key list for strict validation.
///
/// `None` means no list is configured and yields an empty list.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file is unreadable or not a JSON string
/// array.
pub fn load_critical_keys(path: Option<&Path>) -> Result<Vec<String>, ConfigError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    load_string_array(path)
}
