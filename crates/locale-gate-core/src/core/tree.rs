// crates/locale-gate-core/src/core/tree.rs
// ============================================================================
// Module: Locale Gate Key Tree Model
// Description: Flatten, deep-set, and rebuild operations over message trees.
// Purpose: Provide the generic catalog operations used by every gate runtime.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A message tree is a nested JSON object whose string leaves are translated
//! copy. Dot-joined paths ("flat keys") address leaves and namespace nodes in
//! two disjoint sets. Arrays are opaque terminal values and are never recursed
//! into dot-paths.
//!
//! ## Invariants
//! - `flatten` → [`rebuild`] → `flatten` round-trips every leaf value exactly.
//! - [`set_deep`] never silently discards authored content: a scalar that must
//!   become a parent is preserved under the reserved [`VALUE_KEY`] sibling.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Nested translation catalog for one locale.
pub type MessageTree = Map<String, Value>;

/// Reserved sibling key holding a scalar displaced by deeper children.
pub const VALUE_KEY: &str = "_value";

/// Flattened view of a message tree.
///
/// # Invariants
/// - `leaves` and `namespaces` are disjoint key sets.
/// - Iteration order is lexicographic and therefore deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedCatalog {
    /// Leaf values keyed by dot-joined path.
    pub leaves: BTreeMap<String, Value>,
    /// Namespace (object) node paths.
    pub namespaces: BTreeSet<String>,
}

impl FlattenedCatalog {
    /// Returns true when the flat key addresses a leaf.
    #[must_use]
    pub fn has_leaf(&self, key: &str) -> bool {
        self.leaves.contains_key(key)
    }

    /// Returns the leaf value as a string slice, if it is a string leaf.
    #[must_use]
    pub fn string_value(&self, key: &str) -> Option<&str> {
        self.leaves.get(key).and_then(Value::as_str)
    }

    /// Returns true when any leaf key starts with `prefix` plus a dot.
    ///
    /// Used to exempt usage keys that denote an already-populated namespace.
    #[must_use]
    pub fn has_leaf_under(&self, prefix: &str) -> bool {
        let bound = format!("{prefix}.");
        self.leaves.range(bound.clone() ..).next().is_some_and(|(key, _)| key.starts_with(&bound))
    }
}

/// Tree operation failures.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A flat key was empty or contained an empty segment.
    #[error("invalid flat key: {0:?}")]
    InvalidKey(String),
}

// ============================================================================
// SECTION: Flatten
// ============================================================================

/// Flattens a message tree into disjoint leaf and namespace key sets.
#[must_use]
pub fn flatten(tree: &MessageTree) -> FlattenedCatalog {
    let mut out = FlattenedCatalog::default();
    flatten_into(tree, "", &mut out);
    out
}

/// Recursively collects leaves and namespaces under `prefix`.
fn flatten_into(tree: &MessageTree, prefix: &str, out: &mut FlattenedCatalog) {
    for (segment, value) in tree {
        let flat_key = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{prefix}.{segment}")
        };
        match value {
            Value::Object(child) => {
                out.namespaces.insert(flat_key.clone());
                flatten_into(child, &flat_key, out);
            }
            // Arrays are opaque terminals, never dot-path namespaces.
            other => {
                out.leaves.insert(flat_key, other.clone());
            }
        }
    }
}

/// Returns the dot-depth of a flat key (number of segments).
#[must_use]
pub fn key_depth(key: &str) -> usize {
    key.split('.').count()
}

// ============================================================================
// SECTION: Deep Set
// ============================================================================

/// Sets `value` at the dot-joined `path`, creating intermediate objects.
///
/// A scalar occupying an intermediate segment is preserved under the reserved
/// [`VALUE_KEY`] sibling before the object takes its place. When the final
/// segment resolves to an existing object, the scalar is stored under
/// [`VALUE_KEY`] inside it.
///
/// # Errors
///
/// Returns [`TreeError::InvalidKey`] when the path is empty or contains an
/// empty segment.
pub fn set_deep(tree: &mut MessageTree, path: &str, value: Value) -> Result<(), TreeError> {
    let segments: Vec<&str> = path.split('.').collect();
    if path.is_empty() || segments.iter().any(|segment| segment.is_empty()) {
        return Err(TreeError::InvalidKey(path.to_string()));
    }

    let mut current = tree;
    for segment in &segments[.. segments.len() - 1] {
        let entry =
            current.entry((*segment).to_string()).or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            // Preserve the authored scalar before promoting to a namespace.
            let displaced = entry.take();
            let mut promoted = Map::new();
            promoted.insert(VALUE_KEY.to_string(), displaced);
            *entry = Value::Object(promoted);
        }
        let Some(child) = entry.as_object_mut() else {
            return Err(TreeError::InvalidKey(path.to_string()));
        };
        current = child;
    }

    let leaf = segments[segments.len() - 1];
    match current.get_mut(leaf) {
        Some(Value::Object(existing)) => {
            existing.insert(VALUE_KEY.to_string(), value);
        }
        _ => {
            current.insert(leaf.to_string(), value);
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Rebuild
// ============================================================================

/// Rebuilds a message tree from a flattened catalog.
///
/// Namespace keys are re-derived from leaf paths; only leaves carry data.
///
/// # Errors
///
/// Returns [`TreeError`] when a leaf key is malformed.
pub fn rebuild(flat: &FlattenedCatalog) -> Result<MessageTree, TreeError> {
    let mut tree = MessageTree::new();
    for (key, value) in &flat.leaves {
        set_deep(&mut tree, key, value.clone())?;
    }
    Ok(tree)
}
