// locale-gate-core/tests/tree.rs
// ============================================================================
// Module: Key Tree Model Tests
// Description: Flatten, deep-set, and rebuild behavior tests.
// Purpose: Ensure catalog structure operations never lose authored content.
// Dependencies: locale-gate-core, serde_json
// ============================================================================
//! ## Overview
//! Validates flat-key derivation, the scalar-promotion rule for deep sets,
//! array opacity, and the flatten/rebuild round-trip.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use locale_gate_core::MessageTree;
use locale_gate_core::TreeError;
use locale_gate_core::VALUE_KEY;
use locale_gate_core::flatten;
use locale_gate_core::key_depth;
use locale_gate_core::rebuild;
use locale_gate_core::set_deep;
use serde_json::Value;
use serde_json::json;

fn tree(value: Value) -> MessageTree {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn flatten_separates_leaves_and_namespaces() {
    let catalog = tree(json!({
        "Nav": { "home": "Home", "about": "About" },
        "Footer": { "legal": { "privacy": "Privacy" } },
        "title": "Acme"
    }));
    let flat = flatten(&catalog);

    assert_eq!(flat.string_value("Nav.home"), Some("Home"));
    assert_eq!(flat.string_value("Footer.legal.privacy"), Some("Privacy"));
    assert_eq!(flat.string_value("title"), Some("Acme"));
    assert!(flat.namespaces.contains("Nav"));
    assert!(flat.namespaces.contains("Footer.legal"));
    assert!(!flat.has_leaf("Nav"));
    assert!(flat.has_leaf_under("Footer"));
    assert!(!flat.has_leaf_under("Footerx"));
}

#[test]
fn arrays_are_opaque_terminals() {
    let catalog = tree(json!({ "Faq": { "items": ["a", "b"] } }));
    let flat = flatten(&catalog);

    assert!(flat.has_leaf("Faq.items"));
    assert!(!flat.has_leaf("Faq.items.0"));
    assert!(!flat.namespaces.contains("Faq.items"));
}

#[test]
fn set_deep_creates_intermediate_objects() {
    let mut catalog = MessageTree::new();
    set_deep(&mut catalog, "Pricing.plans.free", json!("Free")).expect("set should succeed");

    let flat = flatten(&catalog);
    assert_eq!(flat.string_value("Pricing.plans.free"), Some("Free"));
    assert!(flat.namespaces.contains("Pricing.plans"));
}

#[test]
fn set_deep_promotes_scalar_intermediate_without_loss() {
    let mut catalog = tree(json!({ "Nav": { "home": "Home" } }));
    set_deep(&mut catalog, "Nav.home.icon", json!("house")).expect("set should succeed");

    let flat = flatten(&catalog);
    assert_eq!(flat.string_value(&format!("Nav.home.{VALUE_KEY}")), Some("Home"));
    assert_eq!(flat.string_value("Nav.home.icon"), Some("house"));
}

#[test]
fn set_deep_into_existing_object_uses_value_key() {
    let mut catalog = tree(json!({ "Nav": { "home": { "icon": "house" } } }));
    set_deep(&mut catalog, "Nav.home", json!("Home")).expect("set should succeed");

    let flat = flatten(&catalog);
    assert_eq!(flat.string_value(&format!("Nav.home.{VALUE_KEY}")), Some("Home"));
    assert_eq!(flat.string_value("Nav.home.icon"), Some("house"));
}

#[test]
fn set_deep_rejects_malformed_paths() {
    let mut catalog = MessageTree::new();
    assert!(matches!(set_deep(&mut catalog, "", json!("x")), Err(TreeError::InvalidKey(_))));
    assert!(matches!(set_deep(&mut catalog, "Nav..home", json!("x")), Err(TreeError::InvalidKey(_))));
    assert!(matches!(set_deep(&mut catalog, ".Nav", json!("x")), Err(TreeError::InvalidKey(_))));
}

#[test]
fn rebuild_round_trips_flatten() {
    let catalog = tree(json!({
        "Nav": { "home": "Home", "menu": { "open": "Open" } },
        "count": 3,
        "flags": [true, false]
    }));
    let flat = flatten(&catalog);
    let rebuilt = rebuild(&flat).expect("rebuild should succeed");

    assert_eq!(flatten(&rebuilt), flat);
}

#[test]
fn key_depth_counts_segments() {
    assert_eq!(key_depth("title"), 1);
    assert_eq!(key_depth("Nav.home"), 2);
    assert_eq!(key_depth("A.b.c.d"), 4);
}
