// crates/locale-gate-core/tests/proptest_tree.rs
// ============================================================================
// Module: Key Tree Property-Based Tests
// Description: Property tests for flatten/rebuild and patch invariants.
// Purpose: Detect panics and structure loss across wide catalog shapes.
// ============================================================================

//! Property-based tests for message-tree invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeSet;

use locale_gate_core::MessageTree;
use locale_gate_core::flatten;
use locale_gate_core::missing_usage_keys;
use locale_gate_core::patch_canonical;
use locale_gate_core::rebuild;
use proptest::prelude::*;
use serde_json::Value;

fn message_tree_strategy(max_depth: u32) -> impl Strategy<Value = MessageTree> {
    let leaf = prop_oneof![
        "[ -~]{0,12}".prop_map(Value::String),
        any::<i64>().prop_map(|v| Value::Number(v.into())),
        any::<bool>().prop_map(Value::Bool),
        prop::collection::vec("[a-z]{0,4}".prop_map(Value::String), 0 .. 3)
            .prop_map(Value::Array),
    ];

    let node = leaf.prop_recursive(max_depth, 48, 6, |inner| {
        prop::collection::btree_map("[a-zA-Z][a-zA-Z0-9]{0,5}", inner, 1 .. 5).prop_map(|map| {
            let mut object = serde_json::Map::new();
            for (key, value) in map {
                object.insert(key, value);
            }
            Value::Object(object)
        })
    });

    prop::collection::btree_map("[a-zA-Z][a-zA-Z0-9]{0,5}", node, 0 .. 5).prop_map(|map| {
        let mut tree = MessageTree::new();
        for (key, value) in map {
            tree.insert(key, value);
        }
        tree
    })
}

fn usage_key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,5}", 1 .. 4)
        .prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn flatten_rebuild_round_trips(tree in message_tree_strategy(3)) {
        let flat = flatten(&tree);
        let rebuilt = rebuild(&flat).expect("rebuild from flatten output");
        prop_assert_eq!(flatten(&rebuilt), flat);
    }

    #[test]
    fn leaves_and_namespaces_stay_disjoint(tree in message_tree_strategy(3)) {
        let flat = flatten(&tree);
        for key in flat.leaves.keys() {
            prop_assert!(!flat.namespaces.contains(key));
        }
    }

    #[test]
    fn patch_never_leaves_a_usage_key_uncovered(
        tree in message_tree_strategy(2),
        keys in prop::collection::btree_set(usage_key_strategy(), 0 .. 12),
    ) {
        let mut tree = tree;
        let usage: BTreeSet<String> = keys;
        patch_canonical(&mut tree, &usage, "[TODO_TRANSLATE] ").expect("patch");
        let flat = flatten(&tree);
        prop_assert!(missing_usage_keys(&usage, &flat).is_empty());
    }

    #[test]
    fn patch_is_idempotent(
        tree in message_tree_strategy(2),
        keys in prop::collection::btree_set(usage_key_strategy(), 0 .. 12),
    ) {
        let mut tree = tree;
        patch_canonical(&mut tree, &keys, "[TODO_TRANSLATE] ").expect("first patch");
        let snapshot = tree.clone();
        let outcome = patch_canonical(&mut tree, &keys, "[TODO_TRANSLATE] ").expect("second patch");
        prop_assert!(!outcome.changed());
        prop_assert_eq!(tree, snapshot);
    }
}
