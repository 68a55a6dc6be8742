//! Integration tests for `ImmutableMap`
//!
//! Tests construction, lookup, equality, copy independence and the
//! map's place in the object protocol.

use proptest::prelude::*;
use tessera_foundation::{Array, BinaryOperator, ImmutableMap, Object, ObjectKind};

fn map(entries: &[(&str, Object)]) -> ImmutableMap {
    entries.iter().cloned().collect()
}

// =============================================================================
// Construction and Lookup
// =============================================================================

#[test]
fn empty_map() {
    let m = ImmutableMap::new();
    assert!(m.is_empty());
    assert_eq!(m.len(), 0);
    assert!(Object::ImmutableMap(m).is_falsy());
}

#[test]
fn lookup() {
    let m = map(&[("name", Object::from("tess")), ("age", Object::Int(3))]);
    assert_eq!(m.get("age"), Some(&Object::Int(3)));
    assert!(m.contains_key("name"));
    assert_eq!(m.get("missing"), None);
    assert!(!Object::ImmutableMap(m).is_falsy());
}

#[test]
fn repeated_key_keeps_last_value() {
    let m = map(&[("k", Object::Int(1)), ("k", Object::Int(2))]);
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("k"), Some(&Object::Int(2)));
}

#[test]
fn iteration_is_in_key_order() {
    let m = map(&[
        ("c", Object::Int(3)),
        ("a", Object::Int(1)),
        ("b", Object::Int(2)),
    ]);
    let keys: Vec<_> = m.keys().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(m.to_string(), "{a: 1, b: 2, c: 3}");
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn changed_value_is_unequal() {
    let a = map(&[("x", Object::Int(1)), ("y", Object::Int(2))]);
    let b = map(&[("x", Object::Int(1)), ("y", Object::Int(3))]);
    assert!(!a.equals(&b));
}

#[test]
fn removed_or_renamed_key_is_unequal() {
    let a = map(&[("x", Object::Int(1)), ("y", Object::Int(2))]);
    let fewer = map(&[("x", Object::Int(1))]);
    let renamed = map(&[("x", Object::Int(1)), ("z", Object::Int(2))]);
    assert!(!a.equals(&fewer));
    assert!(!fewer.equals(&a));
    assert!(!a.equals(&renamed));
}

#[test]
fn map_is_not_equal_to_other_variants() {
    let m = Object::ImmutableMap(map(&[]));
    assert!(!m.equals(&Object::Array(Array::default())));
    assert!(!m.equals(&Object::Undefined));
}

// =============================================================================
// Copy
// =============================================================================

#[test]
fn copy_is_equal_but_independent() {
    let inner = Array::new(vec![Object::Int(1)]);
    let original = Object::ImmutableMap(map(&[("items", Object::Array(inner.clone()))]));

    let copy = original.copy();
    assert!(copy.equals(&original));

    let copied_items = copy.as_map().unwrap().get("items").unwrap().clone();
    copied_items.as_array().unwrap().push(Object::Int(2));

    assert_eq!(inner.len(), 1);
    assert!(!copy.equals(&original));
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn maps_support_no_operators() {
    let m = Object::ImmutableMap(map(&[("a", Object::Int(1))]));
    for op in BinaryOperator::ALL {
        for rhs in [m.clone(), Object::Int(1), Object::from("s")] {
            let err = m.binary_op(op, &rhs).unwrap_err();
            assert!(err.is_invalid_operator(), "{op} should be invalid");
        }
    }
}

#[test]
fn map_kind_and_name() {
    let m = Object::ImmutableMap(map(&[]));
    assert_eq!(m.kind(), ObjectKind::ImmutableMap);
    assert_eq!(m.type_name(), "immutable-map");
    assert!(m.kind().is_composite());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn equality_ignores_insertion_order(
        entries in prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..16)
    ) {
        let forward: ImmutableMap = entries
            .iter()
            .map(|(k, v)| (k.as_str(), Object::Int(*v)))
            .collect();
        let backward: ImmutableMap = entries
            .iter()
            .rev()
            .map(|(k, v)| (k.as_str(), Object::Int(*v)))
            .collect();
        prop_assert!(forward.equals(&backward));
        prop_assert_eq!(forward.len(), entries.len());
    }

    #[test]
    fn copy_always_equals_original(
        entries in prop::collection::vec(("[a-z]{1,4}", any::<i64>()), 0..12)
    ) {
        let m: ImmutableMap = entries
            .iter()
            .map(|(k, v)| (k.as_str(), Object::Int(*v)))
            .collect();
        let original = Object::ImmutableMap(m);
        prop_assert!(original.copy().equals(&original));
    }
}
