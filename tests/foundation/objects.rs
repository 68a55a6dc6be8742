//! Integration tests for the object protocol
//!
//! Tests type names, display, truthiness, equality, deep copy and operators
//! across variants.

use tessera_foundation::{
    Arity, Array, BinaryOperator, Builtin, CallError, ErrorKind, NativeFn, Object, ObjectKind,
};

fn array(items: Vec<Object>) -> Object {
    Object::Array(Array::new(items))
}

fn builtin(name: &str) -> Object {
    Object::Builtin(Builtin::new(
        name,
        NativeFn::new(Arity::Exact(0), |_: &[Object]| Ok::<_, CallError>(Object::Undefined)),
    ))
}

// =============================================================================
// Type Names
// =============================================================================

#[test]
fn type_names_are_stable() {
    let cases = [
        (Object::Undefined, "undefined"),
        (Object::TRUE, "bool"),
        (Object::Int(1), "int"),
        (Object::Float(1.0), "float"),
        (Object::from("s"), "string"),
        (Object::from(vec![1u8]), "bytes"),
        (array(vec![]), "array"),
        (Object::ImmutableMap(Default::default()), "immutable-map"),
        (Object::error("e"), "error"),
        (builtin("f"), "builtin-function"),
    ];
    for (object, name) in cases {
        assert_eq!(object.type_name(), name);
        assert_eq!(object.kind().name(), name);
    }
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_forms() {
    assert_eq!(Object::Undefined.to_string(), "<undefined>");
    assert_eq!(Object::Int(-7).to_string(), "-7");
    assert_eq!(Object::from("hi").to_string(), "\"hi\"");
    assert_eq!(
        array(vec![Object::Int(1), Object::from("a")]).to_string(),
        "[1, \"a\"]"
    );
    assert_eq!(Object::error("boom").to_string(), "error: \"boom\"");
    assert_eq!(builtin("len").to_string(), "<builtin-function:len>");
}

// =============================================================================
// Truthiness
// =============================================================================

#[test]
fn falsy_values() {
    assert!(Object::Undefined.is_falsy());
    assert!(Object::FALSE.is_falsy());
    assert!(Object::Int(0).is_falsy());
    assert!(Object::from("").is_falsy());
    assert!(array(vec![]).is_falsy());
    assert!(Object::error("anything").is_falsy());
}

#[test]
fn truthy_values() {
    assert!(!Object::TRUE.is_falsy());
    assert!(!Object::Int(3).is_falsy());
    assert!(!Object::from("x").is_falsy());
    assert!(!array(vec![Object::Undefined]).is_falsy());
    assert!(!builtin("f").is_falsy());
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn equality_is_structural() {
    assert!(array(vec![Object::Int(1)]).equals(&array(vec![Object::Int(1)])));
    assert!(!array(vec![Object::Int(1)]).equals(&array(vec![Object::Int(2)])));
    assert!(Object::error("x").equals(&Object::error("x")));
}

#[test]
fn different_variants_are_unequal() {
    assert!(!Object::Int(1).equals(&Object::Float(1.0)));
    assert!(!Object::from("1").equals(&Object::Int(1)));
    assert!(!Object::Undefined.equals(&Object::FALSE));
}

#[test]
fn builtins_compare_by_identity() {
    let f = builtin("f");
    assert!(f.equals(&f.clone()));
    assert!(!f.equals(&builtin("f")));
}

// =============================================================================
// Copy
// =============================================================================

#[test]
fn copy_detaches_arrays() {
    let original = array(vec![Object::Int(1)]);
    let alias = original.clone();
    let copy = original.copy();

    original.as_array().unwrap().push(Object::Int(2));

    assert!(alias.equals(&original));
    assert!(!copy.equals(&original));
    assert_eq!(copy.as_array().unwrap().len(), 1);
}

// =============================================================================
// Binary Operators
// =============================================================================

#[test]
fn arithmetic_and_comparison() {
    let sum = Object::Int(2).binary_op(BinaryOperator::Add, &Object::Int(3));
    assert_eq!(sum.unwrap(), Object::Int(5));

    let mixed = Object::Int(1).binary_op(BinaryOperator::Add, &Object::Float(0.5));
    assert_eq!(mixed.unwrap(), Object::Float(1.5));

    let less = Object::from("a").binary_op(BinaryOperator::Less, &Object::from("b"));
    assert_eq!(less.unwrap(), Object::TRUE);
}

#[test]
fn string_concatenation_displays_other_side() {
    let result = Object::from("n=").binary_op(BinaryOperator::Add, &Object::Int(4));
    assert_eq!(result.unwrap(), Object::from("n=4"));
}

#[test]
fn unsupported_pairings_are_invalid_operators() {
    let err = Object::TRUE
        .binary_op(BinaryOperator::Add, &Object::Int(1))
        .unwrap_err();
    assert!(err.is_invalid_operator());
    match err.kind {
        ErrorKind::InvalidOperator { op, lhs, rhs } => {
            assert_eq!(op, BinaryOperator::Add);
            assert_eq!(lhs, ObjectKind::Bool);
            assert_eq!(rhs, ObjectKind::Int);
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn division_by_zero_is_reported() {
    let err = Object::Int(1)
        .binary_op(BinaryOperator::Quo, &Object::Int(0))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DivisionByZero));
}

#[test]
fn operator_symbols_round_trip() {
    for op in BinaryOperator::ALL {
        assert_eq!(BinaryOperator::from_symbol(op.symbol()), Some(op));
    }
}
