//! Integration tests for Error types
//!
//! Tests error construction, display, context, and the calling-convention
//! error.

use tessera_foundation::{
    BinaryOperator, CallError, Error, ErrorContext, ErrorKind, Object, ObjectKind,
};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_operator() {
    let err = Error::invalid_operator(BinaryOperator::Sub, ObjectKind::String, ObjectKind::Int);
    assert!(err.is_invalid_operator());
    assert_eq!(err.to_string(), "invalid operator: string - int");
}

#[test]
fn error_division_by_zero() {
    let err = Error::division_by_zero();
    assert!(matches!(err.kind, ErrorKind::DivisionByZero));
    assert!(!err.is_invalid_operator());
}

#[test]
fn error_invalid_shift() {
    let err = Object::Int(1)
        .binary_op(BinaryOperator::Shl, &Object::Int(-1))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidShift(-1)));
    assert!(err.to_string().contains("-1"));
}

#[test]
fn error_index_out_of_bounds() {
    let err = Error::index_out_of_bounds(5, 2);
    let msg = err.to_string();
    assert!(msg.contains('5'));
    assert!(msg.contains('2'));
}

// =============================================================================
// Calling-Convention Errors
// =============================================================================

#[test]
fn call_error_display() {
    assert_eq!(
        CallError::wrong_num_arguments(2, 0).to_string(),
        "wrong number of arguments: expected 2, got 0"
    );
    assert_eq!(
        CallError::invalid_argument_type(1, ObjectKind::Int, ObjectKind::String).to_string(),
        "invalid type for argument 1: expected int, found string"
    );
}

#[test]
fn call_error_converts_into_error() {
    let err: Error = CallError::wrong_num_arguments(1, 3).into();
    assert!(matches!(
        err.kind,
        ErrorKind::Call(CallError::WrongNumArguments {
            expected: 1,
            found: 3
        })
    ));
    assert_eq!(err.to_string(), "wrong number of arguments: expected 1, got 3");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let ctx = ErrorContext::new()
        .with_source("text.join")
        .with_frame("main");
    let err = Error::division_by_zero().with_context(ctx);

    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.source.as_deref(), Some("text.join"));
    assert_eq!(ctx.stack, vec!["main".to_string()]);
    assert!(ctx.to_string().contains("called from main"));
}

// =============================================================================
// Error Objects
// =============================================================================

#[test]
fn error_objects_are_values() {
    let err = Object::error("some error");
    assert!(err.is_error());
    assert_eq!(err.kind(), ObjectKind::Error);
    assert_eq!(err.error_payload(), Some(&Object::from("some error")));
    assert_eq!(err.copy(), err);
}
