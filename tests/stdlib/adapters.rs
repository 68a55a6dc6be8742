//! Integration tests for the adapter catalogue
//!
//! Exercises adapters the way a runtime does: through `Builtin` objects
//! stored in the object system.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tessera_foundation::{Array, Builtin, CallError, Callable, Object, ObjectKind};
use tessera_stdlib::adapters::{
    func_a_r, func_a_re, func_a_rse, func_a_rvs, func_aii_re, func_as_rie, func_ass_rs,
    func_avss_rs, wrap_result, wrap_status,
};

fn strings(items: &[&str]) -> Object {
    Object::Array(items.iter().map(|s| Object::from(*s)).collect())
}

// =============================================================================
// Builtins Holding Adapters
// =============================================================================

#[test]
fn adapter_inside_builtin_object() {
    let concat = Object::Builtin(Builtin::new("concat", func_ass_rs(|a, b| a + &b)));

    let f = concat.as_builtin().unwrap();
    assert_eq!(
        f.call(&[Object::from("foo"), Object::from("bar")]),
        Ok(Object::from("foobar"))
    );
    assert_eq!(concat.type_name(), "builtin-function");
    assert!(!concat.is_falsy());
}

#[test]
fn side_effects_happen_once_per_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let tick = Builtin::new(
        "tick",
        func_a_r(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }),
    );

    for _ in 0..3 {
        assert_eq!(tick.call(&[]), Ok(Object::Undefined));
    }
    assert_eq!(
        tick.call(&[Object::Int(1)]),
        Err(CallError::wrong_num_arguments(0, 1))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

// =============================================================================
// Error Channels
// =============================================================================

#[test]
fn application_errors_are_values() {
    let failing = func_a_rse(|| Err::<String, _>("some error"));
    let result = failing.call(&[]).unwrap();

    assert!(result.is_error());
    assert!(result.is_falsy());
    assert_eq!(result, Object::error("some error"));
}

#[test]
fn status_adapters_return_true_on_success() {
    let ok = func_a_re(|| Ok::<(), String>(()));
    assert_eq!(ok.call(&[]), Ok(Object::TRUE));

    let bounded = func_aii_re(|lo, hi| {
        if lo <= hi {
            Ok(())
        } else {
            Err(format!("{lo} > {hi}"))
        }
    });
    assert_eq!(
        bounded.call(&[Object::Int(3), Object::Int(1)]),
        Ok(Object::error("3 > 1"))
    );
}

#[test]
fn calling_convention_errors_are_rejections() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let parse = func_as_rie(move |s| {
        seen.fetch_add(1, Ordering::SeqCst);
        s.parse::<i64>()
    });

    assert_eq!(
        parse.call(&[Object::Int(1)]),
        Err(CallError::invalid_argument_type(
            0,
            ObjectKind::String,
            ObjectKind::Int
        ))
    );
    assert_eq!(
        parse.call(&[Object::from("1"), Object::from("2")]),
        Err(CallError::wrong_num_arguments(1, 2))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn wrap_helpers_match_adapter_shapes() {
    assert_eq!(wrap_status(Ok::<(), String>(())), Object::TRUE);
    assert_eq!(wrap_status(Err("bad")), Object::error("bad"));
    assert_eq!(wrap_result(Ok::<i64, String>(5)), Object::Int(5));
    assert_eq!(wrap_result(Err::<i64, _>("bad")), Object::error("bad"));
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn sequence_results_are_fresh_arrays() {
    let names = func_a_rvs(|| vec!["a".to_string(), "b".to_string()]);

    let first = names.call(&[]).unwrap();
    let second = names.call(&[]).unwrap();
    assert_eq!(first, strings(&["a", "b"]));

    first.as_array().unwrap().push(Object::from("c"));
    assert_eq!(second, strings(&["a", "b"]));
}

#[test]
fn string_array_parameters_require_string_elements() {
    let join = func_avss_rs(|parts, sep| parts.join(&sep));

    assert_eq!(
        join.call(&[strings(&["x", "y", "z"]), Object::from("/")]),
        Ok(Object::from("x/y/z"))
    );
    assert_eq!(
        join.call(&[Object::Array(Array::default()), Object::from("/")]),
        Ok(Object::from(""))
    );
    assert!(join.call(&[Object::from("x"), Object::from("/")]).is_err());
}
