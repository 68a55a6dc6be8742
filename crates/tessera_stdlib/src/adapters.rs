//! Calling-convention adapters for natively-typed host functions.
//!
//! Each constructor wraps a host function of one fixed signature as a
//! [`Callable`]. Every adapter:
//!
//! 1. rejects a call whose argument count differs from the parameter count
//!    with [`CallError::WrongNumArguments`];
//! 2. extracts each argument with [`FromObject`], rejecting a kind mismatch
//!    with [`CallError::InvalidArgumentType`];
//! 3. invokes the host function exactly once;
//! 4. wraps the result according to its return shape.
//!
//! Steps 1 and 2 complete before the host function runs, so a rejected call
//! has no side effects.
//!
//! # Return shapes
//!
//! | host returns | object |
//! |--------------|--------|
//! | nothing | `Undefined` |
//! | scalar or sequence | matching variant (sequences become arrays) |
//! | `Result<(), E>` | `Ok` → `true`, `Err(e)` → `Error(String(e))` |
//! | `Result<T, E>` | `Ok(v)` → `v` wrapped, `Err(e)` → `Error(String(e))` |
//!
//! # Naming
//!
//! Constructors are named `func_a<params>_r<returns>` using one code per
//! type: `i` = `i64`, `f` = `f64`, `s` = `String`, `b` = `bool`,
//! `y` = bytes (`Vec<u8>`), `vs` = `Vec<String>`, `vi` = `Vec<i64>`, and a
//! trailing `e` for an error result. `func_ass_rb` therefore adapts
//! `fn(String, String) -> bool`.
//!
//! The catalogue is closed: a new signature needs a new constructor.

use std::fmt::Display;

use tessera_foundation::{Arity, CallError, Callable, FromObject, IntoObject, NativeFn, Object};

/// Wraps a host error as an error object carrying its message.
pub fn error_object(err: impl Display) -> Object {
    Object::error(err.to_string())
}

/// Wraps an error-only result: `Ok` becomes the `true` sentinel.
pub fn wrap_status<E: Display>(result: Result<(), E>) -> Object {
    match result {
        Ok(()) => Object::TRUE,
        Err(err) => error_object(err),
    }
}

/// Wraps a value-plus-error result. On `Err` the value is discarded.
pub fn wrap_result<T: IntoObject, E: Display>(result: Result<T, E>) -> Object {
    result.map_or_else(error_object, IntoObject::into_object)
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

/// Binds each parameter name to its extracted native value, in order.
macro_rules! extract {
    ($args:ident, $pos:expr;) => {};
    ($args:ident, $pos:expr; $arg:ident: $ty:ty $(, $rest:ident: $rest_ty:ty)*) => {
        let $arg = <$ty as FromObject>::from_arg($pos, &$args[$pos])?;
        extract!($args, $pos + 1; $($rest: $rest_ty),*);
    };
}

/// Shared adapter body: arity check, extraction, then `$wrap` on the call.
macro_rules! adapt {
    ($f:ident, $wrap:expr; $($arg:ident: $ty:ty),*) => {{
        const ARITY: usize = count!($($arg)*);
        NativeFn::new(Arity::Exact(ARITY), move |args: &[Object]| {
            if args.len() != ARITY {
                return Err(CallError::wrong_num_arguments(ARITY, args.len()));
            }
            extract!(args, 0; $($arg: $ty),*);
            Ok($wrap($f($($arg),*)))
        })
    }};
}

macro_rules! unit_adapters {
    ($( $(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*); )*) => {$(
        $(#[$meta])*
        pub fn $name<F>(f: F) -> impl Callable
        where
            F: Fn($($ty),*) + Send + Sync + 'static,
        {
            adapt!(f, |()| Object::Undefined; $($arg: $ty),*)
        }
    )*};
}

macro_rules! value_adapters {
    ($( $(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty; )*) => {$(
        $(#[$meta])*
        pub fn $name<F>(f: F) -> impl Callable
        where
            F: Fn($($ty),*) -> $ret + Send + Sync + 'static,
        {
            adapt!(f, IntoObject::into_object; $($arg: $ty),*)
        }
    )*};
}

macro_rules! status_adapters {
    ($( $(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*); )*) => {$(
        $(#[$meta])*
        pub fn $name<F, E>(f: F) -> impl Callable
        where
            F: Fn($($ty),*) -> Result<(), E> + Send + Sync + 'static,
            E: Display + 'static,
        {
            adapt!(f, wrap_status; $($arg: $ty),*)
        }
    )*};
}

macro_rules! fallible_adapters {
    ($( $(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty; )*) => {$(
        $(#[$meta])*
        pub fn $name<F, E>(f: F) -> impl Callable
        where
            F: Fn($($ty),*) -> Result<$ret, E> + Send + Sync + 'static,
            E: Display + 'static,
        {
            adapt!(f, wrap_result; $($arg: $ty),*)
        }
    )*};
}

unit_adapters! {
    /// Adapts `fn()`. Returns `Undefined`.
    func_a_r();
    /// Adapts `fn(i64)`. Returns `Undefined`.
    func_ai_r(a: i64);
}

value_adapters! {
    /// Adapts `fn() -> i64`.
    func_a_ri() -> i64;
    /// Adapts `fn() -> bool`.
    func_a_rb() -> bool;
    /// Adapts `fn() -> f64`.
    func_a_rf() -> f64;
    /// Adapts `fn() -> String`.
    func_a_rs() -> String;
    /// Adapts `fn() -> Vec<String>`; the result is an array of strings.
    func_a_rvs() -> Vec<String>;
    /// Adapts `fn(i64) -> i64`.
    func_ai_ri(a: i64) -> i64;
    /// Adapts `fn(i64) -> f64`.
    func_ai_rf(a: i64) -> f64;
    /// Adapts `fn(i64) -> String`.
    func_ai_rs(a: i64) -> String;
    /// Adapts `fn(f64) -> f64`.
    func_af_rf(a: f64) -> f64;
    /// Adapts `fn(f64) -> i64`.
    func_af_ri(a: f64) -> i64;
    /// Adapts `fn(f64) -> bool`.
    func_af_rb(a: f64) -> bool;
    /// Adapts `fn(f64, f64) -> f64`.
    func_aff_rf(a: f64, b: f64) -> f64;
    /// Adapts `fn(i64, f64) -> f64`.
    func_aif_rf(a: i64, b: f64) -> f64;
    /// Adapts `fn(f64, i64) -> f64`.
    func_afi_rf(a: f64, b: i64) -> f64;
    /// Adapts `fn(f64, i64) -> bool`.
    func_afi_rb(a: f64, b: i64) -> bool;
    /// Adapts `fn(String) -> String`.
    func_as_rs(a: String) -> String;
    /// Adapts `fn(String) -> bool`.
    func_as_rb(a: String) -> bool;
    /// Adapts `fn(String) -> Vec<String>`.
    func_as_rvs(a: String) -> Vec<String>;
    /// Adapts `fn(String, i64) -> String`.
    func_asi_rs(a: String, b: i64) -> String;
    /// Adapts `fn(String, String) -> String`.
    func_ass_rs(a: String, b: String) -> String;
    /// Adapts `fn(String, String) -> i64`.
    func_ass_ri(a: String, b: String) -> i64;
    /// Adapts `fn(String, String) -> bool`.
    func_ass_rb(a: String, b: String) -> bool;
    /// Adapts `fn(String, String) -> Vec<String>`.
    func_ass_rvs(a: String, b: String) -> Vec<String>;
    /// Adapts `fn(String, String, i64) -> Vec<String>`.
    func_assi_rvs(a: String, b: String, c: i64) -> Vec<String>;
    /// Adapts `fn(Vec<String>, String) -> String`.
    ///
    /// The first argument must be an array whose elements are all strings.
    func_avss_rs(a: Vec<String>, b: String) -> String;
    /// Adapts `fn(Vec<u8>) -> String`.
    func_ay_rs(a: Vec<u8>) -> String;
}

status_adapters! {
    /// Adapts `fn() -> Result<(), E>`.
    func_a_re();
    /// Adapts `fn(i64, i64) -> Result<(), E>`.
    func_aii_re(a: i64, b: i64);
    /// Adapts `fn(String) -> Result<(), E>`.
    func_as_re(a: String);
    /// Adapts `fn(String, i64) -> Result<(), E>`.
    func_asi_re(a: String, b: i64);
    /// Adapts `fn(String, i64, i64) -> Result<(), E>`.
    func_asii_re(a: String, b: i64, c: i64);
    /// Adapts `fn(String, String) -> Result<(), E>`.
    func_ass_re(a: String, b: String);
}

fallible_adapters! {
    /// Adapts `fn() -> Result<String, E>`.
    func_a_rse() -> String;
    /// Adapts `fn() -> Result<Vec<u8>, E>`.
    func_a_rye() -> Vec<u8>;
    /// Adapts `fn() -> Result<Vec<i64>, E>`.
    func_a_rvie() -> Vec<i64>;
    /// Adapts `fn(i64) -> Result<Vec<String>, E>`.
    func_ai_rvse(a: i64) -> Vec<String>;
    /// Adapts `fn(String) -> Result<String, E>`.
    func_as_rse(a: String) -> String;
    /// Adapts `fn(String) -> Result<i64, E>`.
    func_as_rie(a: String) -> i64;
    /// Adapts `fn(String) -> Result<bool, E>`.
    func_as_rbe(a: String) -> bool;
    /// Adapts `fn(Vec<u8>) -> Result<i64, E>`.
    func_ay_rie(a: Vec<u8>) -> i64;
}
