//! Object model, callable contract, and errors for Tessera.
//!
//! This crate provides:
//! - [`Object`] - The runtime value type and its protocol
//! - [`Array`] and [`ImmutableMap`] - Composite variants
//! - [`Callable`], [`NativeFn`], [`Builtin`] - The uniform calling contract
//! - [`FromObject`] / [`IntoObject`] - Native value conversions
//! - [`Error`] and [`CallError`] - Object-protocol and calling-convention failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod array;
pub mod callable;
pub mod convert;
pub mod error;
pub mod kind;
pub mod map;
pub mod object;
pub mod ops;
#[cfg(feature = "serde")]
mod serialize;

pub use array::Array;
pub use callable::{Builtin, Callable, NativeFn};
pub use convert::{FromObject, IntoObject};
pub use error::{CallError, Error, ErrorContext, ErrorKind, Result};
pub use kind::{Arity, ObjectKind};
pub use map::ImmutableMap;
pub use object::Object;
pub use ops::BinaryOperator;
