//! Host function adapters and standard modules for Tessera.
//!
//! This crate provides:
//! - [`adapters`] - Wrap natively-typed Rust functions as [`Callable`]s
//! - [`ModuleBuilder`] / [`Stdlib`] - Register builtins as module maps
//! - [`trace`] - Record builtin calls into a bounded ring buffer
//! - [`StdlibConfig`] - Module selection and tracing configuration
//!
//! # Example
//!
//! ```
//! use tessera_foundation::{Callable, Object};
//! use tessera_stdlib::adapters::func_ass_rs;
//!
//! let concat = func_ass_rs(|a, b| a + &b);
//! let result = concat.call(&[Object::from("foo"), Object::from("bar")]);
//! assert_eq!(result, Ok(Object::from("foobar")));
//! ```
//!
//! [`Callable`]: tessera_foundation::Callable

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adapters;
pub mod config;
pub mod module;
pub mod modules;
pub mod trace;

pub use config::StdlibConfig;
pub use module::{ModuleBuilder, Stdlib};
pub use modules::text::TextError;
pub use trace::{SharedTracer, Traced, Tracer, TracerConfig};
