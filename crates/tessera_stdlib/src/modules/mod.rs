//! Built-in modules.
//!
//! Each module is a registration function adding its members to a
//! [`ModuleBuilder`].

pub mod math;
pub mod text;

use crate::module::ModuleBuilder;

/// Registration function for one module.
pub type Register = fn(ModuleBuilder) -> ModuleBuilder;

/// Every built-in module, by name.
pub const BUILTIN_MODULES: &[(&str, Register)] =
    &[("math", math::register), ("text", text::register)];
