//! Object kinds and callable arities.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The variant of an [`Object`](crate::Object), without its payload.
///
/// Used in diagnostics (argument type mismatches, invalid operators) and by
/// adapters to describe what a parameter expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectKind {
    /// The undefined (unit) value.
    Undefined,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// UTF-8 string.
    String,
    /// Raw byte sequence.
    Bytes,
    /// Ordered, mutable sequence.
    Array,
    /// String-keyed map fixed at construction.
    ImmutableMap,
    /// First-class error value.
    Error,
    /// Native function exposed to scripts.
    Builtin,
}

impl ObjectKind {
    /// Returns the stable type name used by the runtime.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Array => "array",
            Self::ImmutableMap => "immutable-map",
            Self::Error => "error",
            Self::Builtin => "builtin-function",
        }
    }

    /// Returns true for kinds whose payload contains other objects.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Array | Self::ImmutableMap | Self::Error)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of arguments a callable accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arity {
    /// Exactly N arguments.
    Exact(usize),
    /// At least N arguments, then any number more.
    Variadic(usize),
}

impl Arity {
    /// Returns true if `count` arguments satisfy this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::Variadic(min) => count >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Variadic(min) => write!(f, "{min}+"),
        }
    }
}
