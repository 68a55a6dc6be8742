//! The object protocol.
//!
//! Every runtime value is an [`Object`]. The protocol is uniform across
//! variants:
//!
//! | operation | behaviour |
//! |-----------|-----------|
//! | [`Object::type_name`] | stable variant name |
//! | `Display` | deterministic text form |
//! | [`Object::binary_op`] | partial; unsupported pairings are invalid operators |
//! | [`Object::copy`] | deep, independent copy |
//! | [`Object::is_falsy`] | truthiness for conditionals |
//! | [`Object::equals`] | total structural equality |

use std::fmt;
use std::sync::Arc;

use crate::array::Array;
use crate::callable::Builtin;
use crate::error::Result;
use crate::kind::ObjectKind;
use crate::map::ImmutableMap;
use crate::ops::{self, BinaryOperator};

/// A runtime value.
///
/// Cloning is cheap. Scalars and strings are immutable; arrays are shared by
/// reference, so a clone observes later mutation. Use [`Object::copy`] for an
/// independent value.
#[derive(Clone)]
pub enum Object {
    /// The undefined (unit) value.
    Undefined,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(Arc<str>),
    /// Raw byte sequence.
    Bytes(Arc<[u8]>),
    /// Ordered, mutable sequence.
    Array(Array),
    /// String-keyed map fixed at construction.
    ImmutableMap(ImmutableMap),
    /// First-class error value wrapping a payload (conventionally a string).
    Error(Arc<Object>),
    /// Native function exposed to scripts.
    Builtin(Builtin),
}

impl Object {
    /// The `true` value, returned by adapters whose native function succeeded
    /// with nothing to report.
    pub const TRUE: Self = Self::Bool(true);

    /// The `false` value.
    pub const FALSE: Self = Self::Bool(false);

    /// Creates an error value wrapping a string message.
    #[must_use]
    pub fn error(message: impl Into<Arc<str>>) -> Self {
        Self::Error(Arc::new(Self::String(message.into())))
    }

    /// Returns the kind of this object.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Undefined => ObjectKind::Undefined,
            Self::Bool(_) => ObjectKind::Bool,
            Self::Int(_) => ObjectKind::Int,
            Self::Float(_) => ObjectKind::Float,
            Self::String(_) => ObjectKind::String,
            Self::Bytes(_) => ObjectKind::Bytes,
            Self::Array(_) => ObjectKind::Array,
            Self::ImmutableMap(_) => ObjectKind::ImmutableMap,
            Self::Error(_) => ObjectKind::Error,
            Self::Builtin(_) => ObjectKind::Builtin,
        }
    }

    /// Returns the stable name of this object's variant.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Applies a binary operator with `self` on the left.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperator` when the variant pairing does not support
    /// `op`, `DivisionByZero` for integer division or remainder by zero, and
    /// `InvalidShift` for a negative shift count.
    pub fn binary_op(&self, op: BinaryOperator, rhs: &Object) -> Result<Object> {
        ops::apply(self, op, rhs)
    }

    /// Returns a deep copy sharing no mutable storage with `self`.
    #[must_use]
    pub fn copy(&self) -> Object {
        match self {
            Self::Undefined => Self::Undefined,
            Self::Bool(b) => Self::Bool(*b),
            Self::Int(n) => Self::Int(*n),
            Self::Float(n) => Self::Float(*n),
            Self::String(s) => Self::String(Arc::from(&**s)),
            Self::Bytes(b) => Self::Bytes(Arc::from(&**b)),
            Self::Array(a) => Self::Array(a.deep_copy()),
            Self::ImmutableMap(m) => Self::ImmutableMap(m.deep_copy()),
            Self::Error(payload) => Self::Error(Arc::new(payload.copy())),
            // Callables are immutable after registration.
            Self::Builtin(f) => Self::Builtin(f.clone()),
        }
    }

    /// Returns true if this object counts as false in a condition.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Undefined | Self::Error(_) => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Float(n) => n.is_nan(),
            Self::String(s) => s.is_empty(),
            Self::Bytes(b) => b.is_empty(),
            Self::Array(a) => a.is_empty(),
            Self::ImmutableMap(m) => m.is_empty(),
            Self::Builtin(_) => false,
        }
    }

    /// Structural equality. Never fails; different variants are unequal.
    ///
    /// Floats compare with IEEE semantics, so NaN is not equal to itself.
    #[must_use]
    pub fn equals(&self, other: &Object) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            #[allow(clippy::float_cmp)]
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a.equals(b),
            (Self::ImmutableMap(a), Self::ImmutableMap(b)) => a.equals(b),
            (Self::Error(a), Self::Error(b)) => a.equals(b),
            (Self::Builtin(a), Self::Builtin(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Returns true if this is the undefined value.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if this is an error value.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Attempts to extract an array.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract an immutable map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&ImmutableMap> {
        match self {
            Self::ImmutableMap(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a builtin function.
    #[must_use]
    pub const fn as_builtin(&self) -> Option<&Builtin> {
        match self {
            Self::Builtin(f) => Some(f),
            _ => None,
        }
    }

    /// Returns the payload of an error value.
    #[must_use]
    pub fn error_payload(&self) -> Option<&Object> {
        match self {
            Self::Error(payload) => Some(payload),
            _ => None,
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Int(n) => write!(f, "Int({n})"),
            Self::Float(n) => write!(f, "Float({n:?})"),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::Bytes(b) => write!(f, "Bytes({b:?})"),
            Self::Array(a) => write!(f, "Array({a:?})"),
            Self::ImmutableMap(m) => write!(f, "ImmutableMap({m:?})"),
            Self::Error(payload) => write!(f, "Error({payload:?})"),
            Self::Builtin(func) => write!(f, "{func:?}"),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "<undefined>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Self::Array(a) => write!(f, "{a}"),
            Self::ImmutableMap(m) => write!(f, "{m}"),
            Self::Error(payload) => write!(f, "error: {payload}"),
            Self::Builtin(func) => write!(f, "<builtin-function:{}>", func.name()),
        }
    }
}
