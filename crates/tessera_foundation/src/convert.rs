//! Conversions between native Rust values and objects.
//!
//! [`FromObject`] unwraps an argument into the native type a parameter
//! declares; [`IntoObject`] wraps a native result. Neither performs implicit
//! numeric coercion: an `Int` never satisfies an `f64` parameter.

use std::sync::Arc;

use crate::array::Array;
use crate::callable::Builtin;
use crate::error::CallError;
use crate::kind::ObjectKind;
use crate::map::ImmutableMap;
use crate::object::Object;

/// Native types that can be extracted from an argument object.
pub trait FromObject: Sized {
    /// The object kind this type is extracted from.
    const KIND: ObjectKind;

    /// Extracts the native value, or `None` on a kind mismatch.
    fn from_object(obj: &Object) -> Option<Self>;

    /// Extracts the argument at `position`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgumentType` naming `position` when `obj` is the
    /// wrong kind.
    fn from_arg(position: usize, obj: &Object) -> Result<Self, CallError> {
        Self::from_object(obj)
            .ok_or_else(|| CallError::invalid_argument_type(position, Self::KIND, obj.kind()))
    }
}

impl FromObject for i64 {
    const KIND: ObjectKind = ObjectKind::Int;

    fn from_object(obj: &Object) -> Option<Self> {
        obj.as_int()
    }
}

impl FromObject for f64 {
    const KIND: ObjectKind = ObjectKind::Float;

    fn from_object(obj: &Object) -> Option<Self> {
        obj.as_float()
    }
}

impl FromObject for bool {
    const KIND: ObjectKind = ObjectKind::Bool;

    fn from_object(obj: &Object) -> Option<Self> {
        obj.as_bool()
    }
}

impl FromObject for String {
    const KIND: ObjectKind = ObjectKind::String;

    fn from_object(obj: &Object) -> Option<Self> {
        obj.as_str().map(str::to_owned)
    }
}

impl FromObject for Vec<u8> {
    const KIND: ObjectKind = ObjectKind::Bytes;

    fn from_object(obj: &Object) -> Option<Self> {
        obj.as_bytes().map(<[u8]>::to_vec)
    }
}

/// An array whose elements are all strings.
impl FromObject for Vec<String> {
    const KIND: ObjectKind = ObjectKind::Array;

    fn from_object(obj: &Object) -> Option<Self> {
        obj.as_array()?
            .with_items(|items| items.iter().map(String::from_object).collect())
    }
}

/// Native values that can be returned to the runtime.
pub trait IntoObject {
    /// Wraps the value.
    fn into_object(self) -> Object;
}

impl IntoObject for () {
    fn into_object(self) -> Object {
        Object::Undefined
    }
}

impl IntoObject for bool {
    fn into_object(self) -> Object {
        Object::Bool(self)
    }
}

impl IntoObject for i64 {
    fn into_object(self) -> Object {
        Object::Int(self)
    }
}

impl IntoObject for f64 {
    fn into_object(self) -> Object {
        Object::Float(self)
    }
}

impl IntoObject for String {
    fn into_object(self) -> Object {
        Object::from(self)
    }
}

impl IntoObject for Vec<u8> {
    fn into_object(self) -> Object {
        Object::from(self)
    }
}

impl IntoObject for Vec<i64> {
    fn into_object(self) -> Object {
        Object::Array(self.into_iter().map(Object::Int).collect())
    }
}

impl IntoObject for Vec<String> {
    fn into_object(self) -> Object {
        Object::Array(self.into_iter().map(Object::from).collect())
    }
}

impl IntoObject for Vec<Object> {
    fn into_object(self) -> Object {
        Object::Array(Array::new(self))
    }
}

impl IntoObject for ImmutableMap {
    fn into_object(self) -> Object {
        Object::ImmutableMap(self)
    }
}

impl IntoObject for Object {
    fn into_object(self) -> Object {
        self
    }
}

// Convenience From implementations

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Object {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Object {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Object {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Object {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Vec<u8>> for Object {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b.into())
    }
}

impl From<&[u8]> for Object {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.into())
    }
}

impl From<Array> for Object {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<ImmutableMap> for Object {
    fn from(m: ImmutableMap) -> Self {
        Self::ImmutableMap(m)
    }
}

impl From<Builtin> for Object {
    fn from(f: Builtin) -> Self {
        Self::Builtin(f)
    }
}
