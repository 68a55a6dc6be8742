//! `serde` support for objects (feature `serde`).
//!
//! Objects serialize into the closest serde data model shape. Serialization
//! is one-way: builtins serialize as their registered name and cannot be
//! reconstructed. An array that contains itself fails to serialize.

use std::cell::RefCell;

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::array::Array;
use crate::map::ImmutableMap;
use crate::object::Object;

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Bytes(b) => serializer.serialize_bytes(b),
            Self::Array(a) => a.serialize(serializer),
            Self::ImmutableMap(m) => m.serialize(serializer),
            Self::Error(payload) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", &**payload)?;
                map.end()
            }
            Self::Builtin(f) => serializer.serialize_str(f.name()),
        }
    }
}

thread_local! {
    static SERIALIZING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let key = self.addr();
        if SERIALIZING.with_borrow(|serializing| serializing.contains(&key)) {
            return Err(S::Error::custom("cannot serialize a cyclic array"));
        }

        let items = self.to_vec();
        SERIALIZING.with_borrow_mut(|serializing| serializing.push(key));
        let result = serialize_items(&items, serializer);
        SERIALIZING.with_borrow_mut(|serializing| {
            serializing.pop();
        });
        result
    }
}

fn serialize_items<S: Serializer>(items: &[Object], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl Serialize for ImmutableMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
