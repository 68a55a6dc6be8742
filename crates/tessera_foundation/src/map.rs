//! String-keyed map fixed at construction.
//!
//! A thin wrapper around `im::OrdMap`. Keys are kept sorted, so iteration and
//! display order are deterministic across runs and platforms.

use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

use crate::object::Object;

/// Immutable map from string keys to objects.
///
/// Populated only at construction; there are no mutation operations. Cloning
/// is O(1) and shares structure. Safe to share read-only across threads.
#[derive(Clone, Default)]
pub struct ImmutableMap(im::OrdMap<Arc<str>, Object>);

impl ImmutableMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a key. An absent key is `None`, never an error.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.0.get(key)
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns an iterator over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Object)> {
        self.0.iter().map(|(k, v)| (&**k, v))
    }

    /// Returns an iterator over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| &**k)
    }

    /// Returns an iterator over values in key order.
    pub fn values(&self) -> impl Iterator<Item = &Object> {
        self.0.values()
    }

    /// Returns a new map whose values are deep copies of this map's values.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.0
            .iter()
            .map(|(k, v)| (Arc::clone(k), v.copy()))
            .collect()
    }

    /// Structural equality.
    ///
    /// False if sizes differ or if any key's value is not equal to the value
    /// under the same key in `other`. A missing key counts as not equal.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|theirs| v.equals(theirs)))
    }
}

impl fmt::Debug for ImmutableMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for ImmutableMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        write!(f, "}}")
    }
}

/// Builds a map from entries. When a key repeats, the last value wins.
impl<K: Into<Arc<str>>> FromIterator<(K, Object)> for ImmutableMap {
    fn from_iter<I: IntoIterator<Item = (K, Object)>>(iter: I) -> Self {
        let mut map = im::OrdMap::new();
        for (k, v) in iter {
            map.insert(k.into(), v);
        }
        Self(map)
    }
}
