//! Ordered, mutable sequence of objects.

use std::cell::RefCell;
use std::fmt;
use std::iter::FromIterator;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::object::Object;

// =============================================================================
// Cycle Tracking
// =============================================================================

// An array can contain itself, so the recursive traversals below keep the
// storage addresses they are currently inside. Entries are pushed on entry and
// popped on exit; no lock or borrow is held across the recursion.
thread_local! {
    static FORMATTING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
    static COPYING: RefCell<Vec<(usize, Array)>> = const { RefCell::new(Vec::new()) };
    static COMPARING: RefCell<Vec<(usize, usize)>> = const { RefCell::new(Vec::new()) };
}

/// Ordered, mutable sequence of objects.
///
/// Cloning an `Array` aliases the same storage, matching how the runtime
/// passes arrays around. Use [`Array::deep_copy`] (or [`Object::copy`]) for an
/// independent array. The storage is lock-protected so sharing is memory-safe,
/// but concurrent writers must still coordinate among themselves.
#[derive(Clone, Default)]
pub struct Array(Arc<RwLock<Vec<Object>>>);

impl Array {
    /// Creates an array holding `items`.
    #[must_use]
    pub fn new(items: Vec<Object>) -> Self {
        Self(Arc::new(RwLock::new(items)))
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Object>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Object>> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Gets a copy of the element handle at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Object> {
        self.read().get(index).cloned()
    }

    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index` is past the end.
    pub fn set(&self, index: usize, value: Object) -> Result<()> {
        let mut items = self.write();
        let length = items.len();
        let slot = items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, length))?;
        *slot = value;
        Ok(())
    }

    /// Appends an element.
    pub fn push(&self, value: Object) {
        self.write().push(value);
    }

    /// Returns the elements as a vector of handles.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Object> {
        self.read().clone()
    }

    /// Runs `f` with a view of the elements.
    pub fn with_items<R>(&self, f: impl FnOnce(&[Object]) -> R) -> R {
        f(&self.read())
    }

    /// Returns true if both arrays share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).addr()
    }

    /// Returns an independent array whose elements are deep copies.
    ///
    /// Self-references are preserved: an array that contains itself is copied
    /// into an array that contains the copy.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        let key = self.addr();
        let in_progress = COPYING.with_borrow(|copying| {
            copying
                .iter()
                .find(|(addr, _)| *addr == key)
                .map(|(_, copy)| copy.clone())
        });
        if let Some(copy) = in_progress {
            return copy;
        }

        let copy = Self::default();
        COPYING.with_borrow_mut(|copying| copying.push((key, copy.clone())));
        let items: Vec<Object> = self.to_vec().iter().map(Object::copy).collect();
        COPYING.with_borrow_mut(|copying| {
            copying.pop();
        });
        *copy.write() = items;
        copy
    }

    /// Element-wise, order-sensitive equality.
    ///
    /// A pair of arrays already being compared further up the traversal is
    /// treated as equal, so cyclic arrays with the same shape are equal.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let pair = (self.addr(), other.addr());
        if COMPARING.with_borrow(|comparing| comparing.contains(&pair)) {
            return true;
        }

        // Snapshot both sides so no two guards are held at once.
        let lhs = self.to_vec();
        let rhs = other.to_vec();
        if lhs.len() != rhs.len() {
            return false;
        }
        COMPARING.with_borrow_mut(|comparing| comparing.push(pair));
        let equal = lhs.iter().zip(&rhs).all(|(a, b)| a.equals(b));
        COMPARING.with_borrow_mut(|comparing| {
            comparing.pop();
        });
        equal
    }

    /// Formats the elements with `item`, writing `[...]` for an array that is
    /// already being formatted further up.
    fn fmt_items(
        &self,
        f: &mut fmt::Formatter<'_>,
        item: impl Fn(&Object, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        let key = self.addr();
        if FORMATTING.with_borrow(|formatting| formatting.contains(&key)) {
            return write!(f, "[...]");
        }

        let items = self.to_vec();
        FORMATTING.with_borrow_mut(|formatting| formatting.push(key));
        let result = write_list(f, &items, item);
        FORMATTING.with_borrow_mut(|formatting| {
            formatting.pop();
        });
        result
    }
}

fn write_list(
    f: &mut fmt::Formatter<'_>,
    items: &[Object],
    item: impl Fn(&Object, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, obj) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        item(obj, f)?;
    }
    write!(f, "]")
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_items(f, |obj, f| write!(f, "{obj:?}"))
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_items(f, |obj, f| write!(f, "{obj}"))
    }
}

impl FromIterator<Object> for Array {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Object>> for Array {
    fn from(items: Vec<Object>) -> Self {
        Self::new(items)
    }
}
