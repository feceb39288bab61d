//! Ordered sequences over a shared backing buffer

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::{AccessError, Result};

/// An ordered, indexable collection whose buffer is shared across handles.
///
/// Cloning a `Sequence` is shallow: both handles see the same elements, and
/// a `set` or `push` through one is visible through the other. Every
/// positional access is bounds-checked.
pub struct Sequence<T> {
    /// Backing buffer
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Sequence<T> {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create a sequence of `len` default elements
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, T::default);
        Self::from_vec(items)
    }

    /// Take ownership of an existing buffer
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the sequence has no elements
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Borrow the whole buffer for reading
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read()
    }

    /// Overwrite the element at `index`, returning the previous one
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len`.
    pub fn set(&self, index: usize, value: T) -> Result<T> {
        self.update(index, |slot| std::mem::replace(slot, value))
    }

    /// Mutate the element at `index` in place
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len`.
    ///
    /// # Deadlocks
    ///
    /// The buffer stays write-locked while `f` runs. Calling back into this
    /// sequence or any alias of it from `f` (`len`, `get`, formatting a value
    /// that holds it) blocks forever.
    pub fn update<R>(&self, index: usize, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        let mut items = self.items.write();
        let len = items.len();
        items
            .get_mut(index)
            .map(f)
            .ok_or_else(|| AccessError::out_of_bounds(index, len))
    }

    /// Append an element
    pub fn push(&self, value: T) {
        self.items.write().push(value);
    }

    /// Remove and return the last element
    pub fn pop(&self) -> Option<T> {
        self.items.write().pop()
    }

    /// Whether two handles share the same buffer
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Number of live handles to the buffer
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.items)
    }

    /// Identity of the buffer, stable while any handle is alive
    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.items) as *const () as usize
    }
}

impl<T: Clone> Sequence<T> {
    /// Copy of the element at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<T> {
        let items = self.items.read();
        items
            .get(index)
            .cloned()
            .ok_or_else(|| AccessError::out_of_bounds(index, items.len()))
    }

    /// Copy of the whole buffer
    pub fn to_vec(&self) -> Vec<T> {
        self.items.read().clone()
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.read().iter()).finish()
    }
}
