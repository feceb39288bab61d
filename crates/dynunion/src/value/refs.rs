//! Shared references to heap-resident values

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared ownership of a heap-resident value.
///
/// Cloning a `Shared` aliases the same referent: a write through any handle
/// is visible through all of them. The referent lives as long as the last
/// handle.
pub struct Shared<T> {
    /// The referent (interior mutability via Arc)
    cell: Arc<RwLock<T>>,
}

impl<T> Shared<T> {
    /// Allocate a new referent
    pub fn new(value: T) -> Self {
        Self {
            cell: Arc::new(RwLock::new(value)),
        }
    }

    /// Borrow the referent for reading
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.cell.read()
    }

    /// Borrow the referent for writing
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.cell.write()
    }

    /// Replace the referent, returning the previous one
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.write(), value)
    }

    /// Mutate the referent in place
    ///
    /// # Deadlocks
    ///
    /// The referent stays write-locked while `f` runs. Reading this handle or
    /// any alias of it from `f` blocks forever.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.write();
        f(&mut *guard)
    }

    /// Whether two handles alias the same referent
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }

    /// Number of live handles to the referent
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.cell)
    }

    /// Identity of the referent, stable while any handle is alive
    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.cell) as *const () as usize
    }
}

impl<T: Clone> Shared<T> {
    /// Copy of the current referent
    pub fn get(&self) -> T {
        self.read().clone()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{:?}", *self.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_aliases_referent() {
        let a = Shared::new(1.0);
        let b = a.clone();
        b.replace(2.0);
        assert_eq!(a.get(), 2.0);
        assert!(a.ptr_eq(&b));
        assert_eq!(a.address(), b.address());
    }

    #[test]
    fn test_holders_follow_drops() {
        let a = Shared::new(String::from("x"));
        assert_eq!(a.holders(), 1);
        let b = a.clone();
        assert_eq!(a.holders(), 2);
        drop(b);
        assert_eq!(a.holders(), 1);
    }

    #[test]
    fn test_update_in_place() {
        let a = Shared::new(String::from("ab"));
        let len = a.update(|s| {
            s.push('c');
            s.len()
        });
        assert_eq!(len, 3);
        assert_eq!(&*a.read(), "abc");
    }

    #[test]
    fn test_update_holds_referent_lock() {
        let a = Shared::new(0.0);
        let b = a.clone();
        assert!(a.update(|_| b.cell.try_read().is_none()));
        assert!(b.cell.try_read().is_some());
    }

    #[test]
    fn test_distinct_referents() {
        let a = Shared::new(1.0);
        let b = Shared::new(1.0);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a.address(), b.address());
        assert_eq!(format!("{:?}", a), "&1.0");
    }
}
