//! The single lock behind [`SharedTable`](crate::SharedTable).
//!
//! Access goes through closures so that a guard never escapes, and both
//! backends expose the same three calls.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

/// Exclusive access to a value for the duration of a closure.
pub struct Exclusive<T> {
    inner: Inner<T>,
}

impl<T> Exclusive<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: Inner::new(value),
        }
    }

    /// Runs `f` while holding the lock.
    ///
    /// A panic inside an earlier closure does not lock the value away: a
    /// poisoned `std` mutex is recovered as-is.
    #[cfg(feature = "std")]
    pub fn with<U>(&self, f: impl FnOnce(&mut T) -> U) -> U {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut *guard)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn with<U>(&self, f: impl FnOnce(&mut T) -> U) -> U {
        f(&mut *self.inner.lock())
    }

    #[cfg(feature = "std")]
    pub fn into_inner(self) -> T {
        self.inner
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}
