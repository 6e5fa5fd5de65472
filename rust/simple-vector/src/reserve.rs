//! Capacity reservation hint.

/// A request for capacity that creates no elements.
///
/// Passing a `ReserveProxy` where a vector is built (`SimpleVector::from(reserve(n))`)
/// makes it explicit at the call site that `n` slots are reserved rather than
/// `n` default elements created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    #[inline]
    pub const fn new(capacity: usize) -> ReserveProxy {
        ReserveProxy { capacity }
    }

    /// Returns the number of slots to reserve.
    #[inline]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

impl From<ReserveProxy> for usize {
    fn from(hint: ReserveProxy) -> usize {
        hint.capacity
    }
}

/// Builds a reservation hint for `capacity` slots.
///
/// ```
/// use simple_vector::{SimpleVector, reserve};
///
/// let v: SimpleVector<i32> = SimpleVector::from(reserve(5));
/// assert_eq!(v.capacity(), 5);
/// assert!(v.is_empty());
/// ```
#[inline]
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
