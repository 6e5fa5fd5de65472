//! `SimpleVector`: a growable array built directly on [`ArrayPtr`].
//!
//! The vector keeps its live elements in the slots `[0, len)` of a single
//! `ArrayPtr` block whose length is the capacity. Slots in `[len, capacity)` are
//! allocated but hold no value. Growth doubles the capacity, which keeps the
//! amortized cost of `push_back` constant.
//!
//! # Positions
//!
//! Positions passed to [`SimpleVector::insert`] and [`SimpleVector::erase`] are
//! element offsets. After an operation that reallocates (any growth beyond the
//! current capacity), every previously obtained reference and raw pointer into
//! the vector is invalid. Without reallocation, `insert` and `erase` only
//! invalidate positions at or after the affected offset.

use std::alloc::handle_alloc_error;
use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;

use simple_vector_array_ptr::ArrayPtr;
use simple_vector_common::{
    Result,
    error::{Error, ErrorKind},
    result::verify_index,
};

use crate::into_iter::IntoIter;
use crate::reserve::ReserveProxy;

/// Capacity multiplier applied whenever the vector has to grow.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity chosen when an empty, unallocated vector has to grow.
pub const MIN_NON_ZERO_CAPACITY: usize = 1;

/// A contiguous growable array with explicit size and capacity.
///
/// `SimpleVector` owns its storage exclusively. Cloning produces a deep copy in
/// freshly allocated storage of the same capacity, [`SimpleVector::take`] moves
/// the contents out and leaves an empty vector behind, and
/// [`SimpleVector::swap`] exchanges two vectors in constant time.
///
/// Element access comes in two flavors: indexing (`v[i]`) treats an index past
/// the end as a caller bug and panics, while [`SimpleVector::at`] reports it as
/// an `OutOfRange` error.
pub struct SimpleVector<T> {
    /// Number of live elements at the front of `items`.
    size: usize,
    /// Slot storage; its length is the capacity of the vector.
    items: ArrayPtr<T>,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector without allocating.
    #[inline]
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            size: 0,
            items: ArrayPtr::empty(),
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics (or aborts through the allocation error handler) if the storage
    /// cannot be allocated.
    pub fn with_capacity(capacity: usize) -> SimpleVector<T> {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| allocation_failure(e))
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the storage cannot be obtained.
    pub fn try_with_capacity(capacity: usize) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            size: 0,
            items: ArrayPtr::allocate(capacity)?,
        })
    }

    /// Creates a vector of `size` default-valued elements.
    ///
    /// Both the length and the capacity of the result are `size`.
    pub fn with_size(size: usize) -> SimpleVector<T>
    where
        T: Default,
    {
        let items = ArrayPtr::new(size).unwrap_or_else(|e| allocation_failure(e));
        SimpleVector { size, items }
    }

    /// Creates a vector of `size` clones of `value`.
    ///
    /// Both the length and the capacity of the result are `size`.
    pub fn from_value(size: usize, value: T) -> SimpleVector<T>
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(size);
        if size > 0 {
            for _ in 1..size {
                v.push_within_capacity(value.clone());
            }
            v.push_within_capacity(value);
        }
        v
    }

    /// Creates a vector holding clones of the elements of `items`, in order.
    ///
    /// Both the length and the capacity of the result are `items.len()`.
    pub fn from_slice(items: &[T]) -> SimpleVector<T>
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(items.len());
        for item in items {
            v.push_within_capacity(item.clone());
        }
        v
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of elements the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns a slice over the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.items.as_ptr(), self.size) }
    }

    /// Returns a mutable slice over the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.items.as_mut_ptr(), self.size) }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.size)?;
        Ok(unsafe { self.items.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.size)?;
        Ok(unsafe { self.items.get_unchecked_mut(index) })
    }

    /// Removes all elements. The capacity and the allocation are kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shortens the vector to `new_len` elements, dropping the rest.
    ///
    /// Has no effect if `new_len >= len()`. The capacity is never changed.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.size {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(
            unsafe { self.items.as_mut_ptr().add(new_len) },
            self.size - new_len,
        );
        // Shrink first: a panicking destructor must not cause a double drop.
        self.size = new_len;
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Changes the length of the vector to `new_size`.
    ///
    /// * `new_size <= len()`: the vector is truncated, storage is untouched.
    /// * `len() < new_size <= capacity()`: the new slots are filled with
    ///   `T::default()`.
    /// * `new_size > capacity()`: the storage is reallocated to
    ///   `max(new_size, 2 * capacity())` first, then the new slots are filled.
    pub fn resize(&mut self, new_size: usize)
    where
        T: Default,
    {
        if new_size <= self.size {
            self.truncate(new_size);
            return;
        }
        if new_size > self.capacity() {
            let new_capacity = new_size.max(self.capacity().saturating_mul(GROWTH_FACTOR));
            self.reallocate(new_capacity);
        }
        while self.size < new_size {
            self.push_within_capacity(T::default());
        }
    }

    /// Grows the capacity to exactly `new_capacity`, keeping all elements.
    ///
    /// Does nothing if `new_capacity <= capacity()`; the storage never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Fallible version of [`SimpleVector::reserve`].
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the new storage cannot be obtained; the
    /// vector is left unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            self.try_reallocate(new_capacity)?;
        }
        Ok(())
    }

    /// Appends `value` to the end of the vector.
    ///
    /// If the vector is full, the capacity is doubled first (or set to one
    /// when it was zero).
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.reallocate(self.grown_capacity());
        }
        self.push_within_capacity(value);
    }

    /// Removes the last element and returns it. The capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) -> T {
        assert!(self.size != 0, "pop_back on an empty SimpleVector");
        self.size -= 1;
        unsafe { self.items.read(self.size) }
    }

    /// Inserts `value` at position `index`, shifting later elements to the right.
    ///
    /// `index == len()` appends. Returns the position of the inserted element.
    ///
    /// When the vector is full, a new block of twice the capacity (or one slot)
    /// is allocated and the elements are moved into it around the new value in
    /// a single pass.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(
            index <= self.size,
            "insertion position {index} is past the end (len {})",
            self.size
        );

        if self.size == self.capacity() {
            let new_capacity = self.grown_capacity();
            let mut new_items =
                ArrayPtr::allocate(new_capacity).unwrap_or_else(|e| allocation_failure(e));
            log::trace!(
                "SimpleVector grow-on-insert: {} -> {new_capacity} slots at position {index}",
                self.capacity()
            );
            unsafe {
                let src = self.items.as_ptr();
                let dst = new_items.as_mut_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), self.size - index);
            }
            // The old block only holds moved-from slots now; dropping it frees memory.
            self.items.swap(&mut new_items);
        } else {
            unsafe {
                let at = self.items.as_mut_ptr().add(index);
                ptr::copy(at, at.add(1), self.size - index);
                at.write(value);
            }
        }
        self.size += 1;
        index
    }

    /// Removes the element at `index`, shifting later elements to the left.
    ///
    /// Returns the position of the element that now follows the removed one,
    /// which equals `len()` if the last element was removed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes the element at `index` and returns it, shifting later elements
    /// to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.size,
            "removal position {index} is out of range (len {})",
            self.size
        );
        unsafe {
            let at = self.items.as_mut_ptr().add(index);
            let value = at.read();
            ptr::copy(at.add(1), at, self.size - index - 1);
            self.size -= 1;
            value
        }
    }

    /// Exchanges storage, length and capacity with `other` in constant time.
    #[inline]
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out of `self`, leaving an empty, unallocated vector.
    #[inline]
    pub fn take(&mut self) -> SimpleVector<T> {
        std::mem::take(self)
    }

    /// Move-assigns `source` into `self` by swapping the two vectors.
    ///
    /// `source` ends up holding the previous contents of `self`, which are
    /// released when `source` is dropped.
    #[inline]
    pub fn move_assign(&mut self, source: &mut SimpleVector<T>) {
        self.swap(source);
    }

    /// Capacity to grow to when a full vector needs one more slot.
    #[inline]
    fn grown_capacity(&self) -> usize {
        self.capacity()
            .saturating_mul(GROWTH_FACTOR)
            .max(MIN_NON_ZERO_CAPACITY)
    }

    /// Appends `value` into spare capacity.
    #[inline]
    fn push_within_capacity(&mut self, value: T) {
        assert!(self.size < self.capacity(), "SimpleVector is full");
        unsafe { self.items.write(self.size, value) };
        self.size += 1;
    }

    fn reallocate(&mut self, new_capacity: usize) {
        self.try_reallocate(new_capacity)
            .unwrap_or_else(|e| allocation_failure(e));
    }

    /// Moves the live elements into a new block of exactly `new_capacity` slots.
    fn try_reallocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.size);
        let mut new_items = ArrayPtr::allocate(new_capacity)?;
        log::trace!(
            "SimpleVector reallocation: {} -> {new_capacity} slots ({} live)",
            self.capacity(),
            self.size
        );
        unsafe {
            ptr::copy_nonoverlapping(self.items.as_ptr(), new_items.as_mut_ptr(), self.size);
        }
        self.items.swap(&mut new_items);
        Ok(())
    }
}

/// Reports an allocation failure on an infallible path.
#[cold]
fn allocation_failure(err: Error) -> ! {
    match err.into_kind() {
        ErrorKind::Allocation { layout, .. } => handle_alloc_error(layout),
        kind => panic!("{kind}"),
    }
}

impl<T> Drop for SimpleVector<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
        // `items` frees the block afterwards.
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep-copies the elements into new storage of the same capacity.
    fn clone(&self) -> Self {
        let mut copy = SimpleVector::with_capacity(self.capacity());
        for item in self.as_slice() {
            copy.push_within_capacity(item.clone());
        }
        copy
    }

    /// Copy-and-swap: `self` is untouched if cloning `source` panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.size,
            "index {index} is out of range (len {})",
            self.size
        );
        unsafe { self.items.get_unchecked(index) }
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.size,
            "index {index} is out of range (len {})",
            self.size
        );
        unsafe { self.items.get_unchecked_mut(index) }
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    /// Lexicographic comparison; `<`, `<=`, `>` and `>=` all derive from it.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> From<ReserveProxy> for SimpleVector<T> {
    /// Creates an empty vector with the hinted capacity.
    fn from(hint: ReserveProxy) -> Self {
        SimpleVector::with_capacity(hint.capacity())
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        let mut v = SimpleVector::with_capacity(N);
        for item in items {
            v.push_within_capacity(item);
        }
        v
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        SimpleVector::from_slice(items)
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = SimpleVector::new();
        v.extend(iter);
        v
    }
}

impl<T> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = std::mem::take(&mut self.size);
        IntoIter::new(self.items.take(), len)
    }
}
