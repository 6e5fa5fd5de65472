//! By-value iteration over a `SimpleVector`.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use simple_vector_array_ptr::ArrayPtr;

/// An iterator that moves elements out of a `SimpleVector`.
///
/// Created by `SimpleVector::into_iter`. Elements that are not consumed are
/// dropped together with the iterator.
pub struct IntoIter<T> {
    items: ArrayPtr<T>,
    /// First slot that still holds a value.
    start: usize,
    /// One past the last slot that still holds a value.
    end: usize,
}

impl<T> IntoIter<T> {
    /// Takes over `items`, whose first `len` slots hold live values.
    pub(crate) fn new(items: ArrayPtr<T>, len: usize) -> IntoIter<T> {
        debug_assert!(len <= items.len());
        IntoIter {
            items,
            start: 0,
            end: len,
        }
    }

    /// Returns the elements that have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.items.as_ptr().add(self.start), self.len()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let item = unsafe { self.items.read(self.start) };
        self.start += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        Some(unsafe { self.items.read(self.end) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest = ptr::slice_from_raw_parts_mut(
            unsafe { self.items.as_mut_ptr().add(self.start) },
            self.end - self.start,
        );
        self.start = self.end;
        unsafe { ptr::drop_in_place(rest) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
