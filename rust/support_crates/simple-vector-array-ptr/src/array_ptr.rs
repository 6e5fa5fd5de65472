//! `ArrayPtr`: a move-only owner of one heap block of element slots.

use std::marker::PhantomData;
use std::ptr::NonNull;

use simple_vector_common::Result;

use crate::raw;

/// A block of slots handed out by [`ArrayPtr::release`].
///
/// The block is no longer owned by anything: the receiver must either give it
/// back to an `ArrayPtr` through [`ArrayPtr::adopt`] or accept that it leaks.
#[derive(Debug)]
pub struct RawBlock<T> {
    /// Pointer to the first slot.
    pub ptr: NonNull<T>,
    /// Number of slots in the block.
    pub len: usize,
}

impl<T> Clone for RawBlock<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawBlock<T> {}

/// Exclusive owner of a contiguous heap block of `len` slots of type `T`.
///
/// An `ArrayPtr` either holds no allocation (`len == 0`) or owns exactly one
/// block obtained from the global allocator. Ownership is never duplicated:
/// the type is neither `Clone` nor `Copy`, and it can only be moved, swapped,
/// [taken](ArrayPtr::take) or [released](ArrayPtr::release).
///
/// Dropping an `ArrayPtr` returns the memory to the allocator but does **not**
/// drop the values stored in the slots. Whoever tracks which slots are live
/// (normally `SimpleVector`) must drop them first.
pub struct ArrayPtr<T> {
    /// Start of the owned block, `None` when nothing is allocated.
    ptr: Option<NonNull<T>>,
    /// Number of slots in the owned block.
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> ArrayPtr<T> {
    /// Creates an instance that owns no allocation.
    #[inline]
    pub const fn empty() -> ArrayPtr<T> {
        ArrayPtr {
            ptr: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a block of exactly `count` slots, each holding `T::default()`.
    ///
    /// `count == 0` yields an unallocated instance.
    ///
    /// # Errors
    ///
    /// Fails if the allocator cannot provide memory for `count` slots.
    pub fn new(count: usize) -> Result<ArrayPtr<T>>
    where
        T: Default,
    {
        let mut buf = Self::allocate(count)?;
        for i in 0..count {
            unsafe {
                buf.write(i, T::default());
            }
        }
        Ok(buf)
    }

    /// Allocates a block of exactly `count` uninitialized slots.
    ///
    /// `count == 0` yields an unallocated instance.
    ///
    /// # Errors
    ///
    /// Fails if the allocator cannot provide memory for `count` slots.
    pub fn allocate(count: usize) -> Result<ArrayPtr<T>> {
        if count == 0 {
            return Ok(Self::empty());
        }
        let ptr = raw::allocate::<T>(count)?;
        Ok(ArrayPtr {
            ptr: Some(ptr),
            len: count,
            _marker: PhantomData,
        })
    }

    /// Takes ownership of an already allocated block. No allocation is performed.
    ///
    /// # Safety
    ///
    /// `block` must describe memory obtained from this crate's allocator for
    /// exactly `block.len` slots of `T` (typically a block previously returned by
    /// [`ArrayPtr::release`]), and no other owner may free it.
    pub unsafe fn adopt(block: RawBlock<T>) -> ArrayPtr<T> {
        log::trace!("adopting block of {} slots at {:p}", block.len, block.ptr);
        if block.len == 0 {
            return Self::empty();
        }
        ArrayPtr {
            ptr: Some(block.ptr),
            len: block.len,
            _marker: PhantomData,
        }
    }

    /// Gives up ownership of the block without freeing it.
    ///
    /// The instance is left holding no allocation. Returns `None` if nothing was
    /// allocated.
    #[must_use = "the released block leaks unless it is adopted again"]
    pub fn release(&mut self) -> Option<RawBlock<T>> {
        let len = std::mem::take(&mut self.len);
        let block = self.ptr.take().map(|ptr| RawBlock { ptr, len });
        if let Some(block) = &block {
            log::trace!("releasing block of {} slots at {:p}", block.len, block.ptr);
        }
        block
    }

    /// Moves the block out of `self`, leaving `self` unallocated.
    #[inline]
    pub fn take(&mut self) -> ArrayPtr<T> {
        std::mem::replace(self, Self::empty())
    }

    /// Exchanges the blocks of two instances without touching any slot.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        std::mem::swap(self, other);
    }

    /// Returns `true` if an allocation is held.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.ptr.is_some()
    }

    /// Returns the number of slots in the owned block.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the instance owns no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a pointer to the first slot.
    ///
    /// When nothing is allocated the pointer is dangling but well-aligned, so it
    /// is still suitable for building an empty slice.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.unwrap_or(NonNull::dangling()).as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    ///
    /// See [`ArrayPtr::as_ptr`] for the unallocated case.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.unwrap_or(NonNull::dangling()).as_ptr()
    }

    /// Returns a reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// The instance must be allocated, `index` must be less than
    /// [`len`](ArrayPtr::len), and the slot must hold an initialized value.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(self.is_allocated(), "access through an unallocated ArrayPtr");
        debug_assert!(index < self.len, "slot {index} out of {} slots", self.len);
        unsafe { &*self.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// Same requirements as [`ArrayPtr::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(self.is_allocated(), "access through an unallocated ArrayPtr");
        debug_assert!(index < self.len, "slot {index} out of {} slots", self.len);
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }

    /// Writes `value` into slot `index` without reading or dropping the previous
    /// contents of the slot.
    ///
    /// # Safety
    ///
    /// The instance must be allocated and `index` must be less than
    /// [`len`](ArrayPtr::len). A live value previously stored in the slot is
    /// overwritten without being dropped.
    #[inline]
    pub unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(self.is_allocated(), "write through an unallocated ArrayPtr");
        debug_assert!(index < self.len, "slot {index} out of {} slots", self.len);
        unsafe {
            self.as_mut_ptr().add(index).write(value);
        }
    }

    /// Moves the value out of slot `index`, leaving the slot logically
    /// uninitialized.
    ///
    /// # Safety
    ///
    /// The instance must be allocated, `index` must be less than
    /// [`len`](ArrayPtr::len), and the slot must hold an initialized value that
    /// is not read again until it is rewritten.
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T {
        debug_assert!(self.is_allocated(), "read through an unallocated ArrayPtr");
        debug_assert!(index < self.len, "slot {index} out of {} slots", self.len);
        unsafe { self.as_ptr().add(index).read() }
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        ArrayPtr::empty()
    }
}

impl<T> Drop for ArrayPtr<T> {
    /// Returns the block to the allocator. Slot contents are not dropped.
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            unsafe { raw::free(ptr, self.len) };
        }
    }
}

// SAFETY: ArrayPtr exclusively owns its block; sending it moves the slots along.
unsafe impl<T: Send> Send for ArrayPtr<T> {}

// SAFETY: shared access only hands out `&T` (through unsafe accessors).
unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

impl<T> std::fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}
