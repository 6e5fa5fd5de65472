//! Thin wrappers over the global allocator for arrays of `T`.

use std::alloc::{Layout, alloc, dealloc};
use std::ptr::NonNull;

use simple_vector_common::{Result, error::Error};

/// Returns the layout of `count` contiguous slots of type `T`.
///
/// # Errors
///
/// Returns `CapacityOverflow` if the total size exceeds `isize::MAX` bytes.
#[inline]
pub fn slots_layout<T>(count: usize) -> Result<Layout> {
    Layout::array::<T>(count).map_err(|_| Error::capacity_overflow(count))
}

/// Allocates uninitialized memory for `count` slots of type `T`.
///
/// Requests that occupy zero bytes (`count == 0` or a zero-sized `T`) do not
/// reach the allocator and yield a dangling, well-aligned pointer.
///
/// # Errors
///
/// Returns `CapacityOverflow` if the request cannot be described by a `Layout`,
/// and `Allocation` if the allocator returns null.
pub fn allocate<T>(count: usize) -> Result<NonNull<T>> {
    let layout = slots_layout::<T>(count)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }

    let ptr = unsafe { alloc(layout) } as *mut T;
    match NonNull::new(ptr) {
        Some(ptr) => Ok(ptr),
        None => {
            log::warn!(
                "allocator refused {count} slots ({} bytes, align {})",
                layout.size(),
                layout.align()
            );
            Err(Error::allocation(count, layout))
        }
    }
}

/// Frees memory that was obtained from [`allocate`].
///
/// # Safety
///
/// `ptr` must have been returned by `allocate::<T>(count)` with the same `count`,
/// and must not be freed more than once.
pub unsafe fn free<T>(ptr: NonNull<T>, count: usize) {
    // A successful `allocate` already proved this layout valid.
    let Ok(layout) = Layout::array::<T>(count) else {
        return;
    };
    if layout.size() != 0 {
        unsafe {
            dealloc(ptr.as_ptr() as *mut u8, layout);
        }
    }
}
