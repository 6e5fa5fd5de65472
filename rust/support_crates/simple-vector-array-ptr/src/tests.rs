use crate::{ArrayPtr, raw};

#[test]
fn test_zero_count_is_unallocated() {
    let p = ArrayPtr::<u32>::new(0).unwrap();
    assert!(!p.is_allocated());
    assert_eq!(p.len(), 0);
    assert!(p.is_empty());

    let p = ArrayPtr::<u32>::allocate(0).unwrap();
    assert!(!p.is_allocated());

    let p = ArrayPtr::<u32>::default();
    assert!(!p.is_allocated());
    assert!(!p.as_ptr().is_null());
}

#[test]
fn test_new_fills_with_defaults() {
    let mut p = ArrayPtr::<u64>::new(16).unwrap();
    assert!(p.is_allocated());
    assert_eq!(p.len(), 16);
    for i in 0..16 {
        assert_eq!(unsafe { *p.get_unchecked(i) }, 0);
    }

    unsafe {
        *p.get_unchecked_mut(3) = 42;
        p.write(4, 17);
    }
    assert_eq!(unsafe { *p.get_unchecked(3) }, 42);
    assert_eq!(unsafe { p.read(4) }, 17);
}

#[test]
fn test_allocation_is_aligned() {
    let p = ArrayPtr::<u128>::allocate(5).unwrap();
    assert!(p.as_ptr().is_aligned());

    let p = ArrayPtr::<u8>::allocate(1).unwrap();
    assert!(p.is_allocated());
    assert_eq!(p.len(), 1);
}

#[test]
fn test_swap_exchanges_blocks() {
    let mut a = ArrayPtr::<i32>::new(2).unwrap();
    let mut b = ArrayPtr::<i32>::new(3).unwrap();
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    a.swap(&mut b);
    assert_eq!(a.as_ptr(), b_ptr);
    assert_eq!(b.as_ptr(), a_ptr);
    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 2);

    let mut empty = ArrayPtr::<i32>::empty();
    a.swap(&mut empty);
    assert!(!a.is_allocated());
    assert!(empty.is_allocated());
    assert_eq!(empty.as_ptr(), b_ptr);
}

#[test]
fn test_take_leaves_source_empty() {
    let mut source = ArrayPtr::<i32>::new(4).unwrap();
    let ptr = source.as_ptr();

    let target = source.take();
    assert!(!source.is_allocated());
    assert_eq!(source.len(), 0);
    assert!(target.is_allocated());
    assert_eq!(target.as_ptr(), ptr);
    assert_eq!(target.len(), 4);
}

#[test]
fn test_release_and_adopt() {
    let mut p = ArrayPtr::<i32>::new(3).unwrap();
    unsafe { p.write(1, 7) };
    let ptr = p.as_ptr();

    let block = p.release().expect("allocated");
    assert!(!p.is_allocated());
    assert_eq!(p.len(), 0);
    assert_eq!(block.ptr.as_ptr() as *const i32, ptr);
    assert_eq!(block.len, 3);

    let adopted = unsafe { ArrayPtr::adopt(block) };
    assert!(adopted.is_allocated());
    assert_eq!(adopted.as_ptr(), ptr);
    assert_eq!(unsafe { *adopted.get_unchecked(1) }, 7);

    let mut empty = ArrayPtr::<i32>::empty();
    assert!(empty.release().is_none());
}

#[test]
fn test_zero_sized_slots() {
    let p = ArrayPtr::<()>::new(1000).unwrap();
    assert!(p.is_allocated());
    assert_eq!(p.len(), 1000);
    let _last: &() = unsafe { p.get_unchecked(999) };
}

#[test]
fn test_impossible_requests_fail() {
    let err = ArrayPtr::<u64>::allocate(usize::MAX / 2).unwrap_err();
    assert!(err.is_allocation_failure());

    let err = raw::slots_layout::<u32>(usize::MAX).unwrap_err();
    assert!(err.is_allocation_failure());

    // Valid layout, but no allocator can satisfy it.
    let err = ArrayPtr::<u8>::allocate(isize::MAX as usize).unwrap_err();
    assert!(err.is_allocation_failure());
}

#[test]
fn test_raw_allocate_free() {
    let ptr = raw::allocate::<u16>(10).unwrap();
    unsafe {
        ptr.as_ptr().write(5);
        assert_eq!(ptr.as_ptr().read(), 5);
        raw::free(ptr, 10);
    }

    let ptr = raw::allocate::<u16>(0).unwrap();
    unsafe { raw::free(ptr, 0) };
}
