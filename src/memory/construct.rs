use std::mem;
use std::ptr::{self, NonNull};

/// Moves `value` into the raw storage at `ptr`, without reading or dropping whatever bytes were
/// there before.
///
/// # Safety
/// `ptr` must be valid for writes and properly aligned.
pub const unsafe fn construct<T>(ptr: *mut T, value: T) {
    // SAFETY: Upheld by the caller.
    unsafe { ptr.write(value) }
}

/// Builds a value with `f` and moves it into the raw storage at `ptr`. If `f` panics, the storage
/// is left untouched.
///
/// # Safety
/// `ptr` must be valid for writes and properly aligned.
pub unsafe fn construct_with<T, F: FnOnce() -> T>(ptr: *mut T, f: F) {
    let value = f();
    // SAFETY: Upheld by the caller.
    unsafe { ptr.write(value) }
}

/// Drops the value at `ptr` in place, leaving the storage raw.
///
/// # Safety
/// `ptr` must point to a live, properly aligned value that isn't used again until it is
/// reconstructed.
pub unsafe fn destroy<T>(ptr: *mut T) {
    // SAFETY: Upheld by the caller.
    unsafe { ptr::drop_in_place(ptr) }
}

/// Drops the `n` contiguous values starting at `first`.
///
/// For types without drop glue this compiles down to nothing at all, and in that case the range
/// doesn't even need to hold valid values.
///
/// # Safety
/// Unless `T` has no drop glue, `first` must point to `n` live, contiguous values that aren't used
/// again until they are reconstructed.
pub unsafe fn destroy_n<T>(first: *mut T, n: usize) {
    if !mem::needs_drop::<T>() || n == 0 {
        return;
    }

    // SAFETY: Upheld by the caller. Dropping a slice keeps going after a panicking element, so
    // every value in the range is dropped exactly once either way.
    unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, n)) }
}

/// Drops the values in `[first, last)`. See [`destroy_n`].
///
/// Zero-sized values are counted the way pointer cursors count them, one byte of address per
/// element.
///
/// # Safety
/// Both pointers must belong to the same allocation with `first <= last`. Unless `T` has no drop
/// glue, the range must hold live values that aren't used again until they are reconstructed.
pub unsafe fn destroy_range<T>(first: *mut T, last: *mut T) {
    if !mem::needs_drop::<T>() {
        return;
    }

    if size_of::<T>() == 0 {
        let n = last.addr().wrapping_sub(first.addr());
        debug_assert!(n as isize >= 0, "destroyed a reversed range");
        // SAFETY: Upheld by the caller. The values take no space, so any aligned pointer works.
        return unsafe { destroy_n(NonNull::<T>::dangling().as_ptr(), n) };
    }

    // SAFETY: The caller guarantees that both pointers are derived from the same allocation and
    // ordered.
    let n = unsafe { last.offset_from(first) };
    debug_assert!(n >= 0, "destroyed a reversed range");

    // SAFETY: Upheld by the caller.
    unsafe { destroy_n(first, n as usize) }
}
