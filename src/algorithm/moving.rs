use std::mem;
use std::ops::Range;
use std::ptr;

use super::strategy::{Transfer, Undo};
use crate::cursor::{
    BidirectionalCursor, BidirectionalOutputCursor, Cursor, OutputCursor, Traversal,
};

/// Moves each element over an existing value, which is dropped first.
#[doc(hidden)]
#[derive(Debug)]
pub struct MoveAssign;

impl<T> Undo<T> for MoveAssign {}

/// Drops every element of the destination which isn't also part of the source. Those are being
/// moved away rather than overwritten.
unsafe fn drop_overwritten<T>(src: *const T, dst: *mut T, n: usize) {
    if !mem::needs_drop::<T>() || size_of::<T>() == 0 {
        return;
    }

    let moving: Range<*const T> = src..src.wrapping_add(n);
    for i in 0..n {
        let slot = dst.wrapping_add(i);
        if !moving.contains(&slot.cast_const()) {
            // SAFETY: The caller guarantees that every destination slot holds a live value, and
            // this one isn't about to be moved.
            unsafe { ptr::drop_in_place(slot) };
        }
    }
}

impl<T> Transfer<T> for MoveAssign {
    unsafe fn one(src: *const T, dst: *mut T) {
        if src == dst.cast_const() {
            return;
        }
        // SAFETY: The caller guarantees that both values are live and distinct, and treats the
        // source as moved from afterwards.
        unsafe { *dst = src.read() }
    }

    unsafe fn bulk(src: *const T, dst: *mut T, n: usize) {
        if n == 0 {
            return;
        }
        // SAFETY: Both ranges are valid for n elements. Once the overwritten values are gone, the
        // whole source can be relocated in one go, overlap included.
        unsafe {
            drop_overwritten(src, dst, n);
            ptr::copy(src, dst, n);
        }
    }

    unsafe fn bulk_backward(src_last: *const T, dst_last: *mut T, n: usize) {
        // SAFETY: The same ranges as bulk, described by their ends.
        unsafe { Self::bulk(src_last.wrapping_sub(n), dst_last.wrapping_sub(n), n) }
    }
}

/// Moves the elements of `[first, last)` over the elements from `result` onwards, front to back.
/// Each destination value is dropped before it's overwritten and the source values are left
/// logically uninitialized: they must not be read or dropped afterwards.
///
/// Between raw pointers the whole range is relocated in one go, for any element type.
///
/// # Safety
/// `[first, last)` must be a valid range of live values and `result` must be followed by at least
/// as many live values. For anything other than raw pointers, the ranges may only overlap if the
/// element type has no drop glue.
///
/// # Examples
/// ```
/// # use std::mem::ManuallyDrop;
/// # use standard_containers::algorithm::move_range;
/// let src = ManuallyDrop::new([String::from("a"), String::from("b")]);
/// let mut dst = [String::new(), String::new()];
/// // SAFETY: src is never dropped, so the moved values are only owned by dst.
/// unsafe { move_range(src.as_ptr(), src.as_ptr().wrapping_add(2), dst.as_mut_ptr()) };
/// assert_eq!(dst, ["a", "b"]);
/// ```
pub unsafe fn move_range<I, O>(first: I, last: I, result: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
{
    // SAFETY: Upheld by the caller.
    unsafe { I::Category::transfer::<O, MoveAssign>(first, last, result) }
}

/// Moves the elements of `[first, last)` over the elements ending at `result_last`, back to front.
/// Returns the position of the first element written. See [`move_range`].
///
/// # Safety
/// As for [`move_range`], with the destination described by its end.
pub unsafe fn move_backward<I, O>(first: I, last: I, result_last: O) -> O
where
    I: BidirectionalCursor,
    O: BidirectionalOutputCursor<Item = I::Item>,
{
    // SAFETY: Upheld by the caller.
    unsafe { I::Category::transfer_backward::<O, MoveAssign>(first, last, result_last) }
}
