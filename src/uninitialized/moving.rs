use std::ptr;

use crate::algorithm::strategy::{Transfer, Undo};
use crate::cursor::{
    BidirectionalCursor, BidirectionalOutputCursor, Cursor, OutputCursor, Traversal,
};

/// Relocates each element into raw storage: a bitwise move, after which the source slot is raw.
///
/// Relocation itself can't fail. If a cursor panics partway through, the relocated values are
/// leaked rather than dropped, because the caller still counts their sources as live.
#[doc(hidden)]
#[derive(Debug)]
pub struct Relocate;

impl<T> Undo<T> for Relocate {}

impl<T> Transfer<T> for Relocate {
    unsafe fn one(src: *const T, dst: *mut T) {
        // SAFETY: The caller guarantees that src is live and dst is raw storage, and treats src as
        // raw afterwards.
        unsafe { dst.write(src.read()) }
    }

    unsafe fn bulk(src: *const T, dst: *mut T, n: usize) {
        if n == 0 {
            return;
        }
        // SAFETY: The caller guarantees that both ranges are valid for n elements. ptr::copy
        // handles any overlap.
        unsafe { ptr::copy(src, dst, n) }
    }

    unsafe fn bulk_backward(src_last: *const T, dst_last: *mut T, n: usize) {
        if n == 0 {
            return;
        }
        // SAFETY: As above, for the n elements before each end.
        unsafe { ptr::copy(src_last.sub(n), dst_last.sub(n), n) }
    }
}

/// Relocates the elements of `[first, last)` into the raw storage from `result` onwards, returning
/// the position after the last element written. Afterwards the source is raw storage.
///
/// # Safety
/// `[first, last)` must be a valid range of live values and `result` must be followed by at least
/// as much raw storage. The ranges may only overlap when both are raw pointers.
pub unsafe fn uninitialized_move<I, O>(first: I, last: I, result: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
{
    // SAFETY: Upheld by the caller.
    unsafe { I::Category::transfer::<O, Relocate>(first, last, result) }
}

/// Relocates the `n` elements from `first` into the raw storage from `result` onwards. See
/// [`uninitialized_move`].
///
/// # Safety
/// As for [`uninitialized_move`], with `n` elements in each range.
pub unsafe fn uninitialized_move_n<I, O>(first: I, n: usize, result: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
{
    if n == 0 {
        return result;
    }
    // SAFETY: Upheld by the caller.
    unsafe { first.transfer_n::<O, Relocate>(n, result) }
}

/// Relocates the elements of `[first, last)` into the raw storage ending at `result_last`, back to
/// front. Returns the position of the first element written.
///
/// # Safety
/// `[first, last)` must be a valid range of live values and `result_last` must be preceded by at
/// least as much raw storage. The ranges may only overlap when both are raw pointers.
pub unsafe fn uninitialized_move_backward<I, O>(first: I, last: I, result_last: O) -> O
where
    I: BidirectionalCursor,
    O: BidirectionalOutputCursor<Item = I::Item>,
{
    // SAFETY: Upheld by the caller.
    unsafe { I::Category::transfer_backward::<O, Relocate>(first, last, result_last) }
}

/// Relocates the `n` elements before `last` into the raw storage ending at `result_last`, back to
/// front. See [`uninitialized_move_backward`].
///
/// # Safety
/// As for [`uninitialized_move_backward`], with `n` elements in each range.
pub unsafe fn uninitialized_move_backward_n<I, O>(last: I, n: usize, result_last: O) -> O
where
    I: BidirectionalCursor,
    O: BidirectionalOutputCursor<Item = I::Item>,
{
    if n == 0 {
        return result_last;
    }
    // SAFETY: Upheld by the caller.
    unsafe { last.transfer_backward_n::<O, Relocate>(n, result_last) }
}
