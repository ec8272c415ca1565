use super::specialize::SpecClone;
use super::strategy::{Transfer, Undo};
use crate::cursor::{
    BidirectionalCursor, BidirectionalOutputCursor, Cursor, OutputCursor, Traversal,
};

/// Clone-assigns each element over an existing value.
#[doc(hidden)]
#[derive(Debug)]
pub struct CloneAssign;

impl<T> Undo<T> for CloneAssign {}

impl<T: Clone> Transfer<T> for CloneAssign {
    unsafe fn one(src: *const T, dst: *mut T) {
        if src == dst.cast_const() {
            return;
        }
        // SAFETY: The caller guarantees that both values are live, and they aren't the same
        // value.
        unsafe { (*dst).clone_from(&*src) }
    }

    unsafe fn bulk(src: *const T, dst: *mut T, n: usize) {
        // SAFETY: Upheld by the caller.
        unsafe { T::clone_assign_n(src, dst, n) }
    }

    unsafe fn bulk_backward(src_last: *const T, dst_last: *mut T, n: usize) {
        // SAFETY: Upheld by the caller.
        unsafe { T::clone_assign_backward_n(src_last, dst_last, n) }
    }
}

/// Copies the elements of `[first, last)` over the elements from `result` onwards, front to back.
/// Returns the position after the last element written.
///
/// Between raw pointers to [`Copy`] types this is a single `memmove`.
///
/// # Safety
/// `[first, last)` must be a valid range of live values and `result` must be followed by at least
/// as many live values. `result` may point into `[first, last)` only if it comes before `first`.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::copy;
/// let src = [1, 2, 3];
/// let mut dst = [0; 4];
/// // SAFETY: dst has room for all of src.
/// let end = unsafe { copy(src.as_ptr(), src.as_ptr().wrapping_add(3), dst.as_mut_ptr()) };
/// assert_eq!(dst, [1, 2, 3, 0]);
/// assert_eq!(end, dst.as_mut_ptr().wrapping_add(3));
/// ```
pub unsafe fn copy<I, O>(first: I, last: I, result: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
    I::Item: Clone,
{
    // SAFETY: Upheld by the caller.
    unsafe { I::Category::transfer::<O, CloneAssign>(first, last, result) }
}

/// Copies the `n` elements from `first` over the elements from `result` onwards. Does nothing if
/// `n` is 0.
///
/// # Safety
/// As for [`copy`], with `n` elements in each range.
pub unsafe fn copy_n<I, O>(first: I, n: usize, result: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
    I::Item: Clone,
{
    if n == 0 {
        return result;
    }
    // SAFETY: Upheld by the caller.
    unsafe { first.transfer_n::<O, CloneAssign>(n, result) }
}

/// Copies the elements of `[first, last)` over the elements ending at `result_last`, back to
/// front. Returns the position of the first element written.
///
/// This is the form to use when the destination overlaps the end of the source.
///
/// # Safety
/// `[first, last)` must be a valid range of live values and `result_last` must be preceded by at
/// least as many live values. `result_last` may point into `(first, last]` only if the ranges are
/// shifted right.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::copy_backward;
/// let mut data = [1, 2, 3, 4, 5];
/// let ptr = data.as_mut_ptr();
/// // SAFETY: Shifting the first three elements right by two stays within data.
/// unsafe { copy_backward(ptr.cast_const(), ptr.wrapping_add(3).cast_const(), ptr.wrapping_add(5)) };
/// assert_eq!(data, [1, 2, 1, 2, 3]);
/// ```
pub unsafe fn copy_backward<I, O>(first: I, last: I, result_last: O) -> O
where
    I: BidirectionalCursor,
    O: BidirectionalOutputCursor<Item = I::Item>,
    I::Item: Clone,
{
    // SAFETY: Upheld by the caller.
    unsafe { I::Category::transfer_backward::<O, CloneAssign>(first, last, result_last) }
}
