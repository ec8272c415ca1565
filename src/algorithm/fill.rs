use super::specialize::SpecFill;
use super::strategy::{Fill, Undo};
use crate::cursor::{OutputCursor, Traversal};

/// Clone-assigns the fill value over each existing value.
#[doc(hidden)]
#[derive(Debug)]
pub struct FillAssign;

impl<T> Undo<T> for FillAssign {}

impl<T: Clone> Fill<T> for FillAssign {
    unsafe fn one(value: &T, dst: *mut T) {
        // SAFETY: The caller guarantees that dst holds a live value, which can't be the fill value
        // because that is borrowed.
        unsafe { (*dst).clone_from(value) }
    }

    unsafe fn bulk(dst: *mut T, n: usize, value: &T) {
        // SAFETY: Upheld by the caller.
        unsafe { T::fill_assign_n(dst, n, value) }
    }
}

/// Assigns a clone of `value` to every element of `[first, last)`.
///
/// # Safety
/// `[first, last)` must be a valid range of live values, which `value` must not be part of.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::fill;
/// let mut data = [0u32; 4];
/// let ptr = data.as_mut_ptr();
/// // SAFETY: The range covers the middle of data.
/// unsafe { fill(ptr.wrapping_add(1), ptr.wrapping_add(3), &7) };
/// assert_eq!(data, [0, 7, 7, 0]);
/// ```
pub unsafe fn fill<O>(first: O, last: O, value: &O::Item)
where
    O: OutputCursor,
    O::Item: Clone,
{
    // SAFETY: Upheld by the caller.
    unsafe { O::Category::fill::<FillAssign>(first, last, value) }
}

/// Assigns a clone of `value` to the `n` elements from `first`, returning the position after the
/// last one. Does nothing if `n` is 0.
///
/// Between raw pointers this is a single `memset` for byte-sized integers.
///
/// # Safety
/// `first` must be followed by at least `n` live values, which `value` must not be part of.
///
/// # Examples
/// ```
/// # use standard_containers::algorithm::fill_n;
/// let mut bytes = [0u8; 8];
/// // SAFETY: bytes has room for 5.
/// let end = unsafe { fill_n(bytes.as_mut_ptr(), 5, &0xAB) };
/// assert_eq!(bytes, [0xAB, 0xAB, 0xAB, 0xAB, 0xAB, 0, 0, 0]);
/// assert_eq!(end, bytes.as_mut_ptr().wrapping_add(5));
/// ```
pub unsafe fn fill_n<O>(first: O, n: usize, value: &O::Item) -> O
where
    O: OutputCursor,
    O::Item: Clone,
{
    if n == 0 {
        return first;
    }
    // SAFETY: Upheld by the caller.
    unsafe { first.fill_n_with::<FillAssign>(n, value) }
}
