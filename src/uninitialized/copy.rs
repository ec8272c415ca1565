use std::mem;

use crate::algorithm::specialize::SpecClone;
use crate::algorithm::strategy::{Transfer, Undo};
use crate::cursor::{Cursor, OutputCursor, Traversal};
use crate::memory;

/// Constructs a clone of each element in raw storage.
#[doc(hidden)]
#[derive(Debug)]
pub struct CloneConstruct;

impl<T> Undo<T> for CloneConstruct {
    const UNDOES: bool = mem::needs_drop::<T>();

    unsafe fn undo(dst: *mut T) {
        // SAFETY: Upheld by the caller.
        unsafe { memory::destroy(dst) }
    }
}

impl<T: Clone> Transfer<T> for CloneConstruct {
    unsafe fn one(src: *const T, dst: *mut T) {
        // SAFETY: The caller guarantees that src is live and dst is raw storage.
        unsafe { memory::construct(dst, (*src).clone()) }
    }

    unsafe fn bulk(src: *const T, dst: *mut T, n: usize) {
        // SAFETY: Upheld by the caller.
        unsafe { T::clone_construct_n(src, dst, n) }
    }
}

/// Constructs clones of the elements of `[first, last)` in the raw storage from `result` onwards.
/// Returns the position after the last element constructed.
///
/// If a clone panics, the clones already constructed are dropped before the panic continues, so
/// the destination is raw storage again.
///
/// # Safety
/// `[first, last)` must be a valid range of live values and `result` must be followed by at least
/// as much raw storage, not overlapping the source.
///
/// # Examples
/// ```
/// # use std::mem::MaybeUninit;
/// # use standard_containers::uninitialized::uninitialized_copy;
/// let src = [String::from("a"), String::from("b")];
/// let mut raw = [const { MaybeUninit::<String>::uninit() }; 2];
/// let dst = raw.as_mut_ptr().cast::<String>();
/// // SAFETY: raw has room for both clones, and both are read back as initialized.
/// let copied = unsafe {
///     uninitialized_copy(src.as_ptr(), src.as_ptr().wrapping_add(2), dst);
///     raw.map(|s| s.assume_init())
/// };
/// assert_eq!(copied, src);
/// ```
pub unsafe fn uninitialized_copy<I, O>(first: I, last: I, result: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
    I::Item: Clone,
{
    // SAFETY: Upheld by the caller.
    unsafe { I::Category::transfer::<O, CloneConstruct>(first, last, result) }
}

/// Constructs clones of the `n` elements from `first` in the raw storage from `result` onwards.
/// See [`uninitialized_copy`].
///
/// # Safety
/// As for [`uninitialized_copy`], with `n` elements in each range.
pub unsafe fn uninitialized_copy_n<I, O>(first: I, n: usize, result: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
    I::Item: Clone,
{
    if n == 0 {
        return result;
    }
    // SAFETY: Upheld by the caller.
    unsafe { first.transfer_n::<O, CloneConstruct>(n, result) }
}
