//! The element operations behind every algorithm, and the loops that apply them one at a time.
//!
//! An operation is a zero-sized type implementing [`Transfer`] (reading one range and writing
//! another) or [`Fill`] (writing one value over a range). Its `bulk` methods are what raw pointer
//! cursors reach, which is where the element type gets a chance to use a memory operation instead
//! of a loop. Every loop runs under an [`InitGuard`], which undoes the finished part of the work
//! if an element operation unwinds.

use crate::cursor::{BidirectionalCursor, BidirectionalOutputCursor, Cursor, OutputCursor};
use crate::uninitialized::InitGuard;

/// How to take back one completed element operation.
pub trait Undo<T>: Sized {
    /// Whether there is anything to undo at all. Assignments leave valid values behind, so only
    /// constructing operations set this.
    const UNDOES: bool = false;

    /// Reverts the operation that produced the value at `dst`.
    ///
    /// # Safety
    /// `dst` must hold a value produced by this operation which nothing else refers to.
    unsafe fn undo(_dst: *mut T) {}
}

/// An operation that reads elements from one range and writes them to another.
pub trait Transfer<T>: Undo<T> {
    /// Applies the operation to a single element.
    ///
    /// # Safety
    /// `src` must be valid for reads and `dst` valid for whatever the operation writes.
    unsafe fn one(src: *const T, dst: *mut T);

    /// Applies the operation to `n` contiguous elements, front to back.
    ///
    /// # Safety
    /// As for [`Transfer::one`], for every element of both ranges.
    unsafe fn bulk(src: *const T, dst: *mut T, n: usize) {
        // SAFETY: Upheld by the caller.
        unsafe { transfer_n_by_element::<*const T, *mut T, Self>(src, n, dst) };
    }

    /// Applies the operation to the `n` contiguous elements ending at `src_last` and `dst_last`,
    /// back to front.
    ///
    /// # Safety
    /// As for [`Transfer::one`], for every element of both ranges.
    unsafe fn bulk_backward(src_last: *const T, dst_last: *mut T, n: usize) {
        // SAFETY: Upheld by the caller.
        unsafe { transfer_backward_n_by_element::<*const T, *mut T, Self>(src_last, n, dst_last) };
    }
}

/// An operation that writes copies of one value.
pub trait Fill<T>: Undo<T> {
    /// Applies the operation to a single element.
    ///
    /// # Safety
    /// `dst` must be valid for whatever the operation writes.
    unsafe fn one(value: &T, dst: *mut T);

    /// Applies the operation to `n` contiguous elements.
    ///
    /// # Safety
    /// As for [`Fill::one`], for every element of the range.
    unsafe fn bulk(dst: *mut T, n: usize, value: &T) {
        // SAFETY: Upheld by the caller.
        unsafe { fill_n_by_element::<*mut T, Self>(dst, n, value) };
    }
}

/// Applies `Op` to the `n` elements from `first`, writing to `result` and onwards. Returns the
/// position after the last element written.
///
/// # Safety
/// Both ranges must be valid for `n` elements, as required by `Op`.
pub unsafe fn transfer_n_by_element<I, O, Op>(mut first: I, n: usize, mut result: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
    Op: Transfer<I::Item>,
{
    let mut guard = InitGuard::<O, Op>::new(result.clone());
    for _ in 0..n {
        // SAFETY: Upheld by the caller.
        unsafe { Op::one(first.as_ptr(), result.as_mut_ptr()) };
        guard.record();
        first.step();
        result.step();
    }
    guard.disarm();
    result
}

/// As [`transfer_n_by_element`], stopping when `first` reaches `last` instead of counting.
///
/// # Safety
/// `[first, last)` must be a valid range and `result` valid for as many elements.
pub unsafe fn transfer_until<I, O, Op>(mut first: I, last: I, mut result: O) -> O
where
    I: Cursor,
    O: OutputCursor<Item = I::Item>,
    Op: Transfer<I::Item>,
{
    let mut guard = InitGuard::<O, Op>::new(result.clone());
    while first != last {
        // SAFETY: Upheld by the caller.
        unsafe { Op::one(first.as_ptr(), result.as_mut_ptr()) };
        guard.record();
        first.step();
        result.step();
    }
    guard.disarm();
    result
}

/// Applies `Op` to the `n` elements before `last`, back to front, writing to the elements before
/// `result_last`. Returns the position of the last element written, which is the start of the
/// destination range.
///
/// # Safety
/// Both ranges must be valid for `n` elements, as required by `Op`.
pub unsafe fn transfer_backward_n_by_element<I, O, Op>(
    mut last: I,
    n: usize,
    mut result_last: O,
) -> O
where
    I: BidirectionalCursor,
    O: BidirectionalOutputCursor<Item = I::Item>,
    Op: Transfer<I::Item>,
{
    let mut guard = InitGuard::<O, Op>::new(result_last.clone());
    for _ in 0..n {
        last.step_back();
        result_last.step_back();
        // SAFETY: Upheld by the caller.
        unsafe { Op::one(last.as_ptr(), result_last.as_mut_ptr()) };
        guard.record_before(result_last.clone());
    }
    guard.disarm();
    result_last
}

/// As [`transfer_backward_n_by_element`], stopping when `last` reaches `first` instead of
/// counting.
///
/// # Safety
/// `[first, last)` must be a valid range and `result_last` must be preceded by as many valid
/// elements.
pub unsafe fn transfer_backward_until<I, O, Op>(first: I, mut last: I, mut result_last: O) -> O
where
    I: BidirectionalCursor,
    O: BidirectionalOutputCursor<Item = I::Item>,
    Op: Transfer<I::Item>,
{
    let mut guard = InitGuard::<O, Op>::new(result_last.clone());
    while first != last {
        last.step_back();
        result_last.step_back();
        // SAFETY: Upheld by the caller.
        unsafe { Op::one(last.as_ptr(), result_last.as_mut_ptr()) };
        guard.record_before(result_last.clone());
    }
    guard.disarm();
    result_last
}

/// Applies `Op` with `value` to the `n` elements from `first`. Returns the position after the last
/// element written.
///
/// # Safety
/// The range must be valid for `n` elements, as required by `Op`.
pub unsafe fn fill_n_by_element<O, Op>(mut first: O, n: usize, value: &O::Item) -> O
where
    O: OutputCursor,
    Op: Fill<O::Item>,
{
    let mut guard = InitGuard::<O, Op>::new(first.clone());
    for _ in 0..n {
        // SAFETY: Upheld by the caller.
        unsafe { Op::one(value, first.as_mut_ptr()) };
        guard.record();
        first.step();
    }
    guard.disarm();
    first
}

/// As [`fill_n_by_element`], stopping when `first` reaches `last` instead of counting.
///
/// # Safety
/// `[first, last)` must be a valid range, as required by `Op`.
pub unsafe fn fill_until<O, Op>(mut first: O, last: O, value: &O::Item)
where
    O: OutputCursor,
    Op: Fill<O::Item>,
{
    let mut guard = InitGuard::<O, Op>::new(first.clone());
    while first != last {
        // SAFETY: Upheld by the caller.
        unsafe { Op::one(value, first.as_mut_ptr()) };
        guard.record();
        first.step();
    }
    guard.disarm();
}
