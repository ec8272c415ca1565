use std::ptr::NonNull;

use super::{Category, RandomAccessTag, Traversal};
use crate::algorithm::strategy::{self, Fill, Transfer};

/// A position within a sequence of `Item`s, the building block of every algorithm in this crate.
///
/// Cursors are modelled on the iterator categories of the C++ standard library rather than Rust's
/// [`Iterator`]: a range is described by two cursors `[first, last)` and an algorithm walks from
/// one to the other. Cursors don't borrow the sequence they point into, so reading through one is
/// always `unsafe` and the caller is responsible for keeping the sequence alive and unmodified.
///
/// Raw pointers are random access cursors without any extra annotation.
///
/// The hidden `transfer_*` methods are dispatch hooks. Their defaults walk element by element and
/// the raw pointer implementations override them to reach the bulk memory operations, so they
/// should be left alone by other implementors.
pub trait Cursor: Clone + PartialEq {
    /// The traversal capability of this cursor. Must be a tag that can actually drive it, which is
    /// enforced through the [`Traversal`] bound.
    type Category: Category + Traversal<Self>;
    /// The type of the elements in the sequence.
    type Item;

    /// Moves to the next position.
    fn step(&mut self);

    /// Returns a pointer to the element at the current position. The pointer is only valid to read
    /// while the position is within a live range.
    fn as_ptr(&self) -> *const Self::Item;

    #[doc(hidden)]
    unsafe fn transfer_n<O, Op>(self, n: usize, result: O) -> O
    where
        O: OutputCursor<Item = Self::Item>,
        Op: Transfer<Self::Item>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { strategy::transfer_n_by_element::<Self, O, Op>(self, n, result) }
    }
}

/// A cursor whose elements can be written.
pub trait OutputCursor: Cursor {
    /// Returns a mutable pointer to the element at the current position.
    fn as_mut_ptr(&self) -> *mut Self::Item;

    #[doc(hidden)]
    unsafe fn transfer_from_raw<Op>(self, src: *const Self::Item, n: usize) -> Self
    where
        Op: Transfer<Self::Item>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { strategy::transfer_n_by_element::<*const Self::Item, Self, Op>(src, n, self) }
    }

    #[doc(hidden)]
    unsafe fn fill_n_with<Op>(self, n: usize, value: &Self::Item) -> Self
    where
        Op: Fill<Self::Item>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { strategy::fill_n_by_element::<Self, Op>(self, n, value) }
    }
}

/// A cursor that can also step back.
pub trait BidirectionalCursor: Cursor {
    /// Moves to the previous position.
    fn step_back(&mut self);

    #[doc(hidden)]
    unsafe fn transfer_backward_n<O, Op>(self, n: usize, result: O) -> O
    where
        O: BidirectionalOutputCursor<Item = Self::Item>,
        Op: Transfer<Self::Item>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { strategy::transfer_backward_n_by_element::<Self, O, Op>(self, n, result) }
    }
}

/// A bidirectional cursor whose elements can be written, which is what the backward algorithms
/// write through. Implemented for every cursor that is both.
pub trait BidirectionalOutputCursor: BidirectionalCursor + OutputCursor {
    #[doc(hidden)]
    unsafe fn transfer_backward_from_raw<Op>(self, src_last: *const Self::Item, n: usize) -> Self
    where
        Op: Transfer<Self::Item>;
}

impl<C: BidirectionalCursor + OutputCursor> BidirectionalOutputCursor for C {
    default unsafe fn transfer_backward_from_raw<Op>(
        self,
        src_last: *const Self::Item,
        n: usize,
    ) -> Self
    where
        Op: Transfer<Self::Item>,
    {
        // SAFETY: Upheld by the caller.
        unsafe {
            strategy::transfer_backward_n_by_element::<*const Self::Item, Self, Op>(src_last, n, self)
        }
    }
}

/// A cursor that can jump any distance and measure the distance to another cursor in constant
/// time.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Returns the cursor `n` positions away, in either direction.
    fn offset(&self, n: isize) -> Self;

    /// Returns the number of steps from `origin` to `self`, which is negative if `origin` comes
    /// after `self`.
    fn distance_from(&self, origin: &Self) -> isize;
}

/// The properties of a cursor type, looked up by type: category, element, distance, pointer and
/// reference types. Implemented for every [`Cursor`].
pub trait CursorTraits {
    /// The traversal category.
    type Category: Category;
    /// The element type.
    type Value;
    /// The signed type used to count steps between two cursors.
    type Distance;
    /// A pointer to an element.
    type Pointer;
    /// A reference to an element.
    type Reference<'a>
    where
        Self: 'a,
        Self::Value: 'a;
}

impl<C: Cursor> CursorTraits for C {
    type Category = C::Category;
    type Value = C::Item;
    type Distance = isize;
    type Pointer = *const C::Item;
    type Reference<'a>
        = &'a C::Item
    where
        Self: 'a,
        C::Item: 'a;
}

/// The category of cursor `C`.
pub type CategoryOf<C> = <C as CursorTraits>::Category;
/// The element type of cursor `C`.
pub type ValueOf<C> = <C as CursorTraits>::Value;
/// The distance type of cursor `C`.
pub type DistanceOf<C> = <C as CursorTraits>::Distance;
/// The pointer type of cursor `C`.
pub type PointerOf<C> = <C as CursorTraits>::Pointer;
/// The reference type of cursor `C`.
pub type ReferenceOf<'a, C> = <C as CursorTraits>::Reference<'a>;

/// Moves a pointer cursor by `n` elements. Zero-sized elements all live at the same address, so
/// pointer cursors over them count by address instead, one byte per element.
pub(crate) const fn offset_ptr<T>(ptr: *const T, n: isize) -> *const T {
    match size_of::<T>() {
        0 => ptr.wrapping_byte_offset(n),
        _ => ptr.wrapping_offset(n),
    }
}

/// As [`offset_ptr`], for mutable pointers.
pub(crate) const fn offset_mut_ptr<T>(ptr: *mut T, n: isize) -> *mut T {
    offset_ptr(ptr.cast_const(), n).cast_mut()
}

/// Counts elements between two pointer cursors. See [`offset_ptr`].
fn element_distance<T>(to: *const T, from: *const T) -> isize {
    let bytes = (to.addr() as isize).wrapping_sub(from.addr() as isize);
    match size_of::<T>() {
        0 => bytes,
        size => bytes / size as isize,
    }
}

/// The address that elements are actually read from and written to. For zero-sized elements a
/// pointer cursor's address is a count, so accesses go through an aligned dangling pointer.
const fn element_ptr<T>(ptr: *const T) -> *const T {
    match size_of::<T>() {
        0 => NonNull::<T>::dangling().as_ptr().cast_const(),
        _ => ptr,
    }
}

impl<T> Cursor for *const T {
    type Category = RandomAccessTag;
    type Item = T;

    fn step(&mut self) {
        *self = offset_ptr(*self, 1);
    }

    fn as_ptr(&self) -> *const T {
        element_ptr(*self)
    }

    unsafe fn transfer_n<O, Op>(self, n: usize, result: O) -> O
    where
        O: OutputCursor<Item = T>,
        Op: Transfer<T>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { result.transfer_from_raw::<Op>(self.as_ptr(), n) }
    }
}

impl<T> BidirectionalCursor for *const T {
    fn step_back(&mut self) {
        *self = offset_ptr(*self, -1);
    }

    unsafe fn transfer_backward_n<O, Op>(self, n: usize, result: O) -> O
    where
        O: BidirectionalOutputCursor<Item = T>,
        Op: Transfer<T>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { result.transfer_backward_from_raw::<Op>(self.as_ptr(), n) }
    }
}

impl<T> RandomAccessCursor for *const T {
    fn offset(&self, n: isize) -> Self {
        offset_ptr(*self, n)
    }

    fn distance_from(&self, origin: &Self) -> isize {
        element_distance(*self, *origin)
    }
}

impl<T> Cursor for *mut T {
    type Category = RandomAccessTag;
    type Item = T;

    fn step(&mut self) {
        *self = offset_mut_ptr(*self, 1);
    }

    fn as_ptr(&self) -> *const T {
        element_ptr(self.cast_const())
    }

    unsafe fn transfer_n<O, Op>(self, n: usize, result: O) -> O
    where
        O: OutputCursor<Item = T>,
        Op: Transfer<T>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { result.transfer_from_raw::<Op>(self.as_ptr(), n) }
    }
}

impl<T> OutputCursor for *mut T {
    fn as_mut_ptr(&self) -> *mut T {
        element_ptr(self.cast_const()).cast_mut()
    }

    unsafe fn transfer_from_raw<Op>(self, src: *const T, n: usize) -> Self
    where
        Op: Transfer<T>,
    {
        // SAFETY: Both ends are contiguous and the caller guarantees that they are valid for n
        // elements.
        unsafe { Op::bulk(src, self.as_mut_ptr(), n) };
        offset_mut_ptr(self, n as isize)
    }

    unsafe fn fill_n_with<Op>(self, n: usize, value: &T) -> Self
    where
        Op: Fill<T>,
    {
        // SAFETY: The caller guarantees that self is valid for n contiguous elements.
        unsafe { Op::bulk(self.as_mut_ptr(), n, value) };
        offset_mut_ptr(self, n as isize)
    }
}

impl<T> BidirectionalOutputCursor for *mut T {
    unsafe fn transfer_backward_from_raw<Op>(self, src_last: *const T, n: usize) -> Self
    where
        Op: Transfer<T>,
    {
        // SAFETY: Both ends are contiguous and the caller guarantees that they are valid for the n
        // elements before them.
        unsafe { Op::bulk_backward(src_last, self.as_mut_ptr(), n) };
        offset_mut_ptr(self, -(n as isize))
    }
}

impl<T> BidirectionalCursor for *mut T {
    fn step_back(&mut self) {
        *self = offset_mut_ptr(*self, -1);
    }

    unsafe fn transfer_backward_n<O, Op>(self, n: usize, result: O) -> O
    where
        O: BidirectionalOutputCursor<Item = T>,
        Op: Transfer<T>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { result.transfer_backward_from_raw::<Op>(self.as_ptr(), n) }
    }
}

impl<T> RandomAccessCursor for *mut T {
    fn offset(&self, n: isize) -> Self {
        offset_mut_ptr(*self, n)
    }

    fn distance_from(&self, origin: &Self) -> isize {
        element_distance(self.cast_const(), origin.cast_const())
    }
}
