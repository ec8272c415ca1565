use std::borrow::{Borrow, BorrowMut};
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::algorithm;
use crate::cursor::{self, Cursor, Reverse};
use crate::memory::{self, RawBuffer};
use crate::uninitialized::{
    uninitialized_copy_n, uninitialized_fill_n, uninitialized_fill_n_with,
    uninitialized_move_backward_n, uninitialized_move_n, uninitialized_try_fill_n_with,
};
use crate::util::error::{
    CapacityOverflow, IndexOutOfBounds, InsertError, InvalidRange, ReserveError,
};
use crate::util::result::{ReserveResultExtension, ResultExtension, raise_reserve_error};

/// A variable size contiguous collection, modelled on `std::vector` from C++.
///
/// A Vector is a [`RawBuffer`] and a length: the first `len` slots of the buffer hold live
/// elements and the rest is raw storage. Any operation that runs out of room moves everything
/// into a new buffer, so it is all-or-nothing: if constructing a new element fails (by panicking,
/// or by returning an [`Err`] from a fallible constructor) the Vector is left with exactly the
/// buffer, length and elements it had before.
///
/// Capacity grows geometrically. When more room is needed, the new capacity is twice the old one
/// or the size required, whichever is larger, and jumps straight to [`Vector::max_size`] once the
/// capacity has reached half of it.
///
/// # Cursors
/// Alongside borrowed iteration through [`Deref<Target = [T]>`](Deref), a Vector hands out raw
/// [cursors](crate::cursor) with [`begin`](Vector::begin), [`end`](Vector::end) and friends. These
/// don't borrow the Vector, so they are invalidated by anything that reallocates or moves
/// elements: growth, [`clear`](Vector::clear), assignment, insertion and erasure.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `insert_n` | `O(n-i+m)` |
/// | `erase` | `O(n-i)` |
/// | `assign_n` | `O(n+m)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push_back` will take
/// `O(n)`.
///
/// \** If the Vector has enough capacity already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

/// A failure while making room for new elements or while constructing them.
enum SpliceError<E> {
    Reserve(ReserveError),
    Element(E),
}

impl<E> From<ReserveError> for SpliceError<E> {
    fn from(value: ReserveError) -> Self {
        SpliceError::Reserve(value)
    }
}

/// Moves a shifted tail back into place if constructing the elements in front of it fails.
struct TailGuard<T> {
    base: *mut T,
    index: usize,
    count: usize,
    tail: usize,
}

impl<T> Drop for TailGuard<T> {
    fn drop(&mut self) {
        // SAFETY: The tail was relocated from index to index + count and the gap is raw storage
        // again, because failed construction leaves nothing behind.
        unsafe {
            uninitialized_move_n(
                self.base.add(self.index + self.count),
                self.tail,
                self.base.add(self.index),
            );
        }
    }
}

/// Closes the gap left by erased elements, even if dropping one of them panics.
struct EraseGuard<'a, T> {
    vec: &'a mut Vector<T>,
    hole: usize,
    tail: usize,
    tail_len: usize,
}

impl<T> Drop for EraseGuard<'_, T> {
    fn drop(&mut self) {
        let base = self.vec.as_mut_ptr();
        // SAFETY: Everything in [hole, tail) has been destroyed, so the tail can be relocated over
        // it.
        unsafe { uninitialized_move_n(base.add(self.tail), self.tail_len, base.add(self.hole)) };
        self.vec.len = self.hole + self.tail_len;
    }
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if `cap` exceeds [`Vector::max_size`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: RawBuffer::<T>::with_cap(cap),
            len: 0,
        }
    }

    /// Creates a Vector of `len` default values, with exactly that capacity.
    ///
    /// # Panics
    /// Panics if `len` exceeds [`Vector::max_size`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<String> = Vector::with_len(2);
    /// assert_eq!(vec, ["", ""]);
    /// ```
    pub fn with_len(len: usize) -> Vector<T>
    where
        T: Default,
    {
        Vector::from_fn(len, T::default)
    }

    /// Creates a Vector of `len` clones of `value`, with exactly that capacity.
    ///
    /// # Panics
    /// Panics if `len` exceeds [`Vector::max_size`], or if cloning panics.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::from_elem(3, &7_u8);
    /// assert_eq!(vec, [7, 7, 7]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn from_elem(len: usize, value: &T) -> Vector<T>
    where
        T: Clone,
    {
        let mut vec = Vector::with_cap(len);
        // SAFETY: vec has room for exactly len elements. If cloning panics, the clones are dropped
        // and vec is dropped with length 0.
        unsafe { uninitialized_fill_n(vec.as_mut_ptr(), len, value) };
        vec.len = len;
        vec
    }

    /// Creates a Vector of `len` values produced by `f`, with exactly that capacity.
    ///
    /// # Panics
    /// Panics if `len` exceeds [`Vector::max_size`], or if `f` panics.
    pub fn from_fn<F: FnMut() -> T>(len: usize, f: F) -> Vector<T> {
        let mut vec = Vector::with_cap(len);
        // SAFETY: vec has room for exactly len elements. If f panics, the constructed ones are
        // dropped and vec is dropped with length 0.
        unsafe { uninitialized_fill_n_with(vec.as_mut_ptr(), len, f) };
        vec.len = len;
        vec
    }

    /// Creates a Vector with clones of the elements of `[first, last)`.
    ///
    /// Forward cursors are measured first so that the Vector is allocated once, with exactly the
    /// capacity needed. Input cursors are read once and pushed one element at a time.
    ///
    /// # Safety
    /// `[first, last)` must be a valid range of live values.
    ///
    /// # Panics
    /// Panics if the range has more than [`Vector::max_size`] elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let data = [3, 1, 4, 1, 5];
    /// // SAFETY: The range covers the middle of data.
    /// let vec = unsafe { Vector::from_range(data.as_ptr().wrapping_add(1), data.as_ptr().wrapping_add(4)) };
    /// assert_eq!(vec, [1, 4, 1]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub unsafe fn from_range<I>(mut first: I, last: I) -> Vector<T>
    where
        I: Cursor<Item = T>,
        T: Clone,
    {
        match cursor::try_distance(&first, &last) {
            Some(n) => {
                let mut vec = Vector::with_cap(n);
                // SAFETY: vec has room for n elements, and the caller guarantees that the source
                // is valid for n.
                unsafe { uninitialized_copy_n(first, n, vec.as_mut_ptr()) };
                vec.len = n;
                vec
            }
            None => {
                let mut vec = Vector::new();
                while first != last {
                    // SAFETY: first is within the source range.
                    vec.push_back_clone(unsafe { &*first.as_ptr() });
                    first.step();
                }
                vec
            }
        }
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::from([1_u8, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push_back(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Zero-sized types never need storage, so their
    /// capacity is always [`usize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the largest number of elements that a Vector of `T` can hold.
    pub const fn max_size(&self) -> usize {
        memory::max_size::<T>()
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error if there is
    /// no such element.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::from(['a', 'b']);
    /// assert_eq!(vec.at(1), Ok(&'b'));
    /// assert!(vec.at(2).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`, or an [`IndexOutOfBounds`] error if
    /// there is no such element.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns the first element, or [`None`] if the Vector is empty.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns the first element mutably, or [`None`] if the Vector is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns the last element, or [`None`] if the Vector is empty.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns the last element mutably, or [`None`] if the Vector is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Returns a pointer to the start of the Vector's storage. The pointer is valid for reads of
    /// `len` elements until the Vector reallocates.
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast_const()
    }

    /// Returns a mutable pointer to the start of the Vector's storage.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// Returns a cursor to the first element.
    pub const fn begin(&self) -> *const T {
        self.as_ptr()
    }

    /// Returns a cursor one past the last element. For zero-sized elements this is `len` bytes
    /// past [`Vector::begin`], so that the two still measure the length.
    pub const fn end(&self) -> *const T {
        cursor::offset_ptr(self.as_ptr(), self.len as isize)
    }

    /// Returns a writable cursor to the first element.
    pub const fn begin_mut(&mut self) -> *mut T {
        self.as_mut_ptr()
    }

    /// Returns a writable cursor one past the last element.
    pub const fn end_mut(&mut self) -> *mut T {
        let len = self.len;
        cursor::offset_mut_ptr(self.as_mut_ptr(), len as isize)
    }

    /// Returns a reverse cursor to the last element.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// # use standard_containers::cursor::Cursor;
    /// let vec = Vector::from([1, 2, 3]);
    /// let mut it = vec.rbegin();
    /// let mut seen = Vector::new();
    /// while it != vec.rend() {
    ///     // SAFETY: it is within the reversed range of vec.
    ///     seen.push_back(unsafe { *it.as_ptr() });
    ///     it.step();
    /// }
    /// assert_eq!(seen, [3, 2, 1]);
    /// ```
    pub const fn rbegin(&self) -> Reverse<*const T> {
        Reverse::new(self.end())
    }

    /// Returns a reverse cursor one before the first element.
    pub const fn rend(&self) -> Reverse<*const T> {
        Reverse::new(self.begin())
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the Vector would exceed [`Vector::max_size`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.emplace_back(|| value);
    }

    /// Pushes a clone of `value` onto the end of the Vector. If cloning panics, the Vector is left
    /// as it was, capacity included.
    ///
    /// # Panics
    /// Panics if the Vector would exceed [`Vector::max_size`], or if cloning panics.
    pub fn push_back_clone(&mut self, value: &T)
    where
        T: Clone,
    {
        self.emplace_back(|| value.clone());
    }

    /// Constructs a new element at the end of the Vector with `f`, returning a reference to it. If
    /// `f` panics, the Vector is left as it was, capacity included.
    ///
    /// # Panics
    /// Panics if the Vector would exceed [`Vector::max_size`], or if `f` panics.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([String::from("a")]);
    /// vec.emplace_back(|| "b".repeat(2)).push('!');
    /// assert_eq!(vec, ["a", "bb!"]);
    /// ```
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        let index = self.len;
        self.emplace(index, f)
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// for i in 1_u8..=3 {
    ///     // SAFETY: We know that vec has enough capacity to store all three values.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub const unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.cap(), "pushed past the capacity");
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, so the slot at len is raw storage within the buffer.
        unsafe { memory::construct(self.buf.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0. Popping an empty Vector does nothing.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2, 3, 4]);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop_back(), Some(i));
    /// }
    /// assert_eq!(vec.pop_back(), None);
    /// ```
    pub const fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: The slot at the new len held a live value, which is now outside of the live
            // range and owned by the returned value instead.
            let value = unsafe { self.buf.as_ptr().add(self.len).read() };
            Some(value)
        }
    }

    /// Inserts the provided value at the given index, moving later elements back and growing if
    /// necessary. Returns the index of the new element.
    ///
    /// # Panics
    /// Panics if `index > len`, or if the Vector would exceed [`Vector::max_size`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// assert_eq!(vec.insert(5, 300), 5);
    /// assert_eq!(vec, [0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.emplace(index, || value);
        index
    }

    /// Inserts the provided value at the given index, returning an [`Err`] rather than panicking if
    /// the index is out of bounds or the Vector can't grow. The Vector is unchanged on failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, InsertError> {
        self.check_insert_index(index)?;
        self.splice_with::<ReserveError, _>(index, 1, |dst| {
            // SAFETY: splice_with provides one slot of raw storage.
            unsafe { memory::construct(dst, value) };
            Ok(())
        })?;
        Ok(index)
    }

    /// Inserts `n` clones of `value` at the given index, returning the index of the first one.
    ///
    /// # Panics
    /// Panics if `index > len`, if the Vector would exceed [`Vector::max_size`], or if cloning
    /// panics. In the last case the Vector is left as it was.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.insert_n(1, 3, &0);
    /// assert_eq!(vec, [1, 0, 0, 0, 2]);
    /// ```
    pub fn insert_n(&mut self, index: usize, n: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.check_insert_index(index).throw();
        self.splice_with::<ReserveError, _>(index, n, |dst| {
            // SAFETY: splice_with provides n slots of raw storage.
            unsafe { uninitialized_fill_n(dst, n, value) };
            Ok(())
        })
        .handle_alloc();
        index
    }

    /// Inserts clones of the elements of `values` at the given index, returning the index of the
    /// first one.
    ///
    /// # Panics
    /// Panics if `index > len`, if the Vector would exceed [`Vector::max_size`], or if cloning
    /// panics. In the last case the Vector is left as it was.
    pub fn insert_slice(&mut self, index: usize, values: &[T]) -> usize
    where
        T: Clone,
    {
        self.check_insert_index(index).throw();
        self.splice_with::<ReserveError, _>(index, values.len(), |dst| {
            // SAFETY: splice_with provides a slot of raw storage for every element of values,
            // which can't be part of this Vector.
            unsafe { uninitialized_copy_n(values.as_ptr(), values.len(), dst) };
            Ok(())
        })
        .handle_alloc();
        index
    }

    /// Inserts clones of the elements of `[first, last)` at the given index, returning the index
    /// of the first one.
    ///
    /// # Safety
    /// `[first, last)` must be a valid range of live values, which must not be part of this
    /// Vector.
    ///
    /// # Panics
    /// Panics if `index > len`, if the Vector would exceed [`Vector::max_size`], or if cloning
    /// panics.
    pub unsafe fn insert_range<I>(&mut self, index: usize, mut first: I, last: I) -> usize
    where
        I: Cursor<Item = T>,
        T: Clone,
    {
        self.check_insert_index(index).throw();

        match cursor::try_distance(&first, &last) {
            Some(n) => self
                .splice_with::<ReserveError, _>(index, n, |dst| {
                    // SAFETY: splice_with provides n slots of raw storage and the caller
                    // guarantees that the source is valid for n elements.
                    unsafe { uninitialized_copy_n(first, n, dst) };
                    Ok(())
                })
                .handle_alloc(),
            None => {
                let mut at = index;
                while first != last {
                    // SAFETY: first is within the source range.
                    let value = unsafe { (*first.as_ptr()).clone() };
                    self.insert(at, value);
                    at += 1;
                    first.step();
                }
            }
        }
        index
    }

    /// Constructs a new element at the given index with `f`, returning a reference to it. If `f`
    /// panics, the Vector is left as it was.
    ///
    /// # Panics
    /// Panics if `index > len`, if the Vector would exceed [`Vector::max_size`], or if `f` panics.
    pub fn emplace<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> &mut T {
        self.check_insert_index(index).throw();
        self.splice_with::<ReserveError, _>(index, 1, |dst| {
            // SAFETY: splice_with provides one slot of raw storage.
            unsafe { memory::construct_with(dst, f) };
            Ok(())
        })
        .handle_alloc();
        // SAFETY: The element at index has just been constructed.
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.erase(1), 'e');
    /// assert_eq!(vec.erase(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    pub fn erase(&mut self, index: usize) -> T {
        self.check_index(index).throw();

        let base = self.as_mut_ptr();
        let tail = self.len - index - 1;
        // SAFETY: index is live. Reading it leaves a hole, which the tail is relocated over.
        let value = unsafe {
            let value = base.add(index).read();
            uninitialized_move_n(base.add(index + 1), tail, base.add(index));
            value
        };
        self.len -= 1;
        value
    }

    /// Drops the elements with indices in `[first, last)`, moving all following values to fill in
    /// the gap. Returns `first`, which is now the index of the element after the erased ones.
    ///
    /// # Panics
    /// Panics if `first > last` or `last > len`.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.erase_range(1, 4), 1);
    /// assert_eq!(vec, [0, 4, 5]);
    /// ```
    pub fn erase_range(&mut self, first: usize, last: usize) -> usize {
        if last > self.len {
            Err(IndexOutOfBounds {
                index: last,
                len: self.len,
            })
            .throw()
        }
        if first > last {
            Err(InvalidRange { first, last }).throw()
        }

        let tail_len = self.len - last;
        // The erased elements and the tail belong to the guard until the gap is closed.
        self.len = first;
        let guard = EraseGuard {
            vec: self,
            hole: first,
            tail: last,
            tail_len,
        };

        let base = guard.vec.as_mut_ptr();
        // SAFETY: [first, last) was live and is now outside of the Vector's length.
        unsafe { memory::destroy_n(base.add(first), last - first) };

        drop(guard);
        first
    }

    /// Replaces the contents of the Vector with `n` clones of `value`.
    ///
    /// Existing elements are assigned over and the Vector only reallocates if `n` exceeds its
    /// capacity, in which case the new elements are all constructed before the old ones are
    /// dropped.
    ///
    /// # Panics
    /// Panics if `n` exceeds [`Vector::max_size`], or if cloning panics.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.assign_n(5, &9);
    /// assert_eq!(vec, [9; 5]);
    /// vec.assign_n(2, &4);
    /// assert_eq!(vec, [4, 4]);
    /// assert_eq!(vec.cap(), 6);
    /// ```
    pub fn assign_n(&mut self, n: usize, value: &T)
    where
        T: Clone,
    {
        self.assign_counted(
            n,
            // SAFETY: assign_counted only asks for live slots and raw slots it owns.
            |dst, k| unsafe {
                algorithm::fill_n(dst, k, value);
            },
            // SAFETY: As above.
            |dst, _, k| unsafe {
                uninitialized_fill_n(dst, k, value);
            },
        )
        .handle_alloc();
    }

    /// Replaces the contents of the Vector with clones of the elements of `values`. See
    /// [`Vector::assign_n`].
    ///
    /// # Panics
    /// Panics if `values` is longer than [`Vector::max_size`], or if cloning panics.
    pub fn assign_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        let src = values.as_ptr();
        self.assign_counted(
            values.len(),
            // SAFETY: As for assign_n. The source is a separate borrow, so it can't overlap.
            |dst, k| unsafe {
                algorithm::copy_n(src, k, dst);
            },
            // SAFETY: As above.
            |dst, skip, k| unsafe {
                uninitialized_copy_n(src.add(skip), k, dst);
            },
        )
        .handle_alloc();
    }

    /// Replaces the contents of the Vector with clones of the elements of `[first, last)`. See
    /// [`Vector::assign_n`].
    ///
    /// # Safety
    /// `[first, last)` must be a valid range of live values, which must not be part of this
    /// Vector.
    ///
    /// # Panics
    /// Panics if the range is longer than [`Vector::max_size`], or if cloning panics.
    pub unsafe fn assign_range<I>(&mut self, mut first: I, last: I)
    where
        I: Cursor<Item = T>,
        T: Clone,
    {
        if let Some(n) = cursor::try_distance(&first, &last) {
            let rest = first.clone();
            self.assign_counted(
                n,
                // SAFETY: As for assign_slice, with the source guaranteed by the caller.
                |dst, k| unsafe {
                    algorithm::copy_n(first, k, dst);
                },
                // SAFETY: As above.
                |dst, skip, k| unsafe {
                    uninitialized_copy_n(cursor::next(rest, skip as isize), k, dst);
                },
            )
            .handle_alloc();
        } else {
            let mut i = 0;
            while first != last && i < self.len {
                // SAFETY: first is within the source range.
                self[i].clone_from(unsafe { &*first.as_ptr() });
                i += 1;
                first.step();
            }
            self.truncate(i);
            while first != last {
                // SAFETY: As above.
                self.push_back_clone(unsafe { &*first.as_ptr() });
                first.step();
            }
        }
    }

    /// Ensures that the Vector has capacity for at least `new_cap` elements, reallocating to
    /// exactly `new_cap` if it doesn't. The length and elements are unchanged.
    ///
    /// # Panics
    /// Panics if `new_cap` exceeds [`Vector::max_size`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.reserve(100);
    /// assert_eq!(vec.cap(), 100);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 2);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).handle_alloc()
    }

    /// Ensures that the Vector has capacity for at least `new_cap` elements, returning an [`Err`]
    /// rather than panicking or aborting if the storage can't be acquired. The Vector is unchanged
    /// on failure.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if new_cap <= self.cap() {
            return Ok(());
        }
        if new_cap > self.max_size() {
            Err(CapacityOverflow)?
        }

        self.try_realloc(new_cap)
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(10);
    /// vec.push_back(1);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.len < self.cap() && size_of::<T>() != 0 {
            self.try_realloc(self.len).handle_alloc()
        }
    }

    /// Drops all elements, keeping the capacity.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements from `len` onwards, keeping the capacity. Does nothing if the Vector is
    /// already no longer than `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let old_len = self.len;
        // Shorten first, so that a panicking drop can't lead to a double drop.
        self.len = len;
        // SAFETY: [len, old_len) was live and is now outside of the Vector's length.
        unsafe { memory::destroy_n(self.as_mut_ptr().add(len), old_len - len) };
    }

    /// Resizes the Vector to `len` elements, dropping elements from the end or pushing clones of
    /// `value`.
    ///
    /// # Panics
    /// Panics if `len` exceeds [`Vector::max_size`], or if cloning panics. In the last case the
    /// Vector is left as it was.
    pub fn resize(&mut self, len: usize, value: &T)
    where
        T: Clone,
    {
        if len <= self.len {
            self.truncate(len);
        } else {
            self.insert_n(self.len, len - self.len, value);
        }
    }

    /// Resizes the Vector to `len` elements, dropping elements from the end or pushing values
    /// produced by `f`.
    ///
    /// # Panics
    /// Panics if `len` exceeds [`Vector::max_size`], or if `f` panics. In the last case the
    /// Vector is left as it was.
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, mut f: F) {
        let result = self.try_resize_with(len, || Ok::<_, std::convert::Infallible>(f()));
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Resizes the Vector to `len` elements, dropping elements from the end or pushing values
    /// produced by the fallible constructor `f`. If `f` returns an [`Err`], the error is returned
    /// and the Vector is left as it was, capacity included.
    ///
    /// # Panics
    /// Panics if `len` exceeds [`Vector::max_size`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// let mut next = 2;
    /// let result = vec.try_resize_with(10, || {
    ///     next += 1;
    ///     if next < 5 { Ok(next) } else { Err("too big") }
    /// });
    /// assert_eq!(result, Err("too big"));
    /// assert_eq!(vec, [1, 2]);
    /// assert_eq!(vec.cap(), 2);
    /// ```
    pub fn try_resize_with<E, F>(&mut self, len: usize, f: F) -> Result<(), E>
    where
        F: FnMut() -> Result<T, E>,
    {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }

        let count = len - self.len;
        let result = self.splice_with(self.len, count, |dst| {
            // SAFETY: splice_with provides count slots of raw storage.
            unsafe { uninitialized_try_fill_n_with(dst, count, f) }
                .map(drop)
                .map_err(SpliceError::Element)
        });

        match result {
            Ok(()) => Ok(()),
            Err(SpliceError::Element(error)) => Err(error),
            Err(SpliceError::Reserve(error)) => raise_reserve_error(error),
        }
    }

    /// Appends clones of the elements of `values` to the end of the Vector.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.insert_slice(self.len, values);
    }

    /// Swaps the contents of two Vectors, without moving or copying any elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut a = Vector::from([1, 2]);
    /// let mut b = Vector::from([3]);
    /// a.swap(&mut b);
    /// assert_eq!(a, [3]);
    /// assert_eq!(b, [1, 2]);
    /// ```
    pub const fn swap(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Decomposes the Vector into its pointer, length and capacity without dropping anything.
    pub fn into_parts(self) -> (NonNull<T>, usize, usize) {
        let this = ManuallyDrop::new(self);
        (this.buf.ptr, this.len, this.buf.cap)
    }

    /// Recreates a Vector from the parts returned by [`Vector::into_parts`].
    ///
    /// # Safety
    /// The parts must describe a buffer acquired from [`Allocator`](memory::Allocator) with `cap`
    /// elements, the first `len` of which are live, and which is owned by nothing else.
    pub const unsafe fn from_parts(ptr: NonNull<T>, len: usize, cap: usize) -> Vector<T> {
        Vector {
            // SAFETY: Upheld by the caller.
            buf: unsafe { RawBuffer::from_parts(ptr, cap) },
            len,
        }
    }

    /// Returns the capacity to grow to when `requested` elements are needed.
    pub(crate) fn recommended_cap(&self, requested: usize) -> Result<usize, CapacityOverflow> {
        let max = self.max_size();
        if requested > max {
            return Err(CapacityOverflow);
        }

        let cap = self.cap();
        if cap >= max / 2 {
            Ok(max)
        } else {
            Ok(cmp::max(cap * 2, requested))
        }
    }

    /// Relocates the live elements into a new buffer with exactly `new_cap` slots. The old buffer
    /// is only released once the new one has been acquired.
    pub(crate) fn try_realloc(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        debug_assert!(new_cap >= self.len);
        if size_of::<T>() == 0 {
            return Ok(());
        }

        let new_buf = RawBuffer::<T>::try_with_cap(new_cap)?;
        log::trace!(
            "reallocating Vector of {} from {} to {new_cap} elements",
            std::any::type_name::<T>(),
            self.cap(),
        );

        // SAFETY: The new buffer has room for every live element. Relocation can't fail, and the
        // old buffer is left as raw storage to be released.
        unsafe { uninitialized_move_n(self.as_ptr(), self.len, new_buf.as_ptr()) };
        self.buf = new_buf;
        Ok(())
    }

    /// Opens a gap of `count` raw slots at `index` and fills it with `construct`, which must
    /// either construct all `count` elements or leave the gap raw and fail.
    ///
    /// If the Vector has room, the tail is relocated back in place and relocated forward again if
    /// construction fails. Otherwise the new elements are constructed in a new buffer first, and
    /// the old elements are only relocated around them once that has succeeded. Either way, a
    /// failure leaves the Vector exactly as it was.
    fn splice_with<E, F>(&mut self, index: usize, count: usize, construct: F) -> Result<(), E>
    where
        E: From<ReserveError>,
        F: FnOnce(*mut T) -> Result<(), E>,
    {
        debug_assert!(index <= self.len);
        if count == 0 {
            return Ok(());
        }

        let new_len = self
            .len
            .checked_add(count)
            .ok_or(ReserveError::CapacityOverflow(CapacityOverflow))?;
        let tail = self.len - index;

        if new_len <= self.cap() {
            let base = self.as_mut_ptr();
            // SAFETY: The Vector has room for new_len elements, so relocating the tail back by
            // count stays within the buffer.
            unsafe { uninitialized_move_backward_n(base.add(self.len), tail, base.add(new_len)) };

            let guard = TailGuard {
                base,
                index,
                count,
                tail,
            };
            // SAFETY: [index, index + count) is raw storage within the buffer.
            construct(unsafe { base.add(index) })?;
            mem::forget(guard);
        } else {
            let new_cap = self.recommended_cap(new_len).map_err(ReserveError::from)?;
            let new_buf = RawBuffer::<T>::try_with_cap(new_cap)?;
            let dst = new_buf.as_ptr();

            // If this fails, new_buf is released and the Vector hasn't been touched.
            // SAFETY: new_buf has room for new_len elements.
            construct(unsafe { dst.add(index) })?;

            log::trace!(
                "growing Vector of {} from {} to {new_cap} elements",
                std::any::type_name::<T>(),
                self.cap(),
            );

            let src = self.as_ptr();
            // SAFETY: Every live element is relocated exactly once, around the new ones. The old
            // buffer is left as raw storage to be released.
            unsafe {
                uninitialized_move_n(src, index, dst);
                uninitialized_move_n(src.add(index), tail, dst.add(index + count));
            }
            self.buf = new_buf;
        }

        self.len = new_len;
        Ok(())
    }

    /// Replaces the contents with `n` new elements. `overwrite(dst, k)` assigns the first `k` new
    /// elements over live ones at `dst`; `build(dst, skip, k)` constructs new elements
    /// `skip..skip + k` in raw storage at `dst`.
    fn assign_counted<O, B>(&mut self, n: usize, overwrite: O, build: B) -> Result<(), ReserveError>
    where
        O: FnOnce(*mut T, usize),
        B: FnOnce(*mut T, usize, usize),
    {
        if n > self.cap() {
            let new_cap = self.recommended_cap(n)?;
            let new_buf = RawBuffer::<T>::try_with_cap(new_cap)?;
            build(new_buf.as_ptr(), 0, n);

            let old = mem::replace(self, Vector { buf: new_buf, len: n });
            drop(old);
        } else if n <= self.len {
            overwrite(self.as_mut_ptr(), n);
            self.truncate(n);
        } else {
            let len = self.len;
            let base = self.as_mut_ptr();
            overwrite(base, len);
            build(base.wrapping_add(len), len, n - len);
            self.len = n;
        }
        Ok(())
    }

    /// Checks that the provided index refers to a live element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that the provided index is a valid insertion point, which includes `len`.
    pub(crate) const fn check_insert_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        <Self as Extend<T>>::extend_reserve(self, iter.size_hint().0);
        for item in iter {
            self.push_back(item);
        }
    }

    fn extend_one(&mut self, item: T) {
        self.push_back(item);
    }

    fn extend_reserve(&mut self, additional: usize) {
        let required = self.len.checked_add(additional).ok_or(CapacityOverflow).throw();
        if required > self.cap() {
            let new_cap = self.recommended_cap(required).throw();
            self.reserve(new_cap);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push_back(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let value = ManuallyDrop::new(value);
        let mut vec = Vector::with_cap(N);
        // SAFETY: vec has room for N elements, and the array is never dropped, so each value is
        // only owned by vec afterwards.
        unsafe { uninitialized_move_n(value.as_ptr(), N, vec.as_mut_ptr()) };
        vec.len = N;
        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::with_cap(value.len());
        // SAFETY: vec has room for every element of value.
        unsafe { uninitialized_copy_n(value.as_ptr(), value.len(), vec.as_mut_ptr()) };
        vec.len = value.len();
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and dropped exactly once, here. The
        // buffer itself is released when self.buf is dropped.
        unsafe { memory::destroy_n(self.buf.as_ptr(), self.len) }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker enforces that self isn't accessed while the
        // slice is alive.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    /// Clones the Vector into a new one with capacity equal to its length.
    fn clone(&self) -> Self {
        Vector::from(&**self)
    }

    /// Assigns over the existing elements where possible, reallocating only if `source` doesn't
    /// fit.
    fn clone_from(&mut self, source: &Self) {
        self.assign_slice(source);
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vector<U>> for Vector<T> {
    fn eq(&self, other: &Vector<U>) -> bool {
        **self == **other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Vector<T> {
    fn eq(&self, other: &[U]) -> bool {
        **self == *other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
