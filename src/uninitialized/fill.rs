use std::convert::Infallible;
use std::mem;

use super::InitGuard;
use crate::algorithm::specialize::SpecFill;
use crate::algorithm::strategy::{Fill, Undo};
use crate::cursor::{OutputCursor, Traversal};
use crate::memory;

/// Constructs a clone of the fill value in raw storage.
#[doc(hidden)]
#[derive(Debug)]
pub struct FillConstruct;

impl<T> Undo<T> for FillConstruct {
    const UNDOES: bool = mem::needs_drop::<T>();

    unsafe fn undo(dst: *mut T) {
        // SAFETY: Upheld by the caller.
        unsafe { memory::destroy(dst) }
    }
}

impl<T: Clone> Fill<T> for FillConstruct {
    unsafe fn one(value: &T, dst: *mut T) {
        // SAFETY: The caller guarantees that dst is raw storage.
        unsafe { memory::construct(dst, value.clone()) }
    }

    unsafe fn bulk(dst: *mut T, n: usize, value: &T) {
        // SAFETY: Upheld by the caller.
        unsafe { T::fill_construct_n(dst, n, value) }
    }
}

/// Undoes construction by destroying the value, for operations that construct from something
/// other than a source range.
#[derive(Debug)]
pub(crate) struct Destroy;

impl<T> Undo<T> for Destroy {
    const UNDOES: bool = mem::needs_drop::<T>();

    unsafe fn undo(dst: *mut T) {
        // SAFETY: Upheld by the caller.
        unsafe { memory::destroy(dst) }
    }
}

/// Constructs a clone of `value` in every slot of the raw storage `[first, last)`.
///
/// If a clone panics, the clones already constructed are dropped before the panic continues.
///
/// # Safety
/// `[first, last)` must be a valid range of raw storage.
pub unsafe fn uninitialized_fill<O>(first: O, last: O, value: &O::Item)
where
    O: OutputCursor,
    O::Item: Clone,
{
    // SAFETY: Upheld by the caller.
    unsafe { O::Category::fill::<FillConstruct>(first, last, value) }
}

/// Constructs a clone of `value` in the `n` slots of raw storage from `first`, returning the
/// position after the last one. See [`uninitialized_fill`].
///
/// # Safety
/// `first` must be followed by at least `n` slots of raw storage.
///
/// # Examples
/// ```
/// # use std::mem::MaybeUninit;
/// # use standard_containers::uninitialized::uninitialized_fill_n;
/// let mut raw = [MaybeUninit::<u8>::uninit(); 4];
/// // SAFETY: raw has room for 4 bytes, which are all initialized before being read.
/// let bytes = unsafe {
///     uninitialized_fill_n(raw.as_mut_ptr().cast::<u8>(), 4, &b'z');
///     raw.map(|b| b.assume_init())
/// };
/// assert_eq!(&bytes, b"zzzz");
/// ```
pub unsafe fn uninitialized_fill_n<O>(first: O, n: usize, value: &O::Item) -> O
where
    O: OutputCursor,
    O::Item: Clone,
{
    if n == 0 {
        return first;
    }
    // SAFETY: Upheld by the caller.
    unsafe { first.fill_n_with::<FillConstruct>(n, value) }
}

/// Constructs `n` values produced by `f` in the raw storage from `first`, returning the position
/// after the last one.
///
/// If `f` panics, the values already constructed are dropped before the panic continues.
///
/// # Safety
/// `first` must be followed by at least `n` slots of raw storage.
pub unsafe fn uninitialized_fill_n_with<O, F>(first: O, n: usize, mut f: F) -> O
where
    O: OutputCursor,
    F: FnMut() -> O::Item,
{
    // SAFETY: Upheld by the caller.
    let result = unsafe { uninitialized_try_fill_n_with(first, n, || Ok::<_, Infallible>(f())) };
    match result {
        Ok(end) => end,
        Err(never) => match never {},
    }
}

/// Constructs `n` values produced by `f` in the raw storage from `first`, returning the position
/// after the last one.
///
/// If `f` returns an [`Err`] (or panics), the values already constructed are dropped and the
/// error is returned, leaving the destination as raw storage.
///
/// # Safety
/// `first` must be followed by at least `n` slots of raw storage.
///
/// # Examples
/// ```
/// # use std::mem::MaybeUninit;
/// # use standard_containers::uninitialized::uninitialized_try_fill_n_with;
/// let mut raw = [const { MaybeUninit::<String>::uninit() }; 3];
/// let mut next = 0;
/// // SAFETY: raw has room for 3 Strings, and the failed fill leaves it raw again.
/// let result = unsafe {
///     uninitialized_try_fill_n_with(raw.as_mut_ptr().cast::<String>(), 3, || {
///         next += 1;
///         if next < 3 { Ok(next.to_string()) } else { Err("out of values") }
///     })
/// };
/// assert_eq!(result.map(|_| ()), Err("out of values"));
/// ```
pub unsafe fn uninitialized_try_fill_n_with<O, E, F>(
    mut first: O,
    n: usize,
    mut f: F,
) -> Result<O, E>
where
    O: OutputCursor,
    F: FnMut() -> Result<O::Item, E>,
{
    let mut guard = InitGuard::<O, Destroy>::new(first.clone());
    for _ in 0..n {
        let value = f()?;
        // SAFETY: The caller guarantees that there are n slots of raw storage from first.
        unsafe { memory::construct(first.as_mut_ptr(), value) };
        guard.record();
        first.step();
    }
    guard.disarm();
    Ok(first)
}
