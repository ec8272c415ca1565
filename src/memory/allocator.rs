use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::{AllocError, CapacityOverflow, ReserveError};

const MAX_BYTES: usize = isize::MAX as usize;

/// Returns the maximum number of elements of type `T` that a single allocation can hold.
///
/// Zero-sized types never need any memory, so their maximum is [`usize::MAX`].
///
/// # Examples
/// ```
/// # use standard_containers::memory::max_size;
/// assert_eq!(max_size::<u8>(), isize::MAX as usize);
/// assert_eq!(max_size::<u32>(), isize::MAX as usize / 4);
/// assert_eq!(max_size::<()>(), usize::MAX);
/// ```
pub const fn max_size<T>() -> usize {
    if size_of::<T>() == 0 {
        usize::MAX
    } else {
        MAX_BYTES / size_of::<T>()
    }
}

/// The default allocator, used by every container in this crate. It holds no state, so all
/// Allocators compare equal and can release memory acquired by any other.
///
/// An Allocator only deals in raw storage: it never constructs or drops values. See
/// [`construct`](super::construct) and [`destroy`](super::destroy) for that half of the job.
pub struct Allocator<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Allocator<T> {
    /// Creates a new Allocator. This is free, there is nothing to set up.
    pub const fn new() -> Allocator<T> {
        Allocator {
            _phantom: PhantomData,
        }
    }

    /// Creates the [`Layout`] for `n` contiguous elements of `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout's size would exceed [`isize::MAX`].
    pub fn layout_for(n: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(n).map_err(|_| CapacityOverflow)
    }

    /// Acquires uninitialized storage for exactly `n` elements of `T`.
    ///
    /// A request that needs no memory (`n == 0` or a zero-sized `T`) succeeds with a dangling
    /// pointer that must never be dereferenced as a non zero-sized value.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] for a layout larger than [`isize::MAX`] bytes and
    /// [`AllocError`] if the global allocator can't satisfy the request.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::memory::Allocator;
    /// let ptr = Allocator::<u64>::acquire(4).unwrap();
    /// // SAFETY: ptr was acquired for 4 elements just above.
    /// unsafe { Allocator::release(ptr, 4); }
    ///
    /// assert!(Allocator::<u64>::acquire(usize::MAX).is_err());
    /// ```
    pub fn acquire(n: usize) -> Result<NonNull<T>, ReserveError> {
        let layout = Self::layout_for(n)?;

        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };

        NonNull::new(raw_ptr).ok_or_else(|| {
            log::debug!("allocation of {} bytes failed", layout.size());
            AllocError { layout }.into()
        })
    }

    /// Acquires uninitialized storage for a single `T`.
    ///
    /// # Errors
    /// See [`Allocator::acquire`].
    pub fn acquire_one() -> Result<NonNull<T>, ReserveError> {
        Self::acquire(1)
    }

    /// Returns storage for `n` elements to the global allocator. Nothing happens for storage that
    /// never needed any memory.
    ///
    /// # Safety
    /// `ptr` must have been returned by [`Allocator::acquire`] with the same `n` and must not have
    /// been released already. Any values still living in the storage are not dropped.
    pub unsafe fn release(ptr: NonNull<T>, n: usize) {
        let Ok(layout) = Self::layout_for(n) else {
            // Such a region could never have been acquired in the first place.
            debug_assert!(false, "released a region that can't have been acquired");
            return;
        };

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }

    /// Returns storage for a single `T`.
    ///
    /// # Safety
    /// See [`Allocator::release`], with `n` equal to one.
    pub unsafe fn release_one(ptr: NonNull<T>) {
        // SAFETY: The caller upholds the requirements of release for a single element.
        unsafe { Self::release(ptr, 1) }
    }
}

impl<T> Clone for Allocator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Allocator<T> {}

impl<T> Default for Allocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> PartialEq<Allocator<U>> for Allocator<T> {
    fn eq(&self, _: &Allocator<U>) -> bool {
        true
    }
}

impl<T> Eq for Allocator<T> {}

impl<T> Debug for Allocator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Allocator<{}>", std::any::type_name::<T>())
    }
}
