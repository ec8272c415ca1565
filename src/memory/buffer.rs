use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use super::Allocator;
use crate::util::error::ReserveError;
use crate::util::result::ReserveResultExtension;

/// An owned region of raw storage for exactly `cap` elements of `T`.
///
/// A RawBuffer knows nothing about which of its slots hold values. Dropping it releases the
/// memory without dropping anything stored inside, so the owner is responsible for destroying
/// live values first.
pub struct RawBuffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a RawBuffer with capacity 0. No memory is allocated.
    pub const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a RawBuffer with room for exactly `cap` elements.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::memory::RawBuffer;
    /// let buf = RawBuffer::<u32>::with_cap(8);
    /// assert_eq!(buf.cap(), 8);
    /// ```
    pub fn with_cap(cap: usize) -> RawBuffer<T> {
        Self::try_with_cap(cap).handle_alloc()
    }

    /// Creates a RawBuffer with room for exactly `cap` elements, returning an [`Err`] rather than
    /// panicking or aborting if the storage can't be acquired.
    pub fn try_with_cap(cap: usize) -> Result<RawBuffer<T>, ReserveError> {
        Ok(RawBuffer {
            ptr: Allocator::acquire(cap)?,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of elements that fit in the buffer. Zero-sized types fit without limit.
    pub const fn cap(&self) -> usize {
        if size_of::<T>() == 0 {
            usize::MAX
        } else {
            self.cap
        }
    }

    /// Returns a pointer to the start of the region, valid for `cap` elements.
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Decomposes the buffer into its pointer and capacity without releasing it.
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.cap);
        mem::forget(self);
        ret
    }

    /// Recreates a buffer from the parts returned by [`RawBuffer::into_parts`].
    ///
    /// # Safety
    /// `ptr` and `cap` must describe a region acquired from [`Allocator`] which is owned by nothing
    /// else.
    pub const unsafe fn from_parts(ptr: NonNull<T>, cap: usize) -> RawBuffer<T> {
        RawBuffer {
            ptr,
            cap,
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: ptr was acquired with exactly cap elements and is released once, here.
        unsafe { Allocator::release(self.ptr, self.cap) }
    }
}

impl<T> Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .finish()
    }
}

// SAFETY: A RawBuffer uniquely owns its region, so it can be sent wherever T can.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: RawBuffer provides no shared mutation through &self.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}
