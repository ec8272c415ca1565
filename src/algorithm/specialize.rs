//! Element-level specialization: picking a memory operation over a loop when the element type
//! allows it.

use std::ptr;

use super::copy::CloneAssign;
use super::fill::FillAssign;
use super::strategy::{fill_n_by_element, transfer_backward_n_by_element, transfer_n_by_element};
use crate::uninitialized::{CloneConstruct, FillConstruct};

pub(crate) trait SpecClone: Clone {
    unsafe fn clone_assign_n(src: *const Self, dst: *mut Self, n: usize);

    unsafe fn clone_assign_backward_n(src_last: *const Self, dst_last: *mut Self, n: usize);

    unsafe fn clone_construct_n(src: *const Self, dst: *mut Self, n: usize);
}

impl<T: Clone> SpecClone for T {
    default unsafe fn clone_assign_n(src: *const T, dst: *mut T, n: usize) {
        // SAFETY: Upheld by the caller.
        unsafe { transfer_n_by_element::<*const T, *mut T, CloneAssign>(src, n, dst) };
    }

    default unsafe fn clone_assign_backward_n(src_last: *const T, dst_last: *mut T, n: usize) {
        // SAFETY: Upheld by the caller.
        unsafe {
            transfer_backward_n_by_element::<*const T, *mut T, CloneAssign>(src_last, n, dst_last)
        };
    }

    default unsafe fn clone_construct_n(src: *const T, dst: *mut T, n: usize) {
        // SAFETY: Upheld by the caller.
        unsafe { transfer_n_by_element::<*const T, *mut T, CloneConstruct>(src, n, dst) };
    }
}

impl<T: Copy> SpecClone for T {
    unsafe fn clone_assign_n(src: *const T, dst: *mut T, n: usize) {
        if n == 0 {
            return;
        }
        // SAFETY: Copy types are cloned by copying their bytes, and ptr::copy handles overlap in
        // either direction. The caller guarantees that both ranges are valid for n elements.
        unsafe { ptr::copy(src, dst, n) }
    }

    unsafe fn clone_assign_backward_n(src_last: *const T, dst_last: *mut T, n: usize) {
        if n == 0 {
            return;
        }
        // SAFETY: As above, for the n elements before each end.
        unsafe { ptr::copy(src_last.sub(n), dst_last.sub(n), n) }
    }

    unsafe fn clone_construct_n(src: *const T, dst: *mut T, n: usize) {
        // SAFETY: Overwriting a Copy value and constructing one are the same thing, so this is
        // just a copy.
        unsafe { super::copy_n(src, n, dst) };
    }
}

pub(crate) trait SpecFill: Clone {
    unsafe fn fill_assign_n(dst: *mut Self, n: usize, value: &Self);

    unsafe fn fill_construct_n(dst: *mut Self, n: usize, value: &Self);
}

impl<T: Clone> SpecFill for T {
    default unsafe fn fill_assign_n(dst: *mut T, n: usize, value: &T) {
        // SAFETY: Upheld by the caller.
        unsafe { fill_n_by_element::<*mut T, FillAssign>(dst, n, value) };
    }

    default unsafe fn fill_construct_n(dst: *mut T, n: usize, value: &T) {
        // SAFETY: Upheld by the caller.
        unsafe { fill_n_by_element::<*mut T, FillConstruct>(dst, n, value) };
    }
}

impl<T: Copy> SpecFill for T {
    default unsafe fn fill_assign_n(dst: *mut T, n: usize, value: &T) {
        for i in 0..n {
            // SAFETY: The caller guarantees that dst is valid for n elements, and Copy values
            // don't need to be dropped before they are overwritten.
            unsafe { dst.add(i).write(*value) };
        }
    }

    default unsafe fn fill_construct_n(dst: *mut T, n: usize, value: &T) {
        // SAFETY: As for clone_construct_n.
        unsafe { super::fill_n(dst, n, value) };
    }
}

macro_rules! byte_fill {
    ($($byte:ty),+) => {
        $(
            impl SpecFill for $byte {
                unsafe fn fill_assign_n(dst: *mut $byte, n: usize, value: &$byte) {
                    // SAFETY: Every bit pattern is a valid byte. The caller guarantees that dst is
                    // valid for n bytes.
                    unsafe { ptr::write_bytes(dst, *value as u8, n) }
                }

                unsafe fn fill_construct_n(dst: *mut $byte, n: usize, value: &$byte) {
                    // SAFETY: As above.
                    unsafe { ptr::write_bytes(dst, *value as u8, n) }
                }
            }
        )+
    };
}

byte_fill!(u8, i8);
