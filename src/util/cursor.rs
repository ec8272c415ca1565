use crate::cursor::{Cursor, ForwardTag, InputTag, OutputCursor};

/// A pointer that hides its random access, so that tests can reach the single-step code paths.
#[derive(Debug)]
pub struct Forward<T>(pub *mut T);

impl<T> Forward<T> {
    pub fn new(ptr: *mut T) -> Forward<T> {
        Forward(ptr)
    }

    pub fn at(ptr: *mut T, offset: usize) -> Forward<T> {
        Forward(ptr.wrapping_add(offset))
    }
}

impl<T> Clone for Forward<T> {
    fn clone(&self) -> Self {
        Forward(self.0)
    }
}

impl<T> PartialEq for Forward<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Cursor for Forward<T> {
    type Category = ForwardTag;
    type Item = T;

    fn step(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    fn as_ptr(&self) -> *const T {
        self.0.cast_const()
    }
}

impl<T> OutputCursor for Forward<T> {
    fn as_mut_ptr(&self) -> *mut T {
        self.0
    }
}

/// A pointer that only admits single-pass reads, so that tests can reach the element-at-a-time
/// paths of the collections.
#[derive(Debug)]
pub struct Input<T>(pub *const T);

impl<T> Input<T> {
    pub fn at(ptr: *const T, offset: usize) -> Input<T> {
        Input(ptr.wrapping_add(offset))
    }
}

impl<T> Clone for Input<T> {
    fn clone(&self) -> Self {
        Input(self.0)
    }
}

impl<T> PartialEq for Input<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Cursor for Input<T> {
    type Category = InputTag;
    type Item = T;

    fn step(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    fn as_ptr(&self) -> *const T {
        self.0
    }
}
