use super::{BidirectionalCursor, BidirectionalTag, Cursor, OutputCursor};

/// A cursor adaptor that walks a bidirectional sequence back to front.
///
/// A Reverse stores the position one past the element it refers to, so that `Reverse::new(end)`
/// refers to the last element and `Reverse::new(begin)` is the end of the reversed range.
///
/// Reverse is always a bidirectional cursor, even over a random access one.
///
/// # Examples
/// ```
/// # use standard_containers::cursor::{Cursor, Reverse};
/// let data = [1, 2, 3];
/// let mut it = Reverse::new(data.as_ptr().wrapping_add(3));
/// // SAFETY: it points into data.
/// assert_eq!(unsafe { *it.as_ptr() }, 3);
/// it.step();
/// assert_eq!(unsafe { *it.as_ptr() }, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reverse<C> {
    base: C,
}

impl<C: BidirectionalCursor> Reverse<C> {
    /// Creates a Reverse referring to the element before `base`.
    pub const fn new(base: C) -> Reverse<C> {
        Reverse { base }
    }

    /// Returns the underlying position, which is one past the referenced element.
    pub const fn base(&self) -> &C {
        &self.base
    }

    /// Consumes the Reverse, returning the underlying position.
    pub fn into_base(self) -> C {
        self.base
    }

    fn referenced(&self) -> C {
        let mut it = self.base.clone();
        it.step_back();
        it
    }
}

impl<C: BidirectionalCursor> Cursor for Reverse<C> {
    type Category = BidirectionalTag;
    type Item = C::Item;

    fn step(&mut self) {
        self.base.step_back();
    }

    fn as_ptr(&self) -> *const C::Item {
        self.referenced().as_ptr()
    }
}

impl<C: BidirectionalCursor + OutputCursor> OutputCursor for Reverse<C> {
    fn as_mut_ptr(&self) -> *mut C::Item {
        self.referenced().as_mut_ptr()
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for Reverse<C> {
    fn step_back(&mut self) {
        self.base.step();
    }
}
