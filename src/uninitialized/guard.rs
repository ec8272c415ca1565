use std::marker::PhantomData;

use crate::algorithm::strategy::Undo;
use crate::cursor::OutputCursor;

/// A drop guard that records how many elements an operation has finished, and undoes all of them
/// if it is dropped before being disarmed. This is how a construction loop that unwinds halfway
/// through leaves nothing behind.
///
/// The finished elements are always the `done` positions starting at `start`. Loops that work
/// forwards leave `start` in place; loops that work backwards move it to each new element with
/// [`InitGuard::record_before`].
pub struct InitGuard<O: OutputCursor, U: Undo<O::Item>> {
    start: O,
    done: usize,
    _undo: PhantomData<U>,
}

impl<O: OutputCursor, U: Undo<O::Item>> InitGuard<O, U> {
    /// Creates a guard with nothing finished yet, for an operation that starts at `start`.
    pub fn new(start: O) -> InitGuard<O, U> {
        InitGuard {
            start,
            done: 0,
            _undo: PhantomData,
        }
    }

    /// Records the element after the ones already finished.
    pub const fn record(&mut self) {
        self.done += 1;
    }

    /// Records the element at `at`, immediately before the ones already finished.
    pub fn record_before(&mut self, at: O) {
        if U::UNDOES {
            self.start = at;
        }
        self.done += 1;
    }

    /// Returns the number of finished elements.
    pub const fn done(&self) -> usize {
        self.done
    }

    /// Keeps everything that has been finished.
    pub fn disarm(mut self) {
        self.done = 0;
    }
}

impl<O: OutputCursor, U: Undo<O::Item>> Drop for InitGuard<O, U> {
    fn drop(&mut self) {
        if !U::UNDOES {
            return;
        }

        let mut it = self.start.clone();
        for _ in 0..self.done {
            // SAFETY: The guard only counts elements that the operation finished, and nothing else
            // has seen them yet.
            unsafe { U::undo(it.as_mut_ptr()) };
            it.step();
        }
    }
}
