use super::{
    BidirectionalCursor, BidirectionalOutputCursor, BidirectionalTag, Category, Cursor, ForwardTag,
    InputTag, OutputCursor, RandomAccessCursor, RandomAccessTag,
};
use crate::algorithm::strategy::{self, Fill, Transfer};

/// Static dispatch on a cursor's category. Every algorithm in this crate is written once, against
/// `C::Category`, and the tag's implementation decides how to walk the range: by comparing
/// positions one step at a time, or by measuring the range up front and handing a count to the
/// counted (and possibly bulk) form.
///
/// A cursor must name a category that implements `Traversal` for it, so claiming random access
/// without implementing [`RandomAccessCursor`] is rejected at compile time.
pub trait Traversal<C: Cursor>: Category {
    /// Returns the number of steps from `first` to `last`.
    fn distance(first: &C, last: &C) -> isize;

    /// Returns the number of elements in `[first, last)`, or [`None`] if measuring the range would
    /// consume it.
    fn measure(first: &C, last: &C) -> Option<usize>;

    /// Moves `it` by `n` steps, backwards if `n` is negative.
    ///
    /// # Panics
    /// Panics (in debug builds) if `n` is negative and the cursor can't step back.
    fn advance(it: &mut C, n: isize);

    #[doc(hidden)]
    unsafe fn transfer<O, Op>(first: C, last: C, result: O) -> O
    where
        O: OutputCursor<Item = C::Item>,
        Op: Transfer<C::Item>;

    #[doc(hidden)]
    unsafe fn transfer_backward<O, Op>(first: C, last: C, result_last: O) -> O
    where
        C: BidirectionalCursor,
        O: BidirectionalOutputCursor<Item = C::Item>,
        Op: Transfer<C::Item>;

    #[doc(hidden)]
    unsafe fn fill<Op>(first: C, last: C, value: &C::Item)
    where
        C: OutputCursor,
        Op: Fill<C::Item>;
}

fn count_steps<C: Cursor>(first: &C, last: &C) -> isize {
    let mut it = first.clone();
    let mut n = 0;
    while it != *last {
        it.step();
        n += 1;
    }
    n
}

fn single_pass_len<C: Cursor>(_: &C, _: &C) -> Option<usize> {
    None
}

fn multi_pass_len<C: Cursor>(first: &C, last: &C) -> Option<usize> {
    Some(count_steps(first, last) as usize)
}

fn step_forward<C: Cursor>(it: &mut C, n: isize) {
    debug_assert!(n >= 0, "stepped a forward cursor backwards");
    for _ in 0..n {
        it.step();
    }
}

macro_rules! single_step_traversal {
    ($tag:ty, $measure:ident) => {
        impl<C: Cursor> Traversal<C> for $tag {
            fn distance(first: &C, last: &C) -> isize {
                count_steps(first, last)
            }

            fn measure(first: &C, last: &C) -> Option<usize> {
                $measure(first, last)
            }

            fn advance(it: &mut C, n: isize) {
                step_forward(it, n)
            }

            unsafe fn transfer<O, Op>(first: C, last: C, result: O) -> O
            where
                O: OutputCursor<Item = C::Item>,
                Op: Transfer<C::Item>,
            {
                // SAFETY: Upheld by the caller.
                unsafe { strategy::transfer_until::<C, O, Op>(first, last, result) }
            }

            unsafe fn transfer_backward<O, Op>(first: C, last: C, result_last: O) -> O
            where
                C: BidirectionalCursor,
                O: BidirectionalOutputCursor<Item = C::Item>,
                Op: Transfer<C::Item>,
            {
                // SAFETY: Upheld by the caller.
                unsafe { strategy::transfer_backward_until::<C, O, Op>(first, last, result_last) }
            }

            unsafe fn fill<Op>(first: C, last: C, value: &C::Item)
            where
                C: OutputCursor,
                Op: Fill<C::Item>,
            {
                // SAFETY: Upheld by the caller.
                unsafe { strategy::fill_until::<C, Op>(first, last, value) }
            }
        }
    };
}

single_step_traversal!(InputTag, single_pass_len);
single_step_traversal!(ForwardTag, multi_pass_len);

impl<C: BidirectionalCursor> Traversal<C> for BidirectionalTag {
    fn distance(first: &C, last: &C) -> isize {
        count_steps(first, last)
    }

    fn measure(first: &C, last: &C) -> Option<usize> {
        multi_pass_len(first, last)
    }

    fn advance(it: &mut C, n: isize) {
        if n >= 0 {
            step_forward(it, n);
        } else {
            for _ in n..0 {
                it.step_back();
            }
        }
    }

    unsafe fn transfer<O, Op>(first: C, last: C, result: O) -> O
    where
        O: OutputCursor<Item = C::Item>,
        Op: Transfer<C::Item>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { strategy::transfer_until::<C, O, Op>(first, last, result) }
    }

    unsafe fn transfer_backward<O, Op>(first: C, last: C, result_last: O) -> O
    where
        C: BidirectionalCursor,
        O: BidirectionalOutputCursor<Item = C::Item>,
        Op: Transfer<C::Item>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { strategy::transfer_backward_until::<C, O, Op>(first, last, result_last) }
    }

    unsafe fn fill<Op>(first: C, last: C, value: &C::Item)
    where
        C: OutputCursor,
        Op: Fill<C::Item>,
    {
        // SAFETY: Upheld by the caller.
        unsafe { strategy::fill_until::<C, Op>(first, last, value) }
    }
}

fn range_len<C: RandomAccessCursor>(first: &C, last: &C) -> usize {
    let n = last.distance_from(first);
    debug_assert!(n >= 0, "range ends before it starts");
    n.max(0) as usize
}

impl<C: RandomAccessCursor> Traversal<C> for RandomAccessTag {
    fn distance(first: &C, last: &C) -> isize {
        last.distance_from(first)
    }

    fn measure(first: &C, last: &C) -> Option<usize> {
        Some(range_len(first, last))
    }

    fn advance(it: &mut C, n: isize) {
        *it = it.offset(n);
    }

    unsafe fn transfer<O, Op>(first: C, last: C, result: O) -> O
    where
        O: OutputCursor<Item = C::Item>,
        Op: Transfer<C::Item>,
    {
        let n = range_len(&first, &last);
        // SAFETY: Upheld by the caller.
        unsafe { first.transfer_n::<O, Op>(n, result) }
    }

    unsafe fn transfer_backward<O, Op>(first: C, last: C, result_last: O) -> O
    where
        C: BidirectionalCursor,
        O: BidirectionalOutputCursor<Item = C::Item>,
        Op: Transfer<C::Item>,
    {
        let n = range_len(&first, &last);
        // SAFETY: Upheld by the caller.
        unsafe { last.transfer_backward_n::<O, Op>(n, result_last) }
    }

    unsafe fn fill<Op>(first: C, last: C, value: &C::Item)
    where
        C: OutputCursor,
        Op: Fill<C::Item>,
    {
        let n = range_len(&first, &last);
        // SAFETY: Upheld by the caller.
        unsafe { first.fill_n_with::<Op>(n, value) };
    }
}

/// Returns the number of steps from `first` to `last`. Constant time for random access cursors,
/// linear otherwise.
///
/// # Examples
/// ```
/// # use standard_containers::cursor::distance;
/// let data = [1, 2, 3, 4];
/// let first = data.as_ptr();
/// assert_eq!(distance(first, first.wrapping_add(4)), 4);
/// ```
pub fn distance<C: Cursor>(first: C, last: C) -> isize {
    C::Category::distance(&first, &last)
}

/// Returns the number of elements in `[first, last)` when that can be found without consuming the
/// range, which is the case for every category above [`InputTag`]. Constant time for random
/// access cursors, linear otherwise.
///
/// # Examples
/// ```
/// # use standard_containers::cursor::try_distance;
/// let data = [1, 2, 3];
/// let first = data.as_ptr();
/// assert_eq!(try_distance(&first, &first.wrapping_add(3)), Some(3));
/// ```
pub fn try_distance<C: Cursor>(first: &C, last: &C) -> Option<usize> {
    C::Category::measure(first, last)
}

/// Moves `it` by `n` steps. Negative values are only valid for bidirectional cursors.
pub fn advance<C: Cursor>(it: &mut C, n: isize) {
    C::Category::advance(it, n)
}

/// Returns `it` moved forward by `n` steps.
pub fn next<C: Cursor>(mut it: C, n: isize) -> C {
    advance(&mut it, n);
    it
}

/// Returns `it` moved back by `n` steps.
pub fn prev<C: BidirectionalCursor>(mut it: C, n: isize) -> C {
    advance(&mut it, -n);
    it
}
