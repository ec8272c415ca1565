#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;

use proptest::prelude::*;

use super::*;
use crate::cursor::{self, Cursor};
use crate::util::alloc::{CountedDrop, Tracked, ZeroSizedType};
use crate::util::cursor::{Forward, Input};
use crate::util::error::{
    CapacityOverflow, IndexOutOfBounds, InsertError, InvalidRange, ReserveError,
};
use crate::util::panic::assert_panics;

fn tracked(values: &[usize]) -> Vector<Tracked> {
    values.iter().map(|v| Tracked::new(*v)).collect()
}

fn values(vec: &Vector<Tracked>) -> Vec<usize> {
    vec.iter().map(|t| t.0).collect()
}

#[test]
fn test_lifecycle() {
    let mut vec = Vector::new();
    assert!(vec.is_empty());

    vec.push_back(2);
    vec.push_back(3);
    assert_eq!(*vec.emplace_back(|| 4), 4);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec, [2, 3, 4]);

    assert_eq!(vec.pop_back(), Some(4));
    assert_eq!(vec, [2, 3]);

    vec.assign_n(5, &1);
    assert_eq!(vec, [1, 1, 1, 1, 1]);

    assert_eq!(vec.insert(1, 2), 1);
    assert_eq!(vec, [1, 2, 1, 1, 1, 1]);

    assert_eq!(vec.insert_n(2, 2, &3), 2);
    assert_eq!(vec, [1, 2, 3, 3, 1, 1, 1, 1]);
    assert_eq!(vec.len(), 8);
    assert!(vec.cap() >= vec.len());
}

#[test]
fn test_growth_policy() {
    let mut vec = Vector::<u32>::new();
    assert_eq!(vec.cap(), 0);

    let mut caps = Vec::new();
    for i in 0..9 {
        vec.push_back(i);
        caps.push(vec.cap());
    }
    assert_eq!(
        caps,
        [1, 2, 4, 4, 8, 8, 8, 8, 16],
        "Capacity should double whenever it runs out."
    );

    let mut vec = Vector::from([0_u8; 3]);
    vec.insert_n(0, 10, &1);
    assert_eq!(
        vec.cap(),
        13,
        "Growing by more than double should allocate exactly what is needed."
    );
}

#[test]
fn test_recommended_cap_near_max() {
    let max = Vector::<u8>::new().max_size();
    let at_cap = |cap| {
        // SAFETY: The Vector is never dropped, so the dangling buffer is never touched.
        ManuallyDrop::new(unsafe { Vector::<u8>::from_parts(NonNull::dangling(), 0, cap) })
    };

    let below_half = at_cap(max / 2 - 1);
    assert_eq!(below_half.recommended_cap(max / 2), Ok(2 * (max / 2 - 1)));
    assert_eq!(below_half.recommended_cap(max), Ok(max));

    let half = at_cap(max / 2);
    assert_eq!(
        half.recommended_cap(max / 2 + 1),
        Ok(max),
        "Growing from half of the maximum should go straight to the maximum."
    );
    assert_eq!(half.recommended_cap(max + 1), Err(CapacityOverflow));
    assert_eq!(at_cap(max).recommended_cap(max), Ok(max));
}

#[test]
fn test_reserve_and_shrink() {
    let mut vec = Vector::from([1, 2, 3]);
    let old_ptr = vec.as_ptr();

    vec.reserve(2);
    assert_eq!(vec.cap(), 3, "Reserving less than the capacity should do nothing.");
    assert_eq!(vec.as_ptr(), old_ptr);

    vec.reserve(100);
    assert_eq!(vec.cap(), 100, "Reserve should allocate exactly what was asked for.");
    assert_eq!(vec, [1, 2, 3]);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), vec.len());
    assert_eq!(vec, [1, 2, 3]);

    let old_ptr = vec.as_ptr();
    vec.shrink_to_fit();
    assert_eq!(vec.as_ptr(), old_ptr, "A full Vector shouldn't reallocate to shrink.");

    vec.clear();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0);
    vec.push_back(4);
    assert_eq!(vec, [4]);

    assert_eq!(
        Vector::<u64>::new().try_reserve(usize::MAX),
        Err(ReserveError::CapacityOverflow(CapacityOverflow))
    );
    assert_panics!({ Vector::<u64>::new().reserve(usize::MAX) });
}

#[test]
fn test_push_pop() {
    let mut vec = Vector::new();
    for i in 0..100 {
        vec.push_back(i);
    }
    assert_eq!(vec.len(), 100);
    for i in (0..100).rev() {
        assert_eq!(vec.pop_back(), Some(i));
    }
    assert_eq!(vec.pop_back(), None);
    assert!(vec.is_empty());

    let mut strings = Vector::new();
    strings.push_back(String::from("a"));
    strings.push_back_clone(&String::from("b"));
    strings.emplace_back(String::new).push('c');
    assert_eq!(strings, ["a", "b", "c"]);
    assert_eq!(strings.pop_back().as_deref(), Some("c"));
    assert_eq!(strings.back().map(String::as_str), Some("b"));
    assert_eq!(strings.front().map(String::as_str), Some("a"));

    let mut vec = Vector::with_cap(2);
    // SAFETY: vec has room for both values.
    unsafe {
        vec.push_unchecked(1);
        vec.push_unchecked(2);
    }
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_insert() {
    let mut vec: Vector<String> = ["b", "d"].into_iter().map(String::from).collect();
    vec.reserve(10);
    let old_ptr = vec.as_ptr();

    vec.insert(0, String::from("a"));
    vec.insert(2, String::from("c"));
    vec.insert(4, String::from("e"));
    assert_eq!(vec, ["a", "b", "c", "d", "e"]);
    assert_eq!(vec.as_ptr(), old_ptr, "Inserting with room to spare shouldn't reallocate.");

    vec.insert_slice(1, &[String::from("x"), String::from("y")]);
    assert_eq!(vec, ["a", "x", "y", "b", "c", "d", "e"]);

    vec.shrink_to_fit();
    vec.insert_n(3, 2, &String::from("z"));
    assert_eq!(vec, ["a", "x", "y", "z", "z", "b", "c", "d", "e"]);

    *vec.emplace(0, || String::from("_")) += "!";
    assert_eq!(vec[0], "_!");

    let mut vec = Vector::from([1, 2]);
    assert_eq!(vec.insert_n(1, 0, &9), 1);
    assert_eq!(vec.insert_slice(2, &[]), 2);
    assert_eq!(vec, [1, 2], "Inserting nothing should change nothing.");

    assert_panics!({ vec.insert(3, 0) });
    assert_eq!(
        vec.try_insert(3, 0),
        Err(InsertError::IndexOutOfBounds(IndexOutOfBounds { index: 3, len: 2 }))
    );
    assert_eq!(vec.try_insert(2, 3), Ok(2));
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_insert_range() {
    let src = [String::from("p"), String::from("q"), String::from("r")];
    let mut vec = Vector::from([String::from("a"), String::from("b")]);

    // SAFETY: The range covers the whole of src.
    unsafe { vec.insert_range(1, src.as_ptr(), src.as_ptr().add(3)) };
    assert_eq!(vec, ["a", "p", "q", "r", "b"]);

    // SAFETY: As above, read one element at a time.
    unsafe { vec.insert_range(5, Input(src.as_ptr()), Input::at(src.as_ptr(), 2)) };
    assert_eq!(vec, ["a", "p", "q", "r", "b", "p", "q"]);
    assert_eq!(src, ["p", "q", "r"], "The source should be cloned, not moved.");
}

#[test]
fn test_from_range() {
    let mut data = [3, 1, 4, 1, 5];

    // SAFETY: Each range lies within data.
    unsafe {
        let vec = Vector::from_range(data.as_ptr(), data.as_ptr().add(5));
        assert_eq!(vec, data);
        assert_eq!(vec.cap(), 5);

        let vec = Vector::from_range(
            Forward::new(data.as_mut_ptr()),
            Forward::at(data.as_mut_ptr(), 2),
        );
        assert_eq!(vec, [3, 1]);
        assert_eq!(vec.cap(), 2, "Forward ranges should be measured first.");

        let vec = Vector::from_range(Input(data.as_ptr()), Input::at(data.as_ptr(), 4));
        assert_eq!(vec, [3, 1, 4, 1]);

        let vec = Vector::from_range(Input(data.as_ptr()), Input(data.as_ptr()));
        assert!(vec.is_empty());
    }
}

#[test]
fn test_assign() {
    let mut vec = Vector::from([1, 2, 3, 4]);
    let old_ptr = vec.as_ptr();

    vec.assign_slice(&[7, 8]);
    assert_eq!(vec, [7, 8]);
    assert_eq!(vec.cap(), 4);
    assert_eq!(vec.as_ptr(), old_ptr, "Assigning fewer elements shouldn't reallocate.");

    vec.assign_slice(&[5, 6, 7, 8]);
    assert_eq!(vec, [5, 6, 7, 8]);
    assert_eq!(vec.as_ptr(), old_ptr, "Assigning up to the capacity shouldn't reallocate.");

    vec.assign_n(6, &0);
    assert_eq!(vec, [0; 6]);
    assert_eq!(vec.cap(), 8);

    vec.assign_n(0, &1);
    assert!(vec.is_empty());

    let src = [10, 20, 30];
    // SAFETY: The ranges cover the whole of src.
    unsafe {
        vec.assign_range(src.as_ptr(), src.as_ptr().add(3));
        assert_eq!(vec, src);
        vec.assign_range(Input(src.as_ptr()), Input::at(src.as_ptr(), 1));
        assert_eq!(vec, [10]);
        vec.assign_range(Input(src.as_ptr()), Input::at(src.as_ptr(), 3));
        assert_eq!(vec, src);
    }
}

#[test]
fn test_assign_is_idempotent() {
    let counter = CountedDrop::new(0);
    let source: Vector<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    let mut vec = Vector::new();

    vec.assign_slice(&source);
    vec.assign_slice(&source);
    assert_eq!(vec.len(), 4);
    assert_eq!(
        *counter.borrow(),
        4,
        "Assigning over existing elements should only drop the replaced values."
    );

    drop(vec);
    drop(source);
    assert_eq!(*counter.borrow(), 12);
}

#[test]
fn test_erase() {
    let mut vec: Vector<_> = (0..8).collect();

    assert_eq!(vec.erase(0), 0);
    assert_eq!(vec.erase(6), 7);
    assert_eq!(vec, [1, 2, 3, 4, 5, 6]);

    assert_eq!(vec.erase_range(1, 3), 1);
    assert_eq!(vec, [1, 4, 5, 6]);
    assert_eq!(vec.erase_range(2, 2), 2);
    assert_eq!(vec, [1, 4, 5, 6], "Erasing an empty range should change nothing.");
    assert_eq!(vec.erase_range(0, 4), 0);
    assert!(vec.is_empty());

    assert_panics!({ vec.erase(0) });
    let mut vec = Vector::from([1, 2, 3]);
    assert_panics!({ vec.erase_range(2, 4) });
    assert_panics!({ vec.erase_range(2, 1) });
    assert_eq!(vec, [1, 2, 3]);

    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    vec.erase_range(3, 7);
    assert_eq!(vec.len(), 6);
    assert_eq!(*counter.borrow(), 4, "Only the erased elements should be dropped.");
}

#[test]
fn test_erase_reversed_range() {
    fn panic_message(run: impl FnOnce()) -> Option<String> {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(run))
            .err()
            .and_then(|payload| payload.downcast::<String>().ok())
            .map(|message| *message)
    }

    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(
        panic_message(|| {
            vec.erase_range(2, 1);
        }),
        Some(InvalidRange { first: 2, last: 1 }.to_string())
    );
    assert_eq!(
        panic_message(|| {
            vec.erase_range(4, 3);
        }),
        Some("Range 4..3 ends before it starts!".to_owned()),
        "A start past the length is still a reversed range when the end is in bounds."
    );
    assert_eq!(
        panic_message(|| {
            vec.erase_range(1, 4);
        }),
        Some(IndexOutOfBounds { index: 4, len: 3 }.to_string())
    );
    assert_eq!(vec, [1, 2, 3], "Rejected ranges should leave the Vector alone.");
}

#[test]
fn test_resize() {
    let mut vec = Vector::from([1, 2, 3]);
    vec.resize(5, &0);
    assert_eq!(vec, [1, 2, 3, 0, 0]);
    vec.resize(2, &0);
    assert_eq!(vec, [1, 2]);

    let mut next = 10;
    vec.resize_with(4, || {
        next += 1;
        next
    });
    assert_eq!(vec, [1, 2, 11, 12]);

    vec.truncate(10);
    assert_eq!(vec.len(), 4, "Truncating to a longer length should do nothing.");
}

#[test]
fn test_access() {
    let mut vec = Vector::from(['a', 'b', 'c']);

    assert_eq!(vec.at(2), Ok(&'c'));
    assert_eq!(vec.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    *vec.at_mut(0).expect("index 0 is in bounds") = 'z';
    *vec.back_mut().expect("vec isn't empty") = 'y';
    assert_eq!(vec, ['z', 'b', 'y']);
    assert_panics!({ vec[3] });

    let empty = Vector::<u8>::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back(), None);
    assert!(empty.at(0).is_err());
}

#[test]
fn test_cursors() {
    let mut vec = Vector::from([1, 2, 3, 4]);

    assert_eq!(crate::cursor::distance(vec.begin(), vec.end()), 4);
    assert_eq!(crate::cursor::distance(vec.rbegin(), vec.rend()), 4);

    let mut it = vec.rbegin();
    let mut reversed = Vec::new();
    while it != vec.rend() {
        // SAFETY: it stays within the reversed range of vec.
        reversed.push(unsafe { *it.as_ptr() });
        it.step();
    }
    assert_eq!(reversed, [4, 3, 2, 1]);

    let (first, last) = (vec.begin_mut(), vec.end_mut());
    // SAFETY: Both cursors belong to vec, which hasn't changed since.
    unsafe { crate::algorithm::fill(first, last, &0) };
    assert_eq!(vec, [0; 4]);
}

#[test]
fn test_growth_failure_leaves_vector_unchanged() {
    let extra = Tracked::new(99);
    let mut vec = tracked(&[1, 2, 3]);
    vec.shrink_to_fit();
    let old_ptr = vec.as_ptr();

    Tracked::fail_after(0);
    assert_panics!({ vec.push_back_clone(&extra) });
    assert_panics!({ vec.insert_n(1, 4, &extra) });
    Tracked::never_fail();

    assert_eq!(values(&vec), [1, 2, 3]);
    assert_eq!(vec.cap(), 3, "A failed growth shouldn't change the capacity.");
    assert_eq!(vec.as_ptr(), old_ptr, "A failed growth shouldn't move the elements.");
    assert_eq!(Tracked::live(), 4);

    Tracked::fail_after(2);
    assert_panics!({ vec.insert_n(0, 5, &extra) });
    Tracked::never_fail();
    assert_eq!(values(&vec), [1, 2, 3]);
    assert_eq!(Tracked::live(), 4, "Partially built elements should have been dropped.");

    drop(vec);
    drop(extra);
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_in_place_failure_restores_tail() {
    let extra = Tracked::new(0);
    let mut vec = tracked(&[1, 2, 3, 4]);
    vec.reserve(16);
    let old_ptr = vec.as_ptr();

    Tracked::fail_after(1);
    assert_panics!({ vec.insert_n(1, 3, &extra) });
    Tracked::never_fail();

    assert_eq!(values(&vec), [1, 2, 3, 4], "The tail should be back where it was.");
    assert_eq!(vec.cap(), 16);
    assert_eq!(vec.as_ptr(), old_ptr);
    assert_eq!(Tracked::live(), 5);

    vec.insert_n(1, 2, &extra);
    assert_eq!(values(&vec), [1, 0, 0, 2, 3, 4]);

    drop(vec);
    drop(extra);
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_fallible_construction_rolls_back() {
    let mut vec = tracked(&[1, 2]);

    let mut made = 0;
    let result = vec.try_resize_with(6, || {
        made += 1;
        if made < 3 {
            Ok(Tracked::new(made))
        } else {
            Err("refused")
        }
    });
    assert_eq!(result, Err("refused"));
    assert_eq!(values(&vec), [1, 2]);
    assert_eq!(vec.cap(), 2);
    assert_eq!(Tracked::live(), 2);

    vec.reserve(10);
    let result = vec.try_resize_with(6, || Err::<Tracked, _>(()));
    assert_eq!(result, Err(()));
    assert_eq!(values(&vec), [1, 2]);

    assert_eq!(vec.try_resize_with(3, || Ok::<_, ()>(Tracked::new(3))), Ok(()));
    assert_eq!(values(&vec), [1, 2, 3]);

    drop(vec);
    assert_eq!(Tracked::live(), 0);
}

#[test]
fn test_failed_assign_keeps_old_contents() {
    let source = tracked(&[5, 6, 7, 8, 9]);
    let mut vec = tracked(&[1, 2]);
    vec.shrink_to_fit();

    Tracked::fail_after(3);
    assert_panics!({ vec.assign_slice(&source) });
    Tracked::never_fail();

    assert_eq!(values(&vec), [1, 2]);
    assert_eq!(vec.cap(), 2);
    assert_eq!(Tracked::live(), 7);
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::<ZeroSizedType>::new();
    assert_eq!(vec.cap(), usize::MAX);

    for _ in 0..10 {
        vec.push_back(ZeroSizedType);
    }
    vec.insert_n(3, 5, &ZeroSizedType);
    assert_eq!(vec.len(), 15);
    assert_eq!(vec.erase(0), ZeroSizedType);
    assert_eq!(vec.pop_back(), Some(ZeroSizedType));
    assert_eq!(vec.len(), 13);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), usize::MAX, "ZSTs should never need storage.");
    assert_eq!(vec.into_iter().count(), 13);
}

#[test]
fn test_zst_cursors() {
    let vec = Vector::from_fn(5, || ZeroSizedType);
    assert_eq!(cursor::distance(vec.begin(), vec.end()), 5);
    assert_eq!(cursor::distance(vec.rbegin(), vec.rend()), 5);

    // SAFETY: The range covers the whole of vec.
    let copy = unsafe { Vector::from_range(vec.begin(), vec.end()) };
    assert_eq!(copy.len(), 5);

    let mut vec = Vector::<ZeroSizedType>::new();
    // SAFETY: As above.
    unsafe { vec.insert_range(0, copy.begin(), copy.end()) };
    // SAFETY: As above.
    unsafe { vec.assign_range(copy.begin(), cursor::next(copy.begin(), 2)) };
    assert_eq!(vec.len(), 2);
    assert_eq!(cursor::distance(vec.begin_mut(), vec.end_mut()), 2);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(vec);
    assert_eq!(*counter.borrow(), 10, "10 elements should have been dropped.");

    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    vec.clear();
    assert_eq!(*counter.borrow(), 10);
    assert_eq!(vec.cap(), 10, "Clearing should keep the capacity.");
}

#[test]
fn test_into_iter() {
    let vec = Vector::from([String::from("a"), String::from("b"), String::from("c")]);
    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next_back().as_deref(), Some("c"));
    assert_eq!(iter.as_slice(), ["a", "b"]);
    assert_eq!(iter.collect::<Vec<_>>(), ["a", "b"]);

    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    let mut iter = vec.into_iter();
    iter.next();
    iter.next_back();
    drop(iter);
    assert_eq!(*counter.borrow(), 5, "Every element should be dropped exactly once.");

    let mut vec = Vector::from([1, 2, 3]);
    for value in &mut vec {
        *value *= 2;
    }
    assert_eq!((&vec).into_iter().sum::<i32>(), 12);
}

#[test]
fn test_clone() {
    let mut vec = Vector::with_cap(10);
    vec.extend([1, 2, 3]);

    let cloned = vec.clone();
    assert_eq!(cloned, vec);
    assert_eq!(cloned.cap(), 3, "Clones should be exactly as large as they need to be.");

    let mut target = Vector::with_cap(8);
    target.push_back(0);
    let old_ptr = target.as_ptr();
    target.clone_from(&vec);
    assert_eq!(target, [1, 2, 3]);
    assert_eq!(target.as_ptr(), old_ptr, "clone_from should reuse the existing storage.");
}

#[test]
fn test_swap_and_parts() {
    let mut a = Vector::from([1, 2]);
    let mut b = Vector::with_cap(7);
    b.push_back(3);
    a.swap(&mut b);
    assert_eq!((a.len(), a.cap()), (1, 7));
    assert_eq!(b, [1, 2]);

    let (ptr, len, cap) = a.into_parts();
    // SAFETY: The parts came straight from into_parts.
    let a = unsafe { Vector::from_parts(ptr, len, cap) };
    assert_eq!(a, [3]);
    assert_eq!(a.cap(), 7);
}

#[test]
fn test_equality_and_hash() {
    let vec: Vector<_> = (0_usize..5).collect();

    assert_eq!(
        vec,
        Vector::from([0, 1, 2, 3, 4]),
        "Different construction methods should produce equal results."
    );
    assert_ne!(vec, Vector::from([0, 1, 2, 5, 4]));
    assert!(vec < Vector::from([0, 1, 3]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one(Vector::from([0_usize, 1, 2, 3, 4])),
        "Equal Vectors should hash equally."
    );

    assert_eq!(format!("{vec}"), "[0, 1, 2, 3, 4]");
    assert_eq!(
        format!("{:?}", Vector::from([1])),
        "Vector { contents: [1], len: 1, cap: 1 }"
    );
}

#[test]
fn test_extend() {
    let mut vec = Vector::from([1]);
    vec.extend([2, 3, 4]);
    vec.extend(&[5, 6]);
    vec.extend_from_slice(&[7]);
    vec.extend_one(8);
    assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7, 8]);

    let mut vec = Vector::<u8>::with_cap(4);
    Extend::<u8>::extend_reserve(&mut vec, 5);
    assert_eq!(vec.cap(), 8, "Extending should follow the growth policy.");
    assert_panics!({ Extend::<u8>::extend_reserve(&mut vec, usize::MAX) });
}

#[test]
fn test_sized_constructors() {
    let vec = Vector::from_elem(4, &String::from("v"));
    assert_eq!(vec.len(), 4);
    assert!(vec.iter().all(|s| s == "v"));

    let vec: Vector<u32> = Vector::with_len(3);
    assert_eq!(vec, [0, 0, 0]);
    assert_eq!(vec.cap(), 3);

    let value = Tracked::new(1);
    Tracked::fail_after(2);
    assert_panics!({ Vector::from_elem(5, &value) });
    Tracked::never_fail();
    assert_eq!(Tracked::live(), 1, "Finished clones should be dropped with the Vector.");

    assert!(Vector::from_elem(0, &value).is_empty());
    assert!(Vector::<ZeroSizedType>::with_len(7).into_iter().all(|z| z == ZeroSizedType));
}

#[test]
fn test_from_fn() {
    let mut next = 0;
    let vec = Vector::from_fn(4, || {
        next += 2;
        next
    });
    assert_eq!(vec, [2, 4, 6, 8]);
    assert_eq!(vec.cap(), 4);
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    InsertN(usize, usize, i32),
    Erase(usize),
    EraseRange(usize, usize),
    AssignN(usize, i32),
    Truncate(usize),
    Reserve(usize),
    ShrinkToFit,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Pop),
        (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        (any::<usize>(), 0_usize..6, any::<i32>()).prop_map(|(i, n, v)| Op::InsertN(i, n, v)),
        any::<usize>().prop_map(Op::Erase),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::EraseRange(a, b)),
        (0_usize..12, any::<i32>()).prop_map(|(n, v)| Op::AssignN(n, v)),
        (0_usize..12).prop_map(Op::Truncate),
        (0_usize..40).prop_map(Op::Reserve),
        Just(Op::ShrinkToFit),
    ]
}

proptest! {
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut vec = Vector::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    vec.push_back(v);
                    model.push(v);
                }
                Op::Pop => {
                    prop_assert_eq!(vec.pop_back(), model.pop());
                }
                Op::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    vec.insert(i, v);
                    model.insert(i, v);
                }
                Op::InsertN(i, n, v) => {
                    let i = i % (model.len() + 1);
                    vec.insert_n(i, n, &v);
                    model.splice(i..i, iter::repeat_n(v, n));
                }
                Op::Erase(i) => {
                    if !model.is_empty() {
                        let i = i % model.len();
                        prop_assert_eq!(vec.erase(i), model.remove(i));
                    }
                }
                Op::EraseRange(a, b) => {
                    let a = a % (model.len() + 1);
                    let b = a + b % (model.len() - a + 1);
                    vec.erase_range(a, b);
                    model.drain(a..b);
                }
                Op::AssignN(n, v) => {
                    vec.assign_n(n, &v);
                    model = vec![v; n];
                }
                Op::Truncate(n) => {
                    vec.truncate(n);
                    model.truncate(n);
                }
                Op::Reserve(n) => {
                    vec.reserve(n);
                    prop_assert!(vec.cap() >= n);
                }
                Op::ShrinkToFit => {
                    vec.shrink_to_fit();
                    prop_assert_eq!(vec.cap(), vec.len());
                }
            }

            prop_assert_eq!(&*vec, model.as_slice());
            prop_assert!(vec.len() <= vec.cap());
        }
    }

    #[test]
    fn prop_clone_round_trips(data in prop::collection::vec(any::<u16>(), 0..64)) {
        let vec = Vector::from(data.as_slice());
        let cloned = vec.clone();
        prop_assert_eq!(cloned.cap(), data.len());
        prop_assert_eq!(cloned.into_iter().collect::<Vec<_>>(), data);
    }
}
