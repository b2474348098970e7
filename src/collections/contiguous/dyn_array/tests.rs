#![cfg(test)]

use std::cmp::Ordering;
use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::dynarray;
use crate::util::alloc::{CloneBomb, CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_push_back_and_growth() {
    let mut arr = DynArray::new();
    let mut caps = Vec::new();

    for i in 0..20 {
        let prev_cap = arr.cap();
        arr.push_back(i);

        if arr.cap() != prev_cap {
            assert_eq!(
                arr.cap(),
                if prev_cap == 0 { 1 } else { prev_cap * 2 },
                "Growth should double the capacity, starting from 1."
            );
            caps.push(arr.cap());
        }
    }

    assert_eq!(caps, [1, 2, 4, 8, 16, 32]);
    assert_eq!(arr.len(), 20);
    for i in 0..20 {
        assert_eq!(arr[i], i, "Element i should be the i-th pushed value.");
    }
}

#[test]
fn test_scripted_scenario() {
    let mut arr = DynArray::new();
    for i in 0..10 {
        arr.push_back(i);
    }
    assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    assert_eq!(arr.insert(0, 13), 0);
    assert_eq!(arr.as_slice(), &[13, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    assert_eq!(arr.insert(arr.len(), 14), 11);
    assert_eq!(arr.len(), 12);
    assert_eq!(arr.last(), Some(&14));

    assert_eq!(arr.insert(3, 15), 3);
    assert_eq!(arr[3], 15);
    assert_eq!(arr.len(), 13);

    assert_eq!(arr.erase(0), 0);
    assert_eq!(arr.len(), 12);
    assert_eq!(arr[0], 0);

    for i in 0..arr.len() {
        arr[i] += 1;
    }
    assert_eq!(arr, dynarray![1, 2, 16, 3, 4, 5, 6, 7, 8, 9, 10, 15]);
    assert_eq!(arr.to_string(), "1 2 16 3 4 5 6 7 8 9 10 15");
}

#[test]
fn test_construction() {
    let arr: DynArray<u8> = DynArray::new();
    assert_eq!((arr.len(), arr.cap()), (0, 0));

    let arr: DynArray<String> = DynArray::with_len(3);
    assert_eq!((arr.len(), arr.cap()), (3, 3));
    assert!(arr.iter().all(String::is_empty));

    let arr = DynArray::repeat(7_u32, 4);
    assert_eq!(arr.as_slice(), &[7, 7, 7, 7]);
    assert_eq!(arr.cap(), 4);

    let arr = DynArray::from(["a", "b", "c"]);
    assert_eq!(arr.as_slice(), &["a", "b", "c"]);
    assert_eq!(arr.cap(), 3);

    let arr: DynArray<u64> = DynArray::from(reserve(6));
    assert_eq!((arr.len(), arr.cap()), (0, 6));

    let arr: DynArray<u64> = Reserve::new(0).into();
    assert_eq!((arr.len(), arr.cap()), (0, 0));

    let arr: DynArray<_> = (0..5).collect();
    assert_eq!(arr, DynArray::from(&[0, 1, 2, 3, 4][..]));
}

#[test]
fn test_reserve_then_push() {
    let mut arr = DynArray::from(reserve(4));
    let old_ptr = arr.buf.ptr;

    for i in 0..4 {
        arr.push_back(i);
    }
    assert_eq!(arr.buf.ptr, old_ptr, "Pushing within the reserved capacity shouldn't reallocate.");

    arr.push_back(4);
    assert_eq!(arr.cap(), 8);
}

#[test]
fn test_checked_and_unchecked_access() {
    let mut arr = dynarray![10, 20, 30];

    assert_eq!(arr.at(0), Ok(&10));
    assert_eq!(arr.at(3), Err(IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(
        arr.at(usize::MAX).map_err(|e| e.to_string()),
        Err(format!("Index {} out of range for collection with 3 elements!", usize::MAX))
    );

    *arr.at_mut(1).expect("index 1 is in range") = 25;
    assert!(arr.at_mut(3).is_err());
    assert_eq!(arr[1], 25);

    // SAFETY: 2 < len.
    assert_eq!(unsafe { *arr.get_unchecked(2) }, 30);

    assert_panics!({
        let arr = dynarray![10, 20, 30];
        let _value = arr[3];
    });
}

#[test]
fn test_insert_at_every_position() {
    let original = DynArray::from([0, 1, 2, 3, 4]);

    for position in 0..=original.len() {
        let mut arr = original.clone();
        assert_eq!(arr.insert(position, 100), position);
        assert_eq!(arr.len(), original.len() + 1);

        for i in 0..position {
            assert_eq!(arr[i], original[i], "Elements before the position should be unchanged.");
        }
        assert_eq!(arr[position], 100);
        for i in position..original.len() {
            assert_eq!(arr[i + 1], original[i], "Elements after the position should shift right.");
        }
    }
}

#[test]
fn test_insert_without_growth() {
    let mut arr = DynArray::from(reserve(8));
    arr.extend([1, 2, 3]);
    let old_ptr = arr.buf.ptr;

    arr.insert(1, 9);
    arr.insert(0, 8);
    assert_eq!(arr.as_slice(), &[8, 1, 9, 2, 3]);
    assert_eq!(arr.buf.ptr, old_ptr, "Inserting with spare capacity shouldn't reallocate.");

    let mut arr: DynArray<i32> = DynArray::new();
    arr.insert(0, 5);
    assert_eq!((arr.as_slice(), arr.cap()), (&[5][..], 1));

    assert_panics!({
        let mut arr = dynarray![1, 2];
        arr.insert(3, 0);
    });
}

#[test]
fn test_erase_at_every_position() {
    let original = DynArray::from([0, 1, 2, 3, 4]);

    for position in 0..original.len() {
        let mut arr = original.clone();
        assert_eq!(arr.erase(position), position);
        assert_eq!(arr.len(), original.len() - 1);

        for i in 0..position {
            assert_eq!(arr[i], original[i], "Elements before the position should be unchanged.");
        }
        for i in position..arr.len() {
            assert_eq!(arr[i], original[i + 1], "Elements after the position should shift left.");
        }
    }

    let mut arr = dynarray![1, 2, 3];
    assert_eq!(arr.erase(2), arr.len(), "Erasing the last element should return the end.");

    assert_panics!({
        let mut arr = dynarray![1, 2];
        arr.erase(2);
    });
    assert_panics!({
        let mut arr: DynArray<u8> = DynArray::new();
        arr.erase(0);
    });
}

#[test]
fn test_insert_erase_round_trip() {
    let original = DynArray::from(["a", "b", "c", "d"]);

    for position in 0..=original.len() {
        let mut arr = original.clone();
        let at = arr.insert(position, "new");
        arr.erase(at);
        assert_eq!(arr, original);
    }
}

#[test]
fn test_remove_and_pop() {
    let mut arr: DynArray<_> = "Hello world!".chars().collect();
    assert_eq!(arr.remove(1), 'e');
    assert_eq!(arr.remove(4), ' ');
    assert_eq!(arr, "Hlloworld!".chars().collect::<DynArray<_>>());

    let cap = arr.cap();
    while arr.pop_back().is_some() {}
    assert!(arr.is_empty());
    assert_eq!(arr.cap(), cap, "Popping shouldn't shrink the capacity.");
    assert_eq!(arr.pop_back(), None);
}

#[test]
fn test_resize() {
    let mut arr = DynArray::from([1, 2, 3, 4]);

    arr.resize(2);
    assert_eq!(arr.as_slice(), &[1, 2], "Shrinking should keep the prefix.");
    assert_eq!(arr.cap(), 4, "Shrinking should keep the storage.");

    arr.resize(3);
    assert_eq!(arr.as_slice(), &[1, 2, 0], "Regrowing within capacity should default fill.");
    assert_eq!(arr.cap(), 4);

    arr.resize(7);
    assert_eq!(arr.as_slice(), &[1, 2, 0, 0, 0, 0, 0]);
    assert_eq!(arr.cap(), 7, "Growing past capacity should reallocate to exactly new_len.");

    arr.resize(7);
    assert_eq!(arr.len(), 7);

    let mut arr: DynArray<u64> = DynArray::new();
    assert!(arr.try_resize(usize::MAX).is_err_and(|e| e.is_capacity_overflow()));
    assert_eq!((arr.len(), arr.cap()), (0, 0), "A failed resize should change nothing.");
}

#[test]
fn test_reserve() {
    let mut arr = dynarray![1, 2, 3];

    arr.reserve(2);
    assert_eq!(arr.cap(), 3, "Reserving less than the capacity is a no-op.");

    arr.reserve(10);
    assert_eq!(arr.cap(), 10);
    assert_eq!(arr.as_slice(), &[1, 2, 3], "Elements should be moved across.");

    let err = arr.try_reserve(usize::MAX).expect_err("layout should overflow");
    assert!(err.is_capacity_overflow());
    assert_eq!(arr.cap(), 10, "A failed reserve should leave the capacity unchanged.");
    assert_eq!(arr.as_slice(), &[1, 2, 3], "A failed reserve should leave the elements unchanged.");

    assert_panics!({
        let mut arr: DynArray<u64> = DynArray::new();
        arr.reserve(usize::MAX);
    });
}

#[test]
fn test_clear_and_truncate_drop() {
    let counter = CountedDrop::new(0);
    let mut arr = DynArray::new();
    for _ in 0..6 {
        arr.push_back(counter.clone());
    }
    assert_eq!(*counter.borrow(), 0, "Reallocation shouldn't drop any elements.");

    arr.truncate(4);
    assert_eq!(counter.take(), 2, "Truncating should drop the tail.");

    let cap = arr.cap();
    arr.clear();
    assert_eq!(counter.take(), 4, "Clearing should drop every element.");
    assert_eq!(arr.cap(), cap, "Clearing should keep the capacity.");
    assert!(arr.is_empty());
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = DynArray::from_iter(iter::repeat_with(|| counter.clone()).take(10));

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let mut arr = DynArray::from(reserve(10));
    arr.push_back(counter.clone());
    drop(arr);
    assert_eq!(counter.take(), 1, "Only live elements should be dropped.");
}

#[test]
fn test_clone_independence() {
    let mut a = DynArray::from(reserve(10));
    a.extend([1, 2, 3]);

    let mut b = a.clone();
    assert_eq!(a, b);
    assert_eq!(b.cap(), 3, "A clone shouldn't keep the spare capacity.");

    b.push_back(4);
    b[0] = 100;
    assert_eq!(a.as_slice(), &[1, 2, 3], "Mutating the clone shouldn't change the source.");

    let mut c = dynarray![9, 9];
    c.clone_from(&a);
    assert_eq!(c, a);
}

#[test]
fn test_clone_from_is_all_or_nothing() {
    let mut target = dynarray![CloneBomb::new(1), CloneBomb::new(2)];
    let source = dynarray![CloneBomb::new(3), CloneBomb::armed(4)];

    assert_panics!({
        target.clone_from(&source);
    });

    assert_eq!(target, dynarray![CloneBomb::new(1), CloneBomb::new(2)]);
    assert_eq!(target.cap(), 2);
}

#[test]
fn test_take_and_swap() {
    let mut a = dynarray![1, 2, 3];
    let old_ptr = a.buf.ptr;

    let mut b = a.take();
    assert_eq!((a.len(), a.cap()), (0, 0), "The source should be left empty.");
    assert_eq!(b.buf.ptr, old_ptr, "Moving shouldn't reallocate.");

    let mut c = DynArray::from(reserve(5));
    c.push_back(7);
    b.swap(&mut c);
    assert_eq!((b.as_slice(), b.cap()), (&[7][..], 5));
    assert_eq!((c.as_slice(), c.cap()), (&[1, 2, 3][..], 3));

    let d = std::mem::take(&mut c);
    assert!(c.is_empty());
    assert_eq!(d.len(), 3);
}

#[test]
fn test_equality_and_ordering() {
    let arr = dynarray![1, 2, 3];

    assert_eq!(arr, DynArray::from_iter(1..=3));
    assert_ne!(arr, dynarray![1, 2]);
    assert_ne!(arr, dynarray![1, 2, 4]);

    assert!(arr < dynarray![1, 2, 4]);
    assert!(arr < dynarray![1, 2, 3, 0], "A prefix should compare less.");
    assert!(arr > dynarray![1, 1, 9, 9]);
    assert!(arr >= arr.clone());
    assert!(arr <= arr.clone());
    assert!(DynArray::<i32>::new() < arr);
    assert_eq!(arr.cmp(&arr.clone()), Ordering::Equal);

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([1, 2, 3]),
        "Hashing should match the element slice."
    );
}

#[test]
fn test_iterators() {
    let mut arr = DynArray::from([0_usize, 1, 2, 3, 4]);

    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(arr.as_slice(), &[0, 2, 4, 6, 8]);
    assert_eq!((&arr).into_iter().sum::<usize>(), 20);
    assert_eq!(arr.iter().nth(3), Some(&6), "Offsets from the start should work.");

    let mut iter = arr.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    assert_eq!(arr.clone().into_iter().collect::<DynArray<_>>(), arr);

    let counter = CountedDrop::new(0);
    let arr = DynArray::from_iter(iter::repeat_with(|| counter.clone()).take(10));

    let mut iter = arr.into_iter();
    drop(iter.next());
    assert_eq!(counter.take(), 1);
    drop(iter);
    assert_eq!(counter.take(), 9, "Dropping an owned iterator should drop the remaining elements.");
}

#[test]
fn test_zst_support() {
    let mut arr = DynArray::new();
    for _ in 0..100 {
        arr.push_back(ZeroSizedType);
    }
    arr.insert(50, ZeroSizedType);
    arr.erase(0);

    assert_eq!(arr.len(), 100);
    assert_eq!(arr.cap(), 128);
    assert!(!arr.buf.is_allocated());
    assert_eq!(arr.into_iter().count(), 100);
}

#[test]
fn test_formatting() {
    let arr = dynarray![1, 2, 3];
    assert_eq!(arr.to_string(), "1 2 3");
    assert_eq!(DynArray::<i32>::new().to_string(), "");
    assert_eq!(format!("{arr:?}"), "DynArray { contents: [1, 2, 3], len: 3, cap: 3 }");
}
