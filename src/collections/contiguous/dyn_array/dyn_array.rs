use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice;

use tracing::trace;

use super::Reserve;
use crate::collections::contiguous::Buffer;
use crate::util::error::{AllocError, CapacityOverflow, IndexOutOfRange};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, built on a single owned [`Buffer<T>`].
///
/// Any operation that needs more room than the current capacity allocates a brand new Buffer,
/// moves the live elements across and then swaps it in. The old allocation is released afterwards.
/// Because the new storage is completely built before the swap, a failed allocation leaves the
/// DynArray exactly as it was.
///
/// Capacity is always exactly the value requested by [`reserve`](DynArray::reserve),
/// [`resize`](DynArray::resize), [`with_cap`](DynArray::with_cap) or the growth policy: `1` for an
/// empty DynArray, otherwise double the current length.
///
/// # Iteration
/// Borrowed iteration goes through [`Deref<Target = [T]>`](Deref), so the borrow checker rejects
/// any structural mutation while a traversal is alive.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)`, `O(n)`* |
/// | `erase` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `clear` | `O(n)`*** |
/// | `swap` | `O(1)` |
///
/// \* If the DynArray doesn't have enough capacity for the new element, it reallocates in `O(n)`.
///
/// \** If the DynArray already has the requested capacity, `reserve` is `O(1)`.
///
/// \*** `O(1)` for types without drop glue.
pub struct DynArray<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> DynArray<T> {
    /// Creates a new DynArray with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let arr: DynArray<u8> = DynArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub const fn new() -> DynArray<T> {
        DynArray {
            buf: Buffer::empty(),
            len: 0,
        }
    }

    /// Creates a new, empty DynArray with capacity exactly equal to the provided value. This is the
    /// same as constructing one from a [`Reserve`].
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut arr: DynArray<u8> = DynArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// arr.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    #[track_caller]
    pub fn with_cap(cap: usize) -> DynArray<T> {
        DynArray {
            buf: Buffer::new(cap),
            len: 0,
        }
    }

    /// Returns the number of live elements in the DynArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynArray contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut arr: DynArray<u8> = DynArray::new();
    /// assert!(arr.is_empty());
    /// arr.push_back(1);
    /// assert!(!arr.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the DynArray can hold without reallocating.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the live elements as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots of buf are initialized, and the pointer is non-null and
        // properly aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As above, and the borrow checker guarantees exclusive access to self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a reference to the element at `index`, or an error if `index` isn't less than the
    /// length.
    ///
    /// This is the checked counterpart to indexing with `arr[index]`, which only asserts the
    /// precondition in debug builds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::{DynArray, IndexOutOfRange};
    /// let arr = DynArray::from([10, 20, 30]);
    /// assert_eq!(arr.at(1), Ok(&20));
    /// assert_eq!(arr.at(3), Err(IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        let len = self.len;
        self.as_slice().get(index).ok_or(IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`, or an error if `index` isn't less
    /// than the length.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(IndexOutOfRange { index, len })
    }

    /// Returns a reference to the element at `index`, without any bounds checking in release
    /// builds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](DynArray::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);
        // SAFETY: index < len, so the slot is initialized.
        unsafe { self.buf.get_unchecked(index).assume_init_ref() }
    }

    /// Returns a mutable reference to the element at `index`, without any bounds checking in
    /// release builds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](DynArray::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);
        // SAFETY: index < len, so the slot is initialized.
        unsafe { self.buf.get_unchecked_mut(index).assume_init_mut() }
    }

    /// Drops all elements, setting the length to 0. The capacity and allocation are kept for
    /// reuse.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// arr.clear();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shortens the DynArray to `new_len`, dropping the excess elements. Does nothing if `new_len`
    /// is greater than or equal to the current length. The capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail_len = self.len - new_len;
        // Update len first so that a panicking drop leaks instead of double dropping.
        self.len = new_len;

        // SAFETY: The slots in new_len..new_len + tail_len were initialized and are no longer
        // reachable now that len has been reduced.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(new_len),
                tail_len,
            ));
        }
    }

    /// Ensures that the capacity is at least `cap`, reallocating to exactly `cap` if it isn't
    /// already. Never shrinks.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or the allocation fails. See
    /// [`DynArray::try_reserve`].
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([1, 2]);
    /// arr.reserve(10);
    /// assert_eq!(arr.cap(), 10);
    /// arr.reserve(4);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    #[track_caller]
    pub fn reserve(&mut self, cap: usize) {
        self.try_reserve(cap).throw()
    }

    /// Fallible version of [`DynArray::reserve`].
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new storage can't be allocated, in which case the DynArray
    /// is unchanged.
    pub fn try_reserve(&mut self, cap: usize) -> Result<(), AllocError> {
        if cap <= self.cap() {
            return Ok(());
        }

        self.realloc_with_cap(cap)
    }

    /// Appends `value` to the end of the DynArray, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or the allocation fails. See
    /// [`DynArray::try_push_back`].
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut arr = DynArray::new();
    /// for i in 0..=5 {
    ///     arr.push_back(i);
    /// }
    /// assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw()
    }

    /// Fallible version of [`DynArray::push_back`]. `value` is dropped if growing fails.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new storage can't be allocated, in which case the DynArray
    /// is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.cap() {
            self.grow()?;
        }
        // SAFETY: There is room for at least one more element.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Appends `value` to the end of the DynArray, assuming that there is enough capacity to do so.
    ///
    /// # Safety
    /// The DynArray must have a length less than its capacity.
    pub const unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that slot len is within the allocation.
        unsafe { self.buf.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes the last element and returns it, or [`None`] if the DynArray is empty. The capacity
    /// is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([1, 2]);
    /// assert_eq!(arr.pop_back(), Some(2));
    /// assert_eq!(arr.pop_back(), Some(1));
    /// assert_eq!(arr.pop_back(), None);
    /// assert_eq!(arr.cap(), 2);
    /// ```
    pub const fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Slot len was initialized and is now outside of the live range, so reading it
            // moves the value out.
            Some(unsafe { self.buf.as_ptr().add(self.len).read() })
        }
    }

    /// Inserts `value` at `index`, shifting every element at or after `index` one slot towards the
    /// end. `index` may be equal to the length, which appends. Returns the index at which the value
    /// now resides.
    ///
    /// Growth follows the same policy as [`push_back`](DynArray::push_back). When growing, the
    /// prefix, the new value and the suffix are moved straight into the new storage.
    ///
    /// # Panics
    /// Panics if `index > len`, if the memory layout size exceeds [`isize::MAX`] or the allocation
    /// fails.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([0, 1, 2]);
    /// assert_eq!(arr.insert(1, 100), 1);
    /// arr.insert(0, 200);
    /// arr.insert(arr.len(), 300);
    /// assert_eq!(arr.as_slice(), &[200, 0, 100, 1, 2, 300]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).throw()
    }

    /// Fallible version of [`DynArray::insert`]. `value` is dropped if growing fails.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new storage can't be allocated, in which case the DynArray
    /// is unchanged.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, AllocError> {
        self.check_position(index);

        if self.len == self.cap() {
            let mut new_buf = Buffer::try_new(self.grown_cap()?)?;

            // SAFETY: new_buf has room for len + 1 elements. The prefix and suffix are initialized
            // in the old storage, which doesn't overlap the new one. After the swap, the old
            // storage only holds bitwise copies and is deallocated without dropping them.
            unsafe {
                let src = self.buf.as_ptr();
                let dst = new_buf.as_mut_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), self.len - index);
            }

            trace!(old_cap = self.cap(), new_cap = new_buf.cap(), len = self.len, "grew for insert");
            self.buf.swap(&mut new_buf);
        } else {
            // SAFETY: len < cap, so shifting len - index elements by one stays in bounds.
            // ptr::copy handles the overlap.
            unsafe {
                let at = self.buf.as_mut_ptr().add(index);
                ptr::copy(at, at.add(1), self.len - index);
                at.write(value);
            }
        }

        self.len += 1;
        Ok(index)
    }

    /// Removes and drops the element at `index`, shifting every following element one slot
    /// towards the start. Returns the index of the element that followed the erased one, which is
    /// `index` itself (equal to the new length if the last element was erased).
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from(['a', 'b', 'c']);
    /// assert_eq!(arr.erase(0), 0);
    /// assert_eq!(arr.erase(1), 1);
    /// assert_eq!(arr.as_slice(), &['b']);
    /// ```
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes the element at `index` and returns it, shifting every following element one slot
    /// towards the start.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the slot is initialized. The tail is shifted over the hole left
        // by the read, and len is reduced so the final slot becomes logically uninitialized.
        unsafe {
            let at = self.buf.as_mut_ptr().add(index);
            let value = at.read();
            ptr::copy(at.add(1), at, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Exchanges the storage, length and capacity of self and `other` in constant time.
    pub const fn swap(&mut self, other: &mut DynArray<T>) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out into a new DynArray, leaving self empty with capacity 0.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut a = DynArray::from([1, 2, 3]);
    /// let b = a.take();
    /// assert_eq!((a.len(), a.cap()), (0, 0));
    /// assert_eq!(b.as_slice(), &[1, 2, 3]);
    /// ```
    pub const fn take(&mut self) -> DynArray<T> {
        mem::replace(self, DynArray::new())
    }

    /// Reallocates into a new Buffer of exactly `new_cap` slots, moving all live elements.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) -> Result<(), AllocError> {
        debug_assert!(new_cap >= self.len);
        let mut new_buf = Buffer::try_new(new_cap)?;

        // SAFETY: Both buffers have room for len elements and don't overlap. The old buffer only
        // keeps bitwise copies afterwards, which it never drops.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }

        trace!(old_cap = self.cap(), new_cap, len = self.len, "reallocated");
        self.buf.swap(&mut new_buf);
        Ok(())
    }

    /// Grows the storage so that at least one more element fits.
    pub(crate) fn grow(&mut self) -> Result<(), AllocError> {
        self.realloc_with_cap(self.grown_cap()?)
    }

    /// The capacity used when a full DynArray needs room for one more element.
    pub(crate) const fn grown_cap(&self) -> Result<usize, CapacityOverflow> {
        if self.len == 0 {
            return Ok(MIN_CAP);
        }

        match self.len.checked_mul(GROWTH_FACTOR) {
            Some(cap) => Ok(cap),
            None => Err(CapacityOverflow { requested: usize::MAX }),
        }
    }

    /// Checks that the provided index refers to a live element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfRange {
                index,
                len: self.len,
            }).throw()
        }
    }

    /// Checks that the provided index is a valid insertion point, which includes the length.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    #[track_caller]
    pub(crate) fn check_position(&self, index: usize) {
        if index > self.len {
            Err(IndexOutOfRange {
                index,
                len: self.len,
            }).throw()
        }
    }
}

impl<T: Default> DynArray<T> {
    /// Creates a DynArray with `len` elements, each set to the default value of `T`. The capacity
    /// is exactly `len`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let arr: DynArray<u8> = DynArray::with_len(3);
    /// assert_eq!(arr.as_slice(), &[0, 0, 0]);
    /// assert_eq!(arr.cap(), 3);
    /// ```
    #[track_caller]
    pub fn with_len(len: usize) -> DynArray<T> {
        let mut arr = DynArray::with_cap(len);
        for _ in 0..len {
            // SAFETY: arr was created with capacity for len elements.
            unsafe { arr.push_unchecked(T::default()) };
        }
        arr
    }

    /// Changes the length to `new_len`.
    ///
    /// - If `new_len` exceeds the capacity, the storage is reallocated to exactly `new_len` and the
    ///   new slots are set to the default value.
    /// - If `new_len` is between the length and capacity, the new slots are set to the default
    ///   value in place.
    /// - Otherwise, the DynArray is [truncated](DynArray::truncate) and keeps its storage.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// arr.resize(5);
    /// assert_eq!(arr.as_slice(), &[1, 2, 3, 0, 0]);
    /// arr.resize(1);
    /// assert_eq!(arr.as_slice(), &[1]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    #[track_caller]
    pub fn resize(&mut self, new_len: usize) {
        self.try_resize(new_len).throw()
    }

    /// Fallible version of [`DynArray::resize`].
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new storage can't be allocated, in which case the DynArray
    /// is unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), AllocError> {
        if new_len < self.len {
            self.truncate(new_len);
            return Ok(());
        }

        if new_len > self.cap() {
            self.realloc_with_cap(new_len)?;
        }

        while self.len < new_len {
            // SAFETY: The capacity is at least new_len.
            unsafe { self.push_unchecked(T::default()) };
        }

        Ok(())
    }
}

impl<T: Clone> DynArray<T> {
    /// Creates a DynArray with `count` clones of `value`. The capacity is exactly `count`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::DynArray;
    /// let arr = DynArray::repeat("ab", 3);
    /// assert_eq!(arr.as_slice(), &["ab", "ab", "ab"]);
    /// ```
    #[track_caller]
    pub fn repeat(value: T, count: usize) -> DynArray<T> {
        let mut arr = DynArray::with_cap(count);
        for _ in 0..count {
            // SAFETY: arr was created with capacity for count elements.
            unsafe { arr.push_unchecked(value.clone()) };
        }
        arr
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = DynArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push_back(item);
        }

        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(value: [T; N]) -> Self {
        let mut arr = DynArray::with_cap(N);
        for item in value {
            // SAFETY: arr was created with capacity for N elements.
            unsafe { arr.push_unchecked(item) };
        }
        arr
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    fn from(value: &[T]) -> Self {
        let mut arr = DynArray::with_cap(value.len());
        for item in value {
            // SAFETY: arr was created with capacity for value.len() elements.
            unsafe { arr.push_unchecked(item.clone()) };
        }
        arr
    }
}

impl<T> From<Reserve> for DynArray<T> {
    fn from(value: Reserve) -> Self {
        DynArray::with_cap(value.requested_cap())
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // Drop the live elements, the Buffer then deallocates without touching its slots.
        self.clear();
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// Indexing requires `index < len`. The precondition is only asserted in debug builds, release
    /// builds still fall back to the slice bounds check rather than reading out of bounds.
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Deep copies the live elements. The clone's capacity equals the source's length, spare
    /// capacity isn't preserved.
    fn clone(&self) -> Self {
        DynArray::from(self.as_slice())
    }

    /// Copy-and-swap: the full copy is built before self is touched, so a panicking
    /// [`Clone::clone`] leaves self unchanged.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialOrd> PartialOrd for DynArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

/// Writes the elements separated by single spaces.
impl<T: Display> Display for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
