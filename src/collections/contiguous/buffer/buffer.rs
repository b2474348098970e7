use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use tracing::debug;

use crate::util::error::{AllocError, CapacityOverflow, IndexOutOfRange, OutOfMemory};
use crate::util::result::ResultExtension;

/// An owned, fixed size block of uninitialized slots. Similar to a `Box<[MaybeUninit<T>]>`.
///
/// A Buffer has no notion of which of its slots are initialized, so it never drops its contents.
/// Dropping a Buffer only returns its memory to the global allocator. Keeping track of live values
/// is the responsibility of the owning collection, see
/// [`DynArray`](crate::collections::contiguous::DynArray).
///
/// Buffers can't be cloned. Ownership of the allocation can only move, either through a regular
/// Rust move, [`Buffer::swap`], [`Buffer::take`] or [`Buffer::into_parts`].
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `new` | `O(1)` |
/// | `cap` | `O(1)` |
/// | `index` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `take` | `O(1)` |
pub struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a new Buffer with capacity 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::Buffer;
    /// let buf: Buffer<u8> = Buffer::empty();
    /// assert_eq!(buf.cap(), 0);
    /// assert!(!buf.is_allocated());
    /// ```
    pub const fn empty() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a new Buffer with exactly `cap` uninitialized slots. A capacity of zero (or a
    /// zero-sized `T`) doesn't allocate.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`] or the allocation fails. See
    /// [`Buffer::try_new`] for a non-panicking alternative.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::Buffer;
    /// let mut buf: Buffer<u32> = Buffer::new(4);
    /// buf[2].write(42);
    /// assert_eq!(buf.cap(), 4);
    /// assert_eq!(unsafe { buf[2].assume_init_read() }, 42);
    /// ```
    #[track_caller]
    pub fn new(cap: usize) -> Buffer<T> {
        Self::try_new(cap).throw()
    }

    /// Attempts to allocate a new Buffer with exactly `cap` uninitialized slots.
    ///
    /// # Errors
    /// Returns [`AllocError::CapacityOverflow`] if the memory layout size would exceed
    /// [`isize::MAX`] and [`AllocError::OutOfMemory`] if the global allocator fails.
    pub fn try_new(cap: usize) -> Result<Buffer<T>, AllocError> {
        let layout = Self::make_layout(cap)?;
        let ptr = Self::make_ptr(layout)?;

        Ok(Buffer {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of slots in the Buffer.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if this Buffer owns an allocation from the global allocator. Buffers with
    /// capacity 0 or containing a zero-sized type never allocate.
    pub const fn is_allocated(&self) -> bool {
        self.cap != 0 && size_of::<T>() != 0
    }

    /// Returns a raw pointer to the first slot of the Buffer. The pointer is dangling if the
    /// Buffer [isn't allocated](Buffer::is_allocated).
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const().cast()
    }

    /// Returns a mutable raw pointer to the first slot of the Buffer. The pointer is dangling if
    /// the Buffer [isn't allocated](Buffer::is_allocated).
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Returns a reference to the slot at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`cap`](Buffer::cap). This is only checked with a debug
    /// assertion.
    pub unsafe fn get_unchecked(&self, index: usize) -> &MaybeUninit<T> {
        debug_assert!(index < self.cap, "slot {index} out of range for buffer of {}", self.cap);
        // SAFETY: It is up to the caller to ensure that index is in bounds of the allocation. Slots
        // are MaybeUninit, so referencing them is valid whether they are initialized or not.
        unsafe { self.ptr.add(index).as_ref() }
    }

    /// Returns a mutable reference to the slot at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`cap`](Buffer::cap). This is only checked with a debug
    /// assertion.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.cap, "slot {index} out of range for buffer of {}", self.cap);
        // SAFETY: As above, and the borrow checker guarantees we hold the only reference to self.
        unsafe { self.ptr.add(index).as_mut() }
    }

    /// Exchanges the allocations held by self and `other`, without copying any slots.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::Buffer;
    /// let mut a: Buffer<u8> = Buffer::new(10);
    /// let mut b: Buffer<u8> = Buffer::new(5);
    /// a.swap(&mut b);
    /// assert_eq!((a.cap(), b.cap()), (5, 10));
    /// ```
    pub const fn swap(&mut self, other: &mut Buffer<T>) {
        mem::swap(self, other);
    }

    /// Transfers ownership of the allocation into a new Buffer, leaving self empty with capacity
    /// 0.
    ///
    /// # Examples
    /// ```
    /// # use dynarray::collections::contiguous::Buffer;
    /// let mut a: Buffer<u8> = Buffer::new(3);
    /// let b = a.take();
    /// assert_eq!(a.cap(), 0);
    /// assert_eq!(b.cap(), 3);
    /// ```
    pub const fn take(&mut self) -> Buffer<T> {
        mem::replace(self, Buffer::empty())
    }

    /// Decomposes a Buffer into its raw pointer and capacity. The caller becomes responsible for
    /// the allocation, which can be handed back with [`Buffer::from_parts`].
    pub const fn into_parts(self) -> (NonNull<MaybeUninit<T>>, usize) {
        let ret = (self.ptr, self.cap);
        mem::forget(self);
        ret
    }

    /// Recreates a Buffer from the parts produced by [`Buffer::into_parts`].
    ///
    /// # Safety
    /// `ptr` and `cap` must have come from a single call to [`Buffer::into_parts`] (or describe an
    /// equivalent allocation in the global allocator) and must not be owned by anything else.
    pub const unsafe fn from_parts(ptr: NonNull<MaybeUninit<T>>, cap: usize) -> Buffer<T> {
        Buffer {
            ptr,
            cap,
            _phantom: PhantomData,
        }
    }
}

impl<T> Buffer<T> {
    /// A helper function to create a [`Layout`] for `cap` slots.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<MaybeUninit<T>>(cap).map_err(|_| CapacityOverflow { requested: cap })
    }

    /// A helper function to allocate the provided [`Layout`]. Returns a dangling pointer for a
    /// zero-sized layout.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<MaybeUninit<T>>, OutOfMemory> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr = unsafe { alloc::alloc(layout) };

        NonNull::new(raw_ptr.cast()).ok_or_else(|| {
            debug!(bytes = layout.size(), "allocation failed");
            OutOfMemory { bytes: layout.size() }
        })
    }

    #[track_caller]
    fn check_slot(&self, index: usize) {
        if index >= self.cap {
            Err(IndexOutOfRange {
                index,
                len: self.cap,
            }).throw()
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }

        // The layout was valid when allocating, so it is still valid now.
        if let Ok(layout) = Self::make_layout(self.cap) {
            // SAFETY: ptr was allocated in the global allocator with this exact layout, and
            // zero-sized layouts are never allocated or deallocated.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Index<usize> for Buffer<T> {
    type Output = MaybeUninit<T>;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.check_slot(index);
        // SAFETY: index has been checked against cap.
        unsafe { self.get_unchecked(index) }
    }
}

impl<T> IndexMut<usize> for Buffer<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.check_slot(index);
        // SAFETY: index has been checked against cap.
        unsafe { self.get_unchecked_mut(index) }
    }
}

// SAFETY: A Buffer uniquely owns its allocation, so it is Send when T: Send.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Shared access to a Buffer only ever hands out shared references to its slots.
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("cap", &self.cap)
            .field("allocated", &self.is_allocated())
            .finish()
    }
}
