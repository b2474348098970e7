use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The error produced by checked access when an index isn't less than the length of the
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfRange {}

/// The requested capacity can't be described by a [`Layout`](std::alloc::Layout), because its size
/// in bytes would exceed [`isize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow {
    /// The number of elements that was requested.
    pub requested: usize,
}

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow! ({} elements requested)", self.requested)
    }
}

impl Error for CapacityOverflow {}

/// The global allocator couldn't satisfy an allocation of `bytes` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Out of memory! (failed to allocate {bytes} bytes)")]
pub struct OutOfMemory {
    pub bytes: usize,
}

/// Any error that can occur while allocating storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AllocError {
    OutOfMemory(OutOfMemory),
    CapacityOverflow(CapacityOverflow),
}
