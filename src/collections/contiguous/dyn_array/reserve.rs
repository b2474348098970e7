/// A request for capacity, used to construct an empty [`DynArray`](super::DynArray) that can hold
/// `requested_cap` elements without reallocating.
///
/// # Examples
/// ```
/// # use dynarray::collections::contiguous::{reserve, DynArray};
/// let arr: DynArray<String> = DynArray::from(reserve(8));
/// assert_eq!(arr.len(), 0);
/// assert_eq!(arr.cap(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reserve {
    requested_cap: usize,
}

impl Reserve {
    /// Creates a new Reserve for `requested_cap` elements.
    pub const fn new(requested_cap: usize) -> Reserve {
        Reserve { requested_cap }
    }

    /// Returns the requested capacity.
    pub const fn requested_cap(&self) -> usize {
        self.requested_cap
    }
}

/// Shorthand for [`Reserve::new`].
pub const fn reserve(requested_cap: usize) -> Reserve {
    Reserve::new(requested_cap)
}
