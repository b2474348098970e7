//! A module containing [`DynArray`] and associated types.
//!
//! [`IntoIter`] provides owned iteration over a DynArray, while [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration.
//! [`Reserve`] can be used to construct a DynArray with capacity but no elements.
//!
//! [`DynArray`] is also re-exported under the parent module.

mod dyn_array;
mod iter;
mod reserve;
mod tests;

pub use dyn_array::*;
pub use iter::*;
pub use reserve::*;
#[doc(inline)]
pub use crate::util::error::{AllocError, CapacityOverflow, IndexOutOfRange, OutOfMemory};
