//! Contiguous collection types. [`Buffer`] owns a fixed block of uninitialized slots and
//! [`DynArray`] builds a growable sequence on top of it.
#![warn(missing_docs)]

pub mod buffer;
pub mod dyn_array;

#[doc(inline)]
pub use buffer::Buffer;
#[doc(inline)]
pub use dyn_array::{AllocError, DynArray, IndexOutOfRange, IntoIter, Reserve, reserve};
