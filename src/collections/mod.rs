//! Collection types.
//!
//! # Method
//! [`DynArray`](contiguous::DynArray) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which provides the read-only slice functionality (iteration, searching, sorting)
//! without repeating it here.

pub mod contiguous;
