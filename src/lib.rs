//! A growable, contiguous sequence container built from two small pieces.
//!
//! # Layout
//! - [`Buffer`](collections::contiguous::Buffer) owns a single allocation of uninitialized slots.
//!   It allocates on construction, deallocates on drop and can't be cloned, so exactly one value
//!   ever owns a block. Ownership moves with [`swap`](collections::contiguous::Buffer::swap) and
//!   [`take`](collections::contiguous::Buffer::take).
//! - [`DynArray`](collections::contiguous::DynArray) pairs a Buffer with a length. Growth doubles
//!   the capacity (starting at 1) by building a complete new Buffer and swapping it in, so a failed
//!   allocation never leaves a half-moved array behind.
//!
//! # Error Handling
//! Allocation failures are reported through [`AllocError`](collections::contiguous::AllocError)
//! from the `try_` family of methods. Their infallible counterparts panic with the error's message,
//! because nobody wants to handle a capacity overflow on every push.
//!
//! Indexing is split in two: `arr[i]` treats `i < len` as a precondition (asserted in debug
//! builds), while [`at`](collections::contiguous::DynArray::at) checks and returns
//! [`IndexOutOfRange`](collections::contiguous::IndexOutOfRange). Positions passed to
//! [`insert`](collections::contiguous::DynArray::insert) and
//! [`erase`](collections::contiguous::DynArray::erase) are contract violations when invalid and
//! always panic.
//!
//! Error types are plain structs implementing [`Error`](std::error::Error), combined into enums
//! with `derive_more` for static dispatch.
//!
//! # Logging
//! Reallocations are reported as `tracing` events at the `trace` level and allocation failures at
//! the `debug` level. The crate never installs a subscriber itself, see the `dynarray-demo` binary
//! for an example.
//!
//! # Features
//! - `macros` (default): the [`dynarray!`] macro.
//! - `demo` (default): the `dynarray-demo` binary.
// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

#[cfg(feature = "macros")]
mod macros;

pub(crate) mod util;
