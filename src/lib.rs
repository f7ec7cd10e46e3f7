// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `slot-vec`
//!
//! Two `no_std` sequence containers built on manually managed slot storage:
//!
//! - [`FixedVec<T, N>`]: a fixed-capacity vector holding up to `N` elements
//!   inline, with no heap allocation, ever.
//! - [`HeapVec<T>`]: a dynamic vector over a heap-allocated slot buffer, with
//!   amortized-O(1) appends and explicit capacity control.
//!
//! Both track a logical length over a buffer of *slots*, storage cells that
//! may or may not hold a live element. Exactly the prefix `[0, len)` is live;
//! elements are constructed in place when the length grows and destroyed when
//! it shrinks, so element types never need `Default` placeholders and no
//! element is constructed or dropped more often than its lifecycle requires.
//!
//! ## Choosing a container
//!
//! Reach for [`FixedVec`] when the maximum length is known at compile time
//! and allocation is unwanted or unavailable; its buffer lives wherever the
//! vector does. Reach for [`HeapVec`] when the length is only known at run
//! time; it starts unallocated and grows by at-least-doubling, with
//! [`HeapVec::reserve`] and [`HeapVec::shrink_to_fit`] for exact sizing.
//!
//! ## Contract violations panic
//!
//! Capacity and emptiness misuse is a caller bug, not an error value:
//! pushing onto a full `FixedVec`, popping from an empty vector, or resizing
//! beyond a fixed capacity panics with a message naming the operation.
//! These checks stay on in release builds. Only deserialization (see the
//! `serde` feature) reports overflow as a recoverable error, since sequence
//! length there is external input.
//!
//! ## Views and iteration
//!
//! Both containers deref to `[T]`, so the whole slice API, indexing, and
//! ranges apply to the live prefix. On top of that, [`Cursor`] offers a
//! borrowed, random-access, pointer-style iterator with positional ordering
//! and distance; `into_iter()` consumes a vector and yields owned elements,
//! dropping whatever is never yielded.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for both containers as plain
//!   sequences. `FixedVec` rejects over-long input with a deserialization
//!   error.
//!
//! ## Example
//!
//! ```rust
//! use slot_vec::{FixedVec, HeapVec, fixed_vec, heap_vec};
//!
//! let mut f: FixedVec<i32, 4> = FixedVec::from_array([1, 2, 3]);
//! f.push(4);
//! assert!(f.is_full());
//! assert_eq!(f.pop(), 4);
//!
//! let _three = fixed_vec![1, 2, 3]; // capacity inferred from the list
//!
//! let mut h: HeapVec<i32> = heap_vec![];
//! h.extend(f.iter().copied());
//! h.shrink_to_fit();
//! assert_eq!(h.as_slice(), &[1, 2, 3]);
//! assert_eq!(h.capacity(), 3);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod cursor;
mod fixed;
mod heap;
#[macro_use]
mod macros;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod slot;
#[cfg(test)]
mod testutil;

// Public exports (crate API surface)
pub use cursor::Cursor;
pub use fixed::{FixedVec, IntoIter as FixedIntoIter};
pub use heap::{HeapVec, IntoIter as HeapIntoIter};
