// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction macros for [`FixedVec`](crate::FixedVec) and
//! [`HeapVec`](crate::HeapVec).
//!
//! Both macros accept three forms:
//!
//! - `fixed_vec![]` / `heap_vec![]`: an empty vector (the fixed capacity is
//!   taken from context).
//! - `fixed_vec![1, 2, 3]`: a vector holding the listed values; for
//!   `FixedVec` the capacity equals the element count.
//! - `fixed_vec![String => "a", "b"]`: the listed values are converted to the
//!   named element type with [`From`] before insertion.

/// Builds a [`FixedVec`](crate::FixedVec) from a value list.
///
/// ```rust
/// use slot_vec::{FixedVec, fixed_vec};
///
/// let v = fixed_vec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let s: FixedVec<String, 2> = fixed_vec![String => "a", "b"];
/// assert_eq!(s.as_slice(), &["a", "b"]);
/// ```
#[macro_export]
macro_rules! fixed_vec {
    () => {
        $crate::FixedVec::new()
    };
    ($t:ty => $($x:expr),+ $(,)?) => {
        $crate::FixedVec::from([$(<$t as ::core::convert::From<_>>::from($x)),+])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::FixedVec::from([$($x),+])
    };
}

/// Builds a [`HeapVec`](crate::HeapVec) from a value list.
///
/// ```rust
/// use slot_vec::{HeapVec, heap_vec};
///
/// let v = heap_vec![1, 2, 3];
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
///
/// let s: HeapVec<String> = heap_vec![String => "a", "b"];
/// assert_eq!(s.len(), 2);
/// ```
#[macro_export]
macro_rules! heap_vec {
    () => {
        $crate::HeapVec::new()
    };
    ($t:ty => $($x:expr),+ $(,)?) => {
        $crate::HeapVec::from([$(<$t as ::core::convert::From<_>>::from($x)),+])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::HeapVec::from([$($x),+])
    };
}
