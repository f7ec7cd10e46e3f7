// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`HeapVec`] type and its inherent API.
//!
//! `HeapVec<T>` owns a heap-allocated run of storage slots, a capacity, and a
//! logical length. It starts with no allocation at all and grows by
//! reallocating: a fresh slot array is allocated, the live prefix is moved
//! across, and the old array is freed. Growth on `push` at least doubles the
//! capacity, so appending is amortized O(1).
//!
//! Reallocation moves every element, so any operation that may reallocate
//! takes `&mut self`, and outstanding borrows, slices, and cursors cannot
//! survive it. The borrow checker turns the classic stale-iterator bug into a
//! compile error.

mod clone;
mod into_iter;
mod new;
mod push;
mod reserve;
mod resize;
mod slice;

pub use into_iter::IntoIter;

// Crate imports
use crate::raw::RawSlots;
use crate::slot;

// Core imports
use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

/// A growable vector over heap-allocated, initially uninitialized slots.
///
/// # Layout and invariants
///
/// - `buf` owns `capacity` slots of raw storage (no allocation while the
///   capacity is zero);
/// - `len <= capacity` counts the live slots, always the prefix `[0, len)`.
///
/// Slots past `len` are dead raw storage and are never read as `T`.
///
/// # Contract violations
///
/// Indexing out of bounds and popping from an empty vector panic. Allocation
/// failure is fatal (`handle_alloc_error`); it is not surfaced as a
/// recoverable error.
///
/// # Examples
///
/// ```rust
/// use slot_vec::HeapVec;
///
/// let mut v: HeapVec<i32> = HeapVec::new();
/// assert_eq!(v.capacity(), 0); // nothing allocated yet
/// for i in 1..=5 {
///     v.push(i);
/// }
/// assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
/// v.shrink_to_fit();
/// assert_eq!(v.capacity(), 5);
/// ```
pub struct HeapVec<T> {
    buf: RawSlots<T>,
    len: usize,
}

impl<T> HeapVec<T> {
    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Drop for HeapVec<T> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: exactly the first `len` slots were live. The buffer itself
        // is freed afterwards by `RawSlots::drop`.
        unsafe { slot::drop_prefix(self.buf.slots_mut(), len) }
    }
}

impl<T> Default for HeapVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for HeapVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for HeapVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for HeapVec<T> {}
impl<T: PartialOrd> PartialOrd for HeapVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord> Ord for HeapVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for HeapVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for HeapVec<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> DerefMut for HeapVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for HeapVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for HeapVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T> Borrow<[T]> for HeapVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for HeapVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
