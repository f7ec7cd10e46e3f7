// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`FixedVec`] type and its inherent API.
//!
//! `FixedVec<T, N>` stores up to `N` elements inline, in slots that start out
//! uninitialized, and tracks a logical length. Unlike a `Copy`-only inline
//! vector, the element type is unconstrained: since construction and
//! destruction are managed slot by slot, types with destructors and types
//! without `Default` or `Clone` all participate.
//!
//! Exceeding the capacity is a contract violation and panics; the type is
//! fixed-capacity by design and never reallocates silently.

mod clone;
mod into_iter;
mod new;
mod push;
mod resize;
mod slice;

pub use into_iter::IntoIter;

// Crate imports
use crate::slot::{self, Slot};

// Core imports
use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

/// A fixed-capacity vector with inline, initially uninitialized storage.
///
/// # Layout and invariants
///
/// Internally, `FixedVec<T, N>` maintains:
///
/// - a backing buffer of `N` storage slots, stored inline; and
/// - a logical length `len` with `0 <= len <= N`.
///
/// Slots in `buf[..len]` hold live values; slots in `buf[len..]` are untouched
/// or dead and are never read as `T`. The live region is always a contiguous
/// prefix, and every operation maintains that.
///
/// # Contract violations
///
/// Pushing when full, popping when empty, indexing out of bounds, and
/// resizing past `N` are programmer errors and panic. There are no fallible
/// variants: a fixed-capacity buffer that is full is a sizing bug at the call
/// site, not a recoverable condition.
///
/// # Examples
///
/// ```rust
/// use slot_vec::FixedVec;
///
/// let mut v: FixedVec<i32, 3> = FixedVec::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.pop(), 3);
/// ```
///
/// Element types without `Default` still get the full push/pop API:
///
/// ```rust
/// use slot_vec::FixedVec;
///
/// struct Handle(u32); // no Default, no Clone
///
/// let mut v: FixedVec<Handle, 2> = FixedVec::new();
/// v.push(Handle(7));
/// assert_eq!(v.pop().0, 7);
/// ```
pub struct FixedVec<T, const N: usize> {
    buf: [Slot<T>; N],
    len: usize,
}

impl<T, const N: usize> FixedVec<T, N> {
    /// The fixed capacity of this vector type.
    pub const CAPACITY: usize = N;

    /// Returns the capacity (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }
}

impl<T, const N: usize> Drop for FixedVec<T, N> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: exactly the first `len` slots were live; the length is
        // already lowered, so a panicking element destructor cannot cause a
        // second drop of the same slot.
        unsafe { slot::drop_prefix(&mut self.buf, len) }
    }
}

impl<T, const N: usize> Default for FixedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for FixedVec<T, N> {}
impl<T: PartialOrd, const N: usize> PartialOrd for FixedVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord, const N: usize> Ord for FixedVec<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for FixedVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for FixedVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for FixedVec<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T, const N: usize> Borrow<[T]> for FixedVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for FixedVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedVec;
    use crate::testutil::Probe;
    use alloc::format;
    use alloc::string::String;
    use core::cell::Cell;

    #[test]
    fn test_queries_on_empty() {
        let v: FixedVec<String, 4> = FixedVec::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 4);
        assert_eq!(FixedVec::<String, 4>::CAPACITY, 4);
        assert!(v.is_empty());
        assert!(!v.is_full());
        assert_eq!(v.spare_capacity(), 4);
    }

    #[test]
    fn test_drop_destroys_exactly_the_live_prefix() {
        let drops = Cell::new(0);
        {
            let mut v: FixedVec<Probe<'_>, 8> = FixedVec::new();
            v.push(Probe::new(1, &drops));
            v.push(Probe::new(2, &drops));
            v.push(Probe::new(3, &drops));
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_eq_ord_hash_see_only_live_elements() {
        use core::cmp::Ordering;
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a: FixedVec<i32, 5> = FixedVec::from_array([1, 2, 3]);
        let b: FixedVec<i32, 5> = FixedVec::from_array([1, 2, 3]);
        let c: FixedVec<i32, 5> = FixedVec::from_array([1, 2, 4]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hs = DefaultHasher::new();
        [1, 2, 3][..].hash(&mut hs);
        assert_eq!(ha.finish(), hs.finish());
    }

    #[test]
    fn test_debug_output() {
        let v: FixedVec<i32, 4> = FixedVec::from_array([1, 2]);
        let dbg = format!("{v:?}");
        assert!(dbg.contains("FixedVec"));
        assert!(dbg.contains("len"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_deref_and_borrow_views() {
        let mut v: FixedVec<i32, 4> = FixedVec::from_array([1, 2, 3]);
        let s: &[i32] = &v;
        assert_eq!(s, &[1, 2, 3]);
        let m: &mut [i32] = &mut v;
        m[0] = 10;
        assert_eq!(v.as_slice(), &[10, 2, 3]);
        assert_eq!(v.as_ref(), &[10, 2, 3]);
        assert!(v.contains(&10)); // slice method through Deref
    }

    #[test]
    fn test_range_indexing_through_deref() {
        let mut v: FixedVec<i32, 6> = FixedVec::from_array([0, 1, 2, 3, 4]);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[3..], &[3, 4]);
        v[1..3].copy_from_slice(&[10, 20]);
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 4]);
    }
}
