// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::fixed::FixedVec;
use crate::slot::Slot;

impl<T, const N: usize> FixedVec<T, N> {
    /// Constructs an empty vector. No element is constructed; the backing
    /// slots stay untouched until pushed into.
    #[inline]
    pub const fn new() -> Self {
        FixedVec {
            buf: [Slot::UNINIT; N],
            len: 0,
        }
    }

    /// Constructs a vector holding `n` default-constructed elements.
    ///
    /// # Panics
    ///
    /// Panics if `n > N`.
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::new();
        v.resize(n);
        v
    }

    /// Constructs a vector from an argument list of up to `N` values.
    ///
    /// Unlike `From<[T; N]>`, the list may be shorter than the capacity.
    ///
    /// # Panics
    ///
    /// Panics if `M > N`.
    pub fn from_array<const M: usize>(values: [T; M]) -> Self {
        assert!(
            M <= N,
            "FixedVec::from_array: {M} values exceed capacity {N}"
        );
        let mut v = Self::new();
        for value in values {
            v.push(value);
        }
        v
    }
}

/// The literal-list construction form: the list length becomes the capacity.
impl<T, const N: usize> From<[T; N]> for FixedVec<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

/// Collecting more than `N` elements is a contract violation and panics,
/// consistent with [`push`](FixedVec::push).
impl<T, const N: usize> FromIterator<T> for FixedVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize> Extend<T> for FixedVec<T, N> {
    /// # Panics
    ///
    /// Panics if the iterator yields more elements than the spare capacity.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
