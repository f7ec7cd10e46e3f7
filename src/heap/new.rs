// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::heap::HeapVec;
use crate::raw::RawSlots;

impl<T> HeapVec<T> {
    /// Constructs an empty vector without allocating.
    #[inline]
    pub const fn new() -> Self {
        HeapVec {
            buf: RawSlots::dangling(),
            len: 0,
        }
    }

    /// Constructs a vector holding `n` default-constructed elements, with
    /// capacity exactly `n`.
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::new();
        v.resize(n);
        v
    }

    /// Constructs a vector by cloning `values`, with capacity exactly
    /// `values.len()`.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.reserve(values.len());
        for value in values {
            v.push(value.clone());
        }
        v
    }
}

/// The literal-list construction form.
impl<T, const M: usize> From<[T; M]> for HeapVec<T> {
    fn from(values: [T; M]) -> Self {
        let mut v = Self::new();
        v.reserve(M);
        for value in values {
            v.push(value);
        }
        v
    }
}

impl<T> FromIterator<T> for HeapVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T> Extend<T> for HeapVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            self.reserve(self.len + lower);
        }
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::HeapVec;
    use alloc::string::{String, ToString};

    #[test]
    fn test_with_len_default_constructs() {
        let v: HeapVec<i32> = HeapVec::with_len(10);
        assert_eq!(v.len(), 10);
        assert_eq!(v.capacity(), 10);
        assert!(v.as_slice().iter().all(|&x| x == 0));
    }

    #[test]
    fn test_with_len_zero_does_not_allocate() {
        let v: HeapVec<String> = HeapVec::with_len(0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_from_array_takes_exact_capacity() {
        let v = HeapVec::from([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_slice_clones() {
        let src = ["a".to_string(), "b".to_string()];
        let v = HeapVec::from_slice(&src);
        assert_eq!(v.as_slice(), &src);
        assert_eq!(src[0], "a"); // source untouched
    }

    #[test]
    fn test_collect_and_extend() {
        let mut v: HeapVec<i32> = (1..=4).collect();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        v.extend([5, 6]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }
}
