// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::fixed::FixedVec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `FixedVec::into_iter()`.
///
/// Yields elements by value from front to back; elements never yielded are
/// dropped with the iterator.
pub struct IntoIter<T, const N: usize> {
    vec: FixedVec<T, N>,
    front: usize,
    back: usize, // exclusive
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slots `[front, back)` are live and owned by the
            // iterator; slot `i` is read out exactly once.
            Some(unsafe { self.vec.buf[i].assume_init_read() })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` is live and read out exactly once.
            Some(unsafe { self.vec.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        // Zero the length first: the inner vector's own drop must not walk
        // slots this iterator already moved out.
        self.vec.len = 0;
        if core::mem::needs_drop::<T>() {
            for i in front..back {
                // SAFETY: slots `[front, back)` are the still-owned,
                // never-yielded elements.
                unsafe { self.vec.buf[i].assume_init_drop() };
            }
        }
    }
}

impl<T, const N: usize> IntoIterator for FixedVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            vec: self,
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedVec;
    use crate::testutil::Probe;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn test_into_iter_yields_owned_values_in_order() {
        let v: FixedVec<String, 4> =
            FixedVec::from_array(["a".to_string(), "b".to_string(), "c".to_string()]);
        let collected: Vec<String> = v.into_iter().collect();
        assert_eq!(collected, ["a", "b", "c"]);
    }

    #[test]
    fn test_into_iter_double_ended() {
        let v: FixedVec<i32, 5> = FixedVec::from_array([1, 2, 3, 4]);
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_dropping_half_consumed_iterator_drops_the_rest() {
        let drops = Cell::new(0);
        let mut v: FixedVec<Probe<'_>, 8> = FixedVec::new();
        for i in 0..5 {
            v.push(Probe::new(i, &drops));
        }
        let mut it = v.into_iter();
        let first = it.next().unwrap();
        assert_eq!(first.n, 0);
        drop(first);
        assert_eq!(drops.get(), 1);
        drop(it);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_borrowing_into_iterator_forms() {
        let mut v: FixedVec<i32, 4> = FixedVec::from_array([1, 2, 3]);
        let sum: i32 = (&v).into_iter().sum();
        assert_eq!(sum, 6);
        for x in &mut v {
            *x += 1;
        }
        assert_eq!(v.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_reverse_iteration() {
        let v: FixedVec<i32, 3> = FixedVec::from_array([1, 2, 3]);
        let rev: Vec<i32> = v.into_iter().rev().collect();
        assert_eq!(rev, [3, 2, 1]);
    }
}
