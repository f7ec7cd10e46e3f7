// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::heap::HeapVec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `HeapVec::into_iter()`.
///
/// Yields elements by value from front to back; elements never yielded are
/// dropped with the iterator, and the buffer is freed with it.
pub struct IntoIter<T> {
    vec: HeapVec<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slots `[front, back)` are live and owned by the
            // iterator; slot `i` is read out exactly once.
            Some(unsafe { self.vec.buf.slots()[i].assume_init_read() })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` is live and read out exactly once.
            Some(unsafe { self.vec.buf.slots()[self.back].assume_init_read() })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        // Zero the length first: the inner vector's own drop must not walk
        // slots this iterator already moved out.
        self.vec.len = 0;
        if core::mem::needs_drop::<T>() {
            for i in front..back {
                // SAFETY: slots `[front, back)` are the still-owned,
                // never-yielded elements.
                unsafe { self.vec.buf.slots_mut()[i].assume_init_drop() };
            }
        }
    }
}

impl<T> IntoIterator for HeapVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            vec: self,
        }
    }
}

impl<'a, T> IntoIterator for &'a HeapVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut HeapVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
