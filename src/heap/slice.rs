// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::cursor::Cursor;
use crate::heap::HeapVec;
use crate::slot;

impl<T> HeapVec<T> {
    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[0, len)` are live by the type invariant.
        unsafe { slot::live_prefix(self.buf.slots(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // SAFETY: slots `[0, len)` are live; `&mut self` makes the borrow
        // exclusive.
        unsafe { slot::live_prefix_mut(self.buf.slots_mut(), len) }
    }

    /// A raw pointer to the first slot; dangling while nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    /// A mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// The first live element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The last live element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// A random-access cursor positioned at the first live element.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::HeapVec;

    #[test]
    fn test_slice_views() {
        let mut v: HeapVec<i32> = HeapVec::from([1, 2, 3]);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.as_mut_slice()[0] = 10;
        assert_eq!(v.as_slice(), &[10, 2, 3]);
    }

    #[test]
    fn test_empty_slice_views() {
        let v: HeapVec<i32> = HeapVec::new();
        assert!(v.as_slice().is_empty());
        assert_eq!(v.first(), None);
        assert_eq!(v.last(), None);
        assert_eq!(v.get(0), None);
    }

    #[test]
    fn test_last_is_the_final_live_element() {
        let mut v: HeapVec<i32> = HeapVec::new();
        v.push(1);
        assert_eq!(v.last(), Some(&1));
        v.push(2);
        assert_eq!(v.last(), Some(&2));
        v.pop();
        assert_eq!(v.last(), Some(&1));
    }

    #[test]
    fn test_checked_access_and_mutation() {
        let mut v: HeapVec<i32> = HeapVec::from([5, 6, 7]);
        assert_eq!(v.get(2), Some(&7));
        assert_eq!(v.get(3), None);
        *v.get_mut(1).unwrap() = 60;
        *v.first_mut().unwrap() = 50;
        assert_eq!(v.as_slice(), &[50, 60, 7]);
    }

    #[test]
    fn test_iterators() {
        let mut v: HeapVec<i32> = HeapVec::from([1, 2, 3]);
        assert_eq!(v.iter().copied().max(), Some(3));
        for x in v.iter_mut() {
            *x = -*x;
        }
        assert_eq!(v.as_slice(), &[-1, -2, -3]);
    }
}
