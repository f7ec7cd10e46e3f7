// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::heap::HeapVec;

impl<T> HeapVec<T> {
    /// Shrinks to `n` elements, destroying the excess; a no-op if `n >= len`.
    /// The allocation is untouched.
    pub fn truncate(&mut self, n: usize) {
        while self.len > n {
            self.len -= 1;
            let i = self.len;
            // SAFETY: slot `i` was the last live slot; the length is lowered
            // before each drop so a panicking destructor leaves a consistent
            // (shorter) vector.
            unsafe { self.buf.slots_mut()[i].assume_init_drop() };
        }
    }

    /// Destroys all live elements; the allocation is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to exactly `n` elements, reserving first when growing.
    ///
    /// Shrinking destroys the tail; growing default-constructs new elements.
    pub fn resize(&mut self, n: usize)
    where
        T: Default,
    {
        self.resize_with(n, T::default);
    }

    /// Like [`resize`](Self::resize), but grows with values produced by `f`.
    pub fn resize_with(&mut self, n: usize, mut f: impl FnMut() -> T) {
        self.reserve(n);
        self.truncate(n);
        while self.len < n {
            let i = self.len;
            self.len += 1;
            self.buf.slots_mut()[i].write(f());
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::HeapVec;
    use crate::testutil::Probe;
    use core::cell::Cell;

    #[test]
    fn test_resize_grows_with_defaults() {
        let mut v: HeapVec<i32> = HeapVec::from([1, 2]);
        v.resize(5);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0, 0]);
        assert!(v.capacity() >= 5);
    }

    #[test]
    fn test_resize_shrinks_and_keeps_capacity() {
        let mut v: HeapVec<i32> = HeapVec::from([1, 2, 3, 4]);
        let cap = v.capacity();
        v.resize(1);
        assert_eq!(v.as_slice(), &[1]);
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn test_grow_then_resize_back_preserves_original_prefix() {
        let mut v: HeapVec<i32> = HeapVec::from([9, 8, 7]);
        v.resize(64);
        v.resize(3);
        assert_eq!(v.as_slice(), &[9, 8, 7]);
    }

    #[test]
    fn test_truncate_and_clear_drop_balance() {
        let drops = Cell::new(0);
        let mut v: HeapVec<Probe<'_>> = HeapVec::new();
        for i in 0..6 {
            v.push(Probe::new(i, &drops));
        }
        v.truncate(4);
        assert_eq!(drops.get(), 2);
        v.clear();
        assert_eq!(drops.get(), 6);
        assert!(v.is_empty());
        assert!(v.capacity() > 0);
    }

    #[test]
    fn test_resize_with_constructs_on_demand() {
        let mut counter = 0;
        let mut v: HeapVec<i32> = HeapVec::new();
        v.resize_with(3, || {
            counter += 1;
            counter * 10
        });
        assert_eq!(v.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_resize_to_same_len_is_noop() {
        let mut v: HeapVec<i32> = HeapVec::from([1, 2, 3]);
        v.resize(3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }
}
