// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::fixed::FixedVec;

impl<T, const N: usize> FixedVec<T, N> {
    /// Appends `value` and returns a reference to the new element.
    ///
    /// The value is constructed directly in the first dead slot; nothing else
    /// moves.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full. A full fixed-capacity vector is a sizing
    /// bug at the call site; there is no silent reallocation.
    #[inline]
    pub fn push(&mut self, value: T) -> &mut T {
        assert!(self.len < N, "push on a full FixedVec (capacity {N})");
        let i = self.len;
        self.len += 1;
        self.buf[i].write(value)
    }

    /// Removes the last element and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn pop(&mut self) -> T {
        assert!(self.len > 0, "pop on an empty FixedVec");
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot; the length is already
        // lowered, so ownership moves out exactly once.
        unsafe { self.buf[self.len].assume_init_read() }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedVec;
    use crate::testutil::Probe;
    use alloc::string::{String, ToString};
    use core::cell::Cell;

    #[test]
    fn test_push_pop_roundtrip_restores_size() {
        let mut v: FixedVec<String, 4> = FixedVec::new();
        v.push("a".to_string());
        let before = v.len();
        v.push("b".to_string());
        assert_eq!(v.pop(), "b");
        assert_eq!(v.len(), before);
    }

    #[test]
    fn test_push_returns_reference_to_new_element() {
        let mut v: FixedVec<i32, 3> = FixedVec::new();
        let r = v.push(41);
        *r += 1;
        assert_eq!(v.as_slice(), &[42]);
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut v: FixedVec<i32, 3> = FixedVec::new();
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.len(), 3);
        assert!(v.is_full());
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "full FixedVec")]
    fn test_push_past_capacity_panics() {
        let mut v: FixedVec<i32, 3> = FixedVec::new();
        v.push(1);
        v.push(2);
        v.push(3);
        v.push(4);
    }

    #[test]
    #[should_panic(expected = "empty FixedVec")]
    fn test_pop_on_empty_panics() {
        let mut v: FixedVec<i32, 3> = FixedVec::new();
        let _ = v.pop();
    }

    #[test]
    fn test_pop_moves_ownership_out() {
        let drops = Cell::new(0);
        let mut v: FixedVec<Probe<'_>, 2> = FixedVec::new();
        v.push(Probe::new(9, &drops));
        let p = v.pop();
        assert_eq!(p.n, 9);
        assert_eq!(drops.get(), 0); // still alive in `p`
        drop(p);
        assert_eq!(drops.get(), 1);
        drop(v);
        assert_eq!(drops.get(), 1); // vector had nothing left to drop
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut v: FixedVec<(), 4> = FixedVec::new();
        v.push(());
        v.push(());
        assert_eq!(v.len(), 2);
        v.pop();
        assert_eq!(v.len(), 1);
    }
}
