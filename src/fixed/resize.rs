// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::fixed::FixedVec;

impl<T, const N: usize> FixedVec<T, N> {
    /// Shrinks to `n` elements, destroying the excess; a no-op if `n >= len`.
    pub fn truncate(&mut self, n: usize) {
        while self.len > n {
            self.len -= 1;
            // SAFETY: slot `len` was the last live slot; the length is
            // lowered before each drop so a panicking destructor leaves a
            // consistent (shorter) vector.
            unsafe { self.buf[self.len].assume_init_drop() };
        }
    }

    /// Destroys all live elements; capacity is unaffected.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to exactly `n` elements.
    ///
    /// Shrinking destroys the tail; growing default-constructs new elements.
    /// The `T: Default` bound lives here, not on the type: element types
    /// without a default value keep every other operation and only lose
    /// growth-by-resize.
    ///
    /// # Panics
    ///
    /// Panics if `n > N`.
    pub fn resize(&mut self, n: usize)
    where
        T: Default,
    {
        self.resize_with(n, T::default);
    }

    /// Like [`resize`](Self::resize), but grows with values produced by `f`.
    ///
    /// # Panics
    ///
    /// Panics if `n > N`.
    pub fn resize_with(&mut self, n: usize, mut f: impl FnMut() -> T) {
        assert!(n <= N, "resize to {n} exceeds FixedVec capacity {N}");
        self.truncate(n);
        while self.len < n {
            self.push(f());
        }
    }
}
