// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::heap::HeapVec;

impl<T> HeapVec<T> {
    /// Appends `value` and returns a reference to the new element.
    ///
    /// When the vector is at capacity it first grows to
    /// `max(2 * capacity, 1)`, so appends stay amortized O(1) and an
    /// unallocated vector starts at capacity 1.
    #[inline]
    pub fn push(&mut self, value: T) -> &mut T {
        if self.len == self.buf.cap() {
            self.reserve(core::cmp::max(2 * self.buf.cap(), 1));
        }
        let i = self.len;
        self.len += 1;
        self.buf.slots_mut()[i].write(value)
    }

    /// Removes the last element and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn pop(&mut self) -> T {
        assert!(self.len > 0, "pop on an empty HeapVec");
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot; the length is already
        // lowered, so ownership moves out exactly once.
        unsafe { self.buf.slots()[self.len].assume_init_read() }
    }
}
