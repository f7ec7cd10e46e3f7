// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::heap::HeapVec;
use crate::raw::RawSlots;

impl<T> HeapVec<T> {
    /// Grows the allocation to exactly `n` slots; a no-op if `n <= capacity`.
    ///
    /// The live prefix is moved into the new buffer in order and the old
    /// buffer is freed. Every outstanding reference and cursor is invalidated
    /// by a reallocation, which is why this takes `&mut self`.
    pub fn reserve(&mut self, n: usize) {
        if n > self.buf.cap() {
            self.reallocate(n);
        }
    }

    /// Shrinks the allocation to exactly `len`; a no-op if already tight.
    pub fn shrink_to_fit(&mut self) {
        if self.len < self.buf.cap() {
            self.reallocate(self.len);
        }
    }

    /// Replaces the buffer with one of exactly `new_cap` slots, moving the
    /// live prefix across. `new_cap` must hold `len` elements.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let mut next = RawSlots::allocate(new_cap);
        // SAFETY: both buffers are distinct allocations with at least `len`
        // slots; the bitwise copy transfers ownership of the live values to
        // `next`, and the old buffer is freed below without dropping them.
        unsafe {
            core::ptr::copy_nonoverlapping(self.buf.as_ptr(), next.as_mut_ptr(), self.len);
        }
        self.buf = next;
    }
}
