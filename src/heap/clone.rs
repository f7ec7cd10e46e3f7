// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::heap::HeapVec;
use crate::raw::RawSlots;

impl<T: Clone> Clone for HeapVec<T> {
    /// Clones the live prefix; the new vector's capacity matches the
    /// source's capacity, not just its length.
    fn clone(&self) -> Self {
        let mut out = HeapVec {
            buf: RawSlots::allocate(self.capacity()),
            len: 0,
        };
        for value in self.as_slice() {
            out.push(value.clone());
        }
        out
    }

    /// Index-wise reconciliation in a reused buffer. Only when the target's
    /// capacity cannot hold the source's capacity is the buffer released and
    /// reallocated, and that happens up front, never mid-copy.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() < source.capacity() {
            self.truncate(0);
            self.buf = RawSlots::allocate(source.capacity());
        }
        // Shrink first so a panicking clone cannot leave dead slots inside
        // the recorded length.
        self.truncate(source.len());
        let overlap = self.len;
        for (dst, src) in self
            .as_mut_slice()
            .iter_mut()
            .zip(&source.as_slice()[..overlap])
        {
            dst.clone_from(src);
        }
        for value in &source.as_slice()[overlap..] {
            self.push(value.clone());
        }
    }
}

impl<T> HeapVec<T> {
    /// Moves the contents out, leaving `self` valid, empty, and unallocated.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}
