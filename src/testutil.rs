// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test helpers.

// Core imports
use core::cell::Cell;

/// Counts every drop through a shared cell; used to check that the vectors
/// construct and destroy each slot exactly once. Deliberately not `Default`
/// and not `Copy`.
pub(crate) struct Probe<'a> {
    pub(crate) n: i32,
    drops: &'a Cell<usize>,
}

impl<'a> Probe<'a> {
    pub(crate) fn new(n: i32, drops: &'a Cell<usize>) -> Self {
        Probe { n, drops }
    }
}

impl Clone for Probe<'_> {
    fn clone(&self) -> Self {
        Probe {
            n: self.n,
            drops: self.drops,
        }
    }

    // In-place assignment, no drop of the destination. The default
    // `clone_from` would drop the overwritten value and skew the drop
    // counts the reconciliation tests assert on.
    fn clone_from(&mut self, source: &Self) {
        self.n = source.n;
        self.drops = source.drops;
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
