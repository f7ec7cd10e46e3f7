// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::fixed::FixedVec;

impl<T: Clone, const N: usize> Clone for FixedVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for value in self.as_slice() {
            out.push(value.clone());
        }
        out
    }

    /// Index-wise reconciliation rather than destroy-all-then-copy-all:
    /// excess elements are destroyed, the overlap is `clone_from`d in place,
    /// and only genuinely new elements are clone-constructed. This keeps
    /// construct/destroy traffic minimal and lets `clone_from` reuse any
    /// allocations the overlapping elements already own.
    fn clone_from(&mut self, source: &Self) {
        // Shrink first: after this point the live prefix only grows, so a
        // panicking clone cannot leave dead slots inside the recorded length.
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

impl<T, const N: usize> FixedVec<T, N> {
    /// Moves the contents out, leaving `self` valid and empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
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
    fn test_clone_is_deep() {
        let a: FixedVec<String, 4> = FixedVec::from_array(["x".to_string(), "y".to_string()]);
        let mut b = a.clone();
        b[0].push('!');
        assert_eq!(a.as_slice(), &["x", "y"]);
        assert_eq!(b.as_slice(), &["x!", "y"]);
    }

    #[test]
    fn test_clone_from_shorter_source_destroys_excess() {
        let drops = Cell::new(0);
        let mut target: FixedVec<Probe<'_>, 4> = FixedVec::new();
        for i in 0..3 {
            target.push(Probe::new(i, &drops));
        }
        let mut source: FixedVec<Probe<'_>, 4> = FixedVec::new();
        source.push(Probe::new(10, &drops));
        source.push(Probe::new(11, &drops));

        target.clone_from(&source);
        assert_eq!(target.len(), 2);
        assert_eq!(target[0].n, 10);
        assert_eq!(target[1].n, 11);
        // Exactly the one excess element was destroyed.
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_clone_from_longer_source_constructs_the_difference() {
        let drops = Cell::new(0);
        let mut target: FixedVec<Probe<'_>, 4> = FixedVec::new();
        target.push(Probe::new(0, &drops));
        target.push(Probe::new(1, &drops));
        let mut source: FixedVec<Probe<'_>, 4> = FixedVec::new();
        for i in [20, 21, 22] {
            source.push(Probe::new(i, &drops));
        }

        target.clone_from(&source);
        assert_eq!(target.len(), 3);
        assert_eq!(
            [target[0].n, target[1].n, target[2].n],
            [20, 21, 22]
        );
        // Two elements assigned in place, one constructed, none destroyed.
        assert_eq!(drops.get(), 0);
    }

    #[test]
    fn test_take_leaves_source_empty_and_usable() {
        let mut a: FixedVec<String, 3> = FixedVec::from_array(["a".to_string(), "b".to_string()]);
        let b = a.take();
        assert_eq!(a.len(), 0);
        assert_eq!(b.as_slice(), &["a", "b"]);
        a.push("again".to_string());
        assert_eq!(a.as_slice(), &["again"]);
    }

    #[test]
    fn test_move_transfers_without_copying_elements() {
        let drops = Cell::new(0);
        let mut v: FixedVec<Probe<'_>, 2> = FixedVec::new();
        v.push(Probe::new(5, &drops));
        let w = v; // plain move; no clone, no drop
        assert_eq!(drops.get(), 0);
        assert_eq!(w[0].n, 5);
        drop(w);
        assert_eq!(drops.get(), 1);
    }
}
