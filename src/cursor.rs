// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A random-access cursor over the live prefix of either vector type.
//!
//! [`Cursor`] is a borrowed position: a slice of the live elements plus an
//! offset. It supports pointer-style arithmetic (`+`, `-`, `+=`, `-=`,
//! subscripting relative to the current position, distance between two
//! cursors) and iterates front-to-back, with [`DoubleEndedIterator`] giving
//! reverse traversal through `rev()`.
//!
//! A cursor dereferences straight to `&T`; the slot indirection inside the
//! vectors is invisible here. Because it borrows the vector, any operation
//! that could move or destroy elements (push, pop, resize, reallocation,
//! drop) cannot be called while a cursor is alive, making invalidation a
//! compile-time error rather than a runtime hazard.

// Core imports
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Index, Sub, SubAssign};

/// A non-owning position into a vector's live elements.
///
/// Created by [`FixedVec::cursor`](crate::FixedVec::cursor) and
/// [`HeapVec::cursor`](crate::HeapVec::cursor). Comparisons and distances are
/// by position; comparing cursors from different vectors is meaningless but
/// harmless, matching raw-pointer-style iterators.
pub struct Cursor<'a, T> {
    live: &'a [T],
    front: usize,
    back: usize, // exclusive
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(live: &'a [T]) -> Self {
        Cursor {
            back: live.len(),
            front: 0,
            live,
        }
    }

    /// The current offset from the start of the live prefix.
    #[inline]
    pub fn position(&self) -> usize {
        self.front
    }

    /// How many elements remain between the cursor and the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.back.saturating_sub(self.front)
    }

    /// The element at the current position, or `None` at the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        (self.front < self.back).then(|| &self.live[self.front])
    }

    /// Signed distance `self - other`, in elements.
    #[inline]
    pub fn distance(&self, other: &Self) -> isize {
        self.front as isize - other.front as isize
    }
}

// Positional arithmetic. Moving past the end is allowed (an end cursor is a
// valid position); dereferencing there is not.
impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;
    fn add(mut self, n: usize) -> Self {
        self.front += n;
        self
    }
}

impl<T> Sub<usize> for Cursor<'_, T> {
    type Output = Self;
    fn sub(mut self, n: usize) -> Self {
        debug_assert!(n <= self.front, "cursor moved back past the start");
        self.front -= n;
        self
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.front += n;
    }
}

impl<T> SubAssign<usize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: usize) {
        debug_assert!(n <= self.front, "cursor moved back past the start");
        self.front -= n;
    }
}

impl<T> Index<usize> for Cursor<'_, T> {
    type Output = T;

    /// Dereferences the element `n` past the current position.
    fn index(&self, n: usize) -> &T {
        &self.live[self.front + n]
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.front == other.front
    }
}
impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.front.cmp(&other.front)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            live: self.live,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.front)
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(&self.live[i])
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back.saturating_sub(self.front);
        (rem, Some(rem))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        let rem = self.back.saturating_sub(self.front);
        if n >= rem {
            self.front = self.back;
            return None;
        }
        let i = self.front + n;
        self.front = i + 1;
        Some(&self.live[i])
    }
}

impl<'a, T> DoubleEndedIterator for Cursor<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            self.back -= 1;
            Some(&self.live[self.back])
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}
impl<T> FusedIterator for Cursor<'_, T> {}
