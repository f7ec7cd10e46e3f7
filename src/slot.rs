// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The storage cell underlying both vector types.
//!
//! A [`Slot<T>`] holds room for exactly one `T` but starts life untouched: no
//! constructor runs, no bit pattern is meaningful. Whether a slot currently
//! holds a live value is *not* recorded in the slot itself; the owning vector
//! tracks liveness through its `len`, and the live slots are always the prefix
//! `[0, len)`. The slot only offers the primitive moves: write a value in,
//! borrow it, read it out, drop it in place.

// Core imports
use core::mem::MaybeUninit;

/// A single cell of possibly-uninitialized storage for one `T`.
///
/// `#[repr(transparent)]` over [`MaybeUninit<T>`], so a contiguous run of
/// slots has exactly the layout of a contiguous run of `T` and can be viewed
/// as `[T]` once the prefix is known to be initialized.
#[repr(transparent)]
pub(crate) struct Slot<T>(MaybeUninit<T>);

impl<T> Slot<T> {
    /// An untouched slot. Usable in `[Slot::UNINIT; N]` array initializers.
    pub(crate) const UNINIT: Self = Slot(MaybeUninit::uninit());

    /// Moves `value` into the slot and returns a reference to it.
    ///
    /// Any value previously in the slot is *not* dropped; the caller must
    /// only write to slots it considers dead.
    #[inline]
    pub(crate) fn write(&mut self, value: T) -> &mut T {
        self.0.write(value)
    }

    /// Borrows the contained value.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value.
    #[inline]
    pub(crate) unsafe fn assume_init_ref(&self) -> &T {
        // SAFETY: guaranteed live by the caller.
        unsafe { self.0.assume_init_ref() }
    }

    /// Mutably borrows the contained value.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value.
    #[inline]
    pub(crate) unsafe fn assume_init_mut(&mut self) -> &mut T {
        // SAFETY: guaranteed live by the caller.
        unsafe { self.0.assume_init_mut() }
    }

    /// Moves the contained value out, leaving the slot dead.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value, and the caller must treat the slot as
    /// dead afterwards (double reads would duplicate ownership).
    #[inline]
    pub(crate) unsafe fn assume_init_read(&self) -> T {
        // SAFETY: guaranteed live by the caller.
        unsafe { self.0.assume_init_read() }
    }

    /// Drops the contained value in place, leaving the slot dead.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value, and the caller must treat the slot as
    /// dead afterwards.
    #[inline]
    pub(crate) unsafe fn assume_init_drop(&mut self) {
        // SAFETY: guaranteed live by the caller.
        unsafe { self.0.assume_init_drop() }
    }
}

/// Views the initialized prefix of a slot run as a slice of `T`.
///
/// # Safety
///
/// The first `len` slots of `slots` must hold live values.
#[inline]
pub(crate) unsafe fn live_prefix<T>(slots: &[Slot<T>], len: usize) -> &[T] {
    debug_assert!(len <= slots.len());
    // SAFETY: Slot<T> is repr(transparent) over MaybeUninit<T>, so the first
    // `len` slots, live by the caller's guarantee, are a valid `[T]`.
    unsafe { core::slice::from_raw_parts(slots.as_ptr() as *const T, len) }
}

/// Views the initialized prefix of a slot run as a mutable slice of `T`.
///
/// # Safety
///
/// The first `len` slots of `slots` must hold live values, and the borrow is
/// exclusive for its duration.
#[inline]
pub(crate) unsafe fn live_prefix_mut<T>(slots: &mut [Slot<T>], len: usize) -> &mut [T] {
    debug_assert!(len <= slots.len());
    // SAFETY: as in `live_prefix`; exclusivity comes from `&mut slots`.
    unsafe { core::slice::from_raw_parts_mut(slots.as_mut_ptr() as *mut T, len) }
}

/// Drops the live values in the first `len` slots.
///
/// # Safety
///
/// The first `len` slots must hold live values; all of them are dead after
/// this returns. Callers must lower their recorded length *before* calling so
/// a panicking destructor cannot leave live bookkeeping over dead slots.
#[inline]
pub(crate) unsafe fn drop_prefix<T>(slots: &mut [Slot<T>], len: usize) {
    if core::mem::needs_drop::<T>() {
        // SAFETY: the prefix is live and exclusively borrowed; dropping the
        // slice form drops each element exactly once.
        unsafe { core::ptr::drop_in_place(live_prefix_mut(slots, len)) }
    }
}
