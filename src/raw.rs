// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The heap-allocated cell array backing [`HeapVec`](crate::HeapVec).
//!
//! [`RawSlots<T>`] owns a run of `cap` [`Slot<T>`] cells and nothing else: it
//! allocates and frees the memory, but never constructs or drops a `T`. The
//! vector layered on top decides which cells are live. Zero capacities and
//! zero-sized element types never touch the allocator; the pointer is then
//! dangling and only the capacity bookkeeping is real.

// Crate imports
use crate::slot::Slot;

// Core imports
use core::marker::PhantomData;
use core::ptr::NonNull;

// Alloc imports
use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};

pub(crate) struct RawSlots<T> {
    ptr: NonNull<Slot<T>>,
    cap: usize,
    // Owns the (uninitialized) storage for `cap` slots, not any `T` values.
    _marker: PhantomData<T>,
}

impl<T> RawSlots<T> {
    /// An empty array: no allocation, capacity zero.
    pub(crate) const fn dangling() -> Self {
        RawSlots {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for exactly `cap` slots.
    ///
    /// Allocation failure is fatal (`handle_alloc_error`). When the requested
    /// layout is zero-sized (`cap == 0` or `T` zero-sized) no allocation
    /// happens and only the capacity is recorded.
    pub(crate) fn allocate(cap: usize) -> Self {
        let layout = Self::layout(cap);
        if layout.size() == 0 {
            return RawSlots {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            };
        }
        // SAFETY: layout has nonzero size.
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw as *mut Slot<T>) else {
            handle_alloc_error(layout);
        };
        RawSlots {
            ptr,
            cap,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const Slot<T> {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut Slot<T> {
        self.ptr.as_ptr()
    }

    /// All `cap` slots, live or not.
    ///
    /// Handing out `&[Slot<T>]` is safe: a slot never promises a live value.
    #[inline]
    pub(crate) fn slots(&self) -> &[Slot<T>] {
        // SAFETY: `ptr` is valid for `cap` slots (dangling only when the
        // layout is zero-sized, where any aligned pointer is valid).
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<T>] {
        // SAFETY: as in `slots`, plus exclusivity through `&mut self`.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }

    fn layout(cap: usize) -> Layout {
        Layout::array::<Slot<T>>(cap).expect("slot buffer layout overflows")
    }
}

impl<T> Drop for RawSlots<T> {
    fn drop(&mut self) {
        let layout = Self::layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: allocated in `allocate` with this exact layout; element
            // values were already dropped by the owning vector.
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) }
        }
    }
}

// The array is exclusively owned and hands out references only through its
// owner's borrows, so it is as thread-compatible as `T` itself.
unsafe impl<T: Send> Send for RawSlots<T> {}
unsafe impl<T: Sync> Sync for RawSlots<T> {}
