// This file is part of slot-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedVec`](crate::FixedVec) and
//! [`HeapVec`](crate::HeapVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence; a `FixedVec` rejects sequences
//!   longer than its capacity `N` with a deserialization error, while a
//!   `HeapVec` grows as needed.
//!
//! Because the slot storage never constructs placeholder elements, neither
//! impl requires `T: Default`; deserialized values are written straight into
//! uninitialized slots.

// Crate imports
use crate::fixed::FixedVec;
use crate::heap::HeapVec;

// Core imports
use core::fmt;
use core::marker::PhantomData;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

fn serialize_live<T: Serialize, S: Serializer>(sl: &[T], s: S) -> Result<S::Ok, S::Error> {
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(Some(sl.len()))?;
    for item in sl {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Serialize, const N: usize> Serialize for FixedVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_live(self.as_slice(), s)
    }
}

impl<T: Serialize> Serialize for HeapVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_live(self.as_slice(), s)
    }
}

struct FixedVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> de::Visitor<'de> for FixedVisitor<T, N> {
    type Value = FixedVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = FixedVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            // Sequence length is external input, so overflow is a
            // deserialization error rather than a caller bug.
            if out.is_full() {
                return Err(de::Error::custom(format_args!(
                    "too many elements (capacity {N})"
                )));
            }
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedVec<T, N> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(FixedVisitor::<T, N>(PhantomData))
    }
}

struct HeapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for HeapVisitor<T> {
    type Value = HeapVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = HeapVec::<T>::new();
        // The length hint comes from the input and cannot be trusted;
        // preallocate at most a bounded amount and let amortized growth
        // cover honest long sequences.
        if let Some(hint) = a.size_hint() {
            out.reserve(hint.min(4096));
        }
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for HeapVec<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(HeapVisitor::<T>(PhantomData))
    }
}
