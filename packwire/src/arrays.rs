//! The array kinds of the wire format.
//!
//! Fixed arrays are plain `[T; N]` and dynamic arrays plain `Vec<T>`; the
//! two shapes with non-obvious wire behavior get newtypes, [`Limited`] and
//! [`Greedy`]. All four kernels are parametric over the element codec, so
//! elements may be scalars, enumerations, or nested composites.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use crate::codec::{Decode, Encode, Error, FixedSize, Input, Output};
use crate::pretty::{Pretty, Printer};

/// Size of the 32-bit little-endian count preceding dynamic and limited
/// array payloads.
pub const COUNT_SIZE: usize = core::mem::size_of::<u32>();

fn encode_count<O: Output + ?Sized>(len: usize, buffer: &mut O) -> Result<(), Error> {
    let count = u32::try_from(len).map_err(|_| Error::CountOverflow)?;
    count.encode(buffer)
}

fn decode_count<I: Input + ?Sized>(buffer: &mut I) -> Result<usize, Error> {
    let raw = u32::decode(buffer)?;
    usize::try_from(raw).map_err(|_| Error::CountOverflow)
}

impl<T: FixedSize, const N: usize> FixedSize for [T; N] {
    const SIZE: usize = N * T::SIZE;
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode<O: Output + ?Sized>(&self, buffer: &mut O) -> Result<(), Error> {
        for element in self {
            element.encode(buffer)?;
        }
        Ok(())
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode<I: Input + ?Sized>(buffer: &mut I) -> Result<Self, Error> {
        let mut elements = Vec::with_capacity(N);
        for _ in 0..N {
            elements.push(T::decode(buffer)?);
        }
        // The vector holds exactly N elements at this point.
        Ok(elements.try_into().unwrap_or_else(|_| unreachable!()))
    }
}

impl<T: Pretty, const N: usize> Pretty for [T; N] {
    fn pretty(&self, name: &str, out: &mut Printer) {
        for element in self {
            element.pretty(name, out);
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode<O: Output + ?Sized>(&self, buffer: &mut O) -> Result<(), Error> {
        encode_count(self.len(), buffer)?;
        for element in self {
            element.encode(buffer)?;
        }
        Ok(())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode<I: Input + ?Sized>(buffer: &mut I) -> Result<Self, Error> {
        let count = decode_count(buffer)?;
        // Every element occupies at least one byte on the wire, so a count
        // beyond the remaining input can never decode. Checking up front
        // also bounds the allocation below by the input length.
        if count > buffer.remaining() {
            return Err(Error::BufferTooShort)
        }
        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            elements.push(T::decode(buffer)?);
        }
        Ok(elements)
    }
}

impl<T: Pretty> Pretty for Vec<T> {
    fn pretty(&self, name: &str, out: &mut Printer) {
        for element in self {
            element.pretty(name, out);
        }
    }
}

/// Variable-length array carried in a fixed-size wire region: a 32-bit
/// count followed by exactly `N` element slots.
///
/// Encoding writes `min(len, N)` as the count, the leading elements in
/// order, and zero-fills the unused slots; contents beyond the capacity are
/// silently truncated to the first `N` elements. Decoding keeps
/// `min(count, N)` elements and discards the rest of the region, reporting
/// success even when the count exceeds the capacity.
///
/// The region has the same size for every value, which is why the element
/// type must be [`FixedSize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limited<T, const N: usize>(pub Vec<T>);

impl<T, const N: usize> Limited<T, N> {
    /// Capacity of the wire region in elements.
    pub const CAPACITY: usize = N;

    /// Wrap existing contents.
    pub fn new(elements: Vec<T>) -> Self {
        Self(elements)
    }

    /// The logical elements, without the reserved slots.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> Deref for Limited<T, N> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for Limited<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T, const N: usize> From<Vec<T>> for Limited<T, N> {
    fn from(elements: Vec<T>) -> Self {
        Self(elements)
    }
}

impl<T: FixedSize, const N: usize> FixedSize for Limited<T, N> {
    const SIZE: usize = COUNT_SIZE + N * T::SIZE;
}

impl<T: Encode + FixedSize, const N: usize> Encode for Limited<T, N> {
    fn encode<O: Output + ?Sized>(&self, buffer: &mut O) -> Result<(), Error> {
        let used = self.0.len().min(N);
        encode_count(used, buffer)?;
        for element in &self.0[..used] {
            element.encode(buffer)?;
        }
        for _ in 0..(N - used) * T::SIZE {
            buffer.push_byte(0)?;
        }
        Ok(())
    }
}

impl<T: Decode + FixedSize, const N: usize> Decode for Limited<T, N> {
    fn decode<I: Input + ?Sized>(buffer: &mut I) -> Result<Self, Error> {
        let count = decode_count(buffer)?;
        let kept = count.min(N);
        let mut elements = Vec::with_capacity(kept);
        for _ in 0..kept {
            elements.push(T::decode(buffer)?);
        }
        buffer.skip((N - kept) * T::SIZE)?;
        Ok(Self(elements))
    }
}

impl<T: Pretty, const N: usize> Pretty for Limited<T, N> {
    fn pretty(&self, name: &str, out: &mut Printer) {
        for element in &self.0 {
            element.pretty(name, out);
        }
    }
}

/// Array that extends to the end of the enclosing buffer: no count on the
/// wire, the input bound delimits the elements.
///
/// Only meaningful as the last field of a message; nothing can follow bytes
/// that run to the end of the input. Decoding consumes elements until the
/// input is exhausted and fails if a partial element remains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greedy<T>(pub Vec<T>);

impl<T> Greedy<T> {
    /// Wrap existing contents.
    pub fn new(elements: Vec<T>) -> Self {
        Self(elements)
    }

    /// The elements.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> Deref for Greedy<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Greedy<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Greedy<T> {
    fn from(elements: Vec<T>) -> Self {
        Self(elements)
    }
}

impl<T: Encode> Encode for Greedy<T> {
    fn encode<O: Output + ?Sized>(&self, buffer: &mut O) -> Result<(), Error> {
        for element in &self.0 {
            element.encode(buffer)?;
        }
        Ok(())
    }
}

impl<T: Decode> Decode for Greedy<T> {
    fn decode<I: Input + ?Sized>(buffer: &mut I) -> Result<Self, Error> {
        let mut elements = Vec::new();
        while buffer.remaining() > 0 {
            elements.push(T::decode(buffer)?);
        }
        Ok(Self(elements))
    }
}

impl<T: Pretty> Pretty for Greedy<T> {
    fn pretty(&self, name: &str, out: &mut Printer) {
        for element in &self.0 {
            element.pretty(name, out);
        }
    }
}
