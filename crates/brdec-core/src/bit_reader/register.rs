//! Accumulator register words
//!
//! The bit reader stages input in a machine word. 64-bit targets use `u64`,
//! everything else (or the `reg32` feature) uses `u32`. Loads are always
//! little-endian, whatever the host byte order.

use std::fmt::{Debug, LowerHex};
use std::ops::{BitOr, Shl, Shr};

/// Register type picked for the current target
#[cfg(all(target_pointer_width = "64", not(feature = "reg32")))]
pub type NativeRegister = u64;

/// Register type picked for the current target
#[cfg(any(not(target_pointer_width = "64"), feature = "reg32"))]
pub type NativeRegister = u32;

/// A word the bit reader can stage bits in.
pub trait Register:
    Copy
    + Default
    + Eq
    + Debug
    + LowerHex
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitOr<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Width in bits
    const BITS: u32;
    const ZERO: Self;

    fn from_byte(byte: u8) -> Self;

    /// Low 32 bits, truncating
    fn low_u32(self) -> u32;

    /// Low 8 bits, truncating
    #[inline]
    fn low_u8(self) -> u8 {
        self.low_u32() as u8
    }

    /// Loads a full register width from the front of `input`, little-endian.
    fn load_word_le(input: &[u8]) -> Self;

    /// Loads half a register width from the front of `input`, little-endian,
    /// into the low half.
    fn load_half_le(input: &[u8]) -> Self;
}

impl Register for u64 {
    const BITS: u32 = 64;
    const ZERO: Self = 0;

    #[inline]
    fn from_byte(byte: u8) -> Self {
        byte as u64
    }

    #[inline]
    fn low_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn load_word_le(input: &[u8]) -> Self {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&input[..8]);
        u64::from_le_bytes(bytes)
    }

    #[inline]
    fn load_half_le(input: &[u8]) -> Self {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&input[..4]);
        u32::from_le_bytes(bytes) as u64
    }
}

impl Register for u32 {
    const BITS: u32 = 32;
    const ZERO: Self = 0;

    #[inline]
    fn from_byte(byte: u8) -> Self {
        byte as u32
    }

    #[inline]
    fn low_u32(self) -> u32 {
        self
    }

    #[inline]
    fn load_word_le(input: &[u8]) -> Self {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&input[..4]);
        u32::from_le_bytes(bytes)
    }

    #[inline]
    fn load_half_le(input: &[u8]) -> Self {
        let mut bytes = [0u8; 2];
        bytes.copy_from_slice(&input[..2]);
        u16::from_le_bytes(bytes) as u32
    }
}
