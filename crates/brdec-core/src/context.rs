//! Literal Context Modeling
//!
//! Maps the previous one or two output bytes to a context id (0..=63) that
//! selects the literal prefix code for the next byte (RFC 7932 section 7.1).

use crate::BrotliError;

/// Context modes for literal decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContextMode {
    Lsb6 = 0,
    Msb6 = 1,
    Utf8 = 2,
    Signed = 3,
}

impl ContextMode {
    pub const ALL: [ContextMode; 4] = [
        ContextMode::Lsb6,
        ContextMode::Msb6,
        ContextMode::Utf8,
        ContextMode::Signed,
    ];

    /// Mode from the 2-bit field in a meta-block header
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => ContextMode::Lsb6,
            1 => ContextMode::Msb6,
            2 => ContextMode::Utf8,
            _ => ContextMode::Signed,
        }
    }
}

impl TryFrom<u8> for ContextMode {
    type Error = BrotliError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0..=3 => Ok(Self::from_bits(v)),
            _ => Err(BrotliError::InvalidContextMode(v)),
        }
    }
}

/// Second-order context lookup for UTF-8 text.
///
/// `context = UTF8_CONTEXT_LOOKUP[p1] | UTF8_CONTEXT_LOOKUP[p2 + 256]`.
///
/// For an ASCII last byte the first half gives `4 * class(p1)`:
/// 0 control, 1 `\t \n \r`, 2 space, 3 other punctuation, 4 quotes, 5 `%`,
/// 6 openers, 7 closers, 8 `, ; :`, 9 `.`, 10 `=`, 11 digit,
/// 12/13 upper-case vowel/consonant, 14/15 lower-case vowel/consonant.
/// The second half gives the class of the second-last byte: 0 control or
/// space, 1 punctuation, 2 upper-case or digit, 3 lower-case.
///
/// A continuation last byte yields 0 or 1 (next byte is ASCII or a lead
/// byte), a lead last byte yields 2 or 3 (next byte is a continuation).
pub const UTF8_CONTEXT_LOOKUP: [u8; 512] = [
    // Last byte, ASCII range
     0,  0,  0,  0,  0,  0,  0,  0,  0,  4,  4,  0,  0,  4,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     8, 12, 16, 12, 12, 20, 12, 16, 24, 28, 12, 12, 32, 12, 36, 12,
    44, 44, 44, 44, 44, 44, 44, 44, 44, 44, 32, 32, 24, 40, 28, 12,
    12, 48, 52, 52, 52, 48, 52, 52, 52, 48, 52, 52, 52, 52, 52, 48,
    52, 52, 52, 52, 52, 48, 52, 52, 52, 52, 52, 24, 12, 28, 12, 12,
    12, 56, 60, 60, 60, 56, 60, 60, 60, 56, 60, 60, 60, 60, 60, 56,
    60, 60, 60, 60, 60, 56, 60, 60, 60, 60, 60, 24, 12, 28, 12,  0,
    // Last byte, continuation range
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1,
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1,
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1,
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1,
    // Last byte, lead range
    2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3,
    2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3,
    2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3,
    2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3,
    // Second-last byte, ASCII range
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1,
    1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1,
    1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 1, 1, 1, 1, 0,
    // Second-last byte, continuation range
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // Second-last byte, lead range
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
];

/// Magnitude buckets for bytes read as signed integers
pub const SIGNED_3BIT_CONTEXT_LOOKUP: [u8; 256] = [
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 7,
];

/// Calculate literal context ID
#[inline]
pub fn literal_context(p1: u8, p2: u8, mode: ContextMode) -> u8 {
    match mode {
        ContextMode::Lsb6 => p1 & 0x3F,
        ContextMode::Msb6 => p1 >> 2,
        ContextMode::Utf8 => {
            UTF8_CONTEXT_LOOKUP[p1 as usize] | UTF8_CONTEXT_LOOKUP[p2 as usize + 256]
        }
        ContextMode::Signed => {
            (SIGNED_3BIT_CONTEXT_LOOKUP[p1 as usize] << 3) + SIGNED_3BIT_CONTEXT_LOOKUP[p2 as usize]
        }
    }
}

/// Literal context for a raw mode number; unknown modes map to context 0
#[inline]
pub fn literal_context_raw(p1: u8, p2: u8, mode: u8) -> u8 {
    match ContextMode::try_from(mode) {
        Ok(mode) => literal_context(p1, p2, mode),
        Err(_) => 0,
    }
}

// ============================================================================
// Combined lookup
// ============================================================================

/// All four modes as `(lut0, lut1)` pairs, 512 bytes per mode.
///
/// For every mode `literal_context(p1, p2, mode) ==
/// lut[p1] | lut[256 + p2]` with `lut = context_lut(mode)`, which lets a
/// literal loop pick the table once per block type instead of branching on
/// the mode for every byte.
pub static CONTEXT_LUT: [u8; 2048] = {
    let mut lut = [0u8; 2048];
    let mut i = 0;
    while i < 256 {
        // Lsb6: lut1 stays zero
        lut[i] = (i as u8) & 0x3F;
        // Msb6
        lut[512 + i] = (i as u8) >> 2;
        // Utf8
        lut[1024 + i] = UTF8_CONTEXT_LOOKUP[i];
        lut[1024 + 256 + i] = UTF8_CONTEXT_LOOKUP[256 + i];
        // Signed: bucket < 8, so OR and add agree
        lut[1536 + i] = SIGNED_3BIT_CONTEXT_LOOKUP[i] << 3;
        lut[1536 + 256 + i] = SIGNED_3BIT_CONTEXT_LOOKUP[i];
        i += 1;
    }
    lut
};

/// The 512-byte `(lut0, lut1)` region for `mode`
#[inline]
pub fn context_lut(mode: ContextMode) -> &'static [u8] {
    let start = (mode as usize) << 9;
    &CONTEXT_LUT[start..start + 512]
}

/// Context id from a table returned by `context_lut`
#[inline]
pub fn context_from_lut(lut: &[u8], p1: u8, p2: u8) -> u8 {
    lut[p1 as usize] | lut[256 + p2 as usize]
}

/// Distance context from copy length
#[inline]
pub fn distance_context(copy_len: u32) -> u8 {
    if copy_len > 4 { 3 } else { copy_len.saturating_sub(2) as u8 }
}

// ============================================================================
// Tests
// ============================================================================
