//! Bit Reader
//!
//! Bit-level reader for Brotli streams that tolerates chunked input.
//!
//! The reader does not hold on to its input. Every operation that consumes
//! bytes takes the current input chunk as `&[u8]`, and `next_in`/`avail_in`
//! track the position inside it. When the caller runs out of input it attaches
//! the next chunk and retries; bits already staged in the accumulator survive.
//!
//! There are two families of reads:
//! - `get_bits` / `take_bits` / `read_bits` / `fill_window` assume the caller
//!   already checked that enough input is left (`check_input_amount` with
//!   `fill_slack`).
//! - `safe_get_bits` / `safe_read_bits` pull input one byte at a time and
//!   return `None` when the chunk runs dry, leaving the reader untouched
//!   except for bytes moved into the accumulator.

mod config;
mod register;

pub use config::{BitReaderConfig, FillStrategy};
pub use register::{NativeRegister, Register};

use crate::{BrotliError, Result};

/// Masks for `n`-bit fields, `BIT_MASK[n] == (1 << n) - 1`
pub const BIT_MASK: [u32; 33] = [
    0x0000_0000,
    0x0000_0001, 0x0000_0003, 0x0000_0007, 0x0000_000F,
    0x0000_001F, 0x0000_003F, 0x0000_007F, 0x0000_00FF,
    0x0000_01FF, 0x0000_03FF, 0x0000_07FF, 0x0000_0FFF,
    0x0000_1FFF, 0x0000_3FFF, 0x0000_7FFF, 0x0000_FFFF,
    0x0001_FFFF, 0x0003_FFFF, 0x0007_FFFF, 0x000F_FFFF,
    0x001F_FFFF, 0x003F_FFFF, 0x007F_FFFF, 0x00FF_FFFF,
    0x01FF_FFFF, 0x03FF_FFFF, 0x07FF_FFFF, 0x0FFF_FFFF,
    0x1FFF_FFFF, 0x3FFF_FFFF, 0x7FFF_FFFF, 0xFFFF_FFFF,
];

/// Mask selecting the low `n_bits` bits (`n_bits` in `0..=32`)
#[inline]
pub const fn bit_mask(n_bits: u32) -> u32 {
    BIT_MASK[n_bits as usize]
}

/// Snapshot of a `BitReader`, for speculative parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitReaderState<R: Register = NativeRegister> {
    pub val: R,
    pub bit_pos: u32,
    pub next_in: usize,
    pub avail_in: usize,
}

/// Bit-level reader for Brotli streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitReader<R: Register = NativeRegister> {
    /// Pre-fetched bits, consumed from the low end
    val: R,
    /// Number of bits of `val` already consumed
    bit_pos: u32,
    /// Offset of the next unread byte in the current input chunk
    next_in: usize,
    /// Unread bytes left at `next_in`
    avail_in: usize,
    fill: FillStrategy,
}

impl BitReader {
    /// Create an empty reader with the native register and fill strategy
    pub fn new() -> Self {
        Self::from_config(BitReaderConfig::default())
    }

    /// Create an empty reader with the native register
    pub fn with_config(config: BitReaderConfig) -> Self {
        Self::from_config(config)
    }
}

impl<R: Register> Default for BitReader<R> {
    fn default() -> Self {
        Self::from_config(BitReaderConfig::default())
    }
}

impl<R: Register> BitReader<R> {
    /// Create an empty reader for any register width
    pub fn from_config(config: BitReaderConfig) -> Self {
        Self {
            val: R::ZERO,
            bit_pos: R::BITS,
            next_in: 0,
            avail_in: 0,
            fill: config.fill,
        }
    }

    /// Reset to an empty accumulator with no input attached
    pub fn init(&mut self) {
        self.val = R::ZERO;
        self.bit_pos = R::BITS;
        self.next_in = 0;
        self.avail_in = 0;
    }

    /// Point the reader at the start of a new input chunk of `avail_in` bytes.
    ///
    /// Bits already staged in the accumulator are kept and are read before
    /// the new chunk.
    pub fn attach(&mut self, avail_in: usize) {
        self.next_in = 0;
        self.avail_in = avail_in;
    }

    /// Ensures the accumulator is not empty, consuming at most one byte.
    ///
    /// Returns `false` if a byte is needed but no input is left.
    pub fn warm_up(&mut self, input: &[u8]) -> bool {
        if self.available_bits() == 0 && !self.pull_byte(input) {
            tracing::trace!("bit reader warm-up: no input available");
            return false;
        }
        true
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    pub fn fill_strategy(&self) -> FillStrategy {
        self.fill
    }

    /// Raw accumulator contents
    #[inline]
    pub fn accumulator(&self) -> R {
        self.val
    }

    #[inline]
    pub fn bit_position(&self) -> u32 {
        self.bit_pos
    }

    #[inline]
    pub fn next_in(&self) -> usize {
        self.next_in
    }

    #[inline]
    pub fn avail_in(&self) -> usize {
        self.avail_in
    }

    /// Bits staged in the accumulator and not yet consumed
    #[inline]
    pub fn available_bits(&self) -> u32 {
        R::BITS - self.bit_pos
    }

    /// Unread bytes, including whole bytes still staged in the accumulator
    #[inline]
    pub fn remaining_bytes(&self) -> usize {
        self.avail_in + (self.available_bits() >> 3) as usize
    }

    /// Checks that at least `num` bytes are left in the input chunk,
    /// not counting staged bits.
    #[inline]
    pub fn check_input_amount(&self, num: usize) -> bool {
        self.avail_in >= num
    }

    /// Input bytes one unchecked fill may touch with this register and
    /// strategy. Below that, use the `safe_*` reads.
    #[inline]
    pub fn fill_slack(&self) -> usize {
        self.fill.fill_slack(R::BITS)
    }

    // ========================================================================
    // Unchecked reads
    // ========================================================================

    /// Guarantees at least `n_bits + 1` staged bits (`n_bits` if the
    /// accumulator was empty).
    ///
    /// Precondition: the reader is warmed up and
    /// `check_input_amount(self.fill_slack())` holds. `Unaligned` fills read a
    /// whole register word from `input`.
    #[inline]
    pub fn fill_window(&mut self, input: &[u8], n_bits: u32) {
        match self.fill {
            FillStrategy::Unaligned if n_bits <= 8 => self.refill_word(input, 8),
            FillStrategy::Unaligned if n_bits <= 16 => self.refill_word(input, 16),
            _ => self.refill_half(input),
        }
    }

    /// Guarantees at least 16 staged bits, with the `fill_window` precondition.
    #[inline]
    pub fn fill_window_16(&mut self, input: &[u8]) {
        self.fill_window(input, 17);
    }

    /// Once `BITS - keep` bits are consumed, shifts them out and loads a full
    /// word above the `keep` bits left.
    #[inline]
    fn refill_word(&mut self, input: &[u8], keep: u32) {
        let threshold = R::BITS - keep;
        if self.bit_pos >= threshold {
            let consumed = (threshold >> 3) as usize;
            debug_assert!(self.avail_in >= consumed);
            self.val = self.val >> threshold;
            self.bit_pos -= threshold;
            self.val = self.val | (R::load_word_le(&input[self.next_in..]) << keep);
            self.avail_in -= consumed;
            self.next_in += consumed;
        }
    }

    #[inline]
    fn refill_half(&mut self, input: &[u8]) {
        let half = R::BITS / 2;
        if self.bit_pos >= half {
            let consumed = (half >> 3) as usize;
            debug_assert!(self.avail_in >= consumed);
            let chunk = &input[self.next_in..self.next_in + consumed];
            let loaded = match self.fill {
                FillStrategy::Unaligned => R::load_half_le(chunk),
                FillStrategy::Bytewise => chunk
                    .iter()
                    .rev()
                    .fold(R::ZERO, |acc, &byte| (acc << 8) | R::from_byte(byte)),
            };
            self.val = (self.val >> half) | (loaded << half);
            self.bit_pos -= half;
            self.avail_in -= consumed;
            self.next_in += consumed;
        }
    }

    /// Staged bits starting at the read position, unmasked
    #[inline]
    pub fn get_bits_unmasked(&self) -> R {
        if self.bit_pos >= R::BITS {
            R::ZERO
        } else {
            self.val >> self.bit_pos
        }
    }

    /// Unmasked peek with at least 16 valid bits
    #[inline]
    pub fn get_16_bits_unmasked(&mut self, input: &[u8]) -> u32 {
        self.fill_window(input, 16);
        self.get_bits_unmasked().low_u32()
    }

    /// Peek `n_bits` without advancing
    #[inline]
    pub fn get_bits(&mut self, input: &[u8], n_bits: u32) -> u32 {
        self.fill_window(input, n_bits);
        self.get_bits_unmasked().low_u32() & bit_mask(n_bits)
    }

    /// Advance the read position without looking at the bits
    #[inline]
    pub fn drop_bits(&mut self, n_bits: u32) {
        debug_assert!(n_bits <= self.available_bits());
        self.bit_pos += n_bits;
    }

    /// Read `n_bits` already staged in the accumulator
    #[inline]
    pub fn take_bits(&mut self, n_bits: u32) -> u32 {
        let val = self.get_bits_unmasked().low_u32() & bit_mask(n_bits);
        #[cfg(feature = "bit-trace")]
        tracing::trace!(
            avail_in = self.avail_in,
            bit_pos = self.bit_pos,
            n_bits,
            val,
            "take_bits"
        );
        self.drop_bits(n_bits);
        val
    }

    /// Read `n_bits` (up to 24, or 32 with a 64-bit register).
    ///
    /// Needs `fill_slack()` bytes of input, or twice that for more than 16
    /// bits on a 32-bit register, which takes two fills.
    #[inline]
    pub fn read_bits(&mut self, input: &[u8], n_bits: u32) -> u32 {
        debug_assert!(n_bits <= 32 && (R::BITS == 64 || n_bits <= 24));
        if R::BITS == 64 || n_bits <= 16 {
            self.fill_window(input, n_bits);
            self.take_bits(n_bits)
        } else {
            self.fill_window(input, 16);
            let low = self.take_bits(16);
            self.fill_window(input, 8);
            let high = self.take_bits(n_bits - 16);
            low | (high << 16)
        }
    }

    // ========================================================================
    // Checked reads
    // ========================================================================

    /// Shift one input byte into the top of the accumulator.
    ///
    /// Returns `false` when the input chunk is exhausted.
    #[inline]
    pub fn pull_byte(&mut self, input: &[u8]) -> bool {
        if self.avail_in == 0 {
            return false;
        }
        debug_assert!(self.bit_pos >= 8, "accumulator has no room for a byte");
        self.val = (self.val >> 8) | (R::from_byte(input[self.next_in]) << (R::BITS - 8));
        self.bit_pos -= 8;
        self.avail_in -= 1;
        self.next_in += 1;
        true
    }

    #[inline]
    fn pull_until(&mut self, input: &[u8], n_bits: u32) -> bool {
        debug_assert!(n_bits <= 32 && n_bits <= R::BITS - 8);
        while self.available_bits() < n_bits {
            if !self.pull_byte(input) {
                return false;
            }
        }
        true
    }

    /// Peek `n_bits`, or `None` if the input runs out first
    #[inline]
    pub fn safe_get_bits(&mut self, input: &[u8], n_bits: u32) -> Option<u32> {
        if !self.pull_until(input, n_bits) {
            return None;
        }
        Some(self.get_bits_unmasked().low_u32() & bit_mask(n_bits))
    }

    /// Read `n_bits`, or `None` if the input runs out first.
    ///
    /// On `None` the bytes that were available have been staged; attach more
    /// input and call again.
    #[inline]
    pub fn safe_read_bits(&mut self, input: &[u8], n_bits: u32) -> Option<u32> {
        if !self.pull_until(input, n_bits) {
            return None;
        }
        Some(self.take_bits(n_bits))
    }

    /// Read up to 32 bits on any register width.
    ///
    /// With a 32-bit register wide fields are read as two halves; if the
    /// second half is not available the reader is rolled back.
    pub fn safe_read_bits32(&mut self, input: &[u8], n_bits: u32) -> Option<u32> {
        if R::BITS == 64 || n_bits <= 16 {
            return self.safe_read_bits(input, n_bits);
        }
        let state = self.save_state();
        let low = self.safe_read_bits(input, 16)?;
        match self.safe_read_bits(input, n_bits - 16) {
            Some(high) => Some(low | (high << 16)),
            None => {
                self.restore_state(&state);
                None
            }
        }
    }

    // ========================================================================
    // Byte-level operations
    // ========================================================================

    /// Skip to the next byte boundary.
    ///
    /// Returns `false` if any skipped bit is set, which the format forbids.
    pub fn jump_to_byte_boundary(&mut self) -> bool {
        let pad_bits_count = self.available_bits() & 7;
        let pad_bits = if pad_bits_count != 0 {
            self.take_bits(pad_bits_count)
        } else {
            0
        };
        if pad_bits != 0 {
            tracing::debug!(pad_bits, pad_bits_count, "non-zero padding before byte boundary");
            return false;
        }
        true
    }

    /// `jump_to_byte_boundary` as a `Result`
    pub fn align_to_byte(&mut self) -> Result<()> {
        if self.jump_to_byte_boundary() {
            Ok(())
        } else {
            Err(BrotliError::InvalidPadding)
        }
    }

    /// Copy `dest.len()` raw bytes, draining staged bytes first.
    ///
    /// Returns `false`, touching nothing, when fewer bytes remain. The reader
    /// should be byte aligned and must be warmed up again afterwards.
    pub fn copy_bytes(&mut self, input: &[u8], dest: &mut [u8]) -> bool {
        let num = dest.len();
        if num > self.remaining_bytes() {
            tracing::debug!(num, remaining = self.remaining_bytes(), "copy past end of input");
            return false;
        }
        let mut copied = 0;
        while self.available_bits() >= 8 && copied < num {
            dest[copied] = self.get_bits_unmasked().low_u8();
            self.drop_bits(8);
            copied += 1;
        }
        let rest = num - copied;
        dest[copied..].copy_from_slice(&input[self.next_in..self.next_in + rest]);
        self.avail_in -= rest;
        self.next_in += rest;
        true
    }

    /// `copy_bytes` as a `Result`
    pub fn try_copy_bytes(&mut self, input: &[u8], dest: &mut [u8]) -> Result<()> {
        if self.copy_bytes(input, dest) {
            Ok(())
        } else {
            Err(BrotliError::NeedsMoreInput)
        }
    }

    /// Hand whole staged bytes back to the input chunk.
    ///
    /// Afterwards `next_in` points at the first byte not fully consumed, as
    /// far as the current chunk allows; bytes staged from an earlier chunk
    /// stay in the accumulator.
    pub fn unload(&mut self) {
        let unused_bytes = ((self.available_bits() >> 3) as usize).min(self.next_in);
        let unused_bits = (unused_bytes as u32) << 3;
        self.avail_in += unused_bytes;
        self.next_in -= unused_bytes;
        self.val = if unused_bits == R::BITS {
            R::ZERO
        } else {
            self.val << unused_bits
        };
        self.bit_pos += unused_bits;
    }

    // ========================================================================
    // Checkpointing
    // ========================================================================

    #[inline]
    pub fn save_state(&self) -> BitReaderState<R> {
        BitReaderState {
            val: self.val,
            bit_pos: self.bit_pos,
            next_in: self.next_in,
            avail_in: self.avail_in,
        }
    }

    #[inline]
    pub fn restore_state(&mut self, state: &BitReaderState<R>) {
        self.val = state.val;
        self.bit_pos = state.bit_pos;
        self.next_in = state.next_in;
        self.avail_in = state.avail_in;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reader<R: Register>(fill: FillStrategy, avail_in: usize) -> BitReader<R> {
        let mut br = BitReader::<R>::from_config(BitReaderConfig { fill });
        br.attach(avail_in);
        br
    }

    #[test]
    fn test_bit_reader_basic() {
        // 0b11010010: bits 0-7 are 0,1,0,0,1,0,1,1 (LSB first)
        let data = [0b1101_0010, 0b1011_0100];
        let mut br = BitReader::new();
        br.attach(data.len());

        assert_eq!(br.safe_read_bits(&data, 1), Some(0));
        assert_eq!(br.safe_read_bits(&data, 1), Some(1));
        assert_eq!(br.safe_read_bits(&data, 2), Some(0b00));
        assert_eq!(br.safe_read_bits(&data, 4), Some(0b1101));
        assert_eq!(br.safe_read_bits(&data, 8), Some(0b1011_0100));
        assert_eq!(br.safe_read_bits(&data, 1), None);
    }

    #[test]
    fn test_new_reader_is_empty() {
        let br = BitReader::<u64>::default();
        assert_eq!(br.available_bits(), 0);
        assert_eq!(br.remaining_bytes(), 0);
        assert_eq!(br.get_bits_unmasked(), 0);
    }

    #[test]
    fn test_warm_up() {
        let data = [0xA5];
        let mut br = BitReader::<u32>::default();
        assert!(!br.warm_up(&data));
        br.attach(1);
        assert!(br.warm_up(&data));
        assert_eq!(br.available_bits(), 8);
        assert_eq!(br.avail_in(), 0);
        // already warm, consumes nothing
        assert!(br.warm_up(&data));
    }

    #[test]
    fn test_bit_mask() {
        assert_eq!(bit_mask(0), 0);
        assert_eq!(bit_mask(1), 1);
        assert_eq!(bit_mask(24), 0x00FF_FFFF);
        assert_eq!(bit_mask(32), u32::MAX);
        for n in 0..32 {
            assert_eq!(bit_mask(n), (1u32 << n) - 1);
        }
    }

    #[test]
    fn test_fill_window_tiers_64() {
        let data: Vec<u8> = (1..=32).collect();

        let mut br = reader::<u64>(FillStrategy::Unaligned, data.len());
        br.fill_window(&data, 8);
        assert_eq!(br.available_bits(), 56);
        assert_eq!(br.next_in(), 7);

        let mut br = reader::<u64>(FillStrategy::Unaligned, data.len());
        br.fill_window(&data, 16);
        assert_eq!(br.available_bits(), 48);
        assert_eq!(br.next_in(), 6);

        let mut br = reader::<u64>(FillStrategy::Unaligned, data.len());
        br.fill_window(&data, 24);
        assert_eq!(br.available_bits(), 32);
        assert_eq!(br.next_in(), 4);
        assert_eq!(br.get_bits(&data, 24), 0x03_0201);
    }

    #[test]
    fn test_fill_window_bytewise_reads_half_words() {
        let data: Vec<u8> = (1..=8).collect();
        let mut br = reader::<u32>(FillStrategy::Bytewise, data.len());
        br.fill_window(&data, 8);
        assert_eq!(br.available_bits(), 16);
        assert_eq!(br.next_in(), 2);
        // only 16 staged, so peeking 16 refills once more
        assert_eq!(br.get_bits(&data, 16), 0x0201);
        assert_eq!(br.next_in(), 4);
        assert_eq!(br.available_bits(), 32);
        br.fill_window(&data, 8);
        assert_eq!(br.next_in(), 4);
    }

    #[test]
    fn test_get_bits_is_idempotent() {
        let data = [0x3C, 0x5A, 0x96, 0xF0, 0x0F, 0x11, 0x22, 0x33, 0x44, 0x55];
        let mut br = reader::<u64>(FillStrategy::Unaligned, data.len());
        let first = br.get_bits(&data, 12);
        let second = br.get_bits(&data, 12);
        assert_eq!(first, second);
        assert_eq!(first, 0xA3C);
        assert_eq!(br.take_bits(12), first);
        assert_eq!(br.get_bits(&data, 4), 0x5);
    }

    #[test]
    fn test_read_bits_split_on_32bit_register() {
        let data = [0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01];
        let mut br = reader::<u32>(FillStrategy::Bytewise, data.len());
        assert_eq!(br.read_bits(&data, 24), 0xAB_CDEF);
        assert_eq!(br.read_bits(&data, 20), 0x5_6789);
    }

    #[test]
    fn test_safe_read_needs_more_input() {
        let first = [0xFF];
        let second = [0x01, 0x00];
        let mut br = BitReader::<u64>::default();
        br.attach(first.len());
        assert_eq!(br.safe_read_bits(&first, 12), None);
        // the byte that was there is staged, not lost
        assert_eq!(br.available_bits(), 8);
        assert_eq!(br.avail_in(), 0);

        br.attach(second.len());
        assert_eq!(br.safe_read_bits(&second, 12), Some(0x1FF));
        assert_eq!(br.remaining_bytes(), 1);
    }

    #[test]
    fn test_safe_get_bits_does_not_advance() {
        let data = [0b0110_1001];
        let mut br = BitReader::<u32>::default();
        br.attach(1);
        assert_eq!(br.safe_get_bits(&data, 4), Some(0b1001));
        assert_eq!(br.safe_get_bits(&data, 4), Some(0b1001));
        assert_eq!(br.safe_get_bits(&data, 9), None);
        assert_eq!(br.safe_read_bits(&data, 8), Some(0b0110_1001));
    }

    #[test]
    fn test_safe_read_bits32() {
        let data = [0x78, 0x56, 0x34, 0x12];
        let mut br = BitReader::<u32>::default();
        br.attach(data.len());
        assert_eq!(br.safe_read_bits32(&data, 32), Some(0x1234_5678));

        let short = [0x78, 0x56, 0x34];
        let mut br = BitReader::<u32>::default();
        br.attach(short.len());
        let before = br.save_state();
        assert_eq!(br.safe_read_bits32(&short, 32), None);
        assert_eq!(br.save_state(), before);
    }

    #[test]
    fn test_jump_to_byte_boundary() {
        let data = [0b0000_0101, 0xAA];
        let mut br = BitReader::<u64>::default();
        br.attach(data.len());
        assert_eq!(br.safe_read_bits(&data, 3), Some(0b101));
        assert!(br.jump_to_byte_boundary());
        assert_eq!(br.available_bits() % 8, 0);
        // already aligned: nothing to check
        assert!(br.jump_to_byte_boundary());
        assert_eq!(br.safe_read_bits(&data, 8), Some(0xAA));

        let bad = [0b1000_0101];
        let mut br = BitReader::<u64>::default();
        br.attach(bad.len());
        assert_eq!(br.safe_read_bits(&bad, 3), Some(0b101));
        assert_eq!(br.align_to_byte(), Err(BrotliError::InvalidPadding));
    }

    #[test]
    fn test_copy_bytes_drains_accumulator_first() {
        let data: Vec<u8> = (0..16).collect();
        let mut br = reader::<u64>(FillStrategy::Unaligned, data.len());
        br.fill_window(&data, 24);
        assert_eq!(br.take_bits(8), 0);
        let mut out = [0u8; 10];
        assert!(br.copy_bytes(&data, &mut out));
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(br.remaining_bytes(), 5);

        let mut too_much = [0u8; 6];
        let before = br.save_state();
        assert_eq!(br.try_copy_bytes(&data, &mut too_much), Err(BrotliError::NeedsMoreInput));
        assert_eq!(br.save_state(), before);
    }

    #[test]
    fn test_unload_returns_whole_bytes() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22];
        let mut br = reader::<u64>(FillStrategy::Unaligned, data.len());
        assert_eq!(br.read_bits(&data, 4), 0x2);
        br.unload();
        assert_eq!(br.available_bits(), 4);
        assert_eq!(br.next_in(), 1);
        assert_eq!(br.avail_in(), data.len() - 1);
        assert_eq!(br.safe_read_bits(&data, 12), Some(0x341));
    }

    #[test]
    fn test_save_restore_state() {
        let data: Vec<u8> = (0..32).map(|i| i * 7).collect();
        let mut br = reader::<u64>(FillStrategy::Unaligned, data.len());
        br.read_bits(&data, 5);
        let state = br.save_state();
        br.read_bits(&data, 17);
        br.read_bits(&data, 3);
        br.read_bits(&data, 24);
        assert_ne!(br.save_state(), state);
        br.restore_state(&state);
        assert_eq!(br.save_state(), state);
        assert_eq!(br.accumulator(), state.val);
        assert_eq!(br.bit_position(), state.bit_pos);
    }

    #[test]
    fn test_fill_slack() {
        assert_eq!(reader::<u64>(FillStrategy::Unaligned, 0).fill_slack(), 8);
        assert_eq!(reader::<u64>(FillStrategy::Bytewise, 0).fill_slack(), 4);
        assert_eq!(reader::<u32>(FillStrategy::Unaligned, 0).fill_slack(), 4);
        assert_eq!(reader::<u32>(FillStrategy::Bytewise, 0).fill_slack(), 2);
    }

    #[test]
    fn test_unchecked_read_at_slack_boundary() {
        let data: Vec<u8> = (1..=8).collect();
        for fill in [FillStrategy::Unaligned, FillStrategy::Bytewise] {
            let slack = reader::<u64>(fill, 0).fill_slack();
            let mut br = reader::<u64>(fill, slack);
            assert!(br.check_input_amount(br.fill_slack()));
            assert_eq!(br.read_bits(&data[..slack], 8), 0x01);
            assert!(br.available_bits() >= 8);

            let short = reader::<u64>(fill, slack - 1);
            assert!(!short.check_input_amount(short.fill_slack()));
        }
    }

    fn read_gated<R: Register>(fill: FillStrategy, data: &[u8]) -> Vec<u32> {
        let mut br = reader::<R>(fill, data.len());
        (0..data.len())
            .map(|_| {
                if br.check_input_amount(br.fill_slack()) {
                    br.read_bits(data, 8)
                } else {
                    br.safe_read_bits(data, 8).expect("byte available")
                }
            })
            .collect()
    }

    #[test]
    fn test_slack_gated_reads_agree_across_strategies() {
        // too short for an unaligned word load, long enough for a half fill
        let data = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
        let expected: Vec<u32> = data.iter().map(|&b| b as u32).collect();
        for fill in [FillStrategy::Unaligned, FillStrategy::Bytewise] {
            assert_eq!(read_gated::<u64>(fill, &data), expected, "{fill:?}");
            assert_eq!(read_gated::<u32>(fill, &data), expected, "{fill:?}");
        }
    }

    fn check_16_bit_windows<R: Register>(fill: FillStrategy) {
        let data: Vec<u8> = (1..=32).collect();
        let mut br = reader::<R>(fill, data.len());
        br.fill_window_16(&data);
        assert!(br.available_bits() >= 16);
        assert_eq!(br.get_bits_unmasked().low_u32() & 0xFFFF, 0x0201);
        for i in 0..6u32 {
            let lo = 2 * i + 1;
            let expected = lo | ((lo + 1) << 8);
            assert_eq!(br.get_16_bits_unmasked(&data) & 0xFFFF, expected);
            assert!(br.available_bits() >= 16);
            br.fill_window_16(&data);
            assert!(br.available_bits() >= 16);
            br.drop_bits(16);
        }
    }

    #[test]
    fn test_16_bit_windows() {
        for fill in [FillStrategy::Unaligned, FillStrategy::Bytewise] {
            check_16_bit_windows::<u64>(fill);
            check_16_bit_windows::<u32>(fill);
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_unload_after_large_offset() {
        // next_in past u32::MAX must not truncate the hand-back count
        let mut br = BitReader::<u64>::default();
        br.restore_state(&BitReaderState {
            val: 0xAABB << 48,
            bit_pos: 48,
            next_in: (u32::MAX as usize) + 2,
            avail_in: 0,
        });
        br.unload();
        assert_eq!(br.next_in(), u32::MAX as usize);
        assert_eq!(br.avail_in(), 2);
        assert_eq!(br.available_bits(), 0);
    }
}
