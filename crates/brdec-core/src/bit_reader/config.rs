//! Bit Reader Configuration

/// How the bit window is refilled from input.
///
/// Both strategies produce identical bit sequences. `Unaligned` loads a whole
/// register word at once and therefore reads a few bytes past what it
/// consumes; `Bytewise` only ever touches bytes it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStrategy {
    /// Tiered full-word loads (x86, x86_64, ARMv7, ARMv8)
    Unaligned,
    /// Half-word refills assembled one byte at a time
    Bytewise,
}

impl FillStrategy {
    /// Strategy for the current target.
    ///
    /// Unaligned loads are only used on CPUs known to handle them cheaply,
    /// and never with the `portable` feature.
    pub const fn native() -> Self {
        if cfg!(feature = "portable") {
            FillStrategy::Bytewise
        } else if cfg!(any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "aarch64",
            all(target_arch = "arm", target_feature = "v7")
        )) {
            FillStrategy::Unaligned
        } else {
            FillStrategy::Bytewise
        }
    }

    /// Bytes of input that must be available before an unchecked fill.
    ///
    /// `register_bits` is the accumulator width.
    pub const fn fill_slack(self, register_bits: u32) -> usize {
        match self {
            FillStrategy::Unaligned => (register_bits / 8) as usize,
            FillStrategy::Bytewise => (register_bits / 16) as usize,
        }
    }
}

impl Default for FillStrategy {
    fn default() -> Self {
        Self::native()
    }
}

/// Bit reader configuration options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitReaderConfig {
    /// Window refill strategy
    pub fill: FillStrategy,
}

impl BitReaderConfig {
    /// Configuration that never reads past consumed input
    pub const fn portable() -> Self {
        Self { fill: FillStrategy::Bytewise }
    }

    /// Configuration using tiered word loads
    pub const fn unaligned() -> Self {
        Self { fill: FillStrategy::Unaligned }
    }
}
