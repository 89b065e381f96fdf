//! brdec Core - Brotli Decoding Primitives
//!
//! The decode-side building blocks a Brotli (RFC 7932) block decoder sits on:
//! - Bit reader over chunked input with unchecked fast reads and
//!   streaming-safe reads that report "needs more input"
//! - Literal context ids for the four context modes
//! - Static dictionary word transforms (prefix, body operation, suffix)
//!
//! Nothing here allocates. Input and output buffers belong to the caller.
//!
//! # Example
//! ```rust
//! use brdec_core::{BitReader, ContextMode, literal_context, transform_dictionary_word};
//!
//! let input = [0b1010_1101u8, 0xFF];
//! let mut br = BitReader::new();
//! br.attach(input.len());
//! assert_eq!(br.safe_read_bits(&input, 3), Some(0b101));
//!
//! assert_eq!(literal_context(b'a', b' ', ContextMode::Lsb6), b'a' & 0x3F);
//!
//! let mut out = [0u8; 16];
//! let n = transform_dictionary_word(&mut out, b"the", 9);
//! assert_eq!(&out[..n], b"The");
//! ```

pub mod bit_reader;
pub mod context;
pub mod transform;

pub use bit_reader::{
    BitReader, BitReaderConfig, BitReaderState, FillStrategy, NativeRegister, Register, bit_mask,
};
pub use context::{ContextMode, distance_context, literal_context, literal_context_raw};
pub use transform::{
    NUM_TRANSFORMS, Transform, TransformKind, transform_dictionary_word, transformed_len,
    try_transform_dictionary_word,
};

/// Brotli decoding error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrotliError {
    #[error("Needs more input")]
    NeedsMoreInput,

    #[error("Non-zero padding bits before byte boundary")]
    InvalidPadding,

    #[error("Invalid context mode: {0}")]
    InvalidContextMode(u8),

    #[error("Invalid transform id: {0}")]
    InvalidTransform(usize),

    #[error("Output buffer too small: need {needed} bytes, have {available}")]
    OutputTooSmall { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, BrotliError>;
