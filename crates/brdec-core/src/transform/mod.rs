//! Static Dictionary Word Transforms
//!
//! A dictionary reference in a Brotli stream names a word and one of 121
//! transforms. Each transform is a prefix, a body operation and a suffix
//! (RFC 7932 section 8). Prefixes and suffixes live in one shared byte pool
//! and are addressed by offset, so applying a transform never allocates.

mod table;

pub use table::{PREFIX_SUFFIX, TRANSFORMS};

use crate::{BrotliError, Result};

/// Number of entries in the transform table
pub const NUM_TRANSFORMS: usize = 121;

/// Longest prefix or suffix fragment in the pool
pub const MAX_AFFIX_LEN: usize = 8;

/// Body operation of a transform, numbered as in the format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransformKind {
    Identity = 0,
    OmitLast1 = 1,
    OmitLast2 = 2,
    OmitLast3 = 3,
    OmitLast4 = 4,
    OmitLast5 = 5,
    OmitLast6 = 6,
    OmitLast7 = 7,
    OmitLast8 = 8,
    OmitLast9 = 9,
    UppercaseFirst = 10,
    UppercaseAll = 11,
    OmitFirst1 = 12,
    OmitFirst2 = 13,
    OmitFirst3 = 14,
    OmitFirst4 = 15,
    OmitFirst5 = 16,
    OmitFirst6 = 17,
    OmitFirst7 = 18,
    OmitFirst8 = 19,
    OmitFirst9 = 20,
}

impl TransformKind {
    /// Bytes dropped from the front of the word
    #[inline]
    pub const fn omit_first(self) -> usize {
        let t = self as u8;
        if t >= TransformKind::OmitFirst1 as u8 {
            (t - TransformKind::OmitFirst1 as u8 + 1) as usize
        } else {
            0
        }
    }

    /// Bytes dropped from the back of the word
    #[inline]
    pub const fn omit_last(self) -> usize {
        let t = self as u8;
        if t <= TransformKind::OmitLast9 as u8 {
            t as usize
        } else {
            0
        }
    }
}

/// Transform table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    /// Offset of the prefix in `PREFIX_SUFFIX`
    pub prefix_id: u8,
    pub kind: TransformKind,
    /// Offset of the suffix in `PREFIX_SUFFIX`
    pub suffix_id: u8,
}

impl Transform {
    /// Table entry for `id`, if in range
    #[inline]
    pub fn get(id: usize) -> Option<&'static Transform> {
        TRANSFORMS.get(id)
    }

    #[inline]
    pub fn prefix(&self) -> &'static [u8] {
        affix(self.prefix_id)
    }

    #[inline]
    pub fn suffix(&self) -> &'static [u8] {
        affix(self.suffix_id)
    }

    /// The part of `word` the body operation keeps
    #[inline]
    pub fn body<'w>(&self, word: &'w [u8]) -> &'w [u8] {
        let word = word.get(self.kind.omit_first()..).unwrap_or(&[]);
        &word[..word.len().saturating_sub(self.kind.omit_last())]
    }

    /// Exact output length for a word of `word_len` bytes
    #[inline]
    pub fn output_len(&self, word_len: usize) -> usize {
        let body = word_len
            .saturating_sub(self.kind.omit_first())
            .saturating_sub(self.kind.omit_last());
        self.prefix().len() + body + self.suffix().len()
    }

    /// Write the transformed word to `dst`, returning the length written.
    ///
    /// `dst` must hold `output_len(word.len())` bytes.
    pub fn apply(&self, dst: &mut [u8], word: &[u8]) -> usize {
        let prefix = self.prefix();
        dst[..prefix.len()].copy_from_slice(prefix);
        let start = prefix.len();

        let body = self.body(word);
        let end = start + body.len();
        dst[start..end].copy_from_slice(body);

        match self.kind {
            TransformKind::UppercaseFirst if end > start => {
                to_upper_case(&mut dst[start..end]);
            }
            TransformKind::UppercaseAll => {
                let mut pos = start;
                while pos < end {
                    pos += to_upper_case(&mut dst[pos..end]);
                }
            }
            _ => {}
        }

        let suffix = self.suffix();
        dst[end..end + suffix.len()].copy_from_slice(suffix);
        end + suffix.len()
    }
}

/// Pool fragment starting at `id`, up to its NUL
#[inline]
fn affix(id: u8) -> &'static [u8] {
    let tail = &PREFIX_SUFFIX[id as usize..];
    let len = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
    &tail[..len]
}

/// Uppercase the character at the front of `p`, returning its byte length.
///
/// This is the format's approximation, not Unicode case mapping: ASCII
/// `a..=z` flip bit 5, any other byte below 0xC0 is left alone, a two-byte
/// sequence flips bit 5 of its second byte, and anything longer XORs its
/// third byte with 5. Bytes past the end of `p` are not touched, and an
/// empty `p` returns 0.
pub fn to_upper_case(p: &mut [u8]) -> usize {
    let Some(&first) = p.first() else {
        return 0;
    };
    if first < 0xC0 {
        if first.is_ascii_lowercase() {
            p[0] ^= 32;
        }
        return 1;
    }
    if first < 0xE0 {
        if let Some(b) = p.get_mut(1) {
            *b ^= 32;
        }
        return 2;
    }
    if let Some(b) = p.get_mut(2) {
        *b ^= 5;
    }
    3
}

/// Transform a dictionary word into `dst`, returning the length written.
///
/// `transform_id` must be below `NUM_TRANSFORMS` and `dst` must be large
/// enough (`transformed_len`); both are checked only by slice indexing.
#[inline]
pub fn transform_dictionary_word(dst: &mut [u8], word: &[u8], transform_id: usize) -> usize {
    TRANSFORMS[transform_id].apply(dst, word)
}

/// Output length of `transform_dictionary_word`, or `None` for a bad id
#[inline]
pub fn transformed_len(word_len: usize, transform_id: usize) -> Option<usize> {
    Transform::get(transform_id).map(|t| t.output_len(word_len))
}

/// Checked `transform_dictionary_word`
pub fn try_transform_dictionary_word(
    dst: &mut [u8],
    word: &[u8],
    transform_id: usize,
) -> Result<usize> {
    let Some(transform) = Transform::get(transform_id) else {
        tracing::debug!(transform_id, "transform id out of range");
        return Err(BrotliError::InvalidTransform(transform_id));
    };
    let needed = transform.output_len(word.len());
    if dst.len() < needed {
        tracing::debug!(transform_id, needed, available = dst.len(), "transform output buffer too small");
        return Err(BrotliError::OutputTooSmall {
            needed,
            available: dst.len(),
        });
    }
    Ok(transform.apply(dst, word))
}

// ============================================================================
// Tests
// ============================================================================
