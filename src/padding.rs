//! 10* padding helpers (component C2).
//!
//! The rate block is 16 bytes wide. A partial final block is padded by
//! appending a single `0x01` byte and zero-filling the rest; a full block
//! needs no padding at all. This module gives that one rule a single
//! implementation that both the absorption and extraction paths call.

use crate::config::RATE_BYTES;

/// A 16-byte scratch buffer holding a padded rate block, plus the count of
/// bytes that came from the caller (as opposed to padding).
///
/// This is the scratch-buffer realization of the source's `pad`/`pad2`
/// helpers: rather than carrying a byte-valid mask through a CCW-wide word,
/// the final block is copied once into a fixed 16-byte buffer with the 10*
/// trailer already applied, and the two lane halves are read out of it with
/// a plain little-endian load.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaddedBlock {
    bytes: [u8; RATE_BYTES],
    valid_len: usize,
}

impl PaddedBlock {
    /// Pad `input` (0..=16 bytes) with a `0x01` trailer followed by zeros.
    ///
    /// # Panics
    /// Panics if `input` is longer than `RATE_BYTES`; callers only ever
    /// pass a final block, which is bounded by construction.
    pub(crate) fn pad(input: &[u8]) -> Self {
        assert!(input.len() <= RATE_BYTES, "final block exceeds rate width");
        let mut bytes = [0u8; RATE_BYTES];
        bytes[..input.len()].copy_from_slice(input);
        bytes[input.len()] = 0x01;
        Self {
            bytes,
            valid_len: input.len(),
        }
    }

    /// The padded 16 bytes, ready to be split into two little-endian lanes.
    pub(crate) const fn bytes(&self) -> &[u8; RATE_BYTES] {
        &self.bytes
    }

    /// Number of bytes that came from the caller, before padding.
    pub(crate) const fn valid_len(&self) -> usize {
        self.valid_len
    }
}
