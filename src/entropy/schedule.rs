//! Entropy size schedule.
//!
//! The number of accepted strokes selects one of five BIP39 entropy
//! lengths. One stroke yields one bit, so a length of `n` bits needs
//! at least `n` accepted strokes.

use serde::Serialize;

/// BIP39 entropy lengths in bits, smallest first.
pub const ENTROPY_SIZES: [usize; 5] = [128, 160, 192, 224, 256];

/// Accepted strokes required before a mnemonic can be generated.
pub const MIN_STROKES: usize = ENTROPY_SIZES[0];

/// Bits per mnemonic word.
pub const BITS_PER_WORD: usize = 11;

/// One entry of the entropy schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntropySize {
    entropy_bits: usize,
}

impl EntropySize {
    /// Returns the schedule entry selected by `strokes` accepted strokes.
    pub fn for_strokes(strokes: usize) -> Self {
        Self {
            entropy_bits: ENTROPY_SIZES[size_index(strokes)],
        }
    }

    /// Iterates over every schedule entry.
    pub fn all() -> impl Iterator<Item = EntropySize> {
        ENTROPY_SIZES
            .iter()
            .map(|&entropy_bits| EntropySize { entropy_bits })
    }

    /// Entropy length in bits.
    #[inline]
    pub fn entropy_bits(&self) -> usize {
        self.entropy_bits
    }

    /// Checksum length in bits (`entropy / 32`).
    #[inline]
    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits / 32
    }

    /// Number of mnemonic words (`(entropy + checksum) / 11`).
    #[inline]
    pub fn word_count(&self) -> usize {
        (self.entropy_bits + self.checksum_bits()) / BITS_PER_WORD
    }
}

/// Schedule index for a stroke count.
///
/// Steps every 32 strokes, starting at 128 and saturating at the last
/// entry. Counts below 128 map to index 0.
pub fn size_index(strokes: usize) -> usize {
    (strokes / 32)
        .saturating_sub(4)
        .min(ENTROPY_SIZES.len() - 1)
}

/// Entropy bits required at this stroke count.
pub fn required_entropy_bits(strokes: usize) -> usize {
    ENTROPY_SIZES[size_index(strokes)]
}

/// Stroke count to show as the next goal in the progress display.
pub fn next_threshold(strokes: usize) -> usize {
    let last = ENTROPY_SIZES[ENTROPY_SIZES.len() - 1];
    if strokes >= last {
        return last;
    }

    let index = size_index(strokes);
    let size = ENTROPY_SIZES[index];
    if strokes > size {
        // strokes < last, so index < last index here
        return ENTROPY_SIZES[index + 1];
    }
    size
}

/// Word count of the mnemonic generated at this stroke count.
pub fn mnemonic_word_count(strokes: usize) -> usize {
    EntropySize::for_strokes(strokes).word_count()
}

/// Whether enough strokes have been accepted to generate a mnemonic.
#[inline]
pub fn generation_enabled(strokes: usize) -> bool {
    strokes >= MIN_STROKES
}
