//! Entropy sizing and extraction from accepted strokes.

mod bits;
mod extractor;
mod schedule;

pub use bits::{bits_to_index, BitString, ParseBitStringError};
pub use extractor::{extract_entropy, parity_bit, ExtractionError};
pub use schedule::{
    generation_enabled, mnemonic_word_count, next_threshold, required_entropy_bits, size_index,
    EntropySize, BITS_PER_WORD, ENTROPY_SIZES, MIN_STROKES,
};
