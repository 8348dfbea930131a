//! Mapping of `entropy ‖ checksum` onto dictionary words.

use super::Dictionary;
use crate::entropy::{bits_to_index, BitString, BITS_PER_WORD};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during word mapping.
///
/// Both variants are internal invariant violations: correct callers
/// never produce them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordMapError {
    #[error("word index {index} out of range for dictionary of {size} words")]
    WordIndexOutOfRange { index: usize, size: usize },
    #[error("bit length {0} is not a multiple of 11")]
    Misaligned(usize),
}

/// Resolves 11-bit chunks through a dictionary.
#[derive(Debug, Clone)]
pub struct WordMapper {
    dictionary: Arc<Dictionary>,
}

impl WordMapper {
    /// Creates a mapper over the given dictionary.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// Returns the dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Splits `bits` into consecutive 11-bit chunks, left to right, and
    /// looks each one up.
    pub fn map(&self, bits: &BitString) -> Result<Vec<String>, WordMapError> {
        if bits.len() % BITS_PER_WORD != 0 {
            tracing::error!(bits = bits.len(), "Bit string not aligned to word width");
            return Err(WordMapError::Misaligned(bits.len()));
        }

        bits.as_slice()
            .chunks(BITS_PER_WORD)
            .map(|chunk| {
                let index = bits_to_index(chunk);
                self.dictionary
                    .get(index)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        tracing::error!(
                            index,
                            size = self.dictionary.len(),
                            "Word index out of dictionary range"
                        );
                        WordMapError::WordIndexOutOfRange {
                            index,
                            size: self.dictionary.len(),
                        }
                    })
            })
            .collect()
    }
}

impl Default for WordMapper {
    fn default() -> Self {
        Self::new(Arc::new(Dictionary::english()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A well-formed 2048-entry list whose lookups can be checked by eye.
    fn numbered() -> Arc<Dictionary> {
        Arc::new(Dictionary::from_words((0..2048).map(|i| format!("w{i}"))).unwrap())
    }

    #[test]
    fn test_chunks_left_to_right() {
        let mapper = WordMapper::new(numbered());
        let bits: BitString = "0000000000111111111111".parse().unwrap();
        assert_eq!(mapper.map(&bits).unwrap(), vec!["w1", "w2047"]);
    }

    #[test]
    fn test_misaligned() {
        let mapper = WordMapper::default();
        assert_eq!(
            mapper.map(&BitString::zeros(12)),
            Err(WordMapError::Misaligned(12))
        );
    }

    #[test]
    fn test_empty_maps_to_no_words() {
        let mapper = WordMapper::default();
        assert!(mapper.map(&BitString::new()).unwrap().is_empty());
    }

    #[test]
    fn test_english_lookup() {
        let mapper = WordMapper::default();
        let bits: BitString = "00000000000".parse().unwrap();
        assert_eq!(mapper.map(&bits).unwrap(), vec!["abandon"]);
    }
}
