//! Finished mnemonic phrases.

use super::checksum::{self, ChecksumDigest, ChecksumError};
use super::words::{WordMapError, WordMapper};
use crate::entropy::BitString;
use thiserror::Error;

/// Errors from the checksum and word-mapping stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MnemonicError {
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
    #[error(transparent)]
    WordMap(#[from] WordMapError),
}

/// A derived mnemonic with the bits it was built from.
#[derive(Clone, PartialEq, Eq)]
pub struct MnemonicPhrase {
    entropy: BitString,
    checksum: BitString,
    words: Vec<String>,
}

impl MnemonicPhrase {
    /// Maps `entropy ‖ checksum` to words.
    pub fn assemble(
        entropy: BitString,
        checksum: BitString,
        mapper: &WordMapper,
    ) -> Result<Self, WordMapError> {
        let words = mapper.map(&entropy.concat(&checksum))?;
        Ok(Self {
            entropy,
            checksum,
            words,
        })
    }

    /// Runs checksum and word mapping synchronously.
    pub fn derive(
        entropy: BitString,
        digest: &dyn ChecksumDigest,
        mapper: &WordMapper,
    ) -> Result<Self, MnemonicError> {
        let checksum = checksum::checksum(&entropy, digest)?;
        Ok(Self::assemble(entropy, checksum, mapper)?)
    }

    /// Entropy bits.
    pub fn entropy(&self) -> &BitString {
        &self.entropy
    }

    /// Entropy length in bits.
    pub fn entropy_bits(&self) -> usize {
        self.entropy.len()
    }

    /// Entropy packed into bytes.
    pub fn entropy_bytes(&self) -> Vec<u8> {
        self.entropy.to_bytes()
    }

    /// Checksum bits.
    pub fn checksum(&self) -> &BitString {
        &self.checksum
    }

    /// Words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Words joined by single spaces.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }
}

impl std::fmt::Display for MnemonicPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.phrase())
    }
}

// Never print the words through Debug; they are secret.
impl std::fmt::Debug for MnemonicPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnemonicPhrase")
            .field("entropy_bits", &self.entropy.len())
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}
