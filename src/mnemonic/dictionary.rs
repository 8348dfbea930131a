//! 2048-word mnemonic dictionary.

use bip39::Language;
use std::path::Path;
use thiserror::Error;

/// Number of words in a mnemonic dictionary (2^11).
pub const DICTIONARY_SIZE: usize = 2048;

/// Errors that can occur while loading a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary must contain {expected} words, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("dictionary entry {0} is empty")]
    EmptyWord(usize),
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered word list; a word's position is its 11-bit index.
#[derive(Clone)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// The BIP39 English word list.
    pub fn english() -> Self {
        Self {
            words: Language::English
                .word_list()
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }

    /// Builds a dictionary from exactly 2048 non-empty words.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != DICTIONARY_SIZE {
            return Err(DictionaryError::WrongLength {
                expected: DICTIONARY_SIZE,
                found: words.len(),
            });
        }
        if let Some(pos) = words.iter().position(|w| w.trim().is_empty()) {
            return Err(DictionaryError::EmptyWord(pos));
        }
        Ok(Self { words })
    }

    /// Loads a newline-separated word list. Blank lines are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty()),
        )
    }

    /// Returns the word at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Returns the index of `word`, if present.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Returns the number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.words.len())
            .field("first", &self.words.first())
            .finish()
    }
}
