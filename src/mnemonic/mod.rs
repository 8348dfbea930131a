//! BIP39 checksum and word mapping.
//!
//! This module turns entropy bits into a mnemonic phrase: a SHA-256
//! checksum is appended and the result is read as 11-bit dictionary
//! indices. The output matches BIP39 bit for bit.

mod checksum;
mod dictionary;
mod phrase;
mod words;

pub use checksum::{
    checksum, checksum_from_digest, validate_entropy_len, ChecksumDigest, ChecksumError,
    Sha256Digest,
};
pub use dictionary::{Dictionary, DictionaryError, DICTIONARY_SIZE};
pub use phrase::{MnemonicError, MnemonicPhrase};
pub use words::{WordMapError, WordMapper};
