//! BIP39 checksum computation.
//!
//! The checksum is the first `entropy_bits / 32` bits of
//! SHA-256 over the entropy bytes.

use crate::entropy::{BitString, ENTROPY_SIZES};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur while computing the checksum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("SHA-256 digest unavailable: {0}")]
    DigestUnavailable(String),
    #[error("entropy length {0} is not a BIP39 entropy size")]
    InvalidEntropyLength(usize),
}

/// Source of SHA-256 digests.
///
/// The default implementation uses `sha2`. Hosts that delegate
/// hashing elsewhere can supply their own; a failure must be reported
/// as [`ChecksumError::DigestUnavailable`].
pub trait ChecksumDigest: Send + Sync {
    /// Computes SHA-256 over `data`.
    fn sha256(&self, data: &[u8]) -> Result<[u8; 32], ChecksumError>;
}

/// In-process SHA-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl ChecksumDigest for Sha256Digest {
    fn sha256(&self, data: &[u8]) -> Result<[u8; 32], ChecksumError> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&result);
        Ok(out)
    }
}

/// Checks that `bits` is one of the scheduled entropy lengths.
pub fn validate_entropy_len(bits: usize) -> Result<(), ChecksumError> {
    if ENTROPY_SIZES.contains(&bits) {
        Ok(())
    } else {
        Err(ChecksumError::InvalidEntropyLength(bits))
    }
}

/// Truncates the first digest byte to the checksum length for
/// `entropy_bits` of entropy.
pub fn checksum_from_digest(hash: &[u8; 32], entropy_bits: usize) -> BitString {
    BitString::from_bytes(&hash[..1], entropy_bits / 32)
}

/// Computes the checksum bits for `entropy`.
pub fn checksum(entropy: &BitString, digest: &dyn ChecksumDigest) -> Result<BitString, ChecksumError> {
    validate_entropy_len(entropy.len())?;

    let hash = digest.sha256(&entropy.to_bytes())?;
    let checksum = checksum_from_digest(&hash, entropy.len());

    tracing::trace!(
        entropy_bits = entropy.len(),
        checksum_bits = checksum.len(),
        "Computed checksum"
    );

    Ok(checksum)
}
