//! In-flight mnemonic computations.
//!
//! A computation carries the generation it started from. The session
//! compares that number on completion and drops results for stroke
//! lists that have since changed. Nothing is ever aborted.

use crate::entropy::BitString;
use crate::mnemonic::{
    checksum_from_digest, validate_entropy_len, ChecksumDigest, ChecksumError, MnemonicError,
    MnemonicPhrase, WordMapper,
};
use std::sync::Arc;

/// Outcome of [`MnemonicSession::begin_generation`](super::MnemonicSession::begin_generation).
#[derive(Debug)]
pub enum GenerationStart {
    /// The session was already `Ready`; nothing to compute.
    Ready(MnemonicPhrase),
    /// A computation to run and hand back via `complete`.
    Pending(PendingMnemonic),
}

/// A mnemonic computation waiting on its digest.
pub struct PendingMnemonic {
    generation: u64,
    entropy: BitString,
    digest: Arc<dyn ChecksumDigest>,
    mapper: WordMapper,
}

impl PendingMnemonic {
    pub(crate) fn new(
        generation: u64,
        entropy: BitString,
        digest: Arc<dyn ChecksumDigest>,
        mapper: WordMapper,
    ) -> Self {
        Self {
            generation,
            entropy,
            digest,
            mapper,
        }
    }

    /// Stroke-list generation this computation belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Entropy length in bits.
    pub fn entropy_bits(&self) -> usize {
        self.entropy.len()
    }

    /// Runs the digest off the async executor, then maps words.
    pub async fn compute(self) -> ComputedMnemonic {
        let generation = self.generation;
        let result = self.run().await;
        ComputedMnemonic { generation, result }
    }

    async fn run(self) -> Result<MnemonicPhrase, MnemonicError> {
        validate_entropy_len(self.entropy.len())?;

        let bytes = self.entropy.to_bytes();
        let digest = Arc::clone(&self.digest);
        let hash = tokio::task::spawn_blocking(move || digest.sha256(&bytes))
            .await
            .map_err(|e| ChecksumError::DigestUnavailable(e.to_string()))??;

        let checksum = checksum_from_digest(&hash, self.entropy.len());
        Ok(MnemonicPhrase::assemble(self.entropy, checksum, &self.mapper)?)
    }
}

impl std::fmt::Debug for PendingMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingMnemonic")
            .field("generation", &self.generation)
            .field("entropy_bits", &self.entropy.len())
            .finish_non_exhaustive()
    }
}

/// A finished computation, tagged with its generation.
#[derive(Debug)]
pub struct ComputedMnemonic {
    pub(crate) generation: u64,
    pub(crate) result: Result<MnemonicPhrase, MnemonicError>,
}

impl ComputedMnemonic {
    /// Stroke-list generation this result belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if the computation succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::Sha256Digest;

    struct Unavailable;

    impl ChecksumDigest for Unavailable {
        fn sha256(&self, _data: &[u8]) -> Result<[u8; 32], ChecksumError> {
            Err(ChecksumError::DigestUnavailable("no backend".to_string()))
        }
    }

    #[tokio::test]
    async fn test_compute_matches_sync_derivation() {
        let entropy = BitString::from_bytes(&[0x3C; 24], 192);
        let job = PendingMnemonic::new(
            4,
            entropy.clone(),
            Arc::new(Sha256Digest),
            WordMapper::default(),
        );

        let computed = job.compute().await;
        assert_eq!(computed.generation(), 4);

        let expected =
            MnemonicPhrase::derive(entropy, &Sha256Digest, &WordMapper::default()).unwrap();
        assert_eq!(computed.result.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_digest_failure_reported() {
        let job = PendingMnemonic::new(
            1,
            BitString::zeros(128),
            Arc::new(Unavailable),
            WordMapper::default(),
        );

        let computed = job.compute().await;
        assert!(matches!(
            computed.result,
            Err(MnemonicError::Checksum(ChecksumError::DigestUnavailable(_)))
        ));
    }
}
