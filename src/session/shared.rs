//! Session handle for multi-task hosts.
//!
//! The lock is released while the digest runs, so other tasks can keep
//! mutating strokes. Their mutations bump the generation and the
//! late result is discarded on completion.

use super::machine::{MnemonicSession, SessionError};
use super::pending::GenerationStart;
use super::state::Progress;
use crate::canvas::Point;
use crate::mnemonic::MnemonicPhrase;
use crate::validation::StrokeOutcome;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Cloneable, lock-protected [`MnemonicSession`].
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<MnemonicSession>>,
}

impl SharedSession {
    /// Wraps a session.
    pub fn new(session: MnemonicSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Locks the session for direct access.
    pub async fn lock(&self) -> MutexGuard<'_, MnemonicSession> {
        self.inner.lock().await
    }

    /// See [`MnemonicSession::on_stroke_completed`].
    pub async fn on_stroke_completed(
        &self,
        points: Vec<Point>,
    ) -> Result<StrokeOutcome, SessionError> {
        self.inner.lock().await.on_stroke_completed(points)
    }

    /// See [`MnemonicSession::on_undo`]. Returns true if a stroke was removed.
    pub async fn on_undo(&self) -> bool {
        self.inner.lock().await.on_undo().is_some()
    }

    /// See [`MnemonicSession::on_clear`].
    pub async fn on_clear(&self) {
        self.inner.lock().await.on_clear();
    }

    /// See [`MnemonicSession::progress`].
    pub async fn progress(&self) -> Progress {
        self.inner.lock().await.progress()
    }

    /// Generates a mnemonic without holding the lock across the digest.
    pub async fn generate_mnemonic(&self) -> Result<MnemonicPhrase, SessionError> {
        let start = self.inner.lock().await.begin_generation()?;

        match start {
            GenerationStart::Ready(phrase) => Ok(phrase),
            GenerationStart::Pending(job) => {
                let computed = job.compute().await;
                self.inner.lock().await.complete(computed)
            }
        }
    }
}

impl std::fmt::Debug for SharedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSession").finish_non_exhaustive()
    }
}
