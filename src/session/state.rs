//! Session state, progress and transient notices.

use crate::entropy::{generation_enabled, mnemonic_word_count, next_threshold};
use crate::mnemonic::MnemonicPhrase;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Mnemonic session state.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// No mnemonic computed for the current strokes.
    #[default]
    Empty,
    /// A digest is in flight for `generation`.
    Computing {
        /// Stroke-list generation the computation started from.
        generation: u64,
    },
    /// Mnemonic available for display and QR encoding.
    Ready(MnemonicPhrase),
}

impl SessionState {
    /// Short lowercase name for logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Computing { .. } => "computing",
            Self::Ready(_) => "ready",
        }
    }

    /// Returns true in the `Ready` state.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Progress summary for the stroke counter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Accepted strokes so far.
    pub accepted: usize,
    /// Stroke count of the next schedule step.
    pub next_threshold: usize,
    /// Words a mnemonic generated now would have.
    pub word_count: usize,
    /// Whether generation may be attempted.
    pub generation_enabled: bool,
}

impl Progress {
    /// Computes progress for `accepted` strokes.
    pub fn for_strokes(accepted: usize) -> Self {
        Self {
            accepted,
            next_threshold: next_threshold(accepted),
            word_count: mnemonic_word_count(accepted),
            generation_enabled: generation_enabled(accepted),
        }
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Strokes: {}/{}", self.accepted, self.next_threshold)
    }
}

/// Category of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// A stroke was rejected.
    StrokeRejected,
    /// Mnemonic generation failed.
    GenerationFailed,
    /// The QR encoder failed.
    QrFailed,
}

/// A short-lived user-visible message.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    kind: NoticeKind,
    raised_at: Instant,
}

impl Notice {
    /// Creates a notice raised at `raised_at`.
    pub fn new(kind: NoticeKind, message: impl Into<String>, raised_at: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at,
        }
    }

    /// Message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Notice category.
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Returns true while `now` is within `lifetime` of the raise time.
    pub fn is_active(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) < lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at_zero() {
        let progress = Progress::for_strokes(0);
        assert!(!progress.generation_enabled);
        assert_eq!(progress.next_threshold, 128);
        assert_eq!(progress.word_count, 12);
        assert_eq!(progress.to_string(), "Strokes: 0/128");
    }

    #[test]
    fn test_progress_unlocked() {
        let progress = Progress::for_strokes(200);
        assert!(progress.generation_enabled);
        assert_eq!(progress.next_threshold, 224);
        assert_eq!(progress.word_count, 18);
    }

    #[test]
    fn test_notice_expires() {
        let start = Instant::now();
        let notice = Notice::new(NoticeKind::StrokeRejected, "Too close", start);
        let lifetime = Duration::from_secs(3);

        assert!(notice.is_active(start, lifetime));
        assert!(notice.is_active(start + Duration::from_millis(2999), lifetime));
        assert!(!notice.is_active(start + lifetime, lifetime));
    }
}
