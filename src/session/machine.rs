//! The mnemonic session state machine.
//!
//! ```text
//! Empty ──generate──▶ Computing ──digest ok──▶ Ready
//!   ▲                    │                       │
//!   └──── failure ───────┘                       │
//!   └──── accept / undo / clear ─────────────────┘
//! ```
//!
//! Every stroke-list mutation bumps the generation counter and forces
//! `Empty`. Results computed for an older generation are discarded.

use super::pending::{ComputedMnemonic, GenerationStart, PendingMnemonic};
use super::state::{Notice, NoticeKind, Progress, SessionState};
use crate::analysis::{QualityReport, QualityThresholds};
use crate::canvas::{Brush, ConfigError, FileConfig, Point, Stroke, StrokeCenter};
use crate::entropy::{extract_entropy, generation_enabled, EntropySize, ExtractionError, MIN_STROKES};
use crate::geometry::GeometryError;
use crate::mnemonic::{
    ChecksumDigest, ChecksumError, Dictionary, MnemonicError, MnemonicPhrase, Sha256Digest,
    WordMapError, WordMapper,
};
use crate::qr::{QrCodeEncoder, QrEncoder, QrImage};
use crate::validation::{StrokeOutcome, StrokeValidator};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("need at least {need} accepted strokes, have {have}")]
    NotEnoughStrokes { have: usize, need: usize },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
    #[error(transparent)]
    WordMap(#[from] WordMapError),
    #[error("result for generation {result} discarded; strokes changed (now {current})")]
    Superseded { result: u64, current: u64 },
}

impl From<MnemonicError> for SessionError {
    fn from(err: MnemonicError) -> Self {
        match err {
            MnemonicError::Checksum(e) => Self::Checksum(e),
            MnemonicError::WordMap(e) => Self::WordMap(e),
        }
    }
}

/// Running totals kept by the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounters {
    /// Strokes accepted since startup.
    pub strokes_accepted: u64,
    /// Strokes rejected since startup.
    pub strokes_rejected: u64,
    /// Mnemonics successfully generated.
    pub mnemonics_generated: u64,
    /// Generations that failed.
    pub generation_failures: u64,
    /// Results dropped because the strokes changed.
    pub stale_results: u64,
}

/// Owns the accepted strokes and the derived mnemonic.
pub struct MnemonicSession {
    strokes: Vec<Stroke>,
    centers: Vec<StrokeCenter>,
    state: SessionState,
    generation: u64,
    brush: Brush,
    validator: StrokeValidator,
    digest: Arc<dyn ChecksumDigest>,
    mapper: WordMapper,
    encoder: Option<Arc<dyn QrEncoder>>,
    qr: Option<QrImage>,
    thresholds: QualityThresholds,
    quality: Option<QualityReport>,
    notice: Option<Notice>,
    notice_duration: Duration,
    counters: SessionCounters,
}

impl MnemonicSession {
    /// Creates an empty session over `dictionary` with in-process SHA-256
    /// and no QR encoder.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            strokes: Vec::new(),
            centers: Vec::new(),
            state: SessionState::Empty,
            generation: 0,
            brush: Brush::default(),
            validator: StrokeValidator::new(),
            digest: Arc::new(Sha256Digest),
            mapper: WordMapper::new(dictionary),
            encoder: None,
            qr: None,
            thresholds: QualityThresholds::default(),
            quality: None,
            notice: None,
            notice_duration: Duration::from_secs(3),
            counters: SessionCounters::default(),
        }
    }

    /// Creates a session from a validated configuration file, with the
    /// English word list and the `qrcode` encoder.
    pub fn from_config(config: &FileConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(Arc::new(Dictionary::english()))
            .with_brush(config.canvas.default_brush())
            .with_notice_duration(config.session.notice_duration())
            .with_qr_encoder(Arc::new(QrCodeEncoder::new(&config.qr))))
    }

    /// Replaces the digest backend.
    pub fn with_digest(mut self, digest: Arc<dyn ChecksumDigest>) -> Self {
        self.digest = digest;
        self
    }

    /// Sets the QR encoder invoked after each successful generation.
    pub fn with_qr_encoder(mut self, encoder: Arc<dyn QrEncoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Sets how long notices stay active.
    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    /// Sets the initial brush.
    pub fn with_brush(mut self, brush: Brush) -> Self {
        self.brush = brush;
        self
    }

    /// Replaces the entropy quality thresholds.
    pub fn with_thresholds(mut self, thresholds: QualityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    // ---- stroke input -------------------------------------------------

    /// Called when a new gesture begins; clears any visible notice.
    pub fn on_stroke_started(&mut self) {
        self.notice = None;
    }

    /// Validates a finished gesture and records it if accepted.
    ///
    /// A rejected stroke leaves strokes, centers and mnemonic untouched
    /// and raises a notice.
    pub fn on_stroke_completed(&mut self, points: Vec<Point>) -> Result<StrokeOutcome, SessionError> {
        let stroke = Stroke::new(points, self.brush.clone())?;
        let outcome = self.validator.check(stroke.center(), &self.centers);

        match outcome {
            StrokeOutcome::Accepted { center } => {
                self.strokes.push(stroke);
                self.centers.push(center);
                self.counters.strokes_accepted += 1;
                self.invalidate("stroke accepted");
                tracing::trace!(
                    accepted = self.strokes.len(),
                    x = center.x,
                    y = center.y,
                    "Stroke accepted"
                );
            }
            StrokeOutcome::Rejected { reason, distance } => {
                self.counters.strokes_rejected += 1;
                self.raise(NoticeKind::StrokeRejected, reason.to_string());
                tracing::warn!(%reason, distance, "Stroke rejected");
            }
        }

        Ok(outcome)
    }

    /// Removes the most recent stroke. Returns it, or `None` if there
    /// were no strokes (in which case nothing changes).
    pub fn on_undo(&mut self) -> Option<Stroke> {
        let stroke = self.strokes.pop()?;
        self.centers.pop();
        self.invalidate("undo");
        Some(stroke)
    }

    /// Removes every stroke.
    pub fn on_clear(&mut self) {
        self.strokes.clear();
        self.centers.clear();
        self.invalidate("clear");
    }

    /// Changes the color used for subsequent strokes.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.brush.color = color.into();
    }

    /// Changes the width used for subsequent strokes.
    pub fn set_brush_width(&mut self, width: f32) {
        self.brush.width = width;
    }

    fn invalidate(&mut self, cause: &'static str) {
        self.generation += 1;
        if !matches!(self.state, SessionState::Empty) {
            tracing::info!(
                cause,
                from = self.state.name(),
                generation = self.generation,
                "Mnemonic invalidated"
            );
        }
        self.state = SessionState::Empty;
        self.qr = None;
        self.quality = None;
    }

    fn raise(&mut self, kind: NoticeKind, message: String) {
        self.notice = Some(Notice::new(kind, message, Instant::now()));
    }

    // ---- generation ---------------------------------------------------

    /// Starts a generation.
    ///
    /// Returns the existing phrase when already `Ready`. Otherwise
    /// extracts entropy, enters `Computing` and hands back a job whose
    /// result must be passed to [`complete`](Self::complete).
    pub fn begin_generation(&mut self) -> Result<GenerationStart, SessionError> {
        if let SessionState::Ready(phrase) = &self.state {
            return Ok(GenerationStart::Ready(phrase.clone()));
        }

        let accepted = self.strokes.len();
        if !generation_enabled(accepted) {
            return Err(SessionError::NotEnoughStrokes {
                have: accepted,
                need: MIN_STROKES,
            });
        }

        let size = EntropySize::for_strokes(accepted);
        let entropy = extract_entropy(&self.centers, size.entropy_bits())?;
        self.quality = Some(self.thresholds.evaluate(&entropy));

        self.state = SessionState::Computing {
            generation: self.generation,
        };
        tracing::info!(
            generation = self.generation,
            entropy_bits = size.entropy_bits(),
            words = size.word_count(),
            "Computing mnemonic"
        );

        Ok(GenerationStart::Pending(PendingMnemonic::new(
            self.generation,
            entropy,
            Arc::clone(&self.digest),
            self.mapper.clone(),
        )))
    }

    /// Applies a finished computation.
    ///
    /// Stale results are dropped with [`SessionError::Superseded`].
    /// Failures return the session to `Empty` and raise a notice, unless
    /// another job for the same generation already made it `Ready`.
    pub fn complete(&mut self, computed: ComputedMnemonic) -> Result<MnemonicPhrase, SessionError> {
        if computed.generation != self.generation {
            self.counters.stale_results += 1;
            tracing::debug!(
                result = computed.generation,
                current = self.generation,
                "Discarding stale mnemonic result"
            );
            return Err(SessionError::Superseded {
                result: computed.generation,
                current: self.generation,
            });
        }

        match computed.result {
            Ok(phrase) => {
                self.counters.mnemonics_generated += 1;
                tracing::info!(
                    generation = self.generation,
                    words = phrase.word_count(),
                    "Mnemonic ready"
                );
                self.encode_qr(&phrase);
                self.state = SessionState::Ready(phrase.clone());
                Ok(phrase)
            }
            Err(err) => {
                if let SessionState::Ready(phrase) = &self.state {
                    tracing::debug!(
                        generation = self.generation,
                        error = %err,
                        "Ignoring failed duplicate job; mnemonic already ready"
                    );
                    return Ok(phrase.clone());
                }

                self.counters.generation_failures += 1;
                self.state = SessionState::Empty;
                match &err {
                    MnemonicError::WordMap(e) => {
                        tracing::error!(error = %e, "Word mapping invariant violated");
                    }
                    MnemonicError::Checksum(e) => {
                        tracing::warn!(error = %e, "Mnemonic generation failed");
                    }
                }
                self.raise(NoticeKind::GenerationFailed, err.to_string());
                Err(err.into())
            }
        }
    }

    /// Runs a full generation for a single owner.
    pub async fn generate_mnemonic(&mut self) -> Result<MnemonicPhrase, SessionError> {
        match self.begin_generation()? {
            GenerationStart::Ready(phrase) => Ok(phrase),
            GenerationStart::Pending(job) => {
                let computed = job.compute().await;
                self.complete(computed)
            }
        }
    }

    fn encode_qr(&mut self, phrase: &MnemonicPhrase) {
        let Some(encoder) = self.encoder.clone() else {
            return;
        };

        match encoder.encode(&phrase.phrase()) {
            Ok(image) => self.qr = Some(image),
            Err(e) => {
                tracing::warn!(error = %e, "QR encoding failed");
                self.qr = None;
                self.raise(NoticeKind::QrFailed, format!("Generating QR code error: {e}"));
            }
        }
    }

    // ---- queries --------------------------------------------------------

    /// Progress summary for the current stroke count.
    pub fn progress(&self) -> Progress {
        Progress::for_strokes(self.strokes.len())
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The mnemonic, when `Ready`.
    pub fn phrase(&self) -> Option<&MnemonicPhrase> {
        match &self.state {
            SessionState::Ready(phrase) => Some(phrase),
            _ => None,
        }
    }

    /// QR image of the current mnemonic, if one was rendered.
    pub fn qr_image(&self) -> Option<&QrImage> {
        self.qr.as_ref()
    }

    /// Quality report of the entropy behind the current computation.
    pub fn quality(&self) -> Option<&QualityReport> {
        self.quality.as_ref()
    }

    /// The notice still visible at `now`, if any.
    pub fn active_notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|n| n.is_active(now, self.notice_duration))
    }

    /// The notice still visible right now, if any.
    pub fn active_notice(&self) -> Option<&Notice> {
        self.active_notice_at(Instant::now())
    }

    /// Accepted strokes in order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Centers of accepted strokes, parallel to [`strokes`](Self::strokes).
    pub fn centers(&self) -> &[StrokeCenter] {
        &self.centers
    }

    /// Current stroke-list generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Brush applied to the next stroke.
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Running totals.
    pub fn counters(&self) -> SessionCounters {
        self.counters
    }

    /// Returns true if strokes exist that would be lost on exit.
    pub fn has_unsaved_strokes(&self) -> bool {
        !self.strokes.is_empty()
    }
}

impl Default for MnemonicSession {
    fn default() -> Self {
        Self::new(Arc::new(Dictionary::english()))
    }
}

impl std::fmt::Debug for MnemonicSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnemonicSession")
            .field("strokes", &self.strokes.len())
            .field("state", &self.state.name())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::BitString;
    use crate::qr::QrError;
    use crate::validation::RejectReason;

    struct Unavailable;

    impl ChecksumDigest for Unavailable {
        fn sha256(&self, _data: &[u8]) -> Result<[u8; 32], ChecksumError> {
            Err(ChecksumError::DigestUnavailable("no backend".to_string()))
        }
    }

    struct BrokenEncoder;

    impl QrEncoder for BrokenEncoder {
        fn encode(&self, _data: &str) -> Result<QrImage, QrError> {
            Err(QrError::Encode("broken".to_string()))
        }
    }

    /// A stroke whose center is `(x, y)`.
    fn stroke_at(x: f64, y: f64) -> Vec<Point> {
        vec![Point::new(x - 2.0, y), Point::new(x + 2.0, y)]
    }

    /// Draws `n` strokes on a 100-pixel grid. Every center has even
    /// coordinates, so every entropy bit is zero.
    fn draw_even_grid(session: &mut MnemonicSession, n: usize) {
        for i in 0..n {
            let x = (i % 20) as f64 * 100.0;
            let y = (i / 20) as f64 * 100.0;
            let outcome = session.on_stroke_completed(stroke_at(x, y)).unwrap();
            assert!(outcome.is_accepted());
        }
    }

    #[test]
    fn test_close_stroke_rejected_without_state_change() {
        let mut session = MnemonicSession::default();
        session.on_stroke_completed(stroke_at(100.0, 100.0)).unwrap();
        let generation = session.generation();

        let outcome = session.on_stroke_completed(stroke_at(110.0, 110.0)).unwrap();

        assert_eq!(outcome.reason(), Some(RejectReason::TooClose));
        assert_eq!(session.strokes().len(), 1);
        assert_eq!(session.centers().len(), 1);
        assert_eq!(session.generation(), generation);
        assert_eq!(session.counters().strokes_rejected, 1);

        let notice = session.active_notice().unwrap();
        assert_eq!(notice.kind(), NoticeKind::StrokeRejected);
        assert_eq!(notice.message(), "Too close to last stroke");
    }

    #[test]
    fn test_stroke_start_clears_notice() {
        let mut session = MnemonicSession::default();
        session.on_stroke_completed(stroke_at(0.0, 0.0)).unwrap();
        session.on_stroke_completed(stroke_at(1.0, 1.0)).unwrap();
        assert!(session.active_notice().is_some());

        session.on_stroke_started();
        assert!(session.active_notice().is_none());
    }

    #[test]
    fn test_notice_expires_after_duration() {
        let mut session =
            MnemonicSession::default().with_notice_duration(Duration::from_millis(500));
        session.on_stroke_completed(stroke_at(0.0, 0.0)).unwrap();
        session.on_stroke_completed(stroke_at(1.0, 1.0)).unwrap();

        let later = Instant::now() + Duration::from_secs(1);
        assert!(session.active_notice_at(later).is_none());
    }

    #[test]
    fn test_empty_stroke_is_contract_violation() {
        let mut session = MnemonicSession::default();
        assert_eq!(
            session.on_stroke_completed(Vec::new()),
            Err(SessionError::Geometry(GeometryError::EmptyInput))
        );
    }

    #[test]
    fn test_non_finite_stroke_leaves_session_unchanged() {
        let mut session = MnemonicSession::default();
        session.on_stroke_completed(stroke_at(100.0, 100.0)).unwrap();

        assert_eq!(
            session.on_stroke_completed(vec![Point::new(f64::NAN, 100.0)]),
            Err(SessionError::Geometry(GeometryError::NonFinite))
        );
        assert_eq!(
            session.on_stroke_completed(stroke_at(f64::INFINITY, 0.0)),
            Err(SessionError::Geometry(GeometryError::NonFinite))
        );
        assert_eq!(session.centers(), &[StrokeCenter::new(100.0, 100.0)]);

        // The last accepted center is still the reference point
        let outcome = session.on_stroke_completed(stroke_at(110.0, 110.0)).unwrap();
        assert_eq!(outcome.reason(), Some(RejectReason::TooClose));
    }

    #[test]
    fn test_strokes_capture_current_brush() {
        let mut session = MnemonicSession::default();
        session.set_color("#2f9e44");
        session.set_brush_width(15.0);
        session.on_stroke_completed(stroke_at(0.0, 0.0)).unwrap();

        assert_eq!(session.strokes()[0].color(), "#2f9e44");
        assert_eq!(session.strokes()[0].brush_width(), 15.0);
    }

    #[tokio::test]
    async fn test_generation_disabled_below_minimum() {
        let mut session = MnemonicSession::default();
        draw_even_grid(&mut session, 127);

        assert!(!session.progress().generation_enabled);
        assert_eq!(
            session.generate_mnemonic().await,
            Err(SessionError::NotEnoughStrokes { have: 127, need: 128 })
        );
        assert!(matches!(session.state(), SessionState::Empty));
    }

    #[tokio::test]
    async fn test_all_zero_strokes_give_known_phrase() {
        let mut session = MnemonicSession::default();
        draw_even_grid(&mut session, 128);

        let phrase = session.generate_mnemonic().await.unwrap();

        assert_eq!(phrase.entropy(), &crate::entropy::BitString::zeros(128));
        assert_eq!(phrase.checksum().to_string(), "0011");
        assert_eq!(phrase.word_count(), 12);
        assert_eq!(phrase.phrase(), format!("{}about", "abandon ".repeat(11)));
        assert!(session.state().is_ready());
        assert!(session.quality().is_some_and(|q| !q.looks_reasonable()));
    }

    #[tokio::test]
    async fn test_entropy_uses_prefix_of_strokes() {
        let mut session = MnemonicSession::default();
        draw_even_grid(&mut session, 140);

        let phrase = session.generate_mnemonic().await.unwrap();
        assert_eq!(phrase.entropy_bits(), 128);
        assert_eq!(session.progress().next_threshold, 160);
    }

    #[tokio::test]
    async fn test_ready_is_idempotent() {
        let mut session = MnemonicSession::default();
        draw_even_grid(&mut session, 128);

        let first = session.generate_mnemonic().await.unwrap();
        let generated = session.counters().mnemonics_generated;
        let second = session.generate_mnemonic().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(session.counters().mnemonics_generated, generated);
    }

    #[tokio::test]
    async fn test_undo_invalidates_ready() {
        let mut session = MnemonicSession::default();
        draw_even_grid(&mut session, 128);
        session.generate_mnemonic().await.unwrap();

        let last_center = *session.centers().last().unwrap();
        let removed = session.on_undo().unwrap();

        assert_eq!(removed.center(), last_center);
        assert_eq!(session.strokes().len(), 127);
        assert_eq!(session.centers().len(), 127);
        assert!(matches!(session.state(), SessionState::Empty));
        assert!(session.phrase().is_none());
    }

    #[test]
    fn test_undo_after_five_strokes() {
        let mut session = MnemonicSession::default();
        draw_even_grid(&mut session, 5);
        let expected: Vec<_> = session.centers()[..4].to_vec();

        session.on_undo();

        assert_eq!(session.centers(), expected.as_slice());
        assert_eq!(session.strokes().len(), 4);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut session = MnemonicSession::default();
        assert!(session.on_undo().is_none());
        assert_eq!(session.generation(), 0);
    }

    #[tokio::test]
    async fn test_clear_empties_everything() {
        let mut session = MnemonicSession::default();
        draw_even_grid(&mut session, 130);
        session.generate_mnemonic().await.unwrap();

        session.on_clear();

        assert!(session.strokes().is_empty());
        assert!(session.centers().is_empty());
        assert!(matches!(session.state(), SessionState::Empty));
        assert!(!session.has_unsaved_strokes());

        // Clearing an already-empty session is still fine
        session.on_clear();
        assert!(session.strokes().is_empty());
    }

    #[tokio::test]
    async fn test_stale_result_discarded() {
        let mut session = MnemonicSession::default();
        draw_even_grid(&mut session, 129);

        let GenerationStart::Pending(job) = session.begin_generation().unwrap() else {
            panic!("expected a pending computation");
        };
        assert!(matches!(session.state(), SessionState::Computing { .. }));

        session.on_undo();
        let computed = job.compute().await;

        assert!(matches!(
            session.complete(computed),
            Err(SessionError::Superseded { .. })
        ));
        assert!(matches!(session.state(), SessionState::Empty));
        assert_eq!(session.counters().stale_results, 1);
    }

    #[tokio::test]
    async fn test_digest_failure_returns_to_empty() {
        let mut session = MnemonicSession::default().with_digest(Arc::new(Unavailable));
        draw_even_grid(&mut session, 128);

        let result = session.generate_mnemonic().await;

        assert!(matches!(
            result,
            Err(SessionError::Checksum(ChecksumError::DigestUnavailable(_)))
        ));
        assert!(matches!(session.state(), SessionState::Empty));
        assert_eq!(
            session.active_notice().map(Notice::kind),
            Some(NoticeKind::GenerationFailed)
        );

        // Drawing continues to work after a failure
        let outcome = session.on_stroke_completed(stroke_at(5000.0, 5000.0)).unwrap();
        assert!(outcome.is_accepted());
    }

    #[tokio::test]
    async fn test_failed_duplicate_job_keeps_ready_phrase() {
        let mut session = MnemonicSession::default();
        draw_even_grid(&mut session, 128);

        let GenerationStart::Pending(good) = session.begin_generation().unwrap() else {
            panic!("expected a pending computation");
        };
        // A second request while computing starts another job for the
        // same generation; make that one fail.
        let GenerationStart::Pending(second) = session.begin_generation().unwrap() else {
            panic!("expected a pending computation");
        };
        let failing = PendingMnemonic::new(
            second.generation(),
            BitString::zeros(128),
            Arc::new(Unavailable),
            WordMapper::default(),
        );

        let expected = session.complete(good.compute().await).unwrap();
        let result = session.complete(failing.compute().await);

        assert_eq!(result.unwrap(), expected);
        assert_eq!(session.phrase(), Some(&expected));
        assert_eq!(session.counters().generation_failures, 0);
        assert!(session.active_notice().is_none());
    }

    #[tokio::test]
    async fn test_qr_rendered_when_ready() {
        let mut session = MnemonicSession::from_config(&FileConfig::default()).unwrap();
        draw_even_grid(&mut session, 128);

        session.generate_mnemonic().await.unwrap();
        assert!(session.qr_image().is_some());

        session.on_undo();
        assert!(session.qr_image().is_none());
    }

    #[tokio::test]
    async fn test_qr_failure_keeps_mnemonic() {
        let mut session = MnemonicSession::default().with_qr_encoder(Arc::new(BrokenEncoder));
        draw_even_grid(&mut session, 128);

        session.generate_mnemonic().await.unwrap();

        assert!(session.state().is_ready());
        assert!(session.qr_image().is_none());
        assert_eq!(
            session.active_notice().map(Notice::kind),
            Some(NoticeKind::QrFailed)
        );
    }
}
