//! Metrics collection and registry.

use crate::session::{MnemonicSession, SessionState};
use prometheus::{Encoder, Gauge, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// A snapshot of session state for metrics update.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Currently accepted strokes.
    pub accepted_strokes: usize,
    /// Entropy bits a generation would use now.
    pub required_entropy_bits: usize,
    /// Whether a mnemonic is ready.
    pub is_ready: bool,
    /// Strokes accepted since startup.
    pub strokes_accepted: u64,
    /// Strokes rejected since startup.
    pub strokes_rejected: u64,
    /// Mnemonics generated.
    pub mnemonics_generated: u64,
    /// Failed generations.
    pub generation_failures: u64,
    /// Stale results discarded.
    pub stale_results: u64,
    /// Bit bias of the most recent entropy.
    pub bit_bias: Option<f64>,
}

/// Prometheus metrics registry for stroke entropy sessions.
pub struct MetricsRegistry {
    registry: Registry,

    // Session gauges
    accepted_strokes: IntGauge,
    required_entropy_bits: IntGauge,
    ready: IntGauge,
    bit_bias: Gauge,

    // Stroke counters
    strokes_accepted_total: IntCounter,
    strokes_rejected_total: IntCounter,

    // Generation counters
    mnemonics_generated_total: IntCounter,
    generation_failures_total: IntCounter,
    stale_results_total: IntCounter,
}

impl MetricsRegistry {
    /// Creates a new metrics registry with all session metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let accepted_strokes = IntGauge::new(
            "stroke_mnemonic_accepted_strokes",
            "Number of currently accepted strokes",
        )?;
        let required_entropy_bits = IntGauge::new(
            "stroke_mnemonic_required_entropy_bits",
            "Entropy bits the next generation would use",
        )?;
        let ready = IntGauge::new(
            "stroke_mnemonic_ready",
            "Whether a mnemonic is ready (1=ready, 0=not ready)",
        )?;
        let bit_bias = Gauge::new(
            "stroke_mnemonic_bit_bias",
            "Bit bias of the most recent entropy (deviation from 0.5)",
        )?;

        let strokes_accepted_total = IntCounter::new(
            "stroke_mnemonic_strokes_accepted_total",
            "Total strokes accepted as entropy samples",
        )?;
        let strokes_rejected_total = IntCounter::new(
            "stroke_mnemonic_strokes_rejected_total",
            "Total strokes rejected as too close",
        )?;

        let mnemonics_generated_total = IntCounter::new(
            "stroke_mnemonic_generated_total",
            "Total mnemonics generated",
        )?;
        let generation_failures_total = IntCounter::new(
            "stroke_mnemonic_generation_failures_total",
            "Total failed mnemonic generations",
        )?;
        let stale_results_total = IntCounter::new(
            "stroke_mnemonic_stale_results_total",
            "Total results discarded because strokes changed",
        )?;

        registry.register(Box::new(accepted_strokes.clone()))?;
        registry.register(Box::new(required_entropy_bits.clone()))?;
        registry.register(Box::new(ready.clone()))?;
        registry.register(Box::new(bit_bias.clone()))?;
        registry.register(Box::new(strokes_accepted_total.clone()))?;
        registry.register(Box::new(strokes_rejected_total.clone()))?;
        registry.register(Box::new(mnemonics_generated_total.clone()))?;
        registry.register(Box::new(generation_failures_total.clone()))?;
        registry.register(Box::new(stale_results_total.clone()))?;

        Ok(Self {
            registry,
            accepted_strokes,
            required_entropy_bits,
            ready,
            bit_bias,
            strokes_accepted_total,
            strokes_rejected_total,
            mnemonics_generated_total,
            generation_failures_total,
            stale_results_total,
        })
    }

    /// Updates all metrics from a snapshot of session state.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        self.accepted_strokes.set(snapshot.accepted_strokes as i64);
        self.required_entropy_bits
            .set(snapshot.required_entropy_bits as i64);
        self.ready.set(i64::from(snapshot.is_ready));

        if let Some(bias) = snapshot.bit_bias {
            self.bit_bias.set(bias);
        }

        // Counters only move forward by the difference
        advance(&self.strokes_accepted_total, snapshot.strokes_accepted);
        advance(&self.strokes_rejected_total, snapshot.strokes_rejected);
        advance(&self.mnemonics_generated_total, snapshot.mnemonics_generated);
        advance(&self.generation_failures_total, snapshot.generation_failures);
        advance(&self.stale_results_total, snapshot.stale_results);
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, total: u64) {
    let current = counter.get();
    if total > current {
        counter.inc_by(total - current);
    }
}

impl MetricsSnapshot {
    /// Creates a snapshot from the current session.
    pub fn from_session(session: &MnemonicSession) -> Self {
        let counters = session.counters();
        let progress = session.progress();

        Self {
            accepted_strokes: progress.accepted,
            required_entropy_bits: crate::entropy::required_entropy_bits(progress.accepted),
            is_ready: matches!(session.state(), SessionState::Ready(_)),
            strokes_accepted: counters.strokes_accepted,
            strokes_rejected: counters.strokes_rejected,
            mnemonics_generated: counters.mnemonics_generated,
            generation_failures: counters.generation_failures,
            stale_results: counters.stale_results,
            bit_bias: session.quality().map(|q| q.stats.bit_bias),
        }
    }
}
