//! Prometheus metrics for stroke entropy sessions.
//!
//! # Metrics Exposed
//!
//! ## Session
//! - `stroke_mnemonic_accepted_strokes` - Currently accepted strokes
//! - `stroke_mnemonic_required_entropy_bits` - Entropy size the next generation would use
//! - `stroke_mnemonic_ready` - Mnemonic ready (1) or not (0)
//! - `stroke_mnemonic_bit_bias` - Bias of the most recent entropy bits
//!
//! ## Strokes
//! - `stroke_mnemonic_strokes_accepted_total` - Strokes accepted
//! - `stroke_mnemonic_strokes_rejected_total` - Strokes rejected as too close
//!
//! ## Generation
//! - `stroke_mnemonic_generated_total` - Mnemonics generated
//! - `stroke_mnemonic_generation_failures_total` - Failed generations
//! - `stroke_mnemonic_stale_results_total` - Results discarded after stroke changes
//!
//! # Example
//!
//! ```no_run
//! use stroke_mnemonic::metrics::{MetricsRegistry, MetricsSnapshot};
//! use stroke_mnemonic::session::MnemonicSession;
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! let session = MnemonicSession::default();
//!
//! registry.update(&MetricsSnapshot::from_session(&session));
//! println!("{}", registry.encode().unwrap());
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};
