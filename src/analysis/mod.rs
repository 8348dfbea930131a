//! Entropy quality analysis.
//!
//! Sanity statistics over the extracted bits. These are warnings for
//! the user, not a gate: the mnemonic must stay a faithful BIP39
//! encoding of whatever the strokes produced.

mod statistics;
mod threshold;

pub use statistics::BitStatistics;
pub use threshold::{QualityReport, QualityThresholds, QualityWarning};
