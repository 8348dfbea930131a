//! Quality thresholds for entropy warnings.
//!
//! Violations are reported to the user but never block generation.

use super::statistics::BitStatistics;
use crate::entropy::BitString;
use serde::{Deserialize, Serialize};

/// Quality thresholds for stroke-derived entropy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityThresholds {
    /// Maximum acceptable bit bias (absolute value).
    pub max_bit_bias: f64,
    /// Maximum acceptable autocorrelation (absolute value).
    pub max_autocorrelation: f64,
    /// Maximum acceptable run of identical bits.
    pub max_run: usize,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            max_bit_bias: 0.15,
            max_autocorrelation: 0.4,
            max_run: 20,
        }
    }
}

impl QualityThresholds {
    /// Checks statistics against thresholds.
    pub fn check(&self, stats: &BitStatistics) -> Result<(), QualityWarning> {
        if stats.bit_bias.abs() > self.max_bit_bias {
            return Err(QualityWarning::BitBias {
                observed: stats.bit_bias,
                threshold: self.max_bit_bias,
            });
        }

        if stats.autocorrelation.abs() > self.max_autocorrelation {
            return Err(QualityWarning::HighAutocorrelation {
                observed: stats.autocorrelation,
                threshold: self.max_autocorrelation,
            });
        }

        if stats.longest_run > self.max_run {
            return Err(QualityWarning::LongRun {
                observed: stats.longest_run,
                threshold: self.max_run,
            });
        }

        Ok(())
    }

    /// Analyzes `bits` and checks the result.
    pub fn evaluate(&self, bits: &BitString) -> QualityReport {
        let stats = BitStatistics::analyze(bits);
        let warning = self.check(&stats).err();

        match &warning {
            Some(w) => tracing::warn!(warning = %w, "Stroke entropy looks patterned"),
            None => tracing::trace!(
                bias = stats.bit_bias,
                autocorr = stats.autocorrelation,
                longest_run = stats.longest_run,
                "Entropy quality check passed"
            ),
        }

        QualityReport { stats, warning }
    }
}

/// Quality warning types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QualityWarning {
    #[error("bit bias {observed:.4} exceeds threshold {threshold:.4}")]
    BitBias { observed: f64, threshold: f64 },

    #[error("autocorrelation {observed:.4} exceeds threshold {threshold:.4}")]
    HighAutocorrelation { observed: f64, threshold: f64 },

    #[error("run of {observed} identical bits exceeds {threshold}")]
    LongRun { observed: usize, threshold: usize },
}

/// Statistics plus the first threshold violation, if any.
#[derive(Debug, Clone)]
pub struct QualityReport {
    /// Raw statistics.
    pub stats: BitStatistics,
    /// First violated threshold.
    pub warning: Option<QualityWarning>,
}

impl QualityReport {
    /// Returns true if no threshold was violated.
    pub fn looks_reasonable(&self) -> bool {
        self.warning.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_bits_pass() {
        // 0x96 = 1001_0110: balanced with short runs
        let bits = BitString::from_bytes(&[0x96, 0x3C, 0x5A, 0xC3].repeat(4), 128);
        let report = QualityThresholds::default().evaluate(&bits);
        assert!(report.looks_reasonable(), "{:?}", report.warning);
    }

    #[test]
    fn test_all_zeros_biased() {
        let report = QualityThresholds::default().evaluate(&BitString::zeros(128));
        assert!(matches!(
            report.warning,
            Some(QualityWarning::BitBias { .. })
        ));
    }

    #[test]
    fn test_alternating_correlated() {
        let bits: BitString = (0..128).map(|i| i % 2 == 0).collect();
        let report = QualityThresholds::default().evaluate(&bits);
        assert!(matches!(
            report.warning,
            Some(QualityWarning::HighAutocorrelation { .. })
        ));
    }

    #[test]
    fn test_long_run() {
        // Balanced, but with two 64-bit runs
        let bits: BitString = (0..128).map(|i| i >= 64).collect();
        let thresholds = QualityThresholds {
            max_autocorrelation: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            thresholds.evaluate(&bits).warning,
            Some(QualityWarning::LongRun { observed: 64, .. })
        ));
    }
}
