//! Statistical sanity checks on extracted entropy bits.
//!
//! One bit per stroke is a thin source. These numbers flag obviously
//! patterned input, such as strokes drawn on a grid. Passing them says
//! nothing about how unpredictable the strokes really were.

use crate::entropy::BitString;
use serde::Serialize;

/// Statistics for one entropy bit string.
#[derive(Debug, Clone, Serialize)]
pub struct BitStatistics {
    /// Bit bias (deviation from 0.5).
    pub bit_bias: f64,
    /// Lag-1 autocorrelation of the bit sequence.
    pub autocorrelation: f64,
    /// Longest run of identical bits.
    pub longest_run: usize,
    /// Number of bits analyzed.
    pub sample_size: usize,
}

impl BitStatistics {
    /// Runs all statistics on the bits.
    pub fn analyze(bits: &BitString) -> Self {
        Self {
            bit_bias: bits.bit_bias(),
            autocorrelation: Self::compute_autocorrelation(bits.as_slice()),
            longest_run: Self::compute_longest_run(bits.as_slice()),
            sample_size: bits.len(),
        }
    }

    /// Computes lag-1 autocorrelation.
    ///
    /// Constant input counts as perfectly correlated.
    fn compute_autocorrelation(bits: &[bool]) -> f64 {
        if bits.len() < 2 {
            return 0.0;
        }

        let values: Vec<f64> = bits.iter().map(|&b| f64::from(u8::from(b))).collect();
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();

        if variance == 0.0 {
            return 1.0;
        }

        let covariance: f64 = values
            .windows(2)
            .map(|w| (w[0] - mean) * (w[1] - mean))
            .sum();

        covariance / variance
    }

    fn compute_longest_run(bits: &[bool]) -> usize {
        let mut longest = 0;
        let mut current = 0;
        let mut previous = None;

        for &bit in bits {
            if previous == Some(bit) {
                current += 1;
            } else {
                current = 1;
                previous = Some(bit);
            }
            longest = longest.max(current);
        }

        longest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_bits() {
        let stats = BitStatistics::analyze(&BitString::zeros(128));

        assert!((stats.bit_bias + 0.5).abs() < 0.001);
        assert_eq!(stats.autocorrelation, 1.0);
        assert_eq!(stats.longest_run, 128);
        assert_eq!(stats.sample_size, 128);
    }

    #[test]
    fn test_alternating_bits() {
        let bits: BitString = (0..128).map(|i| i % 2 == 1).collect();
        let stats = BitStatistics::analyze(&bits);

        assert!(stats.bit_bias.abs() < 0.001);
        assert!(stats.autocorrelation < -0.9);
        assert_eq!(stats.longest_run, 1);
    }

    #[test]
    fn test_longest_run_in_middle() {
        let bits: BitString = "0110001111100".parse().unwrap();
        assert_eq!(BitStatistics::analyze(&bits).longest_run, 5);
    }

    #[test]
    fn test_empty() {
        let stats = BitStatistics::analyze(&BitString::new());
        assert_eq!(stats.longest_run, 0);
        assert_eq!(stats.autocorrelation, 0.0);
    }
}
