//! One-bit-per-stroke parity extraction.
//!
//! Each accepted stroke contributes the parity of
//! `floor(x) + floor(y)` of its center. The bits are not whitened;
//! their quality rests on how unpredictably the strokes were placed.

use super::BitString;
use crate::canvas::StrokeCenter;
use thiserror::Error;

/// Errors that can occur during bit extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("need {need} stroke centers, have {have}")]
    InsufficientCenters { have: usize, need: usize },
}

/// Returns the entropy bit for one center: `false` when
/// `floor(x) + floor(y)` is even, `true` when odd.
///
/// Parity is taken per coordinate and combined, so it stays exact over
/// the whole finite `f64` range. Callers only pass finite centers.
pub fn parity_bit(center: StrokeCenter) -> bool {
    let odd = |v: f64| v.floor().rem_euclid(2.0) == 1.0;
    odd(center.x) != odd(center.y)
}

/// Builds an entropy bit string from the first `entropy_bits` centers.
pub fn extract_entropy(
    centers: &[StrokeCenter],
    entropy_bits: usize,
) -> Result<BitString, ExtractionError> {
    if centers.len() < entropy_bits {
        return Err(ExtractionError::InsufficientCenters {
            have: centers.len(),
            need: entropy_bits,
        });
    }

    let bits: BitString = centers[..entropy_bits]
        .iter()
        .map(|&c| parity_bit(c))
        .collect();

    tracing::debug!(
        bits = bits.len(),
        ones = bits.popcount(),
        "Extracted entropy from stroke centers"
    );

    Ok(bits)
}
