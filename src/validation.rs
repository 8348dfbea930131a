//! Acceptance of finished strokes as independent entropy samples.
//!
//! A stroke whose center lands too close to the previously accepted
//! stroke is most likely the same gesture repeated, so it is rejected
//! outright. Rejection is an expected outcome, not an error.

use crate::canvas::StrokeCenter;
use crate::geometry;
use serde::Serialize;

/// Minimum distance between consecutive accepted stroke centers, in
/// canvas pixels. Fixed; not configurable.
pub const MIN_STROKE_DISTANCE: f64 = 50.0;

/// Why a stroke was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Center closer than [`MIN_STROKE_DISTANCE`] to the last accepted center.
    TooClose,
    /// Center coordinates are NaN or infinite.
    NonFinite,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooClose => write!(f, "Too close to last stroke"),
            Self::NonFinite => write!(f, "Stroke position is not a valid number"),
        }
    }
}

/// Result of validating a finished stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeOutcome {
    /// The stroke counts as a new entropy sample.
    Accepted {
        /// Center of the accepted stroke.
        center: StrokeCenter,
    },
    /// The stroke was discarded.
    Rejected {
        /// Rejection reason.
        reason: RejectReason,
        /// Distance to the last accepted center. NaN for non-finite centers.
        distance: f64,
    },
}

impl StrokeOutcome {
    /// Returns true if the stroke was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the rejection reason, if any.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// Decides whether a stroke center is far enough from the last accepted one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeValidator;

impl StrokeValidator {
    /// Creates a validator.
    pub fn new() -> Self {
        Self
    }

    /// Checks a new center against the accepted centers.
    ///
    /// Only the most recent accepted center is compared. Non-finite
    /// centers are always rejected.
    pub fn check(&self, center: StrokeCenter, accepted: &[StrokeCenter]) -> StrokeOutcome {
        if !center.is_finite() {
            tracing::trace!(x = center.x, y = center.y, "Stroke center is not finite");
            return StrokeOutcome::Rejected {
                reason: RejectReason::NonFinite,
                distance: f64::NAN,
            };
        }

        let Some(&last) = accepted.last() else {
            return StrokeOutcome::Accepted { center };
        };

        let distance = geometry::distance(last, center);
        if distance < MIN_STROKE_DISTANCE {
            tracing::trace!(distance, "Stroke too close to previous stroke");
            return StrokeOutcome::Rejected {
                reason: RejectReason::TooClose,
                distance,
            };
        }

        StrokeOutcome::Accepted { center }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_stroke_always_accepted() {
        let validator = StrokeValidator::new();
        let outcome = validator.check(StrokeCenter::new(1.0, 1.0), &[]);
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_close_stroke_rejected() {
        let validator = StrokeValidator::new();
        let accepted = [StrokeCenter::new(100.0, 100.0)];

        let outcome = validator.check(StrokeCenter::new(120.0, 130.0), &accepted);
        assert_eq!(outcome.reason(), Some(RejectReason::TooClose));
    }

    #[test]
    fn test_exact_threshold_accepted() {
        let validator = StrokeValidator::new();
        let accepted = [StrokeCenter::new(0.0, 0.0)];

        // 30-40-50 triangle: exactly the threshold distance
        let outcome = validator.check(StrokeCenter::new(30.0, 40.0), &accepted);
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_only_last_center_compared() {
        let validator = StrokeValidator::new();
        let accepted = [StrokeCenter::new(0.0, 0.0), StrokeCenter::new(200.0, 0.0)];

        // Close to the first center but far from the last one
        let outcome = validator.check(StrokeCenter::new(10.0, 0.0), &accepted);
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_non_finite_center_rejected() {
        let validator = StrokeValidator::new();
        let accepted = [StrokeCenter::new(0.0, 0.0)];

        for bad in [
            StrokeCenter::new(f64::NAN, 0.0),
            StrokeCenter::new(0.0, f64::INFINITY),
            StrokeCenter::new(f64::NEG_INFINITY, f64::NAN),
        ] {
            assert_eq!(validator.check(bad, &accepted).reason(), Some(RejectReason::NonFinite));
            assert_eq!(validator.check(bad, &[]).reason(), Some(RejectReason::NonFinite));
        }
    }

    #[test]
    fn test_reason_serializes_snake_case() {
        let json = serde_json::to_string(&RejectReason::TooClose).unwrap();
        assert_eq!(json, "\"too_close\"");
    }

    proptest! {
        #[test]
        fn prop_rejection_matches_threshold(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            dx in -200.0f64..200.0,
            dy in -200.0f64..200.0,
        ) {
            let validator = StrokeValidator::new();
            let last = StrokeCenter::new(x, y);
            let next = StrokeCenter::new(x + dx, y + dy);

            let outcome = validator.check(next, &[last]);
            let d = geometry::distance(last, next);
            prop_assert_eq!(outcome.is_accepted(), d >= MIN_STROKE_DISTANCE);
        }
    }
}
