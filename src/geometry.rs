//! Point-set geometry used to turn strokes into entropy samples.

use crate::canvas::{Point, StrokeCenter};
use thiserror::Error;

/// Geometry errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Callers must never pass an empty point set.
    #[error("cannot compute the centroid of an empty point set")]
    EmptyInput,
    /// A coordinate, or the resulting center, is NaN or infinite.
    #[error("stroke coordinates must be finite numbers")]
    NonFinite,
}

/// Computes the arithmetic mean of the point coordinates.
///
/// Every coordinate must be finite, and so must the mean; a NaN center
/// would compare as "far" from every other center.
pub fn centroid(points: &[Point]) -> Result<StrokeCenter, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput);
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(GeometryError::NonFinite);
    }

    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));

    let center = StrokeCenter::new(sum_x / n, sum_y / n);
    if !center.is_finite() {
        return Err(GeometryError::NonFinite);
    }

    Ok(center)
}

/// Euclidean distance between two centers.
#[inline]
pub fn distance(a: StrokeCenter, b: StrokeCenter) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point_centroid() {
        let center = centroid(&[Point::new(7.0, -3.0)]).unwrap();
        assert_eq!(center, StrokeCenter::new(7.0, -3.0));
    }

    #[test]
    fn test_centroid_is_mean() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 6.0),
            Point::new(0.0, 6.0),
        ];
        assert_eq!(centroid(&points).unwrap(), StrokeCenter::new(2.0, 3.0));
    }

    #[test]
    fn test_empty_centroid_fails() {
        assert_eq!(centroid(&[]), Err(GeometryError::EmptyInput));
    }

    #[test]
    fn test_non_finite_points_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let points = [Point::new(10.0, 10.0), Point::new(bad, 10.0)];
            assert_eq!(centroid(&points), Err(GeometryError::NonFinite));

            let points = [Point::new(10.0, bad)];
            assert_eq!(centroid(&points), Err(GeometryError::NonFinite));
        }
    }

    #[test]
    fn test_overflowing_sum_rejected() {
        let points = [Point::new(f64::MAX, 0.0), Point::new(f64::MAX, 0.0)];
        assert_eq!(centroid(&points), Err(GeometryError::NonFinite));
    }

    #[test]
    fn test_distance() {
        let a = StrokeCenter::new(0.0, 0.0);
        let b = StrokeCenter::new(30.0, 40.0);
        assert!((distance(a, b) - 50.0).abs() < 1e-12);
        assert_eq!(distance(a, b), distance(b, a));
    }
}
