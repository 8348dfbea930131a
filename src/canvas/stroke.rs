//! Stroke types captured from the drawing surface.

use crate::geometry::{self, GeometryError};
use serde::{Deserialize, Serialize};

/// A single sampled pointer position.
///
/// Coordinates are in canvas pixels. Pressure is optional because
/// mouse input usually does not report it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Pen pressure in `[0, 1]`, if the device reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f32>,
}

impl Point {
    /// Creates a point without pressure information.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            pressure: None,
        }
    }

    /// Creates a point with pressure, clamped to `[0, 1]`.
    pub fn with_pressure(x: f64, y: f64, pressure: f32) -> Self {
        Self {
            x,
            y,
            pressure: Some(pressure.clamp(0.0, 1.0)),
        }
    }
}

/// Arithmetic mean of a stroke's point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeCenter {
    /// Mean horizontal position.
    pub x: f64,
    /// Mean vertical position.
    pub y: f64,
}

impl StrokeCenter {
    /// Creates a center at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Color and width used for drawing a stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    /// Hex color, e.g. `#e03131`.
    pub color: String,
    /// Brush width in pixels.
    pub width: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: "#e03131".to_string(),
            width: 9.0,
        }
    }
}

/// A completed drawing gesture.
///
/// Always holds at least one point. The center is computed once at
/// construction and never changes.
#[derive(Clone)]
pub struct Stroke {
    points: Vec<Point>,
    brush: Brush,
    center: StrokeCenter,
}

impl Stroke {
    /// Creates a stroke from captured points.
    pub fn new(points: Vec<Point>, brush: Brush) -> Result<Self, GeometryError> {
        let center = geometry::centroid(&points)?;
        Ok(Self {
            points,
            brush,
            center,
        })
    }

    /// Returns the captured points in drawing order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the brush the stroke was drawn with.
    #[inline]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Returns the stroke color.
    #[inline]
    pub fn color(&self) -> &str {
        &self.brush.color
    }

    /// Returns the brush width.
    #[inline]
    pub fn brush_width(&self) -> f32 {
        self.brush.width
    }

    /// Returns the stroke centroid.
    #[inline]
    pub fn center(&self) -> StrokeCenter {
        self.center
    }

    /// Returns the number of captured points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a stroke holds at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl std::fmt::Debug for Stroke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stroke")
            .field("points", &self.points.len())
            .field("color", &self.brush.color)
            .field("width", &self.brush.width)
            .field("center", &self.center)
            .finish()
    }
}
