//! Stroke sources.
//!
//! The drawing surface itself lives outside this crate. A source
//! hands over one finished gesture at a time, which lets the CLI and
//! the tests replay recorded strokes or synthesize new ones.

use super::{CanvasConfig, Point};
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use std::collections::VecDeque;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading strokes.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read stroke file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse stroke file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid canvas configuration: {0}")]
    Config(String),
}

/// Trait for anything that produces finished strokes.
pub trait StrokeSource {
    /// Returns the points of the next finished gesture, or `None` when
    /// the source is exhausted.
    fn next_stroke(&mut self) -> Result<Option<Vec<Point>>, SourceError>;
}

/// Replays strokes recorded as JSON.
///
/// The file holds an array of strokes, each an array of
/// `{"x": .., "y": .., "pressure": ..}` objects.
#[derive(Debug, Default)]
pub struct StrokeReplay {
    strokes: VecDeque<Vec<Point>>,
}

impl StrokeReplay {
    /// Creates a replay from in-memory strokes.
    pub fn new(strokes: Vec<Vec<Point>>) -> Self {
        Self {
            strokes: strokes.into(),
        }
    }

    /// Parses strokes from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let strokes: Vec<Vec<Point>> = serde_json::from_str(json)?;
        Ok(Self::new(strokes))
    }

    /// Loads strokes from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let replay = Self::from_json(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            strokes = replay.remaining(),
            "Loaded recorded strokes"
        );
        Ok(replay)
    }

    /// Returns how many strokes are left.
    pub fn remaining(&self) -> usize {
        self.strokes.len()
    }
}

impl StrokeSource for StrokeReplay {
    fn next_stroke(&mut self) -> Result<Option<Vec<Point>>, SourceError> {
        Ok(self.strokes.pop_front())
    }
}

/// Synthetic stroke generator for demos and tests.
///
/// Draws short random walks inside the canvas bounds from a seeded
/// ChaCha20 stream, so the same seed always produces the same strokes.
/// NOT a source of real entropy.
pub struct MockCanvas {
    rng: ChaCha20Rng,
    width: f64,
    height: f64,
    points_per_stroke: usize,
    strokes_drawn: u64,
}

impl MockCanvas {
    /// Creates a generator for the given canvas.
    pub fn new(config: &CanvasConfig, seed: u64) -> Result<Self, SourceError> {
        config
            .validate()
            .map_err(|e| SourceError::Config(e.to_string()))?;

        Ok(Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            width: f64::from(config.width),
            height: f64::from(config.height),
            points_per_stroke: 12,
            strokes_drawn: 0,
        })
    }

    /// Returns the number of strokes generated so far.
    pub fn strokes_drawn(&self) -> u64 {
        self.strokes_drawn
    }

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.rng.next_u32() as f64) / (u32::MAX as f64 + 1.0)
    }

    fn stroke(&mut self) -> Vec<Point> {
        let mut x = self.unit() * self.width;
        let mut y = self.unit() * self.height;
        let mut points = Vec::with_capacity(self.points_per_stroke);

        for _ in 0..self.points_per_stroke {
            points.push(Point::with_pressure(x, y, 0.5));
            x = (x + (self.unit() - 0.5) * 16.0).clamp(0.0, self.width);
            y = (y + (self.unit() - 0.5) * 16.0).clamp(0.0, self.height);
        }

        points
    }
}

impl StrokeSource for MockCanvas {
    fn next_stroke(&mut self) -> Result<Option<Vec<Point>>, SourceError> {
        let stroke = self.stroke();
        self.strokes_drawn += 1;
        Ok(Some(stroke))
    }
}
