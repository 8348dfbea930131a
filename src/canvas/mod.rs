//! Stroke input and canvas configuration.
//!
//! This module holds the data the drawing surface hands to the core:
//! points, finished strokes and their centers, plus the sources that
//! replay or synthesize strokes. Rendering is not handled here.

mod config;
mod source;
mod stroke;

pub use config::{CanvasConfig, ConfigError, FileConfig, QrConfig, SessionConfig};
pub use source::{MockCanvas, SourceError, StrokeReplay, StrokeSource};
pub use stroke::{Brush, Point, Stroke, StrokeCenter};
