//! Canvas, session and QR configuration.
//!
//! The rejection distance and the minimum stroke count are fixed
//! constants and deliberately absent from this file.

use super::Brush;
use crate::qr::MIN_QR_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Drawing surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Selectable stroke colors as `#rrggbb`.
    pub palette: Vec<String>,
    /// Selectable brush widths in pixels.
    pub brush_sizes: Vec<f32>,
    /// Index into `palette` selected at startup.
    pub default_color: usize,
    /// Index into `brush_sizes` selected at startup.
    pub default_brush: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            palette: ["#e03131", "#1971c2", "#2f9e44", "#f08c00", "#1e1e1e"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            brush_sizes: vec![4.0, 9.0, 15.0],
            default_color: 0,
            default_brush: 1,
        }
    }
}

impl CanvasConfig {
    /// Creates a new configuration with the specified dimensions.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(bad) = self.palette.iter().find(|c| !is_hex_color(c)) {
            return Err(ConfigError::InvalidColor(bad.clone()));
        }
        if self.brush_sizes.is_empty()
            || self.brush_sizes.iter().any(|w| !w.is_finite() || *w <= 0.0)
        {
            return Err(ConfigError::InvalidBrushSize);
        }
        if self.default_color >= self.palette.len() || self.default_brush >= self.brush_sizes.len()
        {
            return Err(ConfigError::DefaultOutOfRange);
        }
        Ok(())
    }

    /// Returns the brush selected at startup.
    pub fn default_brush(&self) -> Brush {
        let defaults = Brush::default();
        Brush {
            color: self
                .palette
                .get(self.default_color)
                .cloned()
                .unwrap_or(defaults.color),
            width: self
                .brush_sizes
                .get(self.default_brush)
                .copied()
                .unwrap_or(defaults.width),
        }
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid canvas dimensions")]
    InvalidDimensions,
    #[error("color palette is empty")]
    EmptyPalette,
    #[error("invalid color {0:?} (expected #rrggbb)")]
    InvalidColor(String),
    #[error("brush sizes must be positive")]
    InvalidBrushSize,
    #[error("default color or brush index out of range")]
    DefaultOutOfRange,
    #[error("notice duration must be non-zero")]
    InvalidNoticeDuration,
    #[error("QR size must be at least {}", MIN_QR_SIZE)]
    QrTooSmall,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub qr: QrConfig,
}

/// Mnemonic session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long transient notices stay visible, in milliseconds.
    pub notice_duration_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: 3000,
        }
    }
}

impl SessionConfig {
    /// Returns the notice lifetime.
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

/// QR output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Minimum rendered edge length in logical units.
    pub min_size: u32,
    /// Surround the code with a quiet margin.
    pub quiet_zone: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_QR_SIZE,
            quiet_zone: true,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.canvas.validate()?;
        if self.session.notice_duration_ms == 0 {
            return Err(ConfigError::InvalidNoticeDuration);
        }
        if self.qr.min_size < MIN_QR_SIZE {
            return Err(ConfigError::QrTooSmall);
        }
        Ok(())
    }
}
