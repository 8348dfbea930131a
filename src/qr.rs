//! QR rendering of a finished phrase.
//!
//! The session treats the encoder as opaque: any UTF-8 string in,
//! an image out. The default encoder renders SVG for display and a
//! unicode block version for terminals.

use crate::canvas::QrConfig;
use qrcode::render::{svg, unicode};
use qrcode::QrCode;
use thiserror::Error;

/// Smallest allowed edge length of the rendered code.
pub const MIN_QR_SIZE: u32 = 256;

/// Errors that can occur while encoding.
#[derive(Debug, Clone, Error)]
pub enum QrError {
    #[error("failed to encode QR code: {0}")]
    Encode(String),
}

/// A rendered QR code.
#[derive(Clone)]
pub struct QrImage {
    svg: String,
    terminal: String,
    modules: usize,
}

impl QrImage {
    /// SVG document, at least the configured size on each edge.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Unicode half-block rendering for terminals.
    pub fn terminal(&self) -> &str {
        &self.terminal
    }

    /// Modules per side, excluding the quiet zone.
    pub fn modules(&self) -> usize {
        self.modules
    }
}

impl std::fmt::Debug for QrImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrImage")
            .field("modules", &self.modules)
            .field("svg_bytes", &self.svg.len())
            .finish()
    }
}

/// Trait for QR encoders.
pub trait QrEncoder: Send + Sync {
    /// Encodes `data` into a scannable image.
    fn encode(&self, data: &str) -> Result<QrImage, QrError>;
}

/// Encoder backed by the `qrcode` crate.
#[derive(Debug, Clone)]
pub struct QrCodeEncoder {
    min_size: u32,
    quiet_zone: bool,
}

impl QrCodeEncoder {
    /// Creates an encoder from configuration.
    ///
    /// Sizes below [`MIN_QR_SIZE`] are raised to it.
    pub fn new(config: &QrConfig) -> Self {
        Self {
            min_size: config.min_size.max(MIN_QR_SIZE),
            quiet_zone: config.quiet_zone,
        }
    }
}

impl Default for QrCodeEncoder {
    fn default() -> Self {
        Self::new(&QrConfig::default())
    }
}

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, data: &str) -> Result<QrImage, QrError> {
        let code = QrCode::new(data.as_bytes()).map_err(|e| QrError::Encode(e.to_string()))?;

        let svg = code
            .render::<svg::Color<'_>>()
            .min_dimensions(self.min_size, self.min_size)
            .quiet_zone(self.quiet_zone)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();

        let terminal = code
            .render::<unicode::Dense1x2>()
            .quiet_zone(self.quiet_zone)
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build();

        tracing::debug!(modules = code.width(), "Encoded QR code");

        Ok(QrImage {
            svg,
            terminal,
            modules: code.width(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svg_width(svg: &str) -> u32 {
        let start = svg.find("width=\"").unwrap() + 7;
        let end = start + svg[start..].find('"').unwrap();
        svg[start..end].parse().unwrap()
    }

    #[test]
    fn test_encodes_phrase() {
        let encoder = QrCodeEncoder::default();
        let phrase = format!("{}about", "abandon ".repeat(11));

        let image = encoder.encode(&phrase).unwrap();
        assert!(image.modules() >= 21);
        assert!(image.svg().contains("<svg"));
        assert!(svg_width(image.svg()) >= MIN_QR_SIZE);
        assert!(!image.terminal().is_empty());
    }

    #[test]
    fn test_small_size_raised() {
        let encoder = QrCodeEncoder::new(&QrConfig {
            min_size: 10,
            quiet_zone: true,
        });
        let image = encoder.encode("zoo").unwrap();
        assert!(svg_width(image.svg()) >= MIN_QR_SIZE);
    }

    #[test]
    fn test_oversized_input_fails() {
        let encoder = QrCodeEncoder::default();
        let data = "x".repeat(8000);
        assert!(matches!(encoder.encode(&data), Err(QrError::Encode(_))));
    }
}
