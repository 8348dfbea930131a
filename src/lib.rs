//! Stroke Mnemonic Library
//!
//! Derives BIP39 mnemonic phrases from hand-drawn strokes. Each
//! accepted stroke contributes one entropy bit, taken from the parity
//! of its centroid. Once enough strokes exist, the bits are
//! checksummed and mapped to words exactly as BIP39 specifies.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! canvas → validation → entropy → mnemonic → session → qr
//!                          ↓
//!                      analysis (quality warnings)
//! ```
//!
//! # Design Principles
//!
//! - **Bit-exact BIP39**: checksum and word mapping match the standard
//! - **One bit per gesture**: strokes too close to the previous one are rejected
//! - **No whitening**: entropy quality depends on the person drawing;
//!   the analysis stage warns about obvious patterns but never alters bits
//! - **Nothing persisted**: strokes and phrases live only in memory
//!
//! # Example
//!
//! ```no_run
//! use stroke_mnemonic::{
//!     canvas::{CanvasConfig, MockCanvas, StrokeSource},
//!     session::MnemonicSession,
//! };
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut canvas = MockCanvas::new(&CanvasConfig::default(), 42)?;
//! let mut session = MnemonicSession::default();
//!
//! while !session.progress().generation_enabled {
//!     if let Some(points) = canvas.next_stroke()? {
//!         session.on_stroke_completed(points)?;
//!     }
//! }
//!
//! let phrase = session.generate_mnemonic().await?;
//! println!("{} words", phrase.word_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod canvas;
pub mod entropy;
pub mod geometry;
pub mod metrics;
pub mod mnemonic;
pub mod qr;
pub mod session;
pub mod validation;

// Re-export commonly used types at crate root
pub use analysis::{QualityReport, QualityThresholds};
pub use canvas::{Brush, FileConfig, MockCanvas, Point, Stroke, StrokeCenter, StrokeSource};
pub use entropy::{BitString, EntropySize};
pub use mnemonic::{Dictionary, MnemonicPhrase, Sha256Digest};
pub use qr::{QrCodeEncoder, QrEncoder};
pub use session::{MnemonicSession, Progress, SessionError, SharedSession};
pub use validation::{StrokeOutcome, StrokeValidator};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
