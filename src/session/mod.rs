//! Mnemonic session orchestration.
//!
//! Owns the accepted strokes and runs validation, sizing, extraction,
//! checksum and word mapping in response to user actions. This is the
//! contract the drawing UI talks to:
//!
//! - `on_stroke_completed` / `on_undo` / `on_clear` for input
//! - `progress` for the stroke counter
//! - `generate_mnemonic` for the phrase, `qr_image` for its QR code

mod machine;
mod pending;
mod shared;
mod state;

pub use machine::{MnemonicSession, SessionCounters, SessionError};
pub use pending::{ComputedMnemonic, GenerationStart, PendingMnemonic};
pub use shared::SharedSession;
pub use state::{Notice, NoticeKind, Progress, SessionState};
