//! Out-of-band scanning diagnostics.
//!
//! Encoding problems are not tokens: the scanner substitutes a sentinel
//! rune, keeps classifying, and records a [`ScanError`] on a side channel
//! the consumer can drain independently of the token stream. No condition
//! recorded here ever aborts scanning.

use hdl_token::Position;
use thiserror::Error;

/// A diagnostic recorded on the scanner's side channel.
///
/// Carries WHERE (the rune-counted position of the offending input) and
/// WHAT (the [`ScanErrorKind`]). Errors are accumulated in source order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{position}: {kind}")]
pub struct ScanError {
    position: Position,
    kind: ScanErrorKind,
}

impl ScanError {
    pub(crate) fn new(position: Position, kind: ScanErrorKind) -> Self {
        ScanError { position, kind }
    }

    /// Where the offending input sits.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// What went wrong.
    pub fn kind(&self) -> ScanErrorKind {
        self.kind
    }

    /// Human-readable message, without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// What kind of side-channel diagnostic was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    /// The input bytes do not form a valid UTF-8 sequence. The scanner
    /// substituted `U+FFFD` for one byte and continued.
    #[error("invalid UTF-8 encoding")]
    InvalidEncoding,
}
