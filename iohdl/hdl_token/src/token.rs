//! The token value type.

use std::fmt;

use crate::{Position, TokenKind};

/// Longest literal printed in full by the [`Display`](fmt::Display) impl;
/// longer literals are truncated for diagnostics.
const DISPLAY_RUNES: usize = 10;

/// A scanned token: its kind, exact source text and starting position.
///
/// The literal is the exact source slice of the token, delimiters included
/// for comments. The `Eof` token has an empty literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    position: Position,
}

impl Token {
    /// Builds a token. The scanner is the only intended producer.
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            literal: literal.into(),
            position,
        }
    }

    /// The classification of the token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of the token.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// The position of the token's first rune.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns `true` for a comment opened with `//`.
    pub fn is_line_comment(&self) -> bool {
        self.kind == TokenKind::Comment && self.literal.starts_with("//")
    }

    /// Returns `true` for a comment opened with `/*`, the documentation
    /// and degenerate `/**/` forms included.
    pub fn is_block_comment(&self) -> bool {
        self.kind == TokenKind::Comment && self.literal.starts_with("/*")
    }

    /// Returns `true` for a documentation ("API") comment: opened with
    /// exactly `/**` and not the degenerate `/**/`.
    pub fn is_api_comment(&self) -> bool {
        self.kind == TokenKind::Comment
            && self.literal.starts_with("/**")
            && self.literal != "/**/"
    }
}

impl fmt::Display for Token {
    /// Diagnostic projection: `EOF` prints bare, an illegal token prints
    /// its offending text as-is, keywords print as `<CHIP>`, and other
    /// literals print quoted, truncated past ten runes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::Illegal => f.write_str(&self.literal),
            kind if kind.is_keyword() => write!(f, "<{}>", self.literal),
            _ => {
                if self.literal.chars().count() > DISPLAY_RUNES {
                    let short: String = self.literal.chars().take(DISPLAY_RUNES).collect();
                    write!(f, "{short:?}...")
                } else {
                    write!(f, "{:?}", self.literal)
                }
            }
        }
    }
}
