//! Token kinds for the HDL chip format.

use std::fmt;

/// The set of lexical tokens of the HDL chip format.
///
/// The set is closed: the grammar has no floats, no string literals and no
/// operators beyond the fixed punctuation below. Keywords are resolved from
/// identifier spellings by [`lookup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Special ===
    /// A malformed token, or the terminal token of an unterminated comment.
    Illegal,
    /// End of input.
    Eof,
    /// A comment, delimiters included in the literal.
    Comment,

    // === Identifiers and literals ===
    Ident,  // Nand
    Number, // 123
    True,   // true
    False,  // false

    // === Delimiters and separators ===
    Comma,      // ,
    Semicolon,  // ;
    Colon,      // :
    LeftDelim,  // {
    RightDelim, // }
    LeftPar,    // (
    RightPar,   // )
    LeftIndex,  // [
    RightIndex, // ]
    Pipe,       // =
    Range,      // ..

    // === Keywords ===
    Decl,    // CHIP
    In,      // IN
    Out,     // OUT
    Parts,   // PARTS
    Clocked, // CLOCKED
}

impl TokenKind {
    /// Fixed spelling of the kind, used for diagnostics.
    ///
    /// Punctuation and keywords print as their source text; the variable
    /// kinds print as an uppercase tag (`IDENT`, `NUMBER`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Comment => "COMMENT",

            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::True => "true",
            TokenKind::False => "false",

            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LeftDelim => "{",
            TokenKind::RightDelim => "}",
            TokenKind::LeftPar => "(",
            TokenKind::RightPar => ")",
            TokenKind::LeftIndex => "[",
            TokenKind::RightIndex => "]",
            TokenKind::Pipe => "=",
            TokenKind::Range => "..",

            TokenKind::Decl => "CHIP",
            TokenKind::In => "IN",
            TokenKind::Out => "OUT",
            TokenKind::Parts => "PARTS",
            TokenKind::Clocked => "CLOCKED",
        }
    }

    /// Returns `true` for the reserved keywords (`CHIP`, `IN`, `OUT`,
    /// `PARTS`, `CLOCKED`).
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Decl
                | TokenKind::In
                | TokenKind::Out
                | TokenKind::Parts
                | TokenKind::Clocked
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve an identifier's spelling to its token kind.
///
/// Keywords match exact-case only: `chip` and `Clocked` are plain
/// identifiers. The `true`/`false` literals resolve to their own kinds;
/// every other spelling is [`TokenKind::Ident`].
///
/// Uses the identifier's byte length as a first-pass filter, so most
/// identifiers are rejected without any string comparison.
pub fn lookup(ident: &str) -> TokenKind {
    match ident.len() {
        2 => match ident {
            "IN" => TokenKind::In,
            _ => TokenKind::Ident,
        },
        3 => match ident {
            "OUT" => TokenKind::Out,
            _ => TokenKind::Ident,
        },
        4 => match ident {
            "CHIP" => TokenKind::Decl,
            "true" => TokenKind::True,
            _ => TokenKind::Ident,
        },
        5 => match ident {
            "PARTS" => TokenKind::Parts,
            "false" => TokenKind::False,
            _ => TokenKind::Ident,
        },
        7 => match ident {
            "CLOCKED" => TokenKind::Clocked,
            _ => TokenKind::Ident,
        },
        _ => TokenKind::Ident,
    }
}
