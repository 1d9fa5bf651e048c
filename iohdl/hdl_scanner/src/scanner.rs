//! Pull-based scanner state machine.

use hdl_token::{lookup, Position, Token, TokenKind};

use crate::comment::CommentDelim;
use crate::cursor::Cursor;
use crate::error::{ScanError, ScanErrorKind};

/// Whitespace runes skipped between tokens. Tabs and carriage returns
/// count as a single column; only a line feed starts a new line.
fn is_space(rune: char) -> bool {
    matches!(rune, ' ' | '\t' | '\r' | '\n')
}

/// ASCII decimal digits only; the format has no other number syntax.
fn is_digit(rune: char) -> bool {
    rune.is_ascii_digit()
}

/// Runes allowed after the first letter of an identifier.
fn is_alphanumeric(rune: char) -> bool {
    is_digit(rune) || rune.is_alphabetic() || rune == '_'
}

/// Pull-based scanner over one input buffer.
///
/// Construct with [`Scanner::new`], then call [`Scanner::scan`] until it
/// returns the terminal token: `Eof` on normal completion, or `Illegal`
/// for an unterminated comment. Past that point the scanner is finished
/// and every further call replays the terminal token.
///
/// A scanner owns its buffer and cursor state exclusively; two scanners
/// over the same input always yield identical sequences.
#[derive(Debug)]
pub struct Scanner {
    file: String,
    cursor: Cursor,
    /// Byte offset and coordinates of the current token's first rune,
    /// captured after whitespace skipping.
    start: usize,
    tok_line: u32,
    tok_col: u32,
    /// Terminal token replayed by every call once the input is finished.
    done: Option<Token>,
    errors: Vec<ScanError>,
}

impl Scanner {
    /// Returns a ready-to-use scanner over `src`.
    ///
    /// `file` is the diagnostic label (file or chip name) stamped on every
    /// position; it is never opened or otherwise interpreted.
    pub fn new(file: impl Into<String>, src: impl Into<Vec<u8>>) -> Self {
        Scanner {
            file: file.into(),
            cursor: Cursor::new(src.into()),
            start: 0,
            tok_line: 0,
            tok_col: 0,
            done: None,
            errors: Vec::new(),
        }
    }

    /// Scan the next token.
    ///
    /// Each call consumes any leading whitespace, then exactly one token's
    /// worth of input. The returned position points to the token's first
    /// rune. All tokens carry their exact source text as literal, except
    /// `Eof` whose literal is empty.
    pub fn scan(&mut self) -> Token {
        if let Some(done) = &self.done {
            return done.clone();
        }

        self.skip_space();
        let token = match self.cursor.current() {
            None => {
                let token = self.token(TokenKind::Eof, String::new());
                self.done = Some(token.clone());
                token
            }
            Some(rune) if is_digit(rune) => self.number(),
            Some(rune) if rune.is_alphabetic() => self.identifier(),
            Some('.') => self.dot(),
            Some('/') => self.comment(),
            Some(rune) => self.simple(rune),
        };
        self.collect_encoding_errors();
        token
    }

    /// True once the scanner has delivered its terminal token (`Eof`, or
    /// `Illegal` for an unterminated comment).
    pub fn is_finished(&self) -> bool {
        self.done.is_some()
    }

    /// Encoding diagnostics collected so far, in source order.
    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    /// Maximal run of ASCII digits. A `.` immediately following is not
    /// part of the number; the format has no floats.
    fn number(&mut self) -> Token {
        while self.cursor.current().is_some_and(is_digit) {
            self.cursor.bump();
        }
        self.token(TokenKind::Number, self.literal())
    }

    /// Maximal run of letters, digits and `_`, resolved against the
    /// keyword table.
    fn identifier(&mut self) -> Token {
        while self.cursor.current().is_some_and(is_alphanumeric) {
            self.cursor.bump();
        }
        let literal = self.literal();
        let kind = lookup(&literal);
        self.token(kind, literal)
    }

    /// `..` is a range; a lone `.` is a recoverable error. The rune after
    /// the dot is left in place and re-examined fresh on the next call.
    fn dot(&mut self) -> Token {
        self.cursor.bump();
        if self.cursor.current() == Some('.') {
            self.cursor.bump();
            self.token(TokenKind::Range, self.literal())
        } else {
            self.token(TokenKind::Illegal, self.literal())
        }
    }

    /// Fixed single-rune tokens, and the recoverable `Illegal` fallback
    /// for anything unclassifiable (the `U+FFFD` substitution included).
    fn simple(&mut self, rune: char) -> Token {
        let kind = match rune {
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '{' => TokenKind::LeftDelim,
            '}' => TokenKind::RightDelim,
            '(' => TokenKind::LeftPar,
            ')' => TokenKind::RightPar,
            '[' => TokenKind::LeftIndex,
            ']' => TokenKind::RightIndex,
            '=' => TokenKind::Pipe,
            _ => TokenKind::Illegal,
        };
        self.cursor.bump();
        self.token(kind, self.literal())
    }

    /// Comment scanning, entered on a `/` rune.
    ///
    /// A line comment ends before the next CR/LF or at end of input; end
    /// of input is not an error there. Block and documentation comments
    /// run to the closing `*/`; hitting end of input first is terminal:
    /// the `Illegal` token carries the whole unterminated text and no
    /// further tokens are available.
    fn comment(&mut self) -> Token {
        let Some(delim) = CommentDelim::read(&mut self.cursor) else {
            // Only the '/' was consumed; the offending rune is re-examined
            // on the next call.
            return self.token(TokenKind::Illegal, self.literal());
        };

        match delim {
            CommentDelim::Empty => self.token(TokenKind::Comment, self.literal()),
            CommentDelim::Line => {
                while !matches!(self.cursor.current(), None | Some('\n' | '\r')) {
                    self.cursor.bump();
                }
                self.token(TokenKind::Comment, self.literal())
            }
            CommentDelim::Block | CommentDelim::Doc => self.close_comment(),
        }
    }

    /// Scan for the `*/` closing a block or documentation comment.
    fn close_comment(&mut self) -> Token {
        loop {
            while !matches!(self.cursor.current(), None | Some('*')) {
                self.cursor.bump();
            }
            if self.cursor.current().is_none() {
                let token = self.token(TokenKind::Illegal, self.literal());
                self.done = Some(token.clone());
                return token;
            }
            self.cursor.bump(); // the '*'
            if self.cursor.current() == Some('/') {
                self.cursor.bump();
                return self.token(TokenKind::Comment, self.literal());
            }
        }
    }

    fn skip_space(&mut self) {
        while self.cursor.current().is_some_and(is_space) {
            self.cursor.bump();
        }
        self.start = self.cursor.pos();
        self.tok_line = self.cursor.line();
        self.tok_col = self.cursor.col();
    }

    /// The source text between the token start and the cursor.
    ///
    /// The lossy conversion mirrors the cursor's `U+FFFD` substitution for
    /// any invalid bytes inside the slice.
    fn literal(&self) -> String {
        String::from_utf8_lossy(self.cursor.slice(self.start)).into_owned()
    }

    fn token(&self, kind: TokenKind, literal: String) -> Token {
        let position = Position::new(self.file.clone(), self.tok_line, self.tok_col);
        Token::new(kind, literal, position)
    }

    /// Drain the cursor's `U+FFFD` substitutions into the side channel.
    fn collect_encoding_errors(&mut self) {
        for rune_pos in self.cursor.take_invalid_runes() {
            let position = Position::new(self.file.clone(), rune_pos.line, rune_pos.col);
            self.errors
                .push(ScanError::new(position, ScanErrorKind::InvalidEncoding));
        }
    }
}
