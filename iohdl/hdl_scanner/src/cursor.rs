//! Rune cursor over a UTF-8 input buffer.
//!
//! The cursor owns the raw bytes and decodes one rune at a time, keeping
//! rune-counted line and column coordinates: every rune advances the
//! column by exactly one regardless of its byte width, and a line feed
//! resets the column. Byte offsets always sit on the boundary of the rune
//! under the cursor, so slicing the buffer never splits a sequence.
//!
//! # Invalid Encoding
//!
//! Bytes that do not form a valid UTF-8 sequence are replaced by a
//! `U+FFFD` rune of width one byte and recorded, one entry per bad byte.
//! The scanner drains the records into its diagnostic side channel and
//! classifies the substituted rune like any other input.

/// Longest UTF-8 encoding of a single rune, in bytes.
const MAX_RUNE_LEN: usize = 4;

/// Zero-based coordinates of a rune in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RunePos {
    pub(crate) line: u32,
    pub(crate) col: u32,
}

/// Rune cursor with line/column bookkeeping.
#[derive(Debug)]
pub(crate) struct Cursor {
    src: Vec<u8>,
    /// Rune under the cursor, `None` once the input is exhausted.
    current: Option<char>,
    /// Byte width of `current`; zero at end of input, one for a `U+FFFD`
    /// substitution.
    width: usize,
    /// Byte offset of `current`.
    pos: usize,
    line: u32,
    col: u32,
    /// Positions of `U+FFFD` substitutions not yet drained by the scanner.
    invalid: Vec<RunePos>,
}

impl Cursor {
    /// Returns a cursor positioned on the first rune of `src`.
    pub(crate) fn new(src: Vec<u8>) -> Self {
        let mut cursor = Cursor {
            src,
            current: None,
            width: 0,
            pos: 0,
            line: 0,
            col: 0,
            invalid: Vec::new(),
        };
        cursor.decode();
        cursor
    }

    /// The rune under the cursor, `None` at end of input.
    pub(crate) fn current(&self) -> Option<char> {
        self.current
    }

    /// Byte offset of the rune under the cursor.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Zero-based line of the rune under the cursor.
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Zero-based, rune-counted column of the rune under the cursor.
    pub(crate) fn col(&self) -> u32 {
        self.col
    }

    /// Advance to the next rune. Past the end of input this is a no-op.
    pub(crate) fn bump(&mut self) {
        let Some(current) = self.current else { return };
        self.pos += self.width;
        if current == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        self.decode();
    }

    /// Bytes from `start` up to (excluding) the rune under the cursor.
    ///
    /// `start` must be an offset previously returned by [`pos`](Self::pos).
    pub(crate) fn slice(&self, start: usize) -> &[u8] {
        &self.src[start..self.pos]
    }

    /// Drains the positions of `U+FFFD` substitutions recorded since the
    /// last call, in source order.
    pub(crate) fn take_invalid_runes(&mut self) -> Vec<RunePos> {
        std::mem::take(&mut self.invalid)
    }

    /// Decode the rune at `pos` into `current`.
    fn decode(&mut self) {
        if self.pos >= self.src.len() {
            self.current = None;
            self.width = 0;
            return;
        }

        // ASCII fast path.
        let byte = self.src[self.pos];
        if byte < 0x80 {
            self.current = Some(byte as char);
            self.width = 1;
            return;
        }

        let end = usize::min(self.pos + MAX_RUNE_LEN, self.src.len());
        match first_rune(&self.src[self.pos..end]) {
            Some((rune, width)) => {
                self.current = Some(rune);
                self.width = width;
            }
            None => {
                self.current = Some(char::REPLACEMENT_CHARACTER);
                self.width = 1;
                self.invalid.push(RunePos {
                    line: self.line,
                    col: self.col,
                });
            }
        }
    }
}

/// Decode the first rune of `bytes`, returning it with its byte width.
///
/// Returns `None` when the leading bytes are not a complete, valid UTF-8
/// sequence (including a sequence truncated by the end of input).
fn first_rune(bytes: &[u8]) -> Option<(char, usize)> {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.chars().next().map(|rune| (rune, rune.len_utf8())),
        Err(err) if err.valid_up_to() > 0 => {
            // The leading sequence is valid even though a later one is not.
            let valid = &bytes[..err.valid_up_to()];
            std::str::from_utf8(valid)
                .ok()
                .and_then(|s| s.chars().next())
                .map(|rune| (rune, rune.len_utf8()))
        }
        Err(_) => None,
    }
}
