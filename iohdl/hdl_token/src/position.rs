//! Rune-counted source positions.

use std::fmt;

/// A position in an input source.
///
/// Line and column count runes (Unicode code points), not bytes: a
/// multi-byte rune advances the column by exactly one. Internally both
/// counters are zero-based; the [`line`](Position::line) and
/// [`column`](Position::column) accessors expose them 1-indexed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    file: String,
    line: u32,
    column: u32,
}

impl Position {
    /// Returns a position pointing to (`line`, `column`) in `file`.
    ///
    /// Parameters `line` and `column` are zero-indexed.
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Position {
            file: file.into(),
            line,
            column,
        }
    }

    /// The label of the input, a file or chip name supplied by the caller.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The line number. The first line has index 1.
    pub fn line(&self) -> u32 {
        self.line + 1
    }

    /// The column number, i.e. the rune count into the current line.
    /// The first column has index 1.
    pub fn column(&self) -> u32 {
        self.column + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} line {} column {}",
            self.file(),
            self.line(),
            self.column()
        )
    }
}
