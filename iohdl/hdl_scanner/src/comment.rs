//! Comment-delimiter sub-automaton.
//!
//! Comment openers come in four shapes: `//` line comments, `/*` block
//! comments, `/**` documentation ("API") comments, and the degenerate
//! already-closed `/**/`. The classifier reads the opener off the cursor
//! and returns which shape it saw, so each terminal case of the automaton
//! is testable on its own instead of being buried in nested conditionals.

use crate::cursor::Cursor;

/// Shape of a comment opener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CommentDelim {
    /// `//` — runs to the end of the line.
    Line,
    /// `/*` — runs to the matching `*/`.
    Block,
    /// `/**` — documentation comment, runs to the matching `*/`.
    Doc,
    /// `/**/` — empty block comment, already closed by its opener.
    Empty,
}

impl CommentDelim {
    /// Read a comment opener off the cursor.
    ///
    /// Call with the cursor on a `/` rune. On success the cursor sits on
    /// the first rune after the opener (for [`Empty`](Self::Empty), after
    /// the closing `/`). When the rune after the `/` opens no comment,
    /// returns `None` with only the `/` consumed, so the offending rune is
    /// re-examined fresh by the caller.
    pub(crate) fn read(cursor: &mut Cursor) -> Option<Self> {
        cursor.bump(); // the leading '/'
        match cursor.current() {
            Some('/') => {
                cursor.bump();
                Some(CommentDelim::Line)
            }
            Some('*') => {
                cursor.bump();
                if cursor.current() != Some('*') {
                    return Some(CommentDelim::Block);
                }
                cursor.bump();
                if cursor.current() == Some('/') {
                    cursor.bump();
                    Some(CommentDelim::Empty)
                } else {
                    Some(CommentDelim::Doc)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
