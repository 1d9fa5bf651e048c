//! Lexical scanner for the HDL chip format.
//!
//! The scanner converts raw UTF-8 source text into position-tagged
//! [`hdl_token::Token`]s for a parser to consume. It is synchronous and
//! pull-based: construct a [`Scanner`] over an in-memory buffer, then call
//! [`Scanner::scan`] until the terminal token.
//!
//! # Error Policy
//!
//! `scan()` is infallible. Malformed input becomes an in-stream
//! `Illegal` token: single bad runes and a lone `.` are recoverable
//! (scanning resumes right after), while an unterminated block or
//! documentation comment is terminal (the scanner latches and replays the
//! token). Invalid UTF-8 never aborts scanning at all — the offending
//! bytes are replaced by `U+FFFD` and a [`ScanError`] is recorded on the
//! side channel.
//!
//! # Streaming
//!
//! The core performs no concurrency. For a decoupled producer/consumer
//! pipeline, [`stream`] runs a scanner on its own thread behind a bounded
//! channel with hang-up-as-cancellation semantics.

mod comment;
mod cursor;
mod error;
mod scanner;
mod stream;

pub use error::{ScanError, ScanErrorKind};
pub use scanner::Scanner;
pub use stream::{stream, TokenStream};
