//! Bounded producer adapter over the pull scanner.
//!
//! The scanning core is synchronous and pull-based. This adapter feeds a
//! bounded channel from a dedicated thread so a consumer (typically a
//! parser running as its own task) can drain tokens independently of the
//! scanning pace.
//!
//! The producer stops permanently in two cases: after sending the
//! scanner's terminal token, or as soon as a send fails because the
//! consumer hung up. Hang-up doubles as cancellation, so the producer can
//! never block forever on a full queue.

use std::thread;

use crossbeam::channel::{bounded, Iter, Receiver};

use hdl_token::Token;

use crate::error::ScanError;
use crate::scanner::Scanner;

/// Consumer half of a scanner running on a dedicated thread.
///
/// Tokens arrive in strict source order and end with the scanner's
/// terminal token (`Eof`, or `Illegal` for an unterminated comment).
/// Dropping the stream cancels the producer.
pub struct TokenStream {
    tokens: Receiver<Token>,
    errors: Receiver<Vec<ScanError>>,
}

/// Run `scanner` on a dedicated thread, delivering its tokens through a
/// bounded queue of `capacity`.
pub fn stream(mut scanner: Scanner, capacity: usize) -> TokenStream {
    let (token_tx, token_rx) = bounded(capacity);
    let (error_tx, error_rx) = bounded(1);

    thread::spawn(move || {
        loop {
            let token = scanner.scan();
            let finished = scanner.is_finished();
            if token_tx.send(token).is_err() {
                // Consumer hung up: stop scanning.
                break;
            }
            if finished {
                break;
            }
        }
        let _ = error_tx.send(scanner.errors().to_vec());
    });

    TokenStream {
        tokens: token_rx,
        errors: error_rx,
    }
}

impl TokenStream {
    /// Receive the next token, blocking until one is available.
    ///
    /// Returns `None` once the producer has delivered its terminal token
    /// and the queue is drained.
    pub fn recv(&self) -> Option<Token> {
        self.tokens.recv().ok()
    }

    /// Iterate over the remaining tokens.
    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Close the stream and collect the encoding diagnostics.
    ///
    /// Closing the token channel first doubles as cancellation: a
    /// producer still scanning observes the hang-up on its next send and
    /// exits, so this never deadlocks. Diagnostics recorded after the
    /// cancellation point are discarded with the producer.
    pub fn into_errors(self) -> Vec<ScanError> {
        drop(self.tokens);
        self.errors.recv().unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
