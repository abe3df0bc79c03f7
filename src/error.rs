use rustyline::error::ReadlineError;
use std::io;
use thiserror::Error;

/// Fatal failures of a shell session.
///
/// Evaluation failures never show up here: the engine reports those inside
/// its outcome and the loop prints them and keeps going. This type covers the
/// structural failures that end the session instead.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Line acquisition failed for a reason other than end-of-input.
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
    /// Writing to the operator-facing output stream failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
