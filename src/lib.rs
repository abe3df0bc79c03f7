//! Interactive front door to a toy-language evaluation engine.
//!
//! This crate is the session layer of a line-oriented shell: it prompts for
//! input, drops lines with nothing to evaluate (blank lines, `#` comments),
//! forwards every other line verbatim to an evaluation engine, and prints the
//! engine's value or failure message. Typing `end` as the entire line, or
//! closing the input stream, ends the session.
//!
//! Language semantics live entirely behind the [`Engine`] trait, so any
//! interpreter can sit on the other side; the bundled [`calc`] engine makes
//! the standalone binary runnable.
//!
//! The main entry point is [`Shell`], driven by [`Shell::run`].

pub mod calc;
pub mod classify;
pub mod engine;
pub mod error;
pub mod shell;

pub use engine::{Engine, Evaluation, Outcome, ValueList};
pub use error::ShellError;
pub use shell::Shell;
