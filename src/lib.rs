#![warn(missing_docs)]
//! Library support for the colorcat CLI.

/// Punctuation accent pass over token streams.
mod accents;
/// The cat pipeline: read, detect, tokenize, decorate, emit.
mod cat;
/// Command-line interface wiring and dispatch.
mod cli;
/// Configuration loading and validation.
mod config;
/// Warning aggregation and diagnostic output.
mod diagnostics;
/// Syntect-backed highlighting engine.
mod engine;
/// Error handling for the crate.
mod error;
/// The injected highlighting capability and its token types.
mod highlight;
/// Input resolution and reading.
mod input;
/// The resolved option set for a single run.
mod invocation;
/// Parsing of comma/range line specifications.
mod lines;
/// The meow easter egg.
mod meow;
/// Color styling for the CLI's own output.
mod palette;
/// Output assembly and emission.
mod render;

pub use crate::error::{Error, Result};

/// Run the CLI, returning a structured error on failure.
pub fn run() -> Result<()> {
    cli::run()
}
