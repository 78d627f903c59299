//! Error types for the colorcat CLI.

use std::{env::VarError, io, path::PathBuf, process::ExitCode, result::Result as StdResult};

use thiserror::Error;

/// Result type for colorcat operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("File not found: {path}")]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The input file could not be read.
    #[error("Failed to read {path}: {source}")]
    InputRead {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Standard input could not be read.
    #[error("Failed to read standard input: {source}")]
    StdinRead {
        /// Underlying IO error.
        source: io::Error,
    },
    /// A line specification could not be parsed.
    #[error("Invalid line specification '{spec}': {message}")]
    LineSpec {
        /// The offending specification string.
        spec: String,
        /// Description of the parse failure.
        message: String,
    },
    /// A regex pattern could not be compiled.
    #[error("Invalid regex pattern '{pattern}': {source}")]
    RegexParse {
        /// Pattern that failed to compile.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
    /// The configuration file could not be read.
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The configuration file could not be parsed.
    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_yaml::Error,
    },
    /// Home directory resolution failed.
    #[error("Failed to resolve the home directory.")]
    HomeDirMissing,
    /// A config path override could not be expanded.
    #[error("Invalid config path: {path}: {source}")]
    PathExpansion {
        /// Input path that failed to expand.
        path: String,
        /// Underlying expansion error.
        source: shellexpand::LookupError<VarError>,
    },
    /// The output file could not be written.
    #[error("Failed to write output to {path}: {source}")]
    OutputWrite {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Standard output could not be written.
    #[error("Failed to write standard output: {source}")]
    StdoutWrite {
        /// Underlying IO error.
        source: io::Error,
    },
    /// The highlighting engine failed to tokenize a line.
    #[error("Highlighting failed: {source}")]
    Highlight {
        /// Underlying engine error.
        source: syntect::Error,
    },
}

impl Error {
    /// Map errors to exit codes for CLI termination.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
