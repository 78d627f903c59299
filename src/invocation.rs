//! The resolved option set for a single run.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use regex::Regex;

use crate::lines::LineSet;

/// Where the input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A named file on disk.
    File(PathBuf),
    /// The process standard input.
    Stdin,
}

impl Source {
    /// Return the file name usable as a language-detection hint.
    pub fn detection_hint(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }
}

/// Supported output renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// ANSI-colored output.
    Formatted,
    /// Color-code-free text.
    Plain,
}

/// Immutable, fully-resolved options for one run.
///
/// Constructed once from the CLI arguments and config file, then consumed by
/// the cat pipeline. Discarded at process exit.
#[derive(Debug)]
pub struct Invocation {
    /// Input source (file or stdin).
    pub source: Source,
    /// Explicit language override, if any.
    pub language: Option<String>,
    /// Display 1-based line numbers.
    pub line_numbers: bool,
    /// Lines selected for background highlighting.
    pub highlight_lines: LineSet,
    /// Pattern selecting additional lines for highlighting.
    pub highlight_pattern: Option<Regex>,
    /// Output rendering mode.
    pub output_mode: OutputMode,
    /// When set, only these lines are emitted.
    pub only_lines: Option<LineSet>,
    /// 256-color background index for highlighted lines.
    pub bg_color: u8,
    /// Output file; stdout when absent.
    pub out_file: Option<PathBuf>,
    /// Syntect theme name for token coloring.
    pub theme: String,
    /// Apply the punctuation accent pass.
    pub accents: bool,
    /// The novelty flag: render the furball instead of the content.
    pub meow: bool,
}
