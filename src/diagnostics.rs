//! Warning aggregation and diagnostic output.

/// Collects warnings for a run and writes them to stderr, keeping the stdout
/// payload clean for piping and `--out` files.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Whether verbose notes are emitted.
    verbose: bool,
    /// Collected warning messages.
    warnings: Vec<String>,
}

impl Diagnostics {
    /// Create a new diagnostics collector.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            warnings: Vec::new(),
        }
    }

    /// Record a warning and print it immediately.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("Warning: {message}");
        self.warnings.push(message);
    }

    /// Print an informational line, such as the detected language banner.
    pub fn note(&self, message: impl Into<String>) {
        eprintln!("{}", message.into());
    }

    /// Print a note only when verbose output is enabled.
    pub fn note_verbose(&self, message: impl Into<String>) {
        if self.verbose {
            self.note(message);
        }
    }

    /// Print a warning summary when warnings were emitted.
    pub fn print_warning_summary(&self) {
        if self.warnings.is_empty() {
            return;
        }

        eprintln!("Completed with {} warning(s).", self.warnings.len());
    }
}
