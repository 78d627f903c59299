//! CLI parsing and dispatch.

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::{CommandFactory, Parser};
use regex::Regex;

use crate::{
    cat,
    config::Config,
    diagnostics::Diagnostics,
    error::{Error, Result},
    input,
    invocation::{Invocation, OutputMode, Source},
    lines::LineSet,
    meow, palette, render,
};

/// Parsed command line arguments.
///
/// The original tool spelled its options with single-dash words (`-hln`,
/// `-oln`, `-lang`, `-bgcolor`); those words survive as long aliases.
#[derive(Debug, Parser)]
#[command(
    name = "colorcat",
    version,
    about = "Enhanced source code highlighting for the terminal",
    disable_help_flag = true
)]
struct Cli {
    /// The file to be highlighted; standard input when omitted.
    filename: Option<PathBuf>,
    /// Display line numbers.
    #[arg(short = 'n', long, alias = "ln")]
    line_numbers: bool,
    /// Highlight specific lines, e.g. "2,4" or "10-14,20".
    #[arg(short = 'H', long, alias = "hln", value_name = "LINES")]
    highlight_lines: Option<String>,
    /// Explicitly specify the language instead of detecting it.
    #[arg(short = 'l', long, alias = "lang", value_name = "LANG")]
    language: Option<String>,
    /// Also highlight lines matching a regex pattern.
    #[arg(short = 'e', long, value_name = "PATTERN")]
    regex: Option<String>,
    /// Output rendering mode.
    #[arg(
        short = 'o',
        long,
        alias = "output",
        value_enum,
        default_value = "formatted",
        value_name = "MODE"
    )]
    output_mode: OutputMode,
    /// Show only these lines, dropping all others.
    #[arg(short = 'O', long, alias = "oln", value_name = "LINES")]
    only_lines: Option<String>,
    /// Background color for highlighted lines (256-color index, 0-255).
    #[arg(short = 'b', long, alias = "bgcolor", value_name = "COLOR")]
    bg_color: Option<u8>,
    /// Write output to a file instead of standard output.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Cat goes meow.
    #[arg(short = 'm', long)]
    meow: bool,
    /// Enable verbose output.
    #[arg(long)]
    verbose: bool,
    /// Print help.
    #[arg(short = 'h', long)]
    help: bool,
}

/// Run the CLI for the current process arguments.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.help {
        print_help();
        return Ok(());
    }

    let mut diagnostics = Diagnostics::new(cli.verbose);
    let config = Config::load()?;
    let invocation = resolve(cli, &config)?;

    if invocation.meow {
        let text = read_if_available(&invocation)?;
        let block = meow::furball(text.as_deref());
        return render::write_output(&block, invocation.out_file.as_deref());
    }

    if invocation.source == Source::Stdin && input::stdin_is_terminal() {
        // Nothing to read without blocking; show the cat and the usage.
        print!("{}", meow::furball(None));
        diagnostics.note("No input file was detected.");
        print_help();
        return Ok(());
    }

    let result = cat::run(&invocation, &mut diagnostics);
    diagnostics.print_warning_summary();
    result
}

/// Resolve CLI arguments and config into an immutable invocation.
fn resolve(cli: Cli, config: &Config) -> Result<Invocation> {
    let source = match cli.filename {
        Some(path) => Source::File(path),
        None => Source::Stdin,
    };

    let highlight_lines = match cli.highlight_lines.as_deref() {
        Some(spec) => LineSet::parse(spec)?,
        None => LineSet::new(),
    };
    let only_lines = cli.only_lines.as_deref().map(LineSet::parse).transpose()?;

    let highlight_pattern = cli
        .regex
        .as_deref()
        .map(|pattern| {
            Regex::new(pattern).map_err(|error| Error::RegexParse {
                pattern: pattern.to_string(),
                source: error,
            })
        })
        .transpose()?;

    Ok(Invocation {
        source,
        language: cli.language,
        line_numbers: cli.line_numbers,
        highlight_lines,
        highlight_pattern,
        output_mode: cli.output_mode,
        only_lines,
        bg_color: cli.bg_color.unwrap_or(config.bg_highlight),
        out_file: cli.out,
        theme: config.theme.clone(),
        accents: config.accents,
        meow: cli.meow,
    })
}

/// Read the input for the meow weave when one is actually available.
fn read_if_available(invocation: &Invocation) -> Result<Option<String>> {
    match &invocation.source {
        Source::File(_) => input::read(&invocation.source).map(Some),
        Source::Stdin if !input::stdin_is_terminal() => {
            input::read(&invocation.source).map(Some)
        }
        Source::Stdin => Ok(None),
    }
}

/// Print the help text, colorized when attached to a terminal.
fn print_help() {
    let help = Cli::command().render_long_help().to_string();
    let rendered = if io::stdout().is_terminal() {
        palette::colorize_help(&help)
    } else {
        help
    };
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
}
