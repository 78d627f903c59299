//! Applying an invocation to tokenized content and emitting output.

use std::{fmt::Write as _, fs, io::Write as _, path::Path};

use owo_colors::OwoColorize;

use crate::{
    error::{Error, Result},
    highlight::{Paint, SpanStyle, TokenLine, logical_lines},
    invocation::Invocation,
    lines::LineSet,
};

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Render the ANSI-colored form of the input.
///
/// `token_lines` must align one-to-one with the logical lines of `text`; the
/// original line endings are re-attached from `text`. Lines outside the
/// only-lines subset are dropped; lines in `highlight` get a 256-color
/// background overlay. Both are keyed by original 1-based numbers.
pub fn render_formatted(
    text: &str,
    token_lines: &[TokenLine],
    invocation: &Invocation,
    highlight: &LineSet,
) -> String {
    let mut output = String::new();
    for (index, (_, ending)) in logical_lines(text).iter().enumerate() {
        let number = index + 1;
        if !selected(invocation, number) {
            continue;
        }
        if invocation.line_numbers {
            let _ = write!(output, "{} ", format!("{number:>4}:").dimmed());
        }

        let highlighted = highlight.contains(number);
        let background = highlighted.then(|| format!("\x1b[48;5;{}m", invocation.bg_color));
        let empty = TokenLine::new();
        let spans = token_lines.get(index).unwrap_or(&empty);
        for span in spans {
            output.push_str(RESET);
            if let Some(background) = &background {
                output.push_str(background);
            }
            if let Some(style) = &span.style {
                push_style(&mut output, style);
            }
            output.push_str(&span.text);
        }
        if spans.is_empty()
            && let Some(background) = &background
        {
            output.push_str(background);
        }
        output.push_str(RESET);
        output.push_str(ending);
    }
    output
}

/// Render the color-code-free form of the input.
///
/// With no selection flags and no line numbers this reproduces the input
/// byte-for-byte.
pub fn render_plain(text: &str, invocation: &Invocation) -> String {
    let mut output = String::new();
    for (index, (content, ending)) in logical_lines(text).iter().enumerate() {
        let number = index + 1;
        if !selected(invocation, number) {
            continue;
        }
        if invocation.line_numbers {
            let _ = write!(output, "{number:>4}: ");
        }
        output.push_str(content);
        output.push_str(ending);
    }
    output
}

/// Whether a 1-based line survives the only-lines filter.
fn selected(invocation: &Invocation, number: usize) -> bool {
    match &invocation.only_lines {
        Some(only) => only.contains(number),
        None => true,
    }
}

/// Append the escape codes for a span style.
fn push_style(output: &mut String, style: &SpanStyle) {
    match style.paint {
        Paint::Rgb(r, g, b) => {
            let _ = write!(output, "\x1b[38;2;{r};{g};{b}m");
        }
        Paint::Indexed(index) => {
            let _ = write!(output, "\x1b[38;5;{index}m");
        }
    }
    if style.bold {
        output.push_str("\x1b[1m");
    }
    if style.italic {
        output.push_str("\x1b[3m");
    }
    if style.underline {
        output.push_str("\x1b[4m");
    }
}

/// Write the rendered output to its target: stdout, or the `--out` file.
pub fn write_output(output: &str, out_file: Option<&Path>) -> Result<()> {
    match out_file {
        Some(path) => fs::write(path, output).map_err(|error| Error::OutputWrite {
            path: path.to_path_buf(),
            source: error,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|error| Error::StdoutWrite { source: error })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render_formatted, render_plain};
    use crate::{
        highlight::{Highlighter, PlainHighlighter},
        invocation::{Invocation, OutputMode, Source},
        lines::LineSet,
    };

    fn invocation(mode: OutputMode) -> Invocation {
        Invocation {
            source: Source::Stdin,
            language: None,
            line_numbers: false,
            highlight_lines: LineSet::new(),
            highlight_pattern: None,
            output_mode: mode,
            only_lines: None,
            bg_color: 239,
            out_file: None,
            theme: "base16-ocean.dark".to_string(),
            accents: true,
            meow: false,
        }
    }

    #[test]
    fn plain_round_trips_input() {
        let text = "one\ntwo\r\nthree";
        let output = render_plain(text, &invocation(OutputMode::Plain));
        assert_eq!(output, text);
    }

    #[test]
    fn plain_contains_no_escapes() {
        let text = "fn main() {}\n";
        let output = render_plain(text, &invocation(OutputMode::Plain));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn only_lines_emits_exact_subset() {
        let text = "one\ntwo\nthree\nfour\nfive\n";
        let mut invocation = invocation(OutputMode::Plain);
        invocation.only_lines = Some(LineSet::parse("2,4").expect("spec should parse"));

        let output = render_plain(text, &invocation);
        assert_eq!(output, "two\nfour\n");
    }

    #[test]
    fn plain_numbers_use_original_line_numbers() {
        let text = "one\ntwo\nthree\n";
        let mut invocation = invocation(OutputMode::Plain);
        invocation.line_numbers = true;
        invocation.only_lines = Some(LineSet::parse("3").expect("spec should parse"));

        let output = render_plain(text, &invocation);
        assert_eq!(output, "   3: three\n");
    }

    #[test]
    fn highlight_marks_only_requested_lines() {
        let text = "one\ntwo\nthree\n";
        let invocation = invocation(OutputMode::Formatted);
        let token_lines = PlainHighlighter.tokenize(text).expect("tokenize");
        let highlight = LineSet::parse("1,3").expect("spec should parse");

        let output = render_formatted(text, &token_lines, &invocation, &highlight);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("\x1b[48;5;239m"));
        assert!(!lines[1].contains("\x1b[48;5;"));
        assert!(lines[2].contains("\x1b[48;5;239m"));
    }

    #[test]
    fn formatted_respects_custom_background() {
        let text = "only\n";
        let mut invocation = invocation(OutputMode::Formatted);
        invocation.bg_color = 52;
        let token_lines = PlainHighlighter.tokenize(text).expect("tokenize");
        let highlight = LineSet::parse("1").expect("spec should parse");

        let output = render_formatted(text, &token_lines, &invocation, &highlight);
        assert!(output.contains("\x1b[48;5;52m"));
    }

    #[test]
    fn formatted_filter_runs_before_highlight() {
        let text = "one\ntwo\nthree\n";
        let mut invocation = invocation(OutputMode::Formatted);
        invocation.only_lines = Some(LineSet::parse("2").expect("spec should parse"));
        let token_lines = PlainHighlighter.tokenize(text).expect("tokenize");
        let highlight = LineSet::parse("1,2").expect("spec should parse");

        let output = render_formatted(text, &token_lines, &invocation, &highlight);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("two"));
        assert!(lines[0].contains("\x1b[48;5;239m"));
    }
}
