//! The cat pipeline: read, detect, tokenize, decorate, emit.

use crate::{
    accents,
    config::DEFAULT_THEME,
    diagnostics::Diagnostics,
    engine::Engine,
    error::Result,
    highlight::{Highlighter, PlainHighlighter, TokenLine, logical_lines},
    input,
    invocation::{Invocation, OutputMode},
    lines::LineSet,
    palette, render,
};

/// Execute one run: a single read, a single transform, a single write.
pub fn run(invocation: &Invocation, diagnostics: &mut Diagnostics) -> Result<()> {
    let text = input::read(&invocation.source)?;
    let highlight = resolve_highlight_lines(&text, invocation);

    let output = match invocation.output_mode {
        OutputMode::Plain => render::render_plain(&text, invocation),
        OutputMode::Formatted => {
            let engine = Engine::new();
            let token_lines = tokenize(&engine, &text, invocation, diagnostics)?;
            let token_lines = if invocation.accents {
                accents::apply(token_lines)
            } else {
                token_lines
            };
            render::render_formatted(&text, &token_lines, invocation, &highlight)
        }
    };

    render::write_output(&output, invocation.out_file.as_deref())
}

/// Union the explicit highlight lines with regex-matched lines.
fn resolve_highlight_lines(text: &str, invocation: &Invocation) -> LineSet {
    let mut highlight = invocation.highlight_lines.clone();
    if let Some(pattern) = &invocation.highlight_pattern {
        for (index, (content, _)) in logical_lines(text).iter().enumerate() {
            if pattern.is_match(content) {
                highlight.insert(index + 1);
            }
        }
    }
    highlight
}

/// Tokenize the input with the detected syntax, falling back to plain text
/// when nothing can be resolved. Detection failure is a silent degrade, not
/// an error.
fn tokenize(
    engine: &Engine,
    text: &str,
    invocation: &Invocation,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<TokenLine>> {
    let syntax = engine.detect(
        text,
        invocation.source.detection_hint(),
        invocation.language.as_deref(),
    );

    let theme = match engine.theme(&invocation.theme) {
        Some(theme) => Some(theme),
        None => {
            diagnostics.warn(format!(
                "Theme '{}' not found; using {DEFAULT_THEME}",
                invocation.theme
            ));
            engine.theme(DEFAULT_THEME)
        }
    };

    match (syntax, theme) {
        (Some(syntax), Some(theme)) => {
            let highlighter = engine.highlighter(syntax, theme);
            diagnostics.note(palette::language_banner(highlighter.language()));
            highlighter.tokenize(text)
        }
        _ => {
            diagnostics.note_verbose("No language detected; rendering as plain text.");
            PlainHighlighter.tokenize(text)
        }
    }
}
