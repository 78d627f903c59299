//! Syntect-backed highlighting engine.
//!
//! Owns the loaded syntax and theme sets and resolves a syntax for each run.
//! Grammar and theme knowledge stays entirely inside syntect; the rest of the
//! crate only sees [`Highlighter`] token lines.

use std::path::Path;

use syntect::{
    easy::HighlightLines,
    highlighting::{FontStyle, Style as SyntectStyle, Theme, ThemeSet},
    parsing::{SyntaxReference, SyntaxSet},
};

use crate::{
    error::{Error, Result},
    highlight::{Highlighter, Paint, Span, SpanStyle, TokenLine, logical_lines},
};

/// Loaded syntax definitions and color themes.
pub struct Engine {
    /// Bundled syntax definitions.
    syntaxes: SyntaxSet,
    /// Bundled color themes.
    themes: ThemeSet,
}

impl Engine {
    /// Load the bundled syntax and theme sets.
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Resolve a syntax for the given input.
    ///
    /// An explicit language override wins outright; an unknown override falls
    /// back to plain text rather than failing. Without an override the file
    /// name is tried (extension, then full name for files like `Makefile`),
    /// then the first line of content. `None` means render plain.
    pub fn detect(
        &self,
        text: &str,
        hint: Option<&Path>,
        language: Option<&str>,
    ) -> Option<&SyntaxReference> {
        if let Some(language) = language {
            return self.syntaxes.find_syntax_by_token(language);
        }

        if let Some(path) = hint {
            if let Some(extension) = path.extension().and_then(|ext| ext.to_str())
                && let Some(syntax) = self.syntaxes.find_syntax_by_extension(extension)
            {
                return Some(syntax);
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str())
                && let Some(syntax) = self.syntaxes.find_syntax_by_extension(name)
            {
                return Some(syntax);
            }
        }

        let first_line = text.lines().next().unwrap_or("");
        self.syntaxes.find_syntax_by_first_line(first_line)
    }

    /// Look up a theme by name.
    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.themes.get(name)
    }

    /// Build a highlighter for a resolved syntax and theme.
    pub fn highlighter<'a>(
        &'a self,
        syntax: &'a SyntaxReference,
        theme: &'a Theme,
    ) -> SyntectHighlighter<'a> {
        SyntectHighlighter {
            syntaxes: &self.syntaxes,
            syntax,
            theme,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Highlighter bound to one syntax and theme.
pub struct SyntectHighlighter<'a> {
    /// Syntax set the reference belongs to.
    syntaxes: &'a SyntaxSet,
    /// Resolved syntax for this run.
    syntax: &'a SyntaxReference,
    /// Theme supplying token colors.
    theme: &'a Theme,
}

impl Highlighter for SyntectHighlighter<'_> {
    fn language(&self) -> &str {
        &self.syntax.name
    }

    fn tokenize(&self, text: &str) -> Result<Vec<TokenLine>> {
        let mut highlighter = HighlightLines::new(self.syntax, self.theme);
        let mut lines = Vec::new();
        for (content, _) in logical_lines(text) {
            // The newline-aware syntax definitions expect terminated lines.
            let terminated = format!("{content}\n");
            let regions = highlighter
                .highlight_line(&terminated, self.syntaxes)
                .map_err(|error| Error::Highlight { source: error })?;

            let mut spans: TokenLine = Vec::new();
            for (style, piece) in regions {
                let piece = piece.trim_end_matches('\n');
                if piece.is_empty() {
                    continue;
                }
                spans.push(Span::styled(convert_style(style), piece));
            }
            lines.push(spans);
        }
        Ok(lines)
    }
}

/// Map a syntect style onto a span style.
fn convert_style(style: SyntectStyle) -> SpanStyle {
    let foreground = style.foreground;
    SpanStyle {
        paint: Paint::Rgb(foreground.r, foreground.g, foreground.b),
        bold: style.font_style.contains(FontStyle::BOLD),
        italic: style.font_style.contains(FontStyle::ITALIC),
        underline: style.font_style.contains(FontStyle::UNDERLINE),
    }
}
