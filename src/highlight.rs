//! The injected highlighting capability and its token types.
//!
//! The CLI never owns grammar knowledge: it hands text to a [`Highlighter`]
//! and gets styled spans back. The syntect-backed implementation lives in
//! [`crate::engine`]; [`PlainHighlighter`] is the detection-failure fallback.

use crate::error::Result;

/// Foreground paint for a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// 24-bit RGB foreground.
    Rgb(u8, u8, u8),
    /// 256-color palette index.
    Indexed(u8),
}

/// Style attached to a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanStyle {
    /// Foreground paint.
    pub paint: Paint,
    /// Bold rendering.
    pub bold: bool,
    /// Italic rendering.
    pub italic: bool,
    /// Underline rendering.
    pub underline: bool,
}

impl SpanStyle {
    /// Create a style with the given paint and no font attributes.
    pub fn paint(paint: Paint) -> Self {
        Self {
            paint,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

/// A styled run of text within one line. `style: None` renders as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Optional style; unstyled spans pass text through untouched.
    pub style: Option<SpanStyle>,
    /// The text of the run, never containing line endings.
    pub text: String,
}

impl Span {
    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            style: None,
            text: text.into(),
        }
    }

    /// Create a styled span.
    pub fn styled(style: SpanStyle, text: impl Into<String>) -> Self {
        Self {
            style: Some(style),
            text: text.into(),
        }
    }
}

/// One tokenized line, without its line ending.
pub type TokenLine = Vec<Span>;

/// The external highlighting capability: text in, styled token lines out.
///
/// Implementations must return exactly one [`TokenLine`] per logical line of
/// the input, in order, so the renderer can re-attach original line endings.
pub trait Highlighter {
    /// Human-readable name of the language being highlighted.
    fn language(&self) -> &str;

    /// Tokenize the whole input into styled lines.
    fn tokenize(&self, text: &str) -> Result<Vec<TokenLine>>;
}

/// Fallback highlighter emitting unstyled spans.
#[derive(Debug, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn language(&self) -> &str {
        "Plain Text"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<TokenLine>> {
        Ok(logical_lines(text)
            .into_iter()
            .map(|(content, _)| vec![Span::plain(content)])
            .collect())
    }
}

/// Split text into `(content, ending)` pairs, one per logical line.
///
/// Endings are preserved verbatim (`"\n"`, `"\r\n"`, or `""` for a final
/// unterminated line) so rendering can reproduce the input byte-for-byte.
pub fn logical_lines(text: &str) -> Vec<(&str, &str)> {
    text.split_inclusive('\n')
        .map(|line| {
            let content = line.trim_end_matches('\n');
            let content = content.strip_suffix('\r').unwrap_or(content);
            (content, &line[content.len()..])
        })
        .collect()
}
