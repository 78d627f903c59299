//! Punctuation accent pass.
//!
//! Brackets, quotes, and separators get fixed 256-color foregrounds layered
//! over the theme's token colors, so paired delimiters stand out in dense
//! files. Runs after tokenization, formatted mode only, and never changes
//! the text itself.

use crate::highlight::{Paint, Span, SpanStyle, TokenLine};

/// Accent color index for a character, if it carries one.
pub(crate) fn accent_for(ch: char) -> Option<u8> {
    let index = match ch {
        '{' | '}' => 1,
        '(' | ')' => 163,
        '[' | ']' => 202,
        '<' | '>' => 201,
        '\\' => 93,
        '\'' => 11,
        '"' => 51,
        '`' => 47,
        ',' => 112,
        ':' => 172,
        ';' => 79,
        '.' => 184,
        '!' => 155,
        '?' => 87,
        _ => return None,
    };
    Some(index)
}

/// Apply accents to every line of a token stream.
pub fn apply(lines: Vec<TokenLine>) -> Vec<TokenLine> {
    lines.into_iter().map(apply_line).collect()
}

/// Split spans so accented characters carry their own style.
fn apply_line(spans: TokenLine) -> TokenLine {
    let mut out = Vec::new();
    for span in spans {
        let mut run = String::new();
        for ch in span.text.chars() {
            match accent_for(ch) {
                Some(index) => {
                    if !run.is_empty() {
                        out.push(Span {
                            style: span.style,
                            text: std::mem::take(&mut run),
                        });
                    }
                    out.push(Span::styled(
                        SpanStyle::paint(Paint::Indexed(index)),
                        ch.to_string(),
                    ));
                }
                None => run.push(ch),
            }
        }
        if !run.is_empty() {
            out.push(Span {
                style: span.style,
                text: run,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::highlight::{Paint, Span};

    fn joined(spans: &[Span]) -> String {
        spans.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn preserves_line_text() {
        let line = vec![Span::plain("fn main() { println!(\"hi\"); }")];
        let accented = apply(vec![line]);
        assert_eq!(joined(&accented[0]), "fn main() { println!(\"hi\"); }");
    }

    #[test]
    fn colors_brackets() {
        let line = vec![Span::plain("a[0]")];
        let accented = apply(vec![line]);
        let bracket = accented[0]
            .iter()
            .find(|span| span.text == "[")
            .expect("bracket span expected");
        let style = bracket.style.expect("bracket style expected");
        assert_eq!(style.paint, Paint::Indexed(202));
    }

    #[test]
    fn leaves_plain_words_unstyled() {
        let line = vec![Span::plain("word")];
        let accented = apply(vec![line]);
        assert_eq!(accented[0].len(), 1);
        assert!(accented[0][0].style.is_none());
    }
}
