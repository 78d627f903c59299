//! Color styling for the CLI's own output.
//!
//! Token colors come from the highlighting theme; this module only styles
//! colorcat's surrounding chrome (the detection banner and the help text).

use owo_colors::OwoColorize;

use crate::accents::accent_for;

/// Default 256-color foreground for help prose.
const HELP_TEXT_COLOR: u8 = 81;

/// Format the language-detection banner.
pub fn language_banner(name: &str) -> String {
    format!(
        "Language detected: {}{}{}",
        "[".yellow(),
        name.bold().cyan(),
        "]".yellow()
    )
}

/// Colorize the help text, accenting punctuation the way highlighted source
/// is accented.
pub fn colorize_help(help: &str) -> String {
    let mut output = String::new();
    let mut run = String::new();
    for ch in help.chars() {
        match accent_for(ch) {
            Some(index) => {
                flush_run(&mut output, &mut run);
                output.push_str(&format!("\x1b[38;5;{index}m{ch}\x1b[0m"));
            }
            None => run.push(ch),
        }
    }
    flush_run(&mut output, &mut run);
    output
}

/// Emit a pending run of prose in the help color.
fn flush_run(output: &mut String, run: &mut String) {
    if run.is_empty() {
        return;
    }
    output.push_str(&format!("\x1b[38;5;{HELP_TEXT_COLOR}m{run}\x1b[0m"));
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::{colorize_help, language_banner};

    #[test]
    fn banner_names_the_language() {
        let banner = language_banner("Rust");
        assert!(banner.contains("Rust"));
        assert!(banner.contains("Language detected"));
    }

    #[test]
    fn help_keeps_every_character() {
        let help = "Usage: colorcat [OPTIONS] [FILENAME]";
        let colorized = colorize_help(help);
        let stripped: String = strip_escapes(&colorized);
        assert_eq!(stripped, help);
    }

    /// Remove ANSI escape sequences for comparison.
    fn strip_escapes(text: &str) -> String {
        let mut output = String::new();
        let mut in_escape = false;
        for ch in text.chars() {
            if in_escape {
                if ch == 'm' {
                    in_escape = false;
                }
            } else if ch == '\x1b' {
                in_escape = true;
            } else {
                output.push(ch);
            }
        }
        output
    }
}
