//! Terminal output renderer for conversation turns and status messages.
//!
//! Assistant replies go to stdout so one-shot output can be piped; all other
//! chrome (headers, user echo, warnings, errors) goes to stderr.

use crate::tui::markdown::render_markdown_for_terminal;
use crate::tui::progress::{start_progress, ProgressHandle};
use crate::tui::settings;
use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print the user input prompt indicator (to stderr).
    pub fn prompt(&self) {
        if self.color {
            eprint!(
                "{} ",
                settings::PROMPT_SYMBOL
                    .with(settings::COLOR_PROMPT_SYMBOL)
                    .bold()
            );
        } else {
            eprint!("{}", settings::PROMPT_PLAIN);
        }
        let _ = io::stderr().flush();
    }

    /// Print the startup header with provider and model.
    pub fn header(&self, provider: Option<&str>, model: &str) {
        if self.color {
            let provider = provider
                .map(|name| format!(" {}", name.with(settings::COLOR_PROVIDER_NAME).bold()))
                .unwrap_or_default();
            eprintln!(
                "{}{} {}",
                settings::LABEL_APP
                    .with(settings::COLOR_APP_LABEL)
                    .bold(),
                provider,
                model.with(settings::COLOR_MODEL_NAME),
            );
        } else {
            match provider {
                Some(name) => eprintln!("{} {name} ({model})", settings::LABEL_APP),
                None => eprintln!("{} ({model})", settings::LABEL_APP),
            }
        }
    }

    /// Echo one user turn as a labeled card (stderr).
    pub fn user_turn(&self, content: &str) {
        eprintln!(
            "{}",
            format_turn(
                settings::LABEL_USER,
                settings::COLOR_USER_ACCENT,
                content,
                self.color
            )
        );
    }

    /// Print one assistant reply as a labeled markdown card (stdout).
    pub fn assistant_turn(&self, content: &str) {
        let rendered = render_markdown_for_terminal(content);
        println!(
            "{}",
            format_turn(
                settings::LABEL_ASSISTANT,
                settings::COLOR_ASSISTANT_ACCENT,
                &rendered,
                self.color
            )
        );
        let _ = io::stdout().flush();
    }

    /// Start the "awaiting reply" spinner.
    pub fn progress(&self, label: &str) -> ProgressHandle {
        start_progress(label, self.color)
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_WARNING
                    .with(settings::COLOR_WARNING)
                    .bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_WARNING);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_ERROR);
        }
    }

    /// Render a titled section line.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "\r{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                title.with(settings::COLOR_SECTION_TITLE).bold()
            );
        } else {
            eprintln!("\r{title}:");
        }
    }

    /// Render indented secondary text.
    pub fn detail(&self, text: &str) {
        if self.color {
            eprintln!(
                "{}{}",
                settings::INDENT_1,
                text.with(settings::COLOR_DETAIL_TEXT)
            );
        } else {
            eprintln!("{}{text}", settings::INDENT_1);
        }
    }
}

/// Lay out a turn as a label line followed by bar-prefixed content lines.
fn format_turn(label: &str, accent: Color, content: &str, color: bool) -> String {
    let mut out = String::new();
    if color {
        let bar = settings::GLYPH_TURN_BAR.with(accent);
        out.push_str(&format!("{bar} {}", label.with(accent).bold()));
        for line in content.lines() {
            out.push_str(&format!("\n{bar} {}", line.with(settings::COLOR_TURN_TEXT)));
        }
    } else {
        let bar = settings::GLYPH_TURN_BAR_PLAIN;
        out.push_str(&format!("{bar} {label}:"));
        for line in content.lines() {
            out.push_str(&format!("\n{bar} {line}"));
        }
    }
    // Empty content still gets one body row so the card is visible.
    if content.lines().next().is_none() {
        let bar = if color {
            settings::GLYPH_TURN_BAR.with(accent).to_string()
        } else {
            settings::GLYPH_TURN_BAR_PLAIN.to_string()
        };
        out.push('\n');
        out.push_str(&bar);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_turn_prefixes_every_line() {
        let out = format_turn("you", Color::Cyan, "line one\nline two", false);
        assert_eq!(out, "| you:\n| line one\n| line two");
    }

    #[test]
    fn plain_turn_with_empty_content_keeps_body_row() {
        let out = format_turn("you", Color::Cyan, "", false);
        assert_eq!(out, "| you:\n|");
    }

    #[test]
    fn colored_turn_contains_label_and_text() {
        let out = format_turn("assistant", Color::Blue, "hello", true);
        assert!(out.contains("assistant"));
        assert!(out.contains("hello"));
        assert!(out.contains(settings::GLYPH_TURN_BAR));
        assert!(out.contains('\u{1b}'), "expected ANSI styling: {out:?}");
    }
}
