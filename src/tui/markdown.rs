//! Markdown-to-terminal rendering for assistant replies.
//!
//! `termimad` lays out lists, headings, code fences and tables for the
//! terminal. The output carries no ANSI styling; the turn renderer owns colors.

use termimad::MadSkin;

/// Render markdown into plain terminal text with structure preserved.
pub fn render_markdown_for_terminal(input: &str) -> String {
    let skin = MadSkin::no_style();
    let formatted = skin.text(input, None).to_string();
    formatted.trim_end_matches('\n').to_string()
}
