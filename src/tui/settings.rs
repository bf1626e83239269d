//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, labels, glyphs, colors,
//! indentation, and spinner behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_SYMBOL: &str = ">";
pub const PROMPT_PLAIN: &str = "> ";

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const LABEL_APP: &str = "nebula";
pub const LABEL_USER: &str = "you";
pub const LABEL_ASSISTANT: &str = "assistant";
pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const LABEL_PROGRESS: &str = "processing reply";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_TURN_BAR: &str = "▌";
pub const GLYPH_TURN_BAR_PLAIN: &str = "|";

// ---------------------------------------------------------------------------
// Spinner / progress
// ---------------------------------------------------------------------------

pub const PROGRESS_CLEAR_LINE: &str = "\r\x1b[2K";
pub const PROGRESS_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const PROGRESS_TICK_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_APP_LABEL: Color = Color::Cyan;
pub const COLOR_PROVIDER_NAME: Color = Color::Magenta;
pub const COLOR_MODEL_NAME: Color = Color::DarkGrey;
pub const COLOR_PROMPT_SYMBOL: Color = Color::Cyan;

// Turn accents: teal for user cards, pale blue for assistant cards.
pub const COLOR_USER_ACCENT: Color = Color::Rgb {
    r: 91,
    g: 192,
    b: 190,
};
pub const COLOR_ASSISTANT_ACCENT: Color = Color::Rgb {
    r: 158,
    g: 234,
    b: 249,
};
pub const COLOR_TURN_TEXT: Color = Color::Rgb {
    r: 240,
    g: 248,
    b: 255,
};

pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_DETAIL_TEXT: Color = Color::DarkGrey;

pub const COLOR_PROGRESS_FRAME: Color = Color::Cyan;
pub const COLOR_PROGRESS_LABEL: Color = Color::DarkGrey;
pub const COLOR_PROGRESS_ELAPSED: Color = Color::DarkGrey;
