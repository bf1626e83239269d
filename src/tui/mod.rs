//! Terminal user-interface building blocks.
//!
//! Slash-command parsing, spinner, markdown layout and the turn renderer live
//! here so output styling stays out of session logic.

pub mod commands;
mod markdown;
pub mod progress;
pub mod renderer;
pub mod settings;

pub use commands::{
    parse_slash_command, unescape_leading_slash, SlashCommand, SlashCommandAction, SLASH_COMMANDS,
};
pub use renderer::Renderer;
