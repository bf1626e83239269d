//! Rendering contract and default terminal renderer binding.
//!
//! `RenderSink` is the UI contract consumed by the REPL and transcript view.
//! `Renderer` is the terminal implementation; tests substitute a recording
//! sink without touching stdout/stderr.

pub use crate::tui::progress::ProgressHandle;
pub use crate::tui::renderer::Renderer;

/// Injectable rendering interface used by presentation code.
pub trait RenderSink: Send + Sync {
    /// Render the interactive prompt chrome.
    fn prompt(&self);
    /// Render the startup header.
    fn header(&self, provider: Option<&str>, model: &str);
    /// Render one user turn.
    fn user_turn(&self, content: &str);
    /// Render one assistant turn.
    fn assistant_turn(&self, content: &str);
    /// Start a progress indicator for the pending reply.
    fn progress(&self, label: &str) -> ProgressHandle;
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
    /// Render a titled section line.
    fn section(&self, title: &str);
    /// Render secondary detail text.
    fn detail(&self, text: &str);
}

impl RenderSink for Renderer {
    fn prompt(&self) {
        self.prompt();
    }

    fn header(&self, provider: Option<&str>, model: &str) {
        self.header(provider, model);
    }

    fn user_turn(&self, content: &str) {
        self.user_turn(content);
    }

    fn assistant_turn(&self, content: &str) {
        self.assistant_turn(content);
    }

    fn progress(&self, label: &str) -> ProgressHandle {
        self.progress(label)
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }

    fn section(&self, title: &str) {
        self.section(title);
    }

    fn detail(&self, text: &str) {
        self.detail(text);
    }
}

/// Global progress toggle helper decoupled from concrete `Renderer` type.
pub fn set_progress_enabled(enabled: bool) {
    crate::tui::progress::set_progress_enabled(enabled);
}
