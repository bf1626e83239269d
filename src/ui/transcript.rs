//! Incremental transcript rendering.
//!
//! The view remembers how many messages it has already drawn and, on each
//! sync, renders only what was appended since. The system message is never
//! shown. A transcript shorter than what was drawn means it was reset.

use crate::conversation::Transcript;
use crate::types::Role;
use crate::ui::render::RenderSink;

/// Tracks which part of a transcript has reached the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptView {
    rendered: usize,
}

impl Default for TranscriptView {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptView {
    pub fn new() -> Self {
        // Index 0 is the system message.
        Self { rendered: 1 }
    }

    /// Render whatever changed since the previous sync.
    pub fn sync(&mut self, sink: &dyn RenderSink, transcript: &Transcript) {
        let messages = transcript.messages();
        if messages.len() < self.rendered {
            sink.section("conversation reset");
            self.rendered = 1;
        }
        for message in &messages[self.rendered..] {
            match message.role {
                Role::User => sink.user_turn(&message.content),
                Role::Assistant => sink.assistant_turn(&message.content),
                Role::System => {}
            }
        }
        self.rendered = messages.len();
    }
}
