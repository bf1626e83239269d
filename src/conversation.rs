//! Ordered, role-tagged conversation transcript.
//!
//! Index 0 always holds the system instruction. Everything after it is
//! append-only until an explicit [`Transcript::reset`]. There is no size cap
//! and no truncation: the full history goes to the provider on every turn.

use crate::types::{Message, Role};

/// Conversation history owned by one chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Start a transcript seeded with one system message.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Add a message at the end. Content is not validated.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop every user/assistant turn, keeping the original system message.
    pub fn reset(&mut self) {
        self.messages.truncate(1);
    }

    /// All messages in conversation order, system message first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages after the system instruction.
    pub fn turns(&self) -> &[Message] {
        &self.messages[1..]
    }

    /// The seed instruction.
    pub fn system_prompt(&self) -> &str {
        &self.messages[0].content
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the system message is never removed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True when nothing but the system message is present.
    pub fn is_fresh(&self) -> bool {
        self.messages.len() == 1
    }

    /// Most recent message with the given role, if any.
    pub fn last_of(&self, role: Role) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == role)
    }
}
