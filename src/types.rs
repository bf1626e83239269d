//! Data model for the OpenAI Chat Completions API.
//!
//! These types serialize/deserialize directly to/from the JSON payloads
//! expected by any OpenAI-compatible endpoint (OpenAI, OpenRouter, etc.).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Message roles
// ---------------------------------------------------------------------------

/// Conversation participant role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction message.
    System,
    /// End-user message.
    User,
    /// Assistant/model message.
    Assistant,
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// A single message in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Author role for this conversation turn.
    pub role: Role,
    /// Text content.
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Chat completion request / response
// ---------------------------------------------------------------------------

/// Request body for POST /chat/completions.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    /// Model identifier used for request routing.
    pub model: &'a str,
    /// Full transcript, system message first.
    pub messages: &'a [Message],
}

/// Response body from POST /chat/completions.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Provider response id.
    #[serde(default)]
    pub id: Option<String>,
    /// Ranked response choices.
    pub choices: Vec<Choice>,
    /// Optional token usage metadata.
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// A single choice in the API response.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Assistant message payload for this choice.
    pub message: ChoiceMessage,
    /// Provider stop reason (`stop`, `length`, etc.).
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message payload inside a response choice.
///
/// Content is nullable on the wire (refusals, tool-call-only replies).
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage reported by the API.
///
/// Providers are inconsistent about which counters they send; missing ones
/// decode as zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl ChatResponse {
    /// Text of the first choice, if the provider sent any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_chat_request() {
        let messages = vec![Message::system("You are helpful."), Message::user("Hi")];
        let req = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Hi");
    }

    #[test]
    fn deserialize_chat_response() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "Hello!"
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 5,
                "total_tokens": 15
            }
        }"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.id.as_deref(), Some("chatcmpl-123"));
        assert_eq!(resp.first_content(), Some("Hello!"));
        assert_eq!(resp.usage.as_ref().unwrap().total_tokens, 15);
        assert_eq!(resp.choices[0].finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn partial_usage_does_not_reject_reply() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Overfitting is..."}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5}
        }"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_content(), Some("Overfitting is..."));
        let usage = resp.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.total_tokens, 0);

        let empty_usage: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "ok"}}], "usage": {}}"#,
        )
        .unwrap();
        assert_eq!(empty_usage.first_content(), Some("ok"));
    }

    #[test]
    fn first_content_uses_first_choice_only() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_content(), Some("first"));
    }

    #[test]
    fn null_content_and_empty_choices_yield_none() {
        let null_content: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
        )
        .unwrap();
        assert!(null_content.first_content().is_none());

        let empty: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(empty.first_content().is_none());
    }

    #[test]
    fn message_constructors() {
        assert_eq!(Message::system("s").role, Role::System);
        assert_eq!(Message::user("u").role, Role::User);
        let reply = Message::assistant("a");
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "a");
    }
}
