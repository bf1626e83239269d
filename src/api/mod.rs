//! HTTP client for OpenAI-compatible chat-completion APIs.
//!
//! - `completions`: one `/chat/completions` round trip
//! - `client`: provider-bound client and reply extraction

use crate::error::ProviderCallError;
use crate::types::Message;
use async_trait::async_trait;

mod client;
mod completions;

pub use client::ApiClient;

/// One-shot completion interface used by the chat session.
///
/// Tests provide deterministic stubs without network calls while the
/// production path uses [`ApiClient`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the full transcript and return the first choice's text.
    async fn complete(&self, transcript: &[Message]) -> Result<String, ProviderCallError>;
}
