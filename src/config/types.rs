//! Configuration data model.
//!
//! Struct definitions plus default values. Loading and precedence live in
//! `config::mod`; provider selection lives in `config::provider`.

use serde::Deserialize;

use super::defaults::{DEFAULT_API_TIMEOUT_SECS, DEFAULT_SYSTEM_PROMPT};

/// Top-level runtime configuration for presentation and transport.
///
/// Provider credentials are not part of this struct; see
/// [`ProviderConfig`](super::ProviderConfig).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chat: ChatConfig,
    pub display: DisplayConfig,
    pub network: NetworkConfig,
}

/// Conversation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Instruction seeded at index 0 of every transcript.
    pub system_prompt: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    /// Print the active provider in the startup header.
    pub show_provider: bool,
    /// Show the spinner while a reply is pending.
    pub show_progress: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_provider: true,
            show_progress: true,
        }
    }
}

/// Network/HTTP timeout policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Timeout for one completion request.
    pub api_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}
