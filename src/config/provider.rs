//! Provider selection from process environment.
//!
//! Resolution is a pure function of the environment lookup and happens once
//! per session. Credentials are not validated here; a missing key surfaces as
//! a failed completion call on the first request.

use std::fmt;

use super::defaults::{
    DEFAULT_MODEL_ID, DEFAULT_OPENROUTER_BASE_URL, DEFAULT_PROVIDER, OPENAI_BASE_URL,
};

/// Hosted completion service selected by `PROVIDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    OpenRouter,
}

impl Provider {
    /// Parse a `PROVIDER` value. Anything other than `openrouter` is OpenAI.
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("openrouter") {
            Self::OpenRouter
        } else {
            Self::OpenAi
        }
    }

    /// Label shown in the startup header.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::OpenRouter => "OpenRouter",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Resolved endpoint, credential and model for one session.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub provider: Provider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

// Hand-written so the credential never lands in logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_key", &key)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Resolve provider settings from the process environment.
pub fn resolve_provider() -> ProviderConfig {
    resolve_provider_with(|name| std::env::var(name).ok())
}

/// Resolve provider settings from an injectable environment lookup.
pub fn resolve_provider_with<FEnv>(env_lookup: FEnv) -> ProviderConfig
where
    FEnv: Fn(&str) -> Option<String>,
{
    let selector = env_lookup("PROVIDER").unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
    let provider = Provider::from_env_value(&selector);

    match provider {
        Provider::OpenRouter => ProviderConfig {
            provider,
            api_key: env_lookup("OPENROUTER_API_KEY").unwrap_or_default(),
            base_url: env_lookup("OPENROUTER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_BASE_URL.to_string()),
            model: DEFAULT_MODEL_ID.to_string(),
        },
        Provider::OpenAi => ProviderConfig {
            provider,
            api_key: env_lookup("OPENAI_API_KEY").unwrap_or_default(),
            base_url: OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL_ID.to_string(),
        },
    }
}
