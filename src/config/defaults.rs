//! Default configuration constants.
//!
//! Callers share these constants instead of duplicating literals.

/// Provider selected when `PROVIDER` is unset or unrecognized.
pub(super) const DEFAULT_PROVIDER: &str = "openai";
/// OpenAI API base URL. Not overridable from the environment.
pub(super) const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// OpenRouter API base URL used when `OPENROUTER_BASE_URL` is unset.
pub(super) const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Model identifier requested from either provider.
pub(super) const DEFAULT_MODEL_ID: &str = "gpt-3.5-turbo";
/// Default timeout for model API requests.
pub(super) const DEFAULT_API_TIMEOUT_SECS: u64 = 120;
/// Seed instruction placed at index 0 of every transcript.
pub(super) const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an AI assistant that answers questions about AI technology and machine learning in simple language.";
/// Config file name searched locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "nebula.toml";
