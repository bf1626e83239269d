//! Unified error types for configuration, provider calls, and sessions.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ProviderCallError
// ---------------------------------------------------------------------------

/// Any failure of one completion call.
///
/// Transport errors, auth rejections, rate limits, 5xx responses and
/// malformed payloads all collapse into this one type. Only the message is
/// meant for display; callers never branch on the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCallError {
    message: String,
}

impl ProviderCallError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Non-2xx response from the provider.
    pub fn status(code: u16, body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            Self::new(format!("provider returned status {code}"))
        } else {
            Self::new(format!("provider returned status {code}: {body}"))
        }
    }

    /// Human-readable description passed through to the presentation layer.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProviderCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ProviderCallError {}

impl From<reqwest::Error> for ProviderCallError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::new(format!("request timed out: {e}"))
        } else if e.is_decode() {
            Self::new(format!("malformed provider response: {e}"))
        } else {
            Self::new(format!("http: {e}"))
        }
    }
}

// ---------------------------------------------------------------------------
// SessionBusy
// ---------------------------------------------------------------------------

/// A submit arrived while the previous turn was still awaiting its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBusy;

impl fmt::Display for SessionBusy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a reply is still pending; wait for it before sending another message")
    }
}

impl std::error::Error for SessionBusy {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn config_error_invalid_message() {
        let e = ConfigError::Invalid("timeout must be numeric".into());
        assert_eq!(e.to_string(), "invalid config: timeout must be numeric");
    }

    #[test]
    fn provider_error_status_includes_code_and_body() {
        let e = ProviderCallError::status(401, " {\"error\":\"invalid api key\"}\n");
        assert_eq!(
            e.to_string(),
            "provider returned status 401: {\"error\":\"invalid api key\"}"
        );
    }

    #[test]
    fn provider_error_status_without_body() {
        let e = ProviderCallError::status(503, "");
        assert_eq!(e.message(), "provider returned status 503");
    }

    #[test]
    fn session_busy_display() {
        assert!(SessionBusy.to_string().contains("still pending"));
    }
}
