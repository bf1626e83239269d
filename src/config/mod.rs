//! Configuration loading from TOML files and environment variables.
//!
//! Presentation and transport settings are loaded in this order of precedence
//! (highest wins):
//! 1. Environment variables (`NEBULA_API_TIMEOUT_SECS`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./nebula.toml in the current directory
//! 4. $XDG_CONFIG_HOME/nebula/nebula.toml (or ~/.config/nebula/nebula.toml)
//! 5. Built-in defaults
//!
//! Provider selection is environment-only and lives in [`provider`].

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod provider;
mod types;

use defaults::CONFIG_FILE_NAME;
pub use provider::{resolve_provider, resolve_provider_with, Provider, ProviderConfig};
pub use types::{ChatConfig, Config, DisplayConfig, NetworkConfig};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let text = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    if config.chat.system_prompt.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "chat.system_prompt must not be empty".to_string(),
        ));
    }
    Ok(config)
}

fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<String, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; implicit locations are best-effort.
    if let Some(p) = path_override {
        return Ok(read_file(Path::new(p))?);
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok(text);
    }
    if let Some(dir) = config_root() {
        let global = dir.join("nebula").join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok(text);
        }
    }

    Ok(String::new())
}

fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(timeout) = env_lookup("NEBULA_API_TIMEOUT_SECS") {
        let parsed = timeout.trim().parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid NEBULA_API_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.network.api_timeout_secs = parsed;
    }
    // Clamp to at least 1 second.
    config.network.api_timeout_secs = config.network.api_timeout_secs.max(1);
    Ok(())
}

/// Root directory for per-user configuration.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
