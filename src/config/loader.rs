//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides `network.rpc_url`.
pub const RPC_URL_ENV_VAR: &str = "SVM_ACTIONS_RPC_URL";
/// Overrides `wallet.public_key`.
pub const PUBLIC_KEY_ENV_VAR: &str = "SVM_ACTIONS_PUBLIC_KEY";
/// Overrides `observability.log_level`.
pub const LOG_LEVEL_ENV_VAR: &str = "SVM_ACTIONS_LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, override from the environment, and validate a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    finalize(config)
}

/// Defaults plus environment overrides, validated.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    finalize(AppConfig::default())
}

fn finalize(mut config: AppConfig) -> Result<AppConfig, ConfigError> {
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        network = %config.network.network(),
        rpc_url = %config.network.rpc_url,
        "Configuration loaded"
    );

    Ok(config)
}

/// Apply overrides from a variable lookup; empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(rpc_url) = lookup(RPC_URL_ENV_VAR) {
        config.network.rpc_url = rpc_url;
    }
    if let Some(public_key) = lookup(PUBLIC_KEY_ENV_VAR) {
        config.wallet.public_key = Some(public_key);
    }
    if let Some(level) = lookup(LOG_LEVEL_ENV_VAR) {
        config.observability.log_level = level;
    }
}
