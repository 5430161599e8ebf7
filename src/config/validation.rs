//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs, keys and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::AppConfig;
use crate::wallet::Pubkey;

/// Shared with argument validation; `field` is the dotted config path here.
pub use crate::action::ValidationError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn error(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError::new(field, message)
}

/// Check every semantic constraint and collect all violations.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.network.protocol_family.trim().is_empty() {
        errors.push(error("network.protocol_family", "must not be empty"));
    }
    if config.network.network_id.trim().is_empty() {
        errors.push(error("network.network_id", "must not be empty"));
    }
    if let Err(e) = url::Url::parse(&config.network.rpc_url) {
        errors.push(error("network.rpc_url", format!("invalid URL '{}': {}", config.network.rpc_url, e)));
    }
    for (i, failover) in config.network.failover_urls.iter().enumerate() {
        if let Err(e) = url::Url::parse(failover) {
            errors.push(error(
                &format!("network.failover_urls[{}]", i),
                format!("invalid URL '{}': {}", failover, e),
            ));
        }
    }
    if config.network.rpc_timeout_secs == 0 {
        errors.push(error("network.rpc_timeout_secs", "must be greater than 0"));
    }

    if let Some(key) = &config.wallet.public_key {
        if let Err(e) = key.parse::<Pubkey>() {
            errors.push(error("wallet.public_key", e.to_string()));
        }
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.to_lowercase().as_str()) {
        errors.push(error(
            "observability.log_level",
            format!(
                "unknown level '{}', expected one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if !config.providers.metaplex && !config.providers.pumpfun {
        errors.push(error("providers", "at least one provider must be enabled"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.network.rpc_url = "not a url".into();
        config.network.rpc_timeout_secs = 0;
        config.wallet.public_key = Some("short".into());
        config.observability.log_level = "loud".into();
        config.providers.metaplex = false;
        config.providers.pumpfun = false;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "network.rpc_url",
                "network.rpc_timeout_secs",
                "wallet.public_key",
                "observability.log_level",
                "providers"
            ]
        );
    }

    #[test]
    fn test_failover_index_in_field() {
        let mut config = AppConfig::default();
        config.network.failover_urls = vec!["https://ok.example".into(), "::bad".into()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "network.failover_urls[1]");
    }

    #[test]
    fn test_errors_share_the_argument_error_type() {
        let mut config = AppConfig::default();
        config.network.rpc_timeout_secs = 0;

        let errors: Vec<crate::action::ValidationError> = validate_config(&config).unwrap_err();
        assert_eq!(
            errors[0],
            crate::action::ValidationError::new("network.rpc_timeout_secs", "must be greater than 0")
        );
        assert_eq!(errors[0].to_string(), "network.rpc_timeout_secs: must be greater than 0");
    }
}
