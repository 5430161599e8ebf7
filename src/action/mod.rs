//! Action framework: definitions, outputs, errors, providers and the registry.
//!
//! # Data Flow
//! ```text
//! ActionRegistry::invoke("<provider>_<action>", json args)
//!     → provider.supports_network(wallet network)?
//!     → ActionProvider::invoke  → schema::parse_args (decode + validate)
//!     → typed handler           → sdk factory / plugin call
//!     → ActionOutput (text or JSON) | ActionError
//! ```

pub mod provider;
pub mod registry;
pub mod schema;

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::sdk::SdkError;

pub use provider::ActionProvider;
pub use registry::ActionRegistry;
pub use schema::{parse_args, ActionArgs, Validate, ValidationError};

/// Name, description and argument schema of one action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionDefinition {
    pub name: String,
    pub description: String,
    pub schema: Value,
}

/// Result of an action call.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutput {
    /// Human-readable message.
    Text(String),
    /// Structured passthrough of the SDK response.
    Json(Value),
}

impl ActionOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ActionOutput::Text(text) => Some(text),
            ActionOutput::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ActionOutput::Text(_) => None,
            ActionOutput::Json(value) => Some(value),
        }
    }
}

impl fmt::Display for ActionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutput::Text(text) => f.write_str(text),
            ActionOutput::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
        }
    }
}

/// Errors returned from action dispatch.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid arguments for {action}: {reason}")]
    InvalidArguments { action: String, reason: String },

    #[error("Provider {provider} does not support network {network}")]
    UnsupportedNetwork { provider: String, network: String },

    /// SDK failure surfaced as an error rather than a message.
    #[error("Error {operation}: {source}")]
    Sdk {
        operation: &'static str,
        #[source]
        source: SdkError,
    },
}

/// `"Error <operation>: <message>"`, the message form of a failed call.
pub fn format_failure(operation: &str, err: impl fmt::Display) -> String {
    format!("Error {}: {}", operation, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_display() {
        assert_eq!(ActionOutput::Text("done".into()).to_string(), "done");

        let json = ActionOutput::Json(json!({ "mint": "abc" }));
        assert_eq!(json.to_string(), "{\n  \"mint\": \"abc\"\n}");
        assert_eq!(json.as_json().unwrap()["mint"], "abc");
        assert!(json.as_text().is_none());
    }

    #[test]
    fn test_failure_format() {
        assert_eq!(
            format_failure("deploying token", "boom"),
            "Error deploying token: boom"
        );
    }

    #[test]
    fn test_sdk_error_is_prefixed() {
        let err = ActionError::Sdk {
            operation: "launching pump.fun token",
            source: SdkError::Transport("Failed to launch token".into()),
        };
        assert_eq!(
            err.to_string(),
            "Error launching pump.fun token: Transport error: Failed to launch token"
        );
    }
}
