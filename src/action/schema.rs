//! Argument schemas and structural validation.
//!
//! Arguments arrive as JSON. `parse_args` decodes them with serde (unknown
//! keys ignored, defaults filled in) and then runs the type's `Validate`
//! checks, so a handler only ever sees a well-formed value.

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::fmt;

use crate::action::ActionError;
use crate::wallet::Pubkey;

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Semantic checks run after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Arguments of one action: decodable, checkable and self-describing.
pub trait ActionArgs: DeserializeOwned + Validate {
    /// JSON Schema of the accepted object.
    fn schema() -> Value;
}

/// Decode and validate the arguments of `action`.
pub fn parse_args<T: ActionArgs>(action: &str, args: Value) -> Result<T, ActionError> {
    // A missing argument object is treated as empty.
    let args = if args.is_null() { Value::Object(Map::new()) } else { args };

    let parsed: T = serde_json::from_value(args).map_err(|e| ActionError::InvalidArguments {
        action: action.to_string(),
        reason: e.to_string(),
    })?;

    parsed.validate().map_err(|e| ActionError::InvalidArguments {
        action: action.to_string(),
        reason: e.to_string(),
    })?;

    Ok(parsed)
}

pub fn min_len(field: &str, value: &str, min: usize, message: &str) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("must contain at most {} character(s)", max),
        ));
    }
    Ok(())
}

/// Absolute URL check.
pub fn url(field: &str, value: &str, message: &str) -> Result<(), ValidationError> {
    match ::url::Url::parse(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new(field, message)),
    }
}

pub fn range<T>(field: &str, value: T, min: T, max: T) -> Result<(), ValidationError>
where
    T: PartialOrd + fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn at_least<T>(field: &str, value: T, min: T) -> Result<(), ValidationError>
where
    T: PartialOrd + fmt::Display + Copy,
{
    if value < min {
        return Err(ValidationError::new(
            field,
            format!("must be greater than or equal to {}", min),
        ));
    }
    Ok(())
}

/// Serde adapters for integer arguments.
///
/// Agents send JSON numbers, so `9` and `9.0` must both decode. Fractions,
/// negatives and values outside the target type are rejected.
pub mod whole {
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;
    use serde_json::Number;

    fn convert<T, E>(number: Number) -> Result<T, E>
    where
        T: TryFrom<u64>,
        E: Error,
    {
        let value = match number.as_u64() {
            Some(value) => value,
            None => match number.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 => f as u64,
                _ => {
                    return Err(E::custom(format!(
                        "invalid value: {}, expected a whole non-negative number",
                        number
                    )))
                }
            },
        };
        T::try_from(value).map_err(|_| E::custom(format!("invalid value: {}, out of range", number)))
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64>,
    {
        convert(Number::deserialize(deserializer)?)
    }

    /// For `Option` fields; pair with `#[serde(default)]`.
    pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64>,
    {
        Option::<Number>::deserialize(deserializer)?
            .map(convert)
            .transpose()
    }
}

/// Base58 Solana address check; returns the decoded key.
pub fn pubkey(field: &str, value: &str) -> Result<Pubkey, ValidationError> {
    value
        .parse()
        .map_err(|e: crate::wallet::WalletError| ValidationError::new(field, e.to_string()))
}

/// Object schema from `(name, schema)` pairs plus the required names.
pub fn object_schema(description: &str, properties: &[(&str, Value)], required: &[&str]) -> Value {
    let properties: Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();

    json!({
        "type": "object",
        "description": description,
        "properties": properties,
        "required": required,
    })
}

pub fn string_prop(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

pub fn url_prop(description: &str) -> Value {
    json!({ "type": "string", "format": "uri", "description": description })
}

pub fn integer_prop(description: &str) -> Value {
    json!({ "type": "integer", "description": description })
}

pub fn bool_prop(description: &str) -> Value {
    json!({ "type": "boolean", "description": description })
}

pub fn enum_prop(description: &str, values: &[&str]) -> Value {
    json!({ "type": "string", "enum": values, "description": description })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        name: String,
        #[serde(default = "default_count")]
        count: u32,
    }

    fn default_count() -> u32 {
        3
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), ValidationError> {
            min_len("name", &self.name, 1, "Name is required")?;
            range("count", self.count, 1, 10)
        }
    }

    impl ActionArgs for Sample {
        fn schema() -> Value {
            object_schema("sample", &[("name", string_prop("n"))], &["name"])
        }
    }

    #[test]
    fn test_parse_applies_defaults_and_ignores_unknown_keys() {
        let sample: Sample = parse_args("sample", json!({ "name": "x", "extra": true })).unwrap();
        assert_eq!(sample.name, "x");
        assert_eq!(sample.count, 3);
    }

    #[test]
    fn test_parse_reports_missing_field() {
        let err = parse_args::<Sample>("sample", Value::Null).unwrap_err();
        assert!(matches!(err, ActionError::InvalidArguments { ref action, .. } if action == "sample"));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_parse_runs_validation() {
        let err = parse_args::<Sample>("sample", json!({ "name": "" })).unwrap_err();
        assert!(err.to_string().contains("Name is required"));

        let err = parse_args::<Sample>("sample", json!({ "name": "x", "count": 11 })).unwrap_err();
        assert!(err.to_string().contains("between 1 and 10"));
    }

    #[test]
    fn test_url_check() {
        assert!(url("uri", "https://example.com/metadata.json", "bad").is_ok());
        assert!(url("uri", "not a url", "URI must be a valid URL").is_err());
        assert!(url("uri", "example.com/relative", "bad").is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(max_len("ticker", "ÀÉÎÕÜ", 5).is_ok());
        assert!(max_len("ticker", "ABCDEF", 5).is_err());
    }

    #[test]
    fn test_pubkey_check() {
        assert!(pubkey("owner", "11111111111111111111111111111111").is_ok());
        let err = pubkey("owner", "abc").unwrap_err();
        assert_eq!(err.field, "owner");
    }

    #[test]
    fn test_object_schema_shape() {
        let schema = Sample::schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(schema["required"], json!(["name"]));
    }

    #[derive(Debug, Deserialize)]
    struct Counts {
        #[serde(deserialize_with = "whole::deserialize")]
        small: u8,
        #[serde(default, deserialize_with = "whole::option")]
        large: Option<u64>,
    }

    fn counts(value: Value) -> Result<Counts, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_whole_accepts_integers_and_whole_floats() {
        let parsed = counts(json!({ "small": 9.0, "large": 1e9 })).unwrap();
        assert_eq!(parsed.small, 9);
        assert_eq!(parsed.large, Some(1_000_000_000));

        let parsed = counts(json!({ "small": 255 })).unwrap();
        assert_eq!(parsed.small, 255);
        assert_eq!(parsed.large, None);

        let parsed = counts(json!({ "small": 1, "large": null })).unwrap();
        assert_eq!(parsed.large, None);
    }

    #[test]
    fn test_whole_rejects_fractions_negatives_and_overflow() {
        let err = counts(json!({ "small": 2.5 })).unwrap_err();
        assert!(err.to_string().contains("expected a whole non-negative number"));

        assert!(counts(json!({ "small": -1 })).is_err());
        assert!(counts(json!({ "small": -1.0 })).is_err());

        let err = counts(json!({ "small": 256 })).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
