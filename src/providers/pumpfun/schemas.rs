//! Argument type of `launch_pumpfun_token`.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::action::schema::{
    at_least, max_len, min_len, object_schema, range, string_prop, url, url_prop, whole,
};
use crate::action::{ActionArgs, Validate, ValidationError};
use crate::sdk::token::{LaunchOptions, PumpFunLaunch};

pub const DEFAULT_INITIAL_LIQUIDITY_SOL: f64 = 0.0001;
pub const DEFAULT_SLIPPAGE_BPS: u16 = 5;
pub const DEFAULT_PRIORITY_FEE: f64 = 0.00005;

const MIN_PRIORITY_FEE: f64 = 0.00001;

fn default_initial_liquidity() -> f64 {
    DEFAULT_INITIAL_LIQUIDITY_SOL
}

fn default_slippage_bps() -> u16 {
    DEFAULT_SLIPPAGE_BPS
}

fn default_priority_fee() -> f64 {
    DEFAULT_PRIORITY_FEE
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchTokenArgs {
    pub token_name: String,
    pub token_ticker: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "initialLiquiditySOL", default = "default_initial_liquidity")]
    pub initial_liquidity_sol: f64,
    #[serde(default = "default_slippage_bps", deserialize_with = "whole::deserialize")]
    pub slippage_bps: u16,
    #[serde(default = "default_priority_fee")]
    pub priority_fee: f64,
}

impl Validate for LaunchTokenArgs {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("tokenName", &self.token_name, 1, "must contain at least 1 character(s)")?;
        max_len("tokenName", &self.token_name, 32)?;
        min_len("tokenTicker", &self.token_ticker, 2, "must contain at least 2 character(s)")?;
        max_len("tokenTicker", &self.token_ticker, 10)?;
        min_len("description", &self.description, 1, "must contain at least 1 character(s)")?;
        max_len("description", &self.description, 1000)?;
        url("imageUrl", &self.image_url, "Invalid url")?;
        if let Some(website) = &self.website {
            url("website", website, "Invalid url")?;
        }
        at_least("initialLiquiditySOL", self.initial_liquidity_sol, DEFAULT_INITIAL_LIQUIDITY_SOL)?;
        range("slippageBps", self.slippage_bps, 1, 1000)?;
        at_least("priorityFee", self.priority_fee, MIN_PRIORITY_FEE)
    }
}

impl ActionArgs for LaunchTokenArgs {
    fn schema() -> Value {
        object_schema(
            "Launch a token on pump.fun",
            &[
                (
                    "tokenName",
                    json!({ "type": "string", "minLength": 1, "maxLength": 32, "description": "Name of the token" }),
                ),
                (
                    "tokenTicker",
                    json!({ "type": "string", "minLength": 2, "maxLength": 10, "description": "Ticker symbol of the token" }),
                ),
                (
                    "description",
                    json!({ "type": "string", "minLength": 1, "maxLength": 1000, "description": "Description of the token" }),
                ),
                ("imageUrl", url_prop("URL of the token image")),
                ("twitter", string_prop("Twitter handle (optional)")),
                ("telegram", string_prop("Telegram group link (optional)")),
                ("website", url_prop("Website URL (optional)")),
                (
                    "initialLiquiditySOL",
                    json!({
                        "type": "number",
                        "minimum": DEFAULT_INITIAL_LIQUIDITY_SOL,
                        "default": DEFAULT_INITIAL_LIQUIDITY_SOL,
                        "description": "Initial liquidity in SOL",
                    }),
                ),
                (
                    "slippageBps",
                    json!({
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 1000,
                        "default": DEFAULT_SLIPPAGE_BPS,
                        "description": "Slippage tolerance in basis points",
                    }),
                ),
                (
                    "priorityFee",
                    json!({
                        "type": "number",
                        "minimum": MIN_PRIORITY_FEE,
                        "default": DEFAULT_PRIORITY_FEE,
                        "description": "Priority fee in SOL",
                    }),
                ),
            ],
            &["tokenName", "tokenTicker", "description", "imageUrl"],
        )
    }
}

impl From<LaunchTokenArgs> for PumpFunLaunch {
    fn from(args: LaunchTokenArgs) -> Self {
        PumpFunLaunch {
            token_name: args.token_name,
            token_ticker: args.token_ticker,
            description: args.description,
            image_url: args.image_url,
            options: LaunchOptions {
                initial_liquidity_sol: args.initial_liquidity_sol,
                website: args.website,
                twitter: args.twitter,
                telegram: args.telegram,
                slippage_bps: args.slippage_bps,
                priority_fee: args.priority_fee,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::parse_args;

    fn minimal() -> Value {
        json!({
            "tokenName": "Test Token",
            "tokenTicker": "TEST",
            "description": "A test token",
            "imageUrl": "https://example.com/image.png"
        })
    }

    #[test]
    fn test_defaults_are_applied() {
        let args: LaunchTokenArgs = parse_args("launch_pumpfun_token", minimal()).unwrap();
        assert_eq!(args.initial_liquidity_sol, 0.0001);
        assert_eq!(args.slippage_bps, 5);
        assert_eq!(args.priority_fee, 0.00005);
        assert_eq!(args.website, None);
    }

    #[test]
    fn test_length_limits() {
        let mut args = minimal();
        args["tokenTicker"] = json!("T");
        let err = parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args).unwrap_err();
        assert!(err.to_string().contains("tokenTicker"));

        let mut args = minimal();
        args["tokenName"] = json!("x".repeat(33));
        let err = parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args).unwrap_err();
        assert!(err.to_string().contains("at most 32"));

        let mut args = minimal();
        args["description"] = json!("d".repeat(1000));
        assert!(parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args).is_ok());
    }

    #[test]
    fn test_urls_are_checked() {
        let mut args = minimal();
        args["imageUrl"] = json!("image.png");
        assert!(parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args).is_err());

        let mut args = minimal();
        args["website"] = json!("not a site");
        let err = parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args).unwrap_err();
        assert!(err.to_string().contains("website"));

        // Social handles are free-form.
        let mut args = minimal();
        args["twitter"] = json!("@test");
        assert!(parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args).is_ok());
    }

    #[test]
    fn test_numeric_bounds() {
        for (field, value) in [
            ("initialLiquiditySOL", json!(0.00001)),
            ("slippageBps", json!(0)),
            ("slippageBps", json!(1001)),
            ("priorityFee", json!(0.000001)),
        ] {
            let mut args = minimal();
            args[field] = value;
            let err = parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args).unwrap_err();
            assert!(err.to_string().contains(field), "{}", field);
        }
    }

    #[test]
    fn test_into_launch() {
        let mut args = minimal();
        args["website"] = json!("https://example.com");
        args["slippageBps"] = json!(50);
        let launch: PumpFunLaunch = parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args)
            .unwrap()
            .into();

        assert_eq!(launch.token_ticker, "TEST");
        assert_eq!(launch.options.slippage_bps, 50);
        assert_eq!(launch.options.website.as_deref(), Some("https://example.com"));
        assert_eq!(launch.options.priority_fee, DEFAULT_PRIORITY_FEE);
    }

    #[test]
    fn test_slippage_must_be_whole() {
        let mut args = minimal();
        args["slippageBps"] = json!(50.0);
        let parsed = parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args).unwrap();
        assert_eq!(parsed.slippage_bps, 50);

        let mut args = minimal();
        args["slippageBps"] = json!(2.5);
        let err = parse_args::<LaunchTokenArgs>("launch_pumpfun_token", args).unwrap_err();
        assert!(err.to_string().contains("expected a whole non-negative number"));

        assert_eq!(LaunchTokenArgs::schema()["properties"]["slippageBps"]["type"], "integer");
    }
}
