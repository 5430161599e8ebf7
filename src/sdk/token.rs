//! Token plugin of the SDK: pump.fun launches.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::sdk::SdkResult;

/// Metadata and liquidity settings of a pump.fun launch.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpFunLaunch {
    pub token_name: String,
    pub token_ticker: String,
    pub description: String,
    pub image_url: String,
    pub options: LaunchOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOptions {
    /// Initial buy in SOL.
    pub initial_liquidity_sol: f64,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub slippage_bps: u16,
    /// Priority fee in SOL.
    pub priority_fee: f64,
}

/// Result of a launch, passed through to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchedToken {
    pub mint: String,
    pub metadata_uri: String,
}

/// Token operations of an SDK instance.
#[async_trait]
pub trait TokenPlugin: Send + Sync {
    async fn launch_pump_fun_token(&self, launch: PumpFunLaunch) -> SdkResult<LaunchedToken>;
}
