//! pump.fun action provider.

pub mod schemas;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::action::{parse_args, ActionArgs, ActionDefinition, ActionError, ActionOutput, ActionProvider};
use crate::network::{Network, SOLANA_MAINNET, SVM_PROTOCOL_FAMILY};
use crate::sdk::token::LaunchedToken;
use crate::sdk::{KitOptions, KitSigner, TokenPluginFactory};
use crate::wallet::SvmWalletProvider;

pub use schemas::LaunchTokenArgs;

pub const PROVIDER_NAME: &str = "pumpfun";
pub const LAUNCH_PUMPFUN_TOKEN: &str = "launch_pumpfun_token";

/// Launches tokens on pump.fun through the SDK's token plugin.
///
/// Unlike the Metaplex provider, a failed launch is returned as
/// [`ActionError::Sdk`] rather than as a message.
pub struct PumpfunActionProvider<K> {
    kit: K,
}

impl<K: TokenPluginFactory> PumpfunActionProvider<K> {
    pub fn new(kit: K) -> Self {
        Self { kit }
    }

    pub async fn launch_pumpfun_token(
        &self,
        wallet: Arc<dyn SvmWalletProvider>,
        args: LaunchTokenArgs,
    ) -> Result<LaunchedToken, ActionError> {
        let sdk_error = |source| ActionError::Sdk {
            operation: "launching pump.fun token",
            source,
        };

        let rpc_endpoint = wallet.rpc_endpoint();
        let plugin = self
            .kit
            .connect(KitSigner::new(wallet), &rpc_endpoint, KitOptions { sign_only: false })
            .await
            .map_err(sdk_error)?;

        let ticker = args.token_ticker.clone();
        let launched = plugin
            .launch_pump_fun_token(args.into())
            .await
            .map_err(sdk_error)?;

        tracing::info!(mint = %launched.mint, ticker = %ticker, "pump.fun token launched");

        Ok(launched)
    }
}

#[async_trait]
impl<K: TokenPluginFactory> ActionProvider for PumpfunActionProvider<K> {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn actions(&self) -> Vec<ActionDefinition> {
        vec![ActionDefinition {
            name: LAUNCH_PUMPFUN_TOKEN.to_string(),
            description: "Launch a new token on pump.fun with customizable metadata and initial liquidity"
                .to_string(),
            schema: LaunchTokenArgs::schema(),
        }]
    }

    fn supports_network(&self, network: &Network) -> bool {
        network.matches(SVM_PROTOCOL_FAMILY, SOLANA_MAINNET)
    }

    fn validate(&self, action: &str, args: Value) -> Result<(), ActionError> {
        match action {
            LAUNCH_PUMPFUN_TOKEN => parse_args::<LaunchTokenArgs>(action, args).map(drop),
            _ => Err(ActionError::UnknownAction(action.to_string())),
        }
    }

    async fn invoke(
        &self,
        wallet: Arc<dyn SvmWalletProvider>,
        action: &str,
        args: Value,
    ) -> Result<ActionOutput, ActionError> {
        match action {
            LAUNCH_PUMPFUN_TOKEN => {
                let token = self
                    .launch_pumpfun_token(wallet, parse_args(action, args)?)
                    .await?;
                let value = serde_json::to_value(&token).map_err(|e| ActionError::Sdk {
                    operation: "launching pump.fun token",
                    source: crate::sdk::SdkError::InvalidResponse(e.to_string()),
                })?;
                Ok(ActionOutput::Json(value))
            }
            _ => Err(ActionError::UnknownAction(action.to_string())),
        }
    }
}

impl<K> std::fmt::Debug for PumpfunActionProvider<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PumpfunActionProvider").finish_non_exhaustive()
    }
}
