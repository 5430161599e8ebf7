//! Read-only SDK kit backed by the DAS API.

use async_trait::async_trait;
use serde_json::Value;

use crate::sdk::das::DasClient;
use crate::sdk::nft::{
    AssetPage, AuthorityQuery, CollectionParams, CreatorQuery, DeployTokenParams, DeployedCollection,
    DeployedToken, MintedNft, NftMetadata, NftPlugin, SearchQuery,
};
use crate::sdk::token::{LaunchedToken, PumpFunLaunch, TokenPlugin};
use crate::sdk::{
    KitOptions, KitSigner, NftPluginFactory, SdkError, SdkResult, TokenPluginFactory,
};
use crate::wallet::Pubkey;

/// Kit that answers queries and refuses anything that needs a transaction.
#[derive(Debug, Clone)]
pub struct ReadOnlyKit {
    failover_urls: Vec<String>,
    timeout_secs: u64,
}

impl ReadOnlyKit {
    pub fn new(failover_urls: Vec<String>, timeout_secs: u64) -> Self {
        Self {
            failover_urls,
            timeout_secs,
        }
    }
}

impl Default for ReadOnlyKit {
    fn default() -> Self {
        Self::new(Vec::new(), 10)
    }
}

/// Plugin instance created per call by `ReadOnlyKit`.
#[derive(Debug)]
pub struct ReadOnlyPlugin {
    das: DasClient,
}

#[async_trait]
impl NftPluginFactory for ReadOnlyKit {
    async fn connect(
        &self,
        signer: KitSigner,
        rpc_endpoint: &str,
        _options: KitOptions,
    ) -> SdkResult<Box<dyn NftPlugin>> {
        tracing::debug!(rpc_endpoint, signer = %signer.public_key(), "Connecting read-only NFT plugin");
        let das = DasClient::with_failover(rpc_endpoint, self.failover_urls.clone(), self.timeout_secs);
        Ok(Box::new(ReadOnlyPlugin { das }))
    }
}

#[async_trait]
impl TokenPluginFactory for ReadOnlyKit {
    async fn connect(
        &self,
        signer: KitSigner,
        rpc_endpoint: &str,
        _options: KitOptions,
    ) -> SdkResult<Box<dyn TokenPlugin>> {
        tracing::debug!(rpc_endpoint, signer = %signer.public_key(), "Connecting read-only token plugin");
        let das = DasClient::with_failover(rpc_endpoint, self.failover_urls.clone(), self.timeout_secs);
        Ok(Box::new(ReadOnlyPlugin { das }))
    }
}

#[async_trait]
impl NftPlugin for ReadOnlyPlugin {
    async fn deploy_token(&self, _params: DeployTokenParams) -> SdkResult<DeployedToken> {
        Err(SdkError::Unsupported("deploy_token requires a transaction-building SDK"))
    }

    async fn deploy_collection(&self, _params: CollectionParams) -> SdkResult<DeployedCollection> {
        Err(SdkError::Unsupported("deploy_collection requires a transaction-building SDK"))
    }

    async fn mint_collection_nft(
        &self,
        _collection: Pubkey,
        _metadata: NftMetadata,
        _recipient: Option<Pubkey>,
    ) -> SdkResult<MintedNft> {
        Err(SdkError::Unsupported("mint_collection_nft requires a transaction-building SDK"))
    }

    async fn get_asset(&self, asset_id: &str) -> SdkResult<Value> {
        self.das.get_asset(asset_id).await
    }

    async fn get_assets_by_authority(&self, query: AuthorityQuery) -> SdkResult<Value> {
        self.das.get_assets_by_authority(&query).await
    }

    async fn get_assets_by_creator(&self, query: CreatorQuery) -> SdkResult<Value> {
        self.das.get_assets_by_creator(&query).await
    }

    async fn search_assets(&self, query: SearchQuery) -> SdkResult<AssetPage> {
        self.das.search_assets(&query).await
    }
}

#[async_trait]
impl TokenPlugin for ReadOnlyPlugin {
    async fn launch_pump_fun_token(&self, _launch: PumpFunLaunch) -> SdkResult<LaunchedToken> {
        Err(SdkError::Unsupported("launch_pump_fun_token requires a transaction-building SDK"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plugin() -> ReadOnlyPlugin {
        ReadOnlyPlugin {
            das: DasClient::new("http://127.0.0.1:9", 1),
        }
    }

    #[tokio::test]
    async fn test_write_operations_are_unsupported() {
        let plugin = plugin();
        let result = plugin
            .deploy_collection(CollectionParams {
                name: "c".into(),
                uri: "https://example.com".into(),
                royalty_basis_points: None,
                creators: Vec::new(),
            })
            .await;
        assert!(matches!(result, Err(SdkError::Unsupported(_))));

        let result = plugin
            .launch_pump_fun_token(PumpFunLaunch {
                token_name: "t".into(),
                token_ticker: "TT".into(),
                description: "d".into(),
                image_url: "https://example.com/i.png".into(),
                options: crate::sdk::token::LaunchOptions {
                    initial_liquidity_sol: 0.0001,
                    website: None,
                    twitter: None,
                    telegram: None,
                    slippage_bps: 5,
                    priority_fee: 0.00005,
                },
            })
            .await;
        assert!(result.unwrap_err().to_string().contains("not supported"));
    }
}
