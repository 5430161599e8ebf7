//! Metaplex action provider: SPL token and NFT deployment, minting and DAS queries.
//!
//! Every action returns a message. SDK failures are not errors here; they come
//! back as `"Error <operation>: <message>"` text so the agent can read them.

pub mod schemas;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::action::{
    format_failure, parse_args, ActionArgs, ActionDefinition, ActionError, ActionOutput, ActionProvider,
};
use crate::network::{Network, SOLANA_MAINNET, SVM_PROTOCOL_FAMILY};
use crate::sdk::nft::{CollectionCreator, CollectionParams, DeployTokenParams, NftMetadata, NftPlugin, TokenAuthority};
use crate::sdk::{KitOptions, KitSigner, NftPluginFactory, SdkError, SdkResult};
use crate::wallet::{Pubkey, SvmWalletProvider, WalletError};

pub use schemas::{
    AuthorityArgs, CreatorArgs, DeployCollectionArgs, DeployTokenArgs, GetAssetArgs,
    GetAssetsByAuthorityArgs, GetAssetsByCreatorArgs, MintNftArgs, PagingArgs, SearchAssetsArgs,
};

pub const PROVIDER_NAME: &str = "metaplex";

pub const DEPLOY_TOKEN: &str = "deploy_token";
pub const DEPLOY_COLLECTION: &str = "deploy_collection";
pub const GET_ASSET: &str = "get_asset";
pub const GET_ASSETS_BY_AUTHORITY: &str = "get_assets_by_authority";
pub const GET_ASSETS_BY_CREATOR: &str = "get_assets_by_creator";
pub const MINT_NFT: &str = "mint_nft";
pub const SEARCH_ASSETS: &str = "search_assets";

/// Token and NFT actions backed by the SDK's NFT plugin.
pub struct MetaplexActionProvider<K> {
    kit: K,
}

impl<K: NftPluginFactory> MetaplexActionProvider<K> {
    pub fn new(kit: K) -> Self {
        Self { kit }
    }

    async fn connect(
        &self,
        wallet: &Arc<dyn SvmWalletProvider>,
        options: KitOptions,
    ) -> SdkResult<Box<dyn NftPlugin>> {
        let rpc_endpoint = wallet.rpc_endpoint();
        self.kit
            .connect(KitSigner::new(wallet.clone()), &rpc_endpoint, options)
            .await
    }

    /// Deploy a new SPL token with metadata.
    pub async fn deploy_token(&self, wallet: Arc<dyn SvmWalletProvider>, args: DeployTokenArgs) -> String {
        let result: SdkResult<_> = async {
            let authority = args.authority.clone().unwrap_or_default();
            let params = DeployTokenParams {
                name: args.name.clone(),
                uri: args.uri.clone(),
                symbol: args.symbol.clone(),
                authority: TokenAuthority {
                    mint_authority: parse_optional_key(authority.mint_authority.as_deref())?,
                    freeze_authority: parse_optional_key(authority.freeze_authority.as_deref())?,
                    update_authority: parse_optional_key(authority.update_authority.as_deref())?,
                    is_mutable: authority.is_mutable,
                },
                decimals: args.decimals,
                initial_supply: args.initial_supply,
            };

            let plugin = self.connect(&wallet, KitOptions { sign_only: false }).await?;
            plugin.deploy_token(params).await
        }
        .await;

        match result {
            Ok(token) => {
                tracing::info!(mint = %token.mint, symbol = %args.symbol, "Token deployed");
                format!(
                    "Successfully deployed token with name: {}, symbol: {}, mint: {}, and URI: {}",
                    args.name, args.symbol, token.mint, args.uri
                )
            }
            Err(e) => format_failure("deploying token", e),
        }
    }

    /// Deploy a new NFT collection.
    pub async fn deploy_collection(
        &self,
        wallet: Arc<dyn SvmWalletProvider>,
        args: DeployCollectionArgs,
    ) -> String {
        let result: SdkResult<_> = async {
            let creators = args
                .creators
                .iter()
                .flatten()
                .map(|c| -> Result<CollectionCreator, WalletError> {
                    Ok(CollectionCreator {
                        address: c.address.parse()?,
                        percentage: c.percentage,
                    })
                })
                .collect::<Result<Vec<_>, WalletError>>()?;

            let params = CollectionParams {
                name: args.name.clone(),
                uri: args.uri.clone(),
                royalty_basis_points: args.royalty_basis_points,
                creators,
            };

            let plugin = self.connect(&wallet, KitOptions::default()).await?;
            plugin.deploy_collection(params).await
        }
        .await;

        match result {
            Ok(collection) => {
                tracing::info!(collection = %collection.collection_address, "Collection deployed");
                format!(
                    "Successfully deployed collection with name: {}, collection address: {}, and URI: {}",
                    args.name, collection.collection_address, args.uri
                )
            }
            Err(e) => format_failure("deploying collection", e),
        }
    }

    /// Fetch the details of one asset.
    pub async fn get_asset(&self, wallet: Arc<dyn SvmWalletProvider>, args: GetAssetArgs) -> String {
        let result: SdkResult<_> = async {
            let plugin = self.connect(&wallet, KitOptions::default()).await?;
            let asset = plugin.get_asset(&args.asset_id).await?;
            pretty(&asset)
        }
        .await;

        match result {
            Ok(details) => format!(
                "Here are the asset details for asset ID: {}, {}",
                args.asset_id, details
            ),
            Err(e) => format_failure("getting asset", e),
        }
    }

    /// List assets by update authority.
    pub async fn get_assets_by_authority(
        &self,
        wallet: Arc<dyn SvmWalletProvider>,
        args: GetAssetsByAuthorityArgs,
    ) -> String {
        let authority = args.authority.clone();
        let result: SdkResult<_> = async {
            let plugin = self.connect(&wallet, KitOptions::default()).await?;
            let assets = plugin.get_assets_by_authority(args.into()).await?;
            pretty(&assets)
        }
        .await;

        match result {
            Ok(assets) => format!(
                "Here are the assets owned by authority address: {}, {}",
                authority, assets
            ),
            Err(e) => format_failure("getting assets", e),
        }
    }

    /// List assets by creator.
    pub async fn get_assets_by_creator(
        &self,
        wallet: Arc<dyn SvmWalletProvider>,
        args: GetAssetsByCreatorArgs,
    ) -> String {
        let creator = args.creator.clone();
        let result: SdkResult<_> = async {
            let plugin = self.connect(&wallet, KitOptions::default()).await?;
            let assets = plugin.get_assets_by_creator(args.into()).await?;
            pretty(&assets)
        }
        .await;

        match result {
            Ok(assets) => format!(
                "Here are the assets created by creator address: {}, {}",
                creator, assets
            ),
            Err(e) => format_failure("getting assets", e),
        }
    }

    /// Mint an NFT into an existing collection.
    pub async fn mint_nft(&self, wallet: Arc<dyn SvmWalletProvider>, args: MintNftArgs) -> String {
        let result: SdkResult<_> = async {
            let collection: Pubkey = args.collection_mint.parse()?;
            let recipient: Pubkey = args.recipient.parse()?;
            let metadata = NftMetadata {
                name: args.name.clone(),
                uri: args.uri.clone(),
            };

            let plugin = self.connect(&wallet, KitOptions::default()).await?;
            plugin
                .mint_collection_nft(collection, metadata, Some(recipient))
                .await
        }
        .await;

        match result {
            Ok(nft) => {
                tracing::info!(mint = %nft.mint, collection = %args.collection_mint, "NFT minted");
                format!("Successfully minted NFT with address: {}", nft.mint)
            }
            Err(e) => format_failure("minting NFT", e),
        }
    }

    /// Search assets with DAS filters.
    pub async fn search_assets(&self, wallet: Arc<dyn SvmWalletProvider>, args: SearchAssetsArgs) -> String {
        let result: SdkResult<_> = async {
            let plugin = self.connect(&wallet, KitOptions::default()).await?;
            let page = plugin.search_assets(args.into()).await?;
            pretty(&page.items)
        }
        .await;

        match result {
            Ok(items) => format!("Found asset: {}", items),
            Err(e) => format_failure("searching for assets", e),
        }
    }
}

/// Absent or empty keys are left for the SDK to default to the signer.
fn parse_optional_key(key: Option<&str>) -> Result<Option<Pubkey>, WalletError> {
    key.filter(|k| !k.is_empty()).map(str::parse).transpose()
}

fn pretty(value: &impl Serialize) -> SdkResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| SdkError::InvalidResponse(e.to_string()))
}

fn definition<A: ActionArgs>(name: &str, description: &str) -> ActionDefinition {
    ActionDefinition {
        name: name.to_string(),
        description: description.to_string(),
        schema: A::schema(),
    }
}

#[async_trait]
impl<K: NftPluginFactory> ActionProvider for MetaplexActionProvider<K> {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn actions(&self) -> Vec<ActionDefinition> {
        vec![
            definition::<DeployTokenArgs>(
                DEPLOY_TOKEN,
                "Deploys a new SPL token using Metaplex.\n\
                 - Name, URI, and symbol are required.\n\
                 - Decimals default to 9.\n\
                 - All authorities default to the wallet's public key. (e.g mintAuthority, freezeAuthority, updateAuthority)",
            ),
            definition::<DeployCollectionArgs>(
                DEPLOY_COLLECTION,
                "Deploy a new NFT collection on the Solana blockchain using Metaplex.\n\
                 - Name and URI are required.",
            ),
            definition::<GetAssetArgs>(
                GET_ASSET,
                "Fetch asset details using the Metaplex DAS API.\n\
                 - Asset ID is required.",
            ),
            definition::<GetAssetsByAuthorityArgs>(
                GET_ASSETS_BY_AUTHORITY,
                "Fetch a list of assets owned by a specific address using the Metaplex DAS API.\n\
                 - Authority address is required.",
            ),
            definition::<GetAssetsByCreatorArgs>(
                GET_ASSETS_BY_CREATOR,
                "Fetch a list of assets created by a specific address using the Metaplex DAS API.\n\
                 - Creator address is required.",
            ),
            definition::<MintNftArgs>(
                MINT_NFT,
                "Mint an NFT using Metaplex.\n\
                 - Collection address, metadata URI, and token metadata are required.",
            ),
            definition::<SearchAssetsArgs>(
                SEARCH_ASSETS,
                "Search for assets using the Metaplex DAS API.\n\
                 - All parameters are optional, however at least one is needed for search.",
            ),
        ]
    }

    /// Solana mainnet only.
    fn supports_network(&self, network: &Network) -> bool {
        network.matches(SVM_PROTOCOL_FAMILY, SOLANA_MAINNET)
    }

    fn validate(&self, action: &str, args: Value) -> Result<(), ActionError> {
        match action {
            DEPLOY_TOKEN => parse_args::<DeployTokenArgs>(action, args).map(drop),
            DEPLOY_COLLECTION => parse_args::<DeployCollectionArgs>(action, args).map(drop),
            GET_ASSET => parse_args::<GetAssetArgs>(action, args).map(drop),
            GET_ASSETS_BY_AUTHORITY => parse_args::<GetAssetsByAuthorityArgs>(action, args).map(drop),
            GET_ASSETS_BY_CREATOR => parse_args::<GetAssetsByCreatorArgs>(action, args).map(drop),
            MINT_NFT => parse_args::<MintNftArgs>(action, args).map(drop),
            SEARCH_ASSETS => parse_args::<SearchAssetsArgs>(action, args).map(drop),
            _ => Err(ActionError::UnknownAction(action.to_string())),
        }
    }

    async fn invoke(
        &self,
        wallet: Arc<dyn SvmWalletProvider>,
        action: &str,
        args: Value,
    ) -> Result<ActionOutput, ActionError> {
        let message = match action {
            DEPLOY_TOKEN => self.deploy_token(wallet, parse_args(action, args)?).await,
            DEPLOY_COLLECTION => self.deploy_collection(wallet, parse_args(action, args)?).await,
            GET_ASSET => self.get_asset(wallet, parse_args(action, args)?).await,
            GET_ASSETS_BY_AUTHORITY => {
                self.get_assets_by_authority(wallet, parse_args(action, args)?)
                    .await
            }
            GET_ASSETS_BY_CREATOR => {
                self.get_assets_by_creator(wallet, parse_args(action, args)?)
                    .await
            }
            MINT_NFT => self.mint_nft(wallet, parse_args(action, args)?).await,
            SEARCH_ASSETS => self.search_assets(wallet, parse_args(action, args)?).await,
            _ => return Err(ActionError::UnknownAction(action.to_string())),
        };

        Ok(ActionOutput::Text(message))
    }
}

impl<K> std::fmt::Debug for MetaplexActionProvider<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaplexActionProvider").finish_non_exhaustive()
    }
}
