//! NFT plugin of the SDK: token/collection deployment, minting and DAS queries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sdk::SdkResult;
use crate::wallet::Pubkey;

/// Authorities of a new fungible token. `None` means "the signer's key".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenAuthority {
    pub mint_authority: Option<Pubkey>,
    pub freeze_authority: Option<Pubkey>,
    pub update_authority: Option<Pubkey>,
    pub is_mutable: Option<bool>,
}

/// Parameters for deploying a fungible token with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployTokenParams {
    pub name: String,
    pub uri: String,
    pub symbol: String,
    pub authority: TokenAuthority,
    /// Defaults to 9 inside the SDK.
    pub decimals: Option<u8>,
    pub initial_supply: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedToken {
    pub mint: Pubkey,
}

/// Royalty share of a collection creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCreator {
    pub address: Pubkey,
    /// Share in percent, 0..=100.
    pub percentage: u8,
}

/// Parameters for deploying an NFT collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionParams {
    pub name: String,
    pub uri: String,
    pub royalty_basis_points: Option<u16>,
    pub creators: Vec<CollectionCreator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedCollection {
    pub collection_address: Pubkey,
}

/// Name and metadata URI of a single NFT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftMetadata {
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintedNft {
    pub mint: Pubkey,
}

/// Sort key accepted by the DAS API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Created,
    Updated,
    RecentAction,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSorting {
    pub sort_by: SortBy,
    pub sort_direction: SortDirection,
}

/// Cursor and page controls shared by list queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<AssetSorting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// `getAssetsByAuthority` parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorityQuery {
    pub authority_address: String,
    #[serde(flatten)]
    pub paging: Paging,
}

/// `getAssetsByCreator` parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorQuery {
    pub creator_address: String,
    #[serde(flatten)]
    pub paging: Paging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionType {
    All,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerType {
    Single,
    Token,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoyaltyModel {
    Creators,
    Fanout,
    Single,
}

/// `searchAssets` parameters, using DAS wire names. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<ConditionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<OwnerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply_mint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalty_target_type: Option<RoyaltyModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalty_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalty_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burnt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// One page of DAS search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPage {
    pub total: u64,
    pub limit: u64,
    pub page: Option<u64>,
    pub items: Vec<Value>,
}

/// Token and NFT operations of an SDK instance.
#[async_trait]
pub trait NftPlugin: Send + Sync {
    async fn deploy_token(&self, params: DeployTokenParams) -> SdkResult<DeployedToken>;

    async fn deploy_collection(&self, params: CollectionParams) -> SdkResult<DeployedCollection>;

    /// Mint an NFT into `collection`; `recipient` defaults to the signer.
    async fn mint_collection_nft(
        &self,
        collection: Pubkey,
        metadata: NftMetadata,
        recipient: Option<Pubkey>,
    ) -> SdkResult<MintedNft>;

    async fn get_asset(&self, asset_id: &str) -> SdkResult<Value>;

    async fn get_assets_by_authority(&self, query: AuthorityQuery) -> SdkResult<Value>;

    async fn get_assets_by_creator(&self, query: CreatorQuery) -> SdkResult<Value>;

    async fn search_assets(&self, query: SearchQuery) -> SdkResult<AssetPage>;
}
