//! Argument types of the Metaplex actions.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::action::schema::{
    bool_prop, enum_prop, integer_prop, min_len, object_schema, pubkey, range, string_prop, url,
    url_prop, whole,
};
use crate::action::{ActionArgs, Validate, ValidationError};
use crate::sdk::nft::{
    AssetSorting, AuthorityQuery, ConditionType, CreatorQuery, OwnerType, Paging, RoyaltyModel,
    SearchQuery,
};

fn sorting_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "sortBy": enum_prop("Sort key", &["created", "updated", "recentAction", "none"]),
            "sortDirection": enum_prop("Sort direction", &["asc", "desc"]),
        },
        "required": ["sortBy", "sortDirection"],
    })
}

fn paging_properties() -> Vec<(&'static str, Value)> {
    vec![
        ("sortBy", sorting_schema()),
        ("limit", integer_prop("Maximum number of assets to return")),
        ("page", integer_prop("Page number, starting at 1")),
        ("before", string_prop("Return assets before this cursor")),
        ("after", string_prop("Return assets after this cursor")),
    ]
}

/// Optional authorities of a new token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorityArgs {
    pub mint_authority: Option<String>,
    pub freeze_authority: Option<String>,
    pub update_authority: Option<String>,
    pub is_mutable: Option<bool>,
}

/// Arguments of `deploy_token`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployTokenArgs {
    pub name: String,
    pub uri: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "whole::option")]
    pub decimals: Option<u8>,
    #[serde(default)]
    pub authority: Option<AuthorityArgs>,
    #[serde(default, deserialize_with = "whole::option")]
    pub initial_supply: Option<u64>,
}

impl Validate for DeployTokenArgs {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("name", &self.name, 1, "Name is required")?;
        url("uri", &self.uri, "URI must be a valid URL")?;
        min_len("symbol", &self.symbol, 1, "Symbol is required")?;
        if let Some(authority) = &self.authority {
            for (field, key) in [
                ("authority.mintAuthority", &authority.mint_authority),
                ("authority.freezeAuthority", &authority.freeze_authority),
                ("authority.updateAuthority", &authority.update_authority),
            ] {
                // An empty string means "not set", like null.
                if let Some(key) = key.as_deref().filter(|k| !k.is_empty()) {
                    pubkey(field, key)?;
                }
            }
        }
        Ok(())
    }
}

impl ActionArgs for DeployTokenArgs {
    fn schema() -> Value {
        let nullable_key = |description: &str| json!({ "type": ["string", "null"], "description": description });
        object_schema(
            "Deploy a new SPL token using Metaplex",
            &[
                ("name", string_prop("Name of the token")),
                ("uri", url_prop("Metadata URI of the token")),
                ("symbol", string_prop("Symbol of the token")),
                ("decimals", integer_prop("Number of decimals, defaults to 9")),
                (
                    "authority",
                    json!({
                        "type": "object",
                        "properties": {
                            "mintAuthority": nullable_key("Mint authority, defaults to the wallet"),
                            "freezeAuthority": nullable_key("Freeze authority, defaults to the wallet"),
                            "updateAuthority": nullable_key("Update authority, defaults to the wallet"),
                            "isMutable": bool_prop("Whether the metadata can be updated"),
                        },
                    }),
                ),
                ("initialSupply", integer_prop("Initial supply minted to the wallet")),
            ],
            &["name", "uri", "symbol"],
        )
    }
}

/// Royalty share in `deploy_collection`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatorArgs {
    pub address: String,
    #[serde(deserialize_with = "whole::deserialize")]
    pub percentage: u8,
}

/// Arguments of `deploy_collection`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployCollectionArgs {
    pub name: String,
    pub uri: String,
    #[serde(default, deserialize_with = "whole::option")]
    pub royalty_basis_points: Option<u16>,
    #[serde(default)]
    pub creators: Option<Vec<CreatorArgs>>,
}

impl Validate for DeployCollectionArgs {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("name", &self.name, 1, "Name is required")?;
        url("uri", &self.uri, "URI must be a valid URL")?;
        if let Some(bps) = self.royalty_basis_points {
            range("royaltyBasisPoints", bps, 0, 10_000)?;
        }
        for creator in self.creators.iter().flatten() {
            min_len("creators.address", &creator.address, 1, "Creator address is required")?;
            pubkey("creators.address", &creator.address)?;
            range("creators.percentage", creator.percentage, 0, 100)?;
        }
        Ok(())
    }
}

impl ActionArgs for DeployCollectionArgs {
    fn schema() -> Value {
        object_schema(
            "Deploy a new NFT collection using Metaplex",
            &[
                ("name", string_prop("The name of the collection")),
                ("uri", url_prop("The URI of the collection")),
                (
                    "royaltyBasisPoints",
                    json!({
                        "type": "integer",
                        "minimum": 0,
                        "maximum": 10000,
                        "description": "The royalty basis points of the collection, e.g., 500 = 5%",
                    }),
                ),
                (
                    "creators",
                    json!({
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "address": string_prop("Creator address"),
                                "percentage": { "type": "integer", "minimum": 0, "maximum": 100 },
                            },
                            "required": ["address", "percentage"],
                        },
                    }),
                ),
            ],
            &["name", "uri"],
        )
    }
}

/// Arguments of `get_asset`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAssetArgs {
    pub asset_id: String,
}

impl Validate for GetAssetArgs {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("assetId", &self.asset_id, 1, "Asset ID is required")
    }
}

impl ActionArgs for GetAssetArgs {
    fn schema() -> Value {
        object_schema(
            "Get information about an asset using Metaplex",
            &[("assetId", string_prop("The ID of the asset to get information about"))],
            &["assetId"],
        )
    }
}

/// Paging fields shared by the list actions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingArgs {
    pub sort_by: Option<AssetSorting>,
    #[serde(default, deserialize_with = "whole::option")]
    pub limit: Option<u32>,
    #[serde(default, deserialize_with = "whole::option")]
    pub page: Option<u32>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl From<PagingArgs> for Paging {
    fn from(args: PagingArgs) -> Self {
        Paging {
            sort_by: args.sort_by,
            limit: args.limit,
            page: args.page,
            before: args.before,
            after: args.after,
        }
    }
}

/// Arguments of `get_assets_by_authority`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAssetsByAuthorityArgs {
    pub authority: String,
    #[serde(flatten)]
    pub paging: PagingArgs,
}

impl Validate for GetAssetsByAuthorityArgs {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("authority", &self.authority, 1, "Authority address is required")
    }
}

impl ActionArgs for GetAssetsByAuthorityArgs {
    fn schema() -> Value {
        let mut properties = vec![("authority", string_prop("Authority address"))];
        properties.extend(paging_properties());
        object_schema("Get assets by update authority using Metaplex", &properties, &["authority"])
    }
}

impl From<GetAssetsByAuthorityArgs> for AuthorityQuery {
    fn from(args: GetAssetsByAuthorityArgs) -> Self {
        AuthorityQuery {
            authority_address: args.authority,
            paging: args.paging.into(),
        }
    }
}

/// Arguments of `get_assets_by_creator`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAssetsByCreatorArgs {
    pub creator: String,
    #[serde(flatten)]
    pub paging: PagingArgs,
}

impl Validate for GetAssetsByCreatorArgs {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("creator", &self.creator, 1, "Creator address is required")
    }
}

impl ActionArgs for GetAssetsByCreatorArgs {
    fn schema() -> Value {
        let mut properties = vec![("creator", string_prop("Creator address"))];
        properties.extend(paging_properties());
        object_schema("Get assets by creator using Metaplex", &properties, &["creator"])
    }
}

impl From<GetAssetsByCreatorArgs> for CreatorQuery {
    fn from(args: GetAssetsByCreatorArgs) -> Self {
        CreatorQuery {
            creator_address: args.creator,
            paging: args.paging.into(),
        }
    }
}

/// Arguments of `mint_nft`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintNftArgs {
    pub collection_mint: String,
    pub name: String,
    pub uri: String,
    pub recipient: String,
}

impl Validate for MintNftArgs {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("collectionMint", &self.collection_mint, 32, "Invalid collection mint address")?;
        min_len("name", &self.name, 1, "Name is required")?;
        url("uri", &self.uri, "URI must be a valid URL")?;
        min_len("recipient", &self.recipient, 32, "Invalid recipient address")
    }
}

impl ActionArgs for MintNftArgs {
    fn schema() -> Value {
        object_schema(
            "Mint an NFT into a collection using Metaplex",
            &[
                ("collectionMint", string_prop("Address of the collection")),
                ("name", string_prop("Name of the NFT")),
                ("uri", url_prop("Metadata URI of the NFT")),
                ("recipient", string_prop("Address receiving the NFT")),
            ],
            &["collectionMint", "name", "uri", "recipient"],
        )
    }
}

/// Arguments of `search_assets`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAssetsArgs {
    pub negate: Option<bool>,
    pub condition_type: Option<ConditionType>,
    pub interface: Option<String>,
    pub json_uri: Option<String>,
    pub owner: Option<String>,
    pub owner_type: Option<OwnerType>,
    pub creator: Option<String>,
    pub creator_verified: Option<bool>,
    pub authority: Option<String>,
    pub delegate: Option<String>,
    pub frozen: Option<bool>,
    #[serde(default, deserialize_with = "whole::option")]
    pub supply: Option<u64>,
    pub supply_mint: Option<String>,
    pub compressed: Option<bool>,
    pub compressible: Option<bool>,
    pub royalty_model: Option<RoyaltyModel>,
    pub royalty_target: Option<String>,
    #[serde(default, deserialize_with = "whole::option")]
    pub royalty_amount: Option<u64>,
    pub burnt: Option<bool>,
    #[serde(default, deserialize_with = "whole::option")]
    pub limit: Option<u32>,
    #[serde(default, deserialize_with = "whole::option")]
    pub page: Option<u32>,
}

impl Validate for SearchAssetsArgs {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl ActionArgs for SearchAssetsArgs {
    fn schema() -> Value {
        object_schema(
            "Search for assets using Metaplex",
            &[
                ("negate", bool_prop("Negate the search conditions")),
                ("conditionType", enum_prop("How conditions combine", &["all", "any"])),
                ("interface", string_prop("Asset interface, e.g. V1_NFT")),
                ("jsonUri", string_prop("Metadata JSON URI")),
                ("owner", string_prop("Owner address")),
                ("ownerType", enum_prop("Ownership model", &["single", "token"])),
                ("creator", string_prop("Creator address")),
                ("creatorVerified", bool_prop("Only verified creators")),
                ("authority", string_prop("Update authority address")),
                ("delegate", string_prop("Delegate address")),
                ("frozen", bool_prop("Frozen state")),
                ("supply", integer_prop("Supply")),
                ("supplyMint", string_prop("Supply mint address")),
                ("compressed", bool_prop("Compressed state")),
                ("compressible", bool_prop("Compressible state")),
                (
                    "royaltyModel",
                    enum_prop("Royalty model", &["creators", "fanout", "single"]),
                ),
                ("royaltyTarget", string_prop("Royalty target address")),
                ("royaltyAmount", integer_prop("Royalty amount")),
                ("burnt", bool_prop("Burnt state")),
                ("limit", integer_prop("Maximum number of assets to return")),
                ("page", integer_prop("Page number, starting at 1")),
            ],
            &[],
        )
    }
}

impl From<SearchAssetsArgs> for SearchQuery {
    fn from(args: SearchAssetsArgs) -> Self {
        SearchQuery {
            negate: args.negate,
            condition_type: args.condition_type,
            interface: args.interface,
            json_uri: args.json_uri,
            owner_address: args.owner,
            owner_type: args.owner_type,
            creator_address: args.creator,
            creator_verified: args.creator_verified,
            authority_address: args.authority,
            delegate: args.delegate,
            frozen: args.frozen,
            supply: args.supply,
            supply_mint: args.supply_mint,
            compressed: args.compressed,
            compressible: args.compressible,
            royalty_target_type: args.royalty_model,
            royalty_target: args.royalty_target,
            royalty_amount: args.royalty_amount,
            burnt: args.burnt,
            limit: args.limit,
            page: args.page,
        }
    }
}
