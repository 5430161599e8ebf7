//! Metaplex Digital Asset Standard (DAS) read API client.
//!
//! # Responsibilities
//! - Issue JSON-RPC 2.0 requests for asset lookups and searches
//! - Enforce a per-request timeout
//! - Fall back to failover endpoints in order when a request fails

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;
use uuid::Uuid;

use crate::sdk::nft::{AssetPage, AuthorityQuery, CreatorQuery, SearchQuery};
use crate::sdk::{SdkError, SdkResult};

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: String,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC client for the DAS API with failover support.
#[derive(Clone)]
pub struct DasClient {
    http: reqwest::Client,
    /// Primary endpoint first, then failovers.
    endpoints: Vec<String>,
    timeout_secs: u64,
}

impl DasClient {
    /// Create a client for a single endpoint.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self::with_failover(endpoint, Vec::new(), timeout_secs)
    }

    /// Create a client with failover endpoints, tried in order.
    pub fn with_failover(endpoint: impl Into<String>, failover: Vec<String>, timeout_secs: u64) -> Self {
        let mut endpoints = vec![endpoint.into()];
        endpoints.extend(failover);

        Self {
            http: reqwest::Client::new(),
            endpoints,
            timeout_secs,
        }
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// `getAsset`: full details of one asset.
    pub async fn get_asset(&self, asset_id: &str) -> SdkResult<Value> {
        self.call("getAsset", serde_json::json!({ "id": asset_id })).await
    }

    /// `getAssetsByAuthority`: assets whose update authority is the address.
    pub async fn get_assets_by_authority(&self, query: &AuthorityQuery) -> SdkResult<Value> {
        self.call("getAssetsByAuthority", query).await
    }

    /// `getAssetsByCreator`: assets listing the address as a creator.
    pub async fn get_assets_by_creator(&self, query: &CreatorQuery) -> SdkResult<Value> {
        self.call("getAssetsByCreator", query).await
    }

    /// `searchAssets`: filtered search.
    pub async fn search_assets(&self, query: &SearchQuery) -> SdkResult<AssetPage> {
        self.call("searchAssets", query).await
    }

    async fn call<P, T>(&self, method: &str, params: P) -> SdkResult<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: Uuid::new_v4().to_string(),
            method,
            params,
        };

        let mut last_error = SdkError::Transport("No DAS endpoints configured".to_string());
        for (i, endpoint) in self.endpoints.iter().enumerate() {
            match self.call_endpoint(endpoint, &request).await {
                Ok(result) => return Ok(result),
                // The node understood the request and refused it; other endpoints will too.
                Err(e @ SdkError::Rpc { .. }) => return Err(e),
                Err(e) => {
                    tracing::warn!(endpoint_idx = i, method, error = %e, "DAS request failed, trying next endpoint");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }

    async fn call_endpoint<P, T>(&self, endpoint: &str, request: &RpcRequest<'_, P>) -> SdkResult<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        match timeout(Duration::from_secs(self.timeout_secs), self.post(endpoint, request)).await {
            Ok(result) => result,
            Err(_) => Err(SdkError::Timeout(self.timeout_secs)),
        }
    }

    async fn post<P, T>(&self, endpoint: &str, request: &RpcRequest<'_, P>) -> SdkResult<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SdkError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SdkError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SdkError::Transport(format!("HTTP {}: {}", status, body)));
        }

        let parsed: RpcResponse<T> =
            serde_json::from_str(&body).map_err(|e| SdkError::InvalidResponse(e.to_string()))?;

        match (parsed.result, parsed.error) {
            (_, Some(err)) => Err(SdkError::Rpc {
                code: err.code,
                message: err.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(SdkError::InvalidResponse(
                "response has neither result nor error".to_string(),
            )),
        }
    }
}

impl std::fmt::Debug for DasClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DasClient")
            .field("endpoints", &self.endpoints)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
