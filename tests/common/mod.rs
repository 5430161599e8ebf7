//! Shared utilities for integration tests: mock wallet, mock SDK kits and a
//! programmable JSON-RPC backend.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use svm_actions::network::Network;
use svm_actions::sdk::nft::{
    AssetPage, AuthorityQuery, CollectionParams, CreatorQuery, DeployTokenParams, DeployedCollection,
    DeployedToken, MintedNft, NftMetadata, NftPlugin, SearchQuery,
};
use svm_actions::sdk::token::{LaunchedToken, PumpFunLaunch, TokenPlugin};
use svm_actions::sdk::{
    KitOptions, KitSigner, NftPluginFactory, SdkError, SdkResult, TokenPluginFactory,
};
use svm_actions::wallet::{
    Pubkey, Signature, SignatureStatus, SvmWalletProvider, Transaction, WalletResult,
};

pub const MINT: Pubkey = Pubkey::new([9u8; 32]);
pub const COLLECTION: Pubkey = Pubkey::new([7u8; 32]);
pub const WALLET_KEY: Pubkey = Pubkey::new([1u8; 32]);
pub const SIGNATURE: Signature = Signature::new([5u8; 64]);
pub const RPC_ENDPOINT: &str = "http://127.0.0.1:8899";

/// Wallet that signs by appending nothing and counts what it was asked to do.
pub struct MockWallet {
    network: Network,
    pub signed: Mutex<Vec<Transaction>>,
    pub sent: Mutex<Vec<Transaction>>,
}

impl MockWallet {
    pub fn mainnet() -> Arc<Self> {
        Self::on(Network::solana_mainnet())
    }

    pub fn on(network: Network) -> Arc<Self> {
        Arc::new(Self {
            network,
            signed: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SvmWalletProvider for MockWallet {
    fn name(&self) -> &str {
        "mock"
    }

    fn network(&self) -> Network {
        self.network.clone()
    }

    fn public_key(&self) -> Pubkey {
        WALLET_KEY
    }

    fn rpc_endpoint(&self) -> String {
        RPC_ENDPOINT.to_string()
    }

    async fn sign_transaction(&self, tx: Transaction) -> WalletResult<Transaction> {
        self.signed.lock().unwrap().push(tx.clone());
        Ok(tx)
    }

    async fn sign_and_send_transaction(&self, tx: Transaction) -> WalletResult<Signature> {
        self.sent.lock().unwrap().push(tx);
        Ok(SIGNATURE)
    }

    async fn wait_for_signature_result(&self, _signature: &Signature) -> WalletResult<SignatureStatus> {
        Ok(SignatureStatus { slot: 1, err: None })
    }
}

/// Everything the NFT plugin was asked to do.
#[derive(Default)]
pub struct NftCalls {
    pub connects: Vec<(String, KitOptions, Pubkey)>,
    pub deploy_token: Vec<DeployTokenParams>,
    pub deploy_collection: Vec<CollectionParams>,
    pub mint: Vec<(Pubkey, NftMetadata, Option<Pubkey>)>,
    pub get_asset: Vec<String>,
    pub by_authority: Vec<AuthorityQuery>,
    pub by_creator: Vec<CreatorQuery>,
    pub search: Vec<SearchQuery>,
}

/// NFT kit with recorded calls and an optional failure for every operation.
#[derive(Clone, Default)]
pub struct MockNftKit {
    pub calls: Arc<Mutex<NftCalls>>,
    pub failure: Option<String>,
    pub assets: Value,
}

impl MockNftKit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_assets(assets: Value) -> Self {
        Self {
            assets,
            ..Self::default()
        }
    }
}

struct MockNftPlugin {
    kit: MockNftKit,
    signer: KitSigner,
}

impl MockNftPlugin {
    fn check(&self) -> SdkResult<()> {
        match &self.kit.failure {
            Some(message) => Err(SdkError::Transport(message.clone())),
            None => Ok(()),
        }
    }

    /// Route a dummy transaction through the signer like a real SDK would.
    async fn submit(&self) -> SdkResult<()> {
        let receipt = self
            .signer
            .sign_and_send_transaction(Transaction::from_bytes(vec![1, 2, 3]))
            .await?;
        self.signer.wait_for_confirmation(&receipt.signature).await?;
        Ok(())
    }
}

#[async_trait]
impl NftPluginFactory for MockNftKit {
    async fn connect(
        &self,
        signer: KitSigner,
        rpc_endpoint: &str,
        options: KitOptions,
    ) -> SdkResult<Box<dyn NftPlugin>> {
        self.calls
            .lock()
            .unwrap()
            .connects
            .push((rpc_endpoint.to_string(), options, signer.public_key()));
        Ok(Box::new(MockNftPlugin {
            kit: self.clone(),
            signer,
        }))
    }
}

#[async_trait]
impl NftPlugin for MockNftPlugin {
    async fn deploy_token(&self, params: DeployTokenParams) -> SdkResult<DeployedToken> {
        self.kit.calls.lock().unwrap().deploy_token.push(params);
        self.check()?;
        self.submit().await?;
        Ok(DeployedToken { mint: MINT })
    }

    async fn deploy_collection(&self, params: CollectionParams) -> SdkResult<DeployedCollection> {
        self.kit.calls.lock().unwrap().deploy_collection.push(params);
        self.check()?;
        self.submit().await?;
        Ok(DeployedCollection {
            collection_address: COLLECTION,
        })
    }

    async fn mint_collection_nft(
        &self,
        collection: Pubkey,
        metadata: NftMetadata,
        recipient: Option<Pubkey>,
    ) -> SdkResult<MintedNft> {
        self.kit
            .calls
            .lock()
            .unwrap()
            .mint
            .push((collection, metadata, recipient));
        self.check()?;
        self.submit().await?;
        Ok(MintedNft { mint: MINT })
    }

    async fn get_asset(&self, asset_id: &str) -> SdkResult<Value> {
        self.kit.calls.lock().unwrap().get_asset.push(asset_id.to_string());
        self.check()?;
        Ok(self.kit.assets.clone())
    }

    async fn get_assets_by_authority(&self, query: AuthorityQuery) -> SdkResult<Value> {
        self.kit.calls.lock().unwrap().by_authority.push(query);
        self.check()?;
        Ok(self.kit.assets.clone())
    }

    async fn get_assets_by_creator(&self, query: CreatorQuery) -> SdkResult<Value> {
        self.kit.calls.lock().unwrap().by_creator.push(query);
        self.check()?;
        Ok(self.kit.assets.clone())
    }

    async fn search_assets(&self, query: SearchQuery) -> SdkResult<AssetPage> {
        self.kit.calls.lock().unwrap().search.push(query);
        self.check()?;
        let items = match &self.kit.assets {
            Value::Array(items) => items.clone(),
            other => vec![other.clone()],
        };
        Ok(AssetPage {
            total: items.len() as u64,
            limit: 1000,
            page: Some(1),
            items,
        })
    }
}

/// Token kit returning a fixed launch result, or failing.
#[derive(Clone, Default)]
pub struct MockTokenKit {
    pub launches: Arc<Mutex<Vec<PumpFunLaunch>>>,
    pub connects: Arc<Mutex<Vec<(String, KitOptions)>>>,
    pub failure: Option<String>,
}

impl MockTokenKit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }
}

struct MockTokenPlugin {
    kit: MockTokenKit,
}

#[async_trait]
impl TokenPluginFactory for MockTokenKit {
    async fn connect(
        &self,
        _signer: KitSigner,
        rpc_endpoint: &str,
        options: KitOptions,
    ) -> SdkResult<Box<dyn TokenPlugin>> {
        self.connects
            .lock()
            .unwrap()
            .push((rpc_endpoint.to_string(), options));
        Ok(Box::new(MockTokenPlugin { kit: self.clone() }))
    }
}

#[async_trait]
impl TokenPlugin for MockTokenPlugin {
    async fn launch_pump_fun_token(&self, launch: PumpFunLaunch) -> SdkResult<LaunchedToken> {
        self.kit.launches.lock().unwrap().push(launch);
        if let Some(message) = &self.kit.failure {
            return Err(SdkError::Transport(message.clone()));
        }
        Ok(LaunchedToken {
            mint: "mockMintAddress123456789".to_string(),
            metadata_uri: "https://example.com/metadata.json".to_string(),
        })
    }
}

/// Read one HTTP request and return its body.
async fn read_request(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(buf[header_end..].to_vec())
}

/// Start a programmable JSON-RPC backend on an ephemeral port.
///
/// The handler receives the decoded request body and returns a status code
/// and a response body.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let Some(body) = read_request(&mut socket).await else {
                            return;
                        };
                        let request = serde_json::from_slice(&body).unwrap_or(Value::Null);
                        let (status, body) = f(request).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// JSON-RPC success envelope echoing the request id.
pub fn rpc_result(request: &Value, result: Value) -> String {
    serde_json::json!({ "jsonrpc": "2.0", "id": request["id"], "result": result }).to_string()
}

/// JSON-RPC error envelope echoing the request id.
pub fn rpc_error(request: &Value, code: i64, message: &str) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": request["id"],
        "error": { "code": code, "message": message }
    })
    .to_string()
}

/// An address nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
