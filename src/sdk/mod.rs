//! Boundary to the external Solana agent SDK.
//!
//! # Data Flow
//! ```text
//! action call
//!     → KitSigner::new(wallet)          (signer.rs)
//!     → *PluginFactory::connect(...)    one ephemeral SDK instance per call
//!     → NftPlugin / TokenPlugin method  (nft.rs, token.rs)
//!     → DTO result or SdkError
//! ```
//!
//! The SDK itself is external. `ReadOnlyKit` (read_only.rs) is the bundled
//! implementation: it serves the DAS read API through `DasClient` (das.rs)
//! and rejects anything that needs transaction building.

pub mod das;
pub mod nft;
pub mod read_only;
pub mod signer;
pub mod token;

use async_trait::async_trait;
use thiserror::Error;

use crate::wallet::WalletError;

pub use das::DasClient;
pub use nft::NftPlugin;
pub use read_only::ReadOnlyKit;
pub use signer::{KitSigner, SendReceipt};
pub use token::TokenPlugin;

/// Errors surfaced by the SDK boundary.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The wallet refused or failed an operation.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// JSON-RPC error object returned by the node.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Connection or HTTP-level failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request exceeded the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Response could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The SDK instance cannot perform this operation.
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),

    /// A submitted transaction was rejected by the cluster.
    #[error("Transaction rejected: {0}")]
    Rejected(String),
}

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Per-instance SDK options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KitOptions {
    /// Only sign transactions, leave submission to the caller.
    pub sign_only: bool,
}

/// Creates an NFT plugin instance bound to one signer.
#[async_trait]
pub trait NftPluginFactory: Send + Sync {
    async fn connect(
        &self,
        signer: KitSigner,
        rpc_endpoint: &str,
        options: KitOptions,
    ) -> SdkResult<Box<dyn NftPlugin>>;
}

/// Creates a token plugin instance bound to one signer.
#[async_trait]
pub trait TokenPluginFactory: Send + Sync {
    async fn connect(
        &self,
        signer: KitSigner,
        rpc_endpoint: &str,
        options: KitOptions,
    ) -> SdkResult<Box<dyn TokenPlugin>>;
}
