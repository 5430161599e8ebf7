//! Wallet capability handle.
//!
//! # Data Flow
//! ```text
//! Caller-owned wallet (Arc<dyn SvmWalletProvider>)
//!     → sdk::KitSigner (bound for one action call)
//!     → SDK plugin builds a transaction
//!     → wallet signs / sends / waits for the signature result
//! ```
//!
//! # Security Constraints
//! - Adapters never own the wallet, they borrow it for a single call
//! - Only public keys are ever logged

pub mod types;
pub mod watch_only;

use async_trait::async_trait;

use crate::network::Network;

pub use types::{Pubkey, Signature, SignatureStatus, Transaction, WalletError, WalletResult};
pub use watch_only::WatchOnlyWallet;

/// Signing and submission capabilities of a Solana wallet.
#[async_trait]
pub trait SvmWalletProvider: Send + Sync {
    /// Human-readable wallet name.
    fn name(&self) -> &str;

    /// Network the wallet is connected to.
    fn network(&self) -> Network;

    /// The wallet's address.
    fn public_key(&self) -> Pubkey;

    /// RPC endpoint of the wallet's connection.
    fn rpc_endpoint(&self) -> String;

    /// Sign a transaction without submitting it.
    async fn sign_transaction(&self, tx: Transaction) -> WalletResult<Transaction>;

    /// Sign and submit a transaction, returning its signature.
    async fn sign_and_send_transaction(&self, tx: Transaction) -> WalletResult<Signature>;

    /// Wait until the cluster reports a result for `signature`.
    async fn wait_for_signature_result(&self, signature: &Signature) -> WalletResult<SignatureStatus>;
}
