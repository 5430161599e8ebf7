//! Watch-only wallet: an address and a connection, no signing key.

use async_trait::async_trait;

use crate::network::Network;
use crate::wallet::types::{Pubkey, Signature, SignatureStatus, Transaction, WalletError, WalletResult};
use crate::wallet::SvmWalletProvider;

/// Wallet that can identify itself but refuses to sign.
///
/// Enough for query actions, which never build transactions.
#[derive(Debug, Clone)]
pub struct WatchOnlyWallet {
    name: String,
    public_key: Pubkey,
    rpc_endpoint: String,
    network: Network,
}

impl WatchOnlyWallet {
    pub fn new(
        name: impl Into<String>,
        public_key: Pubkey,
        rpc_endpoint: impl Into<String>,
        network: Network,
    ) -> Self {
        let wallet = Self {
            name: name.into(),
            public_key,
            rpc_endpoint: rpc_endpoint.into(),
            network,
        };

        tracing::info!(
            address = %wallet.public_key,
            network = %wallet.network,
            "Watch-only wallet initialized"
        );

        wallet
    }

    /// Build a wallet from a base58 public key string.
    pub fn from_address(
        name: impl Into<String>,
        address: &str,
        rpc_endpoint: impl Into<String>,
        network: Network,
    ) -> WalletResult<Self> {
        let public_key: Pubkey = address.trim().parse()?;
        Ok(Self::new(name, public_key, rpc_endpoint, network))
    }
}

#[async_trait]
impl SvmWalletProvider for WatchOnlyWallet {
    fn name(&self) -> &str {
        &self.name
    }

    fn network(&self) -> Network {
        self.network.clone()
    }

    fn public_key(&self) -> Pubkey {
        self.public_key
    }

    fn rpc_endpoint(&self) -> String {
        self.rpc_endpoint.clone()
    }

    async fn sign_transaction(&self, _tx: Transaction) -> WalletResult<Transaction> {
        Err(WalletError::ReadOnly("sign transactions"))
    }

    async fn sign_and_send_transaction(&self, _tx: Transaction) -> WalletResult<Signature> {
        Err(WalletError::ReadOnly("send transactions"))
    }

    async fn wait_for_signature_result(&self, _signature: &Signature) -> WalletResult<SignatureStatus> {
        Err(WalletError::ReadOnly("track signatures"))
    }
}
