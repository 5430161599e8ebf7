//! SDK-facing signer bound to a caller's wallet for the duration of one call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::sdk::{SdkError, SdkResult};
use crate::wallet::{Pubkey, Signature, SignatureStatus, SvmWalletProvider, Transaction};

/// Receipt returned by `sign_and_send_transaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub signature: Signature,
}

/// Adapts an `SvmWalletProvider` to the signer interface the SDK expects.
#[derive(Clone)]
pub struct KitSigner {
    wallet: Arc<dyn SvmWalletProvider>,
}

impl KitSigner {
    pub fn new(wallet: Arc<dyn SvmWalletProvider>) -> Self {
        Self { wallet }
    }

    pub fn public_key(&self) -> Pubkey {
        self.wallet.public_key()
    }

    /// Sign and submit, returning the bare signature.
    pub async fn send_transaction(&self, tx: Transaction) -> SdkResult<Signature> {
        Ok(self.wallet.sign_and_send_transaction(tx).await?)
    }

    pub async fn sign_transaction(&self, tx: Transaction) -> SdkResult<Transaction> {
        Ok(self.wallet.sign_transaction(tx).await?)
    }

    /// Sign every transaction in order; the first failure aborts the batch.
    pub async fn sign_all_transactions(&self, txs: Vec<Transaction>) -> SdkResult<Vec<Transaction>> {
        let mut signed = Vec::with_capacity(txs.len());
        for tx in txs {
            signed.push(self.wallet.sign_transaction(tx).await?);
        }
        Ok(signed)
    }

    pub async fn sign_and_send_transaction(&self, tx: Transaction) -> SdkResult<SendReceipt> {
        let signature = self.wallet.sign_and_send_transaction(tx).await?;
        Ok(SendReceipt { signature })
    }

    /// The wallet capability has no message signing; bytes come back as-is.
    pub async fn sign_message(&self, message: Vec<u8>) -> SdkResult<Vec<u8>> {
        Ok(message)
    }

    /// Wait for the signature result and turn a runtime error into `Rejected`.
    pub async fn wait_for_confirmation(&self, signature: &Signature) -> SdkResult<SignatureStatus> {
        let status = self.wallet.wait_for_signature_result(signature).await?;
        match &status.err {
            Some(err) => Err(SdkError::Rejected(err.clone())),
            None => Ok(status),
        }
    }
}

impl std::fmt::Debug for KitSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KitSigner")
            .field("wallet", &self.wallet.name())
            .field("public_key", &self.wallet.public_key())
            .finish()
    }
}
