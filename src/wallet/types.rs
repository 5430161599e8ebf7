//! Solana key, signature and transaction types and wallet error definitions.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur inside a wallet capability.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// The wallet cannot sign or send.
    #[error("Wallet is read-only: cannot {0}")]
    ReadOnly(&'static str),

    /// Signing was refused or failed.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The signed transaction could not be submitted.
    #[error("Transaction submission failed: {0}")]
    Submission(String),

    /// Waiting for the signature result failed.
    #[error("Confirmation failed: {0}")]
    Confirmation(String),

    /// A key or signature string could not be decoded.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

fn decode_base58<const N: usize>(s: &str, what: &str) -> WalletResult<[u8; N]> {
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|e| WalletError::InvalidKey(format!("{} '{}' is not base58: {}", what, s, e)))?;
    bytes.try_into().map_err(|v: Vec<u8>| {
        WalletError::InvalidKey(format!(
            "{} '{}' decodes to {} bytes, expected {}",
            what,
            s,
            v.len(),
            N
        ))
    })
}

/// A 32-byte Solana account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for Pubkey {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_base58::<32>(s, "Public key").map(Self)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}

impl Serialize for Pubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pubkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A 64-byte ed25519 transaction signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; 64]);

impl Signature {
    pub const fn new(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl FromStr for Signature {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_base58::<64>(s, "Signature").map(Self)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A serialized (versioned) transaction.
///
/// Opaque to this crate: built by the SDK, signed and sent by the wallet.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Transaction(Vec<u8>);

impl Transaction {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Base64 wire encoding, as accepted by `sendTransaction`.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }

    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        BASE64.decode(encoded).map(Self)
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transaction({} bytes)", self.0.len())
    }
}

impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

/// Outcome of a submitted transaction once the cluster has processed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureStatus {
    /// Slot the transaction landed in.
    pub slot: u64,
    /// Error reported by the runtime, if the transaction failed.
    pub err: Option<String>,
}

impl SignatureStatus {
    pub fn is_success(&self) -> bool {
        self.err.is_none()
    }
}
