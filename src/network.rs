//! Network identifiers and the support predicate shared by all providers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Protocol family of Solana-compatible chains.
pub const SVM_PROTOCOL_FAMILY: &str = "svm";

/// Protocol family of EVM chains.
pub const EVM_PROTOCOL_FAMILY: &str = "evm";

pub const SOLANA_MAINNET: &str = "solana-mainnet";
pub const SOLANA_DEVNET: &str = "solana-devnet";
pub const SOLANA_TESTNET: &str = "solana-testnet";

/// A network a wallet is connected to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Protocol family (e.g. "svm", "evm").
    pub protocol_family: String,
    /// Network identifier within the family (e.g. "solana-mainnet").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    /// Chain ID, only meaningful for EVM networks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
}

impl Network {
    pub fn new(protocol_family: impl Into<String>, network_id: impl Into<String>) -> Self {
        Self {
            protocol_family: protocol_family.into(),
            network_id: Some(network_id.into()),
            chain_id: None,
        }
    }

    pub fn solana_mainnet() -> Self {
        Self::new(SVM_PROTOCOL_FAMILY, SOLANA_MAINNET)
    }

    /// True only when both the family and the network id equal the target.
    ///
    /// A network without an id never matches.
    pub fn matches(&self, protocol_family: &str, network_id: &str) -> bool {
        self.protocol_family == protocol_family && self.network_id.as_deref() == Some(network_id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.network_id {
            Some(id) => write!(f, "{}:{}", self.protocol_family, id),
            None => write!(f, "{}", self.protocol_family),
        }
    }
}

/// Error parsing a `family:network-id` string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkParseError {
    #[error("Network string is empty")]
    Empty,

    #[error("Invalid network '{0}': expected <protocol-family>:<network-id>")]
    Malformed(String),
}

impl FromStr for Network {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NetworkParseError::Empty);
        }

        match s.split_once(':') {
            None => Ok(Self {
                protocol_family: s.to_string(),
                network_id: None,
                chain_id: None,
            }),
            Some((family, id)) => {
                if family.is_empty() || id.is_empty() || id.contains(':') {
                    return Err(NetworkParseError::Malformed(s.to_string()));
                }
                Ok(Self::new(family, id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_requires_family_and_id() {
        let mainnet = Network::solana_mainnet();
        assert!(mainnet.matches(SVM_PROTOCOL_FAMILY, SOLANA_MAINNET));
        assert!(!mainnet.matches(SVM_PROTOCOL_FAMILY, SOLANA_DEVNET));
        assert!(!mainnet.matches(EVM_PROTOCOL_FAMILY, SOLANA_MAINNET));

        let bare = Network {
            protocol_family: SVM_PROTOCOL_FAMILY.to_string(),
            network_id: None,
            chain_id: None,
        };
        assert!(!bare.matches(SVM_PROTOCOL_FAMILY, SOLANA_MAINNET));
    }

    #[test]
    fn test_parse_and_display() {
        let network: Network = "svm:solana-devnet".parse().unwrap();
        assert_eq!(network, Network::new("svm", "solana-devnet"));
        assert_eq!(network.to_string(), "svm:solana-devnet");

        let family_only: Network = "evm".parse().unwrap();
        assert_eq!(family_only.network_id, None);
        assert_eq!(family_only.to_string(), "evm");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("".parse::<Network>(), Err(NetworkParseError::Empty));
        assert!(matches!(":solana-mainnet".parse::<Network>(), Err(NetworkParseError::Malformed(_))));
        assert!(matches!("svm:".parse::<Network>(), Err(NetworkParseError::Malformed(_))));
        assert!(matches!("svm:a:b".parse::<Network>(), Err(NetworkParseError::Malformed(_))));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_value(Network::solana_mainnet()).unwrap();
        assert_eq!(json["protocolFamily"], "svm");
        assert_eq!(json["networkId"], "solana-mainnet");
        assert!(json.get("chainId").is_none());

        let parsed: Network =
            serde_json::from_str(r#"{"protocolFamily":"evm","networkId":"base-mainnet","chainId":"8453"}"#)
                .unwrap();
        assert_eq!(parsed.chain_id.as_deref(), Some("8453"));
    }
}
