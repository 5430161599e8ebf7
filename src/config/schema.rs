//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files. Every
//! section has defaults so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::network::{Network, SOLANA_MAINNET, SVM_PROTOCOL_FAMILY};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Target network and RPC connection.
    pub network: NetworkConfig,

    /// Wallet identity used by the CLI.
    pub wallet: WalletConfig,

    /// Which action providers to register.
    pub providers: ProvidersConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Network and RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Protocol family (e.g. "svm").
    pub protocol_family: String,

    /// Network identifier (e.g. "solana-mainnet").
    pub network_id: String,

    /// JSON-RPC endpoint URL, also serving the DAS API.
    pub rpc_url: String,

    /// Failover endpoint URLs, tried in order.
    pub failover_urls: Vec<String>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl NetworkConfig {
    pub fn network(&self) -> Network {
        Network::new(self.protocol_family.clone(), self.network_id.clone())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            protocol_family: SVM_PROTOCOL_FAMILY.to_string(),
            network_id: SOLANA_MAINNET.to_string(),
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            failover_urls: Vec::new(),
            rpc_timeout_secs: 10,
        }
    }
}

/// Wallet identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WalletConfig {
    /// Base58 public key of the watched wallet.
    pub public_key: Option<String>,

    /// Display name of the wallet.
    pub name: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            public_key: None,
            name: "watch-only".to_string(),
        }
    }
}

/// Provider toggles.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProvidersConfig {
    pub metaplex: bool,
    pub pumpfun: bool,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            metaplex: true,
            pumpfun: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,

    /// Record invocation metrics.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: true,
        }
    }
}
