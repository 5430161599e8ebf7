//! Solana action providers for agent toolkits.
//!
//! Thin adapters that expose Metaplex and pump.fun operations as named,
//! schema-validated actions, delegating the blockchain work to an SDK bound
//! to a caller-supplied wallet.

pub mod action;
pub mod config;
pub mod network;
pub mod observability;
pub mod providers;
pub mod sdk;
pub mod wallet;

pub use action::{ActionDefinition, ActionError, ActionOutput, ActionProvider, ActionRegistry};
pub use config::AppConfig;
pub use network::Network;
pub use providers::{MetaplexActionProvider, PumpfunActionProvider};
pub use wallet::SvmWalletProvider;
