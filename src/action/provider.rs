//! The action provider interface.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::action::{ActionDefinition, ActionError, ActionOutput};
use crate::network::Network;
use crate::wallet::SvmWalletProvider;

/// A named unit exposing schema-validated operations to an agent.
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provider name, used as the prefix of qualified action names.
    fn name(&self) -> &str;

    /// Unqualified definitions of every action this provider exposes.
    fn actions(&self) -> Vec<ActionDefinition>;

    /// Whether the provider can act on `network`.
    fn supports_network(&self, network: &Network) -> bool;

    /// Decode and validate `args` for `action` without running it.
    fn validate(&self, action: &str, args: Value) -> Result<(), ActionError>;

    /// Decode `args` for `action` and run it with `wallet`.
    async fn invoke(
        &self,
        wallet: Arc<dyn SvmWalletProvider>,
        action: &str,
        args: Value,
    ) -> Result<ActionOutput, ActionError>;
}
