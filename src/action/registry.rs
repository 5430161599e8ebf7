//! Agent-facing registry: one wallet, many providers.

use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::action::{ActionDefinition, ActionError, ActionOutput, ActionProvider};
use crate::observability::metrics;
use crate::wallet::SvmWalletProvider;

/// Exposes the actions of every provider that supports the wallet's network.
#[derive(Clone)]
pub struct ActionRegistry {
    wallet: Arc<dyn SvmWalletProvider>,
    providers: Vec<Arc<dyn ActionProvider>>,
    metrics_enabled: bool,
}

impl ActionRegistry {
    pub fn new(wallet: Arc<dyn SvmWalletProvider>) -> Self {
        Self {
            wallet,
            providers: Vec::new(),
            metrics_enabled: true,
        }
    }

    /// Turn invocation metrics on or off.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    /// Builder-style `register`.
    pub fn with_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.register(Arc::new(provider));
        self
    }

    pub fn register(&mut self, provider: Arc<dyn ActionProvider>) {
        tracing::info!(
            provider = provider.name(),
            actions = provider.actions().len(),
            "Action provider registered"
        );
        self.providers.push(provider);
    }

    pub fn wallet(&self) -> &Arc<dyn SvmWalletProvider> {
        &self.wallet
    }

    /// Qualified definitions (`<provider>_<action>`) usable with this wallet.
    pub fn actions(&self) -> Vec<ActionDefinition> {
        let network = self.wallet.network();
        let mut definitions = Vec::new();

        for provider in &self.providers {
            if !provider.supports_network(&network) {
                tracing::warn!(
                    provider = provider.name(),
                    network = %network,
                    "Action provider does not support the wallet network, skipping its actions"
                );
                continue;
            }

            for action in provider.actions() {
                definitions.push(ActionDefinition {
                    name: qualify(provider.name(), &action.name),
                    ..action
                });
            }
        }

        definitions
    }

    /// Qualified definition of a single action, regardless of network support.
    pub fn definition(&self, qualified: &str) -> Option<ActionDefinition> {
        let (provider, action) = self.resolve(qualified)?;
        provider
            .actions()
            .into_iter()
            .find(|def| def.name == action)
            .map(|def| ActionDefinition {
                name: qualified.to_string(),
                ..def
            })
    }

    /// Check `args` against a qualified action without running it.
    pub fn validate(&self, qualified: &str, args: Value) -> Result<(), ActionError> {
        let (provider, action) = self
            .resolve(qualified)
            .ok_or_else(|| ActionError::UnknownAction(qualified.to_string()))?;
        provider.validate(&action, args)
    }

    /// Run a qualified action with the registry's wallet.
    pub async fn invoke(&self, qualified: &str, args: Value) -> Result<ActionOutput, ActionError> {
        let (provider, action) = self
            .resolve(qualified)
            .ok_or_else(|| ActionError::UnknownAction(qualified.to_string()))?;

        let network = self.wallet.network();
        let span = tracing::info_span!("action", provider = provider.name(), action = %action);
        let started = Instant::now();

        let result = if provider.supports_network(&network) {
            provider
                .invoke(self.wallet.clone(), &action, args)
                .instrument(span)
                .await
        } else {
            Err(ActionError::UnsupportedNetwork {
                provider: provider.name().to_string(),
                network: network.to_string(),
            })
        };

        let outcome = outcome_label(&result);
        if self.metrics_enabled {
            metrics::record_action(qualified, outcome, started);
        }

        match &result {
            Ok(_) => tracing::info!(
                action = qualified,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Action completed"
            ),
            Err(e) => tracing::warn!(action = qualified, error = %e, "Action failed"),
        }

        result
    }

    fn resolve(&self, qualified: &str) -> Option<(&Arc<dyn ActionProvider>, String)> {
        self.providers.iter().find_map(|provider| {
            let action = qualified
                .strip_prefix(provider.name())
                .and_then(|rest| rest.strip_prefix('_'))?;
            provider
                .actions()
                .iter()
                .any(|def| def.name == action)
                .then(|| (provider, action.to_string()))
        })
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("ActionRegistry")
            .field("wallet", &self.wallet.name())
            .field("providers", &names)
            .field("metrics_enabled", &self.metrics_enabled)
            .finish()
    }
}

fn qualify(provider: &str, action: &str) -> String {
    format!("{}_{}", provider, action)
}

/// Value of the `outcome` metric label.
fn outcome_label(result: &Result<ActionOutput, ActionError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(ActionError::InvalidArguments { .. }) => "invalid_arguments",
        Err(ActionError::UnsupportedNetwork { .. }) => "unsupported_network",
        Err(_) => "error",
    }
}
