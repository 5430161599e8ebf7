//! svm-actions CLI
//!
//! Lists, describes, validates and runs actions against a watch-only wallet.
//!
//! # Architecture Overview
//!
//! ```text
//!     svm-actions invoke metaplex_get_asset --args '{"assetId": "..."}'
//!         │
//!         ▼
//!     config (TOML + env) ──▶ WatchOnlyWallet ──▶ ActionRegistry
//!                                                     │
//!                         ┌───────────────────────────┴───────────┐
//!                         ▼                                       ▼
//!              MetaplexActionProvider                  PumpfunActionProvider
//!                         │                                       │
//!                         └──────────────▶ ReadOnlyKit ◀──────────┘
//!                                             │
//!                                             ▼
//!                                     DAS JSON-RPC endpoint
//! ```

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

use svm_actions::config::{load_config, load_default, AppConfig};
use svm_actions::observability::logging::init_logging;
use svm_actions::sdk::ReadOnlyKit;
use svm_actions::wallet::{Pubkey, WatchOnlyWallet};
use svm_actions::{ActionRegistry, MetaplexActionProvider, PumpfunActionProvider};

#[derive(Parser)]
#[command(name = "svm-actions")]
#[command(about = "Metaplex and pump.fun actions for Solana agents", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults plus environment when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List actions available on the configured network
    Actions,
    /// Print the description and argument schema of an action
    Schema { action: String },
    /// Check arguments without running the action
    Validate {
        action: String,
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
    /// Run an action with the configured watch-only wallet
    Invoke {
        action: String,
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_default()?,
    };
    init_logging(&config.observability)?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "svm-actions starting");

    let requires_key = matches!(cli.command, Commands::Invoke { .. });
    let registry = build_registry(&config, requires_key)?;

    match cli.command {
        Commands::Actions => {
            let names: Vec<String> = registry.actions().into_iter().map(|a| a.name).collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        Commands::Schema { action } => match registry.definition(&action) {
            Some(definition) => println!("{}", serde_json::to_string_pretty(&definition)?),
            None => return Err(format!("Unknown action: {}", action).into()),
        },
        Commands::Validate { action, args } => {
            registry.validate(&action, parse_json(&args)?)?;
            println!("Arguments for {} are valid", action);
        }
        Commands::Invoke { action, args } => {
            let output = registry.invoke(&action, parse_json(&args)?).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

fn build_registry(
    config: &AppConfig,
    requires_key: bool,
) -> Result<ActionRegistry, Box<dyn std::error::Error>> {
    let network = config.network.network();

    let wallet = match &config.wallet.public_key {
        Some(address) => WatchOnlyWallet::from_address(
            config.wallet.name.clone(),
            address,
            config.network.rpc_url.clone(),
            network,
        )?,
        None if requires_key => {
            return Err("wallet.public_key (or SVM_ACTIONS_PUBLIC_KEY) is required to invoke actions".into())
        }
        // Listing and validation never touch the wallet.
        None => WatchOnlyWallet::new(
            config.wallet.name.clone(),
            Pubkey::new([0u8; 32]),
            config.network.rpc_url.clone(),
            network,
        ),
    };

    let kit = ReadOnlyKit::new(
        config.network.failover_urls.clone(),
        config.network.rpc_timeout_secs,
    );

    let mut registry =
        ActionRegistry::new(Arc::new(wallet)).with_metrics(config.observability.metrics_enabled);
    if config.providers.metaplex {
        registry = registry.with_provider(MetaplexActionProvider::new(kit.clone()));
    }
    if config.providers.pumpfun {
        registry = registry.with_provider(PumpfunActionProvider::new(kit));
    }

    Ok(registry)
}

fn parse_json(args: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(args)
}
