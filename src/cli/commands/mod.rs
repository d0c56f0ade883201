//! Subcommand implementations and shared wiring

pub mod balance;
pub mod compare;
pub mod detail;
pub mod export;
pub mod insights;
pub mod score;

use crate::cli::GlobalArgs;
use crate::client::AlgorandClient;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::reputation::{BatchAnalyser, ReputationEngine};
use std::path::Path;
use tracing::info;

/// Load configuration and apply command-line overrides
fn load_config(global: &GlobalArgs) -> AppConfig {
    let mut config = AppConfig::get_defaults();
    if let Some(network) = &global.network {
        config.client.network = network.clone();
    }
    if let Some(concurrency) = global.concurrency {
        config.batch.concurrency = concurrency;
    }
    config
}

/// Network-backed engine for single-account commands
fn build_engine(config: &AppConfig) -> AppResult<ReputationEngine<AlgorandClient>> {
    let client = AlgorandClient::new(&config.client)?;
    Ok(ReputationEngine::new(client, config.scoring.clone())
        .with_transaction_limit(config.client.transaction_limit))
}

/// Network-backed analyser for multi-account commands
fn build_analyser(config: &AppConfig) -> AppResult<BatchAnalyser<AlgorandClient>> {
    Ok(BatchAnalyser::new(build_engine(config)?).with_concurrency(config.batch.concurrency))
}

/// Write output to file with safe directory creation
fn write_output_to_file(path: &Path, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    info!("{} written to {}", description, path.display());
    println!("{} written to: {}", description, path.display());
    Ok(())
}
