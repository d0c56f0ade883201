use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub scoring: ScoringConfig,
    pub batch: BatchConfig,
}

/// Ledger node / indexer client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Network profile name ("mainnet" or "testnet"; anything else resolves to testnet)
    pub network: String,
    /// API token; falls back to ALGOD_API_KEY then PURESTAKE_API_KEY
    pub api_token: Option<String>,
    /// Client-side cap on outbound requests per second
    pub rate_limit_per_sec: Option<f64>,
    /// Retries after the first attempt fails
    pub max_retries: u32,
    /// Base backoff delay in seconds, doubled per attempt
    pub backoff_factor: f64,
    /// Add uniform jitter in [0, delay/2] to each backoff
    pub enable_jitter: bool,
    pub timeout_seconds: u64,
    /// Maximum number of transactions fetched per account
    pub transaction_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: "testnet".to_string(),
            api_token: None,
            rate_limit_per_sec: None,
            max_retries: 3,
            backoff_factor: 0.5,
            enable_jitter: false,
            timeout_seconds: 30,
            transaction_limit: 1000,
        }
    }
}

/// Weights and thresholds of the reputation heuristic
///
/// Every field is independently overridable; omitted fields keep their
/// defaults. The value is immutable once handed to the engine and may be
/// shared freely between concurrent scoring calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Recency multiplier for transactions younger than six months
    pub recent_weight: f64,
    /// Recency multiplier for older (or undated) transactions
    pub stale_weight: f64,
    pub pay_txn_multiplier: f64,
    pub asset_transfer_points: f64,
    /// Flat points per application call; never recency weighted
    pub app_call_points: f64,
    pub asset_config_points: f64,
    pub asset_freeze_points: f64,
    pub keyreg_points: f64,
    /// Transaction count above which activity is penalised instead of rewarded
    pub high_frequency_penalty_threshold: usize,
    pub high_frequency_penalty: f64,
    pub normal_activity_reward: f64,
    pub inactivity_penalty: f64,
    /// Points per display unit of each asset holding
    pub asa_holding_multiplier: f64,
    /// Raw score that maps to 100; values <= 0 make every normalised score 0
    pub normalization_cap: f64,
    /// Multiplier applied to payments at or above `large_transaction_threshold`
    pub large_transaction_bonus: f64,
    /// Payment size (display units) that earns the large transaction bonus
    pub large_transaction_threshold: f64,
    /// Maximum pattern bonus for counterparty diversity
    pub receiver_diversity_bonus: f64,
    /// Unique receivers needed for the full diversity bonus
    pub min_unique_receivers: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            recent_weight: 10.0,
            stale_weight: 5.0,
            pay_txn_multiplier: 1.0,
            asset_transfer_points: 10.0,
            app_call_points: 20.0,
            asset_config_points: 15.0,
            asset_freeze_points: 5.0,
            keyreg_points: 25.0,
            high_frequency_penalty_threshold: 1000,
            high_frequency_penalty: -10.0,
            normal_activity_reward: 10.0,
            inactivity_penalty: -10.0,
            asa_holding_multiplier: 0.1,
            normalization_cap: 100.0,
            large_transaction_bonus: 1.5,
            large_transaction_threshold: 10.0,
            receiver_diversity_bonus: 5.0,
            min_unique_receivers: 3,
        }
    }
}

/// Batch analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Accounts scored concurrently; 1 processes addresses strictly one at a time
    pub concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // ALGOREP_CLIENT__NETWORK, ALGOREP_SCORING__RECENT_WEIGHT, ...
            .add_source(
                Environment::with_prefix("ALGOREP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;
        app_config.client.apply_env_overrides();
        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::debug!("Falling back to built-in configuration: {}", e);
            let mut config = Self::default();
            config.client.apply_env_overrides();
            config
        })
    }
}

impl ClientConfig {
    /// Apply the flat ALGOREP_* overrides; unparsable values are ignored
    pub fn apply_env_overrides(&mut self) {
        if let Some(rate) = env_parse::<f64>("ALGOREP_RATE_LIMIT_PER_SEC") {
            self.rate_limit_per_sec = Some(rate);
        }
        if let Some(retries) = env_parse::<u32>("ALGOREP_MAX_RETRIES") {
            self.max_retries = retries;
        }
        if let Some(backoff) = env_parse::<f64>("ALGOREP_BACKOFF_FACTOR") {
            self.backoff_factor = backoff;
        }
        if let Ok(jitter) = env::var("ALGOREP_RETRY_JITTER") {
            self.enable_jitter = matches!(
                jitter.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
