//! Async Algorand client over the algod and indexer REST APIs
//!
//! Every request goes through the shared [`RateLimiter`] and is retried with
//! exponential backoff on transport and status failures. The `DataSource`
//! implementation converts any remaining failure into an empty result and a
//! warning log.

use crate::client::address;
use crate::client::network::{Endpoints, NetworkProfile};
use crate::client::retry::RetryPolicy;
use crate::client::source::DataSource;
use crate::client::throttle::RateLimiter;
use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use crate::types::{AccountInfo, AssetHolding, Transaction};
use crate::utils::currency::microalgos_to_algos;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::env;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Sent as `X-API-Key`; header names are case-insensitive on the wire
pub const API_KEY_HEADER: &str = "x-api-key";
pub const MAX_TRANSACTION_LIMIT: usize = 10_000;

#[derive(Debug, Deserialize)]
struct TransactionsResponse {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
struct AssetsResponse {
    #[serde(default)]
    assets: Vec<AssetHolding>,
}

/// Clamp a requested page size into `[1, 10000]`
pub fn clamp_transaction_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_TRANSACTION_LIMIT)
}

/// Explicit token, else ALGOD_API_KEY, else PURESTAKE_API_KEY; empty values are skipped
pub fn resolve_api_token(explicit: Option<&str>) -> Option<String> {
    explicit
        .map(str::to_string)
        .into_iter()
        .chain(env::var("ALGOD_API_KEY").ok())
        .chain(env::var("PURESTAKE_API_KEY").ok())
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}

/// Algorand ledger node + indexer client
#[derive(Debug)]
pub struct AlgorandClient {
    http: reqwest::Client,
    network: &'static str,
    endpoints: Endpoints,
    retry: RetryPolicy,
    limiter: RateLimiter,
}

impl AlgorandClient {
    /// Create a client for the configured network profile
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let profile = NetworkProfile::resolve(&config.network);
        Self::with_endpoints(config, profile.endpoints())
    }

    /// Create a client against explicit endpoints, keeping the configured network name
    pub fn with_endpoints(config: &ClientConfig, endpoints: Endpoints) -> ClientResult<Self> {
        let token =
            resolve_api_token(config.api_token.as_deref()).ok_or(ClientError::MissingCredential)?;

        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&token).map_err(|e| {
            ClientError::Config(format!("API token is not a valid header value: {}", e))
        })?;
        headers.insert(API_KEY_HEADER, value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let network = NetworkProfile::resolve(&config.network).name;
        info!(
            "Algorand client ready for {} (algod: {}, indexer: {})",
            network, endpoints.algod, endpoints.indexer
        );

        Ok(Self {
            http,
            network,
            endpoints,
            retry: RetryPolicy::from_config(config),
            limiter: RateLimiter::new(config.rate_limit_per_sec),
        })
    }

    /// Resolved network name (mainnet/testnet)
    pub fn network(&self) -> &str {
        self.network
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Account record from algod
    pub async fn account_info(&self, address: &str) -> ClientResult<AccountInfo> {
        let address = address::validate_address(address)?;
        let url = format!("{}/v2/accounts/{}", self.endpoints.algod, address);
        let query: Vec<(&str, String)> = Vec::new();
        self.with_retry("account_info", || self.get_json(&url, &query))
            .await
    }

    /// Transactions involving the address from the indexer
    pub async fn search_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> ClientResult<Vec<Transaction>> {
        let address = address::validate_address(address)?;
        let url = format!("{}/v2/transactions", self.endpoints.indexer);
        let query = vec![
            ("address", address),
            ("limit", clamp_transaction_limit(limit).to_string()),
        ];
        let response: TransactionsResponse = self
            .with_retry("search_transactions", || self.get_json(&url, &query))
            .await?;
        Ok(response.transactions)
    }

    /// Asset holdings of the address from the indexer
    pub async fn lookup_account_assets(&self, address: &str) -> ClientResult<Vec<AssetHolding>> {
        let address = address::validate_address(address)?;
        let url = format!("{}/v2/accounts/{}/assets", self.endpoints.indexer, address);
        let query: Vec<(&str, String)> = Vec::new();
        let response: AssetsResponse = self
            .with_retry("lookup_account_assets", || self.get_json(&url, &query))
            .await?;
        Ok(response.assets)
    }

    /// Run `call` until it succeeds, a non-retryable error occurs, or retries run out
    pub async fn with_retry<T, F, Fut>(&self, operation: &str, mut call: F) -> ClientResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let mut attempt: u32 = 0;
        loop {
            self.limiter.throttle().await;
            match call().await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!("{} succeeded after {} retries", operation, attempt);
                    }
                    return Ok(value);
                }
                Err(e) => {
                    attempt += 1;
                    if !e.is_retryable() || attempt > self.retry.max_retries {
                        return Err(e);
                    }
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        "{} failed (attempt {}/{}), retrying in {:?}: {}",
                        operation,
                        attempt,
                        self.retry.max_retries + 1,
                        delay,
                        e
                    );
                    sleep(delay).await;
                }
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::RequestFailed {
                endpoint: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl DataSource for AlgorandClient {
    fn validate_address(&self, address: &str) -> ClientResult<String> {
        address::validate_address(address)
    }

    async fn fetch_account_balance(&self, address: &str) -> Option<f64> {
        match self.account_info(address).await {
            Ok(info) => Some(microalgos_to_algos(info.amount)),
            Err(e) => {
                warn!("Error fetching account balance for {}: {}", address, e);
                None
            }
        }
    }

    async fn fetch_transactions(&self, address: &str, limit: usize) -> Vec<Transaction> {
        match self.search_transactions(address, limit).await {
            Ok(transactions) => {
                debug!("Fetched {} transactions for {}", transactions.len(), address);
                transactions
            }
            Err(e) => {
                warn!("Error fetching transactions for {}: {}", address, e);
                Vec::new()
            }
        }
    }

    async fn fetch_asa_holdings(&self, address: &str) -> Vec<AssetHolding> {
        match self.lookup_account_assets(address).await {
            Ok(holdings) => holdings,
            Err(e) => {
                warn!("Error fetching ASA holdings for {}: {}", address, e);
                Vec::new()
            }
        }
    }
}
