//! Common Test Utilities
//!
//! Shared fixtures for scoring tests: a deterministic in-memory data source,
//! checksummed test addresses and timestamp helpers.

#![allow(dead_code)]

use algorand_reputation::client::{encode_address, validate_address, DataSource};
use algorand_reputation::errors::ClientResult;
use algorand_reputation::types::{AssetHolding, AssetTransferFields, PaymentFields, Transaction};
use algorand_reputation::utils::time::now_unix_seconds;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const DAY: f64 = 86_400.0;

/// Valid, checksummed address derived from a one-byte seed
pub fn test_address(seed: u8) -> String {
    encode_address(&[seed; 32])
}

/// One day ago
pub fn recent_timestamp() -> f64 {
    now_unix_seconds() - DAY
}

/// One year ago
pub fn stale_timestamp() -> f64 {
    now_unix_seconds() - 365.0 * DAY
}

/// Payment with no receiver, so it adds nothing to counterparty diversity
pub fn anonymous_payment(microalgos: u64, round_time: f64) -> Transaction {
    Transaction {
        tx_type: Some("pay".to_string()),
        round_time: Some(round_time),
        payment: Some(PaymentFields {
            amount: microalgos,
            receiver: None,
        }),
        ..Default::default()
    }
}

/// Asset transfer with no receiver
pub fn anonymous_asset_transfer(asset_id: u64, round_time: f64) -> Transaction {
    Transaction {
        tx_type: Some("axfer".to_string()),
        round_time: Some(round_time),
        asset_transfer: Some(AssetTransferFields {
            amount: 1,
            receiver: None,
            asset_id,
        }),
        ..Default::default()
    }
}

#[derive(Debug, Clone, Default)]
struct AccountFixture {
    transactions: Vec<Transaction>,
    holdings: Vec<AssetHolding>,
    balance: Option<f64>,
    delay: Option<Duration>,
}

/// In-memory data source with per-address canned responses
///
/// Addresses go through real checksum validation; unknown but valid
/// addresses behave like empty accounts.
#[derive(Debug, Default)]
pub struct StaticDataSource {
    accounts: HashMap<String, AccountFixture>,
    transaction_fetches: AtomicUsize,
    holding_fetches: AtomicUsize,
}

impl StaticDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(mut self, address: &str, transactions: Vec<Transaction>) -> Self {
        self.account(address).transactions = transactions;
        self
    }

    pub fn with_holdings(mut self, address: &str, holdings: Vec<AssetHolding>) -> Self {
        self.account(address).holdings = holdings;
        self
    }

    pub fn with_balance(mut self, address: &str, balance: f64) -> Self {
        self.account(address).balance = Some(balance);
        self
    }

    /// Delay every fetch for `address`
    pub fn with_delay(mut self, address: &str, delay: Duration) -> Self {
        self.account(address).delay = Some(delay);
        self
    }

    pub fn transaction_fetches(&self) -> usize {
        self.transaction_fetches.load(Ordering::SeqCst)
    }

    pub fn holding_fetches(&self) -> usize {
        self.holding_fetches.load(Ordering::SeqCst)
    }

    fn account(&mut self, address: &str) -> &mut AccountFixture {
        self.accounts.entry(address.to_string()).or_default()
    }

    async fn fixture(&self, address: &str) -> AccountFixture {
        let fixture = self.accounts.get(address).cloned().unwrap_or_default();
        if let Some(delay) = fixture.delay {
            tokio::time::sleep(delay).await;
        }
        fixture
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    fn validate_address(&self, address: &str) -> ClientResult<String> {
        validate_address(address)
    }

    async fn fetch_account_balance(&self, address: &str) -> Option<f64> {
        self.fixture(address).await.balance
    }

    async fn fetch_transactions(&self, address: &str, limit: usize) -> Vec<Transaction> {
        self.transaction_fetches.fetch_add(1, Ordering::SeqCst);
        let mut transactions = self.fixture(address).await.transactions;
        transactions.truncate(limit);
        transactions
    }

    async fn fetch_asa_holdings(&self, address: &str) -> Vec<AssetHolding> {
        self.holding_fetches.fetch_add(1, Ordering::SeqCst);
        self.fixture(address).await.holdings
    }
}
