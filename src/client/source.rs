//! Data source capability consumed by the reputation engine

use crate::errors::ClientResult;
use crate::types::{AssetHolding, Transaction};
use async_trait::async_trait;

/// Read access to ledger data for one account at a time
///
/// Fetch operations never fail: transport, status and decoding problems are
/// logged by the implementation and surface as an empty result (or `None`
/// for the balance). Only `validate_address` reports an error, and callers
/// run it before any fetch.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Normalise and check an address, returning the form to fetch with
    fn validate_address(&self, address: &str) -> ClientResult<String> {
        Ok(address.trim().to_string())
    }

    /// Balance in algos
    async fn fetch_account_balance(&self, address: &str) -> Option<f64>;

    /// Up to `limit` of the account's transactions, newest first
    async fn fetch_transactions(&self, address: &str, limit: usize) -> Vec<Transaction>;

    async fn fetch_asa_holdings(&self, address: &str) -> Vec<AssetHolding>;
}

