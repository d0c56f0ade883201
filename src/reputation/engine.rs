//! Account-level reputation scoring
//!
//! The engine is stateless apart from its configuration: every call fetches
//! fresh data from the source and recomputes, so repeated calls against an
//! unchanged source return identical results.

use crate::client::DataSource;
use crate::config::ScoringConfig;
use crate::errors::AppResult;
use crate::reputation::patterns::PatternAnalyser;
use crate::reputation::transaction_scorer::TransactionScorer;
use crate::types::{AccountAnalysis, AssetHolding, ScoreBreakdown, ScoreComponents, Transaction};
use crate::utils::math::round2;
use crate::utils::time::now_unix_seconds;
use tracing::debug;

pub const DEFAULT_TRANSACTION_LIMIT: usize = 1000;

/// Scores accounts using a data source and a scoring configuration
#[derive(Debug)]
pub struct ReputationEngine<D> {
    source: D,
    config: ScoringConfig,
    transaction_limit: usize,
}

impl<D: DataSource> ReputationEngine<D> {
    pub fn new(source: D, config: ScoringConfig) -> Self {
        Self {
            source,
            config,
            transaction_limit: DEFAULT_TRANSACTION_LIMIT,
        }
    }

    /// Number of transactions requested per account
    pub fn with_transaction_limit(mut self, limit: usize) -> Self {
        self.transaction_limit = limit;
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn transaction_limit(&self) -> usize {
        self.transaction_limit
    }

    /// Raw (unnormalised) score from transactions alone
    ///
    /// An account without transactions scores exactly `0.0`; holdings are
    /// not considered here.
    pub async fn calculate_reputation(&self, address: &str) -> AppResult<f64> {
        let address = self.source.validate_address(address)?;
        Ok(self.raw_transaction_score(&address).await)
    }

    /// Normalised score including asset holdings
    ///
    /// Holdings are added even when the account has no transactions.
    pub async fn get_reputation_score(&self, address: &str) -> AppResult<f64> {
        let address = self.source.validate_address(address)?;
        let mut raw = self.raw_transaction_score(&address).await;
        let holdings = self.source.fetch_asa_holdings(&address).await;
        raw += self.holding_score(&holdings);
        Ok(self.normalize_score(raw))
    }

    /// Full breakdown of an account's score
    ///
    /// Accounts without transactions get an all-zero breakdown; only the
    /// holding count is reported.
    pub async fn get_detailed_reputation(&self, address: &str) -> AppResult<ScoreBreakdown> {
        let address = self.source.validate_address(address)?;
        let transactions = self
            .source
            .fetch_transactions(&address, self.transaction_limit)
            .await;
        let holdings = self.source.fetch_asa_holdings(&address).await;

        if transactions.is_empty() {
            debug!("No transactions for {}, reporting empty breakdown", address);
            return Ok(ScoreBreakdown::empty(holdings.len()));
        }

        let now = now_unix_seconds();
        let mut breakdown = self.transaction_components(&transactions, now);
        breakdown.asa_holding_score = self.holding_score(&holdings);
        let raw_score = breakdown.total();

        let patterns = PatternAnalyser::new(&self.config).analyse(&transactions);
        let analysis = AccountAnalysis {
            total_transactions: transactions.len(),
            unique_receivers: patterns.unique_receivers,
            total_volume: patterns.total_volume,
            avg_transaction_size: patterns.avg_transaction_size,
            transaction_types: patterns.transaction_types,
            asa_holdings_count: holdings.len(),
        };

        debug!(
            "Scored {}: raw {:.4} (transactions {:.4}, frequency {}, decay {}, holdings {:.4}, patterns {:.4})",
            address,
            raw_score,
            breakdown.transaction_score,
            breakdown.frequency_score,
            breakdown.decay_score,
            breakdown.asa_holding_score,
            breakdown.pattern_bonuses
        );

        Ok(ScoreBreakdown {
            reputation_score: self.normalize_score(raw_score),
            raw_score,
            breakdown,
            analysis,
        })
    }

    /// Map a raw score onto the 0-100 scale
    ///
    /// Capped at 100 and rounded to two decimals; there is no lower clamp,
    /// so negative raw scores stay negative. A non-positive
    /// `normalization_cap` maps everything to `0.0`.
    pub fn normalize_score(&self, raw: f64) -> f64 {
        let cap = self.config.normalization_cap;
        if cap <= 0.0 {
            return 0.0;
        }
        round2((raw / cap * 100.0).min(100.0))
    }

    /// Holding contribution: display amount times `asa_holding_multiplier`, summed
    pub fn holding_score(&self, holdings: &[AssetHolding]) -> f64 {
        holdings
            .iter()
            .map(|holding| holding.display_amount() * self.config.asa_holding_multiplier)
            .sum()
    }

    async fn raw_transaction_score(&self, address: &str) -> f64 {
        let transactions = self
            .source
            .fetch_transactions(address, self.transaction_limit)
            .await;
        if transactions.is_empty() {
            return 0.0;
        }
        self.transaction_components(&transactions, now_unix_seconds())
            .total()
    }

    /// Every component except holdings, for a non-empty transaction set
    fn transaction_components(&self, transactions: &[Transaction], now: f64) -> ScoreComponents {
        let scorer = TransactionScorer::new(&self.config);
        let patterns = PatternAnalyser::new(&self.config).analyse(transactions);

        let transaction_score = transactions
            .iter()
            .map(|txn| scorer.score_at(txn, now))
            .sum();
        let last_timestamp = transactions
            .iter()
            .map(Transaction::timestamp)
            .filter(|ts| *ts != 0.0)
            .fold(0.0, f64::max);

        ScoreComponents {
            transaction_score,
            frequency_score: scorer.frequency_score(transactions.len()),
            decay_score: scorer.decay_at(last_timestamp, now),
            asa_holding_score: 0.0,
            pattern_bonuses: patterns.receiver_diversity_score,
        }
    }
}
