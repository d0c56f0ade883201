//! Per-transaction scoring and time-based adjustments
//!
//! All functions are pure. The `*_at` variants take the reference time
//! explicitly so a whole account is scored against a single `now`.

use crate::config::ScoringConfig;
use crate::types::{Transaction, TxKind};
use crate::utils::time::{now_unix_seconds, SIX_MONTHS_SECONDS};

/// Scores individual transactions under a scoring configuration
#[derive(Debug, Clone, Copy)]
pub struct TransactionScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> TransactionScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// `recent_weight` when younger than six months at `now`, else `stale_weight`
    ///
    /// An unknown (zero) timestamp is always stale.
    pub fn recency_weight_at(&self, timestamp: f64, now: f64) -> f64 {
        if now - timestamp < SIX_MONTHS_SECONDS {
            self.config.recent_weight
        } else {
            self.config.stale_weight
        }
    }

    pub fn recency_weight(&self, timestamp: f64) -> f64 {
        self.recency_weight_at(timestamp, now_unix_seconds())
    }

    /// Base points of one transaction at `now`
    pub fn score_at(&self, txn: &Transaction, now: f64) -> f64 {
        let config = self.config;
        let weight = self.recency_weight_at(txn.timestamp(), now);

        match txn.kind() {
            TxKind::Payment => {
                let amount = txn.payment_amount();
                let points = amount * weight * config.pay_txn_multiplier;
                if amount >= config.large_transaction_threshold {
                    points * config.large_transaction_bonus
                } else {
                    points
                }
            }
            TxKind::AssetTransfer => config.asset_transfer_points * weight,
            // Contract interaction never decays
            TxKind::ApplicationCall => config.app_call_points,
            TxKind::AssetConfig => config.asset_config_points * weight,
            TxKind::AssetFreeze => config.asset_freeze_points * weight,
            TxKind::KeyRegistration => config.keyreg_points * weight,
            TxKind::Other => 0.0,
        }
    }

    pub fn score(&self, txn: &Transaction) -> f64 {
        self.score_at(txn, now_unix_seconds())
    }

    /// Activity term for an account with `count` transactions
    pub fn frequency_score(&self, count: usize) -> f64 {
        if count > self.config.high_frequency_penalty_threshold {
            self.config.high_frequency_penalty
        } else if count > 0 {
            self.config.normal_activity_reward
        } else {
            0.0
        }
    }

    /// Inactivity penalty given the newest known transaction time
    pub fn decay_at(&self, last_timestamp: f64, now: f64) -> f64 {
        if last_timestamp == 0.0 || now - last_timestamp > SIX_MONTHS_SECONDS {
            self.config.inactivity_penalty
        } else {
            0.0
        }
    }

    pub fn decay(&self, last_timestamp: f64) -> f64 {
        self.decay_at(last_timestamp, now_unix_seconds())
    }
}
