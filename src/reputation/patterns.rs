//! Transaction set pattern analysis

use crate::config::ScoringConfig;
use crate::types::{PatternAnalysis, Transaction, TxKind, TypeCounts};
use std::collections::HashSet;

/// Derives whole-set statistics and the diversity bonus
#[derive(Debug, Clone, Copy)]
pub struct PatternAnalyser<'a> {
    config: &'a ScoringConfig,
}

impl<'a> PatternAnalyser<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    pub fn analyse(&self, transactions: &[Transaction]) -> PatternAnalysis {
        if transactions.is_empty() {
            return PatternAnalysis::default();
        }

        let mut receivers: HashSet<&str> = HashSet::new();
        let mut total_volume = 0.0;
        let mut transaction_types = TypeCounts::default();

        for txn in transactions {
            transaction_types.add(txn.type_label(), 1);

            if let Some(receiver) = txn.receiver() {
                receivers.insert(receiver);
                // axfer counterparties count towards diversity but not volume
                if txn.kind() == TxKind::Payment {
                    total_volume += txn.payment_amount();
                }
            }
        }

        PatternAnalysis {
            unique_receivers: receivers.len(),
            total_volume,
            avg_transaction_size: total_volume / transactions.len() as f64,
            transaction_types,
            receiver_diversity_score: self.diversity_score(receivers.len()),
        }
    }

    /// `min(unique / min_unique_receivers, 1) * receiver_diversity_bonus`
    ///
    /// A zero requirement awards the full bonus.
    pub fn diversity_score(&self, unique_receivers: usize) -> f64 {
        let ratio = unique_receivers as f64 / self.config.min_unique_receivers as f64;
        ratio.min(1.0) * self.config.receiver_diversity_bonus
    }
}
