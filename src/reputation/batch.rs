//! Multi-account scoring, ranking, export and insights

use crate::client::DataSource;
use crate::errors::AppResult;
use crate::reports::ExportFormat;
use crate::reputation::engine::ReputationEngine;
use crate::types::{
    AccountComparison, BatchEntry, BatchResults, ComparisonSummary, RankingEntry,
    ReputationInsights, ScoreDistribution, TypeCounts,
};
use crate::utils::math::safe_percentage;
use futures::stream::{self, StreamExt};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{info, warn};

/// Score at or above which an account counts as high reputation
pub const HIGH_SCORE_THRESHOLD: f64 = 70.0;

/// Runs the engine over many addresses
#[derive(Debug)]
pub struct BatchAnalyser<D> {
    engine: ReputationEngine<D>,
    concurrency: usize,
}

impl<D: DataSource> BatchAnalyser<D> {
    /// Sequential analyser; see [`BatchAnalyser::with_concurrency`]
    pub fn new(engine: ReputationEngine<D>) -> Self {
        Self {
            engine,
            concurrency: 1,
        }
    }

    /// Accounts fetched at the same time (minimum 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn engine(&self) -> &ReputationEngine<D> {
        &self.engine
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Detailed breakdown per address; failures are recorded inline
    ///
    /// Results follow input order. A repeated address is scored once and
    /// keeps its first position.
    pub async fn get_batch_reputation_scores(&self, addresses: &[String]) -> BatchResults {
        let mut seen = HashSet::new();
        let unique: Vec<&String> = addresses
            .iter()
            .filter(|address| seen.insert(address.as_str()))
            .collect();

        info!(
            "Scoring {} accounts ({} in flight)",
            unique.len(),
            self.concurrency
        );

        let outcomes: Vec<(String, BatchEntry)> = stream::iter(unique)
            .map(|address| async move {
                let entry = match self.engine.get_detailed_reputation(address).await {
                    Ok(breakdown) => BatchEntry::Scored(breakdown),
                    Err(e) => {
                        warn!("Failed to score {}: {}", address, e);
                        BatchEntry::failed(e)
                    }
                };
                (address.clone(), entry)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut results = BatchResults::default();
        for (address, entry) in outcomes {
            results.insert(address, entry);
        }
        results
    }

    /// Rank the addresses by score and summarise the valid ones
    pub async fn compare_accounts(&self, addresses: &[String]) -> AccountComparison {
        let results = self.get_batch_reputation_scores(addresses).await;
        rank_results(results, addresses.len())
    }

    /// Comparison rendered as `json` or `csv`
    ///
    /// The format is checked before any account is fetched.
    pub async fn export(&self, addresses: &[String], format: &str) -> AppResult<String> {
        let format: ExportFormat = format.parse()?;
        let comparison = self.compare_accounts(addresses).await;
        format.render(&comparison)
    }

    pub async fn get_reputation_insights(&self, addresses: &[String]) -> ReputationInsights {
        let comparison = self.compare_accounts(addresses).await;
        summarise_insights(&comparison.detailed_results)
    }
}

/// Build a ranking and summary from batch results
///
/// `total_accounts` is the number of addresses supplied, duplicates included.
pub fn rank_results(results: BatchResults, total_accounts: usize) -> AccountComparison {
    let mut valid: Vec<(&str, f64)> = results
        .valid()
        .map(|(address, breakdown)| (address, breakdown.reputation_score))
        .collect();
    // Stable: equal scores keep input order
    valid.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let ranking: Vec<RankingEntry> = valid
        .iter()
        .enumerate()
        .map(|(i, (address, score))| RankingEntry {
            address: address.to_string(),
            score: *score,
            rank: i + 1,
        })
        .collect();

    let summary = ComparisonSummary {
        total_accounts,
        valid_accounts: valid.len(),
        errors: results.len() - valid.len(),
        highest_score: valid.first().map(|(_, s)| *s).unwrap_or(0.0),
        lowest_score: valid.last().map(|(_, s)| *s).unwrap_or(0.0),
        average_score: if valid.is_empty() {
            0.0
        } else {
            valid.iter().map(|(_, s)| s).sum::<f64>() / valid.len() as f64
        },
    };

    AccountComparison {
        ranking,
        summary,
        detailed_results: results,
    }
}

/// Aggregate type counts and score bands across batch results
///
/// Type counts and the high score share cover valid accounts only; the score
/// distribution covers every entry, so failures land in `poor`.
pub fn summarise_insights(results: &BatchResults) -> ReputationInsights {
    let mut type_totals = TypeCounts::default();
    let mut analysed = 0;
    let mut high_scores = 0;

    for (_, breakdown) in results.valid() {
        analysed += 1;
        if breakdown.reputation_score >= HIGH_SCORE_THRESHOLD {
            high_scores += 1;
        }
        for (tx_type, count) in &breakdown.analysis.transaction_types {
            type_totals.add(tx_type, *count);
        }
    }

    let most_common_txn_type = type_totals.most_common().map(str::to_string);

    let mut score_distribution = ScoreDistribution::default();
    for (_, entry) in results.iter() {
        let score = entry.reputation_score();
        if score >= 90.0 {
            score_distribution.excellent += 1;
        } else if score >= 70.0 {
            score_distribution.good += 1;
        } else if score >= 50.0 {
            score_distribution.fair += 1;
        } else {
            score_distribution.poor += 1;
        }
    }

    ReputationInsights {
        total_accounts_analyzed: analysed,
        high_score_accounts: high_scores,
        high_score_percentage: safe_percentage(high_scores, analysed),
        transaction_type_distribution: type_totals,
        most_common_txn_type,
        score_distribution,
    }
}
