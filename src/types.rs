//! Algorand Reputation - Type System
//!
//! - `transaction`: Wire types returned by the ledger node and indexer
//!   (`Transaction`, `AssetHolding`, `AccountInfo`)
//! - `reputation`: Scoring results (`ScoreBreakdown`, `PatternAnalysis`) and
//!   batch/comparison outputs (`AccountComparison`, `ReputationInsights`)

pub mod reputation;
pub mod transaction;

pub use reputation::{
    AccountAnalysis, AccountComparison, BatchEntry, BatchFailure, BatchResults,
    ComparisonSummary, PatternAnalysis, RankingEntry, ReputationInsights, ScoreBreakdown,
    ScoreComponents, ScoreDistribution, TypeCounts,
};
pub use transaction::{
    AccountInfo, AssetHolding, AssetTransferFields, PaymentFields, Transaction, TxKind,
};
