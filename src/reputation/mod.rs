//! Reputation scoring module
//!
//! Heuristic, explainable scoring of Algorand accounts:
//! - **TransactionScorer** - Per-transaction points, recency weight, frequency and decay terms
//! - **PatternAnalyser** - Whole-set statistics and the receiver diversity bonus
//! - **ReputationEngine** - Fetches account data and assembles raw, normalised and detailed scores
//! - **BatchAnalyser** - Multi-account scoring, ranking, export and insights

pub mod batch;
pub mod engine;
pub mod patterns;
pub mod transaction_scorer;

// Re-export main types
pub use batch::{rank_results, summarise_insights, BatchAnalyser, HIGH_SCORE_THRESHOLD};
pub use engine::{ReputationEngine, DEFAULT_TRANSACTION_LIMIT};
pub use patterns::PatternAnalyser;
pub use transaction_scorer::TransactionScorer;
