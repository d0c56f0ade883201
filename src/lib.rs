//! Algorand Account Reputation Analyser
//!
//! Scores accounts from their on-chain activity with transparent heuristics:
//! per-transaction points weighted by recency, an activity frequency term, an
//! inactivity penalty, a counterparty diversity bonus and an asset holding
//! contribution, normalised onto a 0-100 scale.

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod reports;
pub mod reputation;
pub mod types;
pub mod utils;
