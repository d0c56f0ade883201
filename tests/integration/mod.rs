//! Integration Tests Module
//!
//! End-to-end tests covering the HTTP client against mock ledger services and
//! the export pipeline.

pub mod client;
pub mod export;
