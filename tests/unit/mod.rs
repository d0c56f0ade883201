//! Unit Tests Module
//!
//! Scoring behaviour exercised through the public API against an in-memory
//! data source.

pub mod batch;
