//! Algorand data access module
//!
//! This module provides everything the scorer needs from the network:
//! - **Source** - The `DataSource` capability trait consumed by the engine
//! - **Algorand** - Async algod + indexer client implementing `DataSource`
//! - **Address** - Address normalisation and checksum validation
//! - **Network** - Named network profiles (mainnet/testnet endpoints)
//! - **Retry** - Exponential backoff with optional jitter
//! - **Throttle** - Minimum-interval client-side rate limiter

pub mod address;
pub mod algorand;
pub mod network;
pub mod retry;
pub mod source;
pub mod throttle;

// Re-export main types
pub use address::{encode_address, normalize_address, validate_address};
pub use algorand::{clamp_transaction_limit, resolve_api_token, AlgorandClient};
pub use network::{Endpoints, NetworkProfile};
pub use retry::{backoff_delay, RetryPolicy};
pub use source::DataSource;
pub use throttle::RateLimiter;
