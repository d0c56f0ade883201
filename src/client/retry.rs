//! Retry backoff utilities for client operations
//!
//! Delays grow exponentially from a configurable base factor. Jitter, when
//! enabled, adds a uniform random extra of up to half the base delay so that
//! concurrent callers do not retry in lockstep.

use crate::config::ClientConfig;
use rand::Rng;
use std::time::Duration;

/// Base backoff in seconds before the given retry attempt (1-based)
///
/// Implements `backoff_factor * 2^(attempt - 1)`; attempt 0 is treated as 1.
///
/// # Example
/// ```
/// use algorand_reputation::client::retry::base_backoff_seconds;
///
/// assert_eq!(base_backoff_seconds(0.5, 1), 0.5);
/// assert_eq!(base_backoff_seconds(0.5, 3), 2.0);
/// ```
pub fn base_backoff_seconds(backoff_factor: f64, attempt: u32) -> f64 {
    let exponent = attempt.saturating_sub(1).min(30) as i32;
    (backoff_factor * 2f64.powi(exponent)).max(0.0)
}

/// Backoff duration before the given retry attempt, with optional jitter
pub fn backoff_delay(backoff_factor: f64, attempt: u32, jitter: bool) -> Duration {
    let base = base_backoff_seconds(backoff_factor, attempt);
    let extra = if jitter && base > 0.0 {
        rand::thread_rng().gen_range(0.0..=base / 2.0)
    } else {
        0.0
    };
    Duration::try_from_secs_f64(base + extra).unwrap_or(Duration::ZERO)
}

/// Retry settings captured from the client configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt
    pub max_retries: u32,
    pub backoff_factor: f64,
    pub enable_jitter: bool,
}

impl RetryPolicy {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff_factor: config.backoff_factor,
            enable_jitter: config.enable_jitter,
        }
    }

    /// Delay before retry `attempt` (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        backoff_delay(self.backoff_factor, attempt, self.enable_jitter)
    }
}
