//! Time utilities for recency weighting and inactivity decay

use chrono::Utc;

/// Freshness window: 30-day months × 6 (15,552,000 seconds)
pub const SIX_MONTHS_SECONDS: f64 = (60 * 60 * 24 * 30 * 6) as f64;

/// Current Unix time in seconds with sub-second precision
pub fn now_unix_seconds() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
