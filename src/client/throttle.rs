//! Client-side request throttling

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Enforces a minimum interval between outbound requests
///
/// Shared by every request a client makes, including requests issued from
/// concurrent tasks. Without a positive rate the limiter is a no-op.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(rate_limit_per_sec: Option<f64>) -> Self {
        let min_interval = match rate_limit_per_sec {
            Some(rate) if rate > 0.0 && rate.is_finite() => {
                Duration::try_from_secs_f64(1.0 / rate).unwrap_or(Duration::ZERO)
            }
            _ => Duration::ZERO,
        };

        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until the next request is allowed; returns the time slept
    pub async fn throttle(&self) -> Duration {
        if self.min_interval.is_zero() {
            return Duration::ZERO;
        }

        let mut last = self.last_request.lock().await;
        let mut waited = Duration::ZERO;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                waited = self.min_interval - elapsed;
                debug!("Throttling request for {:?}", waited);
                sleep(waited).await;
            }
        }
        *last = Some(Instant::now());
        waited
    }
}
