//! Bounded exponential backoff for reads that may lag behind a create

use log::debug;
use std::future::Future;
use std::time::Duration;

use crate::config::retry;
use crate::error::Result;

/// Backoff parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub factor: u32,
    pub max_attempts: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_delay: retry::INITIAL_DELAY,
            max_delay: retry::MAX_DELAY,
            factor: retry::FACTOR,
            max_attempts: retry::MAX_ATTEMPTS,
        }
    }
}

impl RetryConfig {
    /// Delay before the attempt following `attempt` (0-indexed), capped at
    /// `max_delay`
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let growth = self.factor.saturating_pow(attempt);
        self.initial_delay
            .saturating_mul(growth)
            .min(self.max_delay)
    }
}

/// Run `operation` until it stops reporting not-found.
///
/// Other errors return immediately. When every attempt reports not-found the
/// last error is returned.
pub async fn retry_not_found<T, F, Fut>(config: &RetryConfig, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = config.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        match operation().await {
            Err(e) if e.is_not_found() && attempt + 1 < attempts => {
                let delay = config.delay_for_attempt(attempt);
                debug!(
                    "Attempt {}/{} not readable yet, retrying in {:?}",
                    attempt + 1,
                    attempts,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            result => return result,
        }
    }
}
