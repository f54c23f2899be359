//! Retry configuration for page requests.

use std::time::Duration;

use crate::error::ApiError;

/// Configuration for bounded retry of a single page request.
///
/// A page that still fails after the last retry fails the whole load.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use morty_lib::rate_limit::RetryConfig;
///
/// let custom = RetryConfig::default()
///     .max_retries(5)
///     .initial_delay(Duration::from_millis(500));
///
/// let no_retry = RetryConfig::no_retry();
/// assert_eq!(no_retry.max_retries, 0);
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts per page.
    pub max_retries: u32,
    /// Initial delay between retries (doubles each attempt).
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Whether to retry on HTTP 429 (rate limited).
    pub retry_on_429: bool,
    /// Whether to retry on HTTP 5xx (server errors).
    pub retry_on_5xx: bool,
    /// Whether to retry on network errors and timeouts.
    pub retry_on_network: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            retry_on_429: true,
            retry_on_5xx: true,
            retry_on_network: true,
        }
    }
}

impl RetryConfig {
    /// Creates a config with all retries disabled.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            retry_on_429: false,
            retry_on_5xx: false,
            retry_on_network: false,
            ..Default::default()
        }
    }

    /// Sets the maximum number of retries.
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Sets the initial delay between retries.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay between retries.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Enables or disables retry on HTTP 429.
    pub fn retry_on_429(mut self, enabled: bool) -> Self {
        self.retry_on_429 = enabled;
        self
    }

    /// Enables or disables retry on HTTP 5xx.
    pub fn retry_on_5xx(mut self, enabled: bool) -> Self {
        self.retry_on_5xx = enabled;
        self
    }

    /// Enables or disables retry on network errors.
    pub fn retry_on_network(mut self, enabled: bool) -> Self {
        self.retry_on_network = enabled;
        self
    }

    /// Decides whether a failed attempt should be retried.
    ///
    /// `attempts` is the number of retries already made.
    pub fn should_retry(&self, error: &ApiError, attempts: u32) -> bool {
        if attempts >= self.max_retries {
            return false;
        }
        match error {
            ApiError::Http { status: 429, .. } => self.retry_on_429,
            ApiError::Http { status, .. } => self.retry_on_5xx && (500..600).contains(status),
            ApiError::Network(_) | ApiError::Timeout(_) => self.retry_on_network,
            _ => false,
        }
    }

    /// Delay before retry number `attempts` (zero-based), doubling up to `max_delay`.
    pub fn delay_for(&self, attempts: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempts);
        self.initial_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = RetryConfig::default()
            .initial_delay(Duration::from_millis(100))
            .max_delay(Duration::from_millis(350));

        assert_eq!(config.delay_for(0), Duration::from_millis(100));
        assert_eq!(config.delay_for(1), Duration::from_millis(200));
        assert_eq!(config.delay_for(2), Duration::from_millis(350));
        assert_eq!(config.delay_for(40), Duration::from_millis(350));
    }

    #[test]
    fn test_should_retry_respects_limits_and_toggles() {
        let config = RetryConfig::default().max_retries(2).retry_on_429(false);

        assert!(config.should_retry(&ApiError::http(502, "bad gateway"), 0));
        assert!(config.should_retry(&ApiError::http(502, "bad gateway"), 1));
        assert!(!config.should_retry(&ApiError::http(502, "bad gateway"), 2));
        assert!(!config.should_retry(&ApiError::http(429, "slow down"), 0));
        assert!(!config.should_retry(&ApiError::http(404, "missing"), 0));
        assert!(!config.should_retry(&ApiError::parse("bad json"), 0));
    }

    #[test]
    fn test_should_retry_covers_every_server_error() {
        let config = RetryConfig::default();

        for status in [500, 501, 502, 503, 504, 599] {
            assert!(config.should_retry(&ApiError::http(status, "server"), 0));
        }
        assert!(config.should_retry(&ApiError::Timeout(Duration::from_secs(1)), 0));
        assert!(!config.should_retry(&ApiError::http(499, "client"), 0));
        assert!(!config.should_retry(&ApiError::http(600, "odd"), 0));
    }

    #[test]
    fn test_no_retry_never_retries() {
        let config = RetryConfig::no_retry();
        assert!(!config.should_retry(&ApiError::http(503, "down"), 0));
    }
}
