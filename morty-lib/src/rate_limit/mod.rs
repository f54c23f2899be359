//! Retry configuration.

mod retry;

pub use retry::RetryConfig;
