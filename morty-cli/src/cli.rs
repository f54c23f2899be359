//! Command-line arguments.

use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use morty_lib::api::DEFAULT_START_URL;
use morty_lib::rate_limit::RetryConfig;
use morty_lib::table::DEFAULT_PAGE_SIZE;
use simplelog::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "morty")]
#[command(about = "Browse the Rick and Morty character listing as a filterable table", long_about = None)]
#[command(version)]
pub struct Args {
    /// URL of the first listing page
    #[arg(long, value_name = "URL", default_value = DEFAULT_START_URL)]
    pub url: String,

    /// Rows per page on start
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Connection timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub connect_timeout: u64,

    /// Retries per page on transient failures (0 disables retry)
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub retries: u32,

    /// Log level written to the log file (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn retry(&self) -> RetryConfig {
        match self.retries {
            0 => RetryConfig::no_retry(),
            n => RetryConfig::default().max_retries(n),
        }
    }

    /// The requested log level; unrecognised names fall back to `Info`.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["morty"]);
        assert_eq!(args.url, DEFAULT_START_URL);
        assert_eq!(args.page_size, 10);
        assert_eq!(args.retry().max_retries, 3);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_zero_retries_disables_retry() {
        let args = Args::parse_from(["morty", "--retries", "0", "--log-level", "debug"]);
        assert!(!args.retry().retry_on_5xx);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let args = Args::parse_from(["morty", "--log-level", "loud"]);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }
}
