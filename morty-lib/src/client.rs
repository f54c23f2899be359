//! HTTP client for the character listing endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use reqwest::header::RETRY_AFTER;
use url::Url;

use crate::api;
use crate::api::Page;
use crate::api::PageSource;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Records;
use crate::rate_limit::RetryConfig;

/// Client for the paginated character listing.
///
/// Cheap to clone (uses `Arc` internally).
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use morty_lib::CharacterClient;
///
/// let client = CharacterClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let records = client.load_all().await?;
/// ```
#[derive(Clone)]
pub struct CharacterClient {
    inner: Arc<CharacterClientInner>,
}

struct CharacterClientInner {
    start_url: String,
    http_client: Client,
    timeout: Option<Duration>,
    retry: RetryConfig,
}

impl CharacterClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> CharacterClientBuilder {
        CharacterClientBuilder::new()
    }

    /// Returns the URL of the first listing page.
    pub fn start_url(&self) -> &str {
        &self.inner.start_url
    }

    /// Returns the retry configuration.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.inner.retry
    }

    /// Loads every page of the listing, starting at [`start_url`](Self::start_url).
    pub async fn load_all(&self) -> Result<Records, Error> {
        api::load_all(self, &self.inner.start_url).await
    }

    /// Makes a GET request for one page, retrying transient failures.
    async fn request(&self, url: &Url) -> Result<Page, ApiError> {
        let retry = &self.inner.retry;
        let mut attempts = 0;

        loop {
            let result = self.send_request_inner(url).await;

            match result {
                Ok(page) => return Ok(page),
                Err((error, retry_after)) => {
                    if !retry.should_retry(&error, attempts) {
                        return Err(error);
                    }
                    let wait = retry_after.unwrap_or_else(|| retry.delay_for(attempts));
                    log::debug!(
                        "Retrying {} in {:?} after: {} (attempt {})",
                        url,
                        wait,
                        error,
                        attempts + 1
                    );
                    tokio::time::sleep(wait).await;
                    attempts += 1;
                }
            }
        }
    }

    /// Inner request method without retry logic.
    ///
    /// Failures carry the server's `Retry-After` hint, if any.
    async fn send_request_inner(
        &self,
        url: &Url,
    ) -> Result<Page, (ApiError, Option<Duration>)> {
        let mut request = self
            .inner
            .http_client
            .get(url.clone())
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| (self.map_transport_error(e), None))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = if status == StatusCode::TOO_MANY_REQUESTS {
                parse_retry_after(&response)
            } else {
                None
            };
            let body = response.text().await.unwrap_or_default();
            return Err((ApiError::http(status.as_u16(), body), retry_after));
        }

        let body = response
            .text()
            .await
            .map_err(|e| (self.map_transport_error(e), None))?;

        Page::from_json(&body).map_err(|e| (e, None))
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(error),
        }
    }
}

#[async_trait]
impl PageSource for CharacterClient {
    async fn fetch_page(&self, url: &str) -> Result<Page, Error> {
        let url = Url::parse(url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(self.request(&url).await?)
    }
}

impl std::fmt::Debug for CharacterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterClient")
            .field("start_url", &self.inner.start_url)
            .field("timeout", &self.inner.timeout)
            .field("retry", &self.inner.retry)
            .finish()
    }
}

/// Parses the Retry-After header value (seconds).
fn parse_retry_after(response: &reqwest::Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing a [`CharacterClient`].
///
/// # Example
///
/// ```ignore
/// let client = CharacterClient::builder()
///     .start_url("https://rickandmortyapi.com/api/character")
///     .timeout(Duration::from_secs(30))
///     .retry(RetryConfig::no_retry())
///     .build()?;
/// ```
pub struct CharacterClientBuilder {
    start_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: RetryConfig,
    http_client: Option<Client>,
}

impl CharacterClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            start_url: api::DEFAULT_START_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            retry: RetryConfig::default(),
            http_client: None,
        }
    }

    /// Sets the URL of the first listing page.
    ///
    /// Defaults to [`DEFAULT_START_URL`](crate::api::DEFAULT_START_URL).
    pub fn start_url(mut self, url: impl Into<String>) -> Self {
        self.start_url = url.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the retry behaviour for individual pages.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`CharacterClient`].
    ///
    /// Fails if the start URL does not parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<CharacterClient, Error> {
        if !self.start_url.is_empty() {
            Url::parse(&self.start_url)
                .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.start_url, e)))?;
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(CharacterClient {
            inner: Arc::new(CharacterClientInner {
                start_url: self.start_url,
                http_client,
                timeout: self.timeout,
                retry: self.retry,
            }),
        })
    }
}

impl Default for CharacterClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_public_listing() {
        let client = CharacterClient::builder().build().unwrap();
        assert_eq!(client.start_url(), api::DEFAULT_START_URL);
        assert_eq!(client.retry_config().max_retries, 3);
    }

    #[test]
    fn test_builder_rejects_invalid_start_url() {
        let err = CharacterClient::builder()
            .start_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_invalid_url() {
        let client = CharacterClient::builder().build().unwrap();
        let err = client.fetch_page("::nope").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));
    }
}
