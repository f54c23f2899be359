//! The seam between the fetch loop and the transport.

use async_trait::async_trait;

use super::Page;
use crate::error::Error;

/// Something that can fetch one page of the listing by URL.
///
/// [`CharacterClient`](crate::CharacterClient) is the HTTP implementation;
/// tests substitute in-memory sources.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches and decodes the page at `url`.
    async fn fetch_page(&self, url: &str) -> Result<Page, Error>;
}

