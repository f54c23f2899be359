//! Async iterator over listing pages, and the exhaustive load built on it.

use tokio_util::sync::CancellationToken;

use super::Page;
use super::PageSource;
use crate::error::Error;
use crate::model::RecordCollection;
use crate::model::Records;

/// Async iterator that yields pages of the listing in cursor order.
///
/// Follows each page's next link, one request at a time, until a page has
/// none. A failed page ends iteration.
///
/// # Example
///
/// ```ignore
/// let mut pages = Pages::new(&client, DEFAULT_START_URL);
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     println!("{} records", page.len());
/// }
/// ```
pub struct Pages<'a, S: PageSource + ?Sized> {
    source: &'a S,
    /// The next URL to fetch.
    next_url: Option<String>,
    /// Number of pages fetched so far.
    fetched: usize,
}

impl<'a, S: PageSource + ?Sized> Pages<'a, S> {
    /// Starts iteration at `start_url`. An empty URL yields no pages.
    pub fn new(source: &'a S, start_url: impl Into<String>) -> Self {
        let start_url = start_url.into();
        Self {
            source,
            next_url: (!start_url.is_empty()).then_some(start_url),
            fetched: 0,
        }
    }

    /// Fetches the next page of results.
    ///
    /// Returns `None` when all pages have been consumed.
    pub async fn next(&mut self) -> Option<Result<Page, Error>> {
        let url = self.next_url.take()?;

        log::debug!("Fetching page {} from {}", self.fetched + 1, url);
        match self.source.fetch_page(&url).await {
            Ok(page) => {
                self.fetched += 1;
                self.next_url = page.next_link().map(str::to_string);
                Some(Ok(page))
            }
            Err(e) => {
                log::warn!("Page {} failed: {}", self.fetched + 1, e);
                Some(Err(e))
            }
        }
    }

    /// Number of pages fetched so far.
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    /// Returns `true` once the cursor chain has ended or failed.
    pub fn is_done(&self) -> bool {
        self.next_url.is_none()
    }
}

/// Loads every page reachable from `start_url` into one frozen collection.
///
/// Either the whole chain is loaded or an error is returned; partial data is
/// never exposed.
pub async fn load_all<S: PageSource + ?Sized>(source: &S, start_url: &str) -> Result<Records, Error> {
    load_all_with_cancel(source, start_url, CancellationToken::new()).await
}

/// Like [`load_all`], but abandons the load with [`Error::Cancelled`] when
/// `cancel` fires.
pub async fn load_all_with_cancel<S: PageSource + ?Sized>(
    source: &S,
    start_url: &str,
    cancel: CancellationToken,
) -> Result<Records, Error> {
    let mut pages = Pages::new(source, start_url);
    let mut collection = RecordCollection::new();

    loop {
        let fetched = pages.fetched();
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::info!("Load cancelled after {} pages", fetched);
                return Err(Error::Cancelled);
            }
            next = pages.next() => next,
        };

        match next {
            Some(page) => collection.push_page(page?.into_records()),
            None => break,
        }
    }

    log::info!(
        "Loaded {} records from {} pages",
        collection.len(),
        pages.fetched()
    );
    Ok(collection.freeze())
}
