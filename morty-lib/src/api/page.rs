//! Page type for paginated listing results.

use serde::Deserialize;

use crate::error::ApiError;
use crate::model::Character;

/// One page of the character listing.
///
/// Only the records and the next link drive loading; the counts are
/// informational.
#[derive(Debug, Clone, Default)]
pub struct Page {
    records: Vec<Character>,
    next_link: Option<String>,
    total_count: Option<usize>,
    total_pages: Option<usize>,
}

impl Page {
    /// Creates a new page with records and no next link.
    pub fn new(records: Vec<Character>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Sets the link to the next page. An empty link ends pagination.
    pub fn with_next_link(mut self, next_link: impl Into<String>) -> Self {
        let next_link = next_link.into();
        self.next_link = (!next_link.is_empty()).then_some(next_link);
        self
    }

    /// Decodes a page from the listing endpoint's JSON envelope.
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        let response: ListResponse = serde_json::from_str(body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;

        let info = response.info.unwrap_or_default();
        Ok(Self {
            records: response.results,
            next_link: info.next.filter(|link| !link.is_empty()),
            total_count: info.count,
            total_pages: info.pages,
        })
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Character] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Character> {
        self.records
    }

    /// Returns the link to the next page, if there is one.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Returns the total record count, if the source reported it.
    pub fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    /// Returns the total page count, if the source reported it.
    pub fn total_pages(&self) -> Option<usize> {
        self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are more pages available.
    pub fn has_more(&self) -> bool {
        self.next_link.is_some()
    }
}

/// Listing envelope: `{ info: { count, pages, next, prev }, results: [...] }`.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    info: Option<ListInfo>,
    results: Vec<Character>,
}

#[derive(Debug, Default, Deserialize)]
struct ListInfo {
    count: Option<usize>,
    pages: Option<usize>,
    next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARACTER: &str = r#"{
        "id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human",
        "type": "", "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "" },
        "location": { "name": "Citadel of Ricks", "url": "" },
        "image": "https://example.test/1.jpeg"
    }"#;

    #[test]
    fn test_decode_page_with_next_link() {
        let body = format!(
            r#"{{ "info": {{ "count": 826, "pages": 42, "next": "https://example.test/api/character?page=2", "prev": null }},
                 "results": [{}] }}"#,
            CHARACTER
        );
        let page = Page::from_json(&body).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.next_link(), Some("https://example.test/api/character?page=2"));
        assert_eq!(page.total_count(), Some(826));
        assert_eq!(page.total_pages(), Some(42));
    }

    #[test]
    fn test_null_or_empty_next_ends_pagination() {
        let body = format!(r#"{{ "info": {{ "next": null }}, "results": [{}] }}"#, CHARACTER);
        assert!(!Page::from_json(&body).unwrap().has_more());

        let body = r#"{ "info": { "next": "" }, "results": [] }"#;
        assert!(!Page::from_json(body).unwrap().has_more());

        assert!(!Page::new(Vec::new()).with_next_link("").has_more());
    }

    #[test]
    fn test_missing_results_is_parse_error() {
        let err = Page::from_json(r#"{ "error": "There is nothing here" }"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse { body: Some(_), .. }));
    }
}
