//! Page index / page size state and navigation.
//!
//! Every operation is bounds-checked against the current page count; none of
//! them panic. Page numbers typed by the user are 1-based, the index is 0-based.

use crate::error::InputError;

/// Rows per page on first render.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered in the page-size picker.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 250, 500, 1000];

/// Number of pages needed for `rows` rows.
///
/// Never less than 1, so an empty table still reads "page 1 of 1".
pub fn page_count(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size.max(1)).max(1)
}

/// Current page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Starts on the first page with `page_size` rows per page.
    pub fn new(page_size: usize) -> Result<Self, InputError> {
        if page_size == 0 {
            return Err(InputError::ZeroPageSize);
        }
        Ok(Self {
            page_index: 0,
            page_size,
        })
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first row on the current page.
    pub fn page_start(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self, page_count: usize) -> bool {
        self.page_index + 1 < page_count
    }

    /// Jumps to zero-based page `index`.
    ///
    /// Out-of-range indexes are rejected and leave the state unchanged.
    pub fn goto_page(&mut self, index: usize, page_count: usize) -> Result<(), InputError> {
        if index >= page_count {
            return Err(InputError::PageOutOfRange {
                input: index.saturating_add(1).to_string(),
                page_count,
            });
        }
        self.page_index = index;
        Ok(())
    }

    /// Moves forward one page. No-op on the last page.
    pub fn next_page(&mut self, page_count: usize) {
        if self.can_next_page(page_count) {
            self.page_index += 1;
        }
    }

    /// Moves back one page. No-op on the first page.
    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn goto_first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn goto_last_page(&mut self, page_count: usize) {
        self.page_index = page_count.saturating_sub(1);
    }

    /// Changes the page size, keeping the current top row on screen.
    ///
    /// The new index is re-clamped against the page count for `rows` rows.
    pub fn set_page_size(&mut self, page_size: usize, rows: usize) -> Result<(), InputError> {
        if page_size == 0 {
            return Err(InputError::ZeroPageSize);
        }
        let top_row = self.page_start();
        self.page_size = page_size;
        self.page_index = top_row / page_size;
        self.clamp(page_count(rows, page_size));
        Ok(())
    }

    /// Pulls the index back inside `[0, page_count)`.
    ///
    /// Call after anything that can shrink the page count.
    pub fn clamp(&mut self, page_count: usize) {
        self.page_index = self.page_index.min(page_count.saturating_sub(1));
    }
}

/// Parses a user-entered, 1-based page number into a zero-based index.
pub fn parse_page_number(input: &str, page_count: usize) -> Result<usize, InputError> {
    let reject = || InputError::PageOutOfRange {
        input: input.to_string(),
        page_count,
    };

    let number: usize = input.trim().parse().map_err(|_| reject())?;
    if number == 0 || number > page_count {
        return Err(reject());
    }
    Ok(number - 1)
}

/// Parses a user-entered custom page size; valid sizes are `1..=total_records`.
pub fn parse_custom_page_size(input: &str, total_records: usize) -> Result<usize, InputError> {
    let reject = || InputError::InvalidPageSize {
        input: input.to_string(),
        max: total_records,
    };

    let size: usize = input.trim().parse().map_err(|_| reject())?;
    if size == 0 || size > total_records {
        return Err(reject());
    }
    Ok(size)
}

/// A text input that is emptied every time it is submitted, valid or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    buffer: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Replaces the field's contents.
    pub fn set(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    /// Takes the contents, leaving the field empty.
    pub fn submit(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}
