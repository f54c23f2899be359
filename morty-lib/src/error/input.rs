//! Locally recoverable input errors.
//!
//! These never abort a render cycle: the caller shows the message and carries on.

use crate::model::Column;

/// Rejected navigation or filter input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A 1-based page number outside `[1, page_count]`, or not a number at all.
    #[error("Invalid page number. Please enter a number between 1 and {page_count}.")]
    PageOutOfRange {
        /// What the user entered.
        input: String,
        page_count: usize,
    },

    /// A custom page size that is not an integer in `[1, max]`.
    #[error("Invalid custom page size. Please enter a number between 1 and {max}.")]
    InvalidPageSize {
        /// What the user entered.
        input: String,
        max: usize,
    },

    /// A page size of zero.
    #[error("Page size must be a positive integer.")]
    ZeroPageSize,

    /// A text filter on a multi-select column, or vice versa.
    #[error("Column '{column}' does not accept this kind of filter.")]
    FilterKindMismatch { column: Column },

    /// The column is not part of the table configuration.
    #[error("Column '{column}' is not filterable.")]
    NotFilterable { column: Column },

    /// The column does not sort.
    #[error("Column '{column}' is not sortable.")]
    NotSortable { column: Column },

    /// A value outside the column's option vocabulary.
    #[error("'{value}' is not an option of column '{column}'.")]
    UnknownOption { column: Column, value: String },

    /// A row position outside the visible page.
    #[error("No row {position} on this page.")]
    NoSuchRow { position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_cite_valid_range() {
        let err = InputError::PageOutOfRange {
            input: "5".into(),
            page_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid page number. Please enter a number between 1 and 3."
        );

        let err = InputError::InvalidPageSize {
            input: "43".into(),
            max: 42,
        };
        assert_eq!(
            err.to_string(),
            "Invalid custom page size. Please enter a number between 1 and 42."
        );
    }
}
