//! Pure derivation of the visible page.

use super::FilterState;
use super::Pagination;
use super::SortState;
use super::page_count;
use crate::model::Records;
use crate::model::RowId;

/// Output of one derivation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    /// Rows on the current page, in display order.
    pub rows: Vec<RowId>,
    /// Rows that passed the filters, across all pages.
    pub total_filtered: usize,
    /// Pages needed for the filtered rows; at least 1.
    pub page_count: usize,
    /// The page index the slice was taken at.
    pub page_index: usize,
}

impl Derived {
    /// Returns `true` if the current page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rows passing every active filter, in source order.
pub fn filter_rows(records: &Records, filters: &FilterState) -> Vec<RowId> {
    records
        .iter()
        .filter(|(_, record)| filters.matches(record))
        .map(|(id, _)| id)
        .collect()
}

/// Filters, sorts and slices `records` into the current page.
///
/// The page index is used as given: an index past the last page yields an
/// empty slice rather than being corrected here.
pub fn derive(
    records: &Records,
    filters: &FilterState,
    sort: &SortState,
    pagination: &Pagination,
) -> Derived {
    let mut rows = filter_rows(records, filters);
    sort.apply(records, &mut rows);

    let total_filtered = rows.len();
    let start = pagination.page_start().min(total_filtered);
    let end = start.saturating_add(pagination.page_size()).min(total_filtered);

    Derived {
        rows: rows[start..end].to_vec(),
        total_filtered,
        page_count: page_count(total_filtered, pagination.page_size()),
        page_index: pagination.page_index(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Character;
    use crate::model::Column;
    use crate::model::Gender;
    use crate::model::Status;
    use crate::table::Direction;

    fn characters(n: u32) -> Records {
        (1..=n)
            .map(|id| {
                let status = if id % 2 == 0 { Status::Dead } else { Status::Alive };
                Character::new(id, format!("Character {:02}", id), status, "Human", Gender::Male)
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn ids(records: &Records, derived: &Derived) -> Vec<u32> {
        derived.rows.iter().map(|id| records[*id].id).collect()
    }

    #[test]
    fn test_first_page_of_unfiltered() {
        let records = characters(25);
        let derived = derive(
            &records,
            &FilterState::new(),
            &SortState::new(),
            &Pagination::default(),
        );

        assert_eq!(ids(&records, &derived), (1..=10).collect::<Vec<_>>());
        assert_eq!(derived.total_filtered, 25);
        assert_eq!(derived.page_count, 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let records = characters(25);
        let mut pagination = Pagination::default();
        pagination.goto_page(2, 3).unwrap();

        let derived = derive(&records, &FilterState::new(), &SortState::new(), &pagination);

        assert_eq!(ids(&records, &derived), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_filter_then_sort_then_slice() {
        let records = characters(25);
        let mut filters = FilterState::new();
        filters.toggle_option(Column::Status, "Dead");
        let sort = SortState::by(Column::Name, Direction::Desc);

        let derived = derive(&records, &filters, &sort, &Pagination::new(5).unwrap());

        assert_eq!(ids(&records, &derived), vec![24, 22, 20, 18, 16]);
        assert_eq!(derived.total_filtered, 12);
        assert_eq!(derived.page_count, 3);
    }

    #[test]
    fn test_no_matches_gives_empty_page_and_one_page() {
        let records = characters(5);
        let mut filters = FilterState::new();
        filters.set_text(Column::Name, "Squanchy");

        let derived = derive(&records, &filters, &SortState::new(), &Pagination::default());

        assert!(derived.is_empty());
        assert_eq!(derived.total_filtered, 0);
        assert_eq!(derived.page_count, 1);
    }

    #[test]
    fn test_stale_index_yields_empty_slice() {
        let records = characters(25);
        let mut pagination = Pagination::default();
        pagination.goto_page(2, 3).unwrap();
        let mut filters = FilterState::new();
        filters.set_text(Column::Name, "Character 0");

        let derived = derive(&records, &filters, &SortState::new(), &pagination);

        assert!(derived.is_empty());
        assert_eq!(derived.total_filtered, 9);
        assert_eq!(derived.page_index, 2);
    }
}
