//! Column filter values and their predicates.

use std::collections::BTreeMap;

use crate::model::CellValue;
use crate::model::Character;
use crate::model::Column;

/// An active filter value for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Substring the cell must contain. Never empty.
    Text(String),
    /// Accepted cell values, in the order they were picked. Never empty.
    Set(Vec<String>),
}

impl FilterValue {
    /// Decides whether a cell passes this filter.
    ///
    /// Text matching is case-sensitive.
    pub fn matches(&self, cell: CellValue<'_>) -> bool {
        match (self, cell) {
            (Self::Text(needle), CellValue::Text(value)) => value.contains(needle.as_str()),
            (Self::Text(needle), CellValue::Number(n)) => n.to_string().contains(needle.as_str()),
            (Self::Set(accepted), CellValue::Text(value)) => accepted.iter().any(|a| a == value),
            (Self::Set(accepted), CellValue::Number(n)) => {
                let n = n.to_string();
                accepted.iter().any(|a| *a == n)
            }
        }
    }

    /// Returns `true` if `option` is one of the accepted values.
    pub fn contains_option(&self, option: &str) -> bool {
        match self {
            Self::Text(_) => false,
            Self::Set(accepted) => accepted.iter().any(|a| a == option),
        }
    }
}

/// Active filters, keyed by column.
///
/// A column without an entry is unrestricted. Empty values are never stored:
/// clearing a text box or toggling off the last option removes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: BTreeMap<Column, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active filter for `column`.
    pub fn get(&self, column: Column) -> Option<&FilterValue> {
        self.active.get(&column)
    }

    /// Sets a free-text filter. An empty string removes the filter.
    pub fn set_text(&mut self, column: Column, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.active.remove(&column);
        } else {
            self.active.insert(column, FilterValue::Text(text));
        }
    }

    /// Adds `option` to the column's accepted set, or removes it if present.
    ///
    /// Removing the last option removes the filter rather than leaving a set
    /// that matches nothing.
    pub fn toggle_option(&mut self, column: Column, option: impl Into<String>) {
        let option = option.into();
        let mut accepted = match self.active.remove(&column) {
            Some(FilterValue::Set(accepted)) => accepted,
            _ => Vec::new(),
        };

        if let Some(position) = accepted.iter().position(|a| *a == option) {
            accepted.remove(position);
        } else {
            accepted.push(option);
        }

        if !accepted.is_empty() {
            self.active.insert(column, FilterValue::Set(accepted));
        }
    }

    /// Removes the filter on `column`.
    pub fn clear(&mut self, column: Column) {
        self.active.remove(&column);
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Iterates active filters in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &FilterValue)> {
        self.active.iter().map(|(column, value)| (*column, value))
    }

    /// A record passes when it passes every active filter.
    pub fn matches(&self, record: &Character) -> bool {
        self.active
            .iter()
            .all(|(column, value)| value.matches(column.value(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use crate::model::Status;

    fn human(status: Status) -> Character {
        Character::new(1, "Rick Sanchez", status, "Human", Gender::Male)
    }

    #[test]
    fn test_substring_is_case_sensitive() {
        let value = FilterValue::Text("Sanch".into());
        assert!(value.matches(CellValue::Text("Rick Sanchez")));
        assert!(!value.matches(CellValue::Text("rick sanchez")));
        assert!(FilterValue::Text("1".into()).matches(CellValue::Number(21)));
    }

    #[test]
    fn test_empty_text_removes_filter() {
        let mut filters = FilterState::new();
        filters.set_text(Column::Name, "Rick");
        assert!(filters.get(Column::Name).is_some());

        filters.set_text(Column::Name, "");
        assert!(filters.get(Column::Name).is_none());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut filters = FilterState::new();
        filters.toggle_option(Column::Status, "Alive");
        filters.toggle_option(Column::Status, "Dead");
        assert_eq!(
            filters.get(Column::Status),
            Some(&FilterValue::Set(vec!["Alive".into(), "Dead".into()]))
        );

        filters.toggle_option(Column::Status, "Alive");
        assert_eq!(
            filters.get(Column::Status),
            Some(&FilterValue::Set(vec!["Dead".into()]))
        );
    }

    #[test]
    fn test_toggling_last_option_off_unfilters() {
        let mut filters = FilterState::new();
        filters.toggle_option(Column::Status, "Alive");
        assert!(!filters.matches(&human(Status::Dead)));

        filters.toggle_option(Column::Status, "Alive");
        assert!(filters.get(Column::Status).is_none());
        assert!(filters.matches(&human(Status::Dead)));
        assert!(filters.matches(&human(Status::Alive)));
    }

    #[test]
    fn test_filters_compose_with_and() {
        let alive = human(Status::Alive);
        let dead = human(Status::Dead);

        let mut filters = FilterState::new();
        filters.toggle_option(Column::Status, "Alive");
        assert!(filters.matches(&alive));
        assert!(!filters.matches(&dead));

        filters.toggle_option(Column::Species, "Alien");
        assert!(!filters.matches(&alive));
        assert!(!filters.matches(&dead));
    }

    #[test]
    fn test_inclusion_is_exact() {
        let value = FilterValue::Set(vec!["Human".into()]);
        assert!(value.matches(CellValue::Text("Human")));
        assert!(!value.matches(CellValue::Text("Humanoid")));
        assert!(value.contains_option("Human"));
    }
}
