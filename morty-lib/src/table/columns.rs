//! Declarative column configuration.

use crate::error::InputError;
use crate::model::Column;

/// How a column's filter matches rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    /// Free text, matched as a case-sensitive substring.
    Substring,
    /// Multi-select over a fixed vocabulary, matched exactly.
    Inclusion {
        /// The options offered to the user, in display order.
        options: Vec<String>,
    },
}

impl FilterKind {
    /// Creates an inclusion filter over `options`.
    pub fn inclusion<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Inclusion {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the option vocabulary, if this is an inclusion filter.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Substring => None,
            Self::Inclusion { options } => Some(options),
        }
    }
}

/// Configuration of one table column.
///
/// # Examples
///
/// ```
/// use morty_lib::model::Column;
/// use morty_lib::table::ColumnDef;
/// use morty_lib::table::FilterKind;
///
/// let name = ColumnDef::new(Column::Name).filter(FilterKind::Substring);
/// let status = ColumnDef::new(Column::Status)
///     .filter(FilterKind::inclusion(["Alive", "Dead", "unknown"]));
/// let id = ColumnDef::new(Column::Id).label("#").unsortable();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub column: Column,
    /// Header text.
    pub label: String,
    /// Filter behaviour, or `None` for an unfilterable column.
    pub filter: Option<FilterKind>,
    pub sortable: bool,
}

impl ColumnDef {
    /// Creates a sortable, unfilterable column with the default label.
    pub fn new(column: Column) -> Self {
        Self {
            column,
            label: column.label().to_string(),
            filter: None,
            sortable: true,
        }
    }

    /// Sets the header text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the filter behaviour.
    pub fn filter(mut self, kind: FilterKind) -> Self {
        self.filter = Some(kind);
        self
    }

    /// Disables sorting on this column.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// The column table: which columns are shown, and how each filters and sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    columns: Vec<ColumnDef>,
}

impl TableConfig {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self { columns }
    }

    /// The character table: name search plus status, species and gender pickers.
    pub fn characters() -> Self {
        Self::new(vec![
            ColumnDef::new(Column::Name).filter(FilterKind::Substring),
            ColumnDef::new(Column::Status)
                .filter(FilterKind::inclusion(["Alive", "Dead", "unknown"])),
            ColumnDef::new(Column::Species).filter(FilterKind::inclusion([
                "Human",
                "Alien",
                "Mythological Creature",
                "Humanoid",
                "Poopybutthole",
            ])),
            ColumnDef::new(Column::Gender)
                .filter(FilterKind::inclusion(["Female", "Male", "unknown"])),
        ])
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the definition of `column`, if it is part of the table.
    pub fn get(&self, column: Column) -> Option<&ColumnDef> {
        self.columns.iter().find(|def| def.column == column)
    }

    /// Checks that `column` takes free-text filters.
    pub fn check_text_filter(&self, column: Column) -> Result<(), InputError> {
        match self.filter_kind(column)? {
            FilterKind::Substring => Ok(()),
            FilterKind::Inclusion { .. } => Err(InputError::FilterKindMismatch { column }),
        }
    }

    /// Checks that `option` is in `column`'s option vocabulary.
    pub fn check_filter_option(&self, column: Column, option: &str) -> Result<(), InputError> {
        match self.filter_kind(column)? {
            FilterKind::Substring => Err(InputError::FilterKindMismatch { column }),
            FilterKind::Inclusion { options } if options.iter().any(|o| o == option) => Ok(()),
            FilterKind::Inclusion { .. } => Err(InputError::UnknownOption {
                column,
                value: option.to_string(),
            }),
        }
    }

    /// Checks that `column` is part of the table and sortable.
    pub fn check_sortable(&self, column: Column) -> Result<(), InputError> {
        match self.get(column) {
            Some(def) if def.sortable => Ok(()),
            _ => Err(InputError::NotSortable { column }),
        }
    }

    fn filter_kind(&self, column: Column) -> Result<&FilterKind, InputError> {
        self.get(column)
            .and_then(|def| def.filter.as_ref())
            .ok_or(InputError::NotFilterable { column })
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::characters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_table_layout() {
        let config = TableConfig::characters();
        let ids: Vec<_> = config.columns().iter().map(|def| def.column.id()).collect();
        assert_eq!(ids, vec!["name", "status", "species", "gender"]);
        assert_eq!(config.get(Column::Name).unwrap().filter, Some(FilterKind::Substring));
        assert_eq!(
            config.get(Column::Gender).unwrap().filter.as_ref().unwrap().options().unwrap(),
            ["Female", "Male", "unknown"]
        );
    }

    #[test]
    fn test_filter_checks() {
        let config = TableConfig::characters();

        assert!(config.check_text_filter(Column::Name).is_ok());
        assert_eq!(
            config.check_text_filter(Column::Status),
            Err(InputError::FilterKindMismatch { column: Column::Status })
        );
        assert!(config.check_filter_option(Column::Species, "Alien").is_ok());
        assert_eq!(
            config.check_filter_option(Column::Species, "Robot"),
            Err(InputError::UnknownOption {
                column: Column::Species,
                value: "Robot".into()
            })
        );
        assert_eq!(
            config.check_text_filter(Column::Origin),
            Err(InputError::NotFilterable { column: Column::Origin })
        );
    }

    #[test]
    fn test_sortable_check() {
        let config = TableConfig::new(vec![
            ColumnDef::new(Column::Id).unsortable(),
            ColumnDef::new(Column::Name),
        ]);
        assert!(config.check_sortable(Column::Name).is_ok());
        assert!(config.check_sortable(Column::Id).is_err());
        assert!(config.check_sortable(Column::Gender).is_err());
    }
}
