//! Column identifiers and typed cell access.

use std::cmp::Ordering;

use super::Character;

/// The value type a column sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Lexicographic ordering.
    Text,
    /// Numeric ordering.
    Number,
}

/// A column of the character table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Id,
    Name,
    Status,
    Species,
    Gender,
    Origin,
    Location,
}

impl Column {
    /// All columns, in display order.
    pub const ALL: [Column; 7] = [
        Column::Id,
        Column::Name,
        Column::Status,
        Column::Species,
        Column::Gender,
        Column::Origin,
        Column::Location,
    ];

    /// Stable identifier used by the rendering layer.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Status => "status",
            Self::Species => "species",
            Self::Gender => "gender",
            Self::Origin => "origin",
            Self::Location => "location",
        }
    }

    /// Default header label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Status => "Status",
            Self::Species => "Species",
            Self::Gender => "Gender",
            Self::Origin => "Origin",
            Self::Location => "Location",
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Id => ColumnType::Number,
            _ => ColumnType::Text,
        }
    }

    /// Looks a column up by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.id() == id)
    }

    /// Reads this column's value from a record.
    pub fn value<'a>(&self, record: &'a Character) -> CellValue<'a> {
        match self {
            Self::Id => CellValue::Number(i64::from(record.id)),
            Self::Name => CellValue::Text(&record.name),
            Self::Status => CellValue::Text(record.status.as_str()),
            Self::Species => CellValue::Text(&record.species),
            Self::Gender => CellValue::Text(record.gender.as_str()),
            Self::Origin => CellValue::Text(&record.origin.name),
            Self::Location => CellValue::Text(&record.location.name),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A borrowed cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(i64),
}

impl CellValue<'_> {
    /// Returns the text form, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Orders two cells of the same column.
    ///
    /// Numbers sort before text when a column mixes both.
    pub fn compare(&self, other: &CellValue<'_>) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.cmp(b),
            (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl std::fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use crate::model::Status;

    #[test]
    fn test_column_ids_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_id(column.id()), Some(column));
        }
        assert_eq!(Column::from_id("episode"), None);
    }

    #[test]
    fn test_compare_cells_with_different_lifetimes() {
        let outer = String::from("Morty");
        let left = CellValue::Text(&outer);
        {
            let inner = String::from("Rick");
            let right = CellValue::Text(&inner);
            assert_eq!(left.compare(&right), Ordering::Less);
            assert_eq!(right.compare(&left), Ordering::Greater);
        }
        assert_eq!(left.compare(&CellValue::Number(3)), Ordering::Greater);
    }

    #[test]
    fn test_numeric_cells_compare_numerically() {
        let a = CellValue::Number(9);
        let b = CellValue::Number(10);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(CellValue::Text("9").compare(&CellValue::Text("10")), Ordering::Greater);
    }

    #[test]
    fn test_value_reads_link_names() {
        let rick = Character::new(1, "Rick", Status::Alive, "Human", Gender::Male)
            .with_origin("Earth (C-137)");
        assert_eq!(Column::Origin.value(&rick), CellValue::Text("Earth (C-137)"));
        assert_eq!(Column::Status.value(&rick), CellValue::Text("Alive"));
        assert_eq!(Column::Id.value(&rick), CellValue::Number(1));
    }
}
