//! Single-column sort state.

use crate::model::Column;
use crate::model::Records;
use crate::model::RowId;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// At most one active sort column. `None` means source order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(Column, Direction)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts by `column` in `direction`.
    pub fn by(column: Column, direction: Direction) -> Self {
        Self {
            active: Some((column, direction)),
        }
    }

    pub fn active(&self) -> Option<(Column, Direction)> {
        self.active
    }

    /// Returns the direction `column` is sorted in, if it is the sort column.
    pub fn direction_of(&self, column: Column) -> Option<Direction> {
        self.active
            .filter(|(active, _)| *active == column)
            .map(|(_, direction)| direction)
    }

    /// Header click: unsorted, then ascending, then descending, then unsorted.
    ///
    /// Clicking a different column starts it at ascending.
    pub fn toggle(&mut self, column: Column) {
        self.active = match self.direction_of(column) {
            None => Some((column, Direction::Asc)),
            Some(Direction::Asc) => Some((column, Direction::Desc)),
            Some(Direction::Desc) => None,
        };
    }

    /// Stably sorts `rows` by the active column. Equal values keep their order.
    pub fn apply(&self, records: &Records, rows: &mut [RowId]) {
        let Some((column, direction)) = self.active else {
            return;
        };

        rows.sort_by(|a, b| {
            let ordering = column.value(&records[*a]).compare(&column.value(&records[*b]));
            match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        });
    }
}
