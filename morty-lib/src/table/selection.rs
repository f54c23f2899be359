//! Single-row selection.

use crate::model::RowId;

/// At most one selected row.
///
/// Selection is by row identity, so two rows with identical fields are
/// still told apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<RowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<RowId> {
        self.selected
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected == Some(id)
    }

    /// Selects `id`, or clears the selection if `id` is already selected.
    pub fn toggle(&mut self, id: RowId) {
        self.selected = if self.is_selected(id) { None } else { Some(id) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_row_deselects() {
        let mut selection = Selection::new();
        selection.toggle(RowId::new(3));
        assert!(selection.is_selected(RowId::new(3)));
        selection.toggle(RowId::new(3));
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_toggle_other_row_switches() {
        let mut selection = Selection::new();
        selection.toggle(RowId::new(3));
        selection.toggle(RowId::new(7));
        assert_eq!(selection.selected(), Some(RowId::new(7)));
    }
}
