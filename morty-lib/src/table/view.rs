//! Table view state: the engine behind one rendered table.
//!
//! `TableView` owns every piece of table state and exposes one method per UI
//! event. The renderer reads a [`ViewModel`] snapshot after each event and
//! owns no logic of its own.

use super::Derived;
use super::Direction;
use super::FilterKind;
use super::FilterState;
use super::FilterValue;
use super::InputField;
use super::Pagination;
use super::Selection;
use super::SortState;
use super::TableConfig;
use super::derive;
use super::filter_rows;
use super::page_count;
use super::parse_custom_page_size;
use super::parse_page_number;
use crate::error::Error;
use crate::error::InputError;
use crate::model::Character;
use crate::model::Column;
use crate::model::Records;
use crate::model::RowId;

/// Where the dataset load stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// The load failed; no records are shown.
    Failed(String),
}

/// Header state of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMeta {
    pub column: Column,
    pub label: String,
    pub filter_kind: Option<FilterKind>,
    pub filter: Option<FilterValue>,
    pub sort: Option<Direction>,
}

/// Pagination footer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    /// 1-based.
    pub current_page: usize,
    pub total_pages: usize,
    pub can_previous: bool,
    pub can_next: bool,
    pub page_size: usize,
    pub total_filtered: usize,
    pub total_records: usize,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct ViewModel<'a> {
    pub rows: Vec<(RowId, &'a Character)>,
    pub headers: Vec<HeaderMeta>,
    pub summary: PaginationSummary,
    /// The page is empty and the load has completed.
    pub no_data: bool,
    pub selected: Option<(RowId, &'a Character)>,
    pub load_state: &'a LoadState,
}

/// The table engine behind one view.
#[derive(Debug, Clone)]
pub struct TableView {
    config: TableConfig,
    records: Records,
    load_state: LoadState,
    filters: FilterState,
    sort: SortState,
    pagination: Pagination,
    selection: Selection,
    page_input: InputField,
    page_size_input: InputField,
}

impl TableView {
    /// Creates an empty view waiting for its records.
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            records: Records::default(),
            load_state: LoadState::Loading,
            filters: FilterState::new(),
            sort: SortState::new(),
            pagination: Pagination::default(),
            selection: Selection::new(),
            page_input: InputField::new(),
            page_size_input: InputField::new(),
        }
    }

    /// Starts with `page_size` rows per page instead of the default.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, InputError> {
        self.pagination = Pagination::new(page_size)?;
        Ok(self)
    }

    /// Creates a view over already loaded records.
    pub fn loaded(config: TableConfig, records: Records) -> Self {
        let mut view = Self::new(config);
        view.finish_load(Ok(records));
        view
    }

    /// Records the outcome of the load. A failure keeps no records.
    pub fn finish_load(&mut self, result: Result<Records, Error>) {
        match result {
            Ok(records) => {
                self.records = records;
                self.load_state = LoadState::Loaded;
                self.reclamp();
            }
            Err(e) => {
                log::error!("Load failed: {}", e);
                self.records = Records::default();
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Runs the derivation for the current state.
    pub fn derive(&self) -> Derived {
        derive(&self.records, &self.filters, &self.sort, &self.pagination)
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Free-text filter change. An empty string clears the filter.
    pub fn set_text_filter(&mut self, column: Column, text: &str) -> Result<(), InputError> {
        self.config.check_text_filter(column)?;
        self.filters.set_text(column, text);
        self.reclamp();
        Ok(())
    }

    /// Multi-select option click.
    pub fn toggle_filter_option(&mut self, column: Column, option: &str) -> Result<(), InputError> {
        self.config.check_filter_option(column, option)?;
        self.filters.toggle_option(column, option);
        self.reclamp();
        Ok(())
    }

    /// "Clear" on a column's filter.
    pub fn clear_filter(&mut self, column: Column) {
        self.filters.clear(column);
        self.reclamp();
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Header click on a sortable column.
    pub fn toggle_sort(&mut self, column: Column) -> Result<(), InputError> {
        self.config.check_sortable(column)?;
        self.sort.toggle(column);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Click on the row at `position` (0-based) of the visible page.
    ///
    /// Returns the row's identity.
    pub fn click_row(&mut self, position: usize) -> Result<RowId, InputError> {
        let id = self
            .derive()
            .rows
            .get(position)
            .copied()
            .ok_or(InputError::NoSuchRow { position })?;
        self.selection.toggle(id);
        Ok(id)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn next_page(&mut self) {
        let pages = self.page_count();
        self.pagination.next_page(pages);
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous_page();
    }

    pub fn first_page(&mut self) {
        self.pagination.goto_first_page();
    }

    pub fn last_page(&mut self) {
        let pages = self.page_count();
        self.pagination.goto_last_page(pages);
    }

    /// Page-size picker change.
    pub fn select_page_size(&mut self, page_size: usize) -> Result<(), InputError> {
        let rows = self.filtered_count();
        self.pagination.set_page_size(page_size, rows)
    }

    /// The "go to page" text box.
    pub fn page_input_mut(&mut self) -> &mut InputField {
        &mut self.page_input
    }

    /// The "custom size" text box.
    pub fn page_size_input_mut(&mut self) -> &mut InputField {
        &mut self.page_size_input
    }

    /// Enter in the "go to page" box. The box is emptied either way.
    pub fn submit_page_number(&mut self) -> Result<(), InputError> {
        let input = self.page_input.submit();
        let pages = self.page_count();
        let index = parse_page_number(&input, pages)?;
        self.pagination.goto_page(index, pages)
    }

    /// Enter in the "custom size" box. The box is emptied either way.
    ///
    /// Sizes are bounded by the unfiltered record count.
    pub fn submit_custom_page_size(&mut self) -> Result<(), InputError> {
        let input = self.page_size_input.submit();
        let size = parse_custom_page_size(&input, self.records.len())?;
        let rows = self.filtered_count();
        self.pagination.set_page_size(size, rows)
    }

    // -------------------------------------------------------------------------
    // Snapshot
    // -------------------------------------------------------------------------

    /// Builds the render model for the current state.
    pub fn snapshot(&self) -> ViewModel<'_> {
        let derived = self.derive();

        let headers = self
            .config
            .columns()
            .iter()
            .map(|def| HeaderMeta {
                column: def.column,
                label: def.label.clone(),
                filter_kind: def.filter.clone(),
                filter: self.filters.get(def.column).cloned(),
                sort: self.sort.direction_of(def.column),
            })
            .collect();

        let summary = PaginationSummary {
            current_page: derived.page_index + 1,
            total_pages: derived.page_count,
            can_previous: self.pagination.can_previous_page(),
            can_next: self.pagination.can_next_page(derived.page_count),
            page_size: self.pagination.page_size(),
            total_filtered: derived.total_filtered,
            total_records: self.records.len(),
        };

        let selected = self
            .selection
            .selected()
            .and_then(|id| self.records.get(id).map(|record| (id, record)));

        ViewModel {
            no_data: derived.is_empty() && self.load_state == LoadState::Loaded,
            rows: derived
                .rows
                .iter()
                .map(|id| (*id, &self.records[*id]))
                .collect(),
            headers,
            summary,
            selected,
            load_state: &self.load_state,
        }
    }

    fn filtered_count(&self) -> usize {
        filter_rows(&self.records, &self.filters).len()
    }

    fn page_count(&self) -> usize {
        page_count(self.filtered_count(), self.pagination.page_size())
    }

    /// Re-validates the page index after the filtered row count changed.
    fn reclamp(&mut self) {
        let pages = self.page_count();
        self.pagination.clamp(pages);
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}
