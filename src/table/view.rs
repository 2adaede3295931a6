//! Sortable, paginated view over a loaded row set

use super::sort::sorted_indices;
use super::types::{PageSize, PageState, SortState};
use crate::column::Column;
use crate::types::Row;
use tracing::debug;

/// Client-side table state.
///
/// Rows keep their load order. The sorted order is a derived index vector
/// recomputed whenever rows or the sort state change.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    rows: Vec<Row>,
    columns: Vec<Column>,
    sort: SortState,
    page: PageState,
    order: Vec<usize>,
}

impl TableView {
    /// Create an empty view with the given page size
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: PageState::new(page_size),
            ..Self::default()
        }
    }

    /// Replace the row set and columns, resetting sort and page
    pub fn set_data(&mut self, rows: Vec<Row>, columns: Vec<Column>) {
        self.rows = rows;
        self.columns = columns;
        self.reset_navigation();
    }

    /// Drop all rows and columns, resetting sort and page
    pub fn clear(&mut self) {
        self.rows.clear();
        self.columns.clear();
        self.reset_navigation();
    }

    fn reset_navigation(&mut self) {
        self.sort.clear();
        self.page.current_page = 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.order = match &self.sort.field {
            Some(field) => sorted_indices(&self.rows, field, self.sort.direction),
            None => (0..self.rows.len()).collect(),
        };
        let last = self.page_count().max(1);
        if self.page.current_page > last {
            self.page.current_page = last;
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Rows in load order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Inferred columns
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Current sort state
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Current page state
    pub fn page(&self) -> PageState {
        self.page
    }

    /// Total number of rows
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether the view holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.page.page_count(self.rows.len())
    }

    /// Whether the next-page control is enabled
    pub fn has_next(&self) -> bool {
        self.page.has_next(self.rows.len())
    }

    /// Whether the previous-page control is enabled
    pub fn has_prev(&self) -> bool {
        self.page.has_prev()
    }

    /// All rows in sorted order
    pub fn sorted_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.order.iter().map(|&i| &self.rows[i])
    }

    /// Rows on the current page, in sorted order
    pub fn page_rows(&self) -> Vec<&Row> {
        self.order[self.page.range(self.rows.len())]
            .iter()
            .map(|&i| &self.rows[i])
            .collect()
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Sort by `field`; clicking the active field again flips direction
    pub fn sort_by(&mut self, field: &str) {
        self.sort.toggle(field);
        debug!(field, direction = ?self.sort.direction, "Sorting rows");
        self.recompute();
    }

    /// Restore load order
    pub fn clear_sort(&mut self) {
        self.sort.clear();
        self.recompute();
    }

    /// Change page size and go back to page 1
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page.page_size = size;
        self.page.current_page = 1;
    }

    /// Advance one page, no-op on the last page
    pub fn next_page(&mut self) {
        if self.has_next() {
            self.page.current_page += 1;
        }
    }

    /// Go back one page, no-op on the first page
    pub fn prev_page(&mut self) {
        if self.has_prev() {
            self.page.current_page -= 1;
        }
    }

    /// Jump to `page`, clamped to the valid range
    pub fn go_to_page(&mut self, page: usize) {
        self.page.current_page = page.clamp(1, self.page_count().max(1));
    }
}
