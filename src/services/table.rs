//! Tabular query engine: debounced search, filter, stable sort, column
//! visibility, and row selection.
//!
//! One [`TableViewState`] per table instance; state is never shared across
//! instances. [`TableViewState::view`] is a pure function of the state and
//! the immutable row set and may be recomputed on every call.

use std::collections::HashSet;
use std::time::Instant;

use crate::api::{CellValue, Column, SortDirection};
use crate::services::debounce::Debouncer;

/// A row type the query engine can operate on.
pub trait TableRow {
    /// Unique, immutable row id.
    fn id(&self) -> i64;

    /// Ordered column metadata for this row type.
    fn columns() -> &'static [Column];

    /// The typed cell for `column_id`. Unknown ids yield an empty text cell.
    fn cell(&self, column_id: &str) -> CellValue;

    /// Lower-cased concatenation of every cell except `id`, the haystack the
    /// search terms are matched against.
    fn search_text(&self) -> String {
        let mut text = String::new();
        for column in Self::columns() {
            if column.id == "id" {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&self.cell(column.id).to_string());
        }
        text.to_lowercase()
    }
}

/// Derived table view: filtered then sorted rows, visible columns, and
/// selection state.
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub columns: Vec<Column>,
    /// Checkbox (highlight) selection, unbounded.
    pub selected: HashSet<i64>,
    /// The single row driving the chart, if any.
    pub active: Option<i64>,
}

/// Per-table-instance view state.
#[derive(Debug)]
pub struct TableViewState {
    sort: Option<(&'static str, SortDirection)>,
    search_input: String,
    committed_search: String,
    debouncer: Debouncer<String>,
    hidden: HashSet<&'static str>,
    selected: HashSet<i64>,
    active: Option<i64>,
}

impl TableViewState {
    pub fn new() -> Self {
        Self {
            sort: None,
            search_input: String::new(),
            committed_search: String::new(),
            debouncer: Debouncer::default(),
            hidden: HashSet::new(),
            selected: HashSet::new(),
            active: None,
        }
    }

    /// Override the search debounce window (default 300 ms).
    pub fn with_debounce_window(window: std::time::Duration) -> Self {
        Self {
            debouncer: Debouncer::new(window),
            ..Self::new()
        }
    }

    // ---- search -----------------------------------------------------------

    /// Record a keystroke. The raw input is visible immediately; the
    /// committed search only updates after a quiet debounce window, and any
    /// previously pending commit is discarded.
    pub fn type_search(&mut self, text: &str, now: Instant) {
        self.search_input = text.to_string();
        self.debouncer.submit(text.to_string(), now);
    }

    /// Drive the debounce timer. Returns `true` when a pending search was
    /// committed (i.e. the filter result changed inputs).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => {
                log::debug!("search committed: {:?}", text);
                self.committed_search = text;
                true
            }
            None => false,
        }
    }

    /// Raw input as typed, not yet necessarily committed.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// The search string the filter actually uses.
    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    // ---- sort -------------------------------------------------------------

    /// Click a column's sort control: a new column sorts ascending, the same
    /// column toggles direction.
    pub fn toggle_sort(&mut self, column_id: &'static str) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column_id => {
                Some((column_id, direction.toggled()))
            }
            _ => Some((column_id, SortDirection::Ascending)),
        };
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn sort(&self) -> Option<(&'static str, SortDirection)> {
        self.sort
    }

    // ---- column visibility --------------------------------------------------

    /// Flip one column's visibility; other columns are unaffected.
    pub fn toggle_column(&mut self, column_id: &'static str) {
        if !self.hidden.remove(column_id) {
            self.hidden.insert(column_id);
        }
    }

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        !self.hidden.contains(column_id)
    }

    // ---- selection ----------------------------------------------------------

    /// Flip a row's membership in the checkbox (highlight) selection.
    pub fn toggle_row(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn selected(&self) -> &HashSet<i64> {
        &self.selected
    }

    /// Single-select the row that drives the chart. Activating the already
    /// active row clears the selection; activating another row replaces it.
    /// Returns the new active id.
    pub fn activate_row(&mut self, id: i64) -> Option<i64> {
        self.active = if self.active == Some(id) {
            None
        } else {
            Some(id)
        };
        self.active
    }

    pub fn active(&self) -> Option<i64> {
        self.active
    }

    // ---- view derivation ----------------------------------------------------

    /// Derive the current view: filter by the committed search, then stable
    /// sort. Pure with respect to `self` and `rows`.
    pub fn view<'r, R: TableRow>(&self, rows: &'r [R]) -> TableView<'r, R> {
        let terms: Vec<String> = self
            .committed_search
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut matched: Vec<&R> = rows
            .iter()
            .filter(|row| {
                if terms.is_empty() {
                    return true;
                }
                let haystack = row.search_text();
                terms.iter().all(|term| haystack.contains(term.as_str()))
            })
            .collect();

        if let Some((column_id, direction)) = self.sort {
            // Vec::sort_by is stable: ties keep their original order.
            matched.sort_by(|a, b| {
                let ordering = a.cell(column_id).compare(&b.cell(column_id));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        TableView {
            rows: matched,
            columns: R::columns()
                .iter()
                .filter(|c| self.is_column_visible(c.id))
                .copied()
                .collect(),
            selected: self.selected.clone(),
            active: self.active,
        }
    }
}

impl Default for TableViewState {
    fn default() -> Self {
        Self::new()
    }
}
