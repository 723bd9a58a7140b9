//! Body state machine and sort handling for the flow table.
//!
//! A [`NetflowTable`] owns only its [`SortState`]. Everything else (records,
//! columns, load/error state and the clear-filters callback) is handed in on each
//! render through [`TableInput`], and the result is a [`TableBody`] for the host
//! renderer to draw.

use std::fmt;
use tracing::{debug, trace};

pub mod columns;


pub use columns::{Column, default_columns};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_descending(self) -> bool {
        matches!(self, SortDirection::Desc)
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active sort column and direction. `active_index: None` means unsorted.
///
/// The index is not validated against any column list; an index past the end
/// of the columns in use at render time leaves the rows in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub active_index: Option<usize>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(index: usize, direction: SortDirection) -> Self {
        Self {
            active_index: Some(index),
            direction,
        }
    }
}

/// Per-render input supplied by the owner of the flow data.
pub struct TableInput<'a, R> {
    pub flows: &'a [R],
    pub columns: &'a [Column<R>],
    pub loading: bool,
    pub error: Option<&'a str>,
    pub clear_filters: &'a dyn Fn(),
}

impl<'a, R> TableInput<'a, R> {
    pub fn new(flows: &'a [R], columns: &'a [Column<R>], clear_filters: &'a dyn Fn()) -> Self {
        Self {
            flows,
            columns,
            loading: false,
            error: None,
            clear_filters,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorState<'a> {
    pub message: &'a str,
}

impl ErrorState<'_> {
    pub const TITLE: &'static str = "Unable to get flows";
}

/// "No results" panel with a single clear-all-filters action.
#[derive(Clone, Copy)]
pub struct EmptyState<'a> {
    clear_filters: &'a dyn Fn(),
}

impl EmptyState<'_> {
    pub const TITLE: &'static str = "No results found";
    pub const BODY: &'static str = "Clear all filters and try again.";
    pub const ACTION: &'static str = "Clear all filters";

    pub fn clear_all_filters(&self) {
        debug!("Clear all filters requested from empty table");
        (self.clear_filters)();
    }
}

impl fmt::Debug for EmptyState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmptyState").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum TableBody<'a, R> {
    Error(ErrorState<'a>),
    Loading,
    Empty(EmptyState<'a>),
    Rows(Vec<&'a R>),
}

impl<R> TableBody<'_, R> {
    pub fn kind(&self) -> &'static str {
        match self {
            TableBody::Error(_) => "error",
            TableBody::Loading => "loading",
            TableBody::Empty(_) => "empty",
            TableBody::Rows(_) => "rows",
        }
    }

    /// Hands every row to `render` together with the columns, in display order.
    /// Non-row states render nothing.
    pub fn render_rows<T>(
        &self,
        columns: &[Column<R>],
        mut render: impl FnMut(&R, &[Column<R>]) -> T,
    ) -> Vec<T> {
        match self {
            TableBody::Rows(rows) => rows.iter().map(|flow| render(flow, columns)).collect(),
            _ => Vec::new(),
        }
    }
}

/// One header cell; `sort` is set on the active column only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Default)]
pub struct NetflowTable {
    sort: SortState,
}

impl NetflowTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(sort: SortState) -> Self {
        Self { sort }
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Sort-toggle handler. Replaces the sort state without checking `index`.
    pub fn on_sort(&mut self, index: usize, direction: SortDirection) {
        debug!(index, direction = %direction, "Table sort changed");
        self.sort = SortState::by(index, direction);
    }

    /// The toggle a click on header `index` emits: the active column flips its
    /// direction, any other column starts ascending.
    pub fn next_sort(&self, index: usize) -> (usize, SortDirection) {
        match self.sort.active_index {
            Some(active) if active == index => (index, self.sort.direction.toggled()),
            _ => (index, SortDirection::Asc),
        }
    }

    pub fn header<R>(&self, columns: &[Column<R>]) -> Vec<HeaderCell> {
        columns
            .iter()
            .enumerate()
            .map(|(i, column)| HeaderCell {
                label: column.label().to_string(),
                sort: (self.sort.active_index == Some(i)).then_some(self.sort.direction),
            })
            .collect()
    }

    /// Orders `flows` by the active column. The caller's slice is left untouched;
    /// the returned references are stable-sorted, so equal records keep their
    /// input order.
    pub fn sorted<'a, R>(&self, flows: &'a [R], columns: &[Column<R>]) -> Vec<&'a R> {
        let mut rows: Vec<&'a R> = flows.iter().collect();
        let Some(column) = self.sort.active_index.and_then(|i| columns.get(i)) else {
            trace!(
                active_index = ?self.sort.active_index,
                columns = columns.len(),
                "No usable sort column; keeping input order"
            );
            return rows;
        };

        let descending = self.sort.direction.is_descending();
        rows.sort_by(|a, b| column.compare(a, b, descending));
        rows
    }

    pub fn body<'a, R>(&self, input: TableInput<'a, R>) -> TableBody<'a, R> {
        if let Some(message) = input.error.filter(|e| !e.is_empty()) {
            return TableBody::Error(ErrorState { message });
        }

        if input.flows.is_empty() {
            if input.loading {
                return TableBody::Loading;
            }
            return TableBody::Empty(EmptyState {
                clear_filters: input.clear_filters,
            });
        }

        TableBody::Rows(self.sorted(input.flows, input.columns))
    }
}
