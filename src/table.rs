use std::collections::{BTreeMap, BTreeSet};

use crate::schema::{Column, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// The mutable search/filter/sort/pagination configuration of one table
/// instance. Created with the table, mutated by user interaction, never
/// persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub search: String,
    /// column id -> filter needle; combined with AND semantics
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortKey>,
    page: usize,
    pub page_size: usize,
    hidden: BTreeSet<String>,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
            hidden: BTreeSet::new(),
        }
    }
}

/// An active per-column filter, for rendering as a removable badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBadge {
    pub column: String,
    pub header: String,
    pub value: String,
}

/// The render-ready result of one derivation pass: the page slice plus
/// pagination metadata and filter badges. Borrows rows from the table.
pub struct DerivedView<'a, R> {
    pub rows: Vec<&'a R>,
    pub page: usize,
    pub total_pages: usize,
    /// rows surviving search + filters (across all pages)
    pub filtered_count: usize,
    /// 1-based index of the first row shown, 0 when empty
    pub start: usize,
    /// 1-based index of the last row shown, 0 when empty
    pub end: usize,
    pub active_filters: Vec<FilterBadge>,
    pub sort: Option<SortKey>,
}

impl<R> DerivedView<'_, R> {
    /// Empty filtered result. Renders as an explicit "no results" row,
    /// never as an error.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

const DEFAULT_PAGE_SIZE: usize = 10;

/// A table instance: schema, the rows it was given, and its view state.
///
/// All mutators are cheap state updates; `derive()` is the single pure
/// recompute producing what the host renders. Identical (schema, rows,
/// state) always derive the identical ordered view.
pub struct TableView<R> {
    schema: Schema<R>,
    rows: Vec<R>,
    state: ViewState,
}

impl<R> TableView<R> {
    pub fn new(schema: Schema<R>, rows: Vec<R>) -> Self {
        Self {
            schema,
            rows,
            state: ViewState::new(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.state.page_size = page_size.max(1);
        self
    }

    pub fn schema(&self) -> &Schema<R> {
        &self.schema
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Global search across every filterable column; a row matches when
    /// any such column's stringified value contains the term.
    pub fn set_search_term(&mut self, term: &str) {
        self.state.search = term.to_string();
        self.state.page = 1;
    }

    /// Set or overwrite a per-column filter. An empty value clears it.
    /// Unknown or non-filterable column ids are ignored.
    pub fn set_column_filter(&mut self, column: &str, value: &str) {
        match self.schema.column(column) {
            Some(col) if col.filterable => {}
            _ => return,
        }
        if value.is_empty() {
            self.state.filters.remove(column);
        } else {
            self.state.filters.insert(column.to_string(), value.to_string());
        }
        self.state.page = 1;
    }

    /// Remove one column filter (the badge's × button).
    pub fn remove_filter(&mut self, column: &str) {
        self.state.filters.remove(column);
        self.state.page = 1;
    }

    /// Clear search and all column filters. Sort state is independent and
    /// survives; use `clear_sort` to reset it.
    pub fn clear_filters(&mut self) {
        self.state.search.clear();
        self.state.filters.clear();
        self.state.page = 1;
    }

    pub fn clear_sort(&mut self) {
        self.state.sort = None;
    }

    /// Toggle sort on a column: first call ascending, second call on the
    /// same column descending, and so on. Only one sort key is active at
    /// a time; sorting a different column starts over ascending.
    pub fn sort_by(&mut self, column: &str) {
        match self.schema.column(column) {
            Some(col) if col.sortable => {}
            _ => return,
        }
        let direction = match &self.state.sort {
            Some(key) if key.column == column && key.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };
        self.state.sort = Some(SortKey {
            column: column.to_string(),
            direction,
        });
    }

    /// Move to page `n`, clamped into [1, total_pages] for the current
    /// filtered row count. Out-of-range requests clamp, never error.
    pub fn set_page(&mut self, n: usize) {
        let total = total_pages(self.filtered_indices().len(), self.state.page_size);
        self.state.page = n.clamp(1, total);
    }

    /// Show/hide a column. Visibility only affects rendering and export;
    /// hidden columns still participate in search, filters, and sort.
    pub fn toggle_column(&mut self, column: &str) {
        if self.schema.column(column).is_none() {
            return;
        }
        if !self.state.hidden.remove(column) {
            self.state.hidden.insert(column.to_string());
        }
    }

    pub fn is_column_visible(&self, column: &str) -> bool {
        !self.state.hidden.contains(column)
    }

    /// Columns to render/export, in schema order.
    pub fn visible_columns(&self) -> Vec<&Column<R>> {
        self.schema
            .columns()
            .iter()
            .filter(|c| !self.state.hidden.contains(&c.id))
            .collect()
    }

    /// The full filtered and sorted row set, ignoring pagination. Export
    /// serializes exactly this.
    pub fn filtered_sorted(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self
            .filtered_indices()
            .into_iter()
            .map(|i| &self.rows[i])
            .collect();

        if let Some(key) = &self.state.sort {
            if let Some(col) = self.schema.column(&key.column) {
                // Stable sort, so ties keep their incoming order. Null is
                // the smallest value: first ascending, last descending.
                rows.sort_by(|a, b| {
                    let ord = col.value(a).cmp(&col.value(b));
                    match key.direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                });
            }
        }
        rows
    }

    /// Recompute the render-ready view from the current state.
    pub fn derive(&self) -> DerivedView<'_, R> {
        let rows = self.filtered_sorted();
        let filtered_count = rows.len();
        let total_pages = total_pages(filtered_count, self.state.page_size);
        // Re-clamp: a filter may have shrunk the row set since set_page.
        let page = self.state.page.clamp(1, total_pages);

        let start_idx = (page - 1) * self.state.page_size;
        let page_rows: Vec<&R> = rows
            .into_iter()
            .skip(start_idx)
            .take(self.state.page_size)
            .collect();

        let (start, end) = if page_rows.is_empty() {
            (0, 0)
        } else {
            (start_idx + 1, start_idx + page_rows.len())
        };

        let active_filters = self
            .state
            .filters
            .iter()
            .filter_map(|(id, value)| {
                self.schema.column(id).map(|col| FilterBadge {
                    column: id.clone(),
                    header: col.header.clone(),
                    value: value.clone(),
                })
            })
            .collect();

        DerivedView {
            rows: page_rows,
            page,
            total_pages,
            filtered_count,
            start,
            end,
            active_filters,
            sort: self.state.sort.clone(),
        }
    }

    fn filtered_indices(&self) -> Vec<usize> {
        let search = self.state.search.to_lowercase();
        (0..self.rows.len())
            .filter(|&i| {
                let row = &self.rows[i];
                if !search.is_empty() {
                    let hit = self
                        .schema
                        .columns()
                        .iter()
                        .filter(|c| c.filterable)
                        .any(|c| c.value(row).matches(&search));
                    if !hit {
                        return false;
                    }
                }
                self.state.filters.iter().all(|(id, needle)| {
                    match self.schema.column(id) {
                        Some(col) => col.value(row).matches(&needle.to_lowercase()),
                        None => true,
                    }
                })
            })
            .collect()
    }
}

fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size).max(1)
}
