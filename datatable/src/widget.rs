//! Widget state and lifecycle.

use log::{debug, warn};

use lightdom::Document;

use crate::column::{Column, SortDir};
use crate::config::{Row, TableConfig};
use crate::error::TableError;
use crate::render::{classes, ids};
use crate::sort;

/// Columns auto-promoted to visible at init time until this many display,
/// or every column if fewer exist.
pub const MIN_DISPLAY_COLUMNS: usize = 5;

pub const DEFAULT_ROWS_PER_PAGE: usize = 25;
pub const DEFAULT_TITLE: &str = "Data Table";

/// The table widget: owns its state, derives the sorted view, and renders
/// into a mounted container of a [`Document`].
///
/// Each instance is fully independent; to run several tables, give each
/// its own instance and its own mount.
#[derive(Debug, Clone)]
pub struct TableWidget {
    pub(crate) title: String,
    pub(crate) columns: Vec<Column>,
    /// The raw dataset, in declaration order.
    pub(crate) rows: Vec<Row>,
    /// The sorted view: a permutation of indices into `rows`.
    pub(crate) view: Vec<usize>,
    pub(crate) target: Option<String>,
    pub(crate) current_page: usize,
    pub(crate) rows_per_page: usize,
    pub(crate) num_pages: usize,
    pub(crate) sort_key: Option<String>,
    pub(crate) sort_dir: SortDir,
}

impl Default for TableWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl TableWidget {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
            view: Vec::new(),
            target: None,
            current_page: 1,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            num_pages: 0,
            sort_key: None,
            sort_dir: SortDir::None,
        }
    }

    /// Restore every piece of state to its default. Does not touch the
    /// render target.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Initialize the widget: store the dataset, build the column list,
    /// apply the minimum-visible-columns rule, and perform a full render
    /// into the container mounted under `target`.
    pub fn init(
        &mut self,
        dom: &mut Document,
        config: TableConfig,
        target: &str,
    ) -> Result<(), TableError> {
        if !dom.is_mounted(target) {
            return Err(TableError::TargetNotFound(target.to_string()));
        }

        self.reset();
        self.target = Some(target.to_string());
        if let Some(title) = config.title {
            self.title = title;
        }

        let mut displayable = 0;
        for name in &config.columns {
            let spec = config.column_data.get(name).cloned().unwrap_or_default();
            if spec.display {
                displayable += 1;
            }
            self.columns.push(Column {
                name: name.clone(),
                display: spec.display,
                sortable: spec.sortable,
                sort_type: spec.sort_type,
            });
        }

        // Promote hidden columns, in declaration order, until enough show.
        for column in &mut self.columns {
            if displayable >= MIN_DISPLAY_COLUMNS {
                break;
            }
            if !column.display {
                column.display = true;
                displayable += 1;
            }
        }

        self.rows = config.data;
        self.view = (0..self.rows.len()).collect();
        self.recompute_pages();

        debug!(
            "init: {} rows, {} columns ({} displayed), {} pages",
            self.rows.len(),
            self.columns.len(),
            displayable,
            self.num_pages
        );

        self.redraw(dom, 1)
    }

    /// Swap in a new dataset, keeping columns and settings. The active
    /// sort (if any) is reapplied to the new data before rendering, and
    /// the current page is preserved when still valid, otherwise clamped
    /// to the last page.
    pub fn update_data(&mut self, dom: &mut Document, data: Vec<Row>) -> Result<(), TableError> {
        self.target()?;

        self.rows = data;
        if let Some(key) = self.sort_key.clone() {
            let sort_type = self
                .column(&key)
                .map(|c| c.sort_type)
                .unwrap_or_default();
            let dir = if self.sort_dir == SortDir::Desc {
                SortDir::Desc
            } else {
                SortDir::Asc
            };
            self.view = sort::sort_rows(&self.rows, &key, sort_type, dir);
        } else {
            self.view = (0..self.rows.len()).collect();
        }

        self.recompute_pages();
        let last_page = self.num_pages.max(1);
        if self.current_page > last_page {
            debug!("update_data: clamping page {} to {last_page}", self.current_page);
            self.current_page = last_page;
        }

        self.redraw(dom, self.current_page)
    }

    /// Full render: control header, header row, body for the given page,
    /// and footer, replacing the target container's contents. Like the
    /// source, this will happily draw an out-of-range page as an empty
    /// body when called directly.
    pub fn redraw(&self, dom: &mut Document, page: usize) -> Result<(), TableError> {
        let target = self.target()?;
        let container = self.build_container(page);
        dom.set_children_in(target, target, vec![container])?;
        Ok(())
    }

    /// Toggle sort state for a column: unsorted -> ascending ->
    /// descending -> ascending -> ... Switching the sorted column clears
    /// the previous header's indicator. Only the body is re-rendered.
    pub fn sort_column(&mut self, dom: &mut Document, column: &str) -> Result<(), TableError> {
        let target = self.target()?.to_string();
        let col = self
            .column(column)
            .ok_or_else(|| TableError::UnknownColumn(column.to_string()))?;
        if !col.sortable {
            return Err(TableError::NotSortable(column.to_string()));
        }
        let sort_type = col.sort_type;

        // The header must exist in the document; a hidden column cannot
        // carry a sort indicator.
        let header_id = ids::header(column);
        dom.element_in(&target, &header_id)?;

        if let Some(prev) = &self.sort_key {
            if prev != column {
                let prev_id = ids::header(prev);
                if let Err(err) = dom.with_element_mut(&target, &prev_id, |el| {
                    el.remove_class_prefix(classes::SORTED_PREFIX)
                }) {
                    debug!("sort_column: previous header {prev_id:?} not present: {err}");
                }
            }
        }

        let dir = if self.sort_key.as_deref() == Some(column) {
            match self.sort_dir {
                SortDir::Asc => SortDir::Desc,
                // Once sorted, a column never returns to unsorted here.
                SortDir::Desc | SortDir::None => SortDir::Asc,
            }
        } else {
            SortDir::Asc
        };

        self.sort_key = Some(column.to_string());
        self.sort_dir = dir;
        // Always a fresh derivation from the raw dataset.
        self.view = sort::sort_rows(&self.rows, column, sort_type, dir);

        dom.with_element_mut(&target, &header_id, |el| {
            el.remove_class_prefix(classes::SORTED_PREFIX);
            el.add_class(format!("{}{}", classes::SORTED_PREFIX, dir.as_str()));
        })?;

        debug!("sort_column: {column:?} {}", dir.as_str());
        self.render_body(dom, self.current_page)
    }

    /// Clear the sort key and direction, strip the header indicator, and
    /// restore declaration order, re-rendering the body.
    pub fn reset_sort(&mut self, dom: &mut Document) -> Result<(), TableError> {
        let target = self.target()?.to_string();

        if let Some(prev) = self.sort_key.take() {
            let prev_id = ids::header(&prev);
            if let Err(err) = dom.with_element_mut(&target, &prev_id, |el| {
                el.remove_class_prefix(classes::SORTED_PREFIX)
            }) {
                debug!("reset_sort: header {prev_id:?} not present: {err}");
            }
        }

        self.sort_dir = SortDir::None;
        self.view = (0..self.rows.len()).collect();
        self.render_body(dom, self.current_page)
    }

    /// Move to a page within `1..=num_pages`, re-rendering only the body.
    /// The page is committed only once the render succeeds.
    pub fn change_page(&mut self, dom: &mut Document, page: usize) -> Result<(), TableError> {
        self.target()?;
        if page == 0 || page > self.num_pages {
            warn!("change_page: page {page} out of range 1..={}", self.num_pages);
            return Err(TableError::PageOutOfRange {
                page,
                num_pages: self.num_pages,
            });
        }

        self.render_body(dom, page)?;
        self.current_page = page;
        Ok(())
    }

    /// Change the page size, jumping back to page 1 and recomputing the
    /// page count from the current view. Full render.
    pub fn set_rows_per_page(&mut self, dom: &mut Document, rows: usize) -> Result<(), TableError> {
        self.target()?;
        if rows == 0 {
            return Err(TableError::InvalidRowsPerPage(rows));
        }

        self.rows_per_page = rows;
        self.current_page = 1;
        self.recompute_pages();
        self.redraw(dom, 1)
    }

    /// Flip a column's visibility and re-render header plus body at the
    /// current page. Sort and pagination state are untouched, and no
    /// minimum-visible rule applies after init.
    pub fn toggle_column(&mut self, dom: &mut Document, name: &str) -> Result<(), TableError> {
        let target = self.target()?.to_string();

        let mut display = None;
        for column in &mut self.columns {
            if column.name == name {
                column.display = !column.display;
                display = Some(column.display);
            }
        }
        let Some(display) = display else {
            return Err(TableError::UnknownColumn(name.to_string()));
        };

        // Keep the control-panel checkbox in sync when toggled via API
        // rather than through its own click.
        let checkbox_id = ids::toggle_checkbox(name);
        if let Err(err) =
            dom.with_element_mut(&target, &checkbox_id, |el| el.set_checked(display))
        {
            debug!("toggle_column: checkbox {checkbox_id:?} not present: {err}");
        }

        let table = self.build_table(self.current_page);
        dom.with_element_mut(&target, ids::TABLE, |el| *el = table)?;
        Ok(())
    }

    /// Body-only partial render of the given page.
    pub(crate) fn render_body(&self, dom: &mut Document, page: usize) -> Result<(), TableError> {
        let target = self.target()?;
        let body = self.build_body(page);
        dom.with_element_mut(target, ids::BODY, |el| *el = body)?;
        Ok(())
    }

    pub(crate) fn recompute_pages(&mut self) {
        self.num_pages = self.view.len().div_ceil(self.rows_per_page);
    }

    pub(crate) fn target(&self) -> Result<&str, TableError> {
        self.target.as_deref().ok_or(TableError::NotInitialized)
    }

    // Accessors

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }

    pub fn sort_dir(&self) -> SortDir {
        self.sort_dir
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in view order.
    pub fn sorted_rows(&self) -> impl Iterator<Item = &Row> {
        self.view.iter().map(|&i| &self.rows[i])
    }

    /// Rows belonging to one page of the view, in order.
    pub fn page_rows(&self, page: usize) -> impl Iterator<Item = &Row> {
        let start = (page.saturating_sub(1)) * self.rows_per_page;
        self.view
            .iter()
            .skip(start)
            .take(self.rows_per_page)
            .map(|&i| &self.rows[i])
    }
}
