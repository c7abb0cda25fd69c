//! Pure construction of the widget's element tree from state.
//!
//! Nothing in here mutates widget state or the document; the lifecycle
//! methods decide which of these trees to build and where to attach them.

use lightdom::Element;

use crate::column::{Column, SortDir};
use crate::config::Row;
use crate::dispatch::roles;
use crate::widget::TableWidget;

/// Page sizes offered by the footer select.
pub const ROWS_PER_PAGE_OPTIONS: &[usize] = &[25, 50, 100];

const PAGE_INPUT_TITLE: &str =
    "This can be typed into or, on browsers that support it, feel free to use the arrows";

/// Structural class names, stable so external stylesheets can target them.
pub mod classes {
    pub const CONTAINER: &str = "dataTable-container";
    pub const OVERFLOW: &str = "datatable-overflow-container";
    pub const TABLE: &str = "dataTable-table";

    pub const CONTROL: &str = "dataTable-control-container";
    pub const CONTROL_TITLE: &str = "dataTable-control-title";
    pub const TOGGLE_GROUP: &str = "dataTable-togglecolumn-con";
    pub const TOGGLE_CONTAINER: &str = "datatable-togglecolumn-container";
    pub const TOGGLE_CHECKBOX: &str = "dataTable-togglecolumn-checkbox";
    pub const TOGGLE_LABEL: &str = "dataTable-togglecolumn-label";

    pub const HEADER_ROW: &str = "dataTable-header-row";
    pub const HEADER_CELL: &str = "dataTable-header-column";
    pub const BODY: &str = "dataTable-body";
    pub const BODY_ROW: &str = "dataTable-body-row";
    pub const BODY_CELL: &str = "dataTable-body-column";

    pub const FOOTER: &str = "dataTable-footer-row";
    pub const FOOTER_ROWS: &str = "dataTable-footer-rows-container";
    pub const FOOTER_PAGE: &str = "dataTable-footer-page-container";

    pub const SORTABLE: &str = "dataTable-sortable";
    /// Followed by a [`SortDir`](crate::SortDir) name, e.g. `dataTable-sorted-asc`.
    pub const SORTED_PREFIX: &str = "dataTable-sorted-";
    pub const CLICKABLE: &str = "dataTable-clickable";
    pub const HOVERABLE: &str = "dataTable-hoverable";
    pub const UNSELECTABLE: &str = "datatable-unselectable";
    pub const HIDE: &str = "dataTable-hide";
}

/// Deterministic element ids. Column names pass through [`escape`] so the
/// derived ids stay identifier-safe; dispatch never parses names back out
/// of ids (the unescaped name rides in the element data map).
pub mod ids {
    pub const TABLE: &str = "dataTable-table";
    pub const BODY: &str = "dataTable-body";
    pub const PAGE_INPUT: &str = "datatable-footer-page-input";
    pub const ROWS_INPUT: &str = "datatable-footer-rows-input";

    pub fn header(column: &str) -> String {
        format!("header-{}", escape(column))
    }

    pub fn body_row(index: usize) -> String {
        format!("bodyRow-{index}")
    }

    pub fn body_cell(index: usize, column: &str) -> String {
        format!("bodyRow-{index}-column-{}", escape(column))
    }

    pub fn toggle_checkbox(column: &str) -> String {
        format!("dataTable-togglecolumn-{}", escape(column))
    }

    pub fn toggle_container(column: &str) -> String {
        format!("datatable-togglecolumn-container-{}", escape(column))
    }

    /// Replace anything outside `[A-Za-z0-9_-]` with `-`.
    pub fn escape(name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl TableWidget {
    /// The full widget tree for one page.
    pub(crate) fn build_container(&self, page: usize) -> Element {
        Element::div()
            .class(classes::CONTAINER)
            .child(self.build_control_header())
            .child(
                Element::div()
                    .class(classes::OVERFLOW)
                    .child(self.build_table(page)),
            )
            .child(self.build_footer())
    }

    /// Header plus body. When no column is displayed the table is hidden
    /// via class but keeps its children, so the body element stays
    /// addressable for partial renders.
    pub(crate) fn build_table(&self, page: usize) -> Element {
        let mut table = Element::div().id(ids::TABLE).class(classes::TABLE);
        if !self.columns.iter().any(|c| c.display) {
            table = table.class(classes::HIDE);
        }
        table
            .child(self.build_header_row())
            .child(self.build_body(page))
    }

    /// Title plus one checkbox/label pair per column.
    pub(crate) fn build_control_header(&self) -> Element {
        let title = Element::list()
            .class(classes::CONTROL_TITLE)
            .inner_text(&self.title);

        let mut items = Vec::new();
        for column in &self.columns {
            let checkbox_id = ids::toggle_checkbox(&column.name);
            let checkbox = Element::input()
                .id(&checkbox_id)
                .class(classes::TOGGLE_CHECKBOX)
                .attr("type", "checkbox")
                .checked(column.display)
                .clickable(true)
                .data(roles::ROLE_KEY, roles::TOGGLE_COLUMN)
                .data(roles::COLUMN_KEY, &column.name);

            let label = Element::label()
                .class(classes::TOGGLE_LABEL)
                .class(classes::UNSELECTABLE)
                .attr("for", &checkbox_id)
                .inner_text(&column.name);

            items.push(
                Element::list()
                    .id(ids::toggle_container(&column.name))
                    .class(classes::TOGGLE_CONTAINER)
                    .class(classes::UNSELECTABLE)
                    .child(checkbox)
                    .child(label),
            );
        }

        Element::div()
            .class(classes::CONTROL)
            .child(title)
            .child(Element::list().class(classes::TOGGLE_GROUP).children(items))
    }

    /// One cell per displayed column, in declaration order.
    pub(crate) fn build_header_row(&self) -> Element {
        let mut cells = Vec::new();
        for column in self.columns.iter().filter(|c| c.display) {
            let mut cell = Element::item()
                .id(ids::header(&column.name))
                .class(classes::HEADER_CELL)
                .class(classes::UNSELECTABLE)
                .class(classes::HOVERABLE)
                .inner_text(&column.name);

            if column.sortable {
                cell = cell
                    .class(classes::SORTABLE)
                    .clickable(true)
                    .data(roles::ROLE_KEY, roles::SORT_HEADER)
                    .data(roles::COLUMN_KEY, &column.name);

                if self.sort_key.as_deref() == Some(column.name.as_str())
                    && self.sort_dir != SortDir::None
                {
                    cell = cell.class(format!(
                        "{}{}",
                        classes::SORTED_PREFIX,
                        self.sort_dir.as_str()
                    ));
                }
            }

            cells.push(cell);
        }

        Element::list().class(classes::HEADER_ROW).children(cells)
    }

    /// Rows `[(page-1)*rows_per_page, page*rows_per_page)` of the view;
    /// the last page may be short.
    pub(crate) fn build_body(&self, page: usize) -> Element {
        let start = page.saturating_sub(1) * self.rows_per_page;
        let end = (page * self.rows_per_page).min(self.view.len());
        let start = start.min(end);

        let mut rows = Vec::new();
        for position in start..end {
            let row = &self.rows[self.view[position]];
            let cells: Vec<Element> = self
                .columns
                .iter()
                .filter(|c| c.display)
                .map(|column| build_cell(position, column, row))
                .collect();

            rows.push(
                Element::list()
                    .id(ids::body_row(position))
                    .class(classes::BODY_ROW)
                    .children(cells),
            );
        }

        Element::list()
            .id(ids::BODY)
            .class(classes::BODY)
            .children(rows)
    }

    /// Rows-per-page select and bounded page input.
    pub(crate) fn build_footer(&self) -> Element {
        let mut options = Vec::new();
        for &option in ROWS_PER_PAGE_OPTIONS {
            let mut el = Element::option_()
                .value(option.to_string())
                .inner_text(option.to_string());
            if option == self.rows_per_page {
                el = el.attr("selected", "selected");
            }
            options.push(el);
        }

        let rows_section = Element::list()
            .class(classes::FOOTER_ROWS)
            .child(Element::text("Rows per page:"))
            .child(
                Element::select()
                    .id(ids::ROWS_INPUT)
                    .value(self.rows_per_page.to_string())
                    .clickable(true)
                    .data(roles::ROLE_KEY, roles::ROWS_INPUT)
                    .children(options),
            );

        let page_section = Element::list()
            .class(classes::FOOTER_PAGE)
            .child(Element::text("Page:"))
            .child(
                Element::input()
                    .id(ids::PAGE_INPUT)
                    .attr("type", "number")
                    .attr("min", "1")
                    .attr("max", self.num_pages.to_string())
                    .attr("title", PAGE_INPUT_TITLE)
                    .value(self.current_page.to_string())
                    .clickable(true)
                    .data(roles::ROLE_KEY, roles::PAGE_INPUT),
            )
            .child(Element::text(format!("of {}", self.num_pages)));

        Element::div()
            .class(classes::FOOTER)
            .child(rows_section)
            .child(page_section)
    }
}

fn build_cell(position: usize, column: &Column, row: &Row) -> Element {
    let cell = row.get(&column.name);
    let content = cell.map(|c| c.content.as_str()).unwrap_or("");

    let mut el = Element::item()
        .id(ids::body_cell(position, &column.name))
        .class(classes::BODY_CELL)
        .inner_text(content);

    if let Some(cell) = cell {
        if let Some(handler) = &cell.on_click {
            el = el
                .attr("onClick", handler)
                .class(classes::CLICKABLE)
                .clickable(true);
        }
        el = el.classes(cell.classes.iter().cloned());
    }

    el
}
