//! The init-time input contract.
//!
//! Mirrors the object literal a host page would hand over: a title, an
//! ordered column list, per-column metadata, and the dataset. Absent
//! metadata flags are defaulted rather than rejected: a column with no
//! `display` flag starts hidden, one with no `sortable` flag is not
//! sortable, and the sort type falls back to natural string sort.

use std::collections::HashMap;

use serde::Deserialize;

use crate::column::SortType;

/// One cell of the table: required content plus optional extras that are
/// propagated onto the rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub content: String,
    /// Host-page click handler, forwarded verbatim as an `onClick`
    /// attribute; the widget never interprets it.
    #[serde(default)]
    pub on_click: Option<String>,
    /// Extra CSS classes appended after the structural cell class.
    #[serde(default)]
    pub classes: Vec<String>,
}

impl Cell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            on_click: None,
            classes: Vec::new(),
        }
    }

    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

/// A row maps column names to cells. Row identity is positional.
pub type Row = HashMap<String, Cell>;

/// Caller-supplied metadata for one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnSpec {
    pub display: bool,
    pub sortable: bool,
    pub sort_type: SortType,
}

/// Everything `init` needs, bundled the way the host page supplies it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    pub title: Option<String>,
    /// Column declaration order; also the render order.
    pub columns: Vec<String>,
    /// Metadata keyed by column name. Columns with no entry get defaults.
    pub column_data: HashMap<String, ColumnSpec>,
    pub data: Vec<Row>,
}
