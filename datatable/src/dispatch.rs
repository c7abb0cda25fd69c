//! Event dispatch: routes host events to widget operations.
//!
//! Instead of closures rebuilt on every render, interactive elements
//! carry a stable role (and, where relevant, a column name) in their
//! data map; dispatch reads those back and invokes the matching
//! operation directly.

use lightdom::{Document, Event};
use log::debug;

use crate::error::TableError;
use crate::render::ids;
use crate::widget::TableWidget;

/// Data-map keys and role values attached to interactive elements.
pub mod roles {
    pub const ROLE_KEY: &str = "role";
    pub const COLUMN_KEY: &str = "column";

    pub const SORT_HEADER: &str = "sort-header";
    pub const TOGGLE_COLUMN: &str = "toggle-column";
    pub const PAGE_INPUT: &str = "page-input";
    pub const ROWS_INPUT: &str = "rows-input";
}

impl TableWidget {
    /// Handle a host event targeted at one of this widget's elements.
    ///
    /// Returns `Ok(true)` when the event changed widget state, `Ok(false)`
    /// when it was ignored (not one of ours, no-op input, non-numeric
    /// input), and an error when the targeted operation rejected it.
    pub fn handle_event(&mut self, dom: &mut Document, event: &Event) -> Result<bool, TableError> {
        let target = self.target()?.to_string();

        let Ok(element) = dom.element_in(&target, event.target()) else {
            return Ok(false);
        };
        let Some(role) = element.get_data(roles::ROLE_KEY) else {
            return Ok(false);
        };
        let role = role.to_string();
        let column = element.get_data(roles::COLUMN_KEY).map(str::to_string);

        match (event, role.as_str()) {
            (Event::Click { .. }, roles::SORT_HEADER) => {
                let column = column.ok_or_else(|| TableError::UnknownColumn(String::new()))?;
                self.sort_column(dom, &column)?;
                Ok(true)
            }
            (Event::Click { .. }, roles::TOGGLE_COLUMN) => {
                let column = column.ok_or_else(|| TableError::UnknownColumn(String::new()))?;
                self.toggle_column(dom, &column)?;
                Ok(true)
            }
            // The page and size controls react to both clicks (spinner
            // arrows, select) and key releases (typed values).
            (_, roles::PAGE_INPUT) => {
                let value = dom.value_in(&target, ids::PAGE_INPUT)?;
                let Some(page) = parse_control_value(&value) else {
                    debug!("ignoring non-numeric page input {value:?}");
                    return Ok(false);
                };
                if page == self.current_page() {
                    return Ok(false);
                }
                self.change_page(dom, page)?;
                Ok(true)
            }
            (_, roles::ROWS_INPUT) => {
                let value = dom.value_in(&target, ids::ROWS_INPUT)?;
                let Some(rows) = parse_control_value(&value) else {
                    debug!("ignoring non-numeric rows-per-page input {value:?}");
                    return Ok(false);
                };
                if rows == self.rows_per_page() {
                    return Ok(false);
                }
                self.set_rows_per_page(dom, rows)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Accept only numeric control values; anything containing a letter is
/// ignored, as is an empty or unparseable value.
fn parse_control_value(value: &str) -> Option<usize> {
    let value = value.trim();
    if value.is_empty() || value.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_control_value;

    #[test]
    fn test_parse_control_value() {
        assert_eq!(parse_control_value("3"), Some(3));
        assert_eq!(parse_control_value(" 25 "), Some(25));
        assert_eq!(parse_control_value(""), None);
        assert_eq!(parse_control_value("2a"), None);
        assert_eq!(parse_control_value("abc"), None);
        assert_eq!(parse_control_value("-1"), None);
    }
}
