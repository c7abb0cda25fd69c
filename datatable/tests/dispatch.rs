use std::collections::HashMap;

use datatable::render::ids;
use datatable::{Cell, ColumnSpec, Row, SortDir, SortType, TableConfig, TableError, TableWidget};
use lightdom::{Document, Event};

const TARGET: &str = "table-target";

fn dom() -> Document {
    let mut doc = Document::new();
    doc.mount(TARGET);
    doc
}

fn config() -> TableConfig {
    let spec = |display, sortable, sort_type| ColumnSpec {
        display,
        sortable,
        sort_type,
    };
    TableConfig {
        title: Some("Parts".to_string()),
        columns: vec!["name".into(), "count".into()],
        column_data: HashMap::from([
            ("name".to_string(), spec(true, true, SortType::String)),
            ("count".to_string(), spec(true, true, SortType::Number)),
        ]),
        data: (0..30)
            .map(|i| {
                Row::from([
                    ("name".to_string(), Cell::new(format!("part{i}"))),
                    ("count".to_string(), Cell::new(i.to_string())),
                ])
            })
            .collect(),
    }
}

fn init() -> (Document, TableWidget) {
    let mut doc = dom();
    let mut widget = TableWidget::new();
    widget.init(&mut doc, config(), TARGET).unwrap();
    (doc, widget)
}

// ============================================================================
// Sort headers
// ============================================================================

#[test]
fn test_click_sortable_header_sorts() {
    let (mut doc, mut widget) = init();

    let handled = widget
        .handle_event(&mut doc, &Event::click("header-name"))
        .unwrap();
    assert!(handled);
    assert_eq!(widget.sort_key(), Some("name"));
    assert_eq!(widget.sort_dir(), SortDir::Asc);
    assert!(doc
        .element_in(TARGET, "header-name")
        .unwrap()
        .has_class("dataTable-sorted-asc"));
}

#[test]
fn test_click_header_again_flips_direction() {
    let (mut doc, mut widget) = init();

    widget
        .handle_event(&mut doc, &Event::click("header-name"))
        .unwrap();
    widget
        .handle_event(&mut doc, &Event::click("header-name"))
        .unwrap();
    assert_eq!(widget.sort_dir(), SortDir::Desc);
}

#[test]
fn test_click_other_header_moves_sort() {
    let (mut doc, mut widget) = init();

    widget
        .handle_event(&mut doc, &Event::click("header-name"))
        .unwrap();
    widget
        .handle_event(&mut doc, &Event::click("header-count"))
        .unwrap();

    assert_eq!(widget.sort_key(), Some("count"));
    assert!(!doc
        .element_in(TARGET, "header-name")
        .unwrap()
        .has_class("dataTable-sorted-asc"));
}

#[test]
fn test_keyup_on_header_is_ignored() {
    let (mut doc, mut widget) = init();

    let handled = widget
        .handle_event(&mut doc, &Event::key_up("header-name"))
        .unwrap();
    assert!(!handled);
    assert!(widget.sort_key().is_none());
}

// ============================================================================
// Column toggles
// ============================================================================

#[test]
fn test_click_checkbox_toggles_column() {
    let (mut doc, mut widget) = init();

    let handled = widget
        .handle_event(&mut doc, &Event::click(ids::toggle_checkbox("count")))
        .unwrap();
    assert!(handled);
    assert!(!widget.column("count").unwrap().display);
    assert!(doc.element_in(TARGET, "header-count").is_err());
}

// ============================================================================
// Page input
// ============================================================================

#[test]
fn test_page_input_keyup_changes_page() {
    let (mut doc, mut widget) = init();

    doc.set_value_in(TARGET, ids::PAGE_INPUT, "2").unwrap();
    let handled = widget
        .handle_event(&mut doc, &Event::key_up(ids::PAGE_INPUT))
        .unwrap();
    assert!(handled);
    assert_eq!(widget.current_page(), 2);
}

#[test]
fn test_page_input_ignores_alphabetic_value() {
    let (mut doc, mut widget) = init();

    doc.set_value_in(TARGET, ids::PAGE_INPUT, "2a").unwrap();
    let handled = widget
        .handle_event(&mut doc, &Event::key_up(ids::PAGE_INPUT))
        .unwrap();
    assert!(!handled);
    assert_eq!(widget.current_page(), 1);
}

#[test]
fn test_page_input_ignores_unchanged_value() {
    let (mut doc, mut widget) = init();

    doc.set_value_in(TARGET, ids::PAGE_INPUT, "1").unwrap();
    let handled = widget
        .handle_event(&mut doc, &Event::key_up(ids::PAGE_INPUT))
        .unwrap();
    assert!(!handled);
}

#[test]
fn test_page_input_out_of_range_fails() {
    let (mut doc, mut widget) = init();

    doc.set_value_in(TARGET, ids::PAGE_INPUT, "9").unwrap();
    let err = widget
        .handle_event(&mut doc, &Event::key_up(ids::PAGE_INPUT))
        .unwrap_err();
    assert_eq!(
        err,
        TableError::PageOutOfRange {
            page: 9,
            num_pages: 2
        }
    );
    assert_eq!(widget.current_page(), 1);
}

// ============================================================================
// Rows-per-page select
// ============================================================================

#[test]
fn test_rows_input_change() {
    let (mut doc, mut widget) = init();
    widget.change_page(&mut doc, 2).unwrap();

    doc.set_value_in(TARGET, ids::ROWS_INPUT, "50").unwrap();
    let handled = widget
        .handle_event(&mut doc, &Event::click(ids::ROWS_INPUT))
        .unwrap();
    assert!(handled);
    assert_eq!(widget.rows_per_page(), 50);
    assert_eq!(widget.current_page(), 1);
    assert_eq!(widget.num_pages(), 1);

    // Full render refreshed the select.
    let select = doc.element_in(TARGET, ids::ROWS_INPUT).unwrap();
    assert_eq!(select.get_attr("value"), Some("50"));
}

#[test]
fn test_rows_input_ignores_unchanged_value() {
    let (mut doc, mut widget) = init();

    doc.set_value_in(TARGET, ids::ROWS_INPUT, "25").unwrap();
    let handled = widget
        .handle_event(&mut doc, &Event::click(ids::ROWS_INPUT))
        .unwrap();
    assert!(!handled);
}

// ============================================================================
// Unrelated targets
// ============================================================================

#[test]
fn test_unknown_target_is_ignored() {
    let (mut doc, mut widget) = init();

    let handled = widget
        .handle_event(&mut doc, &Event::click("not-an-element"))
        .unwrap();
    assert!(!handled);
}

#[test]
fn test_element_without_role_is_ignored() {
    let (mut doc, mut widget) = init();

    let handled = widget
        .handle_event(&mut doc, &Event::click("bodyRow-0-column-name"))
        .unwrap();
    assert!(!handled);
}

#[test]
fn test_dispatch_before_init_fails() {
    let mut doc = dom();
    let mut widget = TableWidget::new();

    assert_eq!(
        widget.handle_event(&mut doc, &Event::click("header-name")),
        Err(TableError::NotInitialized)
    );
}
