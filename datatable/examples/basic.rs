//! Build a table from a JSON payload, poke at it the way a host page
//! would, and dump the resulting tree as HTML after each step.

use datatable::render::ids;
use datatable::{TableConfig, TableWidget};
use lightdom::{html, Document, Event};
use simplelog::{Config, LevelFilter, SimpleLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::init(LevelFilter::Debug, Config::default())?;

    let config: TableConfig = serde_json::from_value(serde_json::json!({
        "title": "Parts inventory",
        "columns": ["part", "bin", "count", "price"],
        "columnData": {
            "part": { "display": true, "sortable": true },
            "bin": { "display": true },
            "count": { "display": true, "sortable": true, "sortType": "number" },
            "price": { "sortable": true, "sortType": "number" }
        },
        "data": [
            { "part": { "content": "bolt m10" }, "bin": { "content": "A3" },
              "count": { "content": "1,200" }, "price": { "content": "0.12" } },
            { "part": { "content": "bolt m3" }, "bin": { "content": "A1" },
              "count": { "content": "80" }, "price": { "content": "0.05" } },
            { "part": { "content": "washer", "onClick": "openPart(3)", "classes": ["low-stock"] },
              "bin": { "content": "B2" },
              "count": { "content": "7" }, "price": { "content": "0.01" } }
        ]
    }))?;

    let mut doc = Document::new();
    doc.mount("inventory");

    let mut widget = TableWidget::new();
    widget.init(&mut doc, config, "inventory")?;

    println!("--- initial render ---");
    println!("{}", html::to_html(doc.root("inventory").unwrap()));

    // Click the "count" header twice: ascending, then descending.
    widget.handle_event(&mut doc, &Event::click("header-count"))?;
    widget.handle_event(&mut doc, &Event::click("header-count"))?;

    println!("--- sorted by count, descending ---");
    println!("{}", html::to_html(doc.root("inventory").unwrap()));

    // Hide the bin column via its checkbox.
    widget.handle_event(&mut doc, &Event::click(ids::toggle_checkbox("bin")))?;

    println!("--- bin column hidden ---");
    println!("{}", html::to_html(doc.root("inventory").unwrap()));

    Ok(())
}
