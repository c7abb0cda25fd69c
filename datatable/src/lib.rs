pub mod column;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod sort;
pub mod widget;

pub use column::{Column, SortDir, SortType};
pub use config::{Cell, ColumnSpec, Row, TableConfig};
pub use error::TableError;
pub use widget::TableWidget;
