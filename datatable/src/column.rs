use serde::Deserialize;

/// Comparator selection for a sortable column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Natural sort: embedded numeric substrings compare as numbers.
    #[default]
    String,
    /// Strict numeric sort (thousands-separator commas stripped).
    Number,
}

/// Active sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::None => "none",
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// A runtime column: name plus behavior flags.
///
/// Identity is the name; columns are created at `init` and never removed,
/// only their `display` flag changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub display: bool,
    pub sortable: bool,
    pub sort_type: SortType,
}
