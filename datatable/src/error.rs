//! Error types

use lightdom::DomError;

/// Errors from widget operations.
///
/// Every failing operation leaves widget state untouched; callers that
/// only care about the source's boolean contract can ignore the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The render target id does not resolve to a mounted container.
    #[error("render target not mounted: {0:?}")]
    TargetNotFound(String),

    /// An operation requiring a render target was called before `init`.
    #[error("widget has not been initialized")]
    NotInitialized,

    /// The named column does not exist.
    #[error("unknown column: {0:?}")]
    UnknownColumn(String),

    /// The named column is not marked sortable.
    #[error("column is not sortable: {0:?}")]
    NotSortable(String),

    /// Requested page lies outside `1..=num_pages`.
    #[error("page {page} out of range 1..={num_pages}")]
    PageOutOfRange { page: usize, num_pages: usize },

    /// Rows per page must be at least 1.
    #[error("invalid rows per page: {0}")]
    InvalidRowsPerPage(usize),

    /// An element the operation needs is missing from the document.
    #[error(transparent)]
    Dom(#[from] DomError),
}
