//! SortError for header clicks

/// Why a header click could not reorder its table.
///
/// Every variant is raised before any row moves, so a failed sort leaves
/// the table untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The clicked header is no longer in the document.
    #[error("Header '{header}' not found in document")]
    HeaderNotFound { header: String },

    /// The header has no enclosing table.
    #[error("Header '{header}' is not inside a table")]
    NoTable { header: String },

    /// The enclosing table has no body to sort.
    #[error("Table '{table}' has no tbody")]
    NoTableBody { table: String },

    /// A row has fewer cells than the clicked column index.
    #[error("Row '{row}' has {cells} cells, column {index} is out of range")]
    ColumnOutOfRange {
        row: String,
        index: usize,
        cells: usize,
    },
}
