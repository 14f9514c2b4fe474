//! Error types for sheetlink core.

use thiserror::Error;

/// Errors that can occur while reading or writing a worksheet table
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Header not found: {name}")]
    HeaderNotFound { name: String },

    #[error("Unknown accessor: {name}")]
    UnknownAccessor { name: String },

    #[error("Index {index} out of range for column of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Failure reported by the grid collaborator (read, write or persist).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, SheetError>;
