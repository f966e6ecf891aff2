//! Error types for export operations

use report_model::DatasetShapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset shape error: {0}")]
    Shape(#[from] DatasetShapeError),

    /// A byte offset too large for the 10-digit cross-reference field
    #[error("Byte offset {offset} does not fit a 10-digit xref entry")]
    OffsetOverflow { offset: u64 },

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
