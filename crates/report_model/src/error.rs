//! Error types for report model operations

use thiserror::Error;

/// A row whose cell count does not match the header count
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Row {row} has {actual} cells, expected {expected}")]
pub struct DatasetShapeError {
    /// Zero-based index of the offending row
    pub row: usize,
    /// Number of headers
    pub expected: usize,
    /// Number of cells found in the row
    pub actual: usize,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
