//! The report dataset consumed by both encoders

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::error::{DatasetShapeError, Result};

/// strftime pattern for the calendar date used in headings and filenames
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Tabular data produced upstream and handed to an encoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDataset {
    /// Report identifier, used for filenames and logging
    pub report_type: String,
    /// Human-readable heading
    pub title: String,
    /// Ordered column names
    #[serde(default)]
    pub headers: Vec<String>,
    /// Ordered rows of cells
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl ReportDataset {
    /// Create an empty dataset
    pub fn new(
        report_type: impl Into<String>,
        title: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            report_type: report_type.into(),
            title: title.into(),
            headers: Vec::new(),
            rows: Vec::new(),
            generated_at,
        }
    }

    /// Set the column headers
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Append a row
    pub fn with_row<I, C>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a dataset from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The UTC calendar date of `generated_at`, e.g. `2025-01-01`
    pub fn generated_date(&self) -> String {
        self.generated_at.format(ISO_DATE_FORMAT).to_string()
    }

    /// Check that every row has exactly one cell per header
    ///
    /// Returns the first mismatching row.
    pub fn validate_shape(&self) -> std::result::Result<(), DatasetShapeError> {
        let expected = self.headers.len();
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, cells)) => Err(DatasetShapeError {
                row,
                expected,
                actual: cells.len(),
            }),
            None => Ok(()),
        }
    }

    /// Check if every row matches the header count
    pub fn is_well_shaped(&self) -> bool {
        self.validate_shape().is_ok()
    }
}
