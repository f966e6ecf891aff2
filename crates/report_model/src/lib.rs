//! Report Model - Tabular datasets handed to the export encoders
//!
//! An upstream aggregation step produces a [`ReportDataset`]: a title, an
//! ordered list of column headers, rows of [`CellValue`]s and the timestamp
//! the report was generated at. The dataset is never mutated after it is
//! built; encoders only borrow it.

mod cell;
mod dataset;
mod error;

pub use cell::CellValue;
pub use dataset::{ReportDataset, ISO_DATE_FORMAT};
pub use error::{DatasetShapeError, ModelError, Result};
