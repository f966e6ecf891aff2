//! Report Export - CSV and PDF encoders for report datasets
//!
//! This crate turns a [`ReportDataset`] into a downloadable artifact:
//! always-quoted CSV text, or a single-page PDF assembled byte by byte
//! (five indirect objects, an uncompressed cross-reference table and a
//! trailer). No document-generation or CSV-writing library is involved.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use report_export::{export, ExportFormat, ExportOptions};
//! use report_model::ReportDataset;
//!
//! let generated_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let dataset = ReportDataset::new("loans", "Loans", generated_at)
//!     .with_headers(["Code", "User"])
//!     .with_row(["1", "42"]);
//!
//! let artifact = export(&dataset, ExportFormat::Csv, &ExportOptions::default()).unwrap();
//! assert_eq!(artifact.filename, "report-loans-2025-01-01.csv");
//! assert_eq!(artifact.bytes, b"\"Code\",\"User\"\n\"1\",\"42\"");
//! ```

mod api;
mod artifact;
mod csv_writer;
mod error;
mod format;
mod options;
pub mod pdf;

pub use api::{export, export_csv, export_pdf};
pub use artifact::{artifact_filename, ArtifactSink, ExportArtifact};
pub use csv_writer::{encode_csv, encode_csv_row, quote_csv_field};
pub use error::{ExportError, Result};
pub use format::ExportFormat;
pub use options::{ExportOptions, PdfLayout, ShapePolicy};

pub use report_model::{CellValue, ReportDataset};
