//! Report Export Public API
//!
//! Format dispatch: validate the dataset shape according to the options,
//! run the chosen encoder and wrap the bytes in an [`ExportArtifact`].

use report_model::ReportDataset;

use crate::artifact::ExportArtifact;
use crate::csv_writer::encode_csv;
use crate::error::Result;
use crate::format::ExportFormat;
use crate::options::{ExportOptions, ShapePolicy};
use crate::pdf::encode_pdf;

/// Export a dataset in the given format
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use report_export::{export, ExportFormat, ExportOptions};
/// use report_model::ReportDataset;
///
/// let generated_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let dataset = ReportDataset::new("loans", "Loans", generated_at)
///     .with_headers(["Code"])
///     .with_row(["1"]);
///
/// let artifact = export(&dataset, ExportFormat::Pdf, &ExportOptions::default()).unwrap();
/// assert!(artifact.bytes.starts_with(b"%PDF-1.4"));
/// assert_eq!(artifact.mime_type, "application/pdf");
/// ```
pub fn export(
    dataset: &ReportDataset,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<ExportArtifact> {
    check_shape(dataset, options)?;

    let bytes = match format {
        ExportFormat::Csv => encode_csv(dataset),
        ExportFormat::Pdf => encode_pdf(dataset, options)?,
    };

    let artifact = ExportArtifact::new(dataset, format, bytes);
    tracing::info!(
        report_type = %dataset.report_type,
        format = %format,
        filename = %artifact.filename,
        bytes = artifact.len(),
        "Report exported"
    );
    Ok(artifact)
}

/// Export a dataset as CSV
pub fn export_csv(dataset: &ReportDataset, options: &ExportOptions) -> Result<ExportArtifact> {
    export(dataset, ExportFormat::Csv, options)
}

/// Export a dataset as PDF
pub fn export_pdf(dataset: &ReportDataset, options: &ExportOptions) -> Result<ExportArtifact> {
    export(dataset, ExportFormat::Pdf, options)
}

fn check_shape(dataset: &ReportDataset, options: &ExportOptions) -> Result<()> {
    match (dataset.validate_shape(), options.shape_policy) {
        (Ok(()), _) => Ok(()),
        (Err(e), ShapePolicy::Strict) => Err(e.into()),
        (Err(e), ShapePolicy::Lenient) => {
            tracing::warn!(
                report_type = %dataset.report_type,
                "Exporting misaligned dataset: {}",
                e
            );
            Ok(())
        }
    }
}
