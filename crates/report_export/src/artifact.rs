//! Export artifacts and the sink that receives them

use report_model::ReportDataset;

use crate::error::Result;
use crate::format::ExportFormat;

/// A finished export: the encoded bytes plus what a sink needs to save them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Encoded file contents
    pub bytes: Vec<u8>,
    /// Suggested file name, e.g. `report-loans-2025-01-01.pdf`
    pub filename: String,
    /// MIME type of `bytes`
    pub mime_type: &'static str,
}

impl ExportArtifact {
    /// Wrap encoded bytes for the given dataset and format
    pub fn new(dataset: &ReportDataset, format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            filename: artifact_filename(dataset, format),
            mime_type: format.mime_type(),
        }
    }

    /// Get the size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the artifact has no content
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// File name of an export: `report-<reportType>-<YYYY-MM-DD>.<ext>`
///
/// The report type is reduced to a single path component first.
pub fn artifact_filename(dataset: &ReportDataset, format: ExportFormat) -> String {
    format!(
        "report-{}-{}.{}",
        filename_component(&dataset.report_type),
        dataset.generated_date(),
        format.extension()
    )
}

/// Map separators and control characters to `-`, then collapse `..`
fn filename_component(value: &str) -> String {
    let mut out: String = value
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    while out.contains("..") {
        out = out.replace("..", "-");
    }
    out
}

/// Receives finished artifacts (browser download, file write, upload...)
pub trait ArtifactSink {
    /// Deliver one artifact
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<()>;
}

impl<S: ArtifactSink + ?Sized> ArtifactSink for &mut S {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<()> {
        (**self).deliver(artifact)
    }
}
