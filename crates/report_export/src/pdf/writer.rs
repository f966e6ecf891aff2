//! PDF Writer
//!
//! Concatenates the file structure: header, body, cross-reference table and
//! trailer. Everything is literal ASCII, so `startxref` and every xref entry
//! can be checked against the output bytes directly.

use report_model::ReportDataset;

use super::document::{build_pdf_objects, report_lines, PdfIndirectObject, CATALOG_OBJ};
use super::objects::{serialize, PdfDictionary, PdfObject};
use super::text::escape_pdf_string;
use super::xref::{track_offsets, write_xref_table, OffsetTable};
use crate::error::Result;
use crate::options::{ExportOptions, PdfLayout};

/// File header of every report document
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n";

/// Concatenate header, objects, xref table and trailer
///
/// `offsets` must come from [`track_offsets`] over the same header and
/// objects.
pub fn assemble(
    header: &[u8],
    objects: &[PdfIndirectObject],
    offsets: &OffsetTable,
) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(
        header.len() + objects.iter().map(PdfIndirectObject::len).sum::<usize>() + 256,
    );
    out.extend_from_slice(header);
    for obj in objects {
        out.extend_from_slice(&obj.body);
    }
    out.extend_from_slice(&write_xref_table(offsets)?);
    out.extend_from_slice(&write_trailer(objects.len() + 1, CATALOG_OBJ, offsets.xref_start));
    Ok(out)
}

/// `trailer`, the trailer dictionary, `startxref` and the EOF marker
fn write_trailer(size: usize, root: u32, xref_start: u64) -> Vec<u8> {
    let trailer = PdfDictionary::new()
        .with("Size", PdfObject::int(size as i64))
        .with("Root", PdfObject::reference(root));

    let mut out = b"trailer\n".to_vec();
    out.extend_from_slice(&serialize(&trailer.into()));
    out.extend_from_slice(format!("\nstartxref\n{}\n%%EOF", xref_start).as_bytes());
    out
}

/// Encode sanitized lines as a complete single-page PDF
///
/// Each line is escaped before it is placed in the content stream.
pub fn encode_pdf_lines(lines: &[String], layout: &PdfLayout) -> Result<Vec<u8>> {
    let escaped: Vec<String> = lines.iter().map(|line| escape_pdf_string(line)).collect();
    let objects = build_pdf_objects(&escaped, layout);
    let offsets = track_offsets(PDF_HEADER, &objects);
    assemble(PDF_HEADER, &objects, &offsets)
}

/// Encode a dataset as a single-page PDF
///
/// Shape validation is the caller's concern; see [`crate::export_pdf`].
pub fn encode_pdf(dataset: &ReportDataset, options: &ExportOptions) -> Result<Vec<u8>> {
    let lines = report_lines(dataset, options);
    let pdf = encode_pdf_lines(&lines, &options.layout)?;
    tracing::debug!(
        report_type = %dataset.report_type,
        lines = lines.len(),
        bytes = pdf.len(),
        "Encoded PDF export"
    );
    Ok(pdf)
}
