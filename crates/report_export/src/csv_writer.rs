//! CSV encoder
//!
//! Every field is wrapped in double quotes whether it needs them or not, and
//! embedded quotes are doubled. Downstream consumers rely on the quoting, so
//! this is not the RFC 4180 "quote only when needed" rule. Text is written
//! unchanged; no sanitization happens here.

use report_model::{CellValue, ReportDataset};

/// Quote a single field
pub fn quote_csv_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Encode one row: quoted fields joined by `,`
pub fn encode_csv_row<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|field| quote_csv_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode a dataset as UTF-8 CSV
///
/// The header row comes first, rows are separated by `\n` and there is no
/// trailing newline.
pub fn encode_csv(dataset: &ReportDataset) -> Vec<u8> {
    let mut lines = Vec::with_capacity(dataset.rows.len() + 1);
    lines.push(encode_csv_row(&dataset.headers));
    lines.extend(
        dataset
            .rows
            .iter()
            .map(|row| encode_csv_row(row.iter().map(CellValue::to_display_string))),
    );

    let csv = lines.join("\n");
    tracing::debug!(
        report_type = %dataset.report_type,
        rows = dataset.rows.len(),
        bytes = csv.len(),
        "Encoded CSV export"
    );
    csv.into_bytes()
}
