//! PDF Export Module
//!
//! Builds a single-page report PDF by hand. No compression, object streams
//! or embedded fonts: every byte is ASCII, so object offsets are computed
//! directly from the emitted bytes.
//!
//! # Architecture
//!
//! - `text`: printable-ASCII sanitization and string-literal escaping
//! - `objects`: PDF object model (Dictionary, Array, Stream, Reference)
//! - `content`: Content stream generation (text operators)
//! - `document`: The five-object report graph and its text lines
//! - `xref`: Byte offset tracking and the cross-reference table
//! - `writer`: Header, body, xref and trailer assembly

mod content;
mod document;
mod objects;
mod text;
mod writer;
mod xref;

pub use content::ContentStream;
pub use document::{
    build_content_stream, build_pdf_objects, report_lines, PdfIndirectObject, OBJECT_COUNT,
};
pub use objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
pub use text::{escape_pdf_string, sanitize_to_pdf_ascii, to_pdf_literal};
pub use writer::{assemble, encode_pdf, encode_pdf_lines, PDF_HEADER};
pub use xref::{
    track_offsets, write_xref_table, ByteCursor, OffsetTable, XrefEntry, XrefFlag,
    MAX_XREF_OFFSET, XREF_ENTRY_LEN,
};

#[cfg(test)]
mod tests;
