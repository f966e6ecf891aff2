//! PDF document structure
//!
//! The report document is a fixed graph of five indirect objects:
//!
//! 1. Catalog
//! 2. Pages (one kid)
//! 3. Page, 612x792 by default, referencing the content stream and font
//! 4. Content stream
//! 5. Font (standard Type1 Helvetica)

use report_model::{CellValue, ReportDataset};

use super::content::ContentStream;
use super::objects::{serialize, PdfDictionary, PdfObject, PdfStream};
use super::text::sanitize_to_pdf_ascii;
use crate::options::{ExportOptions, PdfLayout};

/// Object number of the document catalog
pub const CATALOG_OBJ: u32 = 1;
/// Object number of the page tree root
pub const PAGES_OBJ: u32 = 2;
/// Object number of the single page
pub const PAGE_OBJ: u32 = 3;
/// Object number of the page content stream
pub const CONTENT_OBJ: u32 = 4;
/// Object number of the font
pub const FONT_OBJ: u32 = 5;
/// Number of indirect objects in a report document
pub const OBJECT_COUNT: usize = 5;

/// Resource name of the font inside the page
pub const FONT_RESOURCE: &str = "F1";
/// Base font of the report text
pub const BASE_FONT: &str = "Helvetica";

/// A numbered object with its complete serialized bytes
///
/// `body` includes the `N 0 obj` header and the `endobj` footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfIndirectObject {
    /// Object number (1-based)
    pub number: u32,
    /// Exact bytes of the object
    pub body: Vec<u8>,
}

impl PdfIndirectObject {
    /// Wrap an object as `N 0 obj\n<object>\nendobj\n`
    pub fn new(number: u32, object: &PdfObject) -> Self {
        let mut body = format!("{} 0 obj\n", number).into_bytes();
        body.extend_from_slice(&serialize(object));
        body.extend_from_slice(b"\nendobj\n");
        Self { number, body }
    }

    /// Byte length of the object
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the object has no bytes
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Build the page content stream for already sanitized and escaped lines
pub fn build_content_stream(lines: &[String], layout: &PdfLayout) -> ContentStream {
    let mut cs = ContentStream::new();
    cs.begin_text()
        .set_font(FONT_RESOURCE, layout.font_size)
        .move_text(layout.origin_x, layout.origin_y);

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            cs.move_text(0.0, -layout.leading);
        }
        cs.show_escaped_text(line);
    }

    cs.end_text();
    cs
}

/// Create the catalog dictionary
pub fn create_catalog(pages_ref: u32) -> PdfDictionary {
    PdfDictionary::new()
        .with_type("Catalog")
        .with("Pages", PdfObject::reference(pages_ref))
}

/// Create the page tree root for a single page
pub fn create_pages(page_ref: u32) -> PdfDictionary {
    PdfDictionary::new()
        .with_type("Pages")
        .with("Kids", PdfObject::array(vec![PdfObject::reference(page_ref)]))
        .with("Count", PdfObject::int(1))
}

/// Create the page dictionary
pub fn create_page(
    parent_ref: u32,
    content_ref: u32,
    font_ref: u32,
    layout: &PdfLayout,
) -> PdfDictionary {
    let fonts = PdfDictionary::new().with(FONT_RESOURCE, PdfObject::reference(font_ref));
    let resources = PdfDictionary::new().with("Font", fonts.into());

    PdfDictionary::new()
        .with_type("Page")
        .with("Parent", PdfObject::reference(parent_ref))
        .with(
            "MediaBox",
            PdfObject::array(vec![
                PdfObject::int(0),
                PdfObject::int(0),
                PdfObject::real(layout.page_width),
                PdfObject::real(layout.page_height),
            ]),
        )
        .with("Contents", PdfObject::reference(content_ref))
        .with("Resources", resources.into())
}

/// Create the standard Type1 font dictionary
pub fn create_font() -> PdfDictionary {
    PdfDictionary::new()
        .with_type("Font")
        .with("Subtype", PdfObject::name("Type1"))
        .with("BaseFont", PdfObject::name(BASE_FONT))
}

/// Assemble the five indirect objects of the report page
///
/// `lines` must already be sanitized and escaped.
pub fn build_pdf_objects(
    lines: &[String],
    layout: &PdfLayout,
) -> [PdfIndirectObject; OBJECT_COUNT] {
    let content = build_content_stream(lines, layout);
    let stream = PdfStream::new(content.into_bytes());

    [
        PdfIndirectObject::new(CATALOG_OBJ, &create_catalog(PAGES_OBJ).into()),
        PdfIndirectObject::new(PAGES_OBJ, &create_pages(PAGE_OBJ).into()),
        PdfIndirectObject::new(
            PAGE_OBJ,
            &create_page(PAGES_OBJ, CONTENT_OBJ, FONT_OBJ, layout).into(),
        ),
        PdfIndirectObject::new(CONTENT_OBJ, &stream.into()),
        PdfIndirectObject::new(FONT_OBJ, &create_font().into()),
    ]
}

/// The sanitized text lines of a report page
///
/// Title, the "generated at" line, a blank separator, the header line, then
/// one line per row. Lines are not escaped yet.
pub fn report_lines(dataset: &ReportDataset, options: &ExportOptions) -> Vec<String> {
    let separator = options.column_separator.as_str();
    let mut lines = Vec::with_capacity(dataset.rows.len() + 4);

    lines.push(sanitize_to_pdf_ascii(&dataset.title));
    lines.push(sanitize_to_pdf_ascii(&format!(
        "{}: {}",
        options.generated_label,
        dataset.generated_date()
    )));
    lines.push(String::new());
    lines.push(sanitize_to_pdf_ascii(&dataset.headers.join(separator)));

    for row in &dataset.rows {
        let cells: Vec<String> = row.iter().map(CellValue::to_display_string).collect();
        lines.push(sanitize_to_pdf_ascii(&cells.join(separator)));
    }

    lines
}
