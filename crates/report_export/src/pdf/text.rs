//! PDF-safe text
//!
//! The report PDF uses a standard Type1 font without an explicit encoding,
//! so string literals are restricted to printable ASCII. Accented letters are
//! reduced to their base letter; anything else outside `0x20..=0x7E` is
//! dropped.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Reduce text to printable ASCII
///
/// NFD-decomposes, drops combining marks, then drops every codepoint outside
/// `0x20..=0x7E`. Never fails; the result may be empty.
pub fn sanitize_to_pdf_ascii(text: &str) -> String {
    text.nfd()
        .filter(|&c| !is_combining_mark(c))
        .filter(|&c| matches!(c, ' '..='~'))
        .collect()
}

/// Escape `\`, `(` and `)` for a PDF string literal
///
/// Expects sanitized input. Single pass, so inserted backslashes are never
/// escaped a second time.
pub fn escape_pdf_string(sanitized: &str) -> String {
    let mut out = String::with_capacity(sanitized.len());
    for c in sanitized.chars() {
        if matches!(c, '\\' | '(' | ')') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Sanitize, then escape
pub fn to_pdf_literal(text: &str) -> String {
    escape_pdf_string(&sanitize_to_pdf_ascii(text))
}
