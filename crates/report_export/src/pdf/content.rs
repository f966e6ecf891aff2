//! PDF Content Stream Generation
//!
//! Builder for the page content stream. Only the text operators the report
//! page uses are supported:
//!
//! - BT/ET: Begin/End text object
//! - Tf: Set font and size
//! - Td: Move text position
//! - Tj: Show text string
//!
//! Operators are separated by a single newline; the stream carries no
//! trailing newline.

use std::io::Write;

use super::objects::format_real;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    /// The content data
    data: Vec<u8>,
}

impl ContentStream {
    /// Create a new empty content stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content stream data
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Get a reference to the content stream data
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the length of the content stream in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the content stream is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_op(format_args!("BT"));
        self
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.write_op(format_args!("ET"));
        self
    }

    /// Set the font and size (Tf)
    pub fn set_font(&mut self, font_name: &str, size: f64) -> &mut Self {
        self.write_op(format_args!("/{} {} Tf", font_name, format_real(size)));
        self
    }

    /// Move text position (Td)
    pub fn move_text(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.write_op(format_args!("{} {} Td", format_real(tx), format_real(ty)));
        self
    }

    /// Show a string that is already escaped for a literal (Tj)
    pub fn show_escaped_text(&mut self, escaped: &str) -> &mut Self {
        self.write_op(format_args!("({}) Tj", escaped));
        self
    }

    fn write_op(&mut self, args: std::fmt::Arguments<'_>) {
        if !self.data.is_empty() {
            self.data.push(b'\n');
        }
        // Writing into a Vec cannot fail
        let _ = self.data.write_fmt(args);
    }
}
