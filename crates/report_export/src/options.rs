//! Export Options
//!
//! Configuration for both encoders. Every field has a default, so a partial
//! JSON document deserializes into a complete set of options.

use serde::{Deserialize, Serialize};

/// What to do with rows whose cell count differs from the header count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapePolicy {
    /// Reject the dataset with a shape error
    #[default]
    Strict,
    /// Render rows as-is and log a warning
    Lenient,
}

/// Page geometry and text placement for the PDF encoder, in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfLayout {
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Vertical distance between consecutive lines
    #[serde(default = "default_leading")]
    pub leading: f64,
    /// Distance of the first line from the left edge
    #[serde(default = "default_origin_x")]
    pub origin_x: f64,
    /// Distance of the first baseline from the bottom edge
    #[serde(default = "default_origin_y")]
    pub origin_y: f64,
    #[serde(default = "default_page_width")]
    pub page_width: f64,
    #[serde(default = "default_page_height")]
    pub page_height: f64,
}

fn default_font_size() -> f64 {
    12.0
}

fn default_leading() -> f64 {
    16.0
}

fn default_origin_x() -> f64 {
    72.0
}

fn default_origin_y() -> f64 {
    760.0
}

fn default_page_width() -> f64 {
    612.0
}

fn default_page_height() -> f64 {
    792.0
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            leading: default_leading(),
            origin_x: default_origin_x(),
            origin_y: default_origin_y(),
            page_width: default_page_width(),
            page_height: default_page_height(),
        }
    }
}

/// Options for report export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Label of the "generated at" line of the PDF
    #[serde(default = "default_generated_label")]
    pub generated_label: String,
    /// Separator between cells of a PDF line
    #[serde(default = "default_column_separator")]
    pub column_separator: String,
    #[serde(default)]
    pub shape_policy: ShapePolicy,
    #[serde(default)]
    pub layout: PdfLayout,
}

fn default_generated_label() -> String {
    "Gerado em".to_string()
}

fn default_column_separator() -> String {
    " | ".to_string()
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            generated_label: default_generated_label(),
            column_separator: default_column_separator(),
            shape_policy: ShapePolicy::default(),
            layout: PdfLayout::default(),
        }
    }
}

impl ExportOptions {
    /// Create new default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label of the "generated at" line
    pub fn with_generated_label(mut self, label: impl Into<String>) -> Self {
        self.generated_label = label.into();
        self
    }

    /// Set the cell separator used in PDF lines
    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    /// Set the shape policy
    pub fn with_shape_policy(mut self, policy: ShapePolicy) -> Self {
        self.shape_policy = policy;
        self
    }

    /// Set the PDF layout
    pub fn with_layout(mut self, layout: PdfLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Parse options from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
