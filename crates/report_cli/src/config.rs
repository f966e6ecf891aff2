//! Loading export options from disk

use std::path::Path;

use anyhow::{Context, Result};
use report_export::ExportOptions;

/// Load options from a JSON file
///
/// A missing file yields the defaults. A file that does not parse is logged
/// and also yields the defaults.
pub fn load_options(path: Option<&Path>) -> Result<ExportOptions> {
    let Some(path) = path else {
        return Ok(ExportOptions::default());
    };
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Options file not found, using defaults");
        return Ok(ExportOptions::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    match ExportOptions::from_json(&content) {
        Ok(options) => Ok(options),
        Err(e) => {
            tracing::warn!("Failed to parse options file, using defaults: {}", e);
            Ok(ExportOptions::default())
        }
    }
}
