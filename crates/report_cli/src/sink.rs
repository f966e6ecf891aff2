//! Filesystem artifact sink

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use report_export::{ArtifactSink, ExportArtifact, ExportError, Result};

/// Writes each artifact into a directory under its suggested file name
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Create a sink for the given directory (created on first delivery)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<()> {
        // Only a bare file name may be joined onto the target directory
        if Path::new(&artifact.filename).file_name() != Some(OsStr::new(&artifact.filename)) {
            return Err(ExportError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Artifact filename is not a single path component: {}",
                    artifact.filename
                ),
            )));
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.filename);
        fs::write(&path, &artifact.bytes)?;
        tracing::info!(
            path = %path.display(),
            mime_type = artifact.mime_type,
            bytes = artifact.len(),
            "Artifact written"
        );
        self.written.push(path);
        Ok(())
    }
}
