//! Report file output

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs as async_fs;
use tracing::info;

use super::OutputError;

pub const DEFAULT_FILE_NAME: &str = "printers.html";

/// Destination for a finished document.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Stores the whole document and returns where it went.
    async fn write(&self, document: &str) -> Result<PathBuf, OutputError>;
}

/// Writes the document to a single file in one call.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `dir/file_name`, with the platform temporary directory as the default `dir`.
    pub fn in_dir(dir: Option<&Path>, file_name: &str) -> Self {
        let dir = dir.map(Path::to_path_buf).unwrap_or_else(std::env::temp_dir);
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSink for FileReportSink {
    async fn write(&self, document: &str) -> Result<PathBuf, OutputError> {
        let write_err = |source| OutputError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await.map_err(write_err)?;
            }
        }
        async_fs::write(&self.path, document).await.map_err(write_err)?;

        info!("Report written to {}", self.path.display());
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_writes_whole_document() {
        let dir = TempDir::new().unwrap();
        let sink = FileReportSink::in_dir(Some(dir.path()), DEFAULT_FILE_NAME);

        let written = sink.write("<html></html>").await.unwrap();

        assert_eq!(written, dir.path().join("printers.html"));
        assert_eq!(std::fs::read_to_string(&written).unwrap(), "<html></html>");
    }

    #[tokio::test]
    async fn test_overwrites_and_creates_parents() {
        let dir = TempDir::new().unwrap();
        let sink = FileReportSink::new(dir.path().join("nested/out.html"));

        sink.write("first").await.unwrap();
        sink.write("second").await.unwrap();

        assert_eq!(std::fs::read_to_string(sink.path()).unwrap(), "second");
    }

    #[test]
    fn test_default_dir_is_temp() {
        let sink = FileReportSink::in_dir(None, DEFAULT_FILE_NAME);
        assert_eq!(sink.path(), std::env::temp_dir().join("printers.html"));
    }
}
