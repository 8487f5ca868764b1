//! Result Exporter Port - Ranked result to downloadable document.

use thiserror::Error;

use crate::domain::foundation::Timestamp;
use crate::domain::topsis::TopsisResult;

/// Port for serializing a ranked result into a file.
///
/// The same document is used for HTTP download and as e-mail attachment.
pub trait ResultExporter: Send + Sync {
    /// Render the result. `generated_at` determines the suggested filename.
    fn export(
        &self,
        result: &TopsisResult,
        generated_at: Timestamp,
    ) -> Result<ExportedResult, ExportError>;
}

/// Exported result with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedResult {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download or attachment.
    pub filename: String,
}

impl ExportedResult {
    pub fn new(
        content: Vec<u8>,
        content_type: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            content,
            content_type: content_type.into(),
            filename: filename.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Errors that can occur during result export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Writing the output buffer failed.
    #[error("Failed to write export: {0}")]
    Write(String),
}

impl ExportError {
    pub fn write(reason: impl Into<String>) -> Self {
        Self::Write(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_result_reports_size() {
        let doc = ExportedResult::new(b"a,b\n".to_vec(), "text/csv", "out.csv");
        assert_eq!(doc.len(), 4);
        assert!(!doc.is_empty());
        assert_eq!(doc.filename, "out.csv");
    }

    #[test]
    fn exporter_trait_is_object_safe() {
        fn _accepts_dyn(_exporter: &dyn ResultExporter) {}
    }
}
