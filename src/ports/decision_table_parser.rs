//! Decision Table Parser Port - Uploaded file to raw table.
//!
//! This port turns the bytes of an uploaded file into a `RawDecisionTable`.
//! The engine never sees file formats; adapters (like `CsvTableParser`)
//! provide the implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::topsis::RawDecisionTable;

/// Port for reading an uploaded decision table.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first record as the header row
/// - Keep the first column as the alternative label column
/// - Return cells as text; numeric validation belongs to the engine
/// - Reject formats they cannot read with `UnsupportedFormat`
///
/// # Usage
///
/// ```rust,ignore
/// let parser: &dyn DecisionTableParser = get_parser();
/// let table = parser.parse("data.csv", &bytes)?;
/// ```
pub trait DecisionTableParser: Send + Sync {
    /// Parse file content, using the filename to determine the format.
    fn parse(&self, filename: &str, content: &[u8]) -> Result<RawDecisionTable, TableParseError>;

    /// Returns true if this parser reads the given format.
    fn supports(&self, format: TableFormat) -> bool;
}

/// Tabular file formats recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    Csv,
    Xlsx,
    Xls,
}

impl TableFormat {
    /// Detects the format from a filename extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.trim().rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(TableFormat::Csv),
            "xlsx" => Some(TableFormat::Xlsx),
            "xls" => Some(TableFormat::Xls),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Xlsx => "xlsx",
            TableFormat::Xls => "xls",
        }
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Errors that can occur while reading an uploaded table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableParseError {
    /// Extension is unknown or the format cannot be read.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// File has no header record.
    #[error("Uploaded file is empty")]
    EmptyFile,

    /// Content is not valid UTF-8 text.
    #[error("Uploaded file is not valid UTF-8 text")]
    InvalidUtf8,

    /// A quoted field was still open at end of input.
    #[error("Unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
}

impl TableParseError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            TableParseError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            TableParseError::EmptyFile => "EMPTY_FILE",
            TableParseError::InvalidUtf8 => "INVALID_UTF8",
            TableParseError::UnterminatedQuote { .. } => "UNTERMINATED_QUOTE",
        }
    }

    pub fn unsupported(filename: impl Into<String>) -> Self {
        Self::UnsupportedFormat(filename.into())
    }
}
