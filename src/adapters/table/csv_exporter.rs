//! CSV result exporter adapter.

use std::borrow::Cow;
use std::fmt::Write;

use crate::domain::foundation::Timestamp;
use crate::domain::topsis::TopsisResult;
use crate::ports::{ExportError, ExportedResult, ResultExporter};

/// MIME type of exported results.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Writes results as CSV: label, original values, score, rank.
///
/// Rows keep input order. Numbers use the shortest representation that
/// round-trips, so scores keep full precision.
#[derive(Debug, Clone, Default)]
pub struct CsvResultExporter;

impl CsvResultExporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the result table as CSV text.
    pub fn render(&self, result: &TopsisResult) -> Result<String, ExportError> {
        let mut out = String::new();
        let header: Vec<String> = result
            .columns()
            .iter()
            .map(|column| escape(column).into_owned())
            .collect();
        writeln!(out, "{}", header.join(",")).map_err(|e| ExportError::write(e.to_string()))?;

        for row in &result.rows {
            let mut fields: Vec<String> = Vec::with_capacity(row.values.len() + 3);
            fields.push(escape(&row.label).into_owned());
            fields.extend(row.values.iter().map(|v| v.to_string()));
            fields.push(row.score.to_string());
            fields.push(row.rank.to_string());
            writeln!(out, "{}", fields.join(",")).map_err(|e| ExportError::write(e.to_string()))?;
        }

        Ok(out)
    }

    /// Suggested filename for a result generated at `at`.
    pub fn filename(at: &Timestamp) -> String {
        format!("topsis_result_{}.csv", at.file_stamp())
    }
}

impl ResultExporter for CsvResultExporter {
    fn export(
        &self,
        result: &TopsisResult,
        generated_at: Timestamp,
    ) -> Result<ExportedResult, ExportError> {
        let content = self.render(result)?;
        Ok(ExportedResult::new(
            content.into_bytes(),
            CSV_CONTENT_TYPE,
            Self::filename(&generated_at),
        ))
    }
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
