//! ExportResultHandler - Scores a table and returns the CSV download.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::Timestamp;
use crate::domain::topsis::{RawDecisionTable, TopsisEngine, TopsisError};
use crate::ports::{ExportError, ExportedResult, ResultExporter};

/// Command to score a table and export the result.
#[derive(Debug, Clone)]
pub struct ExportResultCommand {
    pub table: RawDecisionTable,
    pub weights: Vec<String>,
    pub impacts: Vec<String>,
}

/// Error type for exports.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportResultError {
    #[error(transparent)]
    Topsis(#[from] TopsisError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Handler for result downloads.
pub struct ExportResultHandler {
    exporter: Arc<dyn ResultExporter>,
}

impl ExportResultHandler {
    pub fn new(exporter: Arc<dyn ResultExporter>) -> Self {
        Self { exporter }
    }

    pub fn handle(&self, cmd: ExportResultCommand) -> Result<ExportedResult, ExportResultError> {
        let result = TopsisEngine::run_tokens(&cmd.table, &cmd.weights, &cmd.impacts)?;
        let document = self.exporter.export(&result, Timestamp::now())?;
        tracing::info!(
            filename = %document.filename,
            bytes = document.len(),
            "Result exported"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::table::CsvResultExporter;

    fn command(impacts: &[&str]) -> ExportResultCommand {
        ExportResultCommand {
            table: RawDecisionTable::builder()
                .headers(vec!["Alt", "x", "y"])
                .row(vec!["A", "1", "5"])
                .row(vec!["B", "3", "2"])
                .build(),
            weights: vec!["1".to_string(), "1".to_string()],
            impacts: impacts.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn exports_csv_document() {
        let handler = ExportResultHandler::new(Arc::new(CsvResultExporter::new()));
        let doc = handler.handle(command(&["+", "-"])).unwrap();
        let text = String::from_utf8(doc.content).unwrap();
        assert_eq!(text.lines().next(), Some("Alt,x,y,Topsis Score,Rank"));
        assert_eq!(text.lines().nth(2), Some("B,3,2,1,1"));
        assert!(doc.filename.ends_with(".csv"));
    }

    #[test]
    fn engine_errors_pass_through() {
        let handler = ExportResultHandler::new(Arc::new(CsvResultExporter::new()));
        let err = handler.handle(command(&["+"])).unwrap_err();
        assert!(matches!(
            err,
            ExportResultError::Topsis(TopsisError::ImpactCountMismatch { .. })
        ));
    }
}
