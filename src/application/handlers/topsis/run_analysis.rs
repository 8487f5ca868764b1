//! RunAnalysisHandler - Command handler for uploaded decision tables.
//!
//! Parses the upload, runs the engine, and either returns the result for
//! display or exports it and e-mails it to the requester.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{AnalysisId, EmailAddress, Timestamp};
use crate::domain::topsis::{TopsisEngine, TopsisError, TopsisResult};
use crate::ports::{
    DecisionTableParser, ExportError, MailError, ResultExporter, ResultMailer, TableParseError,
};

/// How the caller wants the result delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Return the result table in the response.
    Display,
    /// Send the exported CSV to this address.
    Email(EmailAddress),
}

/// Command to analyze an uploaded decision table.
#[derive(Debug, Clone)]
pub struct RunAnalysisCommand {
    /// Original filename; selects the parser format.
    pub filename: String,
    /// Raw file content.
    pub content: Vec<u8>,
    /// Comma-delimited weights, e.g. "1,1,2".
    pub weights: String,
    /// Comma-delimited impacts, e.g. "+,-,+".
    pub impacts: String,
    pub delivery: Delivery,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub analysis_id: AnalysisId,
    pub result: TopsisResult,
    /// Recipient, when the result was e-mailed.
    pub delivered_to: Option<EmailAddress>,
}

/// Error type for analysis runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunAnalysisError {
    #[error(transparent)]
    Parse(#[from] TableParseError),

    #[error(transparent)]
    Topsis(#[from] TopsisError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Mail(#[from] MailError),
}

/// Handler for analysis runs.
pub struct RunAnalysisHandler {
    parser: Arc<dyn DecisionTableParser>,
    exporter: Arc<dyn ResultExporter>,
    mailer: Arc<dyn ResultMailer>,
}

impl RunAnalysisHandler {
    pub fn new(
        parser: Arc<dyn DecisionTableParser>,
        exporter: Arc<dyn ResultExporter>,
        mailer: Arc<dyn ResultMailer>,
    ) -> Self {
        Self {
            parser,
            exporter,
            mailer,
        }
    }

    pub async fn handle(
        &self,
        cmd: RunAnalysisCommand,
    ) -> Result<RunAnalysisResult, RunAnalysisError> {
        let analysis_id = AnalysisId::new();

        // 1. Read the upload
        let table = self.parser.parse(&cmd.filename, &cmd.content)?;
        tracing::debug!(
            %analysis_id,
            filename = %cmd.filename,
            rows = table.row_count(),
            columns = table.headers.len(),
            "Parsed decision table"
        );

        // 2. Score and rank
        let result = TopsisEngine::run(&table, &cmd.weights, &cmd.impacts).map_err(|err| {
            tracing::info!(%analysis_id, code = err.code(), error = %err, "Analysis input rejected");
            err
        })?;

        // 3. Deliver
        let delivered_to = match cmd.delivery {
            Delivery::Display => None,
            Delivery::Email(recipient) => {
                let document = self.exporter.export(&result, Timestamp::now())?;
                if let Err(err) = self.mailer.send_result(&recipient, &document).await {
                    tracing::warn!(%analysis_id, error = %err, "Result e-mail failed");
                    return Err(err.into());
                }
                Some(recipient)
            }
        };

        tracing::info!(
            %analysis_id,
            alternatives = result.len(),
            criteria = result.criteria.len(),
            emailed = delivered_to.is_some(),
            "Analysis completed"
        );

        Ok(RunAnalysisResult {
            analysis_id,
            result,
            delivered_to,
        })
    }
}
