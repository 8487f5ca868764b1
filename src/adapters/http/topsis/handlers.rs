//! HTTP handlers for TOPSIS endpoints.

use std::sync::Arc;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::dto::{
    AnalysisResponse, ErrorResponse, EvaluateRequest, HealthResponse, MessageResponse,
    ResultOption,
};
use crate::application::handlers::topsis::{
    Delivery, EvaluateMatrixHandler, EvaluateMatrixQuery, ExportResultCommand, ExportResultError,
    ExportResultHandler, RunAnalysisCommand, RunAnalysisError, RunAnalysisHandler,
};
use crate::domain::foundation::EmailAddress;
use crate::domain::topsis::TopsisError;
use crate::ports::{DecisionTableParser, MailError, ResultExporter, ResultMailer};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct TopsisAppState {
    pub parser: Arc<dyn DecisionTableParser>,
    pub exporter: Arc<dyn ResultExporter>,
    pub mailer: Arc<dyn ResultMailer>,
}

impl TopsisAppState {
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

    pub fn run_analysis_handler(&self) -> RunAnalysisHandler {
        RunAnalysisHandler::new(
            self.parser.clone(),
            self.exporter.clone(),
            self.mailer.clone(),
        )
    }

    pub fn evaluate_matrix_handler(&self) -> EvaluateMatrixHandler {
        EvaluateMatrixHandler::new()
    }

    pub fn export_result_handler(&self) -> ExportResultHandler {
        ExportResultHandler::new(self.exporter.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Fields collected from the upload form.
#[derive(Debug, Default)]
struct SubmitForm {
    file: Option<(String, Vec<u8>)>,
    weights: Option<String>,
    impacts: Option<String>,
    result_option: Option<String>,
    email: Option<String>,
}

impl SubmitForm {
    async fn read(multipart: &mut Multipart) -> Result<Self, TopsisApiError> {
        let mut form = SubmitForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    form.file = Some((filename, bytes.to_vec()));
                }
                "weights" => form.weights = Some(field.text().await?),
                "impacts" => form.impacts = Some(field.text().await?),
                "result_option" => form.result_option = Some(field.text().await?),
                "email" => form.email = Some(field.text().await?),
                _ => {}
            }
        }
        Ok(form)
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let blank = |value: &Option<String>| value.as_deref().map_or(true, |v| v.trim().is_empty());
        let mut missing = Vec::new();
        if self.file.as_ref().map_or(true, |(name, _)| name.trim().is_empty()) {
            missing.push("file");
        }
        if blank(&self.weights) {
            missing.push("weights");
        }
        if blank(&self.impacts) {
            missing.push("impacts");
        }
        missing
    }
}

/// POST /api/topsis/submit - Analyze an uploaded table
pub async fn submit_analysis(
    State(state): State<TopsisAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, TopsisApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        TopsisApiError::bad_request("INVALID_MULTIPART", rejection.body_text())
    })?;
    let form = SubmitForm::read(&mut multipart).await?;

    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(TopsisApiError::MissingFields(missing));
    }

    let option: ResultOption = form
        .result_option
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|other| {
            TopsisApiError::bad_request(
                "INVALID_RESULT_OPTION",
                format!("Invalid result option '{}'. Choose 'email' or 'display'", other),
            )
        })?;

    let delivery = match option {
        ResultOption::Display => Delivery::Display,
        ResultOption::Email => {
            let raw = form.email.as_deref().unwrap_or_default().trim();
            if raw.is_empty() {
                return Err(TopsisApiError::MissingFields(vec!["email"]));
            }
            let address = EmailAddress::new(raw).map_err(|_| {
                TopsisApiError::bad_request(
                    "INVALID_EMAIL",
                    format!("Invalid email format: '{}'. Please use format: user@example.com", raw),
                )
            })?;
            Delivery::Email(address)
        }
    };

    let (filename, content) = form.file.unwrap_or_default();
    let cmd = RunAnalysisCommand {
        filename,
        content,
        weights: form.weights.unwrap_or_default(),
        impacts: form.impacts.unwrap_or_default(),
        delivery,
    };

    let result = state.run_analysis_handler().handle(cmd).await?;

    let response = match result.delivered_to {
        Some(_) => Json(MessageResponse::success(
            "Result calculated and sent successfully to your email!",
        ))
        .into_response(),
        None => Json(AnalysisResponse::new(&result.analysis_id, &result.result)).into_response(),
    };
    Ok(response)
}

/// POST /api/topsis/evaluate - Score a table given as JSON
pub async fn evaluate_matrix(
    State(state): State<TopsisAppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, TopsisApiError> {
    let Json(request) = payload.map_err(TopsisApiError::from)?;
    let (table, weights, impacts) = request.into_parts();

    let result = state.evaluate_matrix_handler().handle(EvaluateMatrixQuery {
        table,
        weights,
        impacts,
    })?;

    Ok(Json(AnalysisResponse::new(&result.analysis_id, &result.result)))
}

/// POST /api/topsis/export - Score a table and download the CSV
pub async fn export_result(
    State(state): State<TopsisAppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Response, TopsisApiError> {
    let Json(request) = payload.map_err(TopsisApiError::from)?;
    let (table, weights, impacts) = request.into_parts();

    let document = state.export_result_handler().handle(ExportResultCommand {
        table,
        weights,
        impacts,
    })?;

    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, document.content_type), (CONTENT_DISPOSITION, disposition)],
        document.content,
    )
        .into_response())
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum TopsisApiError {
    MissingFields(Vec<&'static str>),
    BadRequest { code: &'static str, message: String },
    PayloadTooLarge(String),
    BadGateway { code: &'static str, message: String },
    Internal { code: &'static str, message: String },
}

impl TopsisApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }
}

impl From<TopsisError> for TopsisApiError {
    fn from(err: TopsisError) -> Self {
        TopsisApiError::bad_request(err.code(), err.to_string())
    }
}

impl From<MailError> for TopsisApiError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::Rejected { .. } => TopsisApiError::BadGateway {
                code: err.code(),
                message: err.to_string(),
            },
            _ => TopsisApiError::Internal {
                code: err.code(),
                message: err.to_string(),
            },
        }
    }
}

impl From<RunAnalysisError> for TopsisApiError {
    fn from(err: RunAnalysisError) -> Self {
        match err {
            RunAnalysisError::Parse(e) => TopsisApiError::bad_request(e.code(), e.to_string()),
            RunAnalysisError::Topsis(e) => e.into(),
            RunAnalysisError::Export(e) => TopsisApiError::Internal {
                code: "EXPORT_FAILED",
                message: e.to_string(),
            },
            RunAnalysisError::Mail(e) => e.into(),
        }
    }
}

impl From<ExportResultError> for TopsisApiError {
    fn from(err: ExportResultError) -> Self {
        match err {
            ExportResultError::Topsis(e) => e.into(),
            ExportResultError::Export(e) => TopsisApiError::Internal {
                code: "EXPORT_FAILED",
                message: e.to_string(),
            },
        }
    }
}

impl From<MultipartError> for TopsisApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            TopsisApiError::PayloadTooLarge(err.body_text())
        } else {
            TopsisApiError::bad_request("INVALID_MULTIPART", err.body_text())
        }
    }
}

impl From<JsonRejection> for TopsisApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            TopsisApiError::PayloadTooLarge(rejection.body_text())
        } else {
            TopsisApiError::bad_request("INVALID_JSON", rejection.body_text())
        }
    }
}

impl IntoResponse for TopsisApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            TopsisApiError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    "MISSING_FIELDS",
                    format!("Missing required parameters: {}", fields.join(", ")),
                )
                .with_details(serde_json::json!({ "fields": fields })),
            ),
            TopsisApiError::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(code, message))
            }
            TopsisApiError::PayloadTooLarge(message) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::new("PAYLOAD_TOO_LARGE", message),
            ),
            TopsisApiError::BadGateway { code, message } => {
                tracing::error!(code, %message, "Upstream service rejected request");
                (StatusCode::BAD_GATEWAY, ErrorResponse::new(code, message))
            }
            TopsisApiError::Internal { code, message } => {
                tracing::error!(code, %message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(code, message))
            }
        };

        (status, Json(error)).into_response()
    }
}
