//! Data Transfer Objects for TOPSIS HTTP endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::AnalysisId;
use crate::domain::topsis::{
    split_list, RawDecisionTable, TopsisResult, RANK_COLUMN, SCORE_COLUMN,
};

/// Delivery choice of the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOption {
    Display,
    #[default]
    Email,
}

impl std::str::FromStr for ResultOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "email" => Ok(ResultOption::Email),
            "display" => Ok(ResultOption::Display),
            other => Err(other.to_string()),
        }
    }
}

/// Weights or impacts given either as "1,2,3" or as `[1, 2, 3]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListInput {
    Text(String),
    Items(Vec<Value>),
}

impl ListInput {
    /// Tokens in order. Array items keep their position even when empty.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            ListInput::Text(text) => split_list(&text),
            ListInput::Items(items) => items.into_iter().map(cell_text).collect(),
        }
    }
}

/// Request body for JSON evaluation and export.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    /// First header names the label column.
    pub headers: Vec<String>,
    /// Cells may be strings or numbers.
    pub rows: Vec<Vec<Value>>,
    pub weights: ListInput,
    pub impacts: ListInput,
}

impl EvaluateRequest {
    /// Splits the request into a raw table and weight / impact tokens.
    pub fn into_parts(self) -> (RawDecisionTable, Vec<String>, Vec<String>) {
        let rows = self
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();
        (
            RawDecisionTable::new(self.headers, rows),
            self.weights.into_tokens(),
            self.impacts.into_tokens(),
        )
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Response for a displayed analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub status: &'static str,
    pub message: String,
    pub analysis_id: String,
    pub columns: Vec<String>,
    /// One object per alternative, keyed by column name, in input order.
    pub result: Vec<Map<String, Value>>,
}

impl AnalysisResponse {
    pub fn new(analysis_id: &AnalysisId, result: &TopsisResult) -> Self {
        let records = result
            .rows
            .iter()
            .map(|row| {
                let mut record = Map::new();
                record.insert(result.label_column.clone(), Value::from(row.label.clone()));
                for (name, value) in result.criteria.iter().zip(&row.values) {
                    record.insert(name.clone(), Value::from(*value));
                }
                record.insert(SCORE_COLUMN.to_string(), Value::from(row.score));
                record.insert(RANK_COLUMN.to_string(), Value::from(row.rank));
                record
            })
            .collect();

        Self {
            status: "success",
            message: "TOPSIS calculation completed successfully!".to_string(),
            analysis_id: analysis_id.to_string(),
            columns: result.columns(),
            result: records,
        }
    }
}

/// Status-and-message response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}

/// Response for GET /health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always "error".
    pub status: &'static str,
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: "error",
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::TopsisEngine;

    #[test]
    fn result_option_parses_with_email_default() {
        assert_eq!("display".parse::<ResultOption>(), Ok(ResultOption::Display));
        assert_eq!("email".parse::<ResultOption>(), Ok(ResultOption::Email));
        assert_eq!("".parse::<ResultOption>(), Ok(ResultOption::Email));
        assert_eq!("fax".parse::<ResultOption>(), Err("fax".to_string()));
    }

    #[test]
    fn list_input_accepts_string_or_array() {
        let text: ListInput = serde_json::from_str(r#""1, 2,3""#).unwrap();
        assert_eq!(text.into_tokens(), vec!["1", "2", "3"]);

        let items: ListInput = serde_json::from_str(r#"[1, 2.5, "3"]"#).unwrap();
        assert_eq!(items.into_tokens(), vec!["1", "2.5", "3"]);

        let impacts: ListInput = serde_json::from_str(r#"["+", "-"]"#).unwrap();
        assert_eq!(impacts.into_tokens(), vec!["+", "-"]);
    }

    #[test]
    fn evaluate_request_converts_numeric_cells() {
        let json = r#"{
            "headers": ["Alt", "x", "y"],
            "rows": [["A", 1, "5"], ["B", 3.5, null]],
            "weights": "1,1",
            "impacts": ["+", "-"]
        }"#;
        let request: EvaluateRequest = serde_json::from_str(json).unwrap();
        let (table, weights, impacts) = request.into_parts();
        assert_eq!(table.rows[0], vec!["A", "1", "5"]);
        assert_eq!(table.rows[1], vec!["B", "3.5", ""]);
        assert_eq!(weights, vec!["1", "1"]);
        assert_eq!(impacts, vec!["+", "-"]);
    }

    #[test]
    fn analysis_response_keys_rows_by_column() {
        let table = RawDecisionTable::builder()
            .headers(vec!["Alt", "x", "y"])
            .row(vec!["A", "1", "5"])
            .row(vec!["B", "3", "2"])
            .build();
        let result = TopsisEngine::run(&table, "1,1", "+,-").unwrap();
        let response = AnalysisResponse::new(&AnalysisId::new(), &result);

        assert_eq!(response.status, "success");
        assert_eq!(response.columns, vec!["Alt", "x", "y", "Topsis Score", "Rank"]);
        let b = &response.result[1];
        assert_eq!(b["Alt"], "B");
        assert_eq!(b["x"], 3.0);
        assert_eq!(b["Topsis Score"], 1.0);
        assert_eq!(b["Rank"], 1);
    }

    #[test]
    fn error_response_serializes_status_and_skips_empty_details() {
        let json = serde_json::to_value(ErrorResponse::new("EMPTY_MATRIX", "no rows")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], "EMPTY_MATRIX");
        assert!(json.get("details").is_none());
    }
}
