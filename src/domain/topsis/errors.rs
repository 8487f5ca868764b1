//! Engine error taxonomy.
//!
//! Every variant names the offending input element. Rows, criteria and weight
//! or impact positions are stored zero-based and rendered one-based.

use thiserror::Error;

/// Failure raised by validation or by the normalizer. No partial result is
/// ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Decision matrix needs a label column and at least one criterion column, found {columns} column(s)")]
    NoCriteria { columns: usize },

    #[error("Column name '{column}' is reserved for the computed result")]
    ReservedColumnName { column: String },

    #[error("Decision matrix has no alternatives")]
    EmptyMatrix,

    #[error(
        "Row {}, column '{column}' (criterion {}): {}",
        .row + 1,
        .criterion + 1,
        describe_cell(.value)
    )]
    InvalidCriterionValue {
        row: usize,
        criterion: usize,
        column: String,
        value: Option<String>,
    },

    #[error("Row {} has {found} criterion value(s) but the header declares {expected}", .row + 1)]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Number of weights ({weights}) does not match number of criteria ({criteria})")]
    WeightCountMismatch { criteria: usize, weights: usize },

    #[error("Number of impacts ({impacts}) does not match number of criteria ({criteria})")]
    ImpactCountMismatch { criteria: usize, impacts: usize },

    #[error("Weight {}: '{token}' is not a valid number", .position + 1)]
    InvalidWeightValue { position: usize, token: String },

    #[error("Weight {}: all weights must be positive numbers, got {value}", .position + 1)]
    NonPositiveWeight { position: usize, value: f64 },

    #[error("Impact {}: each impact must be '+' or '-', got '{token}'", .position + 1)]
    InvalidImpactToken { position: usize, token: String },

    #[error("Column '{column}' (criterion {}) is entirely zero and cannot be normalized", .criterion + 1)]
    DegenerateColumn { criterion: usize, column: String },
}

fn describe_cell(value: &Option<String>) -> String {
    match value {
        Some(v) => format!("'{}' is not a finite number", v),
        None => "value is missing".to_string(),
    }
}

impl TopsisError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            TopsisError::NoCriteria { .. } => "NO_CRITERIA",
            TopsisError::ReservedColumnName { .. } => "RESERVED_COLUMN_NAME",
            TopsisError::EmptyMatrix => "EMPTY_MATRIX",
            TopsisError::InvalidCriterionValue { .. } => "INVALID_CRITERION_VALUE",
            TopsisError::RaggedRow { .. } => "RAGGED_ROW",
            TopsisError::WeightCountMismatch { .. } => "WEIGHT_COUNT_MISMATCH",
            TopsisError::ImpactCountMismatch { .. } => "IMPACT_COUNT_MISMATCH",
            TopsisError::InvalidWeightValue { .. } => "INVALID_WEIGHT_VALUE",
            TopsisError::NonPositiveWeight { .. } => "NON_POSITIVE_WEIGHT",
            TopsisError::InvalidImpactToken { .. } => "INVALID_IMPACT_TOKEN",
            TopsisError::DegenerateColumn { .. } => "DEGENERATE_COLUMN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_cell_message_is_one_based() {
        let err = TopsisError::InvalidCriterionValue {
            row: 0,
            criterion: 2,
            column: "Battery".to_string(),
            value: Some("abc".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Row 1, column 'Battery' (criterion 3): 'abc' is not a finite number"
        );
    }

    #[test]
    fn missing_cell_message_says_missing() {
        let err = TopsisError::InvalidCriterionValue {
            row: 4,
            criterion: 0,
            column: "Price".to_string(),
            value: None,
        };
        assert_eq!(err.to_string(), "Row 5, column 'Price' (criterion 1): value is missing");
    }

    #[test]
    fn count_mismatch_messages_name_both_sides() {
        let err = TopsisError::WeightCountMismatch { criteria: 3, weights: 2 };
        assert_eq!(
            err.to_string(),
            "Number of weights (2) does not match number of criteria (3)"
        );
    }

    #[test]
    fn codes_are_screaming_snake_case() {
        assert_eq!(TopsisError::EmptyMatrix.code(), "EMPTY_MATRIX");
        assert_eq!(
            TopsisError::DegenerateColumn { criterion: 0, column: "x".into() }.code(),
            "DEGENERATE_COLUMN"
        );
        assert_eq!(
            TopsisError::InvalidImpactToken { position: 0, token: "*".into() }.code(),
            "INVALID_IMPACT_TOKEN"
        );
    }
}
