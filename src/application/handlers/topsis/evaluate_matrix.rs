//! EvaluateMatrixHandler - Query handler for tables submitted as JSON.

use crate::domain::foundation::AnalysisId;
use crate::domain::topsis::{RawDecisionTable, TopsisEngine, TopsisError, TopsisResult};

/// Query to score a decision table that is already split into cells.
#[derive(Debug, Clone)]
pub struct EvaluateMatrixQuery {
    pub table: RawDecisionTable,
    /// One token per criterion.
    pub weights: Vec<String>,
    /// One token per criterion, `+` or `-`.
    pub impacts: Vec<String>,
}

/// Result of an evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateMatrixResult {
    pub analysis_id: AnalysisId,
    pub result: TopsisResult,
}

/// Handler for JSON evaluations. Holds no ports; the engine is pure.
#[derive(Debug, Clone, Default)]
pub struct EvaluateMatrixHandler;

impl EvaluateMatrixHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: EvaluateMatrixQuery) -> Result<EvaluateMatrixResult, TopsisError> {
        let analysis_id = AnalysisId::new();
        let result = TopsisEngine::run_tokens(&query.table, &query.weights, &query.impacts)
            .map_err(|err| {
                tracing::info!(%analysis_id, code = err.code(), error = %err, "Evaluation rejected");
                err
            })?;

        tracing::info!(
            %analysis_id,
            alternatives = result.len(),
            criteria = result.criteria.len(),
            "Evaluation completed"
        );

        Ok(EvaluateMatrixResult { analysis_id, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn table() -> RawDecisionTable {
        RawDecisionTable::builder()
            .headers(vec!["Alt", "x", "y"])
            .row(vec!["A", "1", "5"])
            .row(vec!["B", "3", "2"])
            .build()
    }

    #[test]
    fn evaluates_tokens() {
        let result = EvaluateMatrixHandler::new()
            .handle(EvaluateMatrixQuery {
                table: table(),
                weights: tokens(&["1", "1"]),
                impacts: tokens(&["+", "-"]),
            })
            .unwrap();
        assert_eq!(result.result.rows[0].score, 0.0);
        assert_eq!(result.result.rows[1].score, 1.0);
        assert_eq!(result.result.best()[0].label, "B");
    }

    #[test]
    fn rejects_bad_impact_token() {
        let err = EvaluateMatrixHandler::new()
            .handle(EvaluateMatrixQuery {
                table: table(),
                weights: tokens(&["1", "1"]),
                impacts: tokens(&["+", "max"]),
            })
            .unwrap_err();
        assert!(matches!(err, TopsisError::InvalidImpactToken { position: 1, .. }));
    }
}
