//! TOPSIS engine - validation through ranking in one pure call.

use super::{
    DecisionMatrix, IdealSolutionConstructor, ImpactVector, InputValidator, Normalizer, Ranker,
    RawDecisionTable, ResultRow, Scorer, TopsisError, TopsisResult, WeightVector, Weighter,
};

/// Stateless TOPSIS computation.
///
/// Every call allocates its own intermediate matrices and touches nothing
/// else, so the engine may be invoked concurrently from any number of tasks.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Validates a raw table with comma-delimited weights and impacts, then
    /// evaluates it.
    pub fn run(
        table: &RawDecisionTable,
        weights: &str,
        impacts: &str,
    ) -> Result<TopsisResult, TopsisError> {
        let input = InputValidator::validate(table, weights, impacts)?;
        Self::evaluate(&input.matrix, &input.weights, &input.impacts)
    }

    /// Same as [`TopsisEngine::run`] with pre-split tokens.
    pub fn run_tokens<W, I>(
        table: &RawDecisionTable,
        weights: &[W],
        impacts: &[I],
    ) -> Result<TopsisResult, TopsisError>
    where
        W: AsRef<str>,
        I: AsRef<str>,
    {
        let input = InputValidator::validate_tokens(table, weights, impacts)?;
        Self::evaluate(&input.matrix, &input.weights, &input.impacts)
    }

    /// Scores and ranks typed input.
    ///
    /// # Algorithm
    /// 1. Divide each column by its Euclidean norm
    /// 2. Multiply each column by its weight
    /// 3. Take per-column ideal / anti-ideal according to the impact
    /// 4. Score = d(anti-ideal) / (d(ideal) + d(anti-ideal))
    /// 5. Dense rank by descending score
    ///
    /// # Errors
    /// - `WeightCountMismatch` / `ImpactCountMismatch` when the vectors do not
    ///   match the matrix width (checked before any arithmetic)
    /// - `DegenerateColumn` when a column is entirely zero
    pub fn evaluate(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisResult, TopsisError> {
        let criteria = matrix.criterion_count();
        if weights.len() != criteria {
            return Err(TopsisError::WeightCountMismatch {
                criteria,
                weights: weights.len(),
            });
        }
        if impacts.len() != criteria {
            return Err(TopsisError::ImpactCountMismatch {
                criteria,
                impacts: impacts.len(),
            });
        }

        let normalized = Normalizer::normalize(matrix)?;
        let weighted = Weighter::apply(&normalized, weights);
        let ideals = IdealSolutionConstructor::construct(&weighted, impacts);
        let scores = Scorer::scores(&weighted, &ideals);
        let ranks = Ranker::rank(&scores);

        let rows = matrix
            .labels()
            .iter()
            .enumerate()
            .map(|(row, label)| ResultRow {
                label: label.clone(),
                values: matrix.row(row).to_vec(),
                score: scores[row],
                rank: ranks[row],
            })
            .collect();

        Ok(TopsisResult {
            label_column: matrix.label_column().to_string(),
            criteria: matrix.criteria().to_vec(),
            rows,
            ideal: ideals.ideal,
            anti_ideal: ideals.anti_ideal,
        })
    }
}
