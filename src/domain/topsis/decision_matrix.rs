//! Validated decision matrix.

use serde::Serialize;

use super::grid::Grid;
use super::TopsisError;

/// Alternatives (rows) by criteria (columns) with a parallel label sequence.
/// Every value is finite, there is at least one row and one criterion, and
/// every row is exactly as wide as the criterion list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    label_column: String,
    criteria: Vec<String>,
    labels: Vec<String>,
    values: Grid,
}

impl DecisionMatrix {
    /// Builds a matrix from `(label, values)` pairs.
    pub fn new(
        label_column: impl Into<String>,
        criteria: Vec<String>,
        alternatives: Vec<(String, Vec<f64>)>,
    ) -> Result<Self, TopsisError> {
        if criteria.is_empty() {
            return Err(TopsisError::NoCriteria { columns: 1 });
        }
        if alternatives.is_empty() {
            return Err(TopsisError::EmptyMatrix);
        }

        let width = criteria.len();
        let mut labels = Vec::with_capacity(alternatives.len());
        let mut rows = Vec::with_capacity(alternatives.len());

        for (row, (label, values)) in alternatives.into_iter().enumerate() {
            if values.len() > width {
                return Err(TopsisError::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            if values.len() < width {
                let criterion = values.len();
                return Err(TopsisError::InvalidCriterionValue {
                    row,
                    criterion,
                    column: criteria[criterion].clone(),
                    value: None,
                });
            }
            if let Some(criterion) = values.iter().position(|v| !v.is_finite()) {
                return Err(TopsisError::InvalidCriterionValue {
                    row,
                    criterion,
                    column: criteria[criterion].clone(),
                    value: Some(values[criterion].to_string()),
                });
            }
            labels.push(label);
            rows.push(values);
        }

        Ok(Self {
            label_column: label_column.into(),
            values: Grid::from_rows(rows, width),
            criteria,
            labels,
        })
    }

    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn row_count(&self) -> usize {
        self.values.rows()
    }

    pub fn criterion_count(&self) -> usize {
        self.values.cols()
    }

    pub fn value(&self, row: usize, criterion: usize) -> f64 {
        self.values.get(row, criterion)
    }

    pub fn row(&self, row: usize) -> &[f64] {
        self.values.row(row)
    }

    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.column(criterion)
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builds_matrix_with_parallel_labels() {
        let matrix = DecisionMatrix::new(
            "Model",
            criteria(&["Price", "Storage"]),
            vec![
                ("M1".to_string(), vec![250.0, 16.0]),
                ("M2".to_string(), vec![200.0, 32.0]),
            ],
        )
        .unwrap();

        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.criterion_count(), 2);
        assert_eq!(matrix.labels(), &["M1".to_string(), "M2".to_string()]);
        assert_eq!(matrix.value(1, 1), 32.0);
        assert_eq!(matrix.column(0).collect::<Vec<_>>(), vec![250.0, 200.0]);
    }

    #[test]
    fn rejects_no_rows() {
        let err = DecisionMatrix::new("Model", criteria(&["Price"]), vec![]).unwrap_err();
        assert_eq!(err, TopsisError::EmptyMatrix);
    }

    #[test]
    fn rejects_no_criteria() {
        let err =
            DecisionMatrix::new("Model", vec![], vec![("M1".to_string(), vec![])]).unwrap_err();
        assert!(matches!(err, TopsisError::NoCriteria { .. }));
    }

    #[test]
    fn short_row_reports_missing_cell() {
        let err = DecisionMatrix::new(
            "Model",
            criteria(&["Price", "Storage"]),
            vec![("M1".to_string(), vec![250.0])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TopsisError::InvalidCriterionValue {
                row: 0,
                criterion: 1,
                column: "Storage".to_string(),
                value: None,
            }
        );
    }

    #[test]
    fn long_row_is_ragged() {
        let err = DecisionMatrix::new(
            "Model",
            criteria(&["Price"]),
            vec![("M1".to_string(), vec![1.0, 2.0])],
        )
        .unwrap_err();
        assert!(matches!(err, TopsisError::RaggedRow { expected: 1, found: 2, .. }));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let err = DecisionMatrix::new(
            "Model",
            criteria(&["Price"]),
            vec![("M1".to_string(), vec![f64::INFINITY])],
        )
        .unwrap_err();
        assert!(matches!(err, TopsisError::InvalidCriterionValue { criterion: 0, .. }));
    }
}
