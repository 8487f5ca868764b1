//! Vector normalization of criterion columns.

use serde::Serialize;

use super::grid::Grid;
use super::{DecisionMatrix, TopsisError};

/// Decision matrix with every column divided by its Euclidean norm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMatrix {
    values: Grid,
}

impl NormalizedMatrix {
    pub fn row_count(&self) -> usize {
        self.values.rows()
    }

    pub fn criterion_count(&self) -> usize {
        self.values.cols()
    }

    pub fn value(&self, row: usize, criterion: usize) -> f64 {
        self.values.get(row, criterion)
    }

    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.column(criterion)
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.values
    }
}

/// Column normalization stage.
pub struct Normalizer;

impl Normalizer {
    /// Divides every cell by its column norm.
    ///
    /// Each column is first divided by its largest magnitude, so the norm of
    /// the scaled column lies in `[1, sqrt(rows)]` even when the true norm
    /// exceeds `f64::MAX`.
    ///
    /// # Errors
    /// `DegenerateColumn` for the first column whose norm is zero.
    pub fn normalize(matrix: &DecisionMatrix) -> Result<NormalizedMatrix, TopsisError> {
        let peaks: Vec<f64> = (0..matrix.criterion_count())
            .map(|criterion| matrix.column(criterion).fold(0.0_f64, |acc, v| acc.max(v.abs())))
            .collect();

        if let Some(criterion) = peaks.iter().position(|&peak| peak == 0.0) {
            return Err(TopsisError::DegenerateColumn {
                criterion,
                column: matrix.criteria()[criterion].clone(),
            });
        }

        let scaled_norms: Vec<f64> = peaks
            .iter()
            .enumerate()
            .map(|(criterion, peak)| {
                matrix
                    .column(criterion)
                    .fold(0.0_f64, |acc, v| acc.hypot(v / peak))
            })
            .collect();

        let values = matrix
            .grid()
            .map_columns(|criterion, v| (v / peaks[criterion]) / scaled_norms[criterion]);
        Ok(NormalizedMatrix { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn matrix(criteria: &[&str], rows: Vec<Vec<f64>>) -> DecisionMatrix {
        let alternatives = rows
            .into_iter()
            .enumerate()
            .map(|(i, values)| (format!("A{}", i + 1), values))
            .collect();
        DecisionMatrix::new(
            "Alternative",
            criteria.iter().map(|s| s.to_string()).collect(),
            alternatives,
        )
        .unwrap()
    }

    #[test]
    fn cells_are_divided_by_the_euclidean_norm() {
        let m = matrix(&["x", "y"], vec![vec![3.0, 1.0], vec![4.0, 0.0]]);
        let n = Normalizer::normalize(&m).unwrap();
        assert!((n.value(0, 0) - 0.6).abs() < EPS);
        assert!((n.value(1, 0) - 0.8).abs() < EPS);
        assert!((n.value(0, 1) - 1.0).abs() < EPS);
        assert_eq!(n.value(1, 1), 0.0);
    }

    #[test]
    fn normalized_columns_have_unit_length() {
        let m = matrix(
            &["x", "y"],
            vec![vec![10.0, 5.0], vec![15.0, 6.0], vec![12.0, 4.0]],
        );
        let n = Normalizer::normalize(&m).unwrap();
        for criterion in 0..2 {
            let length: f64 = n.column(criterion).map(|v| v * v).sum::<f64>().sqrt();
            assert!((length - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn negative_values_keep_their_sign() {
        let m = matrix(&["x"], vec![vec![-3.0], vec![4.0]]);
        let n = Normalizer::normalize(&m).unwrap();
        assert!((n.value(0, 0) + 0.6).abs() < EPS);
        assert!((n.value(1, 0) - 0.8).abs() < EPS);
    }

    #[test]
    fn all_zero_column_is_degenerate() {
        let m = matrix(&["x", "y"], vec![vec![1.0, 0.0], vec![2.0, 0.0]]);
        let err = Normalizer::normalize(&m).unwrap_err();
        assert_eq!(
            err,
            TopsisError::DegenerateColumn {
                criterion: 1,
                column: "y".to_string()
            }
        );
    }

    #[test]
    fn constant_nonzero_column_normalizes() {
        let m = matrix(&["x"], vec![vec![7.0], vec![7.0], vec![7.0]]);
        let n = Normalizer::normalize(&m).unwrap();
        let expected = 1.0 / 3.0_f64.sqrt();
        assert!(n.column(0).all(|v| (v - expected).abs() < EPS));
    }

    #[test]
    fn huge_magnitudes_do_not_overflow() {
        let m = matrix(&["x"], vec![vec![1e200], vec![1e200]]);
        let n = Normalizer::normalize(&m).unwrap();
        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((n.value(0, 0) - expected).abs() < 1e-9);
    }

    #[test]
    fn column_whose_norm_exceeds_f64_max_still_normalizes() {
        let m = matrix(&["x"], vec![vec![1e308]; 4]);
        let n = Normalizer::normalize(&m).unwrap();
        assert!(n.column(0).all(|v| (v - 0.5).abs() < 1e-12));
    }
}
