//! Column weighting of the normalized matrix.

use serde::Serialize;

use super::grid::Grid;
use super::{NormalizedMatrix, WeightVector};

/// Normalized matrix scaled column-wise by the weight vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedMatrix {
    values: Grid,
}

impl WeightedMatrix {
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
}

pub struct Weighter;

impl Weighter {
    /// `weighted[i][j] = normalized[i][j] * weight[j]`.
    ///
    /// Lengths are guaranteed equal by validation.
    pub fn apply(normalized: &NormalizedMatrix, weights: &WeightVector) -> WeightedMatrix {
        debug_assert_eq!(normalized.criterion_count(), weights.len());
        let weights = weights.as_slice();
        WeightedMatrix {
            values: normalized
                .grid()
                .map_columns(|criterion, v| v * weights[criterion]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{DecisionMatrix, Normalizer};

    #[test]
    fn scales_each_column_by_its_weight() {
        let matrix = DecisionMatrix::new(
            "Alt",
            vec!["x".to_string(), "y".to_string()],
            vec![
                ("A".to_string(), vec![3.0, 1.0]),
                ("B".to_string(), vec![4.0, 1.0]),
            ],
        )
        .unwrap();
        let normalized = Normalizer::normalize(&matrix).unwrap();
        let weights = WeightVector::new(vec![2.0, 0.5]).unwrap();

        let weighted = Weighter::apply(&normalized, &weights);

        assert!((weighted.value(0, 0) - 1.2).abs() < 1e-12);
        assert!((weighted.value(1, 0) - 1.6).abs() < 1e-12);
        let expected_y = 0.5 / 2.0_f64.sqrt();
        assert!((weighted.value(1, 1) - expected_y).abs() < 1e-12);
        assert_eq!(weighted.row(0).len(), 2);
    }
}
