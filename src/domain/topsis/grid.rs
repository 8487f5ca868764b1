//! Dense row-major storage shared by the matrix stages.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Builds a grid from rows that are already known to be `cols` wide.
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>, cols: usize) -> Self {
        let row_count = rows.len();
        let mut values = Vec::with_capacity(row_count * cols);
        for row in rows {
            debug_assert_eq!(row.len(), cols);
            values.extend(row);
        }
        Self {
            rows: row_count,
            cols,
            values,
        }
    }

    /// Builds a same-shaped grid by mapping every cell with its column index.
    pub(crate) fn map_columns(&self, f: impl Fn(usize, f64) -> f64) -> Self {
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(idx, &v)| f(idx % self.cols, v))
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            values,
        }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub(crate) fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    pub(crate) fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(move |row| self.get(row, col))
    }
}
