//! Scored and ranked output of one engine invocation.

use serde::{Deserialize, Serialize};

/// Presentation name of the appended score column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Presentation name of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// One alternative with its original values and derived score and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub label: String,
    pub values: Vec<f64>,
    pub score: f64,
    pub rank: u32,
}

/// Result table. Rows stay in input order; rank is a column, not a sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisResult {
    pub label_column: String,
    pub criteria: Vec<String>,
    pub rows: Vec<ResultRow>,
    pub ideal: Vec<f64>,
    pub anti_ideal: Vec<f64>,
}

impl TopsisResult {
    /// Column names for display and export: label, criteria, score, rank.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.criteria.len() + 3);
        columns.push(self.label_column.clone());
        columns.extend(self.criteria.iter().cloned());
        columns.push(SCORE_COLUMN.to_string());
        columns.push(RANK_COLUMN.to_string());
        columns
    }

    /// Rows holding rank 1 (more than one when the top score is tied).
    pub fn best(&self) -> Vec<&ResultRow> {
        self.rows.iter().filter(|row| row.rank == 1).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> TopsisResult {
        let row = |label: &str, score: f64, rank: u32| ResultRow {
            label: label.to_string(),
            values: vec![1.0, 2.0],
            score,
            rank,
        };
        TopsisResult {
            label_column: "Fund".to_string(),
            criteria: vec!["Return".to_string(), "Risk".to_string()],
            rows: vec![row("F1", 0.4, 2), row("F2", 0.9, 1), row("F3", 0.4, 2)],
            ideal: vec![1.0, 0.1],
            anti_ideal: vec![0.1, 1.0],
        }
    }

    #[test]
    fn columns_append_score_and_rank() {
        assert_eq!(
            result().columns(),
            vec!["Fund", "Return", "Risk", "Topsis Score", "Rank"]
        );
    }

    #[test]
    fn best_returns_rank_one_rows() {
        let r = result();
        let best = r.best();
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].label, "F2");
    }

    #[test]
    fn rows_keep_input_order() {
        let r = result();
        assert_eq!(r.rows[0].label, "F1");
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
    }
}
