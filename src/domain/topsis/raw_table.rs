//! Untyped decision table as handed over by a parser.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Header plus rows of text cells. The first column holds alternative labels,
/// every following column is a criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDecisionTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawDecisionTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Creates a builder for constructing a raw table.
    pub fn builder() -> RawDecisionTableBuilder {
        RawDecisionTableBuilder::default()
    }

    /// Name of the label column, empty when the header is empty.
    pub fn label_header(&self) -> &str {
        self.headers.first().map(String::as_str).unwrap_or("")
    }

    /// Criterion column names, i.e. every header after the label.
    pub fn criterion_headers(&self) -> &[String] {
        self.headers.get(1..).unwrap_or(&[])
    }

    pub fn criterion_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header names with repeats made distinct: the second `Cost` becomes
    /// `Cost.1`, the third `Cost.2`, skipping any name already taken.
    pub fn unique_headers(&self) -> Vec<String> {
        let mut taken: HashSet<String> = HashSet::with_capacity(self.headers.len());
        let mut suffixes: HashMap<&str, usize> = HashMap::new();

        self.headers
            .iter()
            .map(|header| {
                if taken.insert(header.clone()) {
                    return header.clone();
                }
                let suffix = suffixes.entry(header.as_str()).or_insert(1);
                loop {
                    let candidate = format!("{}.{}", header, suffix);
                    *suffix += 1;
                    if taken.insert(candidate.clone()) {
                        return candidate;
                    }
                }
            })
            .collect()
    }
}

/// Builder for constructing RawDecisionTable instances.
#[derive(Debug, Default)]
pub struct RawDecisionTableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawDecisionTableBuilder {
    /// Sets the header row, label column first.
    pub fn headers(mut self, headers: Vec<impl Into<String>>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a data row, label first.
    pub fn row(mut self, cells: Vec<impl Into<String>>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> RawDecisionTable {
        RawDecisionTable {
            headers: self.headers,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_headers_and_rows() {
        let table = RawDecisionTable::builder()
            .headers(vec!["Model", "Price", "Storage"])
            .row(vec!["M1", "250", "16"])
            .row(vec!["M2", "200", "16"])
            .build();

        assert_eq!(table.label_header(), "Model");
        assert_eq!(table.criterion_headers(), &["Price".to_string(), "Storage".to_string()]);
        assert_eq!(table.criterion_count(), 2);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn empty_table_has_no_criteria() {
        let table = RawDecisionTable::default();
        assert_eq!(table.label_header(), "");
        assert!(table.criterion_headers().is_empty());
        assert_eq!(table.criterion_count(), 0);
    }

    #[test]
    fn table_deserializes_from_json() {
        let json = r#"{"headers": ["Fund", "Return"], "rows": [["F1", "0.8"]]}"#;
        let table: RawDecisionTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.rows[0][1], "0.8");
    }

    #[test]
    fn repeated_headers_get_numbered_suffixes() {
        let table = RawDecisionTable::builder()
            .headers(vec!["Alt", "Cost", "Cost", "Cost"])
            .build();
        assert_eq!(table.unique_headers(), vec!["Alt", "Cost", "Cost.1", "Cost.2"]);
    }

    #[test]
    fn suffixes_skip_names_already_in_the_header() {
        let table = RawDecisionTable::builder()
            .headers(vec!["Alt", "Cost", "Cost.1", "Cost"])
            .build();
        assert_eq!(table.unique_headers(), vec!["Alt", "Cost", "Cost.1", "Cost.2"]);
    }

    #[test]
    fn distinct_headers_are_unchanged() {
        let table = RawDecisionTable::builder().headers(vec!["Alt", "x", "y"]).build();
        assert_eq!(table.unique_headers(), table.headers);
    }
}
