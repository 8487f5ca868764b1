//! Input validation - the gate in front of every arithmetic stage.
//!
//! Checks run in a fixed order and stop at the first violation:
//!
//! 1. at least one criterion column after the label column, none of them
//!    named like a computed result column
//! 2. at least one alternative row
//! 3. every criterion cell is present and parses as a finite number
//! 4. weight count equals criterion count
//! 5. impact count equals criterion count
//! 6. every weight is a finite number greater than zero
//! 7. every impact token is exactly `+` or `-`

use super::{
    DecisionMatrix, ImpactVector, RawDecisionTable, TopsisError, WeightVector, RANK_COLUMN,
    SCORE_COLUMN,
};

/// Typed, invariant-checked engine input.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub matrix: DecisionMatrix,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

/// Validation entry points for raw tables and delimited lists.
pub struct InputValidator;

impl InputValidator {
    /// Validates a raw table against comma-delimited weight and impact lists.
    pub fn validate(
        table: &RawDecisionTable,
        weights: &str,
        impacts: &str,
    ) -> Result<ValidatedInput, TopsisError> {
        Self::validate_tokens(table, &split_list(weights), &split_list(impacts))
    }

    /// Validates a raw table against already-split weight and impact tokens.
    pub fn validate_tokens<W, I>(
        table: &RawDecisionTable,
        weights: &[W],
        impacts: &[I],
    ) -> Result<ValidatedInput, TopsisError>
    where
        W: AsRef<str>,
        I: AsRef<str>,
    {
        let criteria = table.criterion_count();
        if criteria == 0 {
            return Err(TopsisError::NoCriteria {
                columns: table.headers.len(),
            });
        }
        let headers = table.unique_headers();
        if let Some(reserved) = headers
            .iter()
            .find(|h| h.trim() == SCORE_COLUMN || h.trim() == RANK_COLUMN)
        {
            return Err(TopsisError::ReservedColumnName {
                column: reserved.clone(),
            });
        }
        if table.rows.is_empty() {
            return Err(TopsisError::EmptyMatrix);
        }

        let (label_header, criterion_headers) = headers.split_at(1);
        let alternatives = Self::parse_rows(table, criterion_headers)?;

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

        let weights = WeightVector::parse_tokens(weights)?;
        let impacts = ImpactVector::from_tokens(impacts)?;
        let matrix = DecisionMatrix::new(
            label_header[0].as_str(),
            criterion_headers.to_vec(),
            alternatives,
        )?;

        Ok(ValidatedInput {
            matrix,
            weights,
            impacts,
        })
    }

    fn parse_rows(
        table: &RawDecisionTable,
        columns: &[String],
    ) -> Result<Vec<(String, Vec<f64>)>, TopsisError> {
        let width = columns.len();

        table
            .rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let label = cells.first().map(|s| s.trim().to_string()).unwrap_or_default();
                let raw_values = cells.get(1..).unwrap_or(&[]);

                if raw_values.len() > width {
                    return Err(TopsisError::RaggedRow {
                        row,
                        expected: width,
                        found: raw_values.len(),
                    });
                }

                let values = (0..width)
                    .map(|criterion| {
                        let raw = raw_values.get(criterion);
                        raw.and_then(|cell| parse_cell(cell)).ok_or_else(|| {
                            TopsisError::InvalidCriterionValue {
                                row,
                                criterion,
                                column: columns[criterion].clone(),
                                value: raw
                                    .map(|cell| cell.trim())
                                    .filter(|cell| !cell.is_empty())
                                    .map(str::to_string),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok((label, values))
            })
            .collect()
    }
}

/// Splits a comma-delimited list, trimming each token. A blank input yields
/// no tokens; an empty token between commas is kept so it can be reported.
pub fn split_list(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(|token| token.trim().to_string()).collect()
}

fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
