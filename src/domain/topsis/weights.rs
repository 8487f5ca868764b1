//! Criterion weights.

use serde::Serialize;

use super::TopsisError;

/// Relative importance per criterion. Every entry is finite and strictly
/// positive; the entries need not sum to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Wraps already-numeric weights.
    pub fn new(weights: Vec<f64>) -> Result<Self, TopsisError> {
        for (position, &value) in weights.iter().enumerate() {
            Self::check(position, value, || value.to_string())?;
        }
        Ok(Self(weights))
    }

    /// Parses textual weights position by position: a token must be a finite
    /// number first, then positive.
    pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, TopsisError> {
        let mut weights = Vec::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            let token = token.as_ref().trim();
            let value = token
                .parse::<f64>()
                .map_err(|_| TopsisError::InvalidWeightValue {
                    position,
                    token: token.to_string(),
                })?;
            Self::check(position, value, || token.to_string())?;
            weights.push(value);
        }
        Ok(Self(weights))
    }

    fn check(
        position: usize,
        value: f64,
        token: impl FnOnce() -> String,
    ) -> Result<(), TopsisError> {
        if !value.is_finite() {
            return Err(TopsisError::InvalidWeightValue {
                position,
                token: token(),
            });
        }
        if value <= 0.0 {
            return Err(TopsisError::NonPositiveWeight { position, value });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
