//! Impact directions for criteria.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TopsisError;

/// Direction of preference for one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// More is better (`+`).
    Maximize,
    /// Less is better (`-`).
    Minimize,
}

impl Impact {
    /// Maps an exact `+` / `-` token. Anything else, including surrounding
    /// whitespace, is rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Impact::Maximize),
            "-" => Some(Impact::Minimize),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Maximize => "+",
            Impact::Minimize => "-",
        }
    }

    /// Orders a column's extremes into `(best, worst)` for this direction.
    pub fn orient(&self, min: f64, max: f64) -> (f64, f64) {
        match self {
            Impact::Maximize => (max, min),
            Impact::Minimize => (min, max),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One impact per criterion, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Parses `+` / `-` tokens, failing on the first unrecognised one.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, TopsisError> {
        tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                let token = token.as_ref();
                Impact::from_token(token).ok_or_else(|| TopsisError::InvalidImpactToken {
                    position,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Impact> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Impact> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }
}
