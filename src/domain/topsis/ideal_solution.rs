//! Ideal and anti-ideal solution construction.

use serde::{Deserialize, Serialize};

use super::{ImpactVector, WeightedMatrix};

/// Per-criterion best and worst attainable weighted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealSolutions {
    pub ideal: Vec<f64>,
    pub anti_ideal: Vec<f64>,
}

pub struct IdealSolutionConstructor;

impl IdealSolutionConstructor {
    /// For a maximized criterion the ideal is the column maximum and the
    /// anti-ideal the column minimum; minimized criteria swap the two.
    pub fn construct(weighted: &WeightedMatrix, impacts: &ImpactVector) -> IdealSolutions {
        debug_assert_eq!(weighted.criterion_count(), impacts.len());

        let (ideal, anti_ideal) = impacts
            .iter()
            .enumerate()
            .map(|(criterion, impact)| {
                let (min, max) = weighted.column(criterion).fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), v| (lo.min(v), hi.max(v)),
                );
                impact.orient(min, max)
            })
            .unzip();

        IdealSolutions { ideal, anti_ideal }
    }
}
