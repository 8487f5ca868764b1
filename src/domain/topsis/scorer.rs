//! Separation measures and relative closeness.

use serde::{Deserialize, Serialize};

use super::{IdealSolutions, WeightedMatrix};

/// Euclidean distances of one alternative from the two reference solutions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    pub to_ideal: f64,
    pub to_anti_ideal: f64,
}

impl Separation {
    /// Relative closeness `d- / (d+ + d-)`, in `[0, 1]`.
    ///
    /// When both distances are zero the alternative coincides with both the
    /// ideal and the anti-ideal, which only happens when every criterion is
    /// constant across alternatives (or there is a single alternative). Such
    /// a row scores `0.0`. A ratio that cannot be formed in floating point
    /// (both distances infinite) also scores `0.0`.
    pub fn closeness(&self) -> f64 {
        let total = self.to_ideal + self.to_anti_ideal;
        if total == 0.0 {
            return 0.0;
        }
        if self.to_anti_ideal.is_infinite() && self.to_ideal.is_finite() {
            return 1.0;
        }
        let score = self.to_anti_ideal / total;
        if score.is_nan() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

pub struct Scorer;

impl Scorer {
    /// Closeness score for every row, in row order.
    ///
    /// Distances are measured on the weighted matrix divided by its largest
    /// magnitude. Closeness is a ratio of distances so the result is
    /// unchanged, and the differences cannot overflow.
    pub fn scores(weighted: &WeightedMatrix, ideals: &IdealSolutions) -> Vec<f64> {
        Self::separations(weighted, ideals, peak_magnitude(weighted))
            .iter()
            .map(Separation::closeness)
            .collect()
    }

    /// Distances of every row from the ideal and anti-ideal, measured in
    /// units of `scale`.
    fn separations(
        weighted: &WeightedMatrix,
        ideals: &IdealSolutions,
        scale: f64,
    ) -> Vec<Separation> {
        (0..weighted.row_count())
            .map(|row| {
                let values = weighted.row(row);
                Separation {
                    to_ideal: scaled_euclidean(values, &ideals.ideal, scale),
                    to_anti_ideal: scaled_euclidean(values, &ideals.anti_ideal, scale),
                }
            })
            .collect()
    }
}

/// Largest absolute weighted value, or `1.0` for an all-zero matrix.
fn peak_magnitude(weighted: &WeightedMatrix) -> f64 {
    let peak = (0..weighted.row_count())
        .flat_map(|row| weighted.row(row).iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if peak > 0.0 {
        peak
    } else {
        1.0
    }
}

fn scaled_euclidean(point: &[f64], target: &[f64], scale: f64) -> f64 {
    point
        .iter()
        .zip(target)
        .fold(0.0_f64, |acc, (p, t)| acc.hypot(p / scale - t / scale))
}
