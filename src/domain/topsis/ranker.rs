//! Score to rank conversion.

/// Scores closer than this are treated as tied.
pub const TIE_TOLERANCE: f64 = 1e-9;

pub struct Ranker;

impl Ranker {
    /// Dense ranking, returned in input order.
    ///
    /// The highest score gets rank 1. Scores within [`TIE_TOLERANCE`] of the
    /// first (highest) score of a tie group share that group's rank, and the
    /// next distinct score takes the next integer, so there are no gaps.
    pub fn rank(scores: &[f64]) -> Vec<u32> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));

        let mut ranks = vec![0; scores.len()];
        let mut current = 0;
        let mut anchor: Option<f64> = None;

        for idx in order {
            let score = scores[idx];
            match anchor {
                Some(head) if head - score <= TIE_TOLERANCE => {}
                _ => {
                    current += 1;
                    anchor = Some(score);
                }
            }
            ranks[idx] = current;
        }

        ranks
    }
}
