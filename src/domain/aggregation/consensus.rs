//! Unanimity consensus of several ranks.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::AggregationError;
use crate::domain::ranking::{IntermediateRank, Rank};

/// Keeps two alternatives apart only where every rank agrees on their order.
///
/// Alternatives are sorted by mean position. A boundary is drawn between a
/// prefix and the remaining alternatives only when every rank places the
/// whole prefix strictly ahead of the rest. With a single rank the result
/// is that rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnanimityConsensus {
    pub alternatives: Vec<String>,
    pub mean_positions: Vec<f64>,
    /// `group_indices[i][r]`: tie-group index of alternative i in rank r.
    pub group_indices: Vec<Vec<usize>>,
}

impl UnanimityConsensus {
    pub fn compute(
        alternatives: &[String],
        ranks: &[IntermediateRank],
    ) -> Result<(Self, Rank), AggregationError> {
        if ranks.is_empty() {
            return Err(AggregationError::NoIntermediateRanks);
        }

        let mut group_indices = Vec::with_capacity(alternatives.len());
        let mut mean_positions = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            let mut indices = Vec::with_capacity(ranks.len());
            let mut position_sum = 0.0;
            for intermediate in ranks {
                let missing = || AggregationError::MissingAlternative {
                    alternative: alternative.clone(),
                    alpha: intermediate.alpha_value.name().to_string(),
                };
                indices.push(intermediate.rank.group_index(alternative).ok_or_else(missing)?);
                position_sum += intermediate.rank.position(alternative).ok_or_else(missing)?;
            }
            group_indices.push(indices);
            mean_positions.push(position_sum / ranks.len() as f64);
        }

        let mut order: Vec<usize> = (0..alternatives.len()).collect();
        order.sort_by(|&a, &b| mean_positions[a].total_cmp(&mean_positions[b]));

        // prefix_max[k][r]: worst group index among order[..=k] in rank r
        let rank_count = ranks.len();
        let mut prefix_max: Vec<Vec<usize>> = Vec::with_capacity(order.len());
        for (k, &i) in order.iter().enumerate() {
            let row: Vec<usize> = (0..rank_count)
                .map(|r| match k {
                    0 => group_indices[i][r],
                    _ => prefix_max[k - 1][r].max(group_indices[i][r]),
                })
                .collect();
            prefix_max.push(row);
        }
        let mut suffix_min: Vec<Vec<usize>> = vec![Vec::new(); order.len()];
        for k in (0..order.len()).rev() {
            let i = order[k];
            let row: Vec<usize> = (0..rank_count)
                .map(|r| match suffix_min.get(k + 1) {
                    Some(next) => next[r].min(group_indices[i][r]),
                    None => group_indices[i][r],
                })
                .collect();
            suffix_min[k] = row;
        }

        let mut groups: Vec<Vec<String>> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        for (k, &i) in order.iter().enumerate() {
            current.push(alternatives[i].clone());
            let boundary = k + 1 == order.len()
                || (0..rank_count).all(|r| prefix_max[k][r] < suffix_min[k + 1][r]);
            if boundary {
                groups.push(std::mem::take(&mut current));
            }
        }

        let consensus = Self {
            alternatives: alternatives.to_vec(),
            mean_positions,
            group_indices,
        };
        Ok((consensus, Rank::from_groups(groups)))
    }

    fn index_of(&self, alternative: &str) -> Option<usize> {
        self.alternatives.iter().position(|a| a == alternative)
    }

    /// How many ranks put `a` ahead of, level with and behind `b`.
    pub fn head_to_head(&self, a: &str, b: &str) -> Option<(usize, usize, usize)> {
        let (ia, ib) = (self.index_of(a)?, self.index_of(b)?);
        let mut tally = (0, 0, 0);
        for (ga, gb) in self.group_indices[ia].iter().zip(&self.group_indices[ib]) {
            match ga.cmp(gb) {
                Ordering::Less => tally.0 += 1,
                Ordering::Equal => tally.1 += 1,
                Ordering::Greater => tally.2 += 1,
            }
        }
        Some(tally)
    }

    pub fn explain(&self, a: &str, b: &str) -> Option<String> {
        let (ahead, level, behind) = self.head_to_head(a, b)?;
        let total = ahead + level + behind;
        let verdict = if ahead == total {
            format!("every rank puts {} ahead of {}", a, b)
        } else if behind == total {
            format!("every rank puts {} behind {}", a, b)
        } else {
            format!(
                "the ranks disagree ({} ahead in {}, level in {}, behind in {} of {}), so they are not separated",
                a, ahead, level, behind, total
            )
        };
        Some(format!("Comparing {} with {}: {}.", a, b, verdict))
    }
}
