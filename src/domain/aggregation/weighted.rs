//! Alpha-weighted mean positions.

use serde::{Deserialize, Serialize};

use super::AggregationError;
use crate::domain::ranking::{IntermediateRank, Rank, ScoreTolerance};
use crate::domain::voting::standing;

/// Position of every alternative in every rank and their weighted mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedPositions {
    pub alternatives: Vec<String>,
    pub alpha_names: Vec<String>,
    pub weights: Vec<f64>,
    /// `positions[i][r]`: 0-based position of alternative i in rank r.
    pub positions: Vec<Vec<f64>>,
    /// `Σ w_r · position_r / Σ w_r`, lower is better.
    pub weighted_positions: Vec<f64>,
}

impl WeightedPositions {
    /// Weights are used as given; only their ratios matter.
    pub fn compute(
        alternatives: &[String],
        ranks: &[IntermediateRank],
        weights: &[f64],
    ) -> Result<Self, AggregationError> {
        if weights.len() != ranks.len() {
            return Err(AggregationError::AlphaWeightsMismatch {
                weights: weights.len(),
                ranks: ranks.len(),
            });
        }
        let weight_sum: f64 = weights.iter().sum();

        let mut positions = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            let row = ranks
                .iter()
                .map(|intermediate| {
                    intermediate.rank.position(alternative).ok_or_else(|| {
                        AggregationError::MissingAlternative {
                            alternative: alternative.clone(),
                            alpha: intermediate.alpha_value.name().to_string(),
                        }
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            positions.push(row);
        }

        let weighted_positions = positions
            .iter()
            .map(|row: &Vec<f64>| {
                let weighted: f64 = row.iter().zip(weights).map(|(p, w)| p * w).sum();
                if weight_sum > 0.0 {
                    weighted / weight_sum
                } else {
                    0.0
                }
            })
            .collect();

        Ok(Self {
            alternatives: alternatives.to_vec(),
            alpha_names: ranks
                .iter()
                .map(|r| r.alpha_value.name().to_string())
                .collect(),
            weights: weights.to_vec(),
            positions,
            weighted_positions,
        })
    }

    fn index_of(&self, alternative: &str) -> Option<usize> {
        self.alternatives.iter().position(|a| a == alternative)
    }

    pub fn weighted_position_of(&self, alternative: &str) -> Option<f64> {
        self.index_of(alternative).map(|i| self.weighted_positions[i])
    }

    /// Alternatives by ascending weighted position.
    pub fn rank(&self) -> Rank {
        let negated: Vec<f64> = self.weighted_positions.iter().map(|p| -p).collect();
        Rank::from_values(&self.alternatives, &negated, ScoreTolerance::votes())
    }

    pub fn explain(&self, a: &str, b: &str) -> Option<String> {
        let (ia, ib) = (self.index_of(a)?, self.index_of(b)?);
        let per_rank: Vec<String> = self
            .alpha_names
            .iter()
            .enumerate()
            .map(|(r, name)| {
                format!(
                    "{} (weight {}): {} at {}, {} at {}",
                    name, self.weights[r], a, self.positions[ia][r], b, self.positions[ib][r]
                )
            })
            .collect();
        let (pa, pb) = (self.weighted_positions[ia], self.weighted_positions[ib]);
        let verdict = standing(-pa, -pb);
        Some(format!(
            "{} has weighted mean position {:.3} and {} has {:.3}, so {} is {} {}. Positions: {}.",
            a,
            pa,
            b,
            pb,
            a,
            verdict,
            b,
            per_rank.join("; ")
        ))
    }
}
