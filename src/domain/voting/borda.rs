//! Borda count over a family of ranks.

use serde::{Deserialize, Serialize};

use super::standing;
use crate::domain::ranking::{IntermediateRank, Rank, ScoreTolerance};

/// Borda votes of a set of alternatives across every intermediate rank.
///
/// In a rank of N alternatives, position p earns N-1-p votes. Tied
/// alternatives share the mean of the votes of the positions they occupy.
/// Only the alternatives being counted take part: a subset is counted as if
/// the other alternatives were absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BordaVoting {
    pub alternatives: Vec<String>,
    pub alpha_names: Vec<String>,
    /// `votes_per_rank[i][r]`: votes of alternative i in rank r.
    pub votes_per_rank: Vec<Vec<f64>>,
    pub total_votes: Vec<f64>,
    pub mean_votes: Vec<f64>,
}

impl BordaVoting {
    pub fn count(alternatives: &[String], ranks: &[IntermediateRank]) -> Self {
        let top_votes = alternatives.len().saturating_sub(1) as f64;
        let restricted: Vec<Rank> = ranks
            .iter()
            .map(|r| r.rank.restricted_to(alternatives))
            .collect();

        let votes_per_rank: Vec<Vec<f64>> = alternatives
            .iter()
            .map(|alternative| {
                restricted
                    .iter()
                    .map(|rank| {
                        rank.position(alternative)
                            .map(|position| top_votes - position)
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();

        let total_votes: Vec<f64> = votes_per_rank.iter().map(|v| v.iter().sum()).collect();
        let mean_votes = total_votes
            .iter()
            .map(|total| {
                if ranks.is_empty() {
                    0.0
                } else {
                    total / ranks.len() as f64
                }
            })
            .collect();

        Self {
            alternatives: alternatives.to_vec(),
            alpha_names: ranks
                .iter()
                .map(|r| r.alpha_value.name().to_string())
                .collect(),
            votes_per_rank,
            total_votes,
            mean_votes,
        }
    }

    fn index_of(&self, alternative: &str) -> Option<usize> {
        self.alternatives.iter().position(|a| a == alternative)
    }

    /// Total votes of an alternative.
    pub fn votes_of(&self, alternative: &str) -> Option<f64> {
        self.index_of(alternative).map(|i| self.total_votes[i])
    }

    /// Mean votes per rank of an alternative.
    pub fn mean_votes_of(&self, alternative: &str) -> Option<f64> {
        self.index_of(alternative).map(|i| self.mean_votes[i])
    }

    /// Alternatives by descending total votes; equal totals stay tied.
    pub fn rank(&self) -> Rank {
        Rank::from_values(&self.alternatives, &self.total_votes, ScoreTolerance::votes())
    }

    /// Describes how the votes of `a` and `b` compare.
    pub fn explain(&self, a: &str, b: &str) -> Option<String> {
        let (ia, ib) = (self.index_of(a)?, self.index_of(b)?);
        let per_rank: Vec<String> = self
            .alpha_names
            .iter()
            .enumerate()
            .map(|(r, name)| {
                format!(
                    "{}: {} {} vs {} {}",
                    name, a, self.votes_per_rank[ia][r], b, self.votes_per_rank[ib][r]
                )
            })
            .collect();
        Some(format!(
            "{} received {} Borda votes ({:.3} per rank) and {} received {} ({:.3} per rank), \
             so {} is {} {}. Votes per rank: {}.",
            a,
            self.total_votes[ia],
            self.mean_votes[ia],
            b,
            self.total_votes[ib],
            self.mean_votes[ib],
            a,
            standing(self.total_votes[ia], self.total_votes[ib]),
            b,
            per_rank.join("; ")
        ))
    }
}
