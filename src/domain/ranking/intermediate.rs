//! Per-alpha ranks and the final rank.

use serde::{Deserialize, Serialize};

use super::Rank;
use crate::domain::foundation::AlphaValue;

/// Score range of one alternative over the feasible region, and the
/// alpha-blended score used for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub alternative: String,
    pub min_score: f64,
    pub max_score: f64,
    pub score: f64,
}

impl AlternativeScore {
    /// Blends the extremes: alpha 0 gives the minimum, alpha 1 the maximum.
    pub fn blended(alternative: impl Into<String>, min_score: f64, max_score: f64, alpha: f64) -> Self {
        Self {
            alternative: alternative.into(),
            min_score,
            max_score,
            score: (1.0 - alpha) * min_score + alpha * max_score,
        }
    }
}

/// The rank produced by one alpha value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateRank {
    pub alpha_value: AlphaValue,
    pub rank: Rank,
    /// Scores in dataset order.
    pub scores: Vec<AlternativeScore>,
}

impl IntermediateRank {
    /// Score entry of an alternative.
    pub fn score_of(&self, alternative: &str) -> Option<&AlternativeScore> {
        self.scores.iter().find(|s| s.alternative == alternative)
    }

    /// Alternatives in dataset order.
    pub fn alternatives(&self) -> Vec<String> {
        self.scores.iter().map(|s| s.alternative.clone()).collect()
    }
}

/// Outcome of aggregation: the aggregator's rank and the same rank after
/// tie resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalRank {
    pub rank: Rank,
    pub unresolved: Rank,
}

impl FinalRank {
    /// A final rank nothing was resolved in.
    pub fn unresolved(rank: Rank) -> Self {
        Self {
            unresolved: rank.clone(),
            rank,
        }
    }

    /// True when the tie resolver changed the aggregator's rank.
    pub fn was_resolved(&self) -> bool {
        self.rank != self.unresolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blending_interpolates_between_extremes() {
        assert_eq!(AlternativeScore::blended("A", 1.0, 3.0, 0.0).score, 1.0);
        assert_eq!(AlternativeScore::blended("A", 1.0, 3.0, 1.0).score, 3.0);
        assert_eq!(AlternativeScore::blended("A", 1.0, 3.0, 0.5).score, 2.0);
    }

    #[test]
    fn looks_up_scores_by_alternative() {
        let intermediate = IntermediateRank {
            alpha_value: AlphaValue::new(0.5, "R").unwrap(),
            rank: Rank::strict(vec!["B".to_string(), "A".to_string()]),
            scores: vec![
                AlternativeScore::blended("A", 0.0, 1.0, 0.5),
                AlternativeScore::blended("B", 1.0, 1.0, 0.5),
            ],
        };
        assert_eq!(intermediate.score_of("B").map(|s| s.score), Some(1.0));
        assert!(intermediate.score_of("C").is_none());
        assert_eq!(intermediate.alternatives(), vec!["A", "B"]);
    }

    #[test]
    fn final_rank_tracks_resolution() {
        let tied = Rank::from_groups(vec![vec!["A".to_string(), "B".to_string()]]);
        let unresolved = FinalRank::unresolved(tied.clone());
        assert!(!unresolved.was_resolved());

        let resolved = FinalRank {
            rank: Rank::strict(vec!["B".to_string(), "A".to_string()]),
            unresolved: tied,
        };
        assert!(resolved.was_resolved());
    }
}
