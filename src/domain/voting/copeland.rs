//! Copeland pairwise voting over a family of ranks.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::standing;
use crate::domain::ranking::{IntermediateRank, Rank, ScoreTolerance};

/// Pairwise points of a set of alternatives across every intermediate rank.
///
/// For every rank and pair, the better-ranked alternative gets one point,
/// a tie gives half a point to each side, and nobody plays itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopelandVoting {
    pub alternatives: Vec<String>,
    /// `voting_matrix[i][j]`: points alternative i won against j.
    pub voting_matrix: Vec<Vec<f64>>,
    pub totals: Vec<f64>,
    /// Totals divided by the number of ranks.
    pub means: Vec<f64>,
    pub rank_count: usize,
}

impl CopelandVoting {
    pub fn count(alternatives: &[String], ranks: &[IntermediateRank]) -> Self {
        let n = alternatives.len();
        let mut voting_matrix = vec![vec![0.0; n]; n];

        for intermediate in ranks {
            for i in 0..n {
                for j in (i + 1)..n {
                    match intermediate.rank.compare(&alternatives[i], &alternatives[j]) {
                        Some(Ordering::Less) => voting_matrix[i][j] += 1.0,
                        Some(Ordering::Greater) => voting_matrix[j][i] += 1.0,
                        Some(Ordering::Equal) => {
                            voting_matrix[i][j] += 0.5;
                            voting_matrix[j][i] += 0.5;
                        }
                        None => {}
                    }
                }
            }
        }

        let totals: Vec<f64> = voting_matrix.iter().map(|row| row.iter().sum()).collect();
        let means = totals
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
            voting_matrix,
            totals,
            means,
            rank_count: ranks.len(),
        }
    }

    fn index_of(&self, alternative: &str) -> Option<usize> {
        self.alternatives.iter().position(|a| a == alternative)
    }

    /// Points `a` won against `b`.
    pub fn points(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.voting_matrix[self.index_of(a)?][self.index_of(b)?])
    }

    /// Alternatives by descending total points; equal totals stay tied.
    pub fn rank(&self) -> Rank {
        Rank::from_values(&self.alternatives, &self.totals, ScoreTolerance::votes())
    }

    /// Describes the head-to-head record and totals of `a` and `b`.
    pub fn explain(&self, a: &str, b: &str) -> Option<String> {
        let (ia, ib) = (self.index_of(a)?, self.index_of(b)?);
        Some(format!(
            "Head to head over {} ranks, {} won {} points against {} and {} won {}. \
             In total {} has {} points ({:.3} per rank) and {} has {} ({:.3} per rank), \
             so {} is {} {}.",
            self.rank_count,
            a,
            self.voting_matrix[ia][ib],
            b,
            b,
            self.voting_matrix[ib][ia],
            a,
            self.totals[ia],
            self.means[ia],
            b,
            self.totals[ib],
            self.means[ib],
            a,
            standing(self.totals[ia], self.totals[ib]),
            b
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AlphaValue;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn intermediate(groups: &[&[&str]]) -> IntermediateRank {
        IntermediateRank {
            alpha_value: AlphaValue::new(0.0, "Q").unwrap(),
            rank: Rank::from_groups(groups.iter().map(|g| names(g)).collect()),
            scores: Vec::new(),
        }
    }

    #[test]
    fn better_alternative_takes_the_point() {
        let voting = CopelandVoting::count(
            &names(&["A", "B", "C"]),
            &[intermediate(&[&["A"], &["B"], &["C"]])],
        );
        assert_eq!(voting.voting_matrix[0], vec![0.0, 1.0, 1.0]);
        assert_eq!(voting.voting_matrix[2], vec![0.0, 0.0, 0.0]);
        assert_eq!(voting.totals, vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn tie_splits_the_point() {
        let voting = CopelandVoting::count(
            &names(&["A", "B"]),
            &[intermediate(&[&["A", "B"]])],
        );
        assert_eq!(voting.points("A", "B"), Some(0.5));
        assert_eq!(voting.points("B", "A"), Some(0.5));
        assert_eq!(voting.points("A", "A"), Some(0.0));
    }

    #[test]
    fn pair_points_sum_to_rank_count() {
        let ranks = vec![
            intermediate(&[&["A"], &["B", "C"]]),
            intermediate(&[&["C"], &["A"], &["B"]]),
            intermediate(&[&["B"], &["A", "C"]]),
        ];
        let voting = CopelandVoting::count(&names(&["A", "B", "C"]), &ranks);
        for a in ["A", "B", "C"] {
            for b in ["A", "B", "C"] {
                if a != b {
                    let sum = voting.points(a, b).unwrap() + voting.points(b, a).unwrap();
                    assert_eq!(sum, 3.0);
                }
            }
        }
        assert_eq!(voting.rank_count, 3);
    }

    #[test]
    fn explains_head_to_head() {
        let voting = CopelandVoting::count(
            &names(&["A", "B"]),
            &[intermediate(&[&["B"], &["A"]])],
        );
        let text = voting.explain("A", "B").unwrap();
        assert!(text.contains("A won 0 points against B and B won 1"));
        assert!(text.contains("A is ranked below B"));
    }
}
