//! The results aggregators.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AggregationError, AggregatorKind, UnanimityConsensus, WeightedPositions};
use crate::domain::parameters::{ConfigurationError, RorParameters};
use crate::domain::ranking::{FinalRank, IntermediateRank, Rank};
use crate::domain::tie_resolution::{TieResolution, TieResolver};
use crate::domain::voting::{BordaVoting, CopelandVoting};

/// A configured aggregation strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultAggregator {
    Default,
    Weighted { weights: Vec<f64> },
    Borda,
    Copeland,
}

impl ResultAggregator {
    /// Validates the parameters for the selected aggregator and builds it.
    ///
    /// Runs before any optimization so that configuration errors cost
    /// nothing.
    pub fn from_parameters(parameters: &RorParameters) -> Result<Self, ConfigurationError> {
        parameters.validate()?;
        let aggregator = match parameters.results_aggregator {
            AggregatorKind::Default => ResultAggregator::Default,
            AggregatorKind::Weighted => ResultAggregator::Weighted {
                weights: parameters
                    .alpha_weights
                    .clone()
                    .ok_or(ConfigurationError::MissingAlphaWeights)?,
            },
            AggregatorKind::Borda => ResultAggregator::Borda,
            AggregatorKind::Copeland => ResultAggregator::Copeland,
        };
        Ok(aggregator)
    }

    pub fn kind(&self) -> AggregatorKind {
        match self {
            ResultAggregator::Default => AggregatorKind::Default,
            ResultAggregator::Weighted { .. } => AggregatorKind::Weighted,
            ResultAggregator::Borda => AggregatorKind::Borda,
            ResultAggregator::Copeland => AggregatorKind::Copeland,
        }
    }

    /// Combines the intermediate ranks into the final rank, then lets the
    /// tie resolver order any remaining tie-groups.
    pub fn aggregate(
        &self,
        alternatives: &[String],
        intermediate_ranks: &[IntermediateRank],
        tie_resolver: TieResolver,
    ) -> Result<Aggregation, AggregationError> {
        if intermediate_ranks.is_empty() {
            return Err(AggregationError::NoIntermediateRanks);
        }

        let (unresolved, details) = match self {
            ResultAggregator::Default => {
                let (consensus, rank) =
                    UnanimityConsensus::compute(alternatives, intermediate_ranks)?;
                (rank, AggregationDetails::Default(consensus))
            }
            ResultAggregator::Weighted { weights } => {
                let positions = WeightedPositions::compute(alternatives, intermediate_ranks, weights)?;
                (positions.rank(), AggregationDetails::Weighted(positions))
            }
            ResultAggregator::Borda => {
                let voting = BordaVoting::count(alternatives, intermediate_ranks);
                (voting.rank(), AggregationDetails::Borda(voting))
            }
            ResultAggregator::Copeland => {
                let voting = CopelandVoting::count(alternatives, intermediate_ranks);
                (voting.rank(), AggregationDetails::Copeland(voting))
            }
        };

        let tie_resolution = tie_resolver.resolve(&unresolved, intermediate_ranks);
        let final_rank = FinalRank {
            rank: tie_resolution.rank.clone(),
            unresolved,
        };

        debug!(
            aggregator = %self.kind(),
            ranks = intermediate_ranks.len(),
            final_rank = %final_rank.rank,
            "Ranks aggregated"
        );
        Ok(Aggregation {
            aggregator: self.kind(),
            final_rank,
            details,
            tie_resolution,
        })
    }
}

/// Data an aggregator kept for explaining its decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "aggregator", rename_all = "snake_case")]
pub enum AggregationDetails {
    Default(UnanimityConsensus),
    Weighted(WeightedPositions),
    Borda(BordaVoting),
    Copeland(CopelandVoting),
}

impl AggregationDetails {
    fn explain(&self, a: &str, b: &str) -> Option<String> {
        match self {
            AggregationDetails::Default(consensus) => consensus.explain(a, b),
            AggregationDetails::Weighted(positions) => positions.explain(a, b),
            AggregationDetails::Borda(voting) => voting.explain(a, b),
            AggregationDetails::Copeland(voting) => voting.explain(a, b),
        }
    }
}

/// Output of an aggregator: the final rank and the data behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub aggregator: AggregatorKind,
    pub final_rank: FinalRank,
    pub details: AggregationDetails,
    pub tie_resolution: TieResolution,
}

impl Aggregation {
    pub fn rank(&self) -> &Rank {
        &self.final_rank.rank
    }

    /// Explains why `a` is placed where it is relative to `b`.
    pub fn explain_result(&self, a: &str, b: &str) -> Result<String, AggregationError> {
        let rank = self.rank();
        for alternative in [a, b] {
            if !rank.contains(alternative) {
                return Err(AggregationError::UnknownAlternative(alternative.to_string()));
            }
        }
        if a == b {
            return Err(AggregationError::SameAlternative(a.to_string()));
        }

        let mut parts = Vec::new();
        if let (Some(pa), Some(pb)) = (rank.position(a), rank.position(b)) {
            parts.push(format!(
                "In the final rank {} is at position {} and {} at position {}.",
                a,
                pa + 1.0,
                b,
                pb + 1.0
            ));
        }
        if let Some(reason) = self.details.explain(a, b) {
            parts.push(format!("{} aggregator: {}", self.aggregator, reason));
        }
        if let Some(reason) = self.tie_resolution.explain(a, b) {
            parts.push(reason);
        }
        Ok(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AlphaValue;
    use crate::domain::tie_resolution::TieResolverKind;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn intermediate(alpha: f64, groups: &[&[&str]]) -> IntermediateRank {
        IntermediateRank {
            alpha_value: AlphaValue::new(alpha, format!("a{}", alpha)).unwrap(),
            rank: Rank::from_groups(groups.iter().map(|g| names(g)).collect()),
            scores: Vec::new(),
        }
    }

    fn rank(groups: &[&[&str]]) -> Rank {
        Rank::from_groups(groups.iter().map(|g| names(g)).collect())
    }

    fn family() -> Vec<IntermediateRank> {
        vec![
            intermediate(0.0, &[&["A"], &["B"], &["C"]]),
            intermediate(0.5, &[&["B"], &["A"], &["C"]]),
            intermediate(1.0, &[&["A"], &["C"], &["B"]]),
        ]
    }

    #[test]
    fn builds_from_parameters() {
        let parameters = RorParameters::builder()
            .aggregator(AggregatorKind::Weighted)
            .alpha_weights(vec![1.0, 2.0, 1.0])
            .build()
            .unwrap();
        let aggregator = ResultAggregator::from_parameters(&parameters).unwrap();
        assert_eq!(
            aggregator,
            ResultAggregator::Weighted {
                weights: vec![1.0, 2.0, 1.0]
            }
        );
    }

    #[test]
    fn mismatched_weights_fail_before_aggregation() {
        let parameters = RorParameters::builder()
            .aggregator(AggregatorKind::Weighted)
            .alpha_weights(vec![1.0, 2.0])
            .build_unchecked();
        assert!(matches!(
            ResultAggregator::from_parameters(&parameters),
            Err(ConfigurationError::AlphaWeightsMismatch { .. })
        ));
    }

    #[test]
    fn empty_rank_list_is_rejected() {
        let result = ResultAggregator::Borda.aggregate(&names(&["A"]), &[], TieResolver::default());
        assert_eq!(result, Err(AggregationError::NoIntermediateRanks));
    }

    #[test]
    fn default_keeps_only_unanimous_order() {
        let aggregation = ResultAggregator::Default
            .aggregate(&names(&["A", "B", "C"]), &family(), TieResolver::default())
            .unwrap();
        assert_eq!(aggregation.rank(), &rank(&[&["A", "B", "C"]]));
    }

    #[test]
    fn borda_orders_by_total_votes() {
        let aggregation = ResultAggregator::Borda
            .aggregate(&names(&["A", "B", "C"]), &family(), TieResolver::default())
            .unwrap();
        // A: 2+1+2, B: 1+2+0, C: 0+0+1
        assert_eq!(aggregation.rank(), &rank(&[&["A"], &["B"], &["C"]]));
    }

    #[test]
    fn copeland_orders_by_pairwise_points() {
        let aggregation = ResultAggregator::Copeland
            .aggregate(&names(&["A", "B", "C"]), &family(), TieResolver::default())
            .unwrap();
        assert_eq!(aggregation.rank(), &rank(&[&["A"], &["B"], &["C"]]));
    }

    #[test]
    fn weighted_with_unit_weights_is_mean_position() {
        let aggregation = ResultAggregator::Weighted {
            weights: vec![1.0; 3],
        }
        .aggregate(&names(&["A", "B", "C"]), &family(), TieResolver::default())
        .unwrap();
        match &aggregation.details {
            AggregationDetails::Weighted(positions) => {
                assert!((positions.weighted_position_of("A").unwrap() - 1.0 / 3.0).abs() < 1e-12);
                assert!((positions.weighted_position_of("B").unwrap() - 1.0).abs() < 1e-12);
            }
            other => panic!("unexpected details {:?}", other),
        }
    }

    #[test]
    fn default_ties_go_to_the_resolver() {
        let aggregation = ResultAggregator::Default
            .aggregate(
                &names(&["A", "B", "C"]),
                &family(),
                TieResolver::new(TieResolverKind::Borda),
            )
            .unwrap();
        assert_eq!(aggregation.final_rank.unresolved, rank(&[&["A", "B", "C"]]));
        assert_eq!(aggregation.rank(), &rank(&[&["A"], &["B"], &["C"]]));
        assert!(aggregation.final_rank.was_resolved());

        let text = aggregation.explain_result("A", "B").unwrap();
        assert!(text.contains("Default aggregator"));
        assert!(text.contains("Borda tie resolver"));
    }

    #[test]
    fn explain_validates_alternatives() {
        let aggregation = ResultAggregator::Borda
            .aggregate(&names(&["A", "B", "C"]), &family(), TieResolver::default())
            .unwrap();
        assert_eq!(
            aggregation.explain_result("A", "Z"),
            Err(AggregationError::UnknownAlternative("Z".to_string()))
        );
        assert_eq!(
            aggregation.explain_result("A", "A"),
            Err(AggregationError::SameAlternative("A".to_string()))
        );
        assert!(aggregation
            .explain_result("A", "C")
            .unwrap()
            .starts_with("In the final rank A is at position 1 and C at position 3."));
    }
}
