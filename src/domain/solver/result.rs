//! Structured solve result.

use serde::{Deserialize, Serialize};

use crate::domain::aggregation::{Aggregation, AggregationError, AggregatorKind};
use crate::domain::foundation::{SolveId, Timestamp};
use crate::domain::model::RorModel;
use crate::domain::parameters::RorParameters;
use crate::domain::ranking::{IntermediateRank, Rank};

/// Everything a solve produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RorResult {
    pub solve_id: SolveId,
    pub aggregator: AggregatorKind,
    /// The parameters the solve actually ran with.
    pub parameters: RorParameters,
    pub model: RorModel,
    /// One per alpha value, in alpha order.
    pub intermediate_ranks: Vec<IntermediateRank>,
    pub aggregation: Aggregation,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
}

impl RorResult {
    pub fn final_rank(&self) -> &Rank {
        self.aggregation.rank()
    }

    pub fn alternatives(&self) -> &[String] {
        self.model.dataset().alternatives()
    }

    /// Explains the placement of `a` relative to `b` in the final rank.
    pub fn explain_result(&self, a: &str, b: &str) -> Result<String, AggregationError> {
        self.aggregation.explain_result(a, b)
    }

    /// One row per alternative, in final-rank order.
    pub fn result_table(&self) -> ResultTable {
        let columns = self
            .intermediate_ranks
            .iter()
            .map(|r| r.alpha_value.name().to_string())
            .collect();

        let final_rank = self.final_rank();
        let mut rows: Vec<ResultRow> = self
            .alternatives()
            .iter()
            .map(|alternative| ResultRow {
                alternative: alternative.clone(),
                scores: self
                    .intermediate_ranks
                    .iter()
                    .map(|r| r.score_of(alternative).map_or(f64::NAN, |s| s.score))
                    .collect(),
                position: final_rank.position(alternative).unwrap_or(f64::NAN),
            })
            .collect();
        rows.sort_by(|a, b| a.position.total_cmp(&b.position));

        ResultTable { columns, rows }
    }
}

/// Alternatives with their blended score per alpha value and final position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Alpha value names, one per score column.
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub alternative: String,
    pub scores: Vec<f64>,
    /// 0-based, fractional for ties.
    pub position: f64,
}

impl ResultTable {
    /// Copy with scores rounded to `precision` decimal digits.
    pub fn rounded(&self, precision: usize) -> ResultTable {
        let factor = 10f64.powi(precision.min(15) as i32);
        let round = |value: f64| (value * factor).round() / factor;
        ResultTable {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| ResultRow {
                    alternative: row.alternative.clone(),
                    scores: row.scores.iter().copied().map(round).collect(),
                    position: row.position,
                })
                .collect(),
        }
    }

    pub fn row(&self, alternative: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|row| row.alternative == alternative)
    }
}
