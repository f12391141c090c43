//! Voting Module - Borda and Copeland counts over intermediate ranks.
//!
//! Both counts work on any subset of alternatives, so the aggregators and
//! the tie resolvers share them.

mod borda;
mod copeland;

pub use borda::BordaVoting;
pub use copeland::CopelandVoting;

use crate::domain::ranking::ScoreTolerance;

/// "ranked above", "ranked below" or "level with", comparing scores where
/// higher is better.
pub(crate) fn standing(a: f64, b: f64) -> &'static str {
    if ScoreTolerance::votes().same(a, b) {
        "level with"
    } else if a > b {
        "ranked above"
    } else {
        "ranked below"
    }
}
