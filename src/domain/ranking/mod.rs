//! Ranking Module - Weak orders, per-alpha ranks and the final rank.

mod intermediate;
mod rank;

pub use intermediate::{AlternativeScore, FinalRank, IntermediateRank};
pub use rank::{Rank, ScoreTolerance};
