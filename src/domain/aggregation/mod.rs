//! Aggregation Module - From a family of per-alpha ranks to one final rank.
//!
//! The strategy is a closed enumeration: Default (unanimity consensus),
//! Weighted (alpha-weighted mean position), Borda and Copeland. Each keeps
//! the data it decided on so the result can be explained pair by pair.

mod aggregator;
mod consensus;
mod errors;
mod kind;
mod weighted;

pub use aggregator::{Aggregation, AggregationDetails, ResultAggregator};
pub use consensus::UnanimityConsensus;
pub use errors::AggregationError;
pub use kind::AggregatorKind;
pub use weighted::WeightedPositions;
