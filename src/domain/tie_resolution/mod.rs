//! Tie Resolution Module - Secondary votes inside tie-groups.

mod kind;
mod resolver;

pub use kind::TieResolverKind;
pub use resolver::{ResolvedTieGroup, TieResolution, TieResolver, TieVoting};
