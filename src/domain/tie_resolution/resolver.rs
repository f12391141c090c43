//! Breaking ties of a final rank with a secondary vote.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TieResolverKind;
use crate::domain::ranking::{IntermediateRank, Rank};
use crate::domain::voting::{BordaVoting, CopelandVoting};

/// Votes counted among the members of one tie-group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum TieVoting {
    Borda(BordaVoting),
    Copeland(CopelandVoting),
}

impl TieVoting {
    fn rank(&self) -> Rank {
        match self {
            TieVoting::Borda(voting) => voting.rank(),
            TieVoting::Copeland(voting) => voting.rank(),
        }
    }

    fn explain(&self, a: &str, b: &str) -> Option<String> {
        match self {
            TieVoting::Borda(voting) => voting.explain(a, b),
            TieVoting::Copeland(voting) => voting.explain(a, b),
        }
    }
}

/// One tie-group and the sub-order the resolver produced for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTieGroup {
    /// Index of the group in the unresolved rank.
    pub group_index: usize,
    pub alternatives: Vec<String>,
    /// Sub-order; equal votes remain tied.
    pub order: Rank,
    pub voting: TieVoting,
}

/// Result of running a resolver over a rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieResolution {
    pub resolver: TieResolverKind,
    pub rank: Rank,
    pub groups: Vec<ResolvedTieGroup>,
}

impl TieResolution {
    /// The resolved group holding both alternatives.
    pub fn group_of(&self, a: &str, b: &str) -> Option<&ResolvedTieGroup> {
        self.groups.iter().find(|group| {
            group.alternatives.iter().any(|x| x == a) && group.alternatives.iter().any(|x| x == b)
        })
    }

    /// Describes how the resolver separated `a` and `b`, if it handled them.
    pub fn explain(&self, a: &str, b: &str) -> Option<String> {
        let group = self.group_of(a, b)?;
        let reason = group.voting.explain(a, b)?;
        Some(format!(
            "{} and {} were tied; the {} tie resolver decided: {}",
            a, b, self.resolver, reason
        ))
    }
}

/// Applies a [`TieResolverKind`] to the tie-groups of a rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TieResolver {
    kind: TieResolverKind,
}

impl TieResolver {
    pub fn new(kind: TieResolverKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> TieResolverKind {
        self.kind
    }

    /// Orders the members of every tie-group by a vote restricted to them,
    /// leaving the other groups where they are.
    ///
    /// A strict rank comes back unchanged.
    pub fn resolve(&self, rank: &Rank, intermediate_ranks: &[IntermediateRank]) -> TieResolution {
        let mut resolution = TieResolution {
            resolver: self.kind,
            rank: rank.clone(),
            groups: Vec::new(),
        };
        if self.kind == TieResolverKind::NoResolver {
            return resolution;
        }

        for (group_index, members) in rank.tie_groups() {
            let voting = match self.kind {
                TieResolverKind::Borda => {
                    TieVoting::Borda(BordaVoting::count(members, intermediate_ranks))
                }
                TieResolverKind::Copeland => {
                    TieVoting::Copeland(CopelandVoting::count(members, intermediate_ranks))
                }
                TieResolverKind::NoResolver => continue,
            };
            resolution.groups.push(ResolvedTieGroup {
                group_index,
                alternatives: members.clone(),
                order: voting.rank(),
                voting,
            });
        }

        // Later groups first so earlier indices stay valid.
        for group in resolution.groups.iter().rev() {
            resolution
                .rank
                .splice_group(group.group_index, group.order.groups().to_vec());
        }

        debug!(
            resolver = %self.kind,
            tie_groups = resolution.groups.len(),
            strict = resolution.rank.is_strict(),
            "Ties resolved"
        );
        resolution
    }
}
