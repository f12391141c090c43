//! Closed enumeration of the tie resolvers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::parameters::ConfigurationError;

/// Secondary procedure applied inside tie-groups of the final rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieResolverKind {
    #[default]
    NoResolver,
    Borda,
    Copeland,
}

impl TieResolverKind {
    /// Every resolver, in display order.
    pub const ALL: [TieResolverKind; 3] = [
        TieResolverKind::NoResolver,
        TieResolverKind::Borda,
        TieResolverKind::Copeland,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            TieResolverKind::NoResolver => "NoResolver",
            TieResolverKind::Borda => "Borda",
            TieResolverKind::Copeland => "Copeland",
        }
    }

    /// Short description shown next to the resolver picker.
    pub fn help(&self) -> &'static str {
        match self {
            TieResolverKind::NoResolver => "Leaves tied alternatives tied.",
            TieResolverKind::Borda => {
                "Counts Borda votes among the tied alternatives only, over every \
                 intermediate rank, and orders the tie-group by those votes."
            }
            TieResolverKind::Copeland => {
                "Compares the tied alternatives pairwise in every intermediate rank \
                 and orders the tie-group by points won."
            }
        }
    }
}

impl fmt::Display for TieResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TieResolverKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "noresolver" | "no_resolver" | "none" => Ok(TieResolverKind::NoResolver),
            "borda" => Ok(TieResolverKind::Borda),
            "copeland" => Ok(TieResolverKind::Copeland),
            _ => Err(ConfigurationError::UnknownTieResolver(s.to_string())),
        }
    }
}
