//! Closed enumeration of the results aggregators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::parameters::ConfigurationError;

/// Strategy that turns the per-alpha ranks into the final rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregatorKind {
    #[default]
    Default,
    Weighted,
    Borda,
    Copeland,
}

impl AggregatorKind {
    /// Every aggregator, in display order.
    pub const ALL: [AggregatorKind; 4] = [
        AggregatorKind::Default,
        AggregatorKind::Weighted,
        AggregatorKind::Borda,
        AggregatorKind::Copeland,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            AggregatorKind::Default => "Default",
            AggregatorKind::Weighted => "Weighted",
            AggregatorKind::Borda => "Borda",
            AggregatorKind::Copeland => "Copeland",
        }
    }

    /// Short description of how the aggregator builds the final rank.
    pub fn help(&self) -> &'static str {
        match self {
            AggregatorKind::Default => {
                "Uses the rank of a single alpha value. With several alpha values, \
                 alternatives stay apart only where every rank agrees."
            }
            AggregatorKind::Weighted => {
                "Orders alternatives by their position in each rank, averaged with \
                 the weight assigned to that rank's alpha value."
            }
            AggregatorKind::Borda => {
                "Each rank awards N-1-p votes to the alternative at position p. \
                 Alternatives are ordered by total votes."
            }
            AggregatorKind::Copeland => {
                "Each rank awards one point to the better alternative of every pair \
                 and half a point to each side of a tie. Alternatives are ordered by \
                 total points."
            }
        }
    }

    /// Whether NUMBER_OF_ALPHA_VALUES may replace the explicit alpha values.
    pub fn generates_alpha_values(&self) -> bool {
        matches!(self, AggregatorKind::Borda | AggregatorKind::Copeland)
    }
}

impl fmt::Display for AggregatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AggregatorKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(AggregatorKind::Default),
            "weighted" => Ok(AggregatorKind::Weighted),
            "borda" => Ok(AggregatorKind::Borda),
            "copeland" => Ok(AggregatorKind::Copeland),
            _ => Err(ConfigurationError::UnknownAggregator(s.to_string())),
        }
    }
}
