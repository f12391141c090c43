//! Preference and preference-intensity relations between alternatives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How the left side of a relation stands to the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Strictly better, enforced with the EPS margin.
    Preference,
    /// At least as good.
    WeakPreference,
    /// Exactly as good.
    Indifference,
}

impl Relation {
    /// Returns true when the relation requires the EPS margin.
    pub fn is_strict(&self) -> bool {
        matches!(self, Relation::Preference)
    }

    /// Phrase used between the two alternatives of a preference relation.
    pub fn phrase(&self) -> &'static str {
        match self {
            Relation::Preference => "is preferred to",
            Relation::WeakPreference => "is weakly preferred to",
            Relation::Indifference => "is indifferent to",
        }
    }

    /// Short adjective used inside intensity descriptions.
    pub fn adjective(&self) -> &'static str {
        match self {
            Relation::Preference => "preferred",
            Relation::WeakPreference => "weakly preferred",
            Relation::Indifference => "indifferent",
        }
    }
}

impl FromStr for Relation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "preference" | "p" => Ok(Relation::Preference),
            "weak_preference" | "weak" | "w" => Ok(Relation::WeakPreference),
            "indifference" | "i" => Ok(Relation::Indifference),
            other => Err(ValidationError::invalid_format(
                "relation",
                format!("unknown relation '{}'", other),
            )),
        }
    }
}

/// `alternative_1` stands in `relation` to `alternative_2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceRelation {
    pub alternative_1: String,
    pub alternative_2: String,
    pub relation: Relation,
}

impl PreferenceRelation {
    /// Creates a new preference relation.
    pub fn new(
        alternative_1: impl Into<String>,
        alternative_2: impl Into<String>,
        relation: Relation,
    ) -> Self {
        Self {
            alternative_1: alternative_1.into(),
            alternative_2: alternative_2.into(),
            relation,
        }
    }

    /// Returns the referenced alternatives in order.
    pub fn alternatives(&self) -> [&str; 2] {
        [&self.alternative_1, &self.alternative_2]
    }
}

impl fmt::Display for PreferenceRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.alternative_1,
            self.relation.phrase(),
            self.alternative_2
        )
    }
}

/// "alternative_1 vs alternative_2" stands in `relation` to
/// "alternative_3 vs alternative_4".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceIntensityRelation {
    pub alternative_1: String,
    pub alternative_2: String,
    pub alternative_3: String,
    pub alternative_4: String,
    pub relation: Relation,
}

impl PreferenceIntensityRelation {
    /// Minimum number of alternatives a dataset needs before intensity
    /// relations can be stated.
    pub const REQUIRED_ALTERNATIVES: usize = 4;

    /// Creates a new intensity relation.
    pub fn new(
        alternative_1: impl Into<String>,
        alternative_2: impl Into<String>,
        alternative_3: impl Into<String>,
        alternative_4: impl Into<String>,
        relation: Relation,
    ) -> Self {
        Self {
            alternative_1: alternative_1.into(),
            alternative_2: alternative_2.into(),
            alternative_3: alternative_3.into(),
            alternative_4: alternative_4.into(),
            relation,
        }
    }

    /// Returns the referenced alternatives in order.
    pub fn alternatives(&self) -> [&str; 4] {
        [
            &self.alternative_1,
            &self.alternative_2,
            &self.alternative_3,
            &self.alternative_4,
        ]
    }
}

impl fmt::Display for PreferenceIntensityRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let adjective = self.relation.adjective();
        write!(
            f,
            "{} is {} to {} stronger than {} is {} to {}",
            self.alternative_1,
            adjective,
            self.alternative_2,
            self.alternative_3,
            adjective,
            self.alternative_4
        )
    }
}
