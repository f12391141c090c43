//! Weak orders over alternatives.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Scores closer than this are treated as equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTolerance(f64);

impl ScoreTolerance {
    const FLOOR: f64 = 1e-9;
    const CEILING: f64 = 1e-6;

    /// A tenth of EPS, kept within [1e-9, 1e-6].
    pub fn from_eps(eps: f64) -> Self {
        Self((eps * 0.1).clamp(Self::FLOOR, Self::CEILING))
    }

    /// Tolerance for comparing vote counts.
    pub fn votes() -> Self {
        Self(Self::FLOOR)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn same(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }
}

/// Alternatives ordered best first, as a sequence of tie-groups.
///
/// A tie-group is a set: members are kept sorted by name, so two ranks with
/// the same groups compare and display identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Rank {
    groups: Vec<Vec<String>>,
}

fn normalized(
    groups: impl IntoIterator<Item = Vec<String>>,
) -> impl Iterator<Item = Vec<String>> {
    groups.into_iter().filter(|g| !g.is_empty()).map(|mut g| {
        g.sort();
        g
    })
}

impl From<Vec<Vec<String>>> for Rank {
    fn from(groups: Vec<Vec<String>>) -> Self {
        Self::from_groups(groups)
    }
}

impl From<Rank> for Vec<Vec<String>> {
    fn from(rank: Rank) -> Self {
        rank.groups
    }
}

impl Rank {
    /// Builds a rank from tie-groups, best first. Empty groups are dropped.
    pub fn from_groups(groups: Vec<Vec<String>>) -> Self {
        Self {
            groups: normalized(groups).collect(),
        }
    }

    /// A strict rank from an ordered list.
    pub fn strict(alternatives: impl IntoIterator<Item = String>) -> Self {
        Self::from_groups(alternatives.into_iter().map(|a| vec![a]).collect())
    }

    /// Orders alternatives by descending value.
    ///
    /// An alternative joins the current tie-group when its value is within
    /// `tolerance` of the group's best value.
    pub fn from_values(alternatives: &[String], values: &[f64], tolerance: ScoreTolerance) -> Self {
        let mut order: Vec<usize> = (0..alternatives.len().min(values.len())).collect();
        order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

        let mut groups: Vec<Vec<String>> = Vec::new();
        let mut group_top = f64::NAN;
        for index in order {
            let value = values[index];
            match groups.last_mut() {
                Some(group) if tolerance.same(group_top, value) => {
                    group.push(alternatives[index].clone());
                }
                _ => {
                    groups.push(vec![alternatives[index].clone()]);
                    group_top = value;
                }
            }
        }
        Self::from_groups(groups)
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Alternatives in rank order, tied members by name.
    pub fn alternatives(&self) -> impl Iterator<Item = &String> {
        self.groups.iter().flatten()
    }

    /// Number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True when no two alternatives share a position.
    pub fn is_strict(&self) -> bool {
        self.groups.iter().all(|g| g.len() == 1)
    }

    /// Indices and members of the groups holding more than one alternative.
    pub fn tie_groups(&self) -> impl Iterator<Item = (usize, &Vec<String>)> {
        self.groups.iter().enumerate().filter(|(_, g)| g.len() > 1)
    }

    /// Index of the tie-group holding the alternative.
    pub fn group_index(&self, alternative: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|g| g.iter().any(|a| a == alternative))
    }

    pub fn contains(&self, alternative: &str) -> bool {
        self.group_index(alternative).is_some()
    }

    /// 0-based position; a tie-group shares the mean of the positions it
    /// occupies.
    pub fn position(&self, alternative: &str) -> Option<f64> {
        let mut start = 0usize;
        for group in &self.groups {
            if group.iter().any(|a| a == alternative) {
                return Some(start as f64 + (group.len() - 1) as f64 / 2.0);
            }
            start += group.len();
        }
        None
    }

    /// `Less` when `a` is ranked ahead of `b`, `Equal` when tied.
    pub fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        Some(self.group_index(a)?.cmp(&self.group_index(b)?))
    }

    /// The same order restricted to a subset of alternatives.
    pub fn restricted_to(&self, subset: &[String]) -> Rank {
        Rank::from_groups(
            self.groups
                .iter()
                .map(|g| g.iter().filter(|a| subset.contains(a)).cloned().collect())
                .collect(),
        )
    }

    /// Replaces the group at `index` with an ordered sequence of groups.
    pub fn splice_group(&mut self, index: usize, replacement: Vec<Vec<String>>) {
        if index < self.groups.len() {
            self.groups.splice(index..=index, normalized(replacement));
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.groups.iter().map(|g| g.join(" = ")).collect();
        write!(f, "{}", groups.join(" > "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn rank(groups: &[&[&str]]) -> Rank {
        Rank::from_groups(groups.iter().map(|g| names(g)).collect())
    }

    #[test]
    fn tolerance_is_a_clamped_tenth_of_eps() {
        assert_eq!(ScoreTolerance::from_eps(1e-4).value(), 1e-6);
        assert_eq!(ScoreTolerance::from_eps(0.0).value(), 1e-9);
        assert!((ScoreTolerance::from_eps(1e-7).value() - 1e-8).abs() < 1e-15);
    }

    #[test]
    fn from_values_orders_descending_and_groups_near_ties() {
        let alternatives = names(&["A", "B", "C", "D"]);
        let values = [0.2, 0.9, 0.2 + 1e-12, 0.5];
        let ranked = Rank::from_values(&alternatives, &values, ScoreTolerance::from_eps(1e-4));
        assert_eq!(ranked, rank(&[&["B"], &["D"], &["C", "A"]]));
        assert_eq!(ranked.groups()[2], names(&["A", "C"]));
    }

    #[test]
    fn tie_group_member_order_does_not_matter() {
        let alternatives = names(&["D", "B", "A", "C"]);
        let reordered = names(&["D", "A", "B", "C"]);
        let values = [0.9, 0.5, 0.5, 0.1];

        let first = Rank::from_values(&alternatives, &values, ScoreTolerance::votes());
        let second = Rank::from_values(&reordered, &values, ScoreTolerance::votes());

        assert_eq!(first, second);
        assert_eq!(first.to_string(), "D > A = B > C");
        assert_eq!(rank(&[&["B", "A"]]), rank(&[&["A", "B"]]));
    }

    #[test]
    fn deserialized_groups_are_normalized() {
        let parsed: Rank = serde_json::from_str(r#"[["C", "A"], [], ["B"]]"#).unwrap();
        assert_eq!(parsed.groups(), &[names(&["A", "C"]), names(&["B"])]);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"[["A","C"],["B"]]"#);
    }

    #[test]
    fn positions_are_fractional_for_ties() {
        let r = rank(&[&["A"], &["B", "C", "D"], &["E"]]);
        assert_eq!(r.position("A"), Some(0.0));
        assert_eq!(r.position("C"), Some(2.0));
        assert_eq!(r.position("E"), Some(4.0));
        assert_eq!(r.position("Z"), None);
    }

    #[test]
    fn compare_uses_groups() {
        let r = rank(&[&["A"], &["B", "C"]]);
        assert_eq!(r.compare("A", "B"), Some(Ordering::Less));
        assert_eq!(r.compare("C", "B"), Some(Ordering::Equal));
        assert_eq!(r.compare("C", "A"), Some(Ordering::Greater));
        assert_eq!(r.compare("C", "X"), None);
    }

    #[test]
    fn restriction_keeps_relative_order() {
        let r = rank(&[&["A"], &["B", "C"], &["D"]]);
        let restricted = r.restricted_to(&names(&["D", "B"]));
        assert_eq!(restricted, rank(&[&["B"], &["D"]]));
    }

    #[test]
    fn splice_replaces_one_group() {
        let mut r = rank(&[&["A"], &["B", "C"], &["D"]]);
        r.splice_group(1, vec![names(&["C"]), names(&["B"])]);
        assert_eq!(r, rank(&[&["A"], &["C"], &["B"], &["D"]]));
        assert!(r.is_strict());

        let mut r = rank(&[&["A", "B", "C"]]);
        r.splice_group(0, vec![names(&["C", "A"]), vec![], names(&["B"])]);
        assert_eq!(r.groups(), &[names(&["A", "C"]), names(&["B"])]);
    }

    #[test]
    fn reports_tie_groups() {
        let r = rank(&[&["A"], &["B", "C"], &["D"]]);
        let ties: Vec<usize> = r.tie_groups().map(|(i, _)| i).collect();
        assert_eq!(ties, vec![1]);
        assert_eq!(r.len(), 4);
        assert_eq!(r.to_string(), "A > B = C > D");
    }
}
