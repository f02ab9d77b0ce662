//! Deception patterns.
//!
//! Contradictions between sessions are recorded as explicit objects rather
//! than resolved away. Each category appears at most once per run.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a detected contradiction.
///
/// Variant order is the fixed output order of patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LieType {
    /// Claimed durations spread too far apart to be rounding.
    ExperienceInflation,
    /// Leadership claims alongside solitary-work claims.
    LeadershipContradiction,
    /// Advanced and beginner mastery vocabulary together.
    SkillExaggeration,
}

impl fmt::Display for LieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExperienceInflation => write!(f, "experience_inflation"),
            Self::LeadershipContradiction => write!(f, "leadership_contradiction"),
            Self::SkillExaggeration => write!(f, "skill_exaggeration"),
        }
    }
}

/// A structured record of mutually inconsistent claims.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeceptionPattern {
    /// Contradiction category.
    pub lie_type: LieType,
    /// Conflicting claims, deduplicated and lexically sorted.
    pub contradictory_claims: Vec<String>,
}

impl DeceptionPattern {
    /// Creates a pattern, normalizing its claims to a sorted, deduplicated list.
    #[must_use]
    pub fn new<I, S>(lie_type: LieType, claims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let claims: BTreeSet<String> = claims.into_iter().map(Into::into).collect();
        Self {
            lie_type,
            contradictory_claims: claims.into_iter().collect(),
        }
    }
}

/// Accumulates evidence per category, merging repeats into one entry.
#[derive(Debug, Clone, Default)]
pub struct PatternLedger {
    entries: BTreeMap<LieType, BTreeSet<String>>,
}

impl PatternLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records claims under `lie_type`, union-merging with earlier evidence.
    pub fn record<I, S>(&mut self, lie_type: LieType, claims: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(lie_type)
            .or_default()
            .extend(claims.into_iter().map(Into::into));
    }

    /// Finishes the ledger into patterns in fixed category order.
    #[must_use]
    pub fn into_patterns(self) -> Vec<DeceptionPattern> {
        self.entries
            .into_iter()
            .map(|(lie_type, claims)| DeceptionPattern {
                lie_type,
                contradictory_claims: claims.into_iter().collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_claims_are_sorted_and_deduplicated() {
        let p = DeceptionPattern::new(LieType::ExperienceInflation, ["6 years", "3 years", "6 years"]);
        assert_eq!(p.contradictory_claims, vec!["3 years", "6 years"]);
    }

    #[test]
    fn test_ledger_merges_repeated_categories() {
        let mut ledger = PatternLedger::new();
        ledger.record(LieType::LeadershipContradiction, ["led a team", "worked alone"]);
        ledger.record(LieType::LeadershipContradiction, ["worked alone", "led a team"]);
        let patterns = ledger.into_patterns();
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].contradictory_claims, vec!["led a team", "worked alone"]);
    }

    #[test]
    fn test_ledger_orders_by_category() {
        let mut ledger = PatternLedger::new();
        ledger.record(LieType::SkillExaggeration, ["advanced skills"]);
        ledger.record(LieType::ExperienceInflation, ["3 years"]);
        ledger.record(LieType::LeadershipContradiction, ["led a team"]);
        let order: Vec<LieType> = ledger.into_patterns().iter().map(|p| p.lie_type).collect();
        assert_eq!(
            order,
            vec![
                LieType::ExperienceInflation,
                LieType::LeadershipContradiction,
                LieType::SkillExaggeration
            ]
        );
    }

    #[test]
    fn test_lie_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LieType::ExperienceInflation).unwrap(),
            "\"experience_inflation\""
        );
        assert_eq!(format!("{}", LieType::SkillExaggeration), "skill_exaggeration");
    }

    #[test]
    fn test_pattern_serialization() {
        let p = DeceptionPattern::new(LieType::SkillExaggeration, ["advanced skills", "beginner level"]);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"lie_type\":\"skill_exaggeration\""));
        let decoded: DeceptionPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(p, decoded);
    }
}
