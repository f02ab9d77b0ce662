//! Contradiction detection across sessions.

use std::collections::BTreeSet;

use crate::candidate::{CandidateSet, RoleMode};
use crate::config::{ClaimStyle, ReconcileConfig};
use crate::deception::{DeceptionPattern, LieType, PatternLedger};
use crate::mastery::MasteryAssessment;

/// Categorical claim pair for leadership contradictions.
pub const LEADERSHIP_CLAIMS: [&str; 2] = ["led a team", "worked alone"];
/// Categorical claim pair for skill exaggeration.
pub const SKILL_CLAIMS: [&str; 2] = ["advanced skills", "beginner level"];

/// Finds mutually inconsistent claims in an accumulated candidate set.
///
/// Patterns come out in fixed category order with at most one entry per
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContradictionDetector {
    inflation_threshold: u32,
    claim_style: ClaimStyle,
}

impl Default for ContradictionDetector {
    fn default() -> Self {
        Self::new(&ReconcileConfig::default())
    }
}

impl ContradictionDetector {
    /// Creates a detector from the relevant configuration knobs.
    #[must_use]
    pub fn new(config: &ReconcileConfig) -> Self {
        Self {
            inflation_threshold: config.inflation_threshold.max(1),
            claim_style: config.claim_style,
        }
    }

    /// Runs every category check.
    #[must_use]
    pub fn detect(&self, candidates: &CandidateSet) -> Vec<DeceptionPattern> {
        let mut ledger = PatternLedger::new();
        self.check_experience(candidates, &mut ledger);
        self.check_leadership(candidates, &mut ledger);
        self.check_skills(candidates, &mut ledger);
        ledger.into_patterns()
    }

    fn check_experience(&self, candidates: &CandidateSet, ledger: &mut PatternLedger) {
        let months: BTreeSet<u32> = candidates.durations().map(|d| d.months()).collect();
        let (Some(&min), Some(&max)) = (months.first(), months.last()) else {
            return;
        };
        if months.len() < 2 || !self.spread_exceeds(min, max) {
            return;
        }
        tracing::trace!(min, max, "experience spread exceeds threshold");
        ledger.record(
            LieType::ExperienceInflation,
            candidates.durations().map(|d| d.phrase()),
        );
    }

    /// Spread is measured in years when the largest claim reaches a year.
    fn spread_exceeds(&self, min: u32, max: u32) -> bool {
        let spread = max - min;
        if max >= 12 {
            f64::from(spread) / 12.0 >= f64::from(self.inflation_threshold)
        } else {
            spread >= self.inflation_threshold
        }
    }

    fn check_leadership(&self, candidates: &CandidateSet, ledger: &mut PatternLedger) {
        let solitary: Vec<&str> = candidates
            .roles()
            .filter(|r| r.mode == RoleMode::Solitary)
            .map(|r| r.phrase.as_str())
            .collect();
        if solitary.is_empty() || candidates.leadership().next().is_none() {
            return;
        }
        match self.claim_style {
            ClaimStyle::Categorical => ledger.record(LieType::LeadershipContradiction, LEADERSHIP_CLAIMS),
            ClaimStyle::Verbatim => ledger.record(
                LieType::LeadershipContradiction,
                candidates
                    .leadership()
                    .map(|l| l.phrase.as_str())
                    .chain(solitary),
            ),
        }
    }

    fn check_skills(&self, candidates: &CandidateSet, ledger: &mut PatternLedger) {
        let combined = MasteryAssessment::combine(candidates.mastery());
        if !combined.is_mixed() {
            return;
        }
        match self.claim_style {
            ClaimStyle::Categorical => ledger.record(LieType::SkillExaggeration, SKILL_CLAIMS),
            ClaimStyle::Verbatim => ledger.record(
                LieType::SkillExaggeration,
                combined
                    .advanced_terms
                    .iter()
                    .chain(combined.beginner_terms.iter())
                    .map(String::as_str),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{CandidateValue, Duration, LeadershipClaim, RoleClaim};

    fn durations(values: &[Duration]) -> CandidateSet {
        let mut set = CandidateSet::new();
        set.extend_from_session(1, values.iter().cloned().map(CandidateValue::Duration));
        set
    }

    fn leadership_and_solo() -> CandidateSet {
        let mut set = CandidateSet::new();
        set.extend_from_session(
            1,
            [CandidateValue::Leadership(LeadershipClaim {
                phrase: "led a team of 5".to_string(),
                team_size: Some(5),
            })],
        );
        set.extend_from_session(
            2,
            [CandidateValue::Role(RoleClaim {
                mode: RoleMode::Solitary,
                phrase: "i work alone".to_string(),
            })],
        );
        set
    }

    fn mixed_mastery() -> CandidateSet {
        let mut set = CandidateSet::new();
        let mut advanced = MasteryAssessment::default();
        advanced.advanced_hits = 1;
        advanced.advanced_terms.insert("architected".to_string());
        let mut beginner = MasteryAssessment::default();
        beginner.beginner_hits = 1;
        beginner.beginner_terms.insert("learning".to_string());
        set.extend_from_session(1, [CandidateValue::Mastery(advanced)]);
        set.extend_from_session(2, [CandidateValue::Mastery(beginner)]);
        set
    }

    #[test]
    fn test_inflation_in_years() {
        let detector = ContradictionDetector::default();
        let patterns = detector.detect(&durations(&[Duration::years(6), Duration::years(3)]));
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].lie_type, LieType::ExperienceInflation);
        assert_eq!(patterns[0].contradictory_claims, vec!["3 years", "6 years"]);
    }

    #[test]
    fn test_small_spread_is_rounding() {
        let detector = ContradictionDetector::default();
        assert!(detector
            .detect(&durations(&[Duration::years(3), Duration::years(4)]))
            .is_empty());
        assert!(detector
            .detect(&durations(&[Duration::months_of(18), Duration::years(2)]))
            .is_empty());
    }

    #[test]
    fn test_inflation_in_months_below_a_year() {
        let detector = ContradictionDetector::default();
        assert_eq!(
            detector
                .detect(&durations(&[Duration::months_of(8), Duration::months_of(2)]))
                .len(),
            1
        );
        assert!(detector
            .detect(&durations(&[Duration::months_of(8), Duration::months_of(7)]))
            .is_empty());
    }

    #[test]
    fn test_equal_months_are_not_distinct() {
        let detector = ContradictionDetector::default();
        assert!(detector
            .detect(&durations(&[Duration::years(1), Duration::months_of(12)]))
            .is_empty());
    }

    #[test]
    fn test_threshold_is_configurable() {
        let detector = ContradictionDetector::new(&ReconcileConfig::default().with_inflation_threshold(4));
        assert!(detector
            .detect(&durations(&[Duration::years(6), Duration::years(3)]))
            .is_empty());
    }

    #[test]
    fn test_leadership_contradiction_categorical() {
        let patterns = ContradictionDetector::default().detect(&leadership_and_solo());
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].lie_type, LieType::LeadershipContradiction);
        assert_eq!(patterns[0].contradictory_claims, vec!["led a team", "worked alone"]);
    }

    #[test]
    fn test_leadership_contradiction_verbatim() {
        let config = ReconcileConfig::default().with_claim_style(ClaimStyle::Verbatim);
        let patterns = ContradictionDetector::new(&config).detect(&leadership_and_solo());
        assert_eq!(patterns[0].contradictory_claims, vec!["i work alone", "led a team of 5"]);
    }

    #[test]
    fn test_collaborative_roles_do_not_contradict_leadership() {
        let mut set = CandidateSet::new();
        set.extend_from_session(
            1,
            [
                CandidateValue::Leadership(LeadershipClaim {
                    phrase: "mentored".to_string(),
                    team_size: None,
                }),
                CandidateValue::Role(RoleClaim {
                    mode: RoleMode::Collaborative,
                    phrase: "my team".to_string(),
                }),
            ],
        );
        assert!(ContradictionDetector::default().detect(&set).is_empty());
    }

    #[test]
    fn test_skill_exaggeration_across_sessions() {
        let patterns = ContradictionDetector::default().detect(&mixed_mastery());
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].contradictory_claims, vec!["advanced skills", "beginner level"]);

        let config = ReconcileConfig::default().with_claim_style(ClaimStyle::Verbatim);
        let patterns = ContradictionDetector::new(&config).detect(&mixed_mastery());
        assert_eq!(patterns[0].contradictory_claims, vec!["architected", "learning"]);
    }

    #[test]
    fn test_patterns_in_fixed_order() {
        let mut set = mixed_mastery();
        for c in leadership_and_solo().for_field(crate::candidate::FieldName::LeadershipClaims) {
            set.push(c.clone());
        }
        for c in leadership_and_solo().for_field(crate::candidate::FieldName::TeamExperience) {
            set.push(c.clone());
        }
        set.extend_from_session(3, [CandidateValue::Duration(Duration::years(10))]);
        set.extend_from_session(4, [CandidateValue::Duration(Duration::years(1))]);
        let order: Vec<LieType> = ContradictionDetector::default()
            .detect(&set)
            .iter()
            .map(|p| p.lie_type)
            .collect();
        assert_eq!(
            order,
            vec![
                LieType::ExperienceInflation,
                LieType::LeadershipContradiction,
                LieType::SkillExaggeration
            ]
        );
    }
}
