//! Skill mastery classification.
//!
//! Text is scored against three disjoint vocabulary tiers. The decision rule
//! is evaluated in a fixed priority order:
//!
//! 1. advanced if there are at least two advanced-tier hits;
//! 2. intermediate if there are at least two intermediate-tier hits, or at
//!    least one advanced-tier hit and more than one language mentioned;
//! 3. beginner if there is at least one beginner-tier hit;
//! 4. intermediate otherwise.
//!
//! Tier terms are matched in a single longest-first pass, so
//! "machine learning" counts once as advanced and never as "learning".

use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::candidate::{CandidateValue, FieldName};
use crate::error::ReconcileResult;
use crate::extract::{compile_error, FieldExtractor, LanguageExtractor};
use crate::lexicon::{self, Tier, MASTERY_TERMS};
use crate::text::normalize_phrase;

/// Mastery label. Always renderable; there is no "unknown" level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillMastery {
    /// Beginner-tier vocabulary dominates.
    Beginner,
    /// Neutral default.
    #[default]
    Intermediate,
    /// Strong advanced-tier evidence.
    Advanced,
}

impl fmt::Display for SkillMastery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Tier hit counts for a body of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryAssessment {
    /// Advanced-tier occurrences.
    pub advanced_hits: u32,
    /// Intermediate-tier occurrences.
    pub intermediate_hits: u32,
    /// Beginner-tier occurrences.
    pub beginner_hits: u32,
    /// Distinct languages mentioned.
    pub languages: BTreeSet<String>,
    /// Distinct advanced-tier terms that matched.
    pub advanced_terms: BTreeSet<String>,
    /// Distinct beginner-tier terms that matched.
    pub beginner_terms: BTreeSet<String>,
}

impl MasteryAssessment {
    /// Applies the decision rule.
    #[must_use]
    pub fn level(&self) -> SkillMastery {
        if self.advanced_hits >= 2 {
            SkillMastery::Advanced
        } else if self.intermediate_hits >= 2
            || (self.advanced_hits >= 1 && self.languages.len() > 1)
        {
            SkillMastery::Intermediate
        } else if self.beginner_hits >= 1 {
            SkillMastery::Beginner
        } else {
            SkillMastery::Intermediate
        }
    }

    /// Adds another assessment's counts and terms into this one.
    pub fn absorb(&mut self, other: &Self) {
        self.advanced_hits = self.advanced_hits.saturating_add(other.advanced_hits);
        self.intermediate_hits = self.intermediate_hits.saturating_add(other.intermediate_hits);
        self.beginner_hits = self.beginner_hits.saturating_add(other.beginner_hits);
        self.languages.extend(other.languages.iter().cloned());
        self.advanced_terms.extend(other.advanced_terms.iter().cloned());
        self.beginner_terms.extend(other.beginner_terms.iter().cloned());
    }

    /// Combines several assessments, as if their texts were concatenated.
    pub fn combine<'a, I>(assessments: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut total = Self::default();
        for a in assessments {
            total.absorb(a);
        }
        total
    }

    /// True when advanced and beginner vocabulary both appear.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.advanced_hits > 0 && self.beginner_hits > 0
    }
}

/// Scores text against the mastery tiers.
#[derive(Debug, Clone)]
pub struct MasteryClassifier {
    tiers: Regex,
    languages: LanguageExtractor,
}

impl MasteryClassifier {
    /// Compiles the tier vocabulary.
    pub fn new() -> ReconcileResult<Self> {
        let tiers = lexicon::term_matcher(MASTERY_TERMS.iter().map(|(t, _)| *t))
            .map_err(|e| compile_error("mastery", &e))?;
        Ok(Self {
            tiers,
            languages: LanguageExtractor::new()?,
        })
    }

    /// Counts tier hits and languages in `text`.
    #[must_use]
    pub fn assess(&self, text: &str) -> MasteryAssessment {
        let mut out = MasteryAssessment {
            languages: self.languages.languages(text).into_iter().collect(),
            ..MasteryAssessment::default()
        };
        for m in self.tiers.captures_iter(text).filter_map(|c| c.get(1)) {
            let term = normalize_phrase(m.as_str());
            let Some((_, tier)) = MASTERY_TERMS.iter().find(|(t, _)| *t == term) else {
                continue;
            };
            match tier {
                Tier::Advanced => {
                    out.advanced_hits += 1;
                    out.advanced_terms.insert(term);
                }
                Tier::Intermediate => out.intermediate_hits += 1,
                Tier::Beginner => {
                    out.beginner_hits += 1;
                    out.beginner_terms.insert(term);
                }
            }
        }
        out
    }

    /// Classifies `text` into a mastery label.
    #[must_use]
    pub fn classify(&self, text: &str) -> SkillMastery {
        self.assess(text).level()
    }
}

impl FieldExtractor for MasteryClassifier {
    fn field(&self) -> FieldName {
        FieldName::SkillMastery
    }

    fn extract(&self, text: &str) -> Vec<CandidateValue> {
        vec![CandidateValue::Mastery(self.assess(text))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> MasteryClassifier {
        MasteryClassifier::new().unwrap()
    }

    #[test]
    fn two_advanced_hits_is_advanced() {
        let c = classifier();
        assert_eq!(c.classify("I designed the architecture and tuned every algorithm"), SkillMastery::Advanced);
    }

    #[test]
    fn advanced_dominates_beginner() {
        let c = classifier();
        let text = "I've mastered Python. Still learning. MACHINE LEARNING!";
        let a = c.assess(text);
        assert_eq!(a.advanced_hits, 2);
        assert_eq!(a.beginner_hits, 1);
        assert_eq!(a.level(), SkillMastery::Advanced);
        assert!(a.is_mixed());
    }

    #[test]
    fn machine_learning_does_not_count_as_learning() {
        let a = classifier().assess("machine learning and deep learning");
        assert_eq!(a.beginner_hits, 0);
        assert_eq!(a.advanced_hits, 2);
    }

    #[test]
    fn intermediate_from_tooling_terms() {
        assert_eq!(classifier().classify("I use a framework and git daily"), SkillMastery::Intermediate);
    }

    #[test]
    fn one_advanced_plus_multiple_languages_is_intermediate() {
        let a = classifier().assess("scalability work in Java and Python, still learning");
        assert_eq!(a.advanced_hits, 1);
        assert_eq!(a.languages.len(), 2);
        assert_eq!(a.level(), SkillMastery::Intermediate);
    }

    #[test]
    fn beginner_wording() {
        assert_eq!(classifier().classify("I just started with a tutorial"), SkillMastery::Beginner);
    }

    #[test]
    fn empty_text_defaults_to_intermediate() {
        assert_eq!(classifier().classify(""), SkillMastery::Intermediate);
        assert_eq!(SkillMastery::default(), SkillMastery::Intermediate);
    }

    #[test]
    fn combine_matches_concatenated_text() {
        let c = classifier();
        let a = c.assess("expert in distributed systems");
        let b = c.assess("I am a beginner at Rust");
        let combined = MasteryAssessment::combine([&a, &b]);
        assert_eq!(combined, c.assess("expert in distributed systems. I am a beginner at Rust"));
    }

    #[test]
    fn mastery_label_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&SkillMastery::Advanced).unwrap(), "\"advanced\"");
        assert_eq!(format!("{}", SkillMastery::Beginner), "beginner");
    }
}
