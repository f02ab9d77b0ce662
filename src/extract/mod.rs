//! Field extractors.
//!
//! Each extractor scans one session's text for one profile field and returns
//! zero or more candidate values. Extraction is pure and never fails: no
//! match yields an empty vector, and numbers that cannot be parsed are
//! dropped at the match site.

mod experience;
mod language;
mod leadership;
mod skills;
mod team;

pub use experience::ExperienceExtractor;
pub use language::LanguageExtractor;
pub use leadership::LeadershipExtractor;
pub use skills::SkillExtractor;
pub use team::TeamRoleExtractor;

use crate::candidate::{CandidateValue, FieldName};
use crate::config::ReconcileConfig;
use crate::error::{ReconcileError, ReconcileResult};
use crate::mastery::MasteryClassifier;

/// A pattern matcher for a single profile field.
pub trait FieldExtractor: Send + Sync {
    /// The field this extractor proposes candidates for.
    fn field(&self) -> FieldName;

    /// Scans `text` and returns candidate values in text order.
    fn extract(&self, text: &str) -> Vec<CandidateValue>;
}

pub(crate) fn compile_error(what: &str, err: &regex::Error) -> ReconcileError {
    ReconcileError::internal(format!("compile {what} rules: {err}"))
}

/// The full extractor set, one per profile field.
#[derive(Debug, Clone)]
pub struct Extractors {
    experience: ExperienceExtractor,
    language: LanguageExtractor,
    mastery: MasteryClassifier,
    leadership: LeadershipExtractor,
    team: TeamRoleExtractor,
    skills: SkillExtractor,
}

impl Extractors {
    /// Compiles every rule table.
    pub fn new(config: &ReconcileConfig) -> ReconcileResult<Self> {
        Ok(Self {
            experience: ExperienceExtractor::new(config.require_experience_context)?,
            language: LanguageExtractor::new()?,
            mastery: MasteryClassifier::new()?,
            leadership: LeadershipExtractor::new()?,
            team: TeamRoleExtractor::new()?,
            skills: SkillExtractor::new()?,
        })
    }

    fn for_field(&self, field: FieldName) -> &dyn FieldExtractor {
        match field {
            FieldName::ProgrammingExperience => &self.experience,
            FieldName::ProgrammingLanguage => &self.language,
            FieldName::SkillMastery => &self.mastery,
            FieldName::LeadershipClaims => &self.leadership,
            FieldName::TeamExperience => &self.team,
            FieldName::Skills => &self.skills,
        }
    }

    /// Runs the extractor for `field` over `text`.
    #[must_use]
    pub fn extract(&self, field: FieldName, text: &str) -> Vec<CandidateValue> {
        self.for_field(field).extract(text)
    }

    /// Runs every extractor over `text`, in profile field order.
    #[must_use]
    pub fn extract_all(&self, text: &str) -> Vec<CandidateValue> {
        FieldName::ALL
            .iter()
            .flat_map(|field| self.extract(*field, text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractors() -> Extractors {
        Extractors::new(&ReconcileConfig::default()).unwrap()
    }

    #[test]
    fn extract_dispatches_by_field() {
        let ex = extractors();
        let values = ex.extract(FieldName::ProgrammingLanguage, "I write Rust and Python");
        assert!(values.iter().all(|v| v.field() == FieldName::ProgrammingLanguage));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn extract_all_covers_every_field_with_matches() {
        let ex = extractors();
        let values = ex.extract_all("I led a team of 5 using Docker for 3 years of Python, but I work alone.");
        let fields: Vec<FieldName> = values.iter().map(CandidateValue::field).collect();
        for field in FieldName::ALL {
            assert!(fields.contains(&field), "missing candidates for {field}");
        }
    }

    #[test]
    fn empty_text_only_yields_mastery_assessment() {
        let ex = extractors();
        let values = ex.extract_all("");
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].field(), FieldName::SkillMastery);
    }
}
