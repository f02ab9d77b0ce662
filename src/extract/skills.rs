use regex::Regex;

use crate::candidate::{CandidateValue, FieldName};
use crate::error::ReconcileResult;
use crate::lexicon::{self, SKILLS};

use super::{compile_error, FieldExtractor};

/// Extracts technical skill terms. Each canonical term is emitted once per
/// session, at its first mention.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    terms: Regex,
}

impl SkillExtractor {
    /// Compiles the skill vocabulary.
    pub fn new() -> ReconcileResult<Self> {
        let terms = lexicon::term_matcher(SKILLS.iter().map(|(surface, _)| *surface))
            .map_err(|e| compile_error("skill", &e))?;
        Ok(Self { terms })
    }
}

impl FieldExtractor for SkillExtractor {
    fn field(&self) -> FieldName {
        FieldName::Skills
    }

    fn extract(&self, text: &str) -> Vec<CandidateValue> {
        let mut seen: Vec<&'static str> = Vec::new();
        for m in self.terms.captures_iter(text).filter_map(|caps| caps.get(1)) {
            if let Some(term) = lexicon::canonical(SKILLS, m.as_str()) {
                if !seen.contains(&term) {
                    seen.push(term);
                }
            }
        }
        seen.into_iter()
            .map(|s| CandidateValue::Skill(s.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(text: &str) -> Vec<String> {
        SkillExtractor::new()
            .unwrap()
            .extract(text)
            .into_iter()
            .filter_map(|v| match v {
                CandidateValue::Skill(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn multi_word_terms_win_over_prefixes() {
        assert_eq!(skills("React Native apps and plain React"), vec!["react native", "react"]);
    }

    #[test]
    fn aliases_collapse_to_one_canonical_term() {
        assert_eq!(skills("ML, machine learning and more ML"), vec!["machine learning"]);
        assert_eq!(skills("k8s on AWS with Postgres"), vec!["kubernetes", "aws", "postgresql"]);
    }

    #[test]
    fn punctuation_terms_match() {
        assert_eq!(skills("CI/CD pipelines for node.js"), vec!["ci/cd", "node.js"]);
    }

    #[test]
    fn spring_needs_its_framework_name() {
        assert!(skills("I moved teams last spring").is_empty());
        assert_eq!(skills("services on Spring Boot"), vec!["spring"]);
        assert_eq!(skills("the Spring Framework, later Spring Boot"), vec!["spring"]);
    }

    #[test]
    fn no_partial_word_matches() {
        assert!(skills("digital gitter mail").is_empty());
    }
}
