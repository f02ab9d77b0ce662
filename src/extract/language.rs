use regex::Regex;

use crate::candidate::{CandidateValue, FieldName};
use crate::error::ReconcileResult;
use crate::lexicon::{self, GO_PATTERN, LANGUAGES};

use super::{compile_error, FieldExtractor};

/// Extracts programming language mentions, canonicalized and deduplicated
/// in first-mention order.
#[derive(Debug, Clone)]
pub struct LanguageExtractor {
    terms: Regex,
    go: Regex,
}

impl LanguageExtractor {
    /// Compiles the language vocabulary.
    pub fn new() -> ReconcileResult<Self> {
        let terms = lexicon::term_matcher(LANGUAGES.iter().map(|(surface, _)| *surface))
            .map_err(|e| compile_error("language", &e))?;
        let go = Regex::new(GO_PATTERN).map_err(|e| compile_error("language", &e))?;
        Ok(Self { terms, go })
    }

    /// Distinct canonical languages in `text`, in first-mention order.
    #[must_use]
    pub fn languages(&self, text: &str) -> Vec<String> {
        let mut hits: Vec<(usize, &'static str)> = self
            .terms
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| lexicon::canonical(LANGUAGES, m.as_str()).map(|c| (m.start(), c)))
            .collect();
        hits.extend(self.go.find_iter(text).map(|m| (m.start(), "go")));
        hits.sort_by_key(|(pos, _)| *pos);

        let mut out: Vec<String> = Vec::new();
        for (_, lang) in hits {
            if !out.iter().any(|l| l == lang) {
                out.push(lang.to_string());
            }
        }
        out
    }
}

impl FieldExtractor for LanguageExtractor {
    fn field(&self) -> FieldName {
        FieldName::ProgrammingLanguage
    }

    fn extract(&self, text: &str) -> Vec<CandidateValue> {
        self.languages(text)
            .into_iter()
            .map(CandidateValue::Language)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_languages_in_mention_order() {
        let ex = LanguageExtractor::new().unwrap();
        assert_eq!(
            ex.languages("Mostly Java, some JavaScript, and python. Java again."),
            vec!["java", "javascript", "python"]
        );
    }

    #[test]
    fn handles_symbols_and_aliases() {
        let ex = LanguageExtractor::new().unwrap();
        assert_eq!(ex.languages("C++ and C# plus a bit of JS"), vec!["c++", "c#", "javascript"]);
        assert_eq!(ex.languages("cpp daily"), vec!["c++"]);
    }

    #[test]
    fn bare_go_needs_programming_context() {
        let ex = LanguageExtractor::new().unwrap();
        assert!(ex.languages("I go to the office and let go of worries").is_empty());
        assert_eq!(ex.languages("I wrote services in Go and Golang"), vec!["go"]);
        assert_eq!(ex.languages("go developer for years"), vec!["go"]);
    }

    #[test]
    fn whole_words_only() {
        let ex = LanguageExtractor::new().unwrap();
        assert!(ex.languages("trusty perlite dartboard").is_empty());
    }
}
