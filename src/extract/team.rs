use regex::Regex;

use crate::candidate::{CandidateValue, FieldName, RoleClaim, RoleMode};
use crate::error::ReconcileResult;
use crate::text::normalize_phrase;

use super::{compile_error, FieldExtractor};

const COLLABORATIVE: &str = r"(?i)\b(?:team\s*work|teammates?|teams?|collaborat(?:e|ed|es|ing|ion|ively)|mentor(?:ed|ing|s)?|pair\s+program(?:ming|med)|colleagues?)\b";

const SOLITARY: &str = r"(?i)\b(?:alone|solo|by\s+myself|on\s+my\s+own|independently|individual\s+contributor|single[\s-]?handedly)\b";

/// Extracts collaborative versus solitary working-mode wording.
///
/// Both modes may match in the same session; that is evidence, not an
/// extraction error.
#[derive(Debug, Clone)]
pub struct TeamRoleExtractor {
    collaborative: Regex,
    solitary: Regex,
}

impl TeamRoleExtractor {
    /// Compiles the role rules.
    pub fn new() -> ReconcileResult<Self> {
        Ok(Self {
            collaborative: Regex::new(COLLABORATIVE).map_err(|e| compile_error("team role", &e))?,
            solitary: Regex::new(SOLITARY).map_err(|e| compile_error("team role", &e))?,
        })
    }
}

impl FieldExtractor for TeamRoleExtractor {
    fn field(&self) -> FieldName {
        FieldName::TeamExperience
    }

    fn extract(&self, text: &str) -> Vec<CandidateValue> {
        let mut hits: Vec<(usize, RoleClaim)> = Vec::new();
        for (mode, re) in [
            (RoleMode::Collaborative, &self.collaborative),
            (RoleMode::Solitary, &self.solitary),
        ] {
            for m in re.find_iter(text) {
                let claim = RoleClaim {
                    mode,
                    phrase: normalize_phrase(m.as_str()),
                };
                if !hits.iter().any(|(_, c)| *c == claim) {
                    hits.push((m.start(), claim));
                }
            }
        }
        hits.sort_by_key(|(pos, _)| *pos);
        hits.into_iter().map(|(_, c)| CandidateValue::Role(c)).collect()
    }
}
