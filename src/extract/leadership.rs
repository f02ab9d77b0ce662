use std::ops::Range;

use regex::Regex;

use crate::candidate::{CandidateValue, FieldName, LeadershipClaim};
use crate::error::ReconcileResult;
use crate::lexicon::{self, COUNT_PATTERN};
use crate::text::normalize_phrase;

use super::{compile_error, FieldExtractor};

const LEAD_VERBS: &str = r"led|lead|leading|managed|manage|managing|supervised|supervising|headed|heading|ran|running|mentored|mentoring";

const MEMBER_NOUNS: &str = r"developers?|engineers?|people|members?|devs?|programmers?|interns?|juniors?|reports?";

const MENTIONS: &[&str] = &[
    "team lead",
    "tech lead",
    "team leader",
    "lead developer",
    "lead engineer",
    "project manager",
    "engineering manager",
    "in charge of",
    "led",
    "managed",
    "mentored",
    "supervised",
    "headed",
];

/// Extracts leadership wording, capturing a team size when one is stated.
#[derive(Debug, Clone)]
pub struct LeadershipExtractor {
    team_of: Regex,
    headcount: Regex,
    mention: Regex,
}

impl LeadershipExtractor {
    /// Compiles the leadership rules.
    pub fn new() -> ReconcileResult<Self> {
        let team_of = Regex::new(&format!(
            r"(?i)\b(?:{LEAD_VERBS})\s+(?:(?:a|an|the|my|our)\s+)?(?:(?:small|large|big|whole|dev|development|engineering)\s+)?(?:team|group|squad|crew)\s+of\s+({COUNT_PATTERN})\b"
        ))
        .map_err(|e| compile_error("leadership", &e))?;
        let headcount = Regex::new(&format!(
            r"(?i)\b(?:{LEAD_VERBS})\s+({COUNT_PATTERN})\s+(?:other\s+)?(?:{MEMBER_NOUNS})\b"
        ))
        .map_err(|e| compile_error("leadership", &e))?;
        let mention = Regex::new(&format!(r"(?i)\b(?:{})\b", lexicon::alternation(MENTIONS.iter().copied())))
            .map_err(|e| compile_error("leadership", &e))?;
        Ok(Self {
            team_of,
            headcount,
            mention,
        })
    }

    fn sized_claims(&self, text: &str) -> Vec<(Range<usize>, LeadershipClaim)> {
        let mut out = Vec::new();
        for re in [&self.team_of, &self.headcount] {
            for caps in re.captures_iter(text) {
                let (Some(whole), Some(count)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let Some(size) = lexicon::parse_count(count.as_str()) else {
                    tracing::trace!(matched = whole.as_str(), "discarding unparsable team size");
                    continue;
                };
                out.push((
                    whole.range(),
                    LeadershipClaim {
                        phrase: normalize_phrase(whole.as_str()),
                        team_size: Some(size),
                    },
                ));
            }
        }
        out
    }
}

impl FieldExtractor for LeadershipExtractor {
    fn field(&self) -> FieldName {
        FieldName::LeadershipClaims
    }

    fn extract(&self, text: &str) -> Vec<CandidateValue> {
        let mut claims = self.sized_claims(text);
        let sized_spans: Vec<Range<usize>> = claims.iter().map(|(r, _)| r.clone()).collect();

        for m in self.mention.find_iter(text) {
            let covered = sized_spans.iter().any(|r| m.start() < r.end && r.start < m.end());
            if covered {
                continue;
            }
            claims.push((
                m.range(),
                LeadershipClaim {
                    phrase: normalize_phrase(m.as_str()),
                    team_size: None,
                },
            ));
        }

        claims.sort_by_key(|(r, _)| r.start);
        claims
            .into_iter()
            .map(|(_, claim)| CandidateValue::Leadership(claim))
            .collect()
    }
}
