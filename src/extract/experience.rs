use regex::{Captures, Regex};

use crate::candidate::{CandidateValue, Duration, FieldName};
use crate::error::ReconcileResult;
use crate::lexicon::{self, AMOUNT_PATTERN, COUNT_PATTERN, EXPERIENCE_CONTEXT, LANGUAGES};

use super::{compile_error, FieldExtractor};

/// Extracts `<number> year(s)` / `<number> month(s)` phrases, including
/// decimal amounts (`1.5 years`) and compounds (`5 years and 6 months`).
#[derive(Debug, Clone)]
pub struct ExperienceExtractor {
    duration: Regex,
    context: Regex,
    require_context: bool,
}

impl ExperienceExtractor {
    /// Compiles the duration rules. With `require_context`, durations without
    /// a context word in the same clause are discarded.
    pub fn new(require_context: bool) -> ReconcileResult<Self> {
        // The compound branch is listed first so `1 year 6 months` is one match.
        let duration = Regex::new(&format!(
            r"(?i)\b(?:(?P<years>{COUNT_PATTERN})\s*(?:years?|yrs?)\s*,?\s*(?:and\s+)?(?P<months>{COUNT_PATTERN})\s*(?:months?|mos?)|(?P<amount>{AMOUNT_PATTERN})\s*(?:\+\s*)?(?P<unit>years?|yrs?|months?|mos?))\b"
        ))
        .map_err(|e| compile_error("experience", &e))?;

        let context_terms = EXPERIENCE_CONTEXT
            .iter()
            .copied()
            .chain(LANGUAGES.iter().map(|(surface, _)| *surface));
        let context = lexicon::term_matcher(context_terms).map_err(|e| compile_error("experience context", &e))?;

        Ok(Self {
            duration,
            context,
            require_context,
        })
    }

    fn clause_context(&self, text: &str, start: usize, end: usize) -> Option<String> {
        let is_stop = |c: char| matches!(c, '.' | '!' | '?' | ';');
        let from = text[..start].rfind(is_stop).map_or(0, |i| i + 1);
        let to = text[end..].find(is_stop).map_or(text.len(), |i| end + i);
        self.context
            .captures(&text[from..to])
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_lowercase())
    }
}

/// True when the match starts right after `<digit>.` or `<digit>,`, as in the
/// tail of a version string like `1.2.5 years`.
fn continues_number(text: &str, start: usize) -> bool {
    let mut before = text[..start].chars().rev();
    matches!(before.next(), Some('.' | ','))
        && before.next().is_some_and(|c| c.is_ascii_digit())
}

/// Converts one match into a duration. `None` when a count does not parse or
/// the total overflows.
fn duration_from(caps: &Captures<'_>) -> Option<Duration> {
    if let (Some(years), Some(months)) = (caps.name("years"), caps.name("months")) {
        let years = lexicon::parse_count(years.as_str())?;
        let months = lexicon::parse_count(months.as_str())?;
        let total = years.checked_mul(12)?.checked_add(months)?;
        return Some(Duration::years_and_months(total));
    }

    let amount = caps.name("amount")?.as_str();
    let unit = caps.name("unit")?.as_str();
    if unit.to_ascii_lowercase().starts_with('y') {
        match lexicon::parse_amount(amount, 12)? {
            (whole, 0) => Some(Duration::years(whole)),
            (whole, rest) => Some(Duration::years_and_months(whole.checked_mul(12)?.checked_add(rest)?)),
        }
    } else {
        lexicon::parse_amount(amount, 1).map(|(whole, _)| Duration::months_of(whole))
    }
}

impl FieldExtractor for ExperienceExtractor {
    fn field(&self) -> FieldName {
        FieldName::ProgrammingExperience
    }

    fn extract(&self, text: &str) -> Vec<CandidateValue> {
        let mut out = Vec::new();
        for caps in self.duration.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if continues_number(text, whole.start()) {
                continue;
            }
            let Some(mut duration) = duration_from(&caps) else {
                tracing::trace!(matched = whole.as_str(), "discarding unparsable duration");
                continue;
            };

            if let Some(context) = self.clause_context(text, whole.start(), whole.end()) {
                duration = duration.with_context(context);
            } else if self.require_context {
                continue;
            }
            out.push(CandidateValue::Duration(duration));
        }
        out
    }
}
