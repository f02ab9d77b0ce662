//! Candidate values proposed by extractors.
//!
//! Candidates live only for the duration of one reconciliation run. Each
//! carries the index of the session that produced it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mastery::MasteryAssessment;

/// Profile field a candidate is proposed for.
///
/// Variant order is the order fields appear in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    /// Claimed programming experience duration.
    ProgrammingExperience,
    /// Programming language mentions.
    ProgrammingLanguage,
    /// Mastery-tier vocabulary counts.
    SkillMastery,
    /// Leadership wording and team sizes.
    LeadershipClaims,
    /// Collaborative versus solitary wording.
    TeamExperience,
    /// Technical skill terms.
    Skills,
}

impl FieldName {
    /// All fields in profile order.
    pub const ALL: [Self; 6] = [
        Self::ProgrammingExperience,
        Self::ProgrammingLanguage,
        Self::SkillMastery,
        Self::LeadershipClaims,
        Self::TeamExperience,
        Self::Skills,
    ];

    /// Stable snake_case name, matching the profile key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProgrammingExperience => "programming_experience",
            Self::ProgrammingLanguage => "programming_language",
            Self::SkillMastery => "skill_mastery",
            Self::LeadershipClaims => "leadership_claims",
            Self::TeamExperience => "team_experience",
            Self::Skills => "skills",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit a duration was stated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    /// Years.
    Year,
    /// Months.
    Month,
}

/// A stated duration, e.g. "6 years" or "5 years and 6 months".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    /// Whole amount as stated.
    pub amount: u32,
    /// Unit as stated.
    pub unit: DurationUnit,
    /// Months on top of a year amount, from compound or fractional phrases.
    /// Always below 12 and zero for month amounts.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub extra_months: u32,
    /// Context word found next to the duration, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Duration {
    /// Creates a duration without context.
    #[must_use]
    pub const fn new(amount: u32, unit: DurationUnit) -> Self {
        Self {
            amount,
            unit,
            extra_months: 0,
            context: None,
        }
    }

    /// Creates a duration from a month total, keeping whole years as the
    /// stated unit when the total reaches a year.
    #[must_use]
    pub const fn years_and_months(total_months: u32) -> Self {
        if total_months < 12 {
            return Self::months_of(total_months);
        }
        Self {
            amount: total_months / 12,
            unit: DurationUnit::Year,
            extra_months: total_months % 12,
            context: None,
        }
    }

    /// Creates a duration in years.
    #[must_use]
    pub const fn years(amount: u32) -> Self {
        Self::new(amount, DurationUnit::Year)
    }

    /// Creates a duration in months.
    #[must_use]
    pub const fn months_of(amount: u32) -> Self {
        Self::new(amount, DurationUnit::Month)
    }

    /// Attaches a context word.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Total length in months.
    #[must_use]
    pub const fn months(&self) -> u32 {
        match self.unit {
            DurationUnit::Year => self.amount.saturating_mul(12).saturating_add(self.extra_months),
            DurationUnit::Month => self.amount,
        }
    }

    /// Display phrase in numeric form, e.g. `3 years`, `1 year 6 months`.
    #[must_use]
    pub fn phrase(&self) -> String {
        match self.unit {
            DurationUnit::Year if self.extra_months > 0 => {
                format!("{} {}", plural(self.amount, "year"), plural(self.extra_months, "month"))
            }
            DurationUnit::Year => plural(self.amount, "year"),
            DurationUnit::Month => plural(self.amount, "month"),
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// Formats `n unit` with a plural `s` unless `n == 1`.
pub(crate) fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// A leadership statement, optionally with a team size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadershipClaim {
    /// The matched phrase, lowercased.
    pub phrase: String,
    /// Team size, when the statement names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
}

/// Working mode implied by a role statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleMode {
    /// Team, collaboration, mentoring wording.
    Collaborative,
    /// Alone, solo, by-myself wording.
    Solitary,
}

/// A team/solo role statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleClaim {
    /// Implied working mode.
    pub mode: RoleMode,
    /// The matched phrase, lowercased.
    pub phrase: String,
}

/// Raw value an extractor proposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CandidateValue {
    /// Experience duration.
    Duration(Duration),
    /// Canonical programming language.
    Language(String),
    /// Per-session mastery vocabulary counts.
    Mastery(MasteryAssessment),
    /// Leadership statement.
    Leadership(LeadershipClaim),
    /// Team/solo statement.
    Role(RoleClaim),
    /// Canonical skill term.
    Skill(String),
}

impl CandidateValue {
    /// The field this value is a candidate for.
    #[must_use]
    pub const fn field(&self) -> FieldName {
        match self {
            Self::Duration(_) => FieldName::ProgrammingExperience,
            Self::Language(_) => FieldName::ProgrammingLanguage,
            Self::Mastery(_) => FieldName::SkillMastery,
            Self::Leadership(_) => FieldName::LeadershipClaims,
            Self::Role(_) => FieldName::TeamExperience,
            Self::Skill(_) => FieldName::Skills,
        }
    }
}

/// A candidate value together with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Index of the producing session.
    pub session_index: u32,
    /// Proposed value.
    pub value: CandidateValue,
}

impl Candidate {
    /// Creates a candidate.
    #[must_use]
    pub const fn new(session_index: u32, value: CandidateValue) -> Self {
        Self {
            session_index,
            value,
        }
    }

    /// The field this candidate belongs to.
    #[must_use]
    pub const fn field(&self) -> FieldName {
        self.value.field()
    }
}

/// All candidates of a run, grouped by field.
///
/// Within a field, candidates keep insertion order, which is session order
/// followed by in-text order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    by_field: BTreeMap<FieldName, Vec<Candidate>>,
}

impl CandidateSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate under its field.
    pub fn push(&mut self, candidate: Candidate) {
        self.by_field.entry(candidate.field()).or_default().push(candidate);
    }

    /// Adds every value produced by one session.
    pub fn extend_from_session<I>(&mut self, session_index: u32, values: I)
    where
        I: IntoIterator<Item = CandidateValue>,
    {
        for value in values {
            self.push(Candidate::new(session_index, value));
        }
    }

    /// Candidates for one field, in insertion order.
    #[must_use]
    pub fn for_field(&self, field: FieldName) -> &[Candidate] {
        self.by_field.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Number of candidates for one field.
    #[must_use]
    pub fn count(&self, field: FieldName) -> usize {
        self.for_field(field).len()
    }

    /// Total number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_field.values().map(Vec::len).sum()
    }

    /// Returns true if no candidates were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over stated durations.
    pub fn durations(&self) -> impl Iterator<Item = &Duration> {
        self.for_field(FieldName::ProgrammingExperience)
            .iter()
            .filter_map(|c| match &c.value {
                CandidateValue::Duration(d) => Some(d),
                _ => None,
            })
    }

    /// Iterates over language mentions.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.for_field(FieldName::ProgrammingLanguage)
            .iter()
            .filter_map(|c| match &c.value {
                CandidateValue::Language(l) => Some(l.as_str()),
                _ => None,
            })
    }

    /// Iterates over per-session mastery assessments.
    pub fn mastery(&self) -> impl Iterator<Item = &MasteryAssessment> {
        self.for_field(FieldName::SkillMastery)
            .iter()
            .filter_map(|c| match &c.value {
                CandidateValue::Mastery(m) => Some(m),
                _ => None,
            })
    }

    /// Iterates over leadership statements.
    pub fn leadership(&self) -> impl Iterator<Item = &LeadershipClaim> {
        self.for_field(FieldName::LeadershipClaims)
            .iter()
            .filter_map(|c| match &c.value {
                CandidateValue::Leadership(l) => Some(l),
                _ => None,
            })
    }

    /// Iterates over team/solo statements.
    pub fn roles(&self) -> impl Iterator<Item = &RoleClaim> {
        self.for_field(FieldName::TeamExperience)
            .iter()
            .filter_map(|c| match &c.value {
                CandidateValue::Role(r) => Some(r),
                _ => None,
            })
    }

    /// Iterates over skill terms.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.for_field(FieldName::Skills)
            .iter()
            .filter_map(|c| match &c.value {
                CandidateValue::Skill(s) => Some(s.as_str()),
                _ => None,
            })
    }
}
