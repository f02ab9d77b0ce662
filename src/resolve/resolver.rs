use std::collections::BTreeSet;

use serde::Serialize;

use crate::candidate::{
    plural, Candidate, CandidateSet, CandidateValue, Duration, FieldName, LeadershipClaim, RoleClaim,
    RoleMode,
};
use crate::mastery::{MasteryAssessment, SkillMastery};
use crate::profile::{
    ReconciledProfile, INDIVIDUAL_CONTRIBUTOR, LEADERSHIP_CLAIMS_PRESENT, NO_LEADERSHIP_CLAIMS,
    TEAM_COLLABORATION, UNKNOWN,
};
use crate::resolve::ExperienceAnchor;

/// A single resolved field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Textual verdicts (experience, language, leadership, team).
    Text(String),
    /// Mastery label.
    Mastery(SkillMastery),
    /// Skill set.
    Skills(BTreeSet<String>),
}

/// Renders a month count: `N year(s)`, `N year(s) M month(s)` or `M month(s)`.
fn describe_months(months: u32) -> String {
    if months < 12 {
        return plural(months, "month");
    }
    let (years, rest) = (months / 12, months % 12);
    if rest == 0 {
        plural(years, "year")
    } else {
        format!("{} {}", plural(years, "year"), plural(rest, "month"))
    }
}

/// Resolves experience conservatively.
///
/// One distinct duration is reported as stated. Several distinct durations
/// are anchored (minimum by default) and reported as a bracketing range
/// around the anchor's whole years, so the estimate never exceeds what the
/// subject most modestly claimed by more than a year.
pub fn resolve_experience<'a, I>(durations: I, anchor: ExperienceAnchor) -> String
where
    I: IntoIterator<Item = &'a Duration>,
{
    let months: Vec<u32> = durations.into_iter().map(Duration::months).collect();
    let distinct: BTreeSet<u32> = months.iter().copied().collect();

    match distinct.len() {
        0 => UNKNOWN.to_string(),
        1 => distinct.iter().next().map_or_else(|| UNKNOWN.to_string(), |m| describe_months(*m)),
        _ => match anchor.anchor(&months) {
            None => UNKNOWN.to_string(),
            Some(m) if m > 12 => {
                let years = m / 12;
                format!("{}-{} years", years.saturating_sub(1), years.saturating_add(1))
            }
            Some(12) => "1 year".to_string(),
            Some(m) => plural(m, "month"),
        },
    }
}

/// Earliest mention wins; `unknown` if none.
pub fn resolve_language<'a, I>(languages: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    languages
        .into_iter()
        .next()
        .map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
}

/// Applies the mastery rule to the combined tier counts.
pub fn resolve_mastery<'a, I>(assessments: I) -> SkillMastery
where
    I: IntoIterator<Item = &'a MasteryAssessment>,
{
    MasteryAssessment::combine(assessments).level()
}

/// Smallest stated team size wins; otherwise a neutral verdict.
pub fn resolve_leadership<'a, I>(claims: I) -> String
where
    I: IntoIterator<Item = &'a LeadershipClaim>,
{
    let mut any_claim = false;
    let mut smallest: Option<u32> = None;
    for claim in claims {
        any_claim = true;
        if let Some(size) = claim.team_size {
            smallest = Some(smallest.map_or(size, |s| s.min(size)));
        }
    }
    match (smallest, any_claim) {
        (Some(size), _) => format!("led team of {size}"),
        (None, true) => LEADERSHIP_CLAIMS_PRESENT.to_string(),
        (None, false) => NO_LEADERSHIP_CLAIMS.to_string(),
    }
}

/// Any solitary wording makes the subject an individual contributor.
pub fn resolve_team<'a, I>(roles: I) -> String
where
    I: IntoIterator<Item = &'a RoleClaim>,
{
    let mut collaborative = false;
    for role in roles {
        match role.mode {
            RoleMode::Solitary => return INDIVIDUAL_CONTRIBUTOR.to_string(),
            RoleMode::Collaborative => collaborative = true,
        }
    }
    if collaborative {
        TEAM_COLLABORATION.to_string()
    } else {
        UNKNOWN.to_string()
    }
}

/// Deduplicated union of all skills.
pub fn resolve_skills<'a, I>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    skills.into_iter().map(ToString::to_string).collect()
}

/// Resolves one field from its candidates across all sessions.
///
/// Candidates belonging to other fields are ignored.
#[must_use]
pub fn resolve(field: FieldName, candidates: &[Candidate], anchor: ExperienceAnchor) -> FieldValue {
    let values = candidates.iter().map(|c| &c.value);
    match field {
        FieldName::ProgrammingExperience => FieldValue::Text(resolve_experience(
            values.filter_map(|v| match v {
                CandidateValue::Duration(d) => Some(d),
                _ => None,
            }),
            anchor,
        )),
        FieldName::ProgrammingLanguage => FieldValue::Text(resolve_language(values.filter_map(|v| match v {
            CandidateValue::Language(l) => Some(l.as_str()),
            _ => None,
        }))),
        FieldName::SkillMastery => FieldValue::Mastery(resolve_mastery(values.filter_map(|v| match v {
            CandidateValue::Mastery(m) => Some(m),
            _ => None,
        }))),
        FieldName::LeadershipClaims => FieldValue::Text(resolve_leadership(values.filter_map(|v| match v {
            CandidateValue::Leadership(l) => Some(l),
            _ => None,
        }))),
        FieldName::TeamExperience => FieldValue::Text(resolve_team(values.filter_map(|v| match v {
            CandidateValue::Role(r) => Some(r),
            _ => None,
        }))),
        FieldName::Skills => FieldValue::Skills(resolve_skills(values.filter_map(|v| match v {
            CandidateValue::Skill(s) => Some(s.as_str()),
            _ => None,
        }))),
    }
}

/// Builds the full profile from a run's candidates.
#[must_use]
pub fn resolve_profile(candidates: &CandidateSet, anchor: ExperienceAnchor) -> ReconciledProfile {
    ReconciledProfile {
        programming_experience: resolve_experience(candidates.durations(), anchor),
        programming_language: resolve_language(candidates.languages()),
        skill_mastery: resolve_mastery(candidates.mastery()),
        leadership_claims: resolve_leadership(candidates.leadership()),
        team_experience: resolve_team(candidates.roles()),
        skills: resolve_skills(candidates.skills()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(size: Option<u32>) -> LeadershipClaim {
        LeadershipClaim {
            phrase: "led".to_string(),
            team_size: size,
        }
    }

    fn role(mode: RoleMode) -> RoleClaim {
        RoleClaim {
            mode,
            phrase: "x".to_string(),
        }
    }

    #[test]
    fn experience_unknown_without_durations() {
        assert_eq!(resolve_experience(std::iter::empty(), ExperienceAnchor::Minimum), "unknown");
    }

    #[test]
    fn experience_single_value_reported_directly() {
        let anchor = ExperienceAnchor::Minimum;
        assert_eq!(resolve_experience(&[Duration::years(3)], anchor), "3 years");
        assert_eq!(resolve_experience(&[Duration::years(1)], anchor), "1 year");
        assert_eq!(resolve_experience(&[Duration::months_of(18)], anchor), "1 year 6 months");
        assert_eq!(resolve_experience(&[Duration::months_of(8)], anchor), "8 months");
        assert_eq!(resolve_experience(&[Duration::months_of(12), Duration::years(1)], anchor), "1 year");
    }

    #[test]
    fn experience_several_values_anchor_on_minimum() {
        let anchor = ExperienceAnchor::Minimum;
        assert_eq!(resolve_experience(&[Duration::years(6), Duration::years(3)], anchor), "2-4 years");
        assert_eq!(resolve_experience(&[Duration::years(6), Duration::years(2)], anchor), "1-3 years");
        assert_eq!(resolve_experience(&[Duration::years(6), Duration::months_of(18)], anchor), "0-2 years");
        assert_eq!(resolve_experience(&[Duration::years(6), Duration::years(1)], anchor), "1 year");
        assert_eq!(resolve_experience(&[Duration::years(6), Duration::months_of(8)], anchor), "8 months");
        assert_eq!(resolve_experience(&[Duration::years(6), Duration::months_of(1)], anchor), "1 month");
    }

    #[test]
    fn experience_median_anchor() {
        let durations = [Duration::years(6), Duration::years(3), Duration::months_of(2)];
        assert_eq!(resolve_experience(&durations, ExperienceAnchor::Median), "2-4 years");
        assert_eq!(resolve_experience(&durations, ExperienceAnchor::Minimum), "2 months");
    }

    #[test]
    fn language_first_mention_wins() {
        assert_eq!(resolve_language(["java", "python"]), "java");
        assert_eq!(resolve_language(std::iter::empty()), "unknown");
    }

    #[test]
    fn leadership_prefers_smallest_size() {
        assert_eq!(resolve_leadership(&[lead(Some(8)), lead(None), lead(Some(5))]), "led team of 5");
        assert_eq!(resolve_leadership(&[lead(None)]), "leadership claims present");
        assert_eq!(resolve_leadership(std::iter::empty()), "no leadership claims");
    }

    #[test]
    fn team_solitary_dominates() {
        assert_eq!(
            resolve_team(&[role(RoleMode::Collaborative), role(RoleMode::Solitary)]),
            "individual contributor"
        );
        assert_eq!(resolve_team(&[role(RoleMode::Collaborative)]), "team collaboration");
        assert_eq!(resolve_team(std::iter::empty()), "unknown");
    }

    #[test]
    fn skills_union_is_deduplicated() {
        let skills = resolve_skills(["docker", "sql", "docker"]);
        assert_eq!(skills.into_iter().collect::<Vec<_>>(), vec!["docker", "sql"]);
    }

    #[test]
    fn resolve_ignores_other_fields() {
        let candidates = vec![
            Candidate::new(1, CandidateValue::Skill("docker".to_string())),
            Candidate::new(1, CandidateValue::Language("rust".to_string())),
        ];
        assert_eq!(
            resolve(FieldName::ProgrammingLanguage, &candidates, ExperienceAnchor::Minimum),
            FieldValue::Text("rust".to_string())
        );
        assert_eq!(
            resolve(FieldName::ProgrammingExperience, &candidates, ExperienceAnchor::Minimum),
            FieldValue::Text("unknown".to_string())
        );
        assert_eq!(
            resolve(FieldName::SkillMastery, &candidates, ExperienceAnchor::Minimum),
            FieldValue::Mastery(SkillMastery::Intermediate)
        );
    }

    #[test]
    fn empty_candidate_set_resolves_to_default_profile() {
        let profile = resolve_profile(&CandidateSet::new(), ExperienceAnchor::Minimum);
        assert!(profile.is_default());
    }
}
