//! The reconciled profile.
//!
//! Every field is always present. When no candidates exist for a field it
//! carries the documented default, so a profile is never partial.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::mastery::SkillMastery;

/// Value for experience and language when nothing was claimed.
pub const UNKNOWN: &str = "unknown";
/// Leadership verdict when no leadership wording appeared.
pub const NO_LEADERSHIP_CLAIMS: &str = "no leadership claims";
/// Leadership verdict when wording appeared without a team size.
pub const LEADERSHIP_CLAIMS_PRESENT: &str = "leadership claims present";
/// Team verdict when any solitary wording appeared.
pub const INDIVIDUAL_CONTRIBUTOR: &str = "individual contributor";
/// Team verdict when only collaborative wording appeared.
pub const TEAM_COLLABORATION: &str = "team collaboration";

/// Best-estimate value per profile field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledProfile {
    /// Duration such as `2-4 years`, `8 months` or `unknown`.
    pub programming_experience: String,
    /// Earliest-mentioned language, or `unknown`.
    pub programming_language: String,
    /// Mastery label.
    pub skill_mastery: SkillMastery,
    /// Leadership verdict.
    pub leadership_claims: String,
    /// Team verdict.
    pub team_experience: String,
    /// Union of matched skills. Serialized sorted.
    pub skills: BTreeSet<String>,
}

impl Default for ReconciledProfile {
    fn default() -> Self {
        Self {
            programming_experience: UNKNOWN.to_string(),
            programming_language: UNKNOWN.to_string(),
            skill_mastery: SkillMastery::default(),
            leadership_claims: NO_LEADERSHIP_CLAIMS.to_string(),
            team_experience: UNKNOWN.to_string(),
            skills: BTreeSet::new(),
        }
    }
}

impl ReconciledProfile {
    /// Returns true when every field still holds its default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
