use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which claimed duration anchors the experience estimate when sessions
/// disagree.
///
/// Anchors are pure functions of the month values, so the same claims always
/// resolve to the same estimate regardless of session order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceAnchor {
    /// Smallest claimed duration.
    #[default]
    Minimum,
    /// Lower median of all claimed durations.
    Median,
}

impl ExperienceAnchor {
    /// Picks the anchor month value, or `None` for an empty slice.
    #[must_use]
    pub fn anchor(self, months: &[u32]) -> Option<u32> {
        match self {
            Self::Minimum => months.iter().min().copied(),
            Self::Median => {
                if months.is_empty() {
                    return None;
                }
                let mut sorted = months.to_vec();
                sorted.sort_unstable();
                Some(sorted[(sorted.len() - 1) / 2])
            }
        }
    }

    /// Returns a short stable identifier suitable for logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Median => "median",
        }
    }
}

impl fmt::Display for ExperienceAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExperienceAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimum" | "min" => Ok(Self::Minimum),
            "median" => Ok(Self::Median),
            other => Err(format!("unknown experience anchor '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_picks_smallest() {
        assert_eq!(ExperienceAnchor::Minimum.anchor(&[72, 36, 8]), Some(8));
    }

    #[test]
    fn median_picks_lower_middle() {
        assert_eq!(ExperienceAnchor::Median.anchor(&[72, 36, 8]), Some(36));
        assert_eq!(ExperienceAnchor::Median.anchor(&[72, 36]), Some(36));
    }

    #[test]
    fn empty_has_no_anchor() {
        assert_eq!(ExperienceAnchor::Minimum.anchor(&[]), None);
        assert_eq!(ExperienceAnchor::Median.anchor(&[]), None);
    }
}
