//! Reconciliation configuration.
//!
//! Every knob has a default that reproduces the conservative behaviour, so
//! `ReconcileConfig::default()` is always a valid configuration. Values can be
//! loaded from JSON or overridden from the environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReconcileError, ReconcileResult, ValidationError};
use crate::resolve::ExperienceAnchor;

/// Environment variable overriding [`ReconcileConfig::inflation_threshold`].
pub const ENV_INFLATION_THRESHOLD: &str = "TRUTHWEAVE_INFLATION_THRESHOLD";
/// Environment variable overriding [`ReconcileConfig::claim_style`].
pub const ENV_CLAIM_STYLE: &str = "TRUTHWEAVE_CLAIM_STYLE";
/// Environment variable overriding [`ReconcileConfig::experience_anchor`].
pub const ENV_EXPERIENCE_ANCHOR: &str = "TRUTHWEAVE_EXPERIENCE_ANCHOR";
/// Environment variable overriding [`ReconcileConfig::require_experience_context`].
pub const ENV_REQUIRE_EXPERIENCE_CONTEXT: &str = "TRUTHWEAVE_REQUIRE_EXPERIENCE_CONTEXT";

/// How contradiction claims are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStyle {
    /// Fixed category-level pairs such as `["led a team", "worked alone"]`.
    #[default]
    Categorical,
    /// The literal phrases that matched, deduplicated and lexically sorted.
    Verbatim,
}

impl fmt::Display for ClaimStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Categorical => write!(f, "categorical"),
            Self::Verbatim => write!(f, "verbatim"),
        }
    }
}

impl FromStr for ClaimStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "categorical" => Ok(Self::Categorical),
            "verbatim" => Ok(Self::Verbatim),
            other => Err(format!("unknown claim style '{other}'")),
        }
    }
}

/// Configuration for a [`Reconciler`](crate::Reconciler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Minimum spread between the largest and smallest duration, in the
    /// displayed unit, before it counts as experience inflation.
    pub inflation_threshold: u32,

    /// Rendering of leadership and skill contradiction claims.
    pub claim_style: ClaimStyle,

    /// Anchor for experience resolution when several durations exist.
    pub experience_anchor: ExperienceAnchor,

    /// Only keep durations that sit near a programming context word.
    pub require_experience_context: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            inflation_threshold: 2,
            claim_style: ClaimStyle::Categorical,
            experience_anchor: ExperienceAnchor::Minimum,
            require_experience_context: false,
        }
    }
}

fn parse_env_or<T: FromStr>(var: &str, default: T) -> T
where
    T::Err: fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

impl ReconcileConfig {
    /// Parses a JSON document. Missing keys fall back to their defaults.
    pub fn from_json_str(s: &str) -> ReconcileResult<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| ReconcileError::serialization(format!("deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a configuration from defaults overridden by `TRUTHWEAVE_*`
    /// environment variables. Unparsable values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies `TRUTHWEAVE_*` environment overrides on top of `self`.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        let mut config = Self {
            inflation_threshold: parse_env_or(ENV_INFLATION_THRESHOLD, self.inflation_threshold),
            claim_style: parse_env_or(ENV_CLAIM_STYLE, self.claim_style),
            experience_anchor: parse_env_or(ENV_EXPERIENCE_ANCHOR, self.experience_anchor),
            require_experience_context: parse_env_or(
                ENV_REQUIRE_EXPERIENCE_CONTEXT,
                self.require_experience_context,
            ),
        };
        if config.inflation_threshold == 0 {
            tracing::warn!(
                "{} must be at least 1, using {}",
                ENV_INFLATION_THRESHOLD,
                self.inflation_threshold
            );
            config.inflation_threshold = self.inflation_threshold;
        }
        config
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.inflation_threshold == 0 {
            return Err(ValidationError::InvalidConfig {
                reason: "inflation_threshold must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Sets the inflation threshold.
    #[must_use]
    pub fn with_inflation_threshold(mut self, threshold: u32) -> Self {
        self.inflation_threshold = threshold;
        self
    }

    /// Sets the claim style.
    #[must_use]
    pub fn with_claim_style(mut self, style: ClaimStyle) -> Self {
        self.claim_style = style;
        self
    }

    /// Sets the experience anchor.
    #[must_use]
    pub fn with_experience_anchor(mut self, anchor: ExperienceAnchor) -> Self {
        self.experience_anchor = anchor;
        self
    }

    /// Requires context words next to durations.
    #[must_use]
    pub fn with_required_experience_context(mut self, required: bool) -> Self {
        self.require_experience_context = required;
        self
    }
}
