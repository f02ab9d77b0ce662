//! Subject identity.
//!
//! A subject id only labels output. Nothing in the engine inspects its
//! format.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of the subject whose sessions are reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Wraps a caller-supplied identifier verbatim.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh `shadow_xxxxxxxx` identifier.
    #[must_use]
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(format!("shadow_{}", &hex[..8]))
    }

    /// Uses the supplied id unless it is absent or blank, in which case a
    /// fresh one is generated.
    #[must_use]
    pub fn from_optional(id: Option<&str>) -> Self {
        match id {
            Some(s) if !s.trim().is_empty() => Self::new(s),
            _ => Self::generate(),
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SubjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
