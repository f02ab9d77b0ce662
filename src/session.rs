//! Testimony sessions.
//!
//! A [`Session`] is one transcript attributed to a subject. Sessions arrive
//! from the transcription collaborator either as constructed values or as
//! JSON [`SessionInput`] records, which are validated on conversion.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ReconcileError, ReconcileResult, ValidationError};

/// One unit of testimony text, ordered by a 1-based index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    #[serde(rename = "session_index")]
    index: u32,
    text: String,
}

impl Session {
    /// Creates a session. The index must be at least 1.
    pub fn new(index: u32, text: impl Into<String>) -> Result<Self, ValidationError> {
        if index == 0 {
            return Err(ValidationError::InvalidSessionIndex { index: 0 });
        }
        Ok(Self {
            index,
            text: text.into(),
        })
    }

    /// The 1-based session index.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// The raw session text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Wire form of a session as handed over by the transcription collaborator.
///
/// Both fields are optional at the serde level so that a missing field
/// surfaces as [`ValidationError::MissingField`] rather than a parse error.
/// The index is signed so that negative values reach validation too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInput {
    /// 1-based index. Also accepted under the key `session`.
    #[serde(default, alias = "session", skip_serializing_if = "Option::is_none")]
    pub session_index: Option<i64>,

    /// Transcript text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SessionInput {
    /// Validates and converts into a [`Session`].
    pub fn into_session(self) -> Result<Session, ValidationError> {
        let index = self.session_index.ok_or_else(|| ValidationError::MissingField {
            field: "session_index".to_string(),
        })?;
        let text = self.text.ok_or_else(|| ValidationError::MissingField {
            field: "text".to_string(),
        })?;
        let index = u32::try_from(index).map_err(|_| ValidationError::InvalidSessionIndex { index })?;
        Session::new(index, text)
    }

    /// Decodes one JSON record. A record of the wrong shape, such as a
    /// fractional index or a non-string text, is a validation error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(|e| ValidationError::InvalidField {
            field: "session".to_string(),
            reason: e.to_string(),
        })
    }
}

impl<'de> Deserialize<'de> for Session {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = SessionInput::deserialize(deserializer)?;
        raw.into_session().map_err(serde::de::Error::custom)
    }
}

impl From<&Session> for SessionInput {
    fn from(session: &Session) -> Self {
        Self {
            session_index: Some(i64::from(session.index)),
            text: Some(session.text.clone()),
        }
    }
}

/// Decodes a JSON array of session records and validates the whole set.
pub fn sessions_from_json(s: &str) -> ReconcileResult<Vec<Session>> {
    let records: Vec<serde_json::Value> = serde_json::from_str(s)
        .map_err(|e| ReconcileError::serialization(format!("deserialize sessions: {e}")))?;
    let sessions = records
        .into_iter()
        .map(|record| SessionInput::from_value(record)?.into_session())
        .collect::<Result<Vec<_>, _>>()?;
    validate_sessions(&sessions)?;
    Ok(sessions)
}

/// Builds sessions `1..=n` from transcripts in order.
pub fn sessions_from_texts<I, S>(texts: I) -> Vec<Session>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .zip(1u32..)
        .map(|(text, index)| Session {
            index,
            text: text.into(),
        })
        .collect()
}

/// Validates a session set: indices must be 1-based and unique.
pub fn validate_sessions(sessions: &[Session]) -> Result<(), ValidationError> {
    let mut seen: HashSet<u32> = HashSet::with_capacity(sessions.len());
    for session in sessions {
        if session.index == 0 {
            return Err(ValidationError::InvalidSessionIndex { index: 0 });
        }
        if !seen.insert(session.index) {
            return Err(ValidationError::DuplicateSessionIndex {
                index: session.index,
            });
        }
    }
    Ok(())
}
