//! Report persistence.
//!
//! Serializes reconciliations to JSON and writes them, along with the
//! per-session transcripts, under a base directory. Field names and array
//! order are preserved exactly as produced by the engine.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::engine::Reconciliation;
use crate::error::{ReconcileError, ReconcileResult};
use crate::session::Session;
use crate::subject::SubjectId;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Serialize a reconciliation to pretty JSON.
pub fn to_json_pretty(reconciliation: &Reconciliation) -> ReconcileResult<String> {
    serde_json::to_string_pretty(reconciliation)
        .map_err(|e| ReconcileError::serialization(format!("serialize reconciliation: {e}")))
}

/// Deserialize a reconciliation from JSON.
pub fn from_json(s: &str) -> ReconcileResult<Reconciliation> {
    serde_json::from_str::<Reconciliation>(s)
        .map_err(|e| ReconcileError::serialization(format!("deserialize reconciliation: {e}")))
}

/// Maps characters outside `[A-Za-z0-9_-]` to `_` so any subject id is a
/// safe file name component.
#[must_use]
pub fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "_".to_string()
    } else {
        cleaned
    }
}

/// Writes transcripts and reports beneath a base directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    base_dir: PathBuf,
}

impl ReportWriter {
    /// Creates a writer rooted at `base_dir`. Nothing is created until the
    /// first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The base directory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn ensure_dir(&self) -> ReconcileResult<()> {
        fs::create_dir_all(&self.base_dir).map_err(|e| ReconcileError::io(self.base_dir.display(), &e))
    }

    fn write(&self, file_name: &str, contents: &str) -> ReconcileResult<PathBuf> {
        self.ensure_dir()?;
        let path = self.base_dir.join(file_name);
        fs::write(&path, contents).map_err(|e| ReconcileError::io(path.display(), &e))?;
        tracing::debug!(path = %path.display(), "wrote file");
        Ok(path)
    }

    /// Writes `Session <index>:\n<text>` to
    /// `<subject>_session_<index>_<timestamp>.txt`.
    pub fn write_transcript(&self, subject: &SubjectId, session: &Session) -> ReconcileResult<PathBuf> {
        self.write_transcript_at(subject, session, Utc::now())
    }

    /// Like [`write_transcript`](Self::write_transcript) with a fixed timestamp.
    pub fn write_transcript_at(
        &self,
        subject: &SubjectId,
        session: &Session,
        at: DateTime<Utc>,
    ) -> ReconcileResult<PathBuf> {
        let name = format!(
            "{}_session_{}_{}.txt",
            sanitize(subject.as_str()),
            session.index(),
            at.format(TIMESTAMP_FORMAT)
        );
        let contents = format!("Session {}:\n{}", session.index(), session.text());
        self.write(&name, &contents)
    }

    /// Writes pretty JSON to `<subject>_analysis_<timestamp>.json`.
    pub fn write_report(&self, reconciliation: &Reconciliation) -> ReconcileResult<PathBuf> {
        self.write_report_at(reconciliation, Utc::now())
    }

    /// Like [`write_report`](Self::write_report) with a fixed timestamp.
    pub fn write_report_at(&self, reconciliation: &Reconciliation, at: DateTime<Utc>) -> ReconcileResult<PathBuf> {
        let name = format!(
            "{}_analysis_{}.json",
            sanitize(reconciliation.subject_id.as_str()),
            at.format(TIMESTAMP_FORMAT)
        );
        self.write(&name, &to_json_pretty(reconciliation)?)
    }

    /// Reads a report written by [`write_report`](Self::write_report).
    pub fn read_report(path: impl AsRef<Path>) -> ReconcileResult<Reconciliation> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ReconcileError::io(path.display(), &e))?;
        from_json(&contents)
    }
}
