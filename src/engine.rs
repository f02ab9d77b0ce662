//! Session merger.
//!
//! [`Reconciler`] runs every extractor over every session, accumulates the
//! candidates, resolves a profile and detects contradictions. It holds only
//! compiled rule tables, so one instance can serve any number of subjects
//! concurrently.

use serde::{Deserialize, Serialize};

use crate::candidate::{CandidateSet, FieldName};
use crate::config::ReconcileConfig;
use crate::deception::DeceptionPattern;
use crate::detect::ContradictionDetector;
use crate::error::{ReconcileError, ReconcileResult};
use crate::extract::Extractors;
use crate::profile::ReconciledProfile;
use crate::resolve::resolve_profile;
use crate::session::{validate_sessions, Session};
use crate::subject::SubjectId;
use crate::text::clean_transcript;

/// Output of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Subject the sessions belong to.
    pub subject_id: SubjectId,
    /// Best-estimate profile.
    pub profile: ReconciledProfile,
    /// Contradictions, in fixed category order.
    pub patterns: Vec<DeceptionPattern>,
}

impl Reconciliation {
    /// Hex blake3 digest of the compact JSON encoding.
    ///
    /// Identical inputs always produce identical fingerprints.
    pub fn fingerprint(&self) -> ReconcileResult<String> {
        let bytes = serde_json::to_vec(self)
            .map_err(|e| ReconcileError::serialization(format!("serialize reconciliation: {e}")))?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }

    /// Returns true if any contradiction was found.
    #[must_use]
    pub fn has_patterns(&self) -> bool {
        !self.patterns.is_empty()
    }
}

/// Reconciles testimony sessions into a profile plus deception evidence.
#[derive(Debug, Clone)]
pub struct Reconciler {
    config: ReconcileConfig,
    extractors: Extractors,
    detector: ContradictionDetector,
}

impl Reconciler {
    /// Validates `config` and compiles the rule tables.
    pub fn new(config: ReconcileConfig) -> ReconcileResult<Self> {
        config.validate()?;
        let extractors = Extractors::new(&config)?;
        let detector = ContradictionDetector::new(&config);
        Ok(Self {
            config,
            extractors,
            detector,
        })
    }

    /// A reconciler with the default configuration.
    pub fn with_defaults() -> ReconcileResult<Self> {
        Self::new(ReconcileConfig::default())
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Runs every extractor over every session, in input order.
    #[must_use]
    pub fn collect_candidates(&self, sessions: &[Session]) -> CandidateSet {
        let mut candidates = CandidateSet::new();
        for session in sessions {
            let text = clean_transcript(session.text());
            candidates.extend_from_session(session.index(), self.extractors.extract_all(&text));
        }
        for field in FieldName::ALL {
            tracing::trace!(%field, count = candidates.count(field), "collected candidates");
        }
        candidates
    }

    /// Reconciles `sessions` for `subject_id`.
    ///
    /// Fails only on malformed input structure; text that yields no claims
    /// produces the default profile.
    pub fn reconcile(&self, subject_id: SubjectId, sessions: &[Session]) -> ReconcileResult<Reconciliation> {
        validate_sessions(sessions)?;
        tracing::debug!(subject = %subject_id, sessions = sessions.len(), "reconciling");

        let candidates = self.collect_candidates(sessions);
        if candidates.is_empty() {
            tracing::debug!(subject = %subject_id, "no candidates collected, using default profile");
        }
        let profile = resolve_profile(&candidates, self.config.experience_anchor);
        let patterns = self.detector.detect(&candidates);

        tracing::debug!(
            subject = %subject_id,
            candidates = candidates.len(),
            patterns = patterns.len(),
            "reconciled"
        );
        Ok(Reconciliation {
            subject_id,
            profile,
            patterns,
        })
    }
}

/// Reconciles with the default configuration, generating a subject id when
/// `subject` is absent or blank.
pub fn reconcile_sessions(sessions: &[Session], subject: Option<&str>) -> ReconcileResult<Reconciliation> {
    Reconciler::with_defaults()?.reconcile(SubjectId::from_optional(subject), sessions)
}
