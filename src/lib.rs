//! # Truthweave - Testimony Session Reconciliation
//!
//! Truthweave takes several free-text interview sessions about one subject,
//! extracts claims from each, resolves them into a single conservative
//! profile and records contradictions between sessions as structured
//! deception evidence instead of resolving them away.
//!
//! ## Core Concepts
//!
//! - **Session**: One interview transcript with a 1-based index
//! - **Candidate**: A raw value an extractor proposes for a field from one session
//! - **ReconciledProfile**: The best-estimate value per field across all sessions
//! - **DeceptionPattern**: Mutually inconsistent claims for one category
//!
//! ## Usage
//!
//! ```rust,ignore
//! use truthweave::{sessions_from_texts, Reconciler, SubjectId};
//!
//! let sessions = sessions_from_texts([
//!     "I have 6 years of programming experience and led a team of 5",
//!     "About 3 years coding, mostly I work alone",
//! ]);
//! let result = Reconciler::with_defaults()?.reconcile(SubjectId::generate(), &sessions)?;
//! assert_eq!(result.profile.programming_experience, "2-4 years");
//! assert_eq!(result.profile.team_experience, "individual contributor");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Inputs and core types
pub mod candidate;
pub mod config;
pub mod deception;
pub mod error;
pub mod mastery;
pub mod profile;
pub mod session;
pub mod subject;
pub mod text;

mod lexicon;

// Pipeline
pub mod detect;
pub mod engine;
pub mod extract;
pub mod resolve;

// Persistence collaborator
pub mod report;

pub use candidate::{Candidate, CandidateSet, CandidateValue, Duration, DurationUnit, FieldName};
pub use config::{ClaimStyle, ReconcileConfig};
pub use deception::{DeceptionPattern, LieType};
pub use detect::ContradictionDetector;
pub use engine::{reconcile_sessions, Reconciler, Reconciliation};
pub use error::{ReconcileError, ReconcileResult, ValidationError};
pub use extract::{Extractors, FieldExtractor};
pub use mastery::{MasteryAssessment, MasteryClassifier, SkillMastery};
pub use profile::ReconciledProfile;
pub use report::ReportWriter;
pub use resolve::{resolve, resolve_profile, ExperienceAnchor, FieldValue};
pub use session::{sessions_from_json, sessions_from_texts, validate_sessions, Session, SessionInput};
pub use subject::SubjectId;
pub use text::clean_transcript;
