//! Field resolution.
//!
//! Each profile field has its own rule for collapsing candidates from many
//! sessions into one value. Rules are pure: the same candidates always
//! produce the same value.

mod policies;
mod resolver;

pub use policies::ExperienceAnchor;
pub use resolver::{
    resolve, resolve_experience, resolve_language, resolve_leadership, resolve_mastery, resolve_profile,
    resolve_skills, resolve_team, FieldValue,
};
