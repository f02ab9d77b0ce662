//! Error types for Truthweave.
//!
//! Reconciliation itself never fails: unmatched or adversarial text degrades
//! to default profile values. Errors exist only for caller-contract
//! violations (malformed session input, invalid configuration) and for the
//! surrounding I/O and serialization helpers.

use thiserror::Error;

/// Validation errors raised when the caller hands over malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Session index {index} is invalid: indices are 1-based")]
    InvalidSessionIndex {
        index: i64,
    },

    #[error("Session index {index} appears more than once")]
    DuplicateSessionIndex {
        index: u32,
    },

    #[error("Required field '{field}' is missing")]
    MissingField {
        field: String,
    },

    #[error("Field '{field}' is malformed: {reason}")]
    InvalidField {
        field: String,
        reason: String,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        reason: String,
    },
}

/// Top-level error type for Truthweave.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
    },

    #[error("I/O error at {path}: {message}")]
    Io {
        path: String,
        message: String,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl ReconcileError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Creates an I/O error bound to a path.
    #[must_use]
    pub fn io(path: impl std::fmt::Display, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a serialization error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Returns true if this is an I/O error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for Truthweave operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;
