//! # Error Types
//!
//! Faults raised by validators and the registry. Data-validity problems are
//! not errors here; they are recorded as rejections in a `RejectionSink`.

use crate::entities::EntityKind;
use crate::rejection::ValidationErrors;
use thiserror::Error;

/// Contract or infrastructure failure that aborts a validation run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationFault {
    /// No target was supplied.
    #[error("Invalid argument: validation target is absent, expected {expected}")]
    MissingTarget { expected: EntityKind },

    /// The target is of a kind the validator does not handle.
    #[error("Invalid argument: expected {expected}, got {actual}")]
    WrongKind {
        expected: EntityKind,
        actual: EntityKind,
    },

    /// Nothing is registered for the target's kind.
    #[error("No validator registered for {0}")]
    NoValidator(EntityKind),

    /// A read-only collaborator failed.
    #[error("Lookup failed: {0}")]
    Lookup(String),
}

impl ValidationFault {
    /// True for caller-misuse faults (absent or wrong-kind target).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::MissingTarget { .. } | Self::WrongKind { .. })
    }
}

/// Outcome of a save-time validation that must either pass or stop the save.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// The entity has field rejections.
    #[error("{kind} failed validation: {errors}")]
    Rejected {
        kind: EntityKind,
        errors: ValidationErrors,
    },

    /// Validation could not run.
    #[error(transparent)]
    Fault(#[from] ValidationFault),
}
