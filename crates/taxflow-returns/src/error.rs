//! Return lifecycle errors

use crate::status::ReturnStatus;
use taxflow_store::StoreError;
use taxflow_types::{ReturnId, UserId};

/// One field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as shown in the form
    pub field: &'static str,
    /// What was wrong
    pub message: String,
}

/// Field-scoped validation failures for one wizard step
///
/// Blocks step advancement; entered data is never discarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// The message for `field`, if it failed
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Errors from the returns repository
#[derive(Debug, thiserror::Error)]
pub enum ReturnsError {
    /// No record persisted under the requested id
    #[error("tax return {0} not found")]
    NotFound(ReturnId),

    /// Submission attempted with sub-records missing
    #[error("return is incomplete: missing {}", .missing.join(", "))]
    IncompleteRecord {
        /// Missing section names
        missing: Vec<&'static str>,
    },

    /// A step failed validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Actor is neither the record's owner nor an admin
    #[error("user {actor} may not delete return {id}")]
    NotAuthorized {
        /// Who attempted the operation
        actor: UserId,
        /// Record the operation targeted
        id: ReturnId,
    },

    /// Status change not allowed by the transition table
    #[error("cannot move return from {from} to {to}")]
    InvalidTransition {
        /// Current status
        from: ReturnStatus,
        /// Requested status
        to: ReturnStatus,
    },

    /// Storage backend failed
    #[error("return storage failed: {0}")]
    Store(#[from] StoreError),

    /// Persisted record blob could not be decoded
    #[error("persisted return corrupt: {0}")]
    CorruptRecord(#[from] serde_json::Error),
}
