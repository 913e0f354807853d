//! Error types for the publication engine.
//!
//! Pure gating and summary functions never return these: they degrade to a safe default
//! instead. Errors only surface from operations that would mutate workflow state
//! (request transitions, document actions) and from collaborator calls.

use crate::config::ConfigurationError;
use crate::models::{DocumentId, RequestId};
use thiserror::Error;

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PublicationError {
    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),

    #[error("{collaborator} failed during {operation}: {reason}")]
    Collaborator {
        collaborator: &'static str,
        operation: String,
        reason: String,
    },

    #[error("Unknown request {request_id} on document")]
    UnknownRequest { request_id: RequestId },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Guard failures raised before any collaborator is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Transition '{transition}' is not permitted for {subject}")]
    NotPermitted { transition: String, subject: String },

    #[error("A reason is required to reject request {request_id}")]
    MissingReason { request_id: RequestId },

    #[error("Scheduled {action} for {document_id} must be in the future")]
    ScheduleInPast {
        action: String,
        document_id: DocumentId,
    },
}

impl From<ConfigurationError> for PublicationError {
    fn from(err: ConfigurationError) -> Self {
        PublicationError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PublicationError>;
pub type TransitionResult<T> = std::result::Result<T, TransitionError>;

/// Helper to build a guard failure for a named transition
pub fn transition_not_permitted(
    transition: impl Into<String>,
    subject: impl Into<String>,
) -> TransitionError {
    TransitionError::NotPermitted {
        transition: transition.into(),
        subject: subject.into(),
    }
}

/// Helper to wrap a failure reported by an injected collaborator
pub fn collaborator_failure(
    collaborator: &'static str,
    operation: impl Into<String>,
    reason: impl std::fmt::Display,
) -> PublicationError {
    PublicationError::Collaborator {
        collaborator,
        operation: operation.into(),
        reason: reason.to_string(),
    }
}
