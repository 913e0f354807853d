use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::hint_keys;
use crate::error::PublicationError;
use crate::models::DocumentId;

/// Action applied to every document of a bulk run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    Publish,
    Depublish,
}

impl BulkAction {
    /// Hint key gating this action on a single document
    pub fn hint_key(&self) -> &'static str {
        match self {
            Self::Publish => hint_keys::PUBLISH,
            Self::Depublish => hint_keys::DEPUBLISH,
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint_key())
    }
}

/// A document the run could not process, with the cause
#[derive(Debug, Clone, PartialEq)]
pub struct BulkFailure {
    pub document_id: DocumentId,
    pub cause: PublicationError,
}

/// Outcome of a bulk run. Effects on processed documents are never rolled back.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkReport {
    pub action: BulkAction,
    /// Documents the action was invoked on successfully
    pub processed: usize,
    pub failures: Vec<BulkFailure>,
    /// Documents whose hints no longer permitted the action at execution time
    pub skipped: Vec<DocumentId>,
    /// Documents not reached before the deadline
    pub not_attempted: Vec<DocumentId>,
    /// Blocking requests canceled or rejected along the way
    pub requests_resolved: usize,
    pub processing_duration_ms: u64,
}

impl BulkReport {
    pub fn new(action: BulkAction) -> Self {
        Self {
            action,
            processed: 0,
            failures: Vec::new(),
            skipped: Vec::new(),
            not_attempted: Vec::new(),
            requests_resolved: 0,
            processing_duration_ms: 0,
        }
    }

    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty() && self.not_attempted.is_empty()
    }

    pub fn failed_documents(&self) -> impl Iterator<Item = &DocumentId> {
        self.failures.iter().map(|failure| &failure.document_id)
    }
}
