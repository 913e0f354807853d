//! # Document Workflow
//!
//! Single-document entry point used by a workflow panel: one call renders the document's
//! status (state, branch info, editor lock, requests, action visibility) and the action
//! methods gate each mutation against fresh hints before delegating it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::collaborators::{hints_or_empty, HintsProvider, LabelResolver, WorkflowInvoker};
use crate::constants::hint_keys;
use crate::error::{transition_not_permitted, Result, TransitionError};
use crate::hints::{HintsGate, HintsMap, Visibility};
use crate::models::{BranchId, DocumentId, Request, RequestId};
use crate::requests::RequestLedger;
use crate::state::{BranchInfoFormatter, ResolvedState, StateSummaryResolver};
use crate::visibility::{ActionComponent, ActionVisibilityMapper};

/// Actions a user can trigger on a single document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentAction {
    Publish,
    Depublish,
    RequestPublication,
    RequestDepublication,
}

impl DocumentAction {
    pub fn hint_key(&self) -> &'static str {
        match self {
            Self::Publish => hint_keys::PUBLISH,
            Self::Depublish => hint_keys::DEPUBLISH,
            Self::RequestPublication => hint_keys::REQUEST_PUBLICATION,
            Self::RequestDepublication => hint_keys::REQUEST_DEPUBLICATION,
        }
    }
}

impl fmt::Display for DocumentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint_key())
    }
}

/// Everything a workflow panel needs to render one document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStatus {
    pub state: ResolvedState,
    pub branch_info: String,
    pub in_use_by: Option<String>,
    pub requests: Vec<Request>,
    pub actions: BTreeMap<ActionComponent, Visibility>,
}

pub struct DocumentWorkflow {
    hints: Arc<dyn HintsProvider>,
    invoker: Arc<dyn WorkflowInvoker>,
    resolver: StateSummaryResolver,
    formatter: BranchInfoFormatter<Arc<dyn LabelResolver>>,
    mapper: ActionVisibilityMapper,
    ledger: RequestLedger,
    clock: fn() -> DateTime<Utc>,
}

impl DocumentWorkflow {
    pub fn new(
        hints: Arc<dyn HintsProvider>,
        invoker: Arc<dyn WorkflowInvoker>,
        resolver: StateSummaryResolver,
        labels: Arc<dyn LabelResolver>,
    ) -> Self {
        Self {
            hints,
            ledger: RequestLedger::new(Arc::clone(&invoker)),
            invoker,
            resolver,
            formatter: BranchInfoFormatter::new(labels),
            mapper: ActionVisibilityMapper::default(),
            clock: Utc::now,
        }
    }

    pub fn with_mapper(mut self, mapper: ActionVisibilityMapper) -> Self {
        self.mapper = mapper;
        self
    }

    /// Replace the clock used to reject schedules in the past
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Render-time status. Lookup failures degrade to hidden actions and an offline state.
    pub async fn status(
        &self,
        document: &DocumentId,
        branch: &BranchId,
        branch_label: &str,
    ) -> DocumentStatus {
        let hints = self.load_hints(document, branch).await;
        let state = self.resolver.resolve(document, branch).await;

        DocumentStatus {
            state,
            branch_info: self.formatter.format(branch_label, &state),
            in_use_by: hints.in_use_by().map(str::to_string),
            requests: RequestLedger::list(&hints),
            actions: self.mapper.compute_visibility(&hints),
        }
    }

    /// Execute `action` now, or at `at` when scheduled
    pub async fn execute(
        &self,
        document: &DocumentId,
        branch: &BranchId,
        action: DocumentAction,
        at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let hints = self.load_hints(document, branch).await;

        let visibility = HintsGate::resolve(&hints, action.hint_key());
        if !visibility.is_enabled() {
            return Err(transition_not_permitted(
                action.to_string(),
                format!("document {document} ({visibility})"),
            )
            .into());
        }

        if let Some(at) = at {
            if at <= (self.clock)() {
                return Err(TransitionError::ScheduleInPast {
                    action: action.to_string(),
                    document_id: document.clone(),
                }
                .into());
            }
        }

        match action {
            DocumentAction::Publish => self.invoker.publish(document, at).await?,
            DocumentAction::Depublish => self.invoker.depublish(document, at).await?,
            DocumentAction::RequestPublication => {
                self.invoker.request_publication(document, at).await?
            }
            DocumentAction::RequestDepublication => {
                self.invoker.request_depublication(document, at).await?
            }
        }

        info!(
            document_id = %document,
            branch_id = %branch,
            action = %action,
            scheduled_at = ?at,
            "Executed document workflow action"
        );
        Ok(())
    }

    pub async fn accept_request(
        &self,
        document: &DocumentId,
        branch: &BranchId,
        request: &RequestId,
    ) -> Result<()> {
        let hints = self.load_hints(document, branch).await;
        self.ledger.accept(document, &hints, request).await
    }

    pub async fn reject_request(
        &self,
        document: &DocumentId,
        branch: &BranchId,
        request: &RequestId,
        reason: &str,
    ) -> Result<()> {
        let hints = self.load_hints(document, branch).await;
        self.ledger.reject(document, &hints, request, reason).await
    }

    /// Cancel a pending request, or drop a rejected one
    pub async fn cancel_request(
        &self,
        document: &DocumentId,
        branch: &BranchId,
        request: &RequestId,
    ) -> Result<()> {
        let hints = self.load_hints(document, branch).await;
        self.ledger.cancel(document, &hints, request).await
    }

    async fn load_hints(&self, document: &DocumentId, branch: &BranchId) -> HintsMap {
        hints_or_empty(self.hints.as_ref(), document, branch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_action_hint_keys() {
        assert_eq!(DocumentAction::Publish.hint_key(), "publish");
        assert_eq!(
            DocumentAction::RequestDepublication.to_string(),
            "requestDepublication"
        );
    }
}
