use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::report::{BulkAction, BulkFailure, BulkReport};
use crate::collaborators::{HintsProvider, NoopRefresh, RepositoryRefresh, WorkflowInvoker};
use crate::config::{BulkConfig, EngineConfig};
use crate::error::Result;
use crate::hints::{HintsGate, HintsMap};
use crate::logging::log_document_operation;
use crate::models::{BranchId, DocumentId};
use crate::requests::{RequestLedger, RequestTransition};

/// What happened to one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentOutcome {
    Processed { requests_resolved: usize },
    Skipped { requests_resolved: usize },
}

/// Runs a bulk publish or depublish over a list of documents.
///
/// Documents are processed strictly one after another: resolve hints, clear blocking
/// requests, re-resolve hints, execute, then refresh. The hosting repository session is
/// not safe for concurrent mutation, so nothing here interleaves documents.
pub struct BulkWorkflowExecutor {
    hints: Arc<dyn HintsProvider>,
    invoker: Arc<dyn WorkflowInvoker>,
    refresh: Arc<dyn RepositoryRefresh>,
    ledger: RequestLedger,
    config: BulkConfig,
    branch: BranchId,
}

impl BulkWorkflowExecutor {
    pub fn new(
        hints: Arc<dyn HintsProvider>,
        invoker: Arc<dyn WorkflowInvoker>,
        config: BulkConfig,
    ) -> Self {
        Self {
            hints,
            ledger: RequestLedger::new(Arc::clone(&invoker)),
            invoker,
            refresh: Arc::new(NoopRefresh),
            config,
            branch: BranchId::master(),
        }
    }

    /// Executor for the configured default branch
    pub fn from_config(
        hints: Arc<dyn HintsProvider>,
        invoker: Arc<dyn WorkflowInvoker>,
        config: &EngineConfig,
    ) -> Self {
        Self::new(hints, invoker, config.bulk.clone())
            .with_branch(config.branches.default_branch_id())
    }

    pub fn branch(&self) -> &BranchId {
        &self.branch
    }

    pub fn with_refresh(mut self, refresh: Arc<dyn RepositoryRefresh>) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn with_branch(mut self, branch: BranchId) -> Self {
        self.branch = branch;
        self
    }

    /// Documents whose hints currently allow `action`. Eligibility is checked again
    /// when the run executes.
    pub async fn select_candidates(
        &self,
        documents: &[DocumentId],
        action: BulkAction,
    ) -> Vec<DocumentId> {
        let mut candidates = Vec::new();
        for document in documents {
            match self.hints.get_hints(document, &self.branch).await {
                Ok(hints) if HintsGate::is_enabled(&hints, action.hint_key()) => {
                    candidates.push(document.clone());
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        document_id = %document,
                        error = %e,
                        "Hints lookup failed during candidate selection, excluding document"
                    );
                }
            }
        }
        candidates
    }

    pub async fn run(&self, documents: &[DocumentId], action: BulkAction) -> BulkReport {
        self.run_with_deadline(documents, action, None).await
    }

    /// Run until every document is processed or `deadline` passes. Documents not yet
    /// started at the deadline are reported as not attempted.
    #[instrument(skip_all, fields(action = %action, documents = documents.len()))]
    pub async fn run_with_deadline(
        &self,
        documents: &[DocumentId],
        action: BulkAction,
        deadline: Option<tokio::time::Instant>,
    ) -> BulkReport {
        let start_time = Instant::now();
        let mut report = BulkReport::new(action);

        info!(
            action = %action,
            documents = documents.len(),
            branch_id = %self.branch,
            "Starting bulk workflow run"
        );

        for (index, document) in documents.iter().enumerate() {
            if deadline.is_some_and(|deadline| tokio::time::Instant::now() >= deadline) {
                warn!(
                    remaining = documents.len() - index,
                    "Bulk workflow deadline reached, leaving remaining documents untouched"
                );
                report.not_attempted.extend(documents[index..].iter().cloned());
                break;
            }

            match self.process_document(document, action).await {
                Ok(DocumentOutcome::Processed { requests_resolved }) => {
                    report.processed += 1;
                    report.requests_resolved += requests_resolved;
                    log_document_operation(action.hint_key(), document, "processed", None);
                }
                Ok(DocumentOutcome::Skipped { requests_resolved }) => {
                    report.requests_resolved += requests_resolved;
                    report.skipped.push(document.clone());
                    log_document_operation(
                        action.hint_key(),
                        document,
                        "skipped",
                        Some("action not permitted at execution time"),
                    );
                }
                Err(e) => {
                    warn!(
                        document_id = %document,
                        error = %e,
                        "Bulk workflow failed for document, continuing with next"
                    );
                    log_document_operation(
                        action.hint_key(),
                        document,
                        "failed",
                        Some(&e.to_string()),
                    );
                    report.failures.push(BulkFailure {
                        document_id: document.clone(),
                        cause: e,
                    });
                }
            }

            self.refresh.refresh().await;
        }

        report.processing_duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            action = %action,
            processed = report.processed,
            failed = report.failures.len(),
            skipped = report.skipped.len(),
            not_attempted = report.not_attempted.len(),
            requests_resolved = report.requests_resolved,
            processing_duration_ms = report.processing_duration_ms,
            "Completed bulk workflow run"
        );

        report
    }

    async fn process_document(
        &self,
        document: &DocumentId,
        action: BulkAction,
    ) -> Result<DocumentOutcome> {
        let hints = self.hints.get_hints(document, &self.branch).await?;
        let requests_resolved = self.resolve_blocking_requests(document, &hints).await?;

        let hints = self.hints.get_hints(document, &self.branch).await?;
        if !HintsGate::is_enabled(&hints, action.hint_key()) {
            debug!(
                document_id = %document,
                action = %action,
                visibility = %HintsGate::resolve(&hints, action.hint_key()),
                "Action not permitted at execution time"
            );
            return Ok(DocumentOutcome::Skipped { requests_resolved });
        }

        match action {
            BulkAction::Publish => self.invoker.publish(document, None).await?,
            BulkAction::Depublish => self.invoker.depublish(document, None).await?,
        }

        Ok(DocumentOutcome::Processed { requests_resolved })
    }

    /// Cancel, or failing that reject, every request that would block the action
    async fn resolve_blocking_requests(
        &self,
        document: &DocumentId,
        hints: &HintsMap,
    ) -> Result<usize> {
        let mut resolved = 0;

        for request in RequestLedger::list(hints) {
            if !request.state.is_in_flight() && !self.config.resolve_rejected_requests {
                continue;
            }

            if RequestLedger::gate(&request, RequestTransition::Cancel).is_enabled() {
                self.ledger.cancel(document, hints, &request.id).await?;
                resolved += 1;
            } else if RequestLedger::gate(&request, RequestTransition::Reject).is_enabled() {
                self.ledger
                    .reject(document, hints, &request.id, &self.config.system_reject_reason)
                    .await?;
                resolved += 1;
            } else {
                debug!(
                    document_id = %document,
                    request_id = %request.id,
                    state = %request.state,
                    "Request cannot be canceled or rejected, leaving it in place"
                );
            }
        }

        Ok(resolved)
    }
}
