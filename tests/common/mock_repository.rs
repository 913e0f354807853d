//! Mock Repository Implementation for Testing
//!
//! One in-memory repository that implements every collaborator trait, records the calls
//! it receives, and applies request transitions to its own hints the way a workflow
//! backend would.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use publication_core::collaborators::{
    BranchView, HintsProvider, RepositoryRefresh, VariantReader, WorkflowInvoker,
};
use publication_core::error::{collaborator_failure, Result};
use publication_core::hints::{Hint, HintsMap};
use publication_core::models::{BranchId, DocumentId, RequestId, VariantSet};

/// Every call the engine made, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetHints(DocumentId),
    GetVariants(DocumentId),
    IsLiveAvailable(DocumentId, BranchId),
    IsModified(DocumentId, BranchId),
    Publish(DocumentId, Option<DateTime<Utc>>),
    Depublish(DocumentId, Option<DateTime<Utc>>),
    RequestPublication(DocumentId, Option<DateTime<Utc>>),
    RequestDepublication(DocumentId, Option<DateTime<Utc>>),
    AcceptRequest(DocumentId, RequestId),
    RejectRequest(DocumentId, RequestId, String),
    CancelRequest(DocumentId, RequestId),
    Refresh,
}

/// Mock repository state for tracking calls and simulating behavior
#[derive(Debug, Default)]
pub struct MockRepositoryState {
    pub hints: HashMap<DocumentId, HintsMap>,
    pub variants: HashMap<DocumentId, VariantSet>,
    /// (live available, modified) per document and branch
    pub branches: HashMap<(DocumentId, BranchId), (bool, bool)>,
    /// Documents whose `publish`/`depublish` hints turn true once no requests remain
    pub unblock_when_clear: HashSet<DocumentId>,
    pub failing_hints: HashSet<DocumentId>,
    pub failing_variants: HashSet<DocumentId>,
    pub failing_actions: HashSet<DocumentId>,
    pub failing_branch_view: bool,
    /// Branch passed to every hints lookup, in order
    pub hint_branches: Vec<BranchId>,
    pub calls: Vec<Call>,
}

/// Mock repository implementation for testing
#[derive(Clone, Default)]
pub struct MockRepository {
    state: Arc<Mutex<MockRepositoryState>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hints(self, document: &str, hints: HintsMap) -> Self {
        self.lock().hints.insert(DocumentId::new(document), hints);
        self
    }

    pub fn with_variants(self, document: &str, variants: VariantSet) -> Self {
        self.lock().variants.insert(DocumentId::new(document), variants);
        self
    }

    pub fn with_branch(self, document: &str, branch: &str, live: bool, modified: bool) -> Self {
        self.lock()
            .branches
            .insert((DocumentId::new(document), BranchId::new(branch)), (live, modified));
        self
    }

    pub fn unblock_when_clear(self, document: &str) -> Self {
        self.lock().unblock_when_clear.insert(DocumentId::new(document));
        self
    }

    pub fn failing_hints(self, document: &str) -> Self {
        self.lock().failing_hints.insert(DocumentId::new(document));
        self
    }

    pub fn failing_variants(self, document: &str) -> Self {
        self.lock().failing_variants.insert(DocumentId::new(document));
        self
    }

    pub fn failing_actions(self, document: &str) -> Self {
        self.lock().failing_actions.insert(DocumentId::new(document));
        self
    }

    pub fn failing_branch_view(self) -> Self {
        self.lock().failing_branch_view = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Calls that mutate workflow state, in order
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| {
                !matches!(
                    call,
                    Call::GetHints(_)
                        | Call::GetVariants(_)
                        | Call::IsLiveAvailable(..)
                        | Call::IsModified(..)
                        | Call::Refresh
                )
            })
            .collect()
    }

    pub fn hint_branches(&self) -> Vec<BranchId> {
        self.lock().hint_branches.clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockRepositoryState> {
        self.state.lock().unwrap()
    }

    fn record(&self, call: Call) {
        self.lock().calls.push(call);
    }

    fn check_action(&self, document: &DocumentId, operation: &str) -> Result<()> {
        if self.lock().failing_actions.contains(document) {
            return Err(collaborator_failure(
                "WorkflowInvoker",
                operation,
                format!("document {document} is locked"),
            ));
        }
        Ok(())
    }

    /// Drop a request from the document's hints, as the backend does once it is resolved
    fn remove_request(&self, document: &DocumentId, request: &RequestId) {
        let mut state = self.lock();
        let unblock = state.unblock_when_clear.contains(document);
        let Some(hints) = state.hints.get_mut(document) else {
            return;
        };

        let remaining: HintsMap = hints
            .requests()
            .filter(|(id, _)| id != request)
            .map(|(id, nested)| (id.to_string(), Hint::Nested(nested.clone())))
            .collect();
        let clear = remaining.is_empty();
        hints.insert("requests", remaining);

        if clear && unblock {
            for key in ["publish", "depublish"] {
                if hints.contains_key(key) {
                    hints.insert(key, true);
                }
            }
        }
    }
}

#[async_trait]
impl HintsProvider for MockRepository {
    async fn get_hints(&self, document: &DocumentId, branch: &BranchId) -> Result<HintsMap> {
        self.record(Call::GetHints(document.clone()));
        let mut state = self.lock();
        state.hint_branches.push(branch.clone());
        if state.failing_hints.contains(document) {
            return Err(collaborator_failure(
                "HintsProvider",
                "get_hints",
                "repository unavailable",
            ));
        }
        Ok(state.hints.get(document).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl VariantReader for MockRepository {
    async fn get_variants(&self, document: &DocumentId) -> Result<VariantSet> {
        self.record(Call::GetVariants(document.clone()));
        let state = self.lock();
        if state.failing_variants.contains(document) {
            return Err(collaborator_failure(
                "VariantReader",
                "get_variants",
                "handle not found",
            ));
        }
        Ok(state.variants.get(document).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl BranchView for MockRepository {
    async fn is_live_available(&self, document: &DocumentId, branch: &BranchId) -> Result<bool> {
        self.record(Call::IsLiveAvailable(document.clone(), branch.clone()));
        let state = self.lock();
        if state.failing_branch_view {
            return Err(collaborator_failure(
                "BranchView",
                "is_live_available",
                "version history unreadable",
            ));
        }
        Ok(state
            .branches
            .get(&(document.clone(), branch.clone()))
            .is_some_and(|(live, _)| *live))
    }

    async fn is_modified(&self, document: &DocumentId, branch: &BranchId) -> Result<bool> {
        self.record(Call::IsModified(document.clone(), branch.clone()));
        Ok(self
            .lock()
            .branches
            .get(&(document.clone(), branch.clone()))
            .is_some_and(|(_, modified)| *modified))
    }
}

#[async_trait]
impl WorkflowInvoker for MockRepository {
    async fn publish(&self, document: &DocumentId, at: Option<DateTime<Utc>>) -> Result<()> {
        self.record(Call::Publish(document.clone(), at));
        self.check_action(document, "publish")
    }

    async fn depublish(&self, document: &DocumentId, at: Option<DateTime<Utc>>) -> Result<()> {
        self.record(Call::Depublish(document.clone(), at));
        self.check_action(document, "depublish")
    }

    async fn request_publication(
        &self,
        document: &DocumentId,
        at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        self.record(Call::RequestPublication(document.clone(), at));
        self.check_action(document, "request_publication")
    }

    async fn request_depublication(
        &self,
        document: &DocumentId,
        at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        self.record(Call::RequestDepublication(document.clone(), at));
        self.check_action(document, "request_depublication")
    }

    async fn accept_request(&self, document: &DocumentId, request: &RequestId) -> Result<()> {
        self.record(Call::AcceptRequest(document.clone(), request.clone()));
        self.check_action(document, "accept_request")?;
        self.remove_request(document, request);
        Ok(())
    }

    async fn reject_request(
        &self,
        document: &DocumentId,
        request: &RequestId,
        reason: &str,
    ) -> Result<()> {
        self.record(Call::RejectRequest(
            document.clone(),
            request.clone(),
            reason.to_string(),
        ));
        self.check_action(document, "reject_request")?;
        self.remove_request(document, request);
        Ok(())
    }

    async fn cancel_request(&self, document: &DocumentId, request: &RequestId) -> Result<()> {
        self.record(Call::CancelRequest(document.clone(), request.clone()));
        self.check_action(document, "cancel_request")?;
        self.remove_request(document, request);
        Ok(())
    }
}

#[async_trait]
impl RepositoryRefresh for MockRepository {
    async fn refresh(&self) {
        self.record(Call::Refresh);
    }
}
