//! # Collaborator Interfaces
//!
//! Everything the engine needs from the hosting application: repository reads, branch
//! status, workflow mutations, label lookup and the refresh boundary between bulk items.
//! The engine holds these as trait objects and never reaches for ambient session state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

use crate::error::Result;
use crate::hints::HintsMap;
use crate::models::{BranchId, DocumentId, RequestId, VariantSet};

/// Source of the per-document action hints
#[async_trait]
pub trait HintsProvider: Send + Sync {
    async fn get_hints(&self, document: &DocumentId, branch: &BranchId) -> Result<HintsMap>;
}

/// Reads the draft/unpublished/published snapshot of a handle
#[async_trait]
pub trait VariantReader: Send + Sync {
    async fn get_variants(&self, document: &DocumentId) -> Result<VariantSet>;
}

/// Branch status of a branch-capable handle
#[async_trait]
pub trait BranchView: Send + Sync {
    /// Whether the branch has content available to the live site
    async fn is_live_available(&self, document: &DocumentId, branch: &BranchId) -> Result<bool>;

    /// Whether the branch's unpublished content differs from what is live
    async fn is_modified(&self, document: &DocumentId, branch: &BranchId) -> Result<bool>;
}

/// Performs workflow mutations. The engine gates every call before making it.
#[async_trait]
pub trait WorkflowInvoker: Send + Sync {
    async fn publish(&self, document: &DocumentId, at: Option<DateTime<Utc>>) -> Result<()>;

    async fn depublish(&self, document: &DocumentId, at: Option<DateTime<Utc>>) -> Result<()>;

    async fn request_publication(
        &self,
        document: &DocumentId,
        at: Option<DateTime<Utc>>,
    ) -> Result<()>;

    async fn request_depublication(
        &self,
        document: &DocumentId,
        at: Option<DateTime<Utc>>,
    ) -> Result<()>;

    async fn accept_request(&self, document: &DocumentId, request: &RequestId) -> Result<()>;

    async fn reject_request(
        &self,
        document: &DocumentId,
        request: &RequestId,
        reason: &str,
    ) -> Result<()>;

    async fn cancel_request(&self, document: &DocumentId, request: &RequestId) -> Result<()>;
}

/// Localized label lookup
pub trait LabelResolver: Send + Sync {
    fn lookup(&self, key: &str) -> String;
}

impl<T: LabelResolver + ?Sized> LabelResolver for Arc<T> {
    fn lookup(&self, key: &str) -> String {
        (**self).lookup(key)
    }
}

/// Returns label keys untranslated
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralLabels;

impl LabelResolver for LiteralLabels {
    fn lookup(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Boundary between bulk items where the host re-reads repository state
#[async_trait]
pub trait RepositoryRefresh: Send + Sync {
    async fn refresh(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRefresh;

#[async_trait]
impl RepositoryRefresh for NoopRefresh {
    async fn refresh(&self) {}
}

/// Fetch hints for rendering. A failed lookup gates everything to `Hidden` by
/// returning an empty map.
pub async fn hints_or_empty(
    provider: &dyn HintsProvider,
    document: &DocumentId,
    branch: &BranchId,
) -> HintsMap {
    match provider.get_hints(document, branch).await {
        Ok(hints) => hints,
        Err(e) => {
            warn!(
                document_id = %document,
                branch_id = %branch,
                error = %e,
                "Hints lookup failed, treating document as having no available actions"
            );
            HintsMap::new()
        }
    }
}
