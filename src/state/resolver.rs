use std::sync::Arc;
use tracing::{debug, warn};

use super::ResolvedState;
use crate::collaborators::{BranchView, VariantReader};
use crate::error::Result;
use crate::models::{BranchId, DocumentId, StateSummary, Variant, VariantLabel, VariantSet};

/// Computes a document's aggregate publication state from its variant snapshot.
///
/// Lookup failures are logged and resolve to the zero-value state; they never reach
/// the caller.
pub struct StateSummaryResolver {
    variants: Arc<dyn VariantReader>,
    branches: Arc<dyn BranchView>,
}

/// Variants picked out of a single pass over the handle's children
#[derive(Debug, Default)]
struct VariantScan<'a> {
    summary_variant: Option<&'a Variant>,
    draft: Option<&'a Variant>,
    has_unpublished: bool,
}

impl<'a> VariantScan<'a> {
    fn scan(set: &'a VariantSet) -> Self {
        let mut scan = Self::default();
        for variant in &set.variants {
            if variant.label.carries_summary() {
                scan.summary_variant.get_or_insert(variant);
                scan.has_unpublished |= variant.label == VariantLabel::Unpublished;
            } else {
                scan.draft.get_or_insert(variant);
            }
        }
        scan
    }

    fn draft_changes(&self) -> bool {
        self.draft.is_some_and(|draft| draft.retainable)
    }
}

impl StateSummaryResolver {
    pub fn new(variants: Arc<dyn VariantReader>, branches: Arc<dyn BranchView>) -> Self {
        Self { variants, branches }
    }

    /// Resolve the state of `document` as seen from `branch`
    pub async fn resolve(&self, document: &DocumentId, branch: &BranchId) -> ResolvedState {
        let set = match self.variants.get_variants(document).await {
            Ok(set) => set,
            Err(e) => {
                warn!(
                    document_id = %document,
                    error = %e,
                    "Variant lookup failed, reporting document as offline"
                );
                return ResolvedState::default();
            }
        };

        match self.resolve_variants(document, &set, branch).await {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    document_id = %document,
                    branch_id = %branch,
                    error = %e,
                    "Branch status lookup failed, reporting document as offline"
                );
                ResolvedState::default()
            }
        }
    }

    /// Resolve an already-read snapshot. Only branch-capable handles consult the branch view.
    pub async fn resolve_variants(
        &self,
        document: &DocumentId,
        set: &VariantSet,
        branch: &BranchId,
    ) -> Result<ResolvedState> {
        let scan = VariantScan::scan(set);

        let summary = if set.branch_capable {
            Some(self.branch_summary(document, branch, scan.has_unpublished).await?)
        } else {
            scan.summary_variant
                .and_then(|variant| variant.state_summary.clone())
        };

        let state = ResolvedState::from_summary(summary.as_ref(), scan.draft_changes());
        debug!(
            document_id = %document,
            branch_id = %branch,
            branch_capable = set.branch_capable,
            summary = ?summary,
            ?state,
            "Resolved publication state"
        );
        Ok(state)
    }

    /// Summary of a snapshot read from a handle that is not branch-capable
    pub fn resolve_local(set: &VariantSet) -> ResolvedState {
        let scan = VariantScan::scan(set);
        let summary = scan.summary_variant.and_then(|v| v.state_summary.as_ref());
        ResolvedState::from_summary(summary, scan.draft_changes())
    }

    async fn branch_summary(
        &self,
        document: &DocumentId,
        branch: &BranchId,
        has_unpublished: bool,
    ) -> Result<StateSummary> {
        if !self.branches.is_live_available(document, branch).await? {
            return Ok(StateSummary::New);
        }
        if has_unpublished && self.branches.is_modified(document, branch).await? {
            return Ok(StateSummary::Changed);
        }
        Ok(StateSummary::Live)
    }
}
