//! # Publication State
//!
//! Aggregate publication state of a document ([`ResolvedState`]), how it is computed from
//! the variant snapshot ([`resolver`]) and how it is rendered next to a branch name
//! ([`branch_info`]).

pub mod branch_info;
pub mod resolver;

use serde::{Deserialize, Serialize};

use crate::models::StateSummary;

pub use branch_info::BranchInfoFormatter;
pub use resolver::StateSummaryResolver;

/// Aggregate publication state of a document, computed fresh on every request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedState {
    /// Published content is publicly visible on the active branch
    pub live: bool,
    /// Published content differs from the unpublished variant. Never set when not live.
    pub unpublished_changes: bool,
    /// Draft differs from unpublished and is marked retainable
    pub draft_changes: bool,
}

/// The single change flag surfaced to users, draft changes first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacedChange {
    DraftChanges,
    UnpublishedChanges,
    None,
}

impl ResolvedState {
    pub fn new(live: bool, unpublished_changes: bool, draft_changes: bool) -> Self {
        Self {
            live,
            unpublished_changes: live && unpublished_changes,
            draft_changes,
        }
    }

    /// Map a `state-summary` value; unknown or missing values are treated as not live
    pub fn from_summary(summary: Option<&StateSummary>, draft_changes: bool) -> Self {
        let live = summary.is_some_and(StateSummary::is_live);
        let unpublished_changes = summary.is_some_and(StateSummary::has_unpublished_changes);
        Self::new(live, unpublished_changes, draft_changes)
    }

    pub fn surfaced_change(&self) -> SurfacedChange {
        if self.draft_changes {
            SurfacedChange::DraftChanges
        } else if self.live && self.unpublished_changes {
            SurfacedChange::UnpublishedChanges
        } else {
            SurfacedChange::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_state_never_reports_unpublished_changes() {
        let state = ResolvedState::new(false, true, false);
        assert!(!state.unpublished_changes);
    }

    #[test]
    fn test_summary_mapping() {
        assert_eq!(
            ResolvedState::from_summary(Some(&StateSummary::Changed), false),
            ResolvedState::new(true, true, false)
        );
        assert_eq!(
            ResolvedState::from_summary(Some(&StateSummary::Live), true),
            ResolvedState::new(true, false, true)
        );
        assert_eq!(
            ResolvedState::from_summary(Some(&StateSummary::New), false),
            ResolvedState::default()
        );
        assert_eq!(ResolvedState::from_summary(None, false), ResolvedState::default());
    }

    #[test]
    fn test_draft_changes_take_precedence() {
        let state = ResolvedState::new(true, true, true);
        assert_eq!(state.surfaced_change(), SurfacedChange::DraftChanges);
        assert_eq!(
            ResolvedState::new(true, true, false).surfaced_change(),
            SurfacedChange::UnpublishedChanges
        );
        assert_eq!(ResolvedState::default().surfaced_change(), SurfacedChange::None);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(ResolvedState::new(true, true, false)).unwrap();
        assert_eq!(json["unpublishedChanges"], true);
        assert_eq!(json["draftChanges"], false);
    }
}
