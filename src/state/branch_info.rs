use super::{ResolvedState, SurfacedChange};
use crate::collaborators::{LabelResolver, LiteralLabels};
use crate::constants::label_keys;

/// Renders `"<branch> (<live|offline>[, <change>])"`
#[derive(Debug, Clone, Default)]
pub struct BranchInfoFormatter<L = LiteralLabels> {
    labels: L,
}

impl<L: LabelResolver> BranchInfoFormatter<L> {
    pub fn new(labels: L) -> Self {
        Self { labels }
    }

    pub fn format(&self, branch_label: &str, state: &ResolvedState) -> String {
        let publication = if state.live {
            self.labels.lookup(label_keys::LIVE)
        } else {
            self.labels.lookup(label_keys::OFFLINE)
        };

        let suffix = match state.surfaced_change() {
            SurfacedChange::DraftChanges => {
                format!("({publication}, {})", self.labels.lookup(label_keys::DRAFT_CHANGES))
            }
            SurfacedChange::UnpublishedChanges => format!(
                "({publication}, {})",
                self.labels.lookup(label_keys::UNPUBLISHED_CHANGES)
            ),
            SurfacedChange::None => format!("({publication})"),
        };

        format!("{branch_label} {suffix}")
    }
}
