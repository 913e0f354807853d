use std::collections::BTreeMap;
use tracing::trace;

use super::taxonomy::{ActionComponent, ActionTaxonomy};
use crate::hints::{Hint, HintsGate, HintsMap, Visibility};

/// Maps an action taxonomy onto component visibility for one hints payload.
///
/// Direct and request-mediated execution of the same action are mutually exclusive: when
/// the hints govern the direct action at all, its request components stay hidden. This is
/// how a reviewer sees publish/depublish while a contributor sees only the request buttons.
#[derive(Debug, Clone, Default)]
pub struct ActionVisibilityMapper {
    taxonomy: ActionTaxonomy,
}

impl ActionVisibilityMapper {
    pub fn new(taxonomy: ActionTaxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &ActionTaxonomy {
        &self.taxonomy
    }

    pub fn compute_visibility(&self, hints: &HintsMap) -> BTreeMap<ActionComponent, Visibility> {
        let mut decisions = BTreeMap::new();

        let any_permitted = self
            .taxonomy
            .action_keys()
            .any(|key| hints.get(key) == Some(&Hint::Bool(true)));

        if !any_permitted {
            for component in self.taxonomy.components() {
                decisions.insert(component, Visibility::Hidden);
            }
            return decisions;
        }

        for row in self.taxonomy.rows() {
            let direct = HintsGate::resolve_all(hints, row.action, row.direct_components.len());
            decisions.extend(row.direct_components.iter().copied().zip(direct));

            let request = if hints.contains_key(row.action) {
                Visibility::Hidden
            } else {
                row.request_action
                    .map_or(Visibility::Hidden, |key| HintsGate::resolve(hints, key))
            };
            for component in &row.request_components {
                decisions.insert(*component, request);
            }

            trace!(action = row.action, request = %request, "Mapped action visibility");
        }

        decisions
    }

    /// Components that should be rendered, in taxonomy order
    pub fn visible_components(&self, hints: &HintsMap) -> Vec<ActionComponent> {
        let decisions = self.compute_visibility(hints);
        self.taxonomy
            .components()
            .filter(|c| decisions.get(c).is_some_and(Visibility::is_visible))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ActionComponent::*;

    #[test]
    fn test_empty_hints_hide_everything() {
        let decisions = ActionVisibilityMapper::default().compute_visibility(&HintsMap::new());
        assert_eq!(decisions.len(), 8);
        assert!(decisions.values().all(|v| *v == Visibility::Hidden));
    }

    #[test]
    fn test_only_blocked_actions_hide_everything() {
        let hints = HintsMap::new().with("publish", false).with("depublish", false);
        let decisions = ActionVisibilityMapper::default().compute_visibility(&hints);
        assert!(decisions.values().all(|v| *v == Visibility::Hidden));
    }

    #[test]
    fn test_reviewer_sees_direct_actions() {
        let hints = HintsMap::new().with("publish", true).with("depublish", false);
        let decisions = ActionVisibilityMapper::default().compute_visibility(&hints);

        assert_eq!(decisions[&Publish], Visibility::Enabled);
        assert_eq!(decisions[&SchedulePublish], Visibility::Enabled);
        assert_eq!(decisions[&Depublish], Visibility::Disabled);
        assert_eq!(decisions[&ScheduleDepublish], Visibility::Disabled);
        assert_eq!(decisions[&RequestPublication], Visibility::Hidden);
        assert_eq!(decisions[&RequestDepublication], Visibility::Hidden);
    }

    #[test]
    fn test_contributor_sees_request_actions() {
        let hints = HintsMap::new()
            .with("requestPublication", true)
            .with("requestDepublication", false);
        let decisions = ActionVisibilityMapper::default().compute_visibility(&hints);

        assert_eq!(decisions[&Publish], Visibility::Hidden);
        assert_eq!(decisions[&Depublish], Visibility::Hidden);
        assert_eq!(decisions[&RequestPublication], Visibility::Enabled);
        assert_eq!(decisions[&ScheduleRequestPublication], Visibility::Enabled);
        assert_eq!(decisions[&RequestDepublication], Visibility::Disabled);
    }

    #[test]
    fn test_visible_components_follow_taxonomy_order() {
        let hints = HintsMap::new().with("publish", true).with("requestDepublication", true);
        let mapper = ActionVisibilityMapper::new(ActionTaxonomy::immediate_only());
        assert_eq!(
            mapper.visible_components(&hints),
            vec![Publish, RequestDepublication]
        );
    }
}
