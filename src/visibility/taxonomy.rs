use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::hint_keys;

/// UI-exposed action components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionComponent {
    Publish,
    SchedulePublish,
    Depublish,
    ScheduleDepublish,
    RequestPublication,
    ScheduleRequestPublication,
    RequestDepublication,
    ScheduleRequestDepublication,
}

impl ActionComponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::SchedulePublish => "schedulePublish",
            Self::Depublish => "depublish",
            Self::ScheduleDepublish => "scheduleDepublish",
            Self::RequestPublication => "requestPublication",
            Self::ScheduleRequestPublication => "scheduleRequestPublication",
            Self::RequestDepublication => "requestDepublication",
            Self::ScheduleRequestDepublication => "scheduleRequestDepublication",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == s)
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(
            self,
            Self::SchedulePublish
                | Self::ScheduleDepublish
                | Self::ScheduleRequestPublication
                | Self::ScheduleRequestDepublication
        )
    }

    pub fn all() -> &'static [ActionComponent] {
        &[
            Self::Publish,
            Self::SchedulePublish,
            Self::Depublish,
            Self::ScheduleDepublish,
            Self::RequestPublication,
            Self::ScheduleRequestPublication,
            Self::RequestDepublication,
            Self::ScheduleRequestDepublication,
        ]
    }
}

impl fmt::Display for ActionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One base action: its hint key, the components executing it directly, and the
/// request-mediated alternative offered when direct execution is not governed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    pub action: &'static str,
    pub direct_components: Vec<ActionComponent>,
    pub request_action: Option<&'static str>,
    pub request_components: Vec<ActionComponent>,
}

/// Table of actions a workflow panel exposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTaxonomy {
    rows: Vec<ActionRow>,
}

impl ActionTaxonomy {
    pub fn new(rows: Vec<ActionRow>) -> Self {
        Self { rows }
    }

    /// Publish and depublish with schedule siblings and request alternatives
    pub fn standard() -> Self {
        Self::new(vec![
            ActionRow {
                action: hint_keys::PUBLISH,
                direct_components: vec![ActionComponent::Publish, ActionComponent::SchedulePublish],
                request_action: Some(hint_keys::REQUEST_PUBLICATION),
                request_components: vec![
                    ActionComponent::RequestPublication,
                    ActionComponent::ScheduleRequestPublication,
                ],
            },
            ActionRow {
                action: hint_keys::DEPUBLISH,
                direct_components: vec![
                    ActionComponent::Depublish,
                    ActionComponent::ScheduleDepublish,
                ],
                request_action: Some(hint_keys::REQUEST_DEPUBLICATION),
                request_components: vec![
                    ActionComponent::RequestDepublication,
                    ActionComponent::ScheduleRequestDepublication,
                ],
            },
        ])
    }

    /// Standard taxonomy without the schedule siblings, as used by compact panels
    pub fn immediate_only() -> Self {
        let rows = Self::standard()
            .rows
            .into_iter()
            .map(|mut row| {
                row.direct_components.retain(|c| !c.is_scheduled());
                row.request_components.retain(|c| !c.is_scheduled());
                row
            })
            .collect();
        Self::new(rows)
    }

    pub fn rows(&self) -> &[ActionRow] {
        &self.rows
    }

    /// Hint keys of every base and request action in the table
    pub fn action_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows
            .iter()
            .flat_map(|row| std::iter::once(row.action).chain(row.request_action))
    }

    pub fn components(&self) -> impl Iterator<Item = ActionComponent> + '_ {
        self.rows.iter().flat_map(|row| {
            row.direct_components
                .iter()
                .chain(row.request_components.iter())
                .copied()
        })
    }
}

impl Default for ActionTaxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_ids_round_trip() {
        for component in ActionComponent::all() {
            assert_eq!(ActionComponent::from_str_opt(component.as_str()), Some(*component));
        }
        assert_eq!(ActionComponent::from_str_opt("delete"), None);
    }

    #[test]
    fn test_standard_taxonomy_covers_four_actions() {
        let keys: Vec<_> = ActionTaxonomy::standard().action_keys().collect();
        assert_eq!(
            keys,
            vec!["publish", "requestPublication", "depublish", "requestDepublication"]
        );
        assert_eq!(ActionTaxonomy::standard().components().count(), 8);
    }

    #[test]
    fn test_immediate_only_drops_schedule_siblings() {
        let taxonomy = ActionTaxonomy::immediate_only();
        assert_eq!(taxonomy.components().count(), 4);
        assert!(taxonomy.components().all(|c| !c.is_scheduled()));
    }
}
