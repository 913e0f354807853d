use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Hint, HintsMap};

/// How an action should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Not offered at all in this context
    Hidden,
    /// Offered but currently blocked; still rendered
    Disabled,
    /// Offered and permitted
    Enabled,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Disabled => write!(f, "disabled"),
            Self::Enabled => write!(f, "enabled"),
        }
    }
}

/// Decides the presentation of a single named action from a hints map.
///
/// Pure and infallible: absent or malformed input degrades to `Hidden` or `Disabled`.
#[derive(Debug)]
pub struct HintsGate;

impl HintsGate {
    pub fn resolve(hints: &HintsMap, key: &str) -> Visibility {
        match hints.get(key) {
            None => Visibility::Hidden,
            Some(Hint::Bool(false)) => Visibility::Disabled,
            Some(_) => Visibility::Enabled,
        }
    }

    /// Same decision applied to `count` co-dependent elements (an action and its
    /// schedule sibling, for instance), so they can never disagree.
    pub fn resolve_all(hints: &HintsMap, key: &str, count: usize) -> Vec<Visibility> {
        vec![Self::resolve(hints, key); count]
    }

    /// The first key present in `hints` decides, even when its value is `false` and a
    /// later key would enable. `Hidden` when none is present.
    pub fn resolve_any(hints: &HintsMap, keys: &[&str]) -> Visibility {
        keys.iter()
            .find(|key| hints.contains_key(key))
            .map_or(Visibility::Hidden, |key| Self::resolve(hints, key))
    }

    pub fn is_enabled(hints: &HintsMap, key: &str) -> bool {
        Self::resolve(hints, key).is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hints() -> HintsMap {
        HintsMap::new()
            .with("publish", true)
            .with("depublish", false)
            .with("inUseBy", "admin")
    }

    #[test]
    fn test_absent_key_is_hidden() {
        assert_eq!(HintsGate::resolve(&sample_hints(), "delete"), Visibility::Hidden);
        assert_eq!(HintsGate::resolve(&HintsMap::new(), "publish"), Visibility::Hidden);
    }

    #[test]
    fn test_false_is_disabled_and_true_is_enabled() {
        let hints = sample_hints();
        assert_eq!(HintsGate::resolve(&hints, "depublish"), Visibility::Disabled);
        assert_eq!(HintsGate::resolve(&hints, "publish"), Visibility::Enabled);
    }

    #[test]
    fn test_non_boolean_payload_is_enabled() {
        assert_eq!(HintsGate::resolve(&sample_hints(), "inUseBy"), Visibility::Enabled);
        let hints = HintsMap::new().with("odd", Hint::Unknown);
        assert_eq!(HintsGate::resolve(&hints, "odd"), Visibility::Enabled);
    }

    #[test]
    fn test_resolve_all_shares_one_decision() {
        let decisions = HintsGate::resolve_all(&sample_hints(), "depublish", 2);
        assert_eq!(decisions, vec![Visibility::Disabled, Visibility::Disabled]);
        assert!(HintsGate::resolve_all(&sample_hints(), "publish", 0).is_empty());
    }

    #[test]
    fn test_resolve_any_uses_first_present_key() {
        let hints = HintsMap::new().with("cancel", true).with("cancelRequest", false);
        assert_eq!(
            HintsGate::resolve_any(&hints, &["cancelRequest", "cancel"]),
            Visibility::Disabled
        );
        assert_eq!(
            HintsGate::resolve_any(&hints, &["acceptRequest", "accept"]),
            Visibility::Hidden
        );
    }
}
