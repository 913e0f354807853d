use proptest::prelude::*;
use publication_core::hints::{Hint, HintsMap};
use publication_core::state::ResolvedState;

/// Strategy for hint keys, including the ones the engine interprets
pub fn hint_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("publish".to_string()),
        Just("depublish".to_string()),
        Just("requestPublication".to_string()),
        Just("requestDepublication".to_string()),
        "[a-z][a-zA-Z]{0,15}",
    ]
}

/// Strategy for leaf hint values of every decoded kind
pub fn hint_value_strategy() -> impl Strategy<Value = Hint> {
    prop_oneof![
        any::<bool>().prop_map(Hint::Bool),
        "[a-z]{0,8}".prop_map(Hint::Str),
        Just(Hint::Unknown),
        Just(Hint::List(vec![Hint::Str("news".to_string())])),
        Just(Hint::Nested(HintsMap::new().with("cancelRequest", true))),
    ]
}

/// Strategy for whole hints maps
pub fn hints_map_strategy() -> impl Strategy<Value = HintsMap> {
    prop::collection::vec((hint_key_strategy(), hint_value_strategy()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

pub fn resolved_state_strategy() -> impl Strategy<Value = ResolvedState> {
    (any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(live, unpublished, draft)| ResolvedState::new(live, unpublished, draft))
}
