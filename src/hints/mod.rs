//! # Action Hints
//!
//! The workflow backend describes what may currently be done with a document as a loosely
//! typed map from action name to value. [`HintsMap::from_json`] decodes that payload once
//! into the closed [`Hint`] type so that the gating code never inspects raw JSON.
//!
//! Key semantics (see [`gate::HintsGate`]):
//!
//! - key absent: the action is never offered in this context
//! - `false`: offered but currently blocked
//! - `true` or any non-boolean payload: permitted

pub mod gate;

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::constants::hint_keys;
use crate::models::RequestId;

pub use gate::{HintsGate, Visibility};

/// One decoded hint value
#[derive(Debug, Clone, PartialEq)]
pub enum Hint {
    Bool(bool),
    Str(String),
    List(Vec<Hint>),
    Nested(HintsMap),
    /// Numbers, nulls and anything else the engine does not interpret
    Unknown,
}

impl Hint {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Hint::Bool(*b),
            Value::String(s) => Hint::Str(s.clone()),
            Value::Array(items) => Hint::List(items.iter().map(Hint::from_json).collect()),
            Value::Object(_) => Hint::Nested(HintsMap::from_json(value)),
            Value::Null | Value::Number(_) => Hint::Unknown,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Hint::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Hint::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&HintsMap> {
        match self {
            Hint::Nested(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for Hint {
    fn from(value: bool) -> Self {
        Hint::Bool(value)
    }
}

impl From<&str> for Hint {
    fn from(value: &str) -> Self {
        Hint::Str(value.to_string())
    }
}

impl From<String> for Hint {
    fn from(value: String) -> Self {
        Hint::Str(value)
    }
}

impl From<HintsMap> for Hint {
    fn from(value: HintsMap) -> Self {
        Hint::Nested(value)
    }
}

/// Read-only action hints for one document (or one request), re-fetched per operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HintsMap {
    entries: BTreeMap<String, Hint>,
}

impl HintsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a backend payload. Anything other than a JSON object yields an empty map.
    pub fn from_json(value: &Value) -> Self {
        let entries = match value {
            Value::Object(obj) => obj
                .iter()
                .map(|(key, value)| (key.clone(), Hint::from_json(value)))
                .collect(),
            _ => BTreeMap::new(),
        };
        Self { entries }
    }

    /// Builder-style insert, handy for assembling hints in tests and adapters
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Hint>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Hint>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Hint> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Hint::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries of the `requests` sub-map whose value is a nested hints map
    pub fn requests(&self) -> impl Iterator<Item = (RequestId, &HintsMap)> {
        self.get(hint_keys::REQUESTS)
            .and_then(Hint::as_nested)
            .into_iter()
            .flat_map(|requests| requests.entries.iter())
            .filter_map(|(id, hint)| {
                hint.as_nested()
                    .map(|nested| (RequestId::new(id.as_str()), nested))
            })
    }

    /// User currently holding the document open for editing
    pub fn in_use_by(&self) -> Option<&str> {
        self.get_str(hint_keys::IN_USE_BY).filter(|user| !user.is_empty())
    }

    /// Document types that may be created, grouped by category
    pub fn prototypes(&self) -> BTreeMap<String, BTreeSet<String>> {
        let Some(categories) = self.get(hint_keys::PROTOTYPES).and_then(Hint::as_nested) else {
            return BTreeMap::new();
        };

        categories
            .entries
            .iter()
            .map(|(category, hint)| {
                let names = match hint {
                    Hint::List(items) => items
                        .iter()
                        .filter_map(Hint::as_str)
                        .map(str::to_string)
                        .collect(),
                    Hint::Str(single) => BTreeSet::from([single.clone()]),
                    _ => BTreeSet::new(),
                };
                (category.clone(), names)
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<Hint>> FromIterator<(K, V)> for HintsMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
