use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MASTER_BRANCH_ID;

/// Logical identity of a document handle
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Branch of a branch-capable handle. `master` is the default content line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(String);

impl BranchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn master() -> Self {
        Self(MASTER_BRANCH_ID.to_string())
    }

    pub fn is_master(&self) -> bool {
        self.0 == MASTER_BRANCH_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BranchId {
    fn default() -> Self {
        Self::master()
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BranchId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque id of a workflow request, as keyed in the `requests` hint
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_branch_default() {
        assert!(BranchId::default().is_master());
        assert!(!BranchId::new("summer-campaign").is_master());
        assert_eq!(BranchId::master().to_string(), "master");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = DocumentId::new("0f5a-handle");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"0f5a-handle\"");
    }
}
