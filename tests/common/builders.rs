//! Builders for hints payloads as a workflow backend would produce them

use publication_core::hints::HintsMap;
use publication_core::models::DocumentId;
use serde_json::{json, Value};

pub fn doc(id: &str) -> DocumentId {
    DocumentId::new(id)
}

pub fn hints(value: Value) -> HintsMap {
    HintsMap::from_json(&value)
}

/// Hints of a document a reviewer may publish right away
pub fn publishable() -> HintsMap {
    hints(json!({ "publish": true, "depublish": false }))
}

/// Hints of a document with one pending publication request that blocks direct publishing
pub fn blocked_by_pending_request(request_id: &str, cancel: bool, reject: bool) -> HintsMap {
    hints(json!({
        "publish": false,
        "depublish": false,
        "requests": {
            request_id: {
                "type": "publish",
                "state": "request",
                "acceptRequest": true,
                "cancelRequest": cancel,
                "rejectRequest": reject
            }
        }
    }))
}
