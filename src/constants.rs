//! # Workflow Vocabulary
//!
//! Hint keys, label keys and defaults shared by the gating, summary and bulk modules.
//! The key strings are produced by the workflow backend and must match it exactly.

/// Reserved id of the default content line of a branch-capable handle
pub const MASTER_BRANCH_ID: &str = "master";

/// Keys of the top-level document hints map
pub mod hint_keys {
    // Direct actions
    pub const PUBLISH: &str = "publish";
    pub const DEPUBLISH: &str = "depublish";

    // Request-mediated actions
    pub const REQUEST_PUBLICATION: &str = "requestPublication";
    pub const REQUEST_DEPUBLICATION: &str = "requestDepublication";

    // Non-boolean payloads
    pub const REQUESTS: &str = "requests";
    pub const IN_USE_BY: &str = "inUseBy";
    pub const PROTOTYPES: &str = "prototypes";
}

/// Keys of the nested hints map attached to each request
pub mod request_keys {
    pub const TYPE: &str = "type";
    pub const STATE: &str = "state";
    pub const SCHEDULE: &str = "schedule";
    pub const REASON: &str = "reason";

    // Transition gates. Backends emit either the long or the short form.
    pub const ACCEPT: &[&str] = &["acceptRequest", "accept"];
    pub const REJECT: &[&str] = &["rejectRequest", "reject"];
    pub const CANCEL: &[&str] = &["cancelRequest", "cancel"];
}

/// Keys handed to the label resolver when rendering branch info
pub mod label_keys {
    pub const LIVE: &str = "live";
    pub const OFFLINE: &str = "offline";
    pub const DRAFT_CHANGES: &str = "draft-changes";
    pub const UNPUBLISHED_CHANGES: &str = "unpublished-changes";
}

/// Default values for engine configuration
pub mod defaults {
    pub const SYSTEM_REJECT_REASON: &str = "Rejected automatically by bulk publication";
    pub const ENVIRONMENT: &str = "development";
    pub const CONFIG_DIRECTORY: &str = "config";
    pub const CONFIG_BASENAME: &str = "publication";
    pub const ENV_PREFIX: &str = "PUBLICATION";
}
