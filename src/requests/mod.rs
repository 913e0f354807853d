//! # Workflow Requests
//!
//! Pending publish/depublish/delete requests attached to a document, and the gating of
//! the accept, reject and cancel transitions available on them.

pub mod ledger;

pub use ledger::{RequestLedger, RequestTransition};
