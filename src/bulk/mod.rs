//! # Bulk Workflow
//!
//! Publish-all / depublish-all over a list of documents, one document at a time, with
//! blocking requests resolved first and per-document failures isolated in the report.

pub mod executor;
pub mod report;

pub use executor::BulkWorkflowExecutor;
pub use report::{BulkAction, BulkFailure, BulkReport};
