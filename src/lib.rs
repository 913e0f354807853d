#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Publication Core
//!
//! Document publication state and authorization engine for content workflows.
//!
//! ## Overview
//!
//! Given the action hints a workflow backend computes for a document and the document's
//! variant snapshot, the engine decides which actions a user may perform, what the
//! document's aggregate publication state is, and how pending requests and bulk
//! publish/depublish runs are resolved. Repository access, workflow mutations and
//! localization stay with the host behind the traits in [`collaborators`].
//!
//! ## Module Organization
//!
//! - [`hints`] - Decoded action hints and the Hidden/Disabled/Enabled gate
//! - [`state`] - Aggregate publication state and branch info rendering
//! - [`requests`] - Pending workflow requests and their gated transitions
//! - [`visibility`] - Action taxonomy to component visibility mapping
//! - [`bulk`] - Sequential publish-all / depublish-all with failure isolation
//! - [`workflow`] - Single-document status and gated actions
//! - [`models`] - Identities, variants and requests
//! - [`config`] - Configuration loading
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use publication_core::hints::{HintsGate, HintsMap, Visibility};
//! use publication_core::visibility::{ActionComponent, ActionVisibilityMapper};
//!
//! let hints = HintsMap::new().with("publish", true).with("depublish", false);
//!
//! assert_eq!(HintsGate::resolve(&hints, "depublish"), Visibility::Disabled);
//!
//! let decisions = ActionVisibilityMapper::default().compute_visibility(&hints);
//! assert_eq!(decisions[&ActionComponent::Publish], Visibility::Enabled);
//! assert_eq!(decisions[&ActionComponent::RequestPublication], Visibility::Hidden);
//! ```

pub mod bulk;
pub mod collaborators;
pub mod config;
pub mod constants;
pub mod error;
pub mod hints;
pub mod logging;
pub mod models;
pub mod requests;
pub mod state;
pub mod visibility;
pub mod workflow;

pub use bulk::{BulkAction, BulkReport, BulkWorkflowExecutor};
pub use config::{ConfigLoader, EngineConfig};
pub use error::{PublicationError, Result, TransitionError};
pub use hints::{Hint, HintsGate, HintsMap, Visibility};
pub use models::{BranchId, DocumentId, RequestId, VariantSet};
pub use requests::{RequestLedger, RequestTransition};
pub use state::{BranchInfoFormatter, ResolvedState, StateSummaryResolver};
pub use visibility::{ActionComponent, ActionVisibilityMapper};
pub use workflow::{DocumentAction, DocumentStatus, DocumentWorkflow};
