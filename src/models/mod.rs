//! # Data Model
//!
//! Value types read from the workflow backend: identities, the variant snapshot of a
//! handle, and pending workflow requests. Nothing here is persisted by the engine.

pub mod ids;
pub mod request;
pub mod variant;

pub use ids::{BranchId, DocumentId, RequestId};
pub use request::{Request, RequestState, RequestType};
pub use variant::{StateSummary, Variant, VariantLabel, VariantSet};
