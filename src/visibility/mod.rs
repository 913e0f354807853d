//! # Action Visibility
//!
//! One table-driven mapper replaces the per-panel hide/disable logic: the
//! [`taxonomy`] lists which UI components belong to which action, and the [`mapper`]
//! decides each component's [`Visibility`](crate::hints::Visibility) from a hints map.

pub mod mapper;
pub mod taxonomy;

pub use mapper::ActionVisibilityMapper;
pub use taxonomy::{ActionComponent, ActionRow, ActionTaxonomy};
