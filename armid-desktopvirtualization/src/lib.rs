//! Typed resource IDs for `Microsoft.DesktopVirtualization`
//!
//! The canonical segment names in this namespace are all-lowercase
//! (`hostpools`, `workspaces`, `applicationgroups`); older state may carry
//! other casings, which the insensitive decode variants accept.

pub mod association;
pub mod ids;

pub use association::WorkspaceApplicationGroupAssociationId;
pub use ids::{ApplicationGroupId, HostPoolId, PROVIDER_NAMESPACE, WorkspaceId};
