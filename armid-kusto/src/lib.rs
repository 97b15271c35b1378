//! Typed resource IDs for `Microsoft.Kusto` (Azure Data Explorer)
//!
//! This namespace canonically capitalizes its segment names (`Clusters`,
//! `Databases`, `DataConnections`, ...), unlike most ARM providers.

pub mod ids;
pub mod principal;

pub use ids::{ClusterId, DataConnectionId, DatabaseId, PROVIDER_NAMESPACE, TableId};
pub use principal::{
    ClusterPrincipalAssignmentId, DatabasePrincipalAssignmentId, DatabasePrincipalId, Fqn,
};
