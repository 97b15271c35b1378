//! Typed resource IDs and validation tables for `Microsoft.DataBoxEdge`

pub mod ids;
pub mod validate;

pub use ids::{DeviceId, OrderId, PROVIDER_NAMESPACE};
