//! armid Core
//!
//! Codec for Azure Resource Manager resource IDs: the slash-delimited paths
//! under `/subscriptions/{sub}/resourceGroups/{rg}/providers/{ns}/...` that
//! identify every ARM resource. This crate holds the pieces shared by all
//! service crates:
//!
//! - **`ParsedId`**: tokenizes a raw ID into subscription, resource group,
//!   provider namespace, and an ordered segment map, and lets a typed parser
//!   pop segments off it (strictly or case-insensitively).
//! - **`ResourceId`**: the trait every typed ID kind implements — parse in
//!   two case modes, and format back to the canonical string.
//! - **`AssociationId`**: the `left|right` composite codec for
//!   pseudo-resources with no native ARM path.
//! - **`IdError`**: the shared error taxonomy. All errors are terminal; a
//!   failed decode yields no usable struct.
//!
//! Everything here is a pure function over strings and structs — no I/O, no
//! shared state, safe to call from any number of threads.

pub mod association;
pub mod error;
pub mod id;
pub mod parse;

pub use association::{AssociationId, split_association};
pub use error::{IdError, IdResult};
pub use id::{ResourceId, format_id};
pub use parse::{CaseMode, ParsedId};
