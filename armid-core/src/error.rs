//! Error taxonomy for ID encoding and decoding

use thiserror::Error;

/// Errors that can occur when decoding a resource ID
///
/// All of these are terminal for the call that produced them: the codec
/// never retries and never returns a partially decoded struct.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID does not follow the ARM path grammar
    #[error("ID was malformed: {0}")]
    MalformedId(String),

    /// The `subscriptions` segment had no value
    #[error("ID was missing a subscription ID")]
    MissingSubscription,

    /// The `resourceGroups` segment was absent or had no value
    #[error("ID was missing a resource group")]
    MissingResourceGroup,

    /// A segment required by the resource kind was not present
    #[error("ID was missing the `{0}` segment")]
    SegmentNotFound(String),

    /// Segments remained after all expected ones were extracted
    #[error("ID contained unexpected extra segments: {}", .0.join(", "))]
    UnexpectedExtraSegments(Vec<String>),

    /// An association ID did not split into exactly two resource IDs
    #[error("association ID should be two resource IDs joined by `|`, got {0}")]
    MalformedAssociationId(String),

    /// A database-principal FQN did not follow `aad{{type}}={{objectId}};{{clientId}}`
    #[error("FQN should be in the form `aad{{type}}={{objectId}};{{clientId}}`, got {0}")]
    MalformedFqn(String),
}

/// Result type for codec operations
pub type IdResult<T> = Result<T, IdError>;
