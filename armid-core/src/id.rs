//! ResourceId - the contract every typed ID kind implements
//!
//! A typed ID is an immutable struct of path components, constructed either
//! from explicit parts after a create call or by decoding a persisted ID
//! string. `parse` and `id` obey the round-trip law: formatting a decoded ID
//! reproduces the input, modulo canonicalization of provider-segment casing
//! when the insensitive decode variant was used.

use crate::error::IdResult;

/// A typed ARM resource identifier
pub trait ResourceId: Sized {
    /// Decode an ID string, requiring canonical segment casing
    fn parse(id: &str) -> IdResult<Self>;

    /// Decode an ID string, accepting any casing for provider segments
    ///
    /// Used for backward-compatible state migration; the subscription ID,
    /// resource group, and leaf names are still taken verbatim.
    fn parse_insensitively(id: &str) -> IdResult<Self>;

    /// Render the canonical ID string
    fn id(&self) -> String;
}

/// Render the canonical path for a resource under a provider namespace
///
/// Segment keys are emitted exactly as given; callers pass their kind's
/// canonical casing so that insensitively decoded IDs reformat canonically.
pub fn format_id(
    subscription_id: &str,
    resource_group: &str,
    provider: &str,
    segments: &[(&str, &str)],
) -> String {
    let mut out = String::with_capacity(64);
    out.push_str("/subscriptions/");
    out.push_str(subscription_id);
    out.push_str("/resourceGroups/");
    out.push_str(resource_group);
    out.push_str("/providers/");
    out.push_str(provider);
    for (key, value) in segments {
        out.push('/');
        out.push_str(key);
        out.push('/');
        out.push_str(value);
    }
    out
}

/// Implement `Display`, `FromStr`, and string-backed serde for an ID kind
///
/// The persisted form of every ID is its formatted string, so serialization
/// goes through `id()` and deserialization through the strict `parse`.
#[macro_export]
macro_rules! impl_id_traits {
    ($ty:ty) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::ResourceId::id(self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::ResourceId>::parse(s)
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::ResourceId::id(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::ResourceId>::parse(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}
