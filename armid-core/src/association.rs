//! Composite IDs for pseudo-resources with no native ARM path
//!
//! Some resources model a many-to-many link between two real ARM resources
//! (e.g. a Workspace to ApplicationGroup association). Those carry a
//! synthetic ID: the two formatted resource IDs joined by `|`.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{IdError, IdResult};
use crate::id::ResourceId;

/// Split an association ID into its two halves
///
/// Fails unless splitting on `|` yields exactly two non-empty parts.
pub fn split_association(id: &str) -> IdResult<(&str, &str)> {
    let parts: Vec<&str> = id.split('|').collect();
    match parts.as_slice() {
        [left, right] if !left.is_empty() && !right.is_empty() => Ok((left, right)),
        _ => Err(IdError::MalformedAssociationId(id.to_string())),
    }
}

/// An ordered pair of resource IDs serialized as `left|right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationId<L, R> {
    pub left: L,
    pub right: R,
}

impl<L, R> AssociationId<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: ResourceId, R: ResourceId> ResourceId for AssociationId<L, R> {
    fn parse(id: &str) -> IdResult<Self> {
        let (left, right) = split_association(id)?;
        // the left half is decoded first, so its error wins
        Ok(Self {
            left: L::parse(left)?,
            right: R::parse(right)?,
        })
    }

    fn parse_insensitively(id: &str) -> IdResult<Self> {
        let (left, right) = split_association(id)?;
        Ok(Self {
            left: L::parse_insensitively(left)?,
            right: R::parse_insensitively(right)?,
        })
    }

    fn id(&self) -> String {
        format!("{}|{}", self.left.id(), self.right.id())
    }
}

impl<L: ResourceId, R: ResourceId> fmt::Display for AssociationId<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl<L: ResourceId, R: ResourceId> FromStr for AssociationId<L, R> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<L: ResourceId, R: ResourceId> Serialize for AssociationId<L, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id())
    }
}

impl<'de, L: ResourceId, R: ResourceId> Deserialize<'de> for AssociationId<L, R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal ID kind for exercising the generic codec
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct FakeId {
        name: String,
        insensitive: bool,
    }

    impl ResourceId for FakeId {
        fn parse(id: &str) -> IdResult<Self> {
            if id.starts_with("fake:") {
                Ok(Self {
                    name: id["fake:".len()..].to_string(),
                    insensitive: false,
                })
            } else {
                Err(IdError::MalformedId(id.to_string()))
            }
        }

        fn parse_insensitively(id: &str) -> IdResult<Self> {
            let mut parsed = Self::parse(id)?;
            parsed.insensitive = true;
            Ok(parsed)
        }

        fn id(&self) -> String {
            format!("fake:{}", self.name)
        }
    }

    type FakePair = AssociationId<FakeId, FakeId>;

    #[test]
    fn association_round_trips() {
        let pair = FakePair::parse("fake:a|fake:b").unwrap();
        assert_eq!(pair.left.name, "a");
        assert_eq!(pair.right.name, "b");
        assert_eq!(pair.id(), "fake:a|fake:b");
    }

    #[test]
    fn association_requires_exactly_two_parts() {
        for id in ["", "fake:a", "fake:a|fake:b|fake:c", "|fake:b", "fake:a|"] {
            assert_eq!(
                FakePair::parse(id).unwrap_err(),
                IdError::MalformedAssociationId(id.to_string()),
                "expected {id:?} to be rejected"
            );
        }
    }

    #[test]
    fn left_decode_error_wins() {
        let err = FakePair::parse("bogus:a|also-bogus:b").unwrap_err();
        assert_eq!(err, IdError::MalformedId("bogus:a".to_string()));
    }

    #[test]
    fn association_serializes_as_its_string_form() {
        let pair = FakePair::new(
            FakeId {
                name: "a".to_string(),
                insensitive: false,
            },
            FakeId {
                name: "b".to_string(),
                insensitive: false,
            },
        );
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"fake:a|fake:b\"");
        let back: FakePair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }

    #[test]
    fn insensitive_parse_is_forwarded_to_both_halves() {
        let pair = FakePair::parse_insensitively("fake:a|fake:b").unwrap();
        assert!(pair.left.insensitive);
        assert!(pair.right.insensitive);
    }
}
