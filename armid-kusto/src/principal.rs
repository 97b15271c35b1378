//! Principal assignments and legacy database principals
//!
//! Database principals (the pre-assignment API) end in a `Role/{role}/FQN/{fqn}`
//! pair, where the FQN packs the AAD principal into one segment value:
//! `aad{type}={objectId};{clientId}`.

use std::fmt;

use armid_core::{
    CaseMode, IdError, IdResult, ParsedId, ResourceId, format_id, impl_id_traits,
};

use crate::ids::{CLUSTERS, DATABASES, PROVIDER_NAMESPACE};

const PRINCIPAL_ASSIGNMENTS: &str = "PrincipalAssignments";
const ROLE: &str = "Role";
const FQN: &str = "FQN";

/// Fully qualified name of an AAD principal
///
/// `principal_type` is the category without the `aad` prefix, e.g. `user`,
/// `group`, or `app`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fqn {
    pub principal_type: String,
    pub object_id: String,
    pub client_id: String,
}

impl Fqn {
    pub fn new(
        principal_type: impl Into<String>,
        object_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            principal_type: principal_type.into(),
            object_id: object_id.into(),
            client_id: client_id.into(),
        }
    }

    /// Decode `aad{type}={objectId};{clientId}`
    pub fn parse(raw: &str) -> IdResult<Self> {
        let malformed = || IdError::MalformedFqn(raw.to_string());

        let parts: Vec<&str> = raw.split('=').collect();
        let [lhs, rhs] = parts.as_slice() else {
            return Err(malformed());
        };
        let principal_type = lhs.strip_prefix("aad").ok_or_else(|| malformed())?;

        let halves: Vec<&str> = rhs.split(';').collect();
        let [object_id, client_id] = halves.as_slice() else {
            return Err(malformed());
        };

        Ok(Self {
            principal_type: principal_type.to_string(),
            object_id: object_id.to_string(),
            client_id: client_id.to_string(),
        })
    }
}

impl fmt::Display for Fqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aad{}={};{}",
            self.principal_type, self.object_id, self.client_id
        )
    }
}

/// ID of a principal assignment scoped to a cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterPrincipalAssignmentId {
    pub subscription_id: String,
    pub resource_group: String,
    pub cluster_name: String,
    pub name: String,
}

impl ClusterPrincipalAssignmentId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        cluster_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            cluster_name: cluster_name.into(),
            name: name.into(),
        }
    }

    fn parse_with(id: &str, mode: CaseMode) -> IdResult<Self> {
        let mut parsed = ParsedId::parse(id)?;
        parsed.expect_provider(PROVIDER_NAMESPACE, mode)?;
        let cluster_name = parsed.pop_segment_with(CLUSTERS, mode)?;
        let name = parsed.pop_segment_with(PRINCIPAL_ASSIGNMENTS, mode)?;
        parsed.expect_no_remaining_segments()?;
        Ok(Self {
            subscription_id: parsed.subscription_id,
            resource_group: parsed.resource_group,
            cluster_name,
            name,
        })
    }
}

impl ResourceId for ClusterPrincipalAssignmentId {
    fn parse(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Sensitive)
    }

    fn parse_insensitively(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Insensitive)
    }

    fn id(&self) -> String {
        format_id(
            &self.subscription_id,
            &self.resource_group,
            PROVIDER_NAMESPACE,
            &[
                (CLUSTERS, &self.cluster_name),
                (PRINCIPAL_ASSIGNMENTS, &self.name),
            ],
        )
    }
}

impl_id_traits!(ClusterPrincipalAssignmentId);

/// ID of a principal assignment scoped to a database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabasePrincipalAssignmentId {
    pub subscription_id: String,
    pub resource_group: String,
    pub cluster_name: String,
    pub database_name: String,
    pub name: String,
}

impl DatabasePrincipalAssignmentId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        cluster_name: impl Into<String>,
        database_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            cluster_name: cluster_name.into(),
            database_name: database_name.into(),
            name: name.into(),
        }
    }

    fn parse_with(id: &str, mode: CaseMode) -> IdResult<Self> {
        let mut parsed = ParsedId::parse(id)?;
        parsed.expect_provider(PROVIDER_NAMESPACE, mode)?;
        let cluster_name = parsed.pop_segment_with(CLUSTERS, mode)?;
        let database_name = parsed.pop_segment_with(DATABASES, mode)?;
        let name = parsed.pop_segment_with(PRINCIPAL_ASSIGNMENTS, mode)?;
        parsed.expect_no_remaining_segments()?;
        Ok(Self {
            subscription_id: parsed.subscription_id,
            resource_group: parsed.resource_group,
            cluster_name,
            database_name,
            name,
        })
    }
}

impl ResourceId for DatabasePrincipalAssignmentId {
    fn parse(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Sensitive)
    }

    fn parse_insensitively(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Insensitive)
    }

    fn id(&self) -> String {
        format_id(
            &self.subscription_id,
            &self.resource_group,
            PROVIDER_NAMESPACE,
            &[
                (CLUSTERS, &self.cluster_name),
                (DATABASES, &self.database_name),
                (PRINCIPAL_ASSIGNMENTS, &self.name),
            ],
        )
    }
}

impl_id_traits!(DatabasePrincipalAssignmentId);

/// ID of a legacy database principal, addressed by role and FQN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabasePrincipalId {
    pub subscription_id: String,
    pub resource_group: String,
    pub cluster_name: String,
    pub database_name: String,
    pub role: String,
    pub fqn: Fqn,
}

impl DatabasePrincipalId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        cluster_name: impl Into<String>,
        database_name: impl Into<String>,
        role: impl Into<String>,
        fqn: Fqn,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            cluster_name: cluster_name.into(),
            database_name: database_name.into(),
            role: role.into(),
            fqn,
        }
    }

    fn parse_with(id: &str, mode: CaseMode) -> IdResult<Self> {
        let mut parsed = ParsedId::parse(id)?;
        parsed.expect_provider(PROVIDER_NAMESPACE, mode)?;
        let cluster_name = parsed.pop_segment_with(CLUSTERS, mode)?;
        let database_name = parsed.pop_segment_with(DATABASES, mode)?;
        let role = parsed.pop_segment_with(ROLE, mode)?;
        let fqn = Fqn::parse(&parsed.pop_segment_with(FQN, mode)?)?;
        parsed.expect_no_remaining_segments()?;
        Ok(Self {
            subscription_id: parsed.subscription_id,
            resource_group: parsed.resource_group,
            cluster_name,
            database_name,
            role,
            fqn,
        })
    }
}

impl ResourceId for DatabasePrincipalId {
    fn parse(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Sensitive)
    }

    fn parse_insensitively(id: &str) -> IdResult<Self> {
        Self::parse_with(id, CaseMode::Insensitive)
    }

    fn id(&self) -> String {
        let fqn = self.fqn.to_string();
        format_id(
            &self.subscription_id,
            &self.resource_group,
            PROVIDER_NAMESPACE,
            &[
                (CLUSTERS, &self.cluster_name),
                (DATABASES, &self.database_name),
                (ROLE, &self.role),
                (FQN, &fqn),
            ],
        )
    }
}

impl_id_traits!(DatabasePrincipalId);
