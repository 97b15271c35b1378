//! Cluster, database, data connection, and table IDs
//!
//! Shapes, leaf first:
//!
//! ```text
//! .../providers/Microsoft.Kusto/Clusters/{cluster}
//! .../providers/Microsoft.Kusto/Clusters/{cluster}/Databases/{db}
//! .../providers/Microsoft.Kusto/Clusters/{cluster}/Databases/{db}/DataConnections/{name}
//! .../providers/Microsoft.Kusto/Clusters/{cluster}/Databases/{db}/Tables/{name}
//! ```

use armid_core::{CaseMode, IdResult, ParsedId, ResourceId, format_id, impl_id_traits};

pub const PROVIDER_NAMESPACE: &str = "Microsoft.Kusto";

pub(crate) const CLUSTERS: &str = "Clusters";
pub(crate) const DATABASES: &str = "Databases";
const DATA_CONNECTIONS: &str = "DataConnections";
const TABLES: &str = "Tables";

/// ID of a Kusto cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterId {
    pub subscription_id: String,
    pub resource_group: String,
    pub name: String,
}

impl ClusterId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            name: name.into(),
        }
    }

    fn parse_with(id: &str, mode: CaseMode) -> IdResult<Self> {
        let mut parsed = ParsedId::parse(id)?;
        parsed.expect_provider(PROVIDER_NAMESPACE, mode)?;
        let name = parsed.pop_segment_with(CLUSTERS, mode)?;
        parsed.expect_no_remaining_segments()?;
        Ok(Self {
            subscription_id: parsed.subscription_id,
            resource_group: parsed.resource_group,
            name,
        })
    }
}

impl ResourceId for ClusterId {
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
            &[(CLUSTERS, &self.name)],
        )
    }
}

impl_id_traits!(ClusterId);

/// ID of a database within a Kusto cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseId {
    pub subscription_id: String,
    pub resource_group: String,
    pub cluster_name: String,
    pub name: String,
}

impl DatabaseId {
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
        let name = parsed.pop_segment_with(DATABASES, mode)?;
        parsed.expect_no_remaining_segments()?;
        Ok(Self {
            subscription_id: parsed.subscription_id,
            resource_group: parsed.resource_group,
            cluster_name,
            name,
        })
    }
}

impl ResourceId for DatabaseId {
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
            &[(CLUSTERS, &self.cluster_name), (DATABASES, &self.name)],
        )
    }
}

impl_id_traits!(DatabaseId);

/// ID of a data connection feeding a Kusto database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConnectionId {
    pub subscription_id: String,
    pub resource_group: String,
    pub cluster_name: String,
    pub database_name: String,
    pub name: String,
}

impl DataConnectionId {
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
        let name = parsed.pop_segment_with(DATA_CONNECTIONS, mode)?;
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

impl ResourceId for DataConnectionId {
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
                (DATA_CONNECTIONS, &self.name),
            ],
        )
    }
}

impl_id_traits!(DataConnectionId);

/// ID of a table within a Kusto database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableId {
    pub subscription_id: String,
    pub resource_group: String,
    pub cluster_name: String,
    pub database_name: String,
    pub name: String,
}

impl TableId {
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
        let name = parsed.pop_segment_with(TABLES, mode)?;
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

impl ResourceId for TableId {
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
                (TABLES, &self.name),
            ],
        )
    }
}

impl_id_traits!(TableId);

#[cfg(test)]
mod tests {
    use super::*;
    use armid_core::IdError;

    const SUB: &str = "12345678-1234-5678-1234-123456789012";

    #[test]
    fn cluster_id_round_trips() {
        let id = ClusterId::new(SUB, "rg1", "cluster1");
        assert_eq!(
            id.id(),
            format!(
                "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.Kusto/Clusters/cluster1"
            )
        );
        assert_eq!(ClusterId::parse(&id.id()).unwrap(), id);
    }

    #[test]
    fn database_id_round_trips() {
        let id = DatabaseId::new(SUB, "rg1", "cluster1", "db1");
        let decoded = DatabaseId::parse(&id.id()).unwrap();
        assert_eq!(decoded.cluster_name, "cluster1");
        assert_eq!(decoded.name, "db1");
        assert_eq!(decoded, id);
    }

    #[test]
    fn data_connection_id_round_trips_three_levels_deep() {
        let id = DataConnectionId::new(SUB, "rg1", "cluster1", "db1", "eventhub1");
        assert_eq!(
            id.id(),
            format!(
                "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.Kusto/Clusters/cluster1/Databases/db1/DataConnections/eventhub1"
            )
        );
        assert_eq!(DataConnectionId::parse(&id.id()).unwrap(), id);
    }

    #[test]
    fn table_id_round_trips() {
        let id = TableId::new(SUB, "rg1", "cluster1", "db1", "table1");
        assert_eq!(TableId::parse(&id.id()).unwrap(), id);
    }

    #[test]
    fn segment_casing_is_canonical_capitalized() {
        let lowercased = ClusterId::new(SUB, "rg1", "cluster1")
            .id()
            .replace("Clusters", "clusters");
        assert!(matches!(
            ClusterId::parse(&lowercased),
            Err(IdError::SegmentNotFound(_))
        ));
        let id = ClusterId::parse_insensitively(&lowercased).unwrap();
        assert!(id.id().contains("/Clusters/"));
    }

    #[test]
    fn cluster_id_rejects_child_resource_paths() {
        let id = DatabaseId::new(SUB, "rg1", "cluster1", "db1").id();
        assert!(matches!(
            ClusterId::parse(&id),
            Err(IdError::UnexpectedExtraSegments(ref keys)) if keys == &vec!["Databases".to_string()]
        ));
    }

    #[test]
    fn database_id_requires_its_parent_cluster() {
        let id = format!(
            "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.Kusto/Databases/db1"
        );
        assert!(matches!(
            DatabaseId::parse(&id),
            Err(IdError::SegmentNotFound(ref key)) if key == "Clusters"
        ));
    }

    #[test]
    fn data_connection_id_serde_round_trips() {
        let id = DataConnectionId::new(SUB, "rg1", "cluster1", "db1", "eventhub1");
        let json = serde_json::to_string(&id).unwrap();
        let back: DataConnectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
