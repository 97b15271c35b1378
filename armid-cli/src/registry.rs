//! Registry of decodable ID kinds
//!
//! Each kind knows how to decode an ID string (strictly or insensitively)
//! into a flat list of named fields for display.

use armid_core::{IdError, ResourceId};
use armid_databoxedge::{DeviceId, OrderId};
use armid_desktopvirtualization::{
    ApplicationGroupId, HostPoolId, WorkspaceApplicationGroupAssociationId, WorkspaceId,
};
use armid_kusto::{
    ClusterId, ClusterPrincipalAssignmentId, DataConnectionId, DatabaseId,
    DatabasePrincipalAssignmentId, DatabasePrincipalId, TableId,
};

/// Decoded fields in display order
pub type Fields = Vec<(&'static str, String)>;

/// How an ID kind presents its decoded fields
trait Describe: ResourceId {
    fn fields(&self) -> Fields;
}

fn common(subscription_id: &str, resource_group: &str) -> Fields {
    vec![
        ("subscription_id", subscription_id.to_string()),
        ("resource_group", resource_group.to_string()),
    ]
}

impl Describe for DeviceId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for OrderId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("device_name", self.device_name.clone()));
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for HostPoolId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for WorkspaceId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for ApplicationGroupId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for WorkspaceApplicationGroupAssociationId {
    fn fields(&self) -> Fields {
        vec![
            ("workspace_id", self.left.id()),
            ("application_group_id", self.right.id()),
        ]
    }
}

impl Describe for ClusterId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for DatabaseId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("cluster_name", self.cluster_name.clone()));
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for DataConnectionId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("cluster_name", self.cluster_name.clone()));
        f.push(("database_name", self.database_name.clone()));
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for TableId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("cluster_name", self.cluster_name.clone()));
        f.push(("database_name", self.database_name.clone()));
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for ClusterPrincipalAssignmentId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("cluster_name", self.cluster_name.clone()));
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for DatabasePrincipalAssignmentId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("cluster_name", self.cluster_name.clone()));
        f.push(("database_name", self.database_name.clone()));
        f.push(("name", self.name.clone()));
        f
    }
}

impl Describe for DatabasePrincipalId {
    fn fields(&self) -> Fields {
        let mut f = common(&self.subscription_id, &self.resource_group);
        f.push(("cluster_name", self.cluster_name.clone()));
        f.push(("database_name", self.database_name.clone()));
        f.push(("role", self.role.clone()));
        f.push(("principal_type", self.fqn.principal_type.clone()));
        f.push(("object_id", self.fqn.object_id.clone()));
        f.push(("client_id", self.fqn.client_id.clone()));
        f
    }
}

fn try_decode<T: Describe>(id: &str, insensitive: bool) -> Result<Fields, IdError> {
    let decoded = if insensitive {
        T::parse_insensitively(id)?
    } else {
        T::parse(id)?
    };
    Ok(decoded.fields())
}

/// A registered ID kind
pub struct Decoder {
    pub kind: &'static str,
    pub template: &'static str,
    parse: fn(&str, bool) -> Result<Fields, IdError>,
}

impl Decoder {
    pub fn decode(&self, id: &str, insensitive: bool) -> Result<Fields, IdError> {
        (self.parse)(id, insensitive)
    }
}

/// All kinds this tool can decode, most specific (deepest path) first so
/// auto-detection never stops at a parent kind
pub fn decoders() -> Vec<Decoder> {
    vec![
        Decoder {
            kind: "databoxedge.order",
            template: ".../providers/Microsoft.DataBoxEdge/dataBoxEdgeDevices/{device}/orders/{name}",
            parse: try_decode::<OrderId>,
        },
        Decoder {
            kind: "databoxedge.device",
            template: ".../providers/Microsoft.DataBoxEdge/dataBoxEdgeDevices/{name}",
            parse: try_decode::<DeviceId>,
        },
        Decoder {
            kind: "desktopvirtualization.workspace-application-group-association",
            template: "{workspaceId}|{applicationGroupId}",
            parse: try_decode::<WorkspaceApplicationGroupAssociationId>,
        },
        Decoder {
            kind: "desktopvirtualization.hostpool",
            template: ".../providers/Microsoft.DesktopVirtualization/hostpools/{name}",
            parse: try_decode::<HostPoolId>,
        },
        Decoder {
            kind: "desktopvirtualization.workspace",
            template: ".../providers/Microsoft.DesktopVirtualization/workspaces/{name}",
            parse: try_decode::<WorkspaceId>,
        },
        Decoder {
            kind: "desktopvirtualization.applicationgroup",
            template: ".../providers/Microsoft.DesktopVirtualization/applicationgroups/{name}",
            parse: try_decode::<ApplicationGroupId>,
        },
        Decoder {
            kind: "kusto.database-principal",
            template: ".../providers/Microsoft.Kusto/Clusters/{cluster}/Databases/{db}/Role/{role}/FQN/{fqn}",
            parse: try_decode::<DatabasePrincipalId>,
        },
        Decoder {
            kind: "kusto.database-principal-assignment",
            template: ".../providers/Microsoft.Kusto/Clusters/{cluster}/Databases/{db}/PrincipalAssignments/{name}",
            parse: try_decode::<DatabasePrincipalAssignmentId>,
        },
        Decoder {
            kind: "kusto.cluster-principal-assignment",
            template: ".../providers/Microsoft.Kusto/Clusters/{cluster}/PrincipalAssignments/{name}",
            parse: try_decode::<ClusterPrincipalAssignmentId>,
        },
        Decoder {
            kind: "kusto.data-connection",
            template: ".../providers/Microsoft.Kusto/Clusters/{cluster}/Databases/{db}/DataConnections/{name}",
            parse: try_decode::<DataConnectionId>,
        },
        Decoder {
            kind: "kusto.table",
            template: ".../providers/Microsoft.Kusto/Clusters/{cluster}/Databases/{db}/Tables/{name}",
            parse: try_decode::<TableId>,
        },
        Decoder {
            kind: "kusto.database",
            template: ".../providers/Microsoft.Kusto/Clusters/{cluster}/Databases/{db}",
            parse: try_decode::<DatabaseId>,
        },
        Decoder {
            kind: "kusto.cluster",
            template: ".../providers/Microsoft.Kusto/Clusters/{cluster}",
            parse: try_decode::<ClusterId>,
        },
    ]
}
