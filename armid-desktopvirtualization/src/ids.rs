//! Resource IDs under `Microsoft.DesktopVirtualization`

use armid_core::{CaseMode, IdResult, ParsedId, ResourceId, format_id, impl_id_traits};

pub const PROVIDER_NAMESPACE: &str = "Microsoft.DesktopVirtualization";

const HOST_POOLS: &str = "hostpools";
const WORKSPACES: &str = "workspaces";
const APPLICATION_GROUPS: &str = "applicationgroups";

// The three kinds in this namespace share one path depth, so the codec is
// written once and parameterized on the canonical segment name.
macro_rules! desktop_virtualization_id {
    ($(#[$doc:meta])* $ty:ident, $segment:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            pub subscription_id: String,
            pub resource_group: String,
            pub name: String,
        }

        impl $ty {
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
                let name = parsed.pop_segment_with($segment, mode)?;
                parsed.expect_no_remaining_segments()?;
                Ok(Self {
                    subscription_id: parsed.subscription_id,
                    resource_group: parsed.resource_group,
                    name,
                })
            }
        }

        impl ResourceId for $ty {
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
                    &[($segment, &self.name)],
                )
            }
        }

        impl_id_traits!($ty);
    };
}

desktop_virtualization_id!(
    /// ID of a session host pool
    HostPoolId,
    HOST_POOLS
);

desktop_virtualization_id!(
    /// ID of a workspace
    WorkspaceId,
    WORKSPACES
);

desktop_virtualization_id!(
    /// ID of an application group
    ApplicationGroupId,
    APPLICATION_GROUPS
);

#[cfg(test)]
mod tests {
    use super::*;
    use armid_core::IdError;

    const SUB: &str = "12345678-1234-5678-1234-123456789012";

    fn app_group_id(segment: &str) -> String {
        format!(
            "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.DesktopVirtualization/{segment}/appGroup1"
        )
    }

    #[test]
    fn host_pool_id_round_trips() {
        let id = HostPoolId::new(SUB, "rg1", "pool1");
        assert_eq!(
            id.id(),
            format!(
                "/subscriptions/{SUB}/resourceGroups/rg1/providers/Microsoft.DesktopVirtualization/hostpools/pool1"
            )
        );
        assert_eq!(HostPoolId::parse(&id.id()).unwrap(), id);
    }

    #[test]
    fn workspace_id_round_trips() {
        let id = WorkspaceId::new(SUB, "rg1", "workspace1");
        assert_eq!(WorkspaceId::parse(&id.id()).unwrap(), id);
    }

    #[test]
    fn strict_parse_rejects_noncanonical_casing() {
        for segment in ["ApplicationGroups", "APPLICATIONGROUPS", "ApPlIcAtIoNgRoUpS"] {
            assert!(matches!(
                ApplicationGroupId::parse(&app_group_id(segment)),
                Err(IdError::SegmentNotFound(_))
            ));
        }
    }

    #[test]
    fn insensitive_parse_accepts_any_casing_and_reformats_canonically() {
        let canonical = ApplicationGroupId::parse(&app_group_id("applicationgroups")).unwrap();
        for segment in ["APPLICATIONGROUPS", "ApPlIcAtIoNgRoUpS", "applicationgroups"] {
            let id = ApplicationGroupId::parse_insensitively(&app_group_id(segment)).unwrap();
            // every casing variant of the same logical ID decodes identically
            assert_eq!(id, canonical);
            assert_eq!(id.id(), app_group_id("applicationgroups"));
        }
    }

    #[test]
    fn leaf_name_casing_is_preserved_verbatim() {
        let id = ApplicationGroupId::parse_insensitively(&app_group_id("APPLICATIONGROUPS")).unwrap();
        assert_eq!(id.name, "appGroup1");
        assert_eq!(id.resource_group, "rg1");
    }

    #[test]
    fn kinds_do_not_decode_each_other() {
        let id = app_group_id("applicationgroups");
        assert!(WorkspaceId::parse(&id).is_err());
        assert!(HostPoolId::parse(&id).is_err());
    }
}
