//! Workspace to ApplicationGroup association
//!
//! The association has no ARM path of its own; its ID is the two member IDs
//! joined by `|`, workspace first.

use armid_core::AssociationId;

use crate::ids::{ApplicationGroupId, WorkspaceId};

pub type WorkspaceApplicationGroupAssociationId = AssociationId<WorkspaceId, ApplicationGroupId>;

/// Pair a workspace with an application group
pub fn associate(
    workspace: WorkspaceId,
    application_group: ApplicationGroupId,
) -> WorkspaceApplicationGroupAssociationId {
    AssociationId::new(workspace, application_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use armid_core::{IdError, ResourceId};

    const SUB: &str = "12345678-1234-5678-1234-123456789012";

    fn workspace() -> WorkspaceId {
        WorkspaceId::new(SUB, "rg1", "workspace1")
    }

    fn app_group() -> ApplicationGroupId {
        ApplicationGroupId::new(SUB, "rg1", "appGroup1")
    }

    #[test]
    fn association_round_trips_without_field_loss() {
        let id = associate(workspace(), app_group());
        let formatted = id.id();
        assert_eq!(formatted, format!("{}|{}", workspace().id(), app_group().id()));

        let decoded = WorkspaceApplicationGroupAssociationId::parse(&formatted).unwrap();
        assert_eq!(decoded.left, workspace());
        assert_eq!(decoded.right, app_group());
    }

    #[test]
    fn association_requires_exactly_two_parts() {
        let ws = workspace().id();
        let ag = app_group().id();
        for id in [
            "".to_string(),
            ws.clone(),
            format!("{ws}|{ag}|{ag}"),
            format!("|{ag}"),
            format!("{ws}|"),
        ] {
            assert!(matches!(
                WorkspaceApplicationGroupAssociationId::parse(&id),
                Err(IdError::MalformedAssociationId(_))
            ));
        }
    }

    #[test]
    fn halves_must_decode_as_their_expected_kinds() {
        // both halves workspaces: the right half fails as an application group
        let id = format!("{}|{}", workspace().id(), workspace().id());
        assert!(matches!(
            WorkspaceApplicationGroupAssociationId::parse(&id),
            Err(IdError::SegmentNotFound(_))
        ));
    }

    #[test]
    fn insensitive_parse_covers_both_halves() {
        let id = format!("{}|{}", workspace().id(), app_group().id())
            .replace("workspaces", "Workspaces")
            .replace("applicationgroups", "APPLICATIONGROUPS");
        let decoded = WorkspaceApplicationGroupAssociationId::parse_insensitively(&id).unwrap();
        assert_eq!(decoded.left, workspace());
        assert_eq!(decoded.right, app_group());
    }
}
