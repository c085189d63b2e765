//! Role enforcement for use cases

use tracing::warn;

use crate::domain::entities::{Project, Workspace};
use crate::domain::policies::{role_permits, Action};
use crate::domain::services::find_workspace;
use crate::domain::store::AppState;
use crate::domain::value_objects::Role;
use crate::error::{ConsoleError, ConsoleResult};

/// Whether use cases check the acting member's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessMode {
    /// Any signed-in user may do anything
    #[default]
    Open,
    EnforceRoles,
}

impl AccessMode {
    pub fn from_config(enforce_roles: bool) -> Self {
        if enforce_roles {
            AccessMode::EnforceRoles
        } else {
            AccessMode::Open
        }
    }

    pub fn authorize(
        &self,
        state: &AppState,
        scope: AccessScope<'_>,
        action: Action,
    ) -> ConsoleResult<()> {
        if *self == AccessMode::Open {
            return Ok(());
        }

        let role = acting_role(state, scope);
        if role_permits(role, action) {
            Ok(())
        } else {
            warn!(%role, %action, "rejected by role policy");
            Err(ConsoleError::Forbidden { role, action })
        }
    }
}

/// What the acting user is operating on
#[derive(Debug, Clone, Copy)]
pub enum AccessScope<'a> {
    Workspace(&'a Workspace),
    Project(&'a Project),
}

/// The current user's role for `scope`.
///
/// A project membership wins over the workspace membership. Users with no
/// membership at all, and sessions with no user, act as viewers.
pub fn acting_role(state: &AppState, scope: AccessScope<'_>) -> Role {
    let Some(user) = state.current_user() else {
        return Role::Viewer;
    };

    let workspace_role = |workspace: &Workspace| {
        workspace.member_for_user(&user.id).map(|m| m.role)
    };

    let role = match scope {
        AccessScope::Workspace(workspace) => workspace_role(workspace),
        AccessScope::Project(project) => project
            .members
            .iter()
            .find(|m| m.user_id == user.id)
            .map(|m| m.role)
            .or_else(|| find_workspace(state, &project.workspace_id).and_then(workspace_role))
            .or_else(|| state.current_workspace().and_then(workspace_role)),
    };

    role.unwrap_or(Role::Viewer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{User, WorkspaceMember};
    use crate::infrastructure::{seed_demo_state_with, FixedClock};

    fn seeded_as(user: User) -> AppState {
        let mut state = seed_demo_state_with(&FixedClock::epoch());
        state.set_current_user(Some(user));
        state
    }

    #[test]
    fn open_mode_allows_everything() {
        let state = seeded_as(User::new("stranger", "Sam Stone", "sam@example.com"));
        let workspace = state.current_workspace().unwrap().clone();
        assert!(AccessMode::Open
            .authorize(
                &state,
                AccessScope::Workspace(&workspace),
                Action::InviteWorkspaceMember
            )
            .is_ok());
    }

    #[test]
    fn owner_resolves_from_project_membership() {
        let state = seed_demo_state_with(&FixedClock::epoch());
        let project = state.projects()[0].clone();
        assert_eq!(acting_role(&state, AccessScope::Project(&project)), Role::Owner);
    }

    #[test]
    fn project_role_falls_back_to_workspace_role() {
        let viewer = User::new("v1", "Val Viewer", "val@example.com");
        let mut state = seeded_as(viewer.clone());
        state.add_workspace_member("1", WorkspaceMember::for_user("m9", &viewer, Role::Viewer));

        let project = state.projects()[0].clone();
        assert_eq!(acting_role(&state, AccessScope::Project(&project)), Role::Viewer);
    }

    #[test]
    fn enforced_viewer_is_forbidden() {
        let state = seeded_as(User::new("stranger", "Sam Stone", "sam@example.com"));
        let workspace = state.current_workspace().unwrap().clone();
        let err = AccessMode::EnforceRoles
            .authorize(&state, AccessScope::Workspace(&workspace), Action::CreateProject)
            .unwrap_err();
        assert!(matches!(
            err,
            ConsoleError::Forbidden {
                role: Role::Viewer,
                action: Action::CreateProject
            }
        ));
    }

    #[test]
    fn no_user_acts_as_viewer() {
        let mut state = seed_demo_state_with(&FixedClock::epoch());
        state.set_current_user(None);
        let project = state.projects()[0].clone();
        assert_eq!(acting_role(&state, AccessScope::Project(&project)), Role::Viewer);
    }
}
