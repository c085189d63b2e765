//! Membership Use Cases
//!
//! - `InviteMemberUseCase` - Add a member to a workspace
//! - `AddProjectMemberUseCase` - Add a member to a project with per-environment access

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{ProjectMember, WorkspaceMember};
use crate::domain::policies::Action;
use crate::domain::ports::IdGenerator;
use crate::domain::services::{build_project_member, find_project, find_workspace, MemberProfile};
use crate::domain::store::AppState;
use crate::domain::value_objects::PermissionLevel;
use crate::error::{ConsoleError, ConsoleResult};

use super::access::{AccessMode, AccessScope};
use super::forms::MemberInvite;

pub struct InviteMemberUseCase {
    ids: Arc<dyn IdGenerator>,
    access: AccessMode,
}

impl InviteMemberUseCase {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            access: AccessMode::default(),
        }
    }

    pub fn with_access(mut self, access: AccessMode) -> Self {
        self.access = access;
        self
    }

    /// Invite someone to `workspace_id`. The invitee gets a fresh user id.
    pub fn execute(
        &self,
        state: &mut AppState,
        workspace_id: &str,
        invite: &MemberInvite,
    ) -> ConsoleResult<WorkspaceMember> {
        invite.validate()?;

        let Some(workspace) = find_workspace(state, workspace_id) else {
            warn!(workspace = workspace_id, "invite to unknown workspace");
            return Err(ConsoleError::WorkspaceNotFound {
                id: workspace_id.to_string(),
            });
        };
        self.access.authorize(
            state,
            AccessScope::Workspace(workspace),
            Action::InviteWorkspaceMember,
        )?;

        let member = WorkspaceMember {
            id: self.ids.next_id(),
            user_id: self.ids.next_id(),
            name: invite.name.clone(),
            email: invite.email.clone(),
            role: invite.role,
            avatar: None,
        };
        state.add_workspace_member(workspace_id, member.clone());

        info!(workspace = workspace_id, member = %member.id, role = %member.role, "member invited");
        Ok(member)
    }
}

pub struct AddProjectMemberUseCase {
    ids: Arc<dyn IdGenerator>,
    access: AccessMode,
}

impl AddProjectMemberUseCase {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            access: AccessMode::default(),
        }
    }

    pub fn with_access(mut self, access: AccessMode) -> Self {
        self.access = access;
        self
    }

    /// Add someone to `project_id`.
    ///
    /// `overrides` maps environment ids to levels; every other environment
    /// gets the role's default level.
    pub fn execute(
        &self,
        state: &mut AppState,
        project_id: &str,
        invite: &MemberInvite,
        overrides: &HashMap<String, PermissionLevel>,
    ) -> ConsoleResult<ProjectMember> {
        invite.validate()?;

        let Some(project) = find_project(state, project_id) else {
            warn!(project = project_id, "member added to unknown project");
            return Err(ConsoleError::ProjectNotFound {
                id: project_id.to_string(),
            });
        };

        let mut foreign: Vec<&String> = overrides
            .keys()
            .filter(|env_id| project.environment(env_id).is_none())
            .collect();
        foreign.sort();
        if let Some(environment_id) = foreign.first() {
            warn!(project = project_id, environment = %environment_id, "permission for foreign environment");
            return Err(ConsoleError::EnvironmentNotInProject {
                environment_id: (*environment_id).clone(),
                project_id: project_id.to_string(),
            });
        }

        self.access
            .authorize(state, AccessScope::Project(project), Action::AddProjectMember)?;

        let profile = MemberProfile {
            user_id: self.ids.next_id(),
            name: invite.name.clone(),
            email: invite.email.clone(),
            avatar: None,
        };
        let member = build_project_member(project, &profile, invite.role, overrides, self.ids.as_ref());
        state.add_project_member(project_id, member.clone());

        info!(project = project_id, member = %member.id, role = %member.role, "project member added");
        Ok(member)
    }
}
