//! Demo session data
//!
//! One user who owns one workspace with two projects. Every project has the
//! three standard environments and the owner holds full access to each.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Environment, EnvironmentPermission, Project, ProjectMember, User, Workspace, WorkspaceMember,
};
use crate::domain::ports::Clock;
use crate::domain::store::AppState;
use crate::domain::value_objects::{EnvironmentKind, PermissionLevel, Role};

const DEMO_DESCRIPTION: &str = "AI model excelling in math, coding, and reasoning, \
achieving strong performance with efficient training and fewer resources.";

/// The demo entities before they are loaded into a store.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub user: User,
    pub workspace: Workspace,
    pub projects: Vec<Project>,
}

impl DemoData {
    pub fn new(clock: &dyn Clock) -> Self {
        let now = clock.now();
        let user = User::new("1", "Sarah Chen", "sc@example.com");
        let workspace = Workspace::new("1", "NexaStack", now)
            .with_description("Main workspace for NexaStack team")
            .with_member(WorkspaceMember::for_user("1", &user, Role::Owner));

        let projects = vec![
            demo_project("1", "NexaStack AI", 1, &user, now),
            demo_project("2", "Automation Workflow", 4, &user, now),
        ];

        Self {
            user,
            workspace,
            projects,
        }
    }

    /// Load into `state` through the store mutators, so the projections line
    /// up exactly as they would after live edits.
    pub fn apply(self, state: &mut AppState) {
        state.set_current_user(Some(self.user));
        state.add_workspace(self.workspace.clone());
        state.set_current_workspace(Some(self.workspace));
        for project in self.projects {
            state.add_project(project);
        }
    }
}

/// A fresh store holding the demo session, timestamped from `clock`.
pub fn seed_demo_state_with(clock: &dyn Clock) -> AppState {
    let mut state = AppState::new();
    DemoData::new(clock).apply(&mut state);
    state
}

/// Environment, permission and member ids follow the demo numbering: project
/// "1" owns environments 1-3, project "2" owns 4-6, and the owner's member id
/// matches the project id.
fn demo_project(
    id: &str,
    name: &str,
    first_env: u32,
    owner: &User,
    now: DateTime<Utc>,
) -> Project {
    let environments: Vec<Environment> = EnvironmentKind::ALL
        .iter()
        .zip(first_env..)
        .map(|(kind, n)| Environment {
            id: n.to_string(),
            name: *kind,
            project_id: id.to_string(),
            created_at: now,
        })
        .collect();

    let environment_permissions = environments
        .iter()
        .map(|env| EnvironmentPermission {
            id: env.id.clone(),
            environment_id: env.id.clone(),
            permission: PermissionLevel::FullAccess,
        })
        .collect();

    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: DEMO_DESCRIPTION.to_string(),
        created_at: now,
        workspace_id: "1".to_string(),
        environments,
        members: vec![ProjectMember {
            id: id.to_string(),
            user_id: owner.id.clone(),
            name: owner.name.clone(),
            email: owner.email.clone(),
            role: Role::Owner,
            avatar: None,
            environment_permissions,
        }],
    }
}
