//! View Models
//!
//! Resolves a [`Route`] against the store into a serializable view. The
//! binary renders these as text, or prints them as JSON with `--json`.

use serde::Serialize;

use crate::domain::entities::{Environment, Project, WorkspaceMember};
use crate::domain::services::{dashboard_summary, find_project, permission_grid, DashboardSummary, PermissionGrid};
use crate::domain::store::AppState;

use super::routes::Route;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewModel {
    Landing,
    Login,
    Signup,
    Dashboard(DashboardSummary),
    Projects {
        projects: Vec<ProjectCard>,
    },
    ProjectDetails(ProjectDetails),
    Members {
        #[serde(rename = "workspaceName")]
        workspace_name: String,
        members: Vec<MemberRow>,
    },
    Settings(SettingsView),
    /// A shell view was requested with no workspace selected
    NoWorkspace,
    ProjectNotFound {
        #[serde(rename = "projectId")]
        project_id: String,
    },
    NotFound {
        path: String,
    },
}

impl ViewModel {
    /// Resolve `route` against `state`.
    pub fn resolve(route: &Route, state: &AppState) -> Self {
        match route {
            Route::Landing => ViewModel::Landing,
            Route::Login => ViewModel::Login,
            Route::Signup => ViewModel::Signup,
            Route::Dashboard => dashboard_summary(state)
                .map(ViewModel::Dashboard)
                .unwrap_or(ViewModel::NoWorkspace),
            Route::Projects => ViewModel::Projects {
                projects: state.projects().iter().map(ProjectCard::from).collect(),
            },
            Route::ProjectDetails { project_id } => match find_project(state, project_id) {
                Some(project) => ViewModel::ProjectDetails(ProjectDetails::from(project)),
                None => ViewModel::ProjectNotFound {
                    project_id: project_id.clone(),
                },
            },
            Route::Members => match state.current_workspace() {
                Some(workspace) => ViewModel::Members {
                    workspace_name: workspace.name.clone(),
                    members: workspace.members.iter().map(MemberRow::from).collect(),
                },
                None => ViewModel::NoWorkspace,
            },
            Route::Settings => match state.current_workspace() {
                Some(workspace) => ViewModel::Settings(SettingsView {
                    workspace_id: workspace.id.clone(),
                    workspace_name: workspace.name.clone(),
                    description: workspace.description.clone(),
                    members: workspace.members.len(),
                    projects: workspace.projects.len(),
                }),
                None => ViewModel::NoWorkspace,
            },
            Route::NotFound { path } => ViewModel::NotFound { path: path.clone() },
        }
    }

    /// Whether the view represents a failed lookup.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            ViewModel::NoWorkspace | ViewModel::ProjectNotFound { .. } | ViewModel::NotFound { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub environments: usize,
    pub members: usize,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            created_at: project.created_at,
            environments: project.environments.len(),
            members: project.members.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub environments: Vec<Environment>,
    pub access: PermissionGrid,
}

impl From<&Project> for ProjectDetails {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            created_at: project.created_at,
            environments: project.environments.clone(),
            access: permission_grid(project),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: crate::domain::value_objects::Role,
    pub initial: char,
    /// Owners cannot be removed
    pub removable: bool,
}

impl From<&WorkspaceMember> for MemberRow {
    fn from(member: &WorkspaceMember) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role,
            initial: member.initial(),
            removable: member.role.is_removable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub workspace_id: String,
    pub workspace_name: String,
    pub description: Option<String>,
    pub members: usize,
    pub projects: usize,
}
