//! Read-side helpers over the store
//!
//! The store does no indexing; these are plain scans over its projections.

use serde::Serialize;

use crate::domain::entities::{Project, Workspace};
use crate::domain::store::AppState;
use crate::domain::value_objects::{EnvironmentKind, PermissionLevel, Role};

/// Number of projects shown on the dashboard
pub const RECENT_PROJECTS: usize = 3;

pub fn find_project<'a>(state: &'a AppState, project_id: &str) -> Option<&'a Project> {
    state.projects().iter().find(|p| p.id == project_id)
}

pub fn find_workspace<'a>(state: &'a AppState, workspace_id: &str) -> Option<&'a Workspace> {
    state.workspaces().iter().find(|w| w.id == workspace_id)
}

pub fn projects_in_workspace<'a>(state: &'a AppState, workspace_id: &str) -> Vec<&'a Project> {
    state
        .projects()
        .iter()
        .filter(|p| p.workspace_id == workspace_id)
        .collect()
}

/// Newest first; projects created at the same instant keep list order
pub fn recent_projects(projects: &[Project], limit: usize) -> Vec<&Project> {
    let mut sorted: Vec<&Project> = projects.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub workspace_name: String,
    pub total_projects: usize,
    pub team_members: usize,
    pub environments: usize,
    pub recent: Vec<RecentProject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub member_initials: Vec<char>,
    /// Members beyond the first three
    pub more_members: usize,
}

/// Dashboard figures; `None` when no workspace is selected.
///
/// Counts are taken over the global project list, matching what the
/// projects page shows.
pub fn dashboard_summary(state: &AppState) -> Option<DashboardSummary> {
    let workspace = state.current_workspace()?;
    let projects = state.projects();

    let recent = recent_projects(projects, RECENT_PROJECTS)
        .into_iter()
        .map(|p| RecentProject {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            created_at: p.created_at,
            member_initials: p.members.iter().take(3).map(|m| m.initial()).collect(),
            more_members: p.members.len().saturating_sub(3),
        })
        .collect();

    Some(DashboardSummary {
        workspace_name: workspace.name.clone(),
        total_projects: projects.len(),
        team_members: workspace.members.len(),
        environments: projects.iter().map(|p| p.environments.len()).sum(),
        recent,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub environment_id: String,
    pub kind: EnvironmentKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub member_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// One cell per column; `None` is "No access"
    pub cells: Vec<Option<PermissionLevel>>,
}

/// Member × environment permission matrix for a project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrid {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<GridRow>,
}

pub fn permission_grid(project: &Project) -> PermissionGrid {
    let columns: Vec<GridColumn> = project
        .environments
        .iter()
        .map(|env| GridColumn {
            environment_id: env.id.clone(),
            kind: env.name,
        })
        .collect();

    let rows = project
        .members
        .iter()
        .map(|member| GridRow {
            member_id: member.id.clone(),
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role,
            cells: columns
                .iter()
                .map(|c| member.permission_for(&c.environment_id))
                .collect(),
        })
        .collect();

    PermissionGrid { columns, rows }
}
