//! Consistency checker for the entity graph
//!
//! Reports every broken reference or diverging projection in an `AppState`.
//! The store itself never calls this; it exists for diagnostics and tests.

use std::fmt;

use serde::Serialize;

use crate::domain::entities::Project;
use crate::domain::store::AppState;

/// Which denormalized copy of the project list diverged from the global list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    CurrentWorkspace,
    WorkspaceList,
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::CurrentWorkspace => f.write_str("current workspace"),
            Projection::WorkspaceList => f.write_str("workspace list"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ConsistencyIssue {
    /// `Project.workspace_id` names no workspace in the workspace list
    UnknownWorkspace {
        project_id: String,
        workspace_id: String,
    },
    /// `Environment.project_id` does not point back at its owning project
    EnvironmentBackReference {
        project_id: String,
        environment_id: String,
        points_to: String,
    },
    /// A member holds a permission on an environment outside its project
    ForeignPermission {
        project_id: String,
        member_id: String,
        environment_id: String,
    },
    /// A project with no members at all
    NoMembers { project_id: String },
    /// The projection is missing a project present in the global list
    MissingFromProjection {
        project_id: String,
        projection: Projection,
    },
    /// The projection holds a project the global list does not have
    MissingFromGlobal {
        project_id: String,
        projection: Projection,
    },
    /// Same id, different field values
    Diverged {
        project_id: String,
        projection: Projection,
    },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyIssue::UnknownWorkspace {
                project_id,
                workspace_id,
            } => write!(
                f,
                "project {} references unknown workspace {}",
                project_id, workspace_id
            ),
            ConsistencyIssue::EnvironmentBackReference {
                project_id,
                environment_id,
                points_to,
            } => write!(
                f,
                "environment {} of project {} points to project {}",
                environment_id, project_id, points_to
            ),
            ConsistencyIssue::ForeignPermission {
                project_id,
                member_id,
                environment_id,
            } => write!(
                f,
                "member {} of project {} has a permission on foreign environment {}",
                member_id, project_id, environment_id
            ),
            ConsistencyIssue::NoMembers { project_id } => {
                write!(f, "project {} has no members", project_id)
            }
            ConsistencyIssue::MissingFromProjection {
                project_id,
                projection,
            } => write!(f, "project {} is missing from the {}", project_id, projection),
            ConsistencyIssue::MissingFromGlobal {
                project_id,
                projection,
            } => write!(
                f,
                "project {} is in the {} but not in the global list",
                project_id, projection
            ),
            ConsistencyIssue::Diverged {
                project_id,
                projection,
            } => write!(
                f,
                "project {} in the {} differs from the global list",
                project_id, projection
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub issues: Vec<ConsistencyIssue>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn check_consistency(state: &AppState) -> ConsistencyReport {
    let mut issues = Vec::new();

    for project in state.projects() {
        check_references(state, project, &mut issues);
    }

    if let Some(current) = state.current_workspace() {
        // Projections only have to agree when the current workspace is listed.
        if let Some(listed) = state.workspaces().iter().find(|w| w.id == current.id) {
            let scoped: Vec<&Project> = state
                .projects()
                .iter()
                .filter(|p| p.workspace_id == current.id)
                .collect();

            compare_projection(
                state.projects(),
                &scoped,
                &current.projects,
                Projection::CurrentWorkspace,
                &mut issues,
            );
            compare_projection(
                state.projects(),
                &scoped,
                &listed.projects,
                Projection::WorkspaceList,
                &mut issues,
            );
        }
    }

    ConsistencyReport { issues }
}

fn check_references(state: &AppState, project: &Project, issues: &mut Vec<ConsistencyIssue>) {
    if !state
        .workspaces()
        .iter()
        .any(|w| w.id == project.workspace_id)
    {
        issues.push(ConsistencyIssue::UnknownWorkspace {
            project_id: project.id.clone(),
            workspace_id: project.workspace_id.clone(),
        });
    }

    for env in &project.environments {
        if env.project_id != project.id {
            issues.push(ConsistencyIssue::EnvironmentBackReference {
                project_id: project.id.clone(),
                environment_id: env.id.clone(),
                points_to: env.project_id.clone(),
            });
        }
    }

    if project.members.is_empty() {
        issues.push(ConsistencyIssue::NoMembers {
            project_id: project.id.clone(),
        });
    }

    for member in &project.members {
        for perm in &member.environment_permissions {
            if project.environment(&perm.environment_id).is_none() {
                issues.push(ConsistencyIssue::ForeignPermission {
                    project_id: project.id.clone(),
                    member_id: member.id.clone(),
                    environment_id: perm.environment_id.clone(),
                });
            }
        }
    }
}

fn compare_projection(
    global: &[Project],
    scoped: &[&Project],
    projection: &[Project],
    which: Projection,
    issues: &mut Vec<ConsistencyIssue>,
) {
    for expected in scoped {
        if !projection.iter().any(|p| p.id == expected.id) {
            issues.push(ConsistencyIssue::MissingFromProjection {
                project_id: expected.id.clone(),
                projection: which,
            });
        }
    }

    for held in projection {
        match global.iter().find(|p| p.id == held.id) {
            None => issues.push(ConsistencyIssue::MissingFromGlobal {
                project_id: held.id.clone(),
                projection: which,
            }),
            Some(truth) if truth != held => issues.push(ConsistencyIssue::Diverged {
                project_id: held.id.clone(),
                projection: which,
            }),
            Some(_) => {}
        }
    }
}
