//! Domain Store
//!
//! `AppState` is the authoritative in-memory entity graph for one session.
//! Projects are visible through three projections:
//!
//! 1. the global project list (`projects`)
//! 2. `current_workspace.projects`
//! 3. `projects` of the workspace-list entry whose id matches the current workspace
//!
//! Every mutator applies to all affected projections before returning, so a
//! mutation is one state transition. Unmatched ids are silent no-ops on the
//! affected projection; callers that need to know should check first (the
//! application layer does).

mod shared;
#[cfg(test)]
mod tests;

pub use shared::SharedStore;

use tracing::debug;

use crate::domain::entities::{Project, ProjectMember, User, Workspace, WorkspaceMember};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    current_user: Option<User>,
    current_workspace: Option<Workspace>,
    workspaces: Vec<Workspace>,
    projects: Vec<Project>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read access ---

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn current_workspace(&self) -> Option<&Workspace> {
        self.current_workspace.as_ref()
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    // --- Mutators ---

    /// Replace the acting user. No effect on other state.
    pub fn set_current_user(&mut self, user: Option<User>) {
        debug!(user = ?user.as_ref().map(|u| u.id.as_str()), "set current user");
        self.current_user = user;
    }

    /// Replace the current workspace. No effect on other state.
    pub fn set_current_workspace(&mut self, workspace: Option<Workspace>) {
        debug!(workspace = ?workspace.as_ref().map(|w| w.id.as_str()), "set current workspace");
        self.current_workspace = workspace;
    }

    /// Append a workspace. Does not make it current and does not reject
    /// duplicate ids.
    pub fn add_workspace(&mut self, workspace: Workspace) {
        debug!(workspace = %workspace.id, "add workspace");
        self.workspaces.push(workspace);
    }

    /// Append a project to the global list and, when a workspace is current,
    /// to the current workspace and its workspace-list entry.
    ///
    /// Without a current workspace the project lands in the global list only.
    pub fn add_project(&mut self, project: Project) {
        debug!(project = %project.id, "add project");

        if let Some(current) = self.current_workspace.as_mut() {
            current.projects.push(project.clone());

            let mut listed = 0usize;
            for workspace in self.workspaces.iter_mut().filter(|w| w.id == current.id) {
                workspace.projects.push(project.clone());
                listed += 1;
            }
            if listed == 0 {
                debug!(workspace = %current.id, "current workspace not in workspace list");
            }
        } else {
            debug!(project = %project.id, "no current workspace; project kept in global list only");
        }

        self.projects.push(project);
    }

    /// Replace every project with a matching id, wholesale, across all
    /// projections. Fields are never merged.
    pub fn update_project(&mut self, project: Project) {
        let replaced = replace_by_id(&mut self.projects, &project);
        if replaced == 0 {
            debug!(project = %project.id, "update_project: no project with this id");
        }

        if let Some(current) = self.current_workspace.as_mut() {
            replace_by_id(&mut current.projects, &project);
            for workspace in self.workspaces.iter_mut().filter(|w| w.id == current.id) {
                replace_by_id(&mut workspace.projects, &project);
            }
        }
    }

    /// Append a member to the workspace with `workspace_id`, in the workspace
    /// list and, if it is the current workspace, in the current workspace.
    pub fn add_workspace_member(&mut self, workspace_id: &str, member: WorkspaceMember) {
        let mut matched = 0usize;
        for workspace in self.workspaces.iter_mut().filter(|w| w.id == workspace_id) {
            workspace.members.push(member.clone());
            matched += 1;
        }

        if let Some(current) = self.current_workspace.as_mut() {
            if current.id == workspace_id {
                current.members.push(member);
                matched += 1;
            }
        }

        if matched == 0 {
            debug!(workspace = %workspace_id, "add_workspace_member: no workspace with this id");
        }
    }

    /// Append a member to the project with `project_id` in all projections.
    pub fn add_project_member(&mut self, project_id: &str, member: ProjectMember) {
        let appended = append_member(&mut self.projects, project_id, &member);
        if appended == 0 {
            debug!(project = %project_id, "add_project_member: no project with this id");
        }

        if let Some(current) = self.current_workspace.as_mut() {
            append_member(&mut current.projects, project_id, &member);
            for workspace in self.workspaces.iter_mut().filter(|w| w.id == current.id) {
                append_member(&mut workspace.projects, project_id, &member);
            }
        }
    }
}

fn replace_by_id(projects: &mut [Project], project: &Project) -> usize {
    let mut replaced = 0;
    for slot in projects.iter_mut().filter(|p| p.id == project.id) {
        *slot = project.clone();
        replaced += 1;
    }
    replaced
}

fn append_member(projects: &mut [Project], project_id: &str, member: &ProjectMember) -> usize {
    let mut appended = 0;
    for project in projects.iter_mut().filter(|p| p.id == project_id) {
        project.members.push(member.clone());
        appended += 1;
    }
    appended
}
