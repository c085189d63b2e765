//! Role-based access rules
//!
//! Roles are recorded on every member but the store never consults them.
//! Use cases check these rules only when role enforcement is switched on.

use serde::Serialize;

use crate::domain::value_objects::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    ViewProject,
    CreateProject,
    EditProject,
    InviteWorkspaceMember,
    AddProjectMember,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::ViewProject => "view projects",
            Action::CreateProject => "create projects",
            Action::EditProject => "edit projects",
            Action::InviteWorkspaceMember => "invite workspace members",
            Action::AddProjectMember => "add project members",
        };
        f.write_str(s)
    }
}

pub fn role_permits(role: Role, action: Action) -> bool {
    match role {
        Role::Owner | Role::Admin => true,
        Role::Member => matches!(
            action,
            Action::ViewProject | Action::CreateProject | Action::EditProject
        ),
        Role::Viewer => matches!(action, Action::ViewProject),
    }
}
