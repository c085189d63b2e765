//! Workspace entity - top-level tenant holding members and projects
//!
//! `projects` is a denormalized copy of the projects owned by this workspace.
//! The store keeps it in step with the global project list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::Project;
use super::user::User;
use crate::domain::value_objects::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub members: Vec<WorkspaceMember>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Workspace {
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            created_at,
            members: Vec::new(),
            projects: Vec::new(),
        }
    }

    /// Builder: set the description (empty strings are stored as `None`)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Builder: append a member
    pub fn with_member(mut self, member: WorkspaceMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Membership row for a user, if the user belongs to this workspace
    pub fn member_for_user(&self, user_id: &str) -> Option<&WorkspaceMember> {
        self.members.iter().find(|m| m.user_id == user_id)
    }
}

/// A workspace-scoped projection of a user plus a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMember {
    pub id: String,
    /// Weak reference to a [`User`]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl WorkspaceMember {
    /// Derive a membership row from a user
    pub fn for_user(id: impl Into<String>, user: &User, role: Role) -> Self {
        Self {
            id: id.into(),
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role,
            avatar: user.avatar.clone(),
        }
    }

    pub fn initial(&self) -> char {
        super::user::initial_of(&self.name)
    }
}
