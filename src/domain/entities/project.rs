//! Project entity and the records it owns
//!
//! A project owns its environments and its project-scoped members. Each
//! member carries one [`EnvironmentPermission`] per environment it can access,
//! and every permission must point at an environment of the same project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EnvironmentKind, PermissionLevel, Role};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Back-reference to the owning workspace
    pub workspace_id: String,
    #[serde(default)]
    pub environments: Vec<Environment>,
    #[serde(default)]
    pub members: Vec<ProjectMember>,
}

impl Project {
    pub fn environment(&self, environment_id: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.id == environment_id)
    }

    pub fn environment_of_kind(&self, kind: EnvironmentKind) -> Option<&Environment> {
        self.environments.iter().find(|e| e.name == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: String,
    pub name: EnvironmentKind,
    pub project_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub environment_permissions: Vec<EnvironmentPermission>,
}

impl ProjectMember {
    /// Permission held on an environment; `None` means no access
    pub fn permission_for(&self, environment_id: &str) -> Option<PermissionLevel> {
        self.environment_permissions
            .iter()
            .find(|p| p.environment_id == environment_id)
            .map(|p| p.permission)
    }

    pub fn initial(&self) -> char {
        super::user::initial_of(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentPermission {
    pub id: String,
    pub environment_id: String,
    pub permission: PermissionLevel,
}
