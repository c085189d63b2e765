//! Permission level a project member holds on one environment

use serde::{Deserialize, Serialize};

use super::Role;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionLevel {
    ReadOnly,
    ReadWrite,
    FullAccess,
}

impl PermissionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::ReadOnly => "read-only",
            PermissionLevel::ReadWrite => "read-write",
            PermissionLevel::FullAccess => "full-access",
        }
    }

    /// Level granted on every environment when no override is given
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Owner | Role::Admin => PermissionLevel::FullAccess,
            Role::Member => PermissionLevel::ReadWrite,
            Role::Viewer => PermissionLevel::ReadOnly,
        }
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PermissionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "read-only" | "ro" => Ok(PermissionLevel::ReadOnly),
            "read-write" | "rw" => Ok(PermissionLevel::ReadWrite),
            "full-access" | "full" => Ok(PermissionLevel::FullAccess),
            other => Err(format!("unknown permission '{}'", other)),
        }
    }
}
