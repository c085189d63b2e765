//! Typed form inputs
//!
//! Each form validates against its schema in `domain::policies::validation`.

use crate::domain::policies::validation::{
    LOGIN, MEMBER_INVITE, PERSONAL_INFO, PROJECT_INFO, WORKSPACE_INFO,
};
use crate::domain::policies::ValidationErrors;
use crate::domain::value_objects::Role;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        LOGIN.validate(&[("email", &self.email), ("password", &self.password)])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl PersonalInfo {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        PERSONAL_INFO.validate(&[
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("password", &self.password),
        ])
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceInfo {
    pub workspace_name: String,
    pub description: String,
}

impl WorkspaceInfo {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        WORKSPACE_INFO.validate(&[("workspaceName", &self.workspace_name)])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub description: String,
}

impl ProjectInfo {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        PROJECT_INFO.validate(&[("name", &self.name), ("description", &self.description)])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberInvite {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl MemberInvite {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        MEMBER_INVITE.validate(&[("name", &self.name), ("email", &self.email)])
    }
}
