//! Error types for NexaStack
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::policies::{Action, ValidationErrors};
use crate::domain::value_objects::Role;

/// Result type alias for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Main error type for console operations
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Form input rejected by its schema
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("no user is signed in")]
    NoCurrentUser,

    #[error("no workspace is selected")]
    NoCurrentWorkspace,

    #[error("workspace '{id}' not found")]
    WorkspaceNotFound { id: String },

    #[error("project '{id}' not found")]
    ProjectNotFound { id: String },

    /// A permission override names an environment the project does not own
    #[error("environment '{environment_id}' does not belong to project '{project_id}'")]
    EnvironmentNotInProject {
        environment_id: String,
        project_id: String,
    },

    /// Role enforcement is on and the acting member's role forbids the action
    #[error("role '{role}' may not {action}")]
    Forbidden { role: Role, action: Action },

    /// Wizard operation called on the wrong step
    #[error("wizard is on step '{actual}', expected '{expected}'")]
    WizardStep {
        expected: &'static str,
        actual: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
