//! NexaStack - workspace, project and environment access console
//!
//! An in-memory domain store keeps every project visible through three
//! projections (the global list, the current workspace, and the matching
//! workspace-list entry) and updates all of them in one step. Use cases on
//! top validate forms, check roles, and turn unknown ids into errors.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{
    Environment, EnvironmentPermission, Project, ProjectMember, User, Workspace, WorkspaceMember,
};
pub use domain::store::{AppState, SharedStore};
pub use domain::value_objects::{EnvironmentKind, PermissionLevel, Role};
pub use error::{ConsoleError, ConsoleResult};
pub use presentation::{Route, Session};
