//! Domain Entities
//!
//! The in-memory entity graph:
//! - `User` - an authenticated individual
//! - `Workspace` / `WorkspaceMember` - tenant and its membership rows
//! - `Project` / `Environment` / `ProjectMember` / `EnvironmentPermission`

mod project;
mod user;
mod workspace;

pub use project::{Environment, EnvironmentPermission, Project, ProjectMember};
pub use user::User;
pub use workspace::{Workspace, WorkspaceMember};
