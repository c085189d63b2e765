//! Domain Value Objects
//!
//! Immutable value types shared by the entity graph.

mod config_warning;
mod environment_kind;
mod permission_level;
mod role;

pub use config_warning::ConfigWarning;
pub use environment_kind::EnvironmentKind;
pub use permission_level::PermissionLevel;
pub use role::Role;
