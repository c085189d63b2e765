//! Domain Layer
//!
//! The entity graph and the store that owns it, with no I/O.
//!
//! ## Structure
//!
//! - `entities/` - User, Workspace, Project and the records they own
//! - `value_objects/` - Role, EnvironmentKind, PermissionLevel
//! - `store/` - `AppState`, the in-memory store, and `SharedStore`
//! - `services/` - Project construction, consistency checks, queries
//! - `policies/` - Form validation and role rules
//! - `ports/` - Id and clock interfaces implemented by infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod store;
pub mod value_objects;
