//! Domain Services
//!
//! Pure functions over the entity graph: construction, consistency checks,
//! and read-side queries. No I/O.

mod consistency;
mod project_factory;
mod queries;

pub use consistency::{check_consistency, ConsistencyIssue, ConsistencyReport, Projection};
pub use project_factory::{build_project, build_project_member, MemberProfile, NewProject};
pub use queries::{
    dashboard_summary, find_project, find_workspace, permission_grid, projects_in_workspace,
    recent_projects, DashboardSummary, GridColumn, GridRow, PermissionGrid, RecentProject,
    RECENT_PROJECTS,
};
