//! Text renderers for resolved view models.

pub mod check;
pub mod dashboard;
pub mod members;
pub mod project;
pub mod projects;
pub mod settings;
pub mod shell;

use nexastack::presentation::{Route, ViewModel};

/// Render `view` for `route`, with the sidebar navigation on shell routes.
pub fn render_view(
    route: &Route,
    view: &ViewModel,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let body = match view {
        ViewModel::Landing | ViewModel::Login | ViewModel::Signup => {
            shell::render_public(view, supports_color, supports_unicode)
        }
        ViewModel::Dashboard(summary) => {
            dashboard::DashboardView::new(summary).render(supports_color, supports_unicode)
        }
        ViewModel::Projects { projects } => {
            projects::ProjectsView::new(projects).render(supports_color, supports_unicode)
        }
        ViewModel::ProjectDetails(details) => {
            project::ProjectView::new(details).render(supports_color, supports_unicode)
        }
        ViewModel::Members {
            workspace_name,
            members,
        } => members::MembersView::new(workspace_name, members)
            .render(supports_color, supports_unicode),
        ViewModel::Settings(settings) => {
            settings::SettingsView::new(settings).render(supports_color, supports_unicode)
        }
        ViewModel::NoWorkspace | ViewModel::ProjectNotFound { .. } | ViewModel::NotFound { .. } => {
            shell::render_missing(view, supports_color, supports_unicode)
        }
    };

    if route.in_shell() {
        let mut out = shell::render_nav(route, supports_color, supports_unicode);
        out.push('\n');
        out.push_str(&body);
        out
    } else {
        body
    }
}
