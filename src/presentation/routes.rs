//! Console routes
//!
//! Maps URL-style paths to views. The authenticated views render inside the
//! shell (sidebar plus header); landing, login and signup stand alone.

use std::fmt;

use serde::Serialize;

use crate::application::Redirect;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    Projects,
    ProjectDetails {
        #[serde(rename = "projectId")]
        project_id: String,
    },
    Members,
    Settings,
    NotFound {
        path: String,
    },
}

impl Route {
    /// Resolve a path. Query strings and fragments are ignored, repeated and
    /// trailing slashes are tolerated.
    pub fn parse(path: &str) -> Self {
        let path_only = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path_only.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Landing,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["dashboard"] => Route::Dashboard,
            ["projects"] => Route::Projects,
            ["projects", id] => Route::ProjectDetails {
                project_id: (*id).to_string(),
            },
            ["members"] => Route::Members,
            ["settings"] => Route::Settings,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Whether the view renders inside the authenticated shell.
    pub fn in_shell(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Projects
                | Route::ProjectDetails { .. }
                | Route::Members
                | Route::Settings
        )
    }

    /// Canonical path. `NotFound` keeps the path it was parsed from.
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetails { project_id } => format!("/projects/{}", project_id),
            Route::Members => "/members".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Welcome",
            Route::Login => "Log in",
            Route::Signup => "Create an Account",
            Route::Dashboard => "Dashboard",
            Route::Projects => "Projects",
            Route::ProjectDetails { .. } => "Project",
            Route::Members => "Members",
            Route::Settings => "Workspace Settings",
            Route::NotFound { .. } => "Page not found",
        }
    }
}

impl From<Redirect> for Route {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::Projects => Route::Projects,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAVIGATION: [NavItem; 4] = [
    NavItem {
        label: "Dashboard",
        path: "/dashboard",
    },
    NavItem {
        label: "Projects",
        path: "/projects",
    },
    NavItem {
        label: "Members",
        path: "/members",
    },
    NavItem {
        label: "Settings",
        path: "/settings",
    },
];

/// Index into [`NAVIGATION`] of the entry to highlight for `route`.
pub fn active_nav(route: &Route) -> Option<usize> {
    let path = match route {
        Route::ProjectDetails { .. } => "/projects".to_string(),
        other => other.path(),
    };
    NAVIGATION.iter().position(|item| item.path == path)
}
