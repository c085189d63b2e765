use nexastack::presentation::routes::active_nav;
use nexastack::presentation::{Route, ViewModel, NAVIGATION};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One-line sidebar: every entry, with the active one highlighted.
pub fn render_nav(route: &Route, supports_color: bool, supports_unicode: bool) -> String {
    let active = active_nav(route);
    let entries: Vec<String> = NAVIGATION
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if Some(i) == active {
                ColoredText::info(format!("[{}]", item.label))
                    .bold()
                    .render(supports_color)
            } else {
                ColoredText::dim(item.label).render(supports_color)
            }
        })
        .collect();
    let sep = if supports_unicode { " · " } else { " | " };
    format!("{}\n", entries.join(sep))
}

pub fn render_public(view: &ViewModel, supports_color: bool, supports_unicode: bool) -> String {
    let (title, hint) = match view {
        ViewModel::Login => ("Log in", "Sign in with your email and password."),
        ViewModel::Signup => (
            "Create an account",
            "Two steps: personal information, then your first workspace.",
        ),
        _ => (
            "NexaStack",
            "Manage workspaces, projects and environment access in one place.",
        ),
    };
    format!(
        "{} {}\n{}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::info(title).bold().render(supports_color),
        ColoredText::dim(hint).render(supports_color)
    )
}

pub fn render_missing(view: &ViewModel, supports_color: bool, supports_unicode: bool) -> String {
    let message = match view {
        ViewModel::NoWorkspace => "No workspace selected.".to_string(),
        ViewModel::ProjectNotFound { project_id } => {
            format!("Project '{}' not found.", project_id)
        }
        ViewModel::NotFound { path } => format!("No page at '{}'.", path),
        _ => String::new(),
    };
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(message).render(supports_color)
    )
}
