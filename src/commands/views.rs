//! Read-only view commands: dashboard, projects, project, members, settings, open.

use anyhow::Result;

use nexastack::presentation::{Route, Session, ViewModel};

use crate::ui::context::UiContext;
use crate::ui::views::render_view;

/// Resolve and print `route`. Exits with status 1 when the view is missing.
pub fn cmd_view(session: &Session, route: &Route, ui: &UiContext) -> Result<()> {
    let view = session.store.read(|state| ViewModel::resolve(route, state));
    tracing::debug!(route = %route, missing = view.is_missing(), "resolved view");

    print_view(route, &view, ui)?;

    if view.is_missing() {
        std::process::exit(1);
    }
    Ok(())
}

pub fn print_view(route: &Route, view: &ViewModel, ui: &UiContext) -> Result<()> {
    if ui.json() {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{}", render_view(route, view, ui.color, ui.unicode));
    }
    Ok(())
}
