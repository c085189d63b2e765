//! Interactive console
//!
//! A dialoguer menu over one in-memory session. Nothing is persisted; the
//! store lives as long as the process.

mod menu;
mod wizard;

use anyhow::Result;

use nexastack::presentation::{Route, Session, ViewModel};
use nexastack::ConsoleError;

use crate::commands::views::print_view;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::ConsoleTheme;

use menu::MenuAction;

pub fn cmd_interactive(session: &Session, ui: &UiContext) -> Result<()> {
    let theme = ConsoleTheme::new(ui.unicode);

    if session.store.read(|s| s.current_workspace().is_none()) {
        println!("No workspace yet. Let's create your account.\n");
        if let Err(err) = wizard::signup(session, &theme, ui) {
            return report(err, ui);
        }
    }

    loop {
        println!();
        let action = menu::main_menu(&theme)?;
        tracing::debug!(?action, "menu selection");

        let outcome = match action {
            MenuAction::Dashboard => show(session, &Route::Dashboard, ui),
            MenuAction::Projects => show(session, &Route::Projects, ui),
            MenuAction::OpenProject => match menu::pick_project(session, &theme)? {
                Some(project_id) => show(session, &Route::ProjectDetails { project_id }, ui),
                None => Ok(()),
            },
            MenuAction::Members => show(session, &Route::Members, ui),
            MenuAction::Settings => show(session, &Route::Settings, ui),
            MenuAction::CreateProject => wizard::create_project(session, &theme, ui),
            MenuAction::EditProject => wizard::edit_project(session, &theme, ui),
            MenuAction::InviteMember => wizard::invite_member(session, &theme, ui),
            MenuAction::AddProjectMember => wizard::add_project_member(session, &theme, ui),
            MenuAction::Quit => return Ok(()),
        };

        if let Err(err) = outcome {
            report(err, ui)?;
        }
    }
}

fn show(session: &Session, route: &Route, ui: &UiContext) -> Result<()> {
    let view = session.store.read(|state| ViewModel::resolve(route, state));
    println!();
    print_view(route, &view, ui)
}

/// Print use case failures and keep the menu running. Prompt I/O errors
/// (e.g. the terminal went away) still end the session.
fn report(err: anyhow::Error, ui: &UiContext) -> Result<()> {
    if err.downcast_ref::<ConsoleError>().is_none() {
        return Err(err);
    }
    println!(
        "{} {}",
        Icon::Error.colored(ui.color, ui.unicode),
        ColoredText::error(err.to_string()).render(ui.color)
    );
    Ok(())
}

fn success(message: impl Into<String>, ui: &UiContext) {
    println!(
        "{} {}",
        Icon::Success.colored(ui.color, ui.unicode),
        ColoredText::success(message).render(ui.color)
    );
}
