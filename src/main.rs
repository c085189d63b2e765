//! NexaStack console
//!
//! Usage: nexastack [COMMAND]
//!
//! Commands:
//!   dashboard  Workspace overview
//!   projects   List projects
//!   project    Show one project and its access grid
//!   members    List workspace members
//!   settings   Show workspace settings
//!   open       Render the view for a console path
//!   check      Verify the store's copies agree

use anyhow::Result;
use clap::Parser;

use nexastack::config::Config;
use nexastack::presentation::{Cli, Commands, Route, Session};

mod commands;
mod logging;
mod ui;

use ui::blocks::warning::WarningBlock;
use ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let loaded = Config::discover(cli.config.as_deref(), &cwd)?;
    logging::init(loaded.config.log.level, cli.verbose);
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "config loaded");
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);
    if !loaded.warnings.is_empty() {
        eprint!(
            "{}",
            WarningBlock::config_warnings(&loaded.warnings).render(ui.color, ui.unicode)
        );
    }

    let session = Session::from_config(&loaded.config);

    match cli.command {
        Some(Commands::Dashboard) => commands::views::cmd_view(&session, &Route::Dashboard, &ui),
        Some(Commands::Projects) => commands::views::cmd_view(&session, &Route::Projects, &ui),
        Some(Commands::Project { id }) => commands::views::cmd_view(
            &session,
            &Route::ProjectDetails { project_id: id },
            &ui,
        ),
        Some(Commands::Members) => commands::views::cmd_view(&session, &Route::Members, &ui),
        Some(Commands::Settings) => commands::views::cmd_view(&session, &Route::Settings, &ui),
        Some(Commands::Open { path }) => {
            commands::views::cmd_view(&session, &Route::parse(&path), &ui)
        }
        Some(Commands::Check) => commands::check::cmd_check(&session, &ui),
        None if ui.caps.interactive() && !ui.json() => {
            commands::interactive::cmd_interactive(&session, &ui)
        }
        None => commands::views::cmd_view(&session, &Route::Dashboard, &ui),
    }
}
