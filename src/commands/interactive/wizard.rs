//! Form flows: signup, create/edit project, invitations

use std::collections::HashMap;

use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};

use nexastack::application::{MemberInvite, ProjectInfo};
use nexastack::domain::entities::Environment;
use nexastack::domain::services::find_project;
use nexastack::domain::value_objects::{EnvironmentKind, PermissionLevel, Role};
use nexastack::presentation::routes::Route;
use nexastack::presentation::Session;
use nexastack::ConsoleError;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::ConsoleTheme;

use super::{menu, success};

fn step_header(index: usize, total: usize, title: &str, ui: &UiContext) {
    println!(
        "\n{} {}",
        ColoredText::dim(format!("Step {}/{}", index + 1, total)).render(ui.color),
        ColoredText::info(title).bold().render(ui.color)
    );
}

fn field_errors(err: &ConsoleError, ui: &UiContext) {
    println!("{}", ColoredText::error(err.to_string()).render(ui.color));
}

fn text(theme: &ConsoleTheme, prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

pub fn signup(session: &Session, theme: &ConsoleTheme, ui: &UiContext) -> Result<()> {
    use nexastack::application::SignupStep;

    let mut wizard = session.signup_wizard();
    let total = SignupStep::ALL.len();

    loop {
        let step = SignupStep::PersonalInformation;
        step_header(step.index(), total, step.title(), ui);
        wizard.personal.first_name = text(theme, "First name", &wizard.personal.first_name)?;
        wizard.personal.last_name = text(theme, "Last name", &wizard.personal.last_name)?;
        wizard.personal.email = text(theme, "Email", &wizard.personal.email)?;
        wizard.personal.password = Password::with_theme(theme)
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?;
        match wizard.next() {
            Ok(_) => break,
            Err(err) => field_errors(&err, ui),
        }
    }

    loop {
        let step = SignupStep::CreateWorkspace;
        step_header(step.index(), total, step.title(), ui);
        wizard.workspace.workspace_name =
            text(theme, "Workspace name", &wizard.workspace.workspace_name)?;
        wizard.workspace.description =
            text(theme, "Description (optional)", &wizard.workspace.description)?;
        match session.store.write(|state| wizard.complete(state)) {
            Ok(outcome) => {
                let route = Route::from(outcome.redirect);
                success(format!("Workspace created, opening {}", route.path()), ui);
                return Ok(());
            }
            Err(err @ ConsoleError::Validation(_)) => field_errors(&err, ui),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Environment kinds for the checked MultiSelect rows.
pub(crate) fn kinds_from_selection(selection: &[usize]) -> Vec<EnvironmentKind> {
    selection
        .iter()
        .filter_map(|i| EnvironmentKind::ALL.get(*i).copied())
        .collect()
}

pub fn create_project(session: &Session, theme: &ConsoleTheme, ui: &UiContext) -> Result<()> {
    use nexastack::application::CreateProjectStep;

    let mut wizard = session.create_project_wizard();
    let total = CreateProjectStep::ALL.len();

    loop {
        let step = wizard.step();
        step_header(step.index(), total, step.title(), ui);

        match step {
            CreateProjectStep::ProjectInfo => {
                wizard.info.name = text(theme, "Project name", &wizard.info.name)?;
                wizard.info.description = text(theme, "Description", &wizard.info.description)?;
                if let Err(err) = wizard.next() {
                    field_errors(&err, ui);
                }
            }
            CreateProjectStep::Environments => {
                let items: Vec<String> = EnvironmentKind::ALL
                    .iter()
                    .map(|k| format!("{:<12} {}", k.as_str(), k.description()))
                    .collect();
                let defaults: Vec<bool> = EnvironmentKind::ALL
                    .iter()
                    .map(|k| wizard.environments.contains(k))
                    .collect();
                let selection = MultiSelect::with_theme(theme)
                    .with_prompt("Environments (space to toggle)")
                    .items(&items)
                    .defaults(&defaults)
                    .interact()?;
                let chosen = kinds_from_selection(&selection);
                for kind in EnvironmentKind::ALL {
                    wizard.set_environment(kind, chosen.contains(&kind));
                }
                wizard.next()?;
            }
            CreateProjectStep::Review => {
                println!("Name:         {}", wizard.info.name);
                println!("Description:  {}", wizard.info.description);
                let envs: Vec<&str> = wizard.environments.iter().map(|k| k.as_str()).collect();
                println!(
                    "Environments: {}",
                    if envs.is_empty() {
                        "(none)".to_string()
                    } else {
                        envs.join(", ")
                    }
                );

                let choice = Select::with_theme(theme)
                    .with_prompt("Create this project?")
                    .items(&["Create", "Back", "Cancel"])
                    .default(0)
                    .interact()?;
                match choice {
                    0 => {
                        let project = session.store.write(|state| wizard.submit(state))?;
                        success(format!("Created project {} ({})", project.name, project.id), ui);
                        return Ok(());
                    }
                    1 => {
                        wizard.back();
                    }
                    _ => {
                        wizard.cancel();
                        println!("Cancelled.");
                        return Ok(());
                    }
                }
            }
        }
    }
}

pub fn edit_project(session: &Session, theme: &ConsoleTheme, ui: &UiContext) -> Result<()> {
    let Some(project_id) = menu::pick_project(session, theme)? else {
        return Ok(());
    };
    let current = session.store.read(|state| {
        find_project(state, &project_id).map(|p| ProjectInfo {
            name: p.name.clone(),
            description: p.description.clone(),
        })
    });
    let Some(mut info) = current else {
        return Err(ConsoleError::ProjectNotFound { id: project_id }.into());
    };

    info.name = text(theme, "Project name", &info.name)?;
    info.description = text(theme, "Description", &info.description)?;

    let use_case = session.update_project_use_case();
    let project = session
        .store
        .write(|state| use_case.execute(state, &project_id, &info))?;
    success(format!("Updated project {}", project.name), ui);
    Ok(())
}

fn member_invite(theme: &ConsoleTheme) -> Result<MemberInvite> {
    let name = text(theme, "Name", "")?;
    let email = text(theme, "Email", "")?;
    let role = menu::pick_role(theme, "Role")?;
    Ok(MemberInvite::new(name, email, role))
}

pub fn invite_member(session: &Session, theme: &ConsoleTheme, ui: &UiContext) -> Result<()> {
    let Some(workspace_id) = session
        .store
        .read(|state| state.current_workspace().map(|w| w.id.clone()))
    else {
        return Err(ConsoleError::NoCurrentWorkspace.into());
    };

    let invite = member_invite(theme)?;
    let use_case = session.invite_member_use_case();
    let member = session
        .store
        .write(|state| use_case.execute(state, &workspace_id, &invite))?;
    success(format!("Invited {} as {}", member.name, member.role), ui);
    Ok(())
}

/// Row labels for the per-environment permission choice; the first row is
/// the role's default.
pub(crate) fn permission_choices(role: Role) -> Vec<String> {
    let mut items = vec![format!(
        "Role default ({})",
        PermissionLevel::default_for(role)
    )];
    items.extend(PERMISSION_LEVELS.iter().map(|l| l.as_str().to_string()));
    items
}

const PERMISSION_LEVELS: [PermissionLevel; 3] = [
    PermissionLevel::ReadOnly,
    PermissionLevel::ReadWrite,
    PermissionLevel::FullAccess,
];

/// Overrides from one choice index per environment; index 0 keeps the default.
pub(crate) fn overrides_from_choices(
    environments: &[Environment],
    choices: &[usize],
) -> HashMap<String, PermissionLevel> {
    environments
        .iter()
        .zip(choices)
        .filter_map(|(env, choice)| {
            choice
                .checked_sub(1)
                .and_then(|i| PERMISSION_LEVELS.get(i))
                .map(|level| (env.id.clone(), *level))
        })
        .collect()
}

pub fn add_project_member(session: &Session, theme: &ConsoleTheme, ui: &UiContext) -> Result<()> {
    let Some(project_id) = menu::pick_project(session, theme)? else {
        return Ok(());
    };
    let environments = session
        .store
        .read(|state| find_project(state, &project_id).map(|p| p.environments.clone()))
        .unwrap_or_default();

    let invite = member_invite(theme)?;

    let mut choices = Vec::with_capacity(environments.len());
    let customize = !environments.is_empty()
        && Confirm::with_theme(theme)
            .with_prompt("Customize environment access?")
            .default(false)
            .interact()?;
    if customize {
        let items = permission_choices(invite.role);
        for env in &environments {
            let choice = Select::with_theme(theme)
                .with_prompt(env.name.as_str())
                .items(&items)
                .default(0)
                .interact()?;
            choices.push(choice);
        }
    }
    let overrides = overrides_from_choices(&environments, &choices);

    let use_case = session.add_project_member_use_case();
    let member = session
        .store
        .write(|state| use_case.execute(state, &project_id, &invite, &overrides))?;
    success(
        format!(
            "Added {} to the project with access to {} environment(s)",
            member.name,
            member.environment_permissions.len()
        ),
        ui,
    );
    Ok(())
}
