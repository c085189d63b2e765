//! Interactive menu selections

use anyhow::Result;
use dialoguer::Select;

use nexastack::domain::value_objects::Role;
use nexastack::presentation::Session;

use crate::ui::theme::ConsoleTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Dashboard,
    Projects,
    OpenProject,
    Members,
    Settings,
    CreateProject,
    EditProject,
    InviteMember,
    AddProjectMember,
    Quit,
}

impl MenuAction {
    pub(crate) const ALL: [MenuAction; 10] = [
        MenuAction::Dashboard,
        MenuAction::Projects,
        MenuAction::OpenProject,
        MenuAction::Members,
        MenuAction::Settings,
        MenuAction::CreateProject,
        MenuAction::EditProject,
        MenuAction::InviteMember,
        MenuAction::AddProjectMember,
        MenuAction::Quit,
    ];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            MenuAction::Dashboard => "Dashboard",
            MenuAction::Projects => "List projects",
            MenuAction::OpenProject => "Open a project",
            MenuAction::Members => "Workspace members",
            MenuAction::Settings => "Workspace settings",
            MenuAction::CreateProject => "Create a project",
            MenuAction::EditProject => "Edit a project",
            MenuAction::InviteMember => "Invite a workspace member",
            MenuAction::AddProjectMember => "Add a member to a project",
            MenuAction::Quit => "Quit",
        }
    }
}

pub(crate) fn menu_items() -> Vec<String> {
    MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let key = if *action == MenuAction::Quit {
                0
            } else {
                i + 1
            };
            format!("[{}] {}", key, action.label())
        })
        .collect()
}

pub fn main_menu(theme: &ConsoleTheme) -> Result<MenuAction> {
    let selection = Select::with_theme(theme)
        .with_prompt("What would you like to do?")
        .items(&menu_items())
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL
        .get(selection)
        .copied()
        .unwrap_or(MenuAction::Quit))
}

/// Choose from the global project list. `None` when there are no projects.
pub fn pick_project(session: &Session, theme: &ConsoleTheme) -> Result<Option<String>> {
    let projects: Vec<(String, String)> = session.store.read(|state| {
        state
            .projects()
            .iter()
            .map(|p| (p.id.clone(), p.name.clone()))
            .collect()
    });

    if projects.is_empty() {
        println!("No projects yet.");
        return Ok(None);
    }

    let labels: Vec<&str> = projects.iter().map(|(_, name)| name.as_str()).collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Project")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(projects.into_iter().nth(selection).map(|(id, _)| id))
}

pub fn pick_role(theme: &ConsoleTheme, prompt: &str) -> Result<Role> {
    let labels: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
    // Member is the usual invite.
    let default = Role::ALL
        .iter()
        .position(|r| *r == Role::Member)
        .unwrap_or(0);
    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Role::ALL.get(selection).copied().unwrap_or_default())
}
