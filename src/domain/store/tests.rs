use super::*;
use crate::domain::entities::{Environment, EnvironmentPermission};
use crate::domain::value_objects::{EnvironmentKind, PermissionLevel, Role};
use chrono::{DateTime, Utc};

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
}

fn user() -> User {
    User::new("u1", "Sarah Chen", "sc@example.com")
}

fn workspace(id: &str) -> Workspace {
    Workspace::new(id, format!("Workspace {}", id), at(0))
}

fn project(id: &str, workspace_id: &str, kinds: &[EnvironmentKind]) -> Project {
    let environments: Vec<Environment> = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| Environment {
            id: format!("{}-env{}", id, i),
            name: *kind,
            project_id: id.to_string(),
            created_at: at(1),
        })
        .collect();
    let permissions = environments
        .iter()
        .map(|e| EnvironmentPermission {
            id: format!("{}-perm", e.id),
            environment_id: e.id.clone(),
            permission: PermissionLevel::FullAccess,
        })
        .collect();

    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        description: "A project".to_string(),
        created_at: at(1),
        workspace_id: workspace_id.to_string(),
        environments,
        members: vec![ProjectMember {
            id: format!("{}-owner", id),
            user_id: "u1".to_string(),
            name: "Sarah Chen".to_string(),
            email: "sc@example.com".to_string(),
            role: Role::Owner,
            avatar: None,
            environment_permissions: permissions,
        }],
    }
}

fn member(id: &str, role: Role) -> ProjectMember {
    ProjectMember {
        id: id.to_string(),
        user_id: format!("user-{}", id),
        name: format!("Member {}", id),
        email: format!("{}@example.com", id),
        role,
        avatar: None,
        environment_permissions: vec![],
    }
}

fn workspace_member(id: &str) -> WorkspaceMember {
    WorkspaceMember {
        id: id.to_string(),
        user_id: format!("user-{}", id),
        name: format!("Member {}", id),
        email: format!("{}@example.com", id),
        role: Role::Member,
        avatar: None,
    }
}

/// Store with a current user and W1 both listed and current
fn active_store() -> AppState {
    let mut state = AppState::new();
    state.set_current_user(Some(user()));
    state.add_workspace(workspace("W1"));
    state.set_current_workspace(Some(workspace("W1")));
    state
}

/// The three copies of `project_id`, in global / current / listed order
fn copies<'a>(state: &'a AppState, project_id: &str) -> [Option<&'a Project>; 3] {
    let current = state.current_workspace().unwrap();
    [
        state.projects().iter().find(|p| p.id == project_id),
        current.projects.iter().find(|p| p.id == project_id),
        state
            .workspaces()
            .iter()
            .find(|w| w.id == current.id)
            .and_then(|w| w.projects.iter().find(|p| p.id == project_id)),
    ]
}

fn assert_triplicated(state: &AppState, project_id: &str) {
    let [global, current, listed] = copies(state, project_id);
    let global = global.expect("project in global list");
    assert_eq!(Some(global), current, "current workspace copy differs");
    assert_eq!(Some(global), listed, "workspace list copy differs");
}

#[test]
fn new_store_is_empty() {
    let state = AppState::new();
    assert!(state.current_user().is_none());
    assert!(state.current_workspace().is_none());
    assert!(state.workspaces().is_empty());
    assert!(state.projects().is_empty());
}

#[test]
fn setters_do_not_touch_other_state() {
    let mut state = AppState::new();
    state.set_current_workspace(Some(workspace("W1")));
    assert!(state.workspaces().is_empty());

    state.set_current_user(Some(user()));
    assert_eq!(state.current_workspace().map(|w| w.id.as_str()), Some("W1"));

    state.set_current_user(None);
    assert!(state.current_user().is_none());
}

#[test]
fn add_workspace_does_not_select_it() {
    let mut state = AppState::new();
    state.add_workspace(workspace("W1"));
    assert!(state.current_workspace().is_none());
    assert_eq!(state.workspaces().len(), 1);
}

#[test]
fn add_workspace_keeps_duplicate_ids() {
    let mut state = AppState::new();
    state.add_workspace(workspace("W1"));
    state.add_workspace(workspace("W1"));
    assert_eq!(state.workspaces().len(), 2);
    assert!(state.workspaces().iter().all(|w| w.id == "W1"));
}

#[test]
fn add_project_reaches_all_projections() {
    let mut state = active_store();
    let p1 = project(
        "P1",
        "W1",
        &[EnvironmentKind::Development, EnvironmentKind::Staging],
    );
    state.add_project(p1.clone());

    assert_eq!(state.projects(), &[p1.clone()]);
    assert_eq!(state.current_workspace().unwrap().projects, vec![p1.clone()]);
    assert_eq!(state.workspaces()[0].projects, vec![p1]);
    assert_triplicated(&state, "P1");
}

#[test]
fn add_project_without_current_workspace_goes_global_only() {
    let mut state = AppState::new();
    state.add_workspace(workspace("W1"));
    state.add_project(project("P1", "W1", &[]));

    assert_eq!(state.projects().len(), 1);
    assert!(state.workspaces()[0].projects.is_empty());
}

#[test]
fn add_project_with_unlisted_current_workspace_skips_list() {
    let mut state = AppState::new();
    state.add_workspace(workspace("W1"));
    state.set_current_workspace(Some(workspace("W2")));
    state.add_project(project("P1", "W2", &[]));

    assert_eq!(state.projects().len(), 1);
    assert_eq!(state.current_workspace().unwrap().projects.len(), 1);
    assert!(state.workspaces()[0].projects.is_empty());
}

#[test]
fn update_project_replaces_whole_value() {
    let mut state = active_store();
    state.add_project(project("P1", "W1", &[EnvironmentKind::Production]));
    state.add_project(project("P2", "W1", &[]));

    let mut replacement = project("P1", "W1", &[]);
    replacement.name = "Renamed".to_string();
    replacement.description = "Fresh".to_string();
    replacement.members.clear();
    state.update_project(replacement.clone());

    let [global, current, listed] = copies(&state, "P1");
    for copy in [global, current, listed] {
        let copy = copy.unwrap();
        assert_eq!(copy, &replacement);
        assert!(copy.environments.is_empty(), "environments must not be merged");
        assert!(copy.members.is_empty(), "members must not be merged");
    }
    assert_triplicated(&state, "P2");
    assert_eq!(state.projects()[0].id, "P1", "order is preserved");
}

#[test]
fn update_unknown_project_changes_nothing() {
    let mut state = active_store();
    state.add_project(project("P1", "W1", &[]));
    let before = state.clone();

    state.update_project(project("nope", "W1", &[]));
    assert_eq!(state, before);
}

#[test]
fn add_workspace_member_updates_list_and_current() {
    let mut state = active_store();
    state.add_workspace_member("W1", workspace_member("m1"));

    assert_eq!(state.workspaces()[0].members.len(), 1);
    assert_eq!(state.current_workspace().unwrap().members.len(), 1);
}

#[test]
fn add_workspace_member_to_other_workspace_leaves_current_alone() {
    let mut state = active_store();
    state.add_workspace(workspace("W2"));
    state.add_workspace_member("W2", workspace_member("m1"));

    assert!(state.workspaces()[0].members.is_empty());
    assert_eq!(state.workspaces()[1].members.len(), 1);
    assert!(state.current_workspace().unwrap().members.is_empty());
}

#[test]
fn add_workspace_member_unknown_id_is_noop() {
    let mut state = active_store();
    state.add_project(project("P1", "W1", &[EnvironmentKind::Staging]));
    let before = state.clone();

    state.add_workspace_member("nonexistent-id", workspace_member("m1"));
    assert_eq!(state, before);
}

#[test]
fn add_project_member_reaches_all_projections() {
    let mut state = active_store();
    state.add_project(project("P1", "W1", &[EnvironmentKind::Development]));
    state.add_project_member("P1", member("m2", Role::Viewer));

    assert_triplicated(&state, "P1");
    let global = &state.projects()[0];
    assert_eq!(global.members.len(), 2);
    assert_eq!(global.members[1].role, Role::Viewer);
}

#[test]
fn add_project_member_unknown_project_is_noop() {
    let mut state = active_store();
    state.add_project(project("P1", "W1", &[]));
    let before = state.clone();

    state.add_project_member("P9", member("m2", Role::Member));
    assert_eq!(state, before);
}

#[test]
fn end_to_end_signup_then_create_project() {
    let mut state = AppState::new();
    state.set_current_user(Some(user()));
    state.add_workspace(workspace("W1"));
    state.set_current_workspace(Some(workspace("W1")));

    let p1 = project(
        "P1",
        "W1",
        &[EnvironmentKind::Development, EnvironmentKind::Production],
    );
    state.add_project(p1.clone());

    assert!(state.workspaces()[0].projects.contains(&p1));
    assert!(state.projects().contains(&p1));
    assert!(state.current_workspace().unwrap().projects.contains(&p1));
    assert_triplicated(&state, "P1");
}
