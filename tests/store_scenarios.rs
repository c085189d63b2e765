//! End-to-end flows through the use cases, checked against the consistency
//! checker after every step.

mod common;

use std::collections::HashMap;

use nexastack::application::{CreateProjectStep, MemberInvite, ProjectInfo};
use nexastack::config::Config;
use nexastack::domain::services::check_consistency;
use nexastack::domain::value_objects::{EnvironmentKind, PermissionLevel, Role};
use nexastack::{ConsoleError, Route};

use common::{session, unseeded};

fn assert_consistent(session: &nexastack::Session) {
    let report = session.store.read(check_consistency);
    assert!(report.is_consistent(), "issues: {:?}", report.issues);
}

#[test]
fn seeded_session_is_consistent() {
    let session = session(&Config::default());
    assert_consistent(&session);

    let (projects, envs) = session.store.read(|s| {
        (
            s.projects().len(),
            s.projects()
                .iter()
                .map(|p| p.environments.len())
                .sum::<usize>(),
        )
    });
    assert_eq!(projects, 2);
    assert_eq!(envs, 6);
}

#[test]
fn signup_then_create_project_then_invite() {
    let session = session(&unseeded());

    let mut signup = session.signup_wizard();
    signup.personal.first_name = "Ada".to_string();
    signup.personal.last_name = "Lovelace".to_string();
    signup.personal.email = "ada@example.com".to_string();
    signup.personal.password = "analytical".to_string();
    signup.next().unwrap();
    signup.workspace.workspace_name = "Engines".to_string();
    let outcome = session.store.write(|s| signup.complete(s)).unwrap();
    assert_eq!(Route::from(outcome.redirect), Route::Projects);
    assert_consistent(&session);

    let mut wizard = session.create_project_wizard();
    wizard.info = ProjectInfo {
        name: "Difference".to_string(),
        description: "Polynomial tables".to_string(),
    };
    assert_eq!(wizard.next().unwrap(), CreateProjectStep::Environments);
    wizard.set_environment(EnvironmentKind::Staging, false);
    assert_eq!(wizard.next().unwrap(), CreateProjectStep::Review);
    let project = session.store.write(|s| wizard.submit(s)).unwrap();
    assert_eq!(project.workspace_id, outcome.workspace_id);
    assert_eq!(project.environments.len(), 2);
    assert_consistent(&session);

    let invite = session.invite_member_use_case();
    session
        .store
        .write(|s| {
            invite.execute(
                s,
                &outcome.workspace_id,
                &MemberInvite::new("Charles Babbage", "cb@example.com", Role::Admin),
            )
        })
        .unwrap();

    let add = session.add_project_member_use_case();
    let prod = project
        .environment_of_kind(EnvironmentKind::Production)
        .map(|e| e.id.clone())
        .unwrap();
    let overrides = HashMap::from([(prod.clone(), PermissionLevel::ReadOnly)]);
    let member = session
        .store
        .write(|s| {
            add.execute(
                s,
                &project.id,
                &MemberInvite::new("Charles Babbage", "cb@example.com", Role::Admin),
                &overrides,
            )
        })
        .unwrap();
    assert_eq!(member.permission_for(&prod), Some(PermissionLevel::ReadOnly));
    assert_consistent(&session);

    let copies = session.store.read(|s| {
        let workspace = s.current_workspace().unwrap();
        let listed = s.workspaces().iter().find(|w| w.id == workspace.id).unwrap();
        (
            workspace.members.len(),
            listed.members.len(),
            workspace.projects[0].members.len(),
            listed.projects[0].members.len(),
            s.projects()[0].members.len(),
        )
    });
    assert_eq!(copies, (2, 2, 2, 2, 2));
}

#[test]
fn invite_to_unknown_workspace_leaves_state_unchanged() {
    let session = session(&Config::default());
    let before = session.store.snapshot();

    let invite = session.invite_member_use_case();
    let err = session
        .store
        .write(|s| {
            invite.execute(
                s,
                "missing",
                &MemberInvite::new("Ghost", "ghost@example.com", Role::Member),
            )
        })
        .unwrap_err();

    assert!(matches!(err, ConsoleError::WorkspaceNotFound { ref id } if id == "missing"));
    assert_eq!(session.store.snapshot(), before);
}

#[test]
fn update_project_replaces_every_copy() {
    let session = session(&Config::default());
    let update = session.update_project_use_case();
    session
        .store
        .write(|s| {
            update.execute(
                s,
                "2",
                &ProjectInfo {
                    name: "Automation Suite".to_string(),
                    description: "Workflows and schedules".to_string(),
                },
            )
        })
        .unwrap();

    session.store.read(|s| {
        let names = [
            s.projects().iter().find(|p| p.id == "2").map(|p| p.name.clone()),
            s.current_workspace()
                .and_then(|w| w.project("2"))
                .map(|p| p.name.clone()),
            s.workspaces()[0].project("2").map(|p| p.name.clone()),
        ];
        for name in names {
            assert_eq!(name.as_deref(), Some("Automation Suite"));
        }
    });
    assert_consistent(&session);
}

#[test]
fn viewer_cannot_create_project_when_roles_enforced() {
    let mut config = Config::default();
    config.access.enforce_roles = true;
    let session = session(&config);

    session.store.write(|s| {
        s.set_current_user(Some(nexastack::domain::entities::User::new(
            "v1",
            "Val Viewer",
            "val@example.com",
        )))
    });
    let before = session.store.snapshot();

    let mut wizard = session.create_project_wizard();
    wizard.info = ProjectInfo {
        name: "Forbidden".to_string(),
        description: "Should not exist".to_string(),
    };
    wizard.next().unwrap();
    wizard.next().unwrap();
    let err = session.store.write(|s| wizard.submit(s)).unwrap_err();

    assert!(matches!(err, ConsoleError::Forbidden { role: Role::Viewer, .. }));
    assert_eq!(session.store.snapshot(), before);
}

#[test]
fn foreign_environment_override_is_rejected() {
    let session = session(&Config::default());
    let add = session.add_project_member_use_case();
    // Environment 4 belongs to project 2.
    let overrides = HashMap::from([("4".to_string(), PermissionLevel::ReadOnly)]);
    let err = session
        .store
        .write(|s| {
            add.execute(
                s,
                "1",
                &MemberInvite::new("Dana Park", "dana@example.com", Role::Member),
                &overrides,
            )
        })
        .unwrap_err();

    assert!(matches!(
        err,
        ConsoleError::EnvironmentNotInProject { ref environment_id, ref project_id }
            if environment_id == "4" && project_id == "1"
    ));
    assert_consistent(&session);
}
