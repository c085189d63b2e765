//! Every mutation keeps the global list, the current workspace and its
//! workspace-list entry in agreement.

use std::collections::HashMap;

use proptest::prelude::*;

use nexastack::application::{MemberInvite, ProjectInfo};
use nexastack::config::Config;
use nexastack::domain::services::check_consistency;
use nexastack::domain::value_objects::{EnvironmentKind, Role};
use nexastack::Session;

use super::common::session;

#[derive(Debug, Clone)]
enum Op {
    Create {
        name: String,
        description: String,
        environments: [bool; 3],
    },
    Update {
        pick: usize,
        name: String,
    },
    AddProjectMember {
        pick: usize,
        name: String,
        role: Role,
    },
    Invite {
        name: String,
        role: Role,
    },
}

fn valid_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9]{3,12}( [A-Za-z0-9]{1,8})?").unwrap()
}

/// Mostly valid, sometimes too short.
fn any_name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => valid_name(),
        1 => proptest::string::string_regex("[a-z]{0,1}").unwrap(),
    ]
}

fn role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any_name(), "[a-z]{5,20}", any::<[bool; 3]>()).prop_map(
            |(name, description, environments)| Op::Create {
                name,
                description,
                environments,
            }
        ),
        (any::<usize>(), any_name()).prop_map(|(pick, name)| Op::Update { pick, name }),
        (any::<usize>(), any_name(), role())
            .prop_map(|(pick, name, role)| Op::AddProjectMember { pick, name, role }),
        (any_name(), role()).prop_map(|(name, role)| Op::Invite { name, role }),
    ]
}

fn pick_project(session: &Session, pick: usize) -> Option<String> {
    session.store.read(|s| {
        let projects = s.projects();
        (!projects.is_empty()).then(|| projects[pick % projects.len()].id.clone())
    })
}

/// Apply `op`; on error the state must be untouched.
fn apply(session: &Session, op: &Op) {
    let before = session.store.snapshot();

    let failed = match op {
        Op::Create {
            name,
            description,
            environments,
        } => {
            let mut wizard = session.create_project_wizard();
            wizard.info = ProjectInfo {
                name: name.clone(),
                description: description.clone(),
            };
            for (kind, on) in EnvironmentKind::ALL.iter().zip(environments) {
                wizard.set_environment(*kind, *on);
            }
            wizard.next().is_err()
                || wizard.next().is_err()
                || session.store.write(|s| wizard.submit(s)).is_err()
        }
        Op::Update { pick, name } => {
            let Some(id) = pick_project(session, *pick) else {
                return;
            };
            let update = session.update_project_use_case();
            let info = ProjectInfo {
                name: name.clone(),
                description: "Updated description".to_string(),
            };
            session
                .store
                .write(|s| update.execute(s, &id, &info))
                .is_err()
        }
        Op::AddProjectMember { pick, name, role } => {
            let Some(id) = pick_project(session, *pick) else {
                return;
            };
            let add = session.add_project_member_use_case();
            let invite = MemberInvite::new(name.clone(), "someone@example.com", *role);
            session
                .store
                .write(|s| add.execute(s, &id, &invite, &HashMap::new()))
                .is_err()
        }
        Op::Invite { name, role } => {
            let invite_uc = session.invite_member_use_case();
            let invite = MemberInvite::new(name.clone(), "someone@example.com", *role);
            session
                .store
                .write(|s| invite_uc.execute(s, "1", &invite))
                .is_err()
        }
    };

    if failed {
        assert_eq!(session.store.snapshot(), before, "failed {:?} changed state", op);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any sequence of use cases the checker finds nothing.
    #[test]
    fn property_use_cases_keep_copies_in_agreement(ops in prop::collection::vec(op(), 0..24)) {
        let session = session(&Config::default());
        for op in &ops {
            apply(&session, op);
            let report = session.store.read(check_consistency);
            prop_assert!(report.is_consistent(), "after {:?}: {:?}", op, report.issues);
        }

        let counts = session.store.read(|s| {
            let current = s.current_workspace().map(|w| w.projects.len());
            let listed = s.workspaces().first().map(|w| w.projects.len());
            (s.projects().len(), current, listed)
        });
        prop_assert_eq!(Some(counts.0), counts.1);
        prop_assert_eq!(Some(counts.0), counts.2);
    }

    /// PROPERTY: every created project gets exactly the selected environments,
    /// each pointing back at the project.
    #[test]
    fn property_created_environments_match_selection(
        environments in any::<[bool; 3]>(),
        name in valid_name(),
    ) {
        let session = session(&Config::default());
        let mut wizard = session.create_project_wizard();
        wizard.info = ProjectInfo { name, description: "Generated project".to_string() };
        for (kind, on) in EnvironmentKind::ALL.iter().zip(&environments) {
            wizard.set_environment(*kind, *on);
        }
        wizard.next().unwrap();
        wizard.next().unwrap();
        let project = session.store.write(|s| wizard.submit(s)).unwrap();

        let expected: Vec<EnvironmentKind> = EnvironmentKind::ALL
            .iter()
            .zip(&environments)
            .filter(|(_, on)| **on)
            .map(|(k, _)| *k)
            .collect();
        let kinds: Vec<EnvironmentKind> = project.environments.iter().map(|e| e.name).collect();
        prop_assert_eq!(kinds, expected);
        prop_assert!(project.environments.iter().all(|e| e.project_id == project.id));
        prop_assert_eq!(
            project.members[0].environment_permissions.len(),
            project.environments.len()
        );
    }
}
