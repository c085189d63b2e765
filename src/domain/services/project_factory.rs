//! Project and member construction
//!
//! Builds fully-formed records so that callers never hand the store a project
//! without an owner, or a member whose permissions point outside its project.

use std::collections::HashMap;

use crate::domain::entities::{
    Environment, EnvironmentPermission, Project, ProjectMember, User,
};
use crate::domain::ports::{Clock, IdGenerator};
use crate::domain::value_objects::{EnvironmentKind, PermissionLevel, Role};

/// Caller-supplied fields for a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub environments: Vec<EnvironmentKind>,
}

/// Build a project owned by `owner` inside `workspace_id`.
///
/// One environment is created per distinct kind, in the order given. The
/// owner becomes the only member, with full access to each environment.
pub fn build_project(
    new: &NewProject,
    workspace_id: &str,
    owner: &User,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
) -> Project {
    let project_id = ids.next_id();
    let created_at = clock.now();

    let mut kinds: Vec<EnvironmentKind> = Vec::with_capacity(new.environments.len());
    for kind in &new.environments {
        if !kinds.contains(kind) {
            kinds.push(*kind);
        }
    }

    let environments: Vec<Environment> = kinds
        .into_iter()
        .map(|kind| Environment {
            id: ids.next_id(),
            name: kind,
            project_id: project_id.clone(),
            created_at,
        })
        .collect();

    let environment_permissions = environments
        .iter()
        .map(|env| EnvironmentPermission {
            id: ids.next_id(),
            environment_id: env.id.clone(),
            permission: PermissionLevel::FullAccess,
        })
        .collect();

    let owner_member = ProjectMember {
        id: ids.next_id(),
        user_id: owner.id.clone(),
        name: owner.name.clone(),
        email: owner.email.clone(),
        role: Role::Owner,
        avatar: owner.avatar.clone(),
        environment_permissions,
    };

    Project {
        id: project_id,
        name: new.name.clone(),
        description: new.description.clone(),
        created_at,
        workspace_id: workspace_id.to_string(),
        environments,
        members: vec![owner_member],
    }
}

/// Profile of someone being added to a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl From<&User> for MemberProfile {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Build a project member with one permission per environment of `project`.
///
/// `overrides` is keyed by environment id; environments without an override
/// get [`PermissionLevel::default_for`] the role. Overrides for ids that are
/// not environments of `project` are ignored here; the application layer
/// rejects them before calling.
pub fn build_project_member(
    project: &Project,
    profile: &MemberProfile,
    role: Role,
    overrides: &HashMap<String, PermissionLevel>,
    ids: &dyn IdGenerator,
) -> ProjectMember {
    let environment_permissions = project
        .environments
        .iter()
        .map(|env| EnvironmentPermission {
            id: ids.next_id(),
            environment_id: env.id.clone(),
            permission: overrides
                .get(&env.id)
                .copied()
                .unwrap_or_else(|| PermissionLevel::default_for(role)),
        })
        .collect();

    ProjectMember {
        id: ids.next_id(),
        user_id: profile.user_id.clone(),
        name: profile.name.clone(),
        email: profile.email.clone(),
        role,
        avatar: profile.avatar.clone(),
        environment_permissions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{FixedClock, SequentialIds};

    fn owner() -> User {
        User::new("u1", "Sarah Chen", "sc@example.com")
    }

    fn new_project(envs: Vec<EnvironmentKind>) -> NewProject {
        NewProject {
            name: "Payments".to_string(),
            description: "Card processing".to_string(),
            environments: envs,
        }
    }

    #[test]
    fn creation_seeds_single_owner_with_full_access() {
        let ids = SequentialIds::new();
        let clock = FixedClock::epoch();
        let project = build_project(
            &new_project(vec![EnvironmentKind::Development, EnvironmentKind::Staging]),
            "W",
            &owner(),
            &ids,
            &clock,
        );

        assert_eq!(project.workspace_id, "W");
        assert_eq!(project.environments.len(), 2);
        assert_eq!(project.members.len(), 1);

        let member = &project.members[0];
        assert_eq!(member.role, Role::Owner);
        assert_eq!(member.user_id, "u1");
        assert_eq!(member.environment_permissions.len(), 2);
        for (perm, env) in member
            .environment_permissions
            .iter()
            .zip(project.environments.iter())
        {
            assert_eq!(perm.environment_id, env.id);
            assert_eq!(perm.permission, PermissionLevel::FullAccess);
            assert_eq!(env.project_id, project.id);
        }
    }

    #[test]
    fn duplicate_environment_kinds_are_collapsed() {
        let ids = SequentialIds::new();
        let project = build_project(
            &new_project(vec![
                EnvironmentKind::Production,
                EnvironmentKind::Development,
                EnvironmentKind::Production,
            ]),
            "W",
            &owner(),
            &ids,
            &FixedClock::epoch(),
        );

        let kinds: Vec<_> = project.environments.iter().map(|e| e.name).collect();
        assert_eq!(
            kinds,
            vec![EnvironmentKind::Production, EnvironmentKind::Development]
        );
    }

    #[test]
    fn ids_are_distinct() {
        let ids = SequentialIds::new();
        let project = build_project(
            &new_project(EnvironmentKind::ALL.to_vec()),
            "W",
            &owner(),
            &ids,
            &FixedClock::epoch(),
        );

        let mut all = vec![project.id.clone(), project.members[0].id.clone()];
        all.extend(project.environments.iter().map(|e| e.id.clone()));
        all.extend(
            project.members[0]
                .environment_permissions
                .iter()
                .map(|p| p.id.clone()),
        );
        let count = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), count);
    }

    #[test]
    fn member_gets_role_default_and_overrides() {
        let ids = SequentialIds::new();
        let project = build_project(
            &new_project(vec![EnvironmentKind::Development, EnvironmentKind::Production]),
            "W",
            &owner(),
            &ids,
            &FixedClock::epoch(),
        );
        let dev = project.environments[0].id.clone();
        let prod = project.environments[1].id.clone();

        let mut overrides = HashMap::new();
        overrides.insert(prod.clone(), PermissionLevel::ReadOnly);

        let profile = MemberProfile {
            user_id: "u2".to_string(),
            name: "Omar".to_string(),
            email: "omar@example.com".to_string(),
            avatar: None,
        };
        let member = build_project_member(&project, &profile, Role::Member, &overrides, &ids);

        assert_eq!(member.permission_for(&dev), Some(PermissionLevel::ReadWrite));
        assert_eq!(member.permission_for(&prod), Some(PermissionLevel::ReadOnly));
        assert_eq!(member.role, Role::Member);
    }
}
