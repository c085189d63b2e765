//! Create Project Use Case
//!
//! Three-step wizard:
//! 1. Project info (name, description)
//! 2. Environments (all three selected by default)
//! 3. Review, then submit
//!
//! Submitting builds the project with the current user as sole owner and adds
//! it to the current workspace. The wizard then resets for the next project.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::Project;
use crate::domain::policies::Action;
use crate::domain::ports::{Clock, IdGenerator};
use crate::domain::services::{build_project, NewProject};
use crate::domain::store::AppState;
use crate::domain::value_objects::EnvironmentKind;
use crate::error::{ConsoleError, ConsoleResult};

use super::access::{AccessMode, AccessScope};
use super::forms::ProjectInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateProjectStep {
    #[default]
    ProjectInfo,
    Environments,
    Review,
}

impl CreateProjectStep {
    pub const ALL: [CreateProjectStep; 3] = [
        CreateProjectStep::ProjectInfo,
        CreateProjectStep::Environments,
        CreateProjectStep::Review,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            CreateProjectStep::ProjectInfo => "Project Info",
            CreateProjectStep::Environments => "Environments",
            CreateProjectStep::Review => "Review",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            CreateProjectStep::ProjectInfo => 0,
            CreateProjectStep::Environments => 1,
            CreateProjectStep::Review => 2,
        }
    }

    fn following(&self) -> Self {
        match self {
            CreateProjectStep::ProjectInfo => CreateProjectStep::Environments,
            CreateProjectStep::Environments | CreateProjectStep::Review => {
                CreateProjectStep::Review
            }
        }
    }

    fn preceding(&self) -> Self {
        match self {
            CreateProjectStep::ProjectInfo | CreateProjectStep::Environments => {
                CreateProjectStep::ProjectInfo
            }
            CreateProjectStep::Review => CreateProjectStep::Environments,
        }
    }
}

pub struct CreateProjectWizard {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    access: AccessMode,
    step: CreateProjectStep,
    pub info: ProjectInfo,
    pub environments: Vec<EnvironmentKind>,
}

impl CreateProjectWizard {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ids,
            clock,
            access: AccessMode::default(),
            step: CreateProjectStep::default(),
            info: ProjectInfo::default(),
            environments: EnvironmentKind::ALL.to_vec(),
        }
    }

    pub fn with_access(mut self, access: AccessMode) -> Self {
        self.access = access;
        self
    }

    pub fn step(&self) -> CreateProjectStep {
        self.step
    }

    /// Toggle one environment on or off, keeping the standard ordering.
    pub fn set_environment(&mut self, kind: EnvironmentKind, enabled: bool) {
        self.environments.retain(|k| *k != kind);
        if enabled {
            self.environments.push(kind);
            self.environments.sort_by_key(|k| k.index());
        }
    }

    /// Validate the current step and advance. On the review step this is a
    /// no-op; use [`submit`](Self::submit).
    pub fn next(&mut self) -> ConsoleResult<CreateProjectStep> {
        if self.step == CreateProjectStep::ProjectInfo {
            self.info.validate()?;
        }
        self.step = self.step.following();
        Ok(self.step)
    }

    pub fn back(&mut self) -> CreateProjectStep {
        self.step = self.step.preceding();
        self.step
    }

    /// Discard input and return to the first step.
    pub fn cancel(&mut self) {
        self.step = CreateProjectStep::default();
        self.info = ProjectInfo::default();
        self.environments = EnvironmentKind::ALL.to_vec();
    }

    /// Create the project in the current workspace.
    pub fn submit(&mut self, state: &mut AppState) -> ConsoleResult<Project> {
        if self.step != CreateProjectStep::Review {
            return Err(ConsoleError::WizardStep {
                expected: CreateProjectStep::Review.title(),
                actual: self.step.title(),
            });
        }
        self.info.validate()?;

        let Some(owner) = state.current_user() else {
            warn!("create project without a signed-in user");
            return Err(ConsoleError::NoCurrentUser);
        };
        let Some(workspace) = state.current_workspace() else {
            warn!("create project without a current workspace");
            return Err(ConsoleError::NoCurrentWorkspace);
        };
        self.access
            .authorize(state, AccessScope::Workspace(workspace), Action::CreateProject)?;

        let project = build_project(
            &NewProject {
                name: self.info.name.clone(),
                description: self.info.description.clone(),
                environments: self.environments.clone(),
            },
            &workspace.id,
            owner,
            self.ids.as_ref(),
            self.clock.as_ref(),
        );

        state.add_project(project.clone());
        info!(project = %project.id, workspace = %project.workspace_id, "project created");

        self.cancel();
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;
    use crate::domain::services::check_consistency;
    use crate::domain::value_objects::{PermissionLevel, Role};
    use crate::infrastructure::{seed_demo_state_with, FixedClock, SequentialIds};

    fn wizard() -> CreateProjectWizard {
        CreateProjectWizard::new(
            Arc::new(SequentialIds::starting_at(100)),
            Arc::new(FixedClock::at(1_700_000_000)),
        )
    }

    fn filled(mut wizard: CreateProjectWizard) -> CreateProjectWizard {
        wizard.info = ProjectInfo {
            name: "Billing".into(),
            description: "Invoices and payments".into(),
        };
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard
    }

    #[test]
    fn defaults_select_all_environments() {
        let wizard = wizard();
        assert_eq!(wizard.environments, EnvironmentKind::ALL.to_vec());
        assert_eq!(wizard.step(), CreateProjectStep::ProjectInfo);
    }

    #[test]
    fn submit_adds_owned_project_everywhere() {
        let mut state = seed_demo_state_with(&FixedClock::epoch());
        let mut wizard = filled(wizard());

        let project = wizard.submit(&mut state).unwrap();

        assert_eq!(project.workspace_id, "1");
        assert_eq!(project.environments.len(), 3);
        assert_eq!(project.members.len(), 1);
        assert_eq!(project.members[0].role, Role::Owner);
        assert!(project.members[0]
            .environment_permissions
            .iter()
            .all(|p| p.permission == PermissionLevel::FullAccess));

        assert_eq!(state.projects().len(), 3);
        assert!(state.current_workspace().unwrap().projects.contains(&project));
        assert!(state.workspaces()[0].projects.contains(&project));
        assert!(check_consistency(&state).is_consistent());
        assert_eq!(wizard.step(), CreateProjectStep::ProjectInfo);
        assert!(wizard.info.name.is_empty());
    }

    #[test]
    fn deselected_environments_are_skipped() {
        let mut state = seed_demo_state_with(&FixedClock::epoch());
        let mut wizard = wizard();
        wizard.set_environment(EnvironmentKind::Staging, false);
        let mut wizard = filled(wizard);

        let project = wizard.submit(&mut state).unwrap();
        let kinds: Vec<_> = project.environments.iter().map(|e| e.name).collect();
        assert_eq!(
            kinds,
            vec![EnvironmentKind::Development, EnvironmentKind::Production]
        );
    }

    #[test]
    fn short_name_blocks_first_step() {
        let mut wizard = wizard();
        wizard.info = ProjectInfo {
            name: "ab".into(),
            description: "Valid description".into(),
        };
        let Err(ConsoleError::Validation(errors)) = wizard.next() else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.message_for("name"),
            Some("Project name must be at least 3 characters")
        );
        assert_eq!(wizard.step(), CreateProjectStep::ProjectInfo);
    }

    #[test]
    fn submit_before_review_is_rejected() {
        let mut wizard = wizard();
        let err = wizard.submit(&mut AppState::new()).unwrap_err();
        assert!(matches!(err, ConsoleError::WizardStep { .. }));
    }

    #[test]
    fn submit_without_workspace_errors_and_leaves_state() {
        let mut state = AppState::new();
        state.set_current_user(Some(User::new("u1", "Sarah Chen", "sc@example.com")));
        let before = state.clone();

        let mut wizard = filled(wizard());
        let err = wizard.submit(&mut state).unwrap_err();
        assert!(matches!(err, ConsoleError::NoCurrentWorkspace));
        assert_eq!(state, before);
    }

    #[test]
    fn submit_without_user_errors() {
        let mut wizard = filled(wizard());
        let err = wizard.submit(&mut AppState::new()).unwrap_err();
        assert!(matches!(err, ConsoleError::NoCurrentUser));
    }

    #[test]
    fn enforced_viewer_cannot_create() {
        let mut state = seed_demo_state_with(&FixedClock::epoch());
        state.set_current_user(Some(User::new("v1", "Val Viewer", "val@example.com")));
        let before = state.clone();

        let mut wizard = filled(wizard().with_access(AccessMode::EnforceRoles));
        let err = wizard.submit(&mut state).unwrap_err();
        assert!(matches!(err, ConsoleError::Forbidden { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn back_and_cancel() {
        let mut wizard = filled(wizard());
        assert_eq!(wizard.back(), CreateProjectStep::Environments);
        assert_eq!(wizard.back(), CreateProjectStep::ProjectInfo);
        assert_eq!(wizard.back(), CreateProjectStep::ProjectInfo);

        wizard.set_environment(EnvironmentKind::Production, false);
        wizard.cancel();
        assert_eq!(wizard.environments, EnvironmentKind::ALL.to_vec());
        assert!(wizard.info.description.is_empty());
    }
}
