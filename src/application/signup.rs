//! Signup Use Case
//!
//! Two-step wizard:
//! 1. Personal information (name, email, password)
//! 2. Create workspace (name, optional description)
//!
//! Completing it creates the user and their first workspace, owned by them,
//! and makes both current.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{User, Workspace, WorkspaceMember};
use crate::domain::ports::{Clock, IdGenerator};
use crate::domain::store::AppState;
use crate::domain::value_objects::Role;
use crate::error::{ConsoleError, ConsoleResult};

use super::forms::{PersonalInfo, WorkspaceInfo};
use super::redirect::Redirect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupStep {
    #[default]
    PersonalInformation,
    CreateWorkspace,
}

impl SignupStep {
    pub const ALL: [SignupStep; 2] = [SignupStep::PersonalInformation, SignupStep::CreateWorkspace];

    pub fn title(&self) -> &'static str {
        match self {
            SignupStep::PersonalInformation => "Personal Information",
            SignupStep::CreateWorkspace => "Create Workspace",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SignupStep::PersonalInformation => 0,
            SignupStep::CreateWorkspace => 1,
        }
    }
}

/// What a completed signup created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    pub user_id: String,
    pub workspace_id: String,
    pub redirect: Redirect,
}

pub struct SignupWizard {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    step: SignupStep,
    pub personal: PersonalInfo,
    pub workspace: WorkspaceInfo,
}

impl SignupWizard {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ids,
            clock,
            step: SignupStep::default(),
            personal: PersonalInfo::default(),
            workspace: WorkspaceInfo::default(),
        }
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    /// Validate personal information and advance to the workspace step.
    pub fn next(&mut self) -> ConsoleResult<SignupStep> {
        self.expect_step(SignupStep::PersonalInformation)?;
        self.personal.validate()?;
        self.step = SignupStep::CreateWorkspace;
        Ok(self.step)
    }

    pub fn back(&mut self) -> SignupStep {
        self.step = SignupStep::PersonalInformation;
        self.step
    }

    /// Validate the workspace step and create the account.
    pub fn complete(&mut self, state: &mut AppState) -> ConsoleResult<SignupOutcome> {
        self.expect_step(SignupStep::CreateWorkspace)?;
        self.workspace.validate()?;

        let user = User::new(
            self.ids.next_id(),
            self.personal.full_name(),
            self.personal.email.clone(),
        );
        let workspace = Workspace::new(
            self.ids.next_id(),
            self.workspace.workspace_name.clone(),
            self.clock.now(),
        )
        .with_description(self.workspace.description.clone())
        .with_member(WorkspaceMember::for_user(self.ids.next_id(), &user, Role::Owner));

        let outcome = SignupOutcome {
            user_id: user.id.clone(),
            workspace_id: workspace.id.clone(),
            redirect: Redirect::Projects,
        };

        state.set_current_user(Some(user));
        state.add_workspace(workspace.clone());
        state.set_current_workspace(Some(workspace));

        info!(user = %outcome.user_id, workspace = %outcome.workspace_id, "account created");
        Ok(outcome)
    }

    fn expect_step(&self, expected: SignupStep) -> ConsoleResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(ConsoleError::WizardStep {
                expected: expected.title(),
                actual: self.step.title(),
            })
        }
    }
}
