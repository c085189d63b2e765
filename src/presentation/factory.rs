//! Use Case Factory
//!
//! Creates a session and its use cases with infrastructure dependencies wired
//! up. This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{
    seed_demo_session, AccessMode, AddProjectMemberUseCase, CreateProjectWizard,
    InviteMemberUseCase, SignupWizard, UpdateProjectUseCase,
};
use crate::config::Config;
use crate::domain::ports::{Clock, IdGenerator};
use crate::domain::store::SharedStore;
use crate::infrastructure::{SystemClock, UuidGenerator};

/// One running console: the store plus the services its use cases share.
#[derive(Clone)]
pub struct Session {
    pub store: SharedStore,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    access: AccessMode,
}

impl Session {
    /// Live session: UUID ids, system clock, seeded per `session.seed`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_parts(config, Arc::new(UuidGenerator), Arc::new(SystemClock))
    }

    pub fn with_parts(config: &Config, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        let store = SharedStore::default();
        if config.session.seed {
            store.write(|state| seed_demo_session(state, clock.as_ref()));
        }
        Self {
            store,
            ids,
            clock,
            access: AccessMode::from_config(config.access.enforce_roles),
        }
    }

    pub fn access(&self) -> AccessMode {
        self.access
    }

    pub fn signup_wizard(&self) -> SignupWizard {
        SignupWizard::new(self.ids.clone(), self.clock.clone())
    }

    pub fn create_project_wizard(&self) -> CreateProjectWizard {
        CreateProjectWizard::new(self.ids.clone(), self.clock.clone()).with_access(self.access)
    }

    pub fn update_project_use_case(&self) -> UpdateProjectUseCase {
        UpdateProjectUseCase::new(self.access)
    }

    pub fn invite_member_use_case(&self) -> InviteMemberUseCase {
        InviteMemberUseCase::new(self.ids.clone()).with_access(self.access)
    }

    pub fn add_project_member_use_case(&self) -> AddProjectMemberUseCase {
        AddProjectMemberUseCase::new(self.ids.clone()).with_access(self.access)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}
