//! Update Project Use Case
//!
//! Renames or re-describes an existing project. The store receives the whole
//! new value, so environments and members are carried over explicitly.

use tracing::{info, warn};

use crate::domain::entities::Project;
use crate::domain::policies::Action;
use crate::domain::services::find_project;
use crate::domain::store::AppState;
use crate::error::{ConsoleError, ConsoleResult};

use super::access::{AccessMode, AccessScope};
use super::forms::ProjectInfo;

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateProjectUseCase {
    access: AccessMode,
}

impl UpdateProjectUseCase {
    pub fn new(access: AccessMode) -> Self {
        Self { access }
    }

    pub fn execute(
        &self,
        state: &mut AppState,
        project_id: &str,
        info: &ProjectInfo,
    ) -> ConsoleResult<Project> {
        info.validate()?;

        let Some(existing) = find_project(state, project_id) else {
            warn!(project = project_id, "update of unknown project");
            return Err(ConsoleError::ProjectNotFound {
                id: project_id.to_string(),
            });
        };
        self.access
            .authorize(state, AccessScope::Project(existing), Action::EditProject)?;

        let updated = Project {
            name: info.name.clone(),
            description: info.description.clone(),
            ..existing.clone()
        };
        state.update_project(updated.clone());

        info!(project = %updated.id, "project updated");
        Ok(updated)
    }
}
