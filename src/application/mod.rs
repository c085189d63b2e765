//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Turns ids the store would silently skip into errors
//!
//! ## Use Cases
//!
//! - `SignupWizard` - Personal info, then first workspace
//! - `login` - Form check and redirect
//! - `CreateProjectWizard` - Project info, environments, review
//! - `UpdateProjectUseCase` - Rename or re-describe a project
//! - `InviteMemberUseCase` - Add a workspace member
//! - `AddProjectMemberUseCase` - Add a project member with environment access
//! - `seed_demo_session` - Load the demo workspace

pub mod access;
pub mod create_project;
pub mod forms;
pub mod login;
pub mod members;
pub mod redirect;
mod seed;
pub mod signup;
pub mod update_project;

pub use access::{acting_role, AccessMode, AccessScope};
pub use create_project::{CreateProjectStep, CreateProjectWizard};
pub use forms::{LoginForm, MemberInvite, PersonalInfo, ProjectInfo, WorkspaceInfo};
pub use login::login;
pub use members::{AddProjectMemberUseCase, InviteMemberUseCase};
pub use redirect::Redirect;
pub use seed::seed_demo_session;
pub use signup::{SignupOutcome, SignupStep, SignupWizard};
pub use update_project::UpdateProjectUseCase;
