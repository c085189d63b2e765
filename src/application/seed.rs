//! Demo session seeding

use tracing::info;

use crate::domain::ports::Clock;
use crate::domain::store::AppState;
use crate::infrastructure::DemoData;

/// Replace `state` with the demo session: Sarah Chen signed in to the
/// NexaStack workspace with its two projects.
pub fn seed_demo_session(state: &mut AppState, clock: &dyn Clock) {
    let mut seeded = AppState::new();
    DemoData::new(clock).apply(&mut seeded);
    *state = seeded;
    info!(
        workspaces = state.workspaces().len(),
        projects = state.projects().len(),
        "demo session loaded"
    );
}
