//! Infrastructure Layer
//!
//! Concrete implementations of domain ports, plus the demo seed.
//!
//! ## Structure
//!
//! - `ids` - Identifier generators (UUID, sequential)
//! - `clock` - System and fixed clocks
//! - `seed` - Demo session data

mod clock;
mod ids;
mod seed;

pub use clock::{FixedClock, SystemClock};
pub use ids::{SequentialIds, UuidGenerator};
pub use seed::{seed_demo_state_with, DemoData};
