//! Domain Ports (Interfaces)
//!
//! The domain never generates ids or reads the wall clock directly.
//! Infrastructure provides concrete implementations.

pub mod clock;
pub mod id_generator;

pub use clock::Clock;
pub use id_generator::IdGenerator;
