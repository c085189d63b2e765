//! IdGenerator port - source of opaque entity identifiers
//!
//! Identifiers are assigned once at creation and never change.

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
