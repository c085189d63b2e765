//! Domain Policies
//!
//! Rules that gate input and actions before they reach the store.

mod access;
pub mod validation;

pub use access::{role_permits, Action};
pub use validation::{Check, FieldError, FieldRule, FormSchema, ValidationErrors};
