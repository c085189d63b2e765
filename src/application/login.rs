//! Login Use Case
//!
//! There is no credential backend: a well-formed login always succeeds.

use tracing::info;

use crate::error::ConsoleResult;
use super::forms::LoginForm;
use super::redirect::Redirect;

/// Validate `form` and return where to go next.
pub fn login(form: &LoginForm) -> ConsoleResult<Redirect> {
    form.validate()?;
    info!(email = %form.email, "logged in");
    Ok(Redirect::Projects)
}
