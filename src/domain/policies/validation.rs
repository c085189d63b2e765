//! Form validation rules
//!
//! Each form is a static list of `(field, check, message)` rules evaluated
//! synchronously before anything reaches the store. A field reports only its
//! first failing rule; fields are reported in rule order.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Non-empty
    Required,
    /// At least `n` characters (not bytes)
    MinChars(usize),
    /// `local@domain.tld` address, same acceptance as the web signup form
    Email,
}

impl Check {
    pub fn passes(&self, value: &str) -> bool {
        match self {
            Check::Required => !value.is_empty(),
            Check::MinChars(n) => value.chars().count() >= *n,
            Check::Email => is_email(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

const fn rule(field: &'static str, check: Check, message: &'static str) -> FieldRule {
    FieldRule {
        field,
        check,
        message,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub name: &'static str,
    pub rules: &'static [FieldRule],
}

impl FormSchema {
    /// Validate `values` (pairs of field name and input). Fields absent from
    /// `values` are treated as empty input.
    pub fn validate(&self, values: &[(&str, &str)]) -> Result<(), ValidationErrors> {
        let mut errors: Vec<FieldError> = Vec::new();

        for rule in self.rules {
            if errors.iter().any(|e| e.field == rule.field) {
                continue;
            }
            let value = values
                .iter()
                .find(|(name, _)| *name == rule.field)
                .map(|(_, v)| *v)
                .unwrap_or("");
            if !rule.check.passes(value) {
                errors.push(FieldError {
                    field: rule.field.to_string(),
                    message: rule.message.to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }
}

pub const LOGIN: FormSchema = FormSchema {
    name: "login",
    rules: &[
        rule("email", Check::Email, "Please enter a valid email address"),
        rule("password", Check::Required, "Password is required"),
    ],
};

pub const PERSONAL_INFO: FormSchema = FormSchema {
    name: "personal-info",
    rules: &[
        rule(
            "firstName",
            Check::MinChars(2),
            "First name must be at least 2 characters",
        ),
        rule(
            "lastName",
            Check::MinChars(2),
            "Last name must be at least 2 characters",
        ),
        rule("email", Check::Email, "Please enter a valid email address"),
        rule(
            "password",
            Check::MinChars(8),
            "Password must be at least 8 characters",
        ),
    ],
};

pub const WORKSPACE_INFO: FormSchema = FormSchema {
    name: "workspace-info",
    rules: &[rule(
        "workspaceName",
        Check::MinChars(3),
        "Workspace name must be at least 3 characters",
    )],
};

pub const PROJECT_INFO: FormSchema = FormSchema {
    name: "project-info",
    rules: &[
        rule(
            "name",
            Check::MinChars(3),
            "Project name must be at least 3 characters",
        ),
        rule(
            "description",
            Check::MinChars(5),
            "Description must be at least 5 characters",
        ),
    ],
};

pub const MEMBER_INVITE: FormSchema = FormSchema {
    name: "member-invite",
    rules: &[
        rule("name", Check::MinChars(2), "Name must be at least 2 characters"),
        rule("email", Check::Email, "Please enter a valid email address"),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Address shape accepted by the web console. The leading-dot and
/// double-dot guards are checked outside the pattern.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("Invalid email regex")
});

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}
