//! Environment kind value object
//!
//! A project carries at most one environment of each kind in intended use;
//! the data model itself does not enforce it.

use serde::{Deserialize, Serialize};

/// Deployment stage of an environment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentKind {
    Development,
    Staging,
    Production,
}

impl EnvironmentKind {
    /// All kinds in pipeline order
    pub const ALL: [EnvironmentKind; 3] = [
        EnvironmentKind::Development,
        EnvironmentKind::Staging,
        EnvironmentKind::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentKind::Development => "development",
            EnvironmentKind::Staging => "staging",
            EnvironmentKind::Production => "production",
        }
    }

    /// Position in [`Self::ALL`]
    pub fn index(&self) -> usize {
        match self {
            EnvironmentKind::Development => 0,
            EnvironmentKind::Staging => 1,
            EnvironmentKind::Production => 2,
        }
    }

    /// Three-letter label used in compact permission badges
    pub fn short_label(&self) -> &'static str {
        &self.as_str()[..3]
    }

    pub fn description(&self) -> &'static str {
        match self {
            EnvironmentKind::Development => "For development and testing purposes",
            EnvironmentKind::Staging => "Pre-production environment for final testing",
            EnvironmentKind::Production => "Live production environment",
        }
    }
}

impl std::fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EnvironmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(EnvironmentKind::Development),
            "staging" | "stage" => Ok(EnvironmentKind::Staging),
            "production" | "prod" => Ok(EnvironmentKind::Production),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}
