//! Configuration module for NexaStack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NEXASTACK_*)
//! 3. `--config` path, else `./nexastack.toml`
//! 4. User config (`$XDG_CONFIG_HOME/nexastack/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, with_overrides_from, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    AccessConfig, ColorMode, Config, LogConfig, LogLevel, OutputConfig, SessionConfig,
};
