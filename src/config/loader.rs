//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ConsoleError, ConsoleResult};

use super::types::{ColorMode, Config, LogLevel};

pub use crate::domain::value_objects::ConfigWarning;

pub const PROJECT_CONFIG_FILE: &str = "nexastack.toml";

/// A resolved configuration and where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when only defaults and environment were used
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConsoleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConsoleError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

pub fn discover(explicit: Option<&Path>, cwd: &Path) -> ConsoleResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            let user = user_config_path();
            if project.is_file() {
                Some(project)
            } else {
                user.filter(|p| p.is_file())
            }
        }
    };

    let Some(path) = candidate else {
        debug!("no config file found, using defaults");
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            ..LoadedConfig::default()
        });
    };

    debug!(path = %path.display(), "loading config");
    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        warnings,
        source: Some(path),
    })
}

/// `$XDG_CONFIG_HOME/nexastack/config.toml`, falling back to the platform
/// config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("nexastack").join("config.toml"))
}

/// Apply environment variable overrides (NEXASTACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`. Invalid values are logged and
/// ignored.
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("NEXASTACK_SEED") {
        match parse_bool(&value) {
            Some(seed) => config.session.seed = seed,
            None => invalid_env("NEXASTACK_SEED", &value, &["true", "false"]),
        }
    }

    if let Some(value) = lookup("NEXASTACK_ENFORCE_ROLES") {
        match parse_bool(&value) {
            Some(enforce) => config.access.enforce_roles = enforce,
            None => invalid_env("NEXASTACK_ENFORCE_ROLES", &value, &["true", "false"]),
        }
    }

    if let Some(value) = lookup("NEXASTACK_COLOR") {
        match ColorMode::parse(&value) {
            Some(color) => config.output.color = color,
            None => invalid_env("NEXASTACK_COLOR", &value, &["auto", "always", "never"]),
        }
    }

    if let Some(value) = lookup("NEXASTACK_LOG") {
        match LogLevel::parse(&value) {
            Some(level) => config.log.level = level,
            None => invalid_env(
                "NEXASTACK_LOG",
                &value,
                &["error", "warn", "info", "debug", "trace"],
            ),
        }
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid_env(var: &str, value: &str, valid: &[&str]) {
    let suggestion = nearest(value, valid);
    warn!(
        var,
        value,
        suggestion = suggestion.unwrap_or("-"),
        valid = %valid.join(", "),
        "ignoring invalid environment override"
    );
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|idx| idx + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "session",
    "seed",
    "access",
    "enforce_roles",
    "output",
    "color",
    "unicode",
    "log",
    "level",
];

fn suggest_key(unknown: &str) -> Option<String> {
    nearest(unknown, KNOWN_KEYS).map(str::to_string)
}

/// Nearest candidate within two edits; ties go to the earlier entry.
fn nearest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|candidate| (edit_distance(input, candidate), *candidate))
        .filter(|(dist, _)| *dist <= 2)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, candidate)| candidate)
}

/// Levenshtein distance over chars, single rolling row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}

#[cfg(test)]
pub(super) fn levenshtein_for_tests(a: &str, b: &str) -> usize {
    edit_distance(a, b)
}
