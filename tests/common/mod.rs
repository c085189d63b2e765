#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};
use std::sync::Arc;

use nexastack::config::Config;
use nexastack::infrastructure::{FixedClock, SequentialIds};
use nexastack::Session;

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_nexastack")
}

/// Run the binary in `dir` with no user config and no NEXASTACK_* leakage.
pub fn run(dir: &Path, args: &[&str]) -> Output {
    run_with_env(dir, args, &[])
}

pub fn run_with_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(bin());
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("NEXASTACK_SEED")
        .env_remove("NEXASTACK_ENFORCE_ROLES")
        .env_remove("NEXASTACK_COLOR")
        .env_remove("NEXASTACK_LOG")
        .env("NO_COLOR", "1")
        .args(args);
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run nexastack")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Deterministic session: sequential ids from 1000, clock at the epoch.
pub fn session(config: &Config) -> Session {
    Session::with_parts(
        config,
        Arc::new(SequentialIds::starting_at(1000)),
        Arc::new(FixedClock::epoch()),
    )
}

pub fn unseeded() -> Config {
    let mut config = Config::default();
    config.session.seed = false;
    config
}
