//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Running with no subcommand on a terminal opens the interactive menu

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// NexaStack - workspaces, projects and environment access
#[derive(Parser, Debug)]
#[command(name = "nexastack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'nexastack' without arguments for the interactive console.")]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./nexastack.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Workspace overview: counts and recent projects
    Dashboard,

    /// List projects
    Projects,

    /// Show one project with its environment access grid
    Project {
        /// Project id
        id: String,
    },

    /// List members of the current workspace
    Members,

    /// Show workspace settings
    Settings,

    /// Resolve a console path (e.g. /projects/1) and render its view
    Open {
        /// Route path
        path: String,
    },

    /// Verify that all project copies agree (exits non-zero on issues)
    Check,
}
