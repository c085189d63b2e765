//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Route parsing for console paths
//! - Creating sessions and use cases with infrastructure dependencies
//! - View models for text/JSON output
//!
//! ## Structure
//!
//! - `cli` - Command-line interface
//! - `routes` - Path to view mapping and sidebar navigation
//! - `factory` - Creates sessions and use cases (dependency injection)
//! - `output` - View models resolved from routes
//!
//! ## Usage
//!
//! ```ignore
//! use nexastack::config::Config;
//! use nexastack::presentation::{factory::Session, output::ViewModel, routes::Route};
//!
//! let session = Session::from_config(&Config::default());
//! let view = session.store.read(|s| ViewModel::resolve(&Route::Dashboard, s));
//! ```

pub mod cli;
pub mod factory;
pub mod output;
pub mod routes;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::Session;
pub use output::{OutputFormat, ViewModel};
pub use routes::{Route, NAVIGATION};
