//! Post-use-case destinations
//!
//! Use cases name where the console goes next without knowing about paths;
//! presentation maps each one to a route.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Project list of the current workspace
    Projects,
}
