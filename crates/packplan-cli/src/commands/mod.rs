//! Command implementations for the packplan CLI.
//!
//! - [`resolve`] - Resolve and print the bundler configuration
//! - [`check`] - Resolve and validate against the project tree

pub mod check;
pub mod resolve;

pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
