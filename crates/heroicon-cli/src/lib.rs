//! Heroicon Plus CLI
//!
//! Configuration, command line definition and command implementations behind
//! the `heroicon` binary.
//!
//! # Commands
//!
//! - `heroicon publish [--force]`: build style indexes and publish the bundled tree
//! - `heroicon serve`: run the HTTP endpoints
//! - `heroicon resolve <value>`: print the public URL of a stored value
//! - `heroicon search <style> [query]`: list matching icon names

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::cli;
pub use commands::{run_publish, run_resolve, run_search, run_serve, PublishOutcome};
pub use config::{ConfigError, HeroiconConfig, ServerConfig};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
