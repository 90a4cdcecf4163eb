//! Kinship CLI library.
//!
//! Member and relationship management against the SQLite store, plus kinship
//! label queries resolved over a snapshot of one scope.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
