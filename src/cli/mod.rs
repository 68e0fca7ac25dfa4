//! CLI module for massif
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP service
//! - seed: upload the sample data set to a running service
//! - smoke: run the full client scenario against a running service

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, sample_mountains};
pub use errors::{CliError, CliResult};
