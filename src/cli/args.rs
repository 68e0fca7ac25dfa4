//! CLI argument definitions using clap
//!
//! Commands:
//! - massif serve [--host <host>] [--port <port>]
//! - massif seed [--url <base-url>]
//! - massif smoke [--url <base-url>]

use clap::{Parser, Subcommand};

/// massif - a small, strict, in-memory mountain catalogue service
#[derive(Parser, Debug)]
#[command(name = "massif")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the mountain service
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },

    /// Upload the sample mountain set to a running service
    Seed {
        /// Base URL of the service
        #[arg(long, default_value = "http://localhost:8080")]
        url: String,
    },

    /// Run the end-to-end client scenario against a running service
    Smoke {
        /// Base URL of the service
        #[arg(long, default_value = "http://localhost:8080")]
        url: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
