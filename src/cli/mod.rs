//! CLI module for Nex.Ai
//!
//! Provides command-line interface parsing for the nex-server binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod init;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Nex.Ai - chat completion proxy for the Nex.Ai web client
#[derive(Parser, Debug)]
#[command(
    name = "nex-server",
    version,
    about = "Nex.Ai - chat completion proxy for the Nex.Ai web client",
    long_about = "Forwards chat histories from the Nex.Ai web client to an OpenAI-compatible\n\
                  chat completion API.\n\n\
                  Run without arguments to start the server, or use 'init' to write a starter nex.toml.",
    after_help = "EXAMPLES:\n    \
                  nex-server init              # Write nex.toml and .env.example\n    \
                  nex-server                   # Start the server\n    \
                  nex-server --port 9000       # Start on another port\n    \
                  nex-server config --validate # Check the resolved configuration"
)]
pub struct Cli {
    /// Path to the configuration file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "nex.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override the listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter nex.toml and .env.example
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files without prompting
        #[arg(short, long)]
        force: bool,

        /// Host address for the server
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "8001")]
        port: u16,
    },

    /// Show the resolved configuration
    Config {
        /// Exit with an error if the configuration is invalid or the API key is missing
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
