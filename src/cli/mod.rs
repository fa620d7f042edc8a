//! CLI module for the user directory
//!
//! - `serve`: run the HTTP API
//! - `config`: print the effective configuration

pub mod serve;
pub mod show_config;

use clap::{Parser, Subcommand};

/// User Directory - CRUD and search over in-memory user records
#[derive(Parser)]
#[command(name = "user-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve(serve::ServeArgs),

    /// Print the effective configuration with secrets masked
    Config,
}
