//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod read;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the lines of one or more files
    Read(read::ReadArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Read(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
