//! Linestash command-line entry point

use clap::Parser;
use linestash_cli::commands::Commands;

/// Read files one line at a time through a shared incremental line reader
#[derive(Debug, Parser)]
#[command(name = "linestash", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
