//! Command-line arguments for nimbusd

use clap::Parser;
use std::path::PathBuf;

/// Nimbus weather relay daemon
#[derive(Debug, Parser)]
#[command(name = "nimbusd", version, about)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP server to (overrides configuration)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
