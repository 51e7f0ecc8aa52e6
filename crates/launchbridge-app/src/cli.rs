use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Launch bridge host harness: drives the intent bridge the way a host
/// component would and prints the channel traffic as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "launchbridge", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize one host event given as JSON, e.g. '{"action":"VIEW","uri":"file:///a.mp4"}'.
    Normalize { event: String },
    /// Run a JSON-lines lifecycle script (stdin when no file is given).
    Replay { script: Option<PathBuf> },
    /// Print the effective configuration.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
