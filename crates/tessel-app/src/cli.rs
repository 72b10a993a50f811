use std::path::PathBuf;

use clap::Parser;

/// Tessel, a tiling web browser shell. Reads commands line by line and
/// answers with JSON state.
#[derive(Parser, Debug)]
#[command(name = "tessel", version, about)]
pub struct Args {
    /// Settings file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Open a first tab group on this address.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Read commands from this file instead of stdin.
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Do not watch the settings file for changes.
    #[arg(long)]
    pub no_watch: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
