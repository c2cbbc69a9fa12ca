use clap::Parser;
use std::path::PathBuf;

/// Command-line interface configuration
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config.toml overriding the discovered one
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file path (defaults to the platform data dir)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Render one snapshot and exit instead of reading commands
    #[arg(long)]
    pub headless: bool,
}
