use clap::Parser;
use std::path::PathBuf;

/// Command-line interface for the console.log remover
#[derive(Parser, Debug)]
#[command(
    name = "sweep-logs",
    about = "Remove console.log statements from JavaScript/TypeScript files."
)]
pub struct LogsCli {
    /// Directory to process
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Show what would be removed without making changes
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Show detailed output for each file
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Parse CLI arguments for the console.log remover
pub fn parse_logs_args() -> LogsCli {
    LogsCli::parse()
}
