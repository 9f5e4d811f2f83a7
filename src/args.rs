//! Command-line argument parsing for the bazar binary

use clap::Parser;

/// Interactive client for the BAZAR.COM bookstore
#[derive(Parser, Debug, Clone)]
#[command(name = "bazar", version, about)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "bazar.toml", env = "BAZAR_CONFIG")]
    pub config: String,

    /// Show debug-level detail on the console
    #[arg(short, long, env = "BAZAR_VERBOSE")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, env = "BAZAR_NO_COLOR")]
    pub no_color: bool,
}
