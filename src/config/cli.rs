use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "toml_zoo")]
#[command(about = "Run the zoo tour with a roster loaded from a TOML file")]
pub struct CliConfig {
    /// Path to the TOML roster file
    #[arg(short, long, default_value = "zoo.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    /// Print the tour report as JSON after the tour
    #[arg(long)]
    pub json: bool,

    /// Validate and list the roster without running the tour
    #[arg(long)]
    pub dry_run: bool,
}
