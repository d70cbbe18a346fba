use clap::Parser;
use serde::{Deserialize, Serialize};

/// The guide takes no functional flags; the only switch adjusts the log
/// filter. Everything else is driven interactively from stdin.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sets-guide")]
#[command(about = "An interactive guide to Rust's set collections")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
