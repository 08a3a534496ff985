//! CLI definitions using clap.

use clap::Parser;

/// Drydock - a strict-profile build orchestrator for a single Java module
#[derive(Parser)]
#[command(name = "drydock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
