//! Drydock CLI - purge, compile strictly, report.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drydock::ops::build;
use drydock::BuildRequest;

mod cli;

use cli::Cli;

fn main() {
    match run() {
        // Diagnostics were already reported line by line; the exit code is
        // the only extra signal a failed compilation gets.
        Ok(outcome) if outcome.success => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<build::BuildOutcome> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("drydock=debug")
    } else {
        EnvFilter::new("drydock=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // All paths are resolved here, once, and never re-resolved mid-run.
    let project_root = std::env::current_dir().context("failed to determine current directory")?;
    let request = BuildRequest::conventional(&project_root);

    println!("Building {} (strict profile)", request.entry_file.display());

    let outcome = build::execute(&request)?;
    Ok(outcome)
}
