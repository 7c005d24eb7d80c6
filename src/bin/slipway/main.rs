//! Slipway CLI - build configuration for Python native-extension packages

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("slipway=debug")
    } else {
        EnvFilter::new("slipway=info")
    };

    // Logs go to stderr; stdout is reserved for plan output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Plan(args) => commands::plan::execute(args, cli.manifest_path.as_deref()),
        Commands::Targets(args) => commands::targets::execute(args, cli.manifest_path.as_deref()),
        Commands::Symbols(args) => commands::symbols::execute(args, cli.manifest_path.as_deref()),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
