//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Slipway - build configuration for Python native-extension packages
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to Slipway.toml (defaults to searching upward from the
    /// current directory)
    #[arg(long, global = true)]
    pub manifest_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble the extension plan and emit it as JSON
    Plan(PlanArgs),

    /// List the final build targets
    Targets(TargetsArgs),

    /// Show the exported-symbol manifest
    Symbols(SymbolsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct PlanArgs {
    /// Host platform to resolve for (linux, mac, windows; defaults to
    /// the running host)
    #[arg(long)]
    pub host: Option<String>,

    /// Resolve a release configuration (no debug information)
    #[arg(short, long)]
    pub release: bool,

    /// Baseline compiler options inherited from the toolchain wrapper,
    /// space-separated
    #[arg(long, env = "SLIPWAY_CFLAGS")]
    pub cflags: Option<String>,

    /// Host macOS version, e.g. 10.9 (only consulted on mac)
    #[arg(long)]
    pub macos_version: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write the plan to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct TargetsArgs {
    /// Host platform to resolve for (defaults to the running host)
    #[arg(long)]
    pub host: Option<String>,

    /// Show only hand-declared targets
    #[arg(long)]
    pub declared: bool,

    /// Show only scanner-discovered targets
    #[arg(long)]
    pub discovered: bool,
}

#[derive(Args)]
pub struct SymbolsArgs {}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
