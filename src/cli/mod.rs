//! Command-line interface for conf-resolve
//!
//! Provides `get`, `dump`, `files` and `detect` subcommands over one resolution engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod detect;
mod dump;
mod get;
mod utils;

use utils::{EnvArgs, SourceArgs};

/// Discover, parse and merge JSON, TOML, YAML and dotenv configuration files
#[derive(Parser)]
#[command(name = "conf-resolve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    sources: SourceArgs,

    #[command(flatten)]
    env: EnvArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value of one key
    Get(get::GetArgs),

    /// Print the merged configuration as JSON
    Dump(dump::DumpArgs),

    /// List the files that were merged, in merge order
    Files,

    /// Show which format each file name maps to
    Detect(detect::DetectArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Get(args) => get::run(args, &cli.sources, &cli.env),
        Commands::Dump(args) => dump::run(args, &cli.sources, &cli.env),
        Commands::Files => dump::run_files(&cli.sources, &cli.env),
        Commands::Detect(args) => detect::run(args),
    }
}
