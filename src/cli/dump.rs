//! Dump and files command implementations

use anyhow::{Context, Result};
use clap::Args;
use conf_resolve::ConfigValue;

use super::utils::{build_engine, EnvArgs, SourceArgs};

#[derive(Args)]
pub struct DumpArgs {
    /// Dump only the active environment section
    #[arg(long)]
    pub scoped: bool,

    /// Print on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: DumpArgs, sources: &SourceArgs, env: &EnvArgs) -> Result<()> {
    let engine = build_engine(sources, env)?;
    let table = engine.table()?;

    let table = if args.scoped {
        let section = engine.environment().section();
        table.get(section).and_then(ConfigValue::as_mapping).ok_or_else(|| {
            anyhow::anyhow!("Environment '{}' not found in configuration", section)
        })?
    } else {
        table
    };

    let rendered = if args.compact {
        serde_json::to_string(table)
    } else {
        serde_json::to_string_pretty(table)
    }
    .context("Failed to render configuration as JSON")?;

    println!("{}", rendered);
    Ok(())
}

pub fn run_files(sources: &SourceArgs, env: &EnvArgs) -> Result<()> {
    let engine = build_engine(sources, env)?;
    for path in engine.merged_files()? {
        println!("{}", path.display());
    }
    Ok(())
}
