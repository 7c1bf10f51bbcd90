//! Get command implementation

use anyhow::Result;
use clap::Args;
use conf_resolve::ConfigValue;

use super::utils::{build_engine, EnvArgs, SourceArgs};

#[derive(Args)]
pub struct GetArgs {
    /// Key to look up (case-sensitive, exactly as written in the file)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Value to print when the key is absent
    #[arg(short, long, value_name = "VALUE")]
    pub default: Option<String>,

    /// Look the key up inside the active environment section
    #[arg(long)]
    pub scoped: bool,
}

pub fn run(args: GetArgs, sources: &SourceArgs, env: &EnvArgs) -> Result<()> {
    let engine = build_engine(sources, env)?;

    let value = if args.scoped {
        match (engine.get_env(&args.key), args.default) {
            (Err(e), Some(default)) if e.is_not_found() => ConfigValue::String(default),
            (result, _) => result?,
        }
    } else {
        engine.get(&args.key, args.default.map(ConfigValue::String))?
    };

    println!("{}", value);
    Ok(())
}
