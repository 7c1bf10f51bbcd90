//! Shared CLI arguments and engine construction.

use anyhow::{Context, Result};
use clap::Args;
use conf_resolve::{Environment, Locations, ResolutionEngine, ENV_VAR};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Fallback directory scanned when the conf dir is missing [default: current directory]
    #[arg(long, value_name = "DIR", env = "CONF_RESOLVE_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Primary config directory [default: <BASE_DIR>/configs]
    #[arg(long, value_name = "DIR", env = "CONF_RESOLVE_CONF_DIR")]
    pub conf_dir: Option<PathBuf>,

    /// Directory or file to load, merged in the order given (repeatable; disables discovery)
    #[arg(short, long = "source", value_name = "PATH")]
    pub sources: Vec<PathBuf>,
}

#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct EnvArgs {
    /// Use the development environment section
    #[arg(long)]
    pub dev: bool,

    /// Use the staging environment section
    #[arg(long)]
    pub staging: bool,

    /// Use the production environment section
    #[arg(long)]
    pub prod: bool,

    /// Use a named environment section
    #[arg(long = "env", value_name = "NAME")]
    pub name: Option<String>,
}

impl EnvArgs {
    /// Flags win; otherwise the environment variable; otherwise development.
    pub fn resolve(&self) -> Environment {
        if self.dev {
            Environment::Development
        } else if self.staging {
            Environment::Staging
        } else if self.prod {
            Environment::Production
        } else if let Some(name) = &self.name {
            name.parse().unwrap_or_default()
        } else {
            Environment::from_var(ENV_VAR)
        }
    }
}

/// Build an engine from the CLI's location and source flags.
pub fn build_engine(sources: &SourceArgs, env: &EnvArgs) -> Result<ResolutionEngine> {
    let base_dir = match &sources.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let locations = match &sources.conf_dir {
        Some(conf_dir) => Locations::with_dirs(conf_dir, base_dir),
        None => Locations::new(base_dir),
    };

    let mut builder = ResolutionEngine::builder().locations(locations).environment(env.resolve());
    for path in &sources.sources {
        builder = if path.is_dir() {
            builder.add_config_dir(path)
        } else {
            builder.add_config_file(path)
        };
    }

    Ok(builder.build())
}
