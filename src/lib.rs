//! conf-resolve: startup configuration from JSON, TOML, YAML and dotenv files
//!
//! A [`ResolutionEngine`] scans a config directory once, parses every file it
//! recognises, and merges the results into one table that is then read-only.
//!
//! ```no_run
//! use conf_resolve::{Locations, ResolutionEngine};
//!
//! let engine = ResolutionEngine::new(Locations::new("/srv/app"));
//! let url = engine.get("DATABASE_URL", None)?;
//! let port = engine.get_or("port", 8080_i64)?;
//! # Ok::<(), conf_resolve::ConfigError>(())
//! ```

use once_cell::sync::Lazy;

pub mod config;
pub mod domain;
pub mod parse;
pub mod scan;

pub use config::{EngineBuilder, LoadState, LoadedConfig, Locations, ResolutionEngine, Source};
pub use domain::{
    detect, detect_path, ConfigError, ConfigTable, ConfigValue, Environment, Format, Result,
};
pub use parse::parse_path;
pub use scan::{DirectoryScanner, FsScanner};

/// Process variable naming the active environment of the shared engine.
pub const ENV_VAR: &str = "CONF_RESOLVE_ENV";

static GLOBAL: Lazy<ResolutionEngine> = Lazy::new(|| {
    ResolutionEngine::builder()
        .locations(Locations::from_current_dir())
        .environment(Environment::from_var(ENV_VAR))
        .build()
});

/// The process-wide engine, rooted at the working directory of first use.
///
/// Applications that want control over locations or tests that need
/// isolation should build their own [`ResolutionEngine`].
pub fn global() -> &'static ResolutionEngine {
    &GLOBAL
}

/// Shorthand for [`ResolutionEngine::get`] on the [`global`] engine.
pub fn get(key: &str, default: Option<ConfigValue>) -> Result<ConfigValue> {
    global().get(key, default)
}
