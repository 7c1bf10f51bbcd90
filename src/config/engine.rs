//! The resolution engine: load once, answer lookups forever

use super::locations::Locations;
use super::merge::merge_into;
use crate::domain::{detect, ConfigError, ConfigTable, ConfigValue, Environment, Result};
use crate::parse::{parse_file, parse_path};
use crate::scan::{DirectoryScanner, FsScanner};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A caller-registered place to load configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Every recognised file directly inside the directory.
    Directory(PathBuf),
    /// One named file; its extension must be recognised.
    File(PathBuf),
}

/// Where the engine is in its one-shot load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotStarted,
    Loaded,
    Failed,
}

/// The result of a successful load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    table: ConfigTable,
    merged_files: Vec<PathBuf>,
}

impl LoadedConfig {
    pub fn table(&self) -> &ConfigTable {
        &self.table
    }

    /// Files that were merged, in merge order.
    pub fn merged_files(&self) -> &[PathBuf] {
        &self.merged_files
    }

    fn merge(&mut self, path: PathBuf, table: ConfigTable) {
        let keys = table.len();
        let overwritten = merge_into(&mut self.table, table, &path);
        tracing::debug!("Merged {} ({} keys, {} overwritten)", path.display(), keys, overwritten);
        self.merged_files.push(path);
    }
}

/// Owns the merged configuration table and the load-once state.
///
/// The first call that needs the table runs the load; concurrent callers
/// block until it finishes. Whatever the outcome, it is kept: a failed load
/// keeps returning the same error and is never retried.
pub struct ResolutionEngine {
    locations: Locations,
    sources: Vec<Source>,
    scanner: Box<dyn DirectoryScanner>,
    environment: Environment,
    state: OnceLock<Result<LoadedConfig>>,
}

impl ResolutionEngine {
    /// Engine that scans `locations` with the filesystem scanner.
    pub fn new(locations: Locations) -> Self {
        Self::builder().locations(locations).build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn load_state(&self) -> LoadState {
        match self.state.get() {
            None => LoadState::NotStarted,
            Some(Ok(_)) => LoadState::Loaded,
            Some(Err(_)) => LoadState::Failed,
        }
    }

    /// Run the load if it has not run yet, and return its outcome.
    pub fn ensure_loaded(&self) -> Result<&LoadedConfig> {
        self.state
            .get_or_init(|| {
                let outcome = self.load();
                if let Err(e) = &outcome {
                    tracing::warn!("Configuration load failed: {}", e);
                }
                outcome
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Look up `key`, falling back to `default` when it is absent.
    ///
    /// Fails with [`ConfigError::KeyNotFound`] when the key is absent and no
    /// default was given, or with the load error if loading failed.
    pub fn get(&self, key: &str, default: Option<ConfigValue>) -> Result<ConfigValue> {
        match self.lookup(key)? {
            Some(value) => Ok(value.clone()),
            None => default.ok_or_else(|| ConfigError::KeyNotFound { key: key.to_string() }),
        }
    }

    pub fn get_or(&self, key: &str, default: impl Into<ConfigValue>) -> Result<ConfigValue> {
        self.get(key, Some(default.into()))
    }

    /// Borrow the value for `key` without cloning.
    pub fn lookup(&self, key: &str) -> Result<Option<&ConfigValue>> {
        Ok(self.ensure_loaded()?.table.get(key))
    }

    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.lookup(key)?.is_some())
    }

    pub fn table(&self) -> Result<&ConfigTable> {
        Ok(&self.ensure_loaded()?.table)
    }

    pub fn merged_files(&self) -> Result<&[PathBuf]> {
        Ok(self.ensure_loaded()?.merged_files())
    }

    /// Look up `key` inside the active environment's section.
    pub fn get_env(&self, key: &str) -> Result<ConfigValue> {
        let section = self.environment_section(&self.environment)?;
        section.get(key).cloned().ok_or_else(|| ConfigError::KeyNotFound {
            key: format!("{}.{}", self.environment, key),
        })
    }

    /// Switch the active environment, which must have a section in the table.
    pub fn set_environment(&mut self, environment: Environment) -> Result<()> {
        self.environment_section(&environment)?;
        self.environment = environment;
        Ok(())
    }

    /// Forget the load outcome so the next lookup loads again.
    pub fn reset(&mut self) {
        self.state.take();
    }

    fn environment_section(&self, environment: &Environment) -> Result<&ConfigTable> {
        self.ensure_loaded()?
            .table
            .get(environment.section())
            .and_then(ConfigValue::as_mapping)
            .ok_or_else(|| ConfigError::EnvironmentNotFound { environment: environment.to_string() })
    }

    fn load(&self) -> Result<LoadedConfig> {
        let mut loaded = LoadedConfig::default();

        if self.sources.is_empty() {
            match self.locations.select() {
                Some(dir) => {
                    tracing::info!("Loading configuration from {}", dir.display());
                    self.load_directory(dir, &mut loaded)?;
                }
                None => tracing::info!(
                    "No configuration directory found (tried {} and {})",
                    self.locations.conf_dir().display(),
                    self.locations.base_dir().display()
                ),
            }
        } else {
            for source in &self.sources {
                match source {
                    Source::Directory(dir) => self.load_directory(dir, &mut loaded)?,
                    Source::File(path) => {
                        let table = parse_path(path)?;
                        loaded.merge(path.clone(), table);
                    }
                }
            }
        }

        tracing::info!(
            "Loaded {} keys from {} files",
            loaded.table.len(),
            loaded.merged_files.len()
        );
        Ok(loaded)
    }

    fn load_directory(&self, dir: &Path, loaded: &mut LoadedConfig) -> Result<()> {
        let names = match self.scanner.list(dir) {
            Ok(names) => names,
            Err(ConfigError::DirectoryNotFound { path }) => {
                tracing::warn!("Config directory {} not found, skipping", path.display());
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        for name in names {
            let Some(format) = detect(&name) else {
                tracing::debug!("Skipping {} (unrecognised extension)", name);
                continue;
            };
            let path = dir.join(&name);
            let table = parse_file(&path, format)?;
            loaded.merge(path, table);
        }

        Ok(())
    }
}

/// Builder for [`ResolutionEngine`].
#[derive(Default)]
pub struct EngineBuilder {
    locations: Option<Locations>,
    sources: Vec<Source>,
    scanner: Option<Box<dyn DirectoryScanner>>,
    environment: Environment,
}

impl EngineBuilder {
    /// Set the conf dir / base dir pair scanned when no explicit sources are registered.
    pub fn locations(mut self, locations: Locations) -> Self {
        self.locations = Some(locations);
        self
    }

    /// Register a directory. Registered sources replace conf/base dir discovery
    /// and are merged in registration order.
    pub fn add_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::Directory(dir.into()));
        self
    }

    /// Register a single file. See [`EngineBuilder::add_config_dir`] for ordering.
    pub fn add_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::File(path.into()));
        self
    }

    pub fn sources(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn scanner(mut self, scanner: impl DirectoryScanner + 'static) -> Self {
        self.scanner = Some(Box::new(scanner));
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn build(self) -> ResolutionEngine {
        ResolutionEngine {
            locations: self.locations.unwrap_or_else(Locations::from_current_dir),
            sources: self.sources,
            scanner: self.scanner.unwrap_or_else(|| Box::new(FsScanner::new())),
            environment: self.environment,
            state: OnceLock::new(),
        }
    }
}
