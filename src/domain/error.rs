//! Error taxonomy for loading and lookups

use super::Format;
use std::error::Error as StdError;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Underlying cause of a parse failure, shared so a failed load can be
/// reported again on every later lookup.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Errors raised while resolving configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Unsupported config file extension for {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to parse {format} config file {}: {cause}", path.display())]
    Parse {
        format: Format,
        path: PathBuf,
        #[source]
        cause: Cause,
    },

    #[error("Failed reading {}: {cause}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        cause: Arc<std::io::Error>,
    },

    #[error("Config directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Key '{key}' not found")]
    KeyNotFound { key: String },

    #[error("Environment '{environment}' not found in configuration")]
    EnvironmentNotFound { environment: String },
}

impl ConfigError {
    pub(crate) fn parse(
        format: Format,
        path: impl Into<PathBuf>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        ConfigError::Parse { format, path: path.into(), cause: Arc::new(cause) }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, cause: std::io::Error) -> Self {
        ConfigError::Read { path: path.into(), cause: Arc::new(cause) }
    }

    /// Whether this is a lookup miss rather than a load failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::KeyNotFound { .. } | ConfigError::EnvironmentNotFound { .. })
    }
}
