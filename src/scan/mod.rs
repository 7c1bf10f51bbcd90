//! Directory listing for config discovery

use crate::domain::Result;
use std::path::Path;

pub mod scanner;

pub use scanner::FsScanner;

/// Lists the files directly inside one directory.
///
/// Implementations return bare file names in whatever order the platform
/// yields them, skip subdirectories, and report a missing directory as
/// [`ConfigError::DirectoryNotFound`](crate::domain::ConfigError::DirectoryNotFound).
pub trait DirectoryScanner: Send + Sync {
    fn list(&self, dir: &Path) -> Result<Vec<String>>;
}

impl<S: DirectoryScanner + ?Sized> DirectoryScanner for Box<S> {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        (**self).list(dir)
    }
}

impl<S: DirectoryScanner + ?Sized> DirectoryScanner for std::sync::Arc<S> {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        (**self).list(dir)
    }
}
