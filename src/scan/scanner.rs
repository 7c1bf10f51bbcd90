//! Filesystem scanner

use super::DirectoryScanner;
use crate::domain::{ConfigError, Result};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Lists regular files one level below a directory.
///
/// Symlinks are followed so a linked config file counts as a file. Entries
/// whose names are not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsScanner;

impl FsScanner {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryScanner for FsScanner {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        if !dir.is_dir() {
            return Err(ConfigError::DirectoryNotFound { path: dir.to_path_buf() });
        }

        let mut names = Vec::new();
        let walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // Depth 0 failing means the directory itself vanished or is unreadable
                    if err.depth() == 0 {
                        let kind = err.io_error().map(io::Error::kind);
                        if kind == Some(io::ErrorKind::NotFound) {
                            return Err(ConfigError::DirectoryNotFound { path: dir.to_path_buf() });
                        }
                        return Err(ConfigError::read(dir, io::Error::from(err)));
                    }
                    tracing::debug!("Skipping unreadable entry in {}: {}", dir.display(), err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_string()),
                None => tracing::debug!("Skipping non-UTF-8 file name in {}", dir.display()),
            }
        }

        Ok(names)
    }
}
