//! Primary and fallback scan directories

use std::path::{Path, PathBuf};

/// Name of the primary config directory under the base directory.
pub const CONF_DIR_NAME: &str = "configs";

/// The conf dir / base dir pair, fixed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    conf_dir: PathBuf,
    base_dir: PathBuf,
}

impl Locations {
    /// Use `base_dir` as the fallback and `base_dir/configs` as the primary.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self { conf_dir: base_dir.join(CONF_DIR_NAME), base_dir }
    }

    pub fn with_dirs(conf_dir: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self { conf_dir: conf_dir.into(), base_dir: base_dir.into() }
    }

    /// Locations rooted at the process working directory.
    pub fn from_current_dir() -> Self {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(base)
    }

    pub fn conf_dir(&self) -> &Path {
        &self.conf_dir
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The directory to scan: conf dir if present, else base dir, else none.
    ///
    /// Only one is ever chosen; the two are never merged.
    pub fn select(&self) -> Option<&Path> {
        [self.conf_dir.as_path(), self.base_dir.as_path()].into_iter().find(|dir| dir.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prefers_conf_dir_when_present() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir(tmp.path().join(CONF_DIR_NAME)).expect("mkdir");

        let locations = Locations::new(tmp.path());
        assert_eq!(locations.select(), Some(tmp.path().join(CONF_DIR_NAME).as_path()));
    }

    #[test]
    fn falls_back_to_base_dir() {
        let tmp = TempDir::new().expect("tmp");
        let locations = Locations::new(tmp.path());
        assert_eq!(locations.select(), Some(tmp.path()));
    }

    #[test]
    fn selects_nothing_when_both_missing() {
        let tmp = TempDir::new().expect("tmp");
        let locations = Locations::with_dirs(tmp.path().join("a"), tmp.path().join("b"));
        assert_eq!(locations.select(), None);
    }

    #[test]
    fn conf_dir_that_is_a_file_is_ignored() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(CONF_DIR_NAME), "not a dir").expect("write");

        let locations = Locations::new(tmp.path());
        assert_eq!(locations.select(), Some(tmp.path()));
    }
}
