//! Format detection from file names

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// The configuration formats the resolver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Toml,
    Yaml,
    Env,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Json, Format::Toml, Format::Yaml, Format::Env];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
            Format::Env => "env",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            "yml" | "yaml" => Some(Format::Yaml),
            "env" => Some(Format::Env),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the format of a bare file name.
///
/// Uses the text after the last `.`. The dotfile `.env` is its own
/// extension and resolves to [`Format::Env`]. Names without a dot, and names
/// with an unknown extension, return `None`.
pub fn detect(filename: &str) -> Option<Format> {
    if filename.is_empty() {
        return None;
    }
    let (_, ext) = filename.rsplit_once('.')?;
    Format::from_extension(ext)
}

/// Detect the format of a path from its final component.
pub fn detect_path(path: &Path) -> Option<Format> {
    path.file_name().and_then(|n| n.to_str()).and_then(detect)
}
