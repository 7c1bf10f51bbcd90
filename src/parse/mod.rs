//! Format adapters
//!
//! Each adapter turns the raw bytes of one file into a [`ConfigTable`]. The
//! set of formats is closed, so dispatch is a plain tag -> function lookup.

use crate::domain::{detect_path, ConfigError, ConfigTable, Format, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod env;
pub mod json;
pub mod toml;
pub mod yaml;

/// Signature shared by every format adapter.
pub type ParseFn = fn(&Path, &[u8]) -> Result<ConfigTable>;

/// Structural problems found after the underlying library decoded a file.
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("top-level document must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("mapping key must be a scalar, found {0}")]
    NonScalarKey(&'static str),
}

const PARSERS: [(Format, ParseFn); 4] = [
    (Format::Json, json::parse),
    (Format::Toml, toml::parse),
    (Format::Yaml, yaml::parse),
    (Format::Env, env::parse),
];

/// Look up the adapter for a format.
pub fn parser_for(format: Format) -> ParseFn {
    PARSERS
        .iter()
        .find(|(tag, _)| *tag == format)
        .map(|(_, parse)| *parse)
        .unwrap_or_else(|| unreachable!("every Format has a parser"))
}

/// Read `path` as bytes and parse it as `format`.
pub fn parse_file(path: &Path, format: Format) -> Result<ConfigTable> {
    let bytes = fs::read(path).map_err(|e| ConfigError::read(path, e))?;
    let table = parser_for(format)(path, &bytes)?;
    tracing::debug!("Parsed {} ({}, {} keys)", path.display(), format, table.len());
    Ok(table)
}

/// Parse a single named file, detecting its format from the file name.
///
/// Unlike directory scans, an unrecognised extension here is an error.
pub fn parse_path(path: &Path) -> Result<ConfigTable> {
    let format =
        detect_path(path).ok_or_else(|| ConfigError::UnsupportedFormat { path: path.to_path_buf() })?;
    parse_file(path, format)
}

/// Decode bytes as UTF-8 for the text-only adapters.
fn utf8<'a>(format: Format, path: &Path, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| ConfigError::parse(format, path, e))
}
