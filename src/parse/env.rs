//! dotenv-style adapter
//!
//! `KEY=value` per line, split on the first `=`. Blank lines and `#` comments
//! are skipped. There is no quoting or escaping, and values are never exported
//! to the process environment.

use super::utf8;
use crate::domain::{ConfigError, ConfigTable, ConfigValue, Format, Result};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvLineError {
    #[error("line {line}: expected KEY=value, found '{content}'")]
    MissingSeparator { line: usize, content: String },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },
}

pub fn parse(path: &Path, bytes: &[u8]) -> Result<ConfigTable> {
    let content = utf8(Format::Env, path, bytes)?;
    parse_lines(content).map_err(|e| ConfigError::parse(Format::Env, path, e))
}

fn parse_lines(content: &str) -> Result<ConfigTable, EnvLineError> {
    let mut table = ConfigTable::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(EnvLineError::MissingSeparator { line: idx + 1, content: line.to_string() });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(EnvLineError::EmptyKey { line: idx + 1 });
        }

        table.insert(key, ConfigValue::String(value.trim().to_string()));
    }

    Ok(table)
}
