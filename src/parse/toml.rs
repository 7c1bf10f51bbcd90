//! TOML adapter

use super::utf8;
use crate::domain::{ConfigError, ConfigTable, ConfigValue, Format, Result};
use std::path::Path;

pub fn parse(path: &Path, bytes: &[u8]) -> Result<ConfigTable> {
    let content = utf8(Format::Toml, path, bytes)?;
    let raw: ::toml::Table =
        ::toml::from_str(content).map_err(|e| ConfigError::parse(Format::Toml, path, e))?;

    Ok(raw.into_iter().map(|(k, v)| (k, convert(v))).collect())
}

fn convert(value: ::toml::Value) -> ConfigValue {
    use ::toml::Value;

    match value {
        Value::String(s) => ConfigValue::String(s),
        Value::Integer(i) => ConfigValue::Integer(i),
        Value::Float(f) => ConfigValue::Float(f),
        Value::Boolean(b) => ConfigValue::Bool(b),
        Value::Datetime(dt) => ConfigValue::String(dt.to_string()),
        Value::Array(items) => ConfigValue::Sequence(items.into_iter().map(convert).collect()),
        Value::Table(table) => {
            ConfigValue::Mapping(table.into_iter().map(|(k, v)| (k, convert(v))).collect())
        }
    }
}
