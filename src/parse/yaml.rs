//! YAML adapter
//!
//! `serde_yaml` only ever builds plain data. Tagged values keep their inner
//! value and the tag is dropped, so a tag can never select what gets built.

use super::ShapeError;
use crate::domain::{ConfigError, ConfigTable, ConfigValue, Format, Result};
use serde_yaml::Value;
use std::path::Path;

pub fn parse(path: &Path, bytes: &[u8]) -> Result<ConfigTable> {
    let raw: Value =
        serde_yaml::from_slice(bytes).map_err(|e| ConfigError::parse(Format::Yaml, path, e))?;

    match convert(raw).map_err(|e| ConfigError::parse(Format::Yaml, path, e))? {
        ConfigValue::Mapping(table) => Ok(table),
        // An empty document holds no keys
        ConfigValue::Null => Ok(ConfigTable::new()),
        other => Err(ConfigError::parse(Format::Yaml, path, ShapeError::NotAMapping(other.kind()))),
    }
}

fn convert(value: Value) -> Result<ConfigValue, ShapeError> {
    Ok(match value {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => ConfigValue::Integer(i),
            None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => ConfigValue::String(s),
        Value::Sequence(items) => {
            ConfigValue::Sequence(items.into_iter().map(convert).collect::<Result<_, _>>()?)
        }
        Value::Mapping(map) => {
            let mut table = ConfigTable::new();
            for (k, v) in map {
                table.insert(key_to_string(k)?, convert(v)?);
            }
            ConfigValue::Mapping(table)
        }
        Value::Tagged(tagged) => convert(tagged.value)?,
    })
}

fn key_to_string(key: Value) -> Result<String, ShapeError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        Value::Sequence(_) => Err(ShapeError::NonScalarKey("sequence")),
        Value::Mapping(_) => Err(ShapeError::NonScalarKey("mapping")),
    }
}
