//! JSON adapter

use super::ShapeError;
use crate::domain::{ConfigError, ConfigTable, ConfigValue, Format, Result};
use serde_json::Value;
use std::path::Path;

pub fn parse(path: &Path, bytes: &[u8]) -> Result<ConfigTable> {
    let raw: Value =
        serde_json::from_slice(bytes).map_err(|e| ConfigError::parse(Format::Json, path, e))?;

    match convert(raw) {
        ConfigValue::Mapping(table) => Ok(table),
        other => Err(ConfigError::parse(Format::Json, path, ShapeError::NotAMapping(other.kind()))),
    }
}

fn convert(value: Value) -> ConfigValue {
    match value {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => ConfigValue::Integer(i),
            // u64 beyond i64::MAX and all fractional numbers
            None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => ConfigValue::String(s),
        Value::Array(items) => ConfigValue::Sequence(items.into_iter().map(convert).collect()),
        Value::Object(map) => {
            ConfigValue::Mapping(map.into_iter().map(|(k, v)| (k, convert(v))).collect())
        }
    }
}
