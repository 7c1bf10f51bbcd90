//! Last-writer-wins table merging

use crate::domain::ConfigTable;
use std::path::Path;

/// Apply `incoming` on top of `target`.
///
/// Top-level keys are replaced wholesale; nested mappings are not unioned.
/// Returns the number of keys that overwrote an existing entry.
pub fn merge_into(target: &mut ConfigTable, incoming: ConfigTable, origin: &Path) -> usize {
    let mut overwritten = 0;
    for (key, value) in incoming {
        if target.insert(key.as_str(), value).is_some() {
            tracing::debug!("Key '{}' overridden by {}", key, origin.display());
            overwritten += 1;
        }
    }
    overwritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigValue;

    fn table(entries: &[(&str, ConfigValue)]) -> ConfigTable {
        entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn later_table_wins_on_collision() {
        let mut target = table(&[("a", "first".into()), ("b", "kept".into())]);
        let overwritten =
            merge_into(&mut target, table(&[("a", "second".into())]), Path::new("second.json"));

        assert_eq!(overwritten, 1);
        assert_eq!(target.get("a"), Some(&ConfigValue::from("second")));
        assert_eq!(target.get("b"), Some(&ConfigValue::from("kept")));
    }

    #[test]
    fn nested_mappings_are_replaced_not_unioned() {
        let db = table(&[("host", "localhost".into()), ("port", ConfigValue::Integer(5432))]);
        let mut target = table(&[("db", db.into())]);
        let incoming = table(&[("db", table(&[("host", "db.internal".into())]).into())]);
        merge_into(&mut target, incoming, Path::new("override.yaml"));

        let db = target.get("db").and_then(ConfigValue::as_mapping).expect("db");
        assert_eq!(db.get("host"), Some(&ConfigValue::from("db.internal")));
        assert!(db.get("port").is_none(), "nested keys must not survive a top-level replace");
    }

    #[test]
    fn disjoint_keys_accumulate() {
        let mut target = table(&[("A", "1".into())]);
        let overwritten = merge_into(&mut target, table(&[("a", "2".into())]), Path::new(".env"));
        assert_eq!(overwritten, 0);
        assert_eq!(target.len(), 2);
    }
}
