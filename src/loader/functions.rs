//! Function dataset records.
//!
//! Each record is `{ "function", "package"?, "explanation"?, "arguments"? }`.
//! Only `function` is required; everything else falls back to a default.

use crate::error::{Error, Result};
use crate::model::{Argument, Catalog, FunctionRecord, UNKNOWN_PACKAGE};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

#[derive(Deserialize)]
struct RawFunction {
    function: Option<String>,
    #[serde(default)]
    package: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    arguments: Option<Vec<Argument>>,
}

/// Convert one raw record. `index` is its position in the dataset.
pub fn parse_record(index: usize, value: Value) -> Result<FunctionRecord> {
    let raw: RawFunction = serde_json::from_value(value).map_err(|e| Error::MalformedRecord {
        index,
        reason: e.to_string(),
    })?;

    let name = match raw.function {
        Some(name) if !name.trim().is_empty() => name,
        Some(_) => {
            return Err(Error::MalformedRecord {
                index,
                reason: "empty `function` field".to_string(),
            })
        }
        None => {
            return Err(Error::MalformedRecord {
                index,
                reason: "missing `function` field".to_string(),
            })
        }
    };

    Ok(FunctionRecord {
        name,
        package: raw
            .package
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_PACKAGE.to_string()),
        explanation: raw.explanation.unwrap_or_default(),
        arguments: raw.arguments.unwrap_or_default(),
        examples: Vec::new(),
    })
}

/// Build a catalog from raw records, skipping malformed ones.
pub fn load(values: Vec<Value>) -> Catalog {
    let mut catalog = Catalog::new();
    for (index, value) in values.into_iter().enumerate() {
        let record = match parse_record(index, value) {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping {e}");
                continue;
            }
        };
        let name = record.name.clone();
        let package = record.package.clone();
        if let Some(previous) = catalog.insert(record) {
            warn!(
                function = %name,
                dropped = %previous.package,
                kept = %package,
                "duplicate function name, later record wins"
            );
        }
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_for_missing_fields() {
        let record = parse_record(0, json!({"function": "count"})).unwrap();
        assert_eq!(record.name, "count");
        assert_eq!(record.package, UNKNOWN_PACKAGE);
        assert_eq!(record.explanation, "");
        assert!(record.arguments.is_empty());
        assert!(record.examples.is_empty());
    }

    #[test]
    fn null_and_empty_optionals() {
        let record = parse_record(
            0,
            json!({"function": "n", "package": "", "explanation": null, "arguments": null}),
        )
        .unwrap();
        assert_eq!(record.package, UNKNOWN_PACKAGE);
        assert!(record.arguments.is_empty());
    }

    #[test]
    fn arguments_in_order() {
        let record = parse_record(
            0,
            json!({
                "function": "filter",
                "package": "dplyr",
                "arguments": [
                    {"name": ".data", "description": "A data frame."},
                    {"name": "..."}
                ]
            }),
        )
        .unwrap();
        assert_eq!(record.arguments.len(), 2);
        assert_eq!(record.arguments[0].name, ".data");
        assert_eq!(record.arguments[1].description, "");
    }

    #[test]
    fn missing_name_is_malformed() {
        let err = parse_record(3, json!({"package": "dplyr"})).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { index: 3, .. }));
    }

    #[test]
    fn non_object_is_malformed() {
        assert!(parse_record(0, json!("filter")).is_err());
        assert!(parse_record(0, json!({"function": 42})).is_err());
        assert!(parse_record(0, json!({"function": "  "})).is_err());
    }

    #[test]
    fn load_skips_malformed_and_keeps_rest() {
        let catalog = load(vec![
            json!({"function": "filter"}),
            json!({"explanation": "nameless"}),
            json!({"function": "select"}),
        ]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("filter"));
        assert!(catalog.contains("select"));
    }

    #[test]
    fn load_unique_names_one_entry_each() {
        let names = ["filter", "select", "mutate", "arrange", "summarise"];
        let catalog = load(names.iter().map(|n| json!({"function": n})).collect());
        assert_eq!(catalog.len(), names.len());
        let mut keys: Vec<&str> = catalog.names().collect();
        keys.sort_unstable();
        let mut expected = names.to_vec();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn load_duplicate_last_write_wins() {
        let catalog = load(vec![
            json!({"function": "filter", "package": "stats"}),
            json!({"function": "filter", "package": "dplyr"}),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("filter").unwrap().package, "dplyr");
    }
}
