//! Structured rendering of model objects for templates and diagnostics.

use super::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Renders `value` as a tree of string-keyed maps.
///
/// With `full` set every field is kept. Otherwise nulls, empty strings and
/// empty arrays/objects are dropped recursively, so the result only shows
/// what was configured.
pub fn as_map<T: Serialize + ?Sized>(value: &T, full: bool) -> Result<Value> {
    let value = serde_json::to_value(value)?;
    if full {
        Ok(value)
    } else {
        Ok(prune(value).unwrap_or_else(|| Value::Object(Map::new())))
    }
}

fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(items) => {
            let items: Vec<Value> = items.into_iter().filter_map(prune).collect();
            (!items.is_empty()).then_some(Value::Array(items))
        }
        Value::Object(fields) => {
            let fields: Map<String, Value> = fields
                .into_iter()
                .filter_map(|(k, v)| prune(v).map(|v| (k, v)))
                .collect();
            (!fields.is_empty()).then_some(Value::Object(fields))
        }
        other => Some(other),
    }
}
