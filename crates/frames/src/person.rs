//! Normalization of the loosely typed `person_info` wire field.
//!
//! Edge devices send `person_info` as null, a single object, or an array of
//! objects, occasionally with garbage mixed in. Everything downstream works
//! on a plain ordered `Vec<PersonInfo>`, produced here with explicit rules
//! instead of runtime type inspection scattered through the pipeline.

use crate::types::PersonInfo;
use serde_json::Value;

/// Normalize a raw `person_info` value into an ordered person list.
///
/// Rules:
/// - `null` / absent → empty
/// - single object → one-element list
/// - array → objects only, in order; non-object entries are dropped
/// - any other shape → empty
///
/// Within an object, non-string `type`/`name` values are treated as absent.
pub fn normalize_person_info(value: &Value) -> Vec<PersonInfo> {
    match value {
        Value::Null => Vec::new(),
        Value::Object(_) => person_from_object(value).into_iter().collect(),
        Value::Array(items) => items.iter().filter_map(person_from_object).collect(),
        _ => Vec::new(),
    }
}

fn person_from_object(value: &Value) -> Option<PersonInfo> {
    let obj = value.as_object()?;
    Some(PersonInfo {
        kind: obj.get("type").and_then(Value::as_str).map(str::to_string),
        name: obj.get("name").and_then(Value::as_str).map(str::to_string),
    })
}
