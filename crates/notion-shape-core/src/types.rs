//! Core types for notion-shape-core.
//!
//! Records are semi-structured JSON objects handed over by the extraction
//! pipeline. Lookups against them go through `Option`-returning helpers so a
//! missing or oddly-typed key always reads as "absent".

use serde_json::{Map, Value};

/// One extracted entity (a Notion user, page, block, …).
pub type Record = Map<String, Value>;

/// JSON truthiness as used by the connector's record transformations.
///
/// `null`, `false`, zero, the empty string, the empty array and the empty
/// object are falsy. Everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Mutable access to `record[key]` when it holds a JSON object.
pub fn object_mut<'a>(record: &'a mut Record, key: &str) -> Option<&'a mut Record> {
    record.get_mut(key).and_then(Value::as_object_mut)
}
