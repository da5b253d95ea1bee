//! # Document Accessors
//!
//! Resource property documents arrive as untyped JSON. These accessors
//! spell out what happens when a field is missing or has the wrong type:
//! it is treated as absent, and the caller picks the default.

use serde_json::{Map, Value};

/// Look up `key` in `doc`. `None` if `doc` is not an object or lacks the key.
pub fn field<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.as_object().and_then(|map| map.get(key))
}

/// View `value` as a mapping. `None` for anything but an object.
pub fn mapping(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// View `value` as a sequence, defaulting to empty.
///
/// Absent, `null`, and non-array values all yield an empty slice.
pub fn sequence_or_empty(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

/// Truthiness of a document value.
///
/// `null`, `false`, numeric zero, and empty strings, arrays, and objects
/// are falsy. Everything else (including intrinsic function objects such
/// as `{"Ref": "MyAuthorizer"}`) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
