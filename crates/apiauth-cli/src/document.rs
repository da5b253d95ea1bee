//! # Document Loading
//!
//! Reads JSON or YAML files into `serde_json::Value`. YAML short-form
//! CloudFormation intrinsics (`!Ref`, `!GetAtt`, `!Sub`, ...) are expanded
//! to their long form (`{"Ref": ...}`, `{"Fn::GetAtt": [...]}`) so the
//! validator sees the same shape either way.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Number, Value};
use serde_yaml::Value as Yaml;

/// Load a JSON or YAML document. `.json` files are parsed as JSON; all
/// others as YAML.
pub fn load_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
    } else {
        parse_yaml(&text).with_context(|| format!("invalid YAML in {}", path.display()))
    }
}

/// Parse YAML text into a JSON value, expanding intrinsic tags.
pub fn parse_yaml(text: &str) -> Result<Value> {
    let yaml: Yaml = serde_yaml::from_str(text)?;
    Ok(yaml_to_json(yaml))
}

/// Convert a YAML value to JSON. Mapping keys that are not scalars are dropped.
pub fn yaml_to_json(yaml: Yaml) -> Value {
    match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                match scalar_key(&key) {
                    Some(k) => {
                        map.insert(k, yaml_to_json(value));
                    }
                    None => tracing::debug!(?key, "dropping non-scalar mapping key"),
                }
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            let name = tag.trim_start_matches('!');
            let value = yaml_to_json(tagged.value);
            expand_intrinsic(name, value)
        }
    }
}

fn scalar_key(key: &Yaml) -> Option<String> {
    match key {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Long form of a short-form intrinsic function tag.
fn expand_intrinsic(name: &str, value: Value) -> Value {
    let mut map = Map::new();
    match name {
        "Ref" | "Condition" => {
            map.insert(name.to_string(), value);
        }
        "GetAtt" => {
            let args = match value {
                Value::String(s) => match s.split_once('.') {
                    Some((resource, attribute)) => {
                        Value::Array(vec![Value::from(resource), Value::from(attribute)])
                    }
                    None => Value::String(s),
                },
                other => other,
            };
            map.insert("Fn::GetAtt".to_string(), args);
        }
        other => {
            map.insert(format!("Fn::{other}"), value);
        }
    }
    Value::Object(map)
}
