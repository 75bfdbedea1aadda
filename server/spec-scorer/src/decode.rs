//! Decode raw JSON/YAML text into the document tree the scorer consumes.

use serde_json::{Map, Number, Value};
use serde_yaml::Value as Yaml;

use crate::config::InputFormat;
use crate::error::ScorerError;

/// Decode `raw` and require a map at the root.
pub fn decode(raw: &str, format: InputFormat) -> Result<Value, ScorerError> {
  let value = match format {
    InputFormat::Json => serde_json::from_str(raw)?,
    InputFormat::Yaml => from_yaml(raw)?,
    InputFormat::Auto => match serde_json::from_str(raw) {
      Ok(v) => v,
      Err(_) => from_yaml(raw)?,
    },
  };
  if !value.is_object() {
    return Err(ScorerError::not_a_map(&value));
  }
  Ok(value)
}

fn from_yaml(raw: &str) -> Result<Value, ScorerError> {
  let yaml: Yaml = serde_yaml::from_str(raw)?;
  Ok(yaml_to_json(yaml))
}

/// Convert a YAML tree, keeping map order and stringifying scalar keys
/// (`200:` becomes `"200"`). Tags are dropped; non-finite floats become null.
fn yaml_to_json(value: Yaml) -> Value {
  match value {
    Yaml::Null => Value::Null,
    Yaml::Bool(b) => Value::Bool(b),
    Yaml::Number(n) => {
      if let Some(i) = n.as_i64() {
        Value::Number(i.into())
      } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
      } else {
        n.as_f64()
          .and_then(Number::from_f64)
          .map(Value::Number)
          .unwrap_or(Value::Null)
      }
    }
    Yaml::String(s) => Value::String(s),
    Yaml::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
    Yaml::Mapping(mapping) => {
      let mut out = Map::with_capacity(mapping.len());
      for (k, v) in mapping {
        out.insert(yaml_key(k), yaml_to_json(v));
      }
      Value::Object(out)
    }
    Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
  }
}

fn yaml_key(key: Yaml) -> String {
  match key {
    Yaml::String(s) => s,
    Yaml::Number(n) => n.to_string(),
    Yaml::Bool(b) => b.to_string(),
    Yaml::Null => "null".to_string(),
    other => yaml_to_json(other).to_string(),
  }
}
