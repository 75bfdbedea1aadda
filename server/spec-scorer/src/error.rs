//! Structured error types for reading and decoding spec documents.
//!
//! Scoring itself never fails; these only surface before a document reaches
//! the scorer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScorerError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("yaml: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("document root must be a map, found {0}")]
  NotAMap(&'static str),

  #[error("unsupported format: {0} (expected auto|json|yaml)")]
  UnsupportedFormat(String),
}

impl ScorerError {
  pub fn not_a_map(value: &serde_json::Value) -> Self {
    let kind = match value {
      serde_json::Value::Null => "null",
      serde_json::Value::Bool(_) => "boolean",
      serde_json::Value::Number(_) => "number",
      serde_json::Value::String(_) => "string",
      serde_json::Value::Array(_) => "sequence",
      serde_json::Value::Object(_) => "map",
    };
    Self::NotAMap(kind)
  }
}
