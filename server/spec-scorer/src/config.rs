//! Input/output configuration for the binary, with sane defaults.
//!
//! Scoring weights and thresholds are fixed and deliberately absent here.

use std::path::Path;
use std::str::FromStr;

use crate::error::ScorerError;

/// How to decode the raw document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
  /// Pick by file extension; otherwise try JSON, then YAML.
  #[default]
  Auto,
  Json,
  Yaml,
}

impl InputFormat {
  /// Resolve `Auto` from a file extension when one is known.
  pub fn for_path(self, path: Option<&Path>) -> Self {
    if self != Self::Auto {
      return self;
    }
    let ext = path
      .and_then(|p| p.extension())
      .and_then(|e| e.to_str())
      .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
      Some("json") => Self::Json,
      Some("yaml") | Some("yml") => Self::Yaml,
      _ => Self::Auto,
    }
  }
}

impl FromStr for InputFormat {
  type Err = ScorerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "auto" => Ok(Self::Auto),
      "json" => Ok(Self::Json),
      "yaml" | "yml" => Ok(Self::Yaml),
      other => Err(ScorerError::UnsupportedFormat(other.to_string())),
    }
  }
}

#[derive(Debug, Clone)]
pub struct Config {
  pub input_format: InputFormat,
  /// Pretty-print the report JSON.
  pub pretty: bool,
  /// Display name when reading from stdin without `--name`.
  pub default_name: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input_format: InputFormat::Auto,
      pretty: false,
      default_name: "stdin".to_string(),
    }
  }
}
