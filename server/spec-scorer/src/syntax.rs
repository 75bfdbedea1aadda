//! Syntax category: crude structural conformance, not schema validation.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::context::{CategoryScorer, SpecContext};
use crate::document::{has, lookup};
use crate::types::{Category, Finding};

const BASE_SCORE: f64 = 0.8;
const MISSING_PATHS_PENALTY: f64 = 0.2;
const MISSING_INFO_PENALTY: f64 = 0.2;
const MISSING_TITLE_PENALTY: f64 = 0.1;
const BAD_VERSION_PENALTY: f64 = 0.2;

static OPENAPI_3_VERSION: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^3\.[0-9]+\.[0-9]+$").expect("static regex"));

pub struct SyntaxScorer;

/// `swagger` is set and is anything other than the string "2.0".
fn bad_swagger_version(doc: &Value) -> bool {
  has(doc, &["swagger"]) && lookup(doc, &["swagger"]).and_then(Value::as_str) != Some("2.0")
}

/// `openapi` is set and is not a `3.x.y` string.
fn bad_openapi_version(doc: &Value) -> bool {
  has(doc, &["openapi"])
    && !lookup(doc, &["openapi"])
      .and_then(Value::as_str)
      .is_some_and(|v| OPENAPI_3_VERSION.is_match(v))
}

impl CategoryScorer for SyntaxScorer {
  fn category(&self) -> Category {
    Category::Syntax
  }

  fn score(&self, ctx: &SpecContext<'_>) -> f64 {
    let doc = ctx.doc;
    let mut score = BASE_SCORE;
    if !has(doc, &["paths"]) {
      score -= MISSING_PATHS_PENALTY;
    }
    if !has(doc, &["info"]) {
      score -= MISSING_INFO_PENALTY;
    } else if !has(doc, &["info", "title"]) {
      score -= MISSING_TITLE_PENALTY;
    }
    if bad_swagger_version(doc) {
      score -= BAD_VERSION_PENALTY;
    }
    if bad_openapi_version(doc) {
      score -= BAD_VERSION_PENALTY;
    }
    score.max(0.0)
  }

  /// Only the missing `paths`/`info` objects are reported; title and
  /// version penalties affect the score alone.
  fn findings(&self, ctx: &SpecContext<'_>) -> Vec<Finding> {
    let mut out = Vec::new();
    if !has(ctx.doc, &["paths"]) {
      out.push(Finding::error("Paths object is missing", ["paths"]));
    }
    if !has(ctx.doc, &["info"]) {
      out.push(Finding::error("Info object is missing", ["info"]));
    }
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn score_of(doc: &Value) -> f64 {
    SyntaxScorer.score(&SpecContext::new(doc))
  }

  #[test]
  fn empty_document() {
    // 0.8 - 0.2 (paths) - 0.2 (info); no title penalty without an info object
    let doc = json!({});
    assert!((score_of(&doc) - 0.4).abs() < 1e-9);
    let findings = SyntaxScorer.findings(&SpecContext::new(&doc));
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].message, "Paths object is missing");
    assert_eq!(findings[1].message, "Info object is missing");
  }

  #[test]
  fn swagger_with_title_and_no_paths() {
    let doc = json!({"swagger": "2.0", "info": {"title": "X"}});
    assert!((score_of(&doc) - 0.6).abs() < 1e-9);
  }

  #[test]
  fn wrong_swagger_version_is_penalized_without_finding() {
    let doc = json!({"swagger": "1.2", "info": {"title": "X"}, "paths": {}});
    assert!((score_of(&doc) - 0.6).abs() < 1e-9);
    assert!(SyntaxScorer.findings(&SpecContext::new(&doc)).is_empty());
  }

  #[test]
  fn numeric_swagger_version_is_not_the_string_2_0() {
    let doc = json!({"swagger": 2.0, "info": {"title": "X"}, "paths": {}});
    assert!((score_of(&doc) - 0.6).abs() < 1e-9);
  }

  #[test]
  fn openapi_version_pattern() {
    let ok = json!({"openapi": "3.1.0", "info": {"title": "X"}, "paths": {}});
    assert!((score_of(&ok) - 0.8).abs() < 1e-9);
    for bad in ["3.0", "2.0.0", "3.0.0-rc1", "v3.0.0", "3.\u{0661}.\u{0660}"] {
      let doc = json!({"openapi": bad, "info": {"title": "X"}, "paths": {}});
      assert!((score_of(&doc) - 0.6).abs() < 1e-9, "{bad}");
    }
  }

  #[test]
  fn empty_swagger_string_reads_as_absent() {
    let doc = json!({"swagger": "", "info": {"title": "X"}, "paths": {}});
    assert!((score_of(&doc) - 0.8).abs() < 1e-9);
  }

  #[test]
  fn untitled_info_costs_point_one() {
    let doc = json!({"swagger": "2.0", "info": {"version": "1"}, "paths": {}});
    assert!((score_of(&doc) - 0.7).abs() < 1e-9);
    assert!(SyntaxScorer.findings(&SpecContext::new(&doc)).is_empty());
  }

  #[test]
  fn score_never_negative() {
    let doc = json!({"swagger": "1.0", "openapi": "4.0.0"});
    let score = score_of(&doc);
    assert!((0.0..1e-9).contains(&score), "{score}");
  }
}
