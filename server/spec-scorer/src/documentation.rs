//! Documentation category: descriptive metadata on `info` and on operations.

use crate::context::{CategoryScorer, SpecContext};
use crate::document::has;
use crate::types::{Category, Finding};

const INFO_FIELD_BONUS: f64 = 0.1;
const DESCRIBED_OPS_MAX: f64 = 0.2;
const OPERATION_ID_MAX: f64 = 0.1;
const RESPONSES_MAX: f64 = 0.2;
const PARAMETERS_MAX: f64 = 0.2;

pub struct DocumentationScorer;

impl CategoryScorer for DocumentationScorer {
  fn category(&self) -> Category {
    Category::Documentation
  }

  /// Fixed bonuses for title/description/version, then per-operation
  /// coverage ratios. With no operations the ratio terms are skipped.
  fn score(&self, ctx: &SpecContext<'_>) -> f64 {
    let mut score = 0.0;
    for field in ["title", "description", "version"] {
      if has(ctx.doc, &["info", field]) {
        score += INFO_FIELD_BONUS;
      }
    }

    let total = ctx.operations.len();
    if total > 0 {
      let ratio = |n: usize| n as f64 / total as f64;
      let ops = &ctx.operations;
      let described = ops.iter().filter(|op| op.has_documentation()).count();
      let with_id = ops.iter().filter(|op| op.has("operationId")).count();
      let with_responses = ops.iter().filter(|op| op.has_responses()).count();
      let with_params = ops.iter().filter(|op| op.has_parameters()).count();

      score += ratio(described) * DESCRIBED_OPS_MAX;
      score += ratio(with_id) * OPERATION_ID_MAX;
      score += ratio(with_responses) * RESPONSES_MAX;
      score += ratio(with_params) * PARAMETERS_MAX;
    }

    score.min(1.0)
  }

  fn findings(&self, ctx: &SpecContext<'_>) -> Vec<Finding> {
    let mut out = Vec::new();
    if !has(ctx.doc, &["info", "title"]) {
      out.push(Finding::error("API title is missing", ["info", "title"]));
    }
    if !has(ctx.doc, &["info", "description"]) {
      out.push(Finding::warning(
        "API description is missing",
        ["info", "description"],
      ));
    }

    for op in &ctx.operations {
      if !op.has_documentation() {
        out.push(Finding::warning(
          format!("Operation {} is missing a description or summary", op.label()),
          op.location(),
        ));
      }
      if !op.has("operationId") {
        out.push(Finding::warning(
          format!("Operation {} is missing an operationId", op.label()),
          op.location_with(&["operationId"]),
        ));
      }
    }
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn score_of(doc: &serde_json::Value) -> f64 {
    DocumentationScorer.score(&SpecContext::new(doc))
  }

  #[test]
  fn empty_document_scores_zero() {
    assert_eq!(score_of(&json!({})), 0.0);
  }

  #[test]
  fn title_only_scores_point_one() {
    let doc = json!({"swagger": "2.0", "info": {"title": "X"}});
    assert!((score_of(&doc) - 0.1).abs() < 1e-9);
  }

  #[test]
  fn fully_documented_operation_reaches_one() {
    let doc = json!({
      "info": {"title": "Pets", "description": "Pet store", "version": "1.0"},
      "paths": {"/pets": {"get": {
        "summary": "List pets",
        "operationId": "listPets",
        "parameters": [{"name": "limit", "in": "query"}],
        "responses": {"200": {"description": "ok"}}
      }}}
    });
    assert!((score_of(&doc) - 1.0).abs() < 1e-9);
  }

  #[test]
  fn coverage_is_a_fraction_of_operations() {
    let doc = json!({
      "paths": {"/a": {
        "get": {"description": "d"},
        "post": {}
      }}
    });
    // half the operations described: 0.5 * 0.2
    assert!((score_of(&doc) - 0.1).abs() < 1e-9);
  }

  #[test]
  fn paths_with_only_parameters_do_not_divide_by_zero() {
    let doc = json!({"paths": {"/a": {"parameters": []}}});
    assert_eq!(score_of(&doc), 0.0);
  }

  #[test]
  fn findings_are_ordered_info_then_operations() {
    let doc = json!({
      "paths": {
        "/a": {"get": {}},
        "/b": {"post": {"summary": "s"}}
      }
    });
    let findings = DocumentationScorer.findings(&SpecContext::new(&doc));
    let messages: Vec<&str> = findings.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(
      messages,
      vec![
        "API title is missing",
        "API description is missing",
        "Operation GET /a is missing a description or summary",
        "Operation GET /a is missing an operationId",
        "Operation POST /b is missing an operationId",
      ]
    );
    assert_eq!(findings[3].path, vec!["paths", "/a", "get", "operationId"]);
  }
}
