//! Best-practices category: tags, response examples, plus two fixed
//! baseline terms (naming, pagination) that are not checked.

use crate::context::{CategoryScorer, SpecContext};
use crate::document::{non_empty_seq, response_has_example};
use crate::types::{Category, Finding};

const TAGS_BONUS: f64 = 0.2;
const NAMING_BASELINE: f64 = 0.3;
const EXAMPLES_BONUS: f64 = 0.3;
const PAGINATION_BASELINE: f64 = 0.2;

/// Success codes expected to carry an example.
const EXAMPLE_CODES: [&str; 2] = ["200", "201"];

pub struct BestPracticesScorer;

impl CategoryScorer for BestPracticesScorer {
  fn category(&self) -> Category {
    Category::BestPractices
  }

  fn score(&self, ctx: &SpecContext<'_>) -> f64 {
    let mut score = 0.0;
    if non_empty_seq(ctx.doc, &["tags"]).is_some() {
      score += TAGS_BONUS;
    }
    score += NAMING_BASELINE;
    if ctx.responses().any(|(_, _, resp)| response_has_example(resp)) {
      score += EXAMPLES_BONUS;
    }
    score += PAGINATION_BASELINE;
    score.min(1.0)
  }

  fn findings(&self, ctx: &SpecContext<'_>) -> Vec<Finding> {
    let mut out = Vec::new();
    if non_empty_seq(ctx.doc, &["tags"]).is_none() {
      out.push(Finding::warning("No tags defined for API operations", ["tags"]));
    }
    for (op, code, resp) in ctx.responses() {
      if EXAMPLE_CODES.contains(&code) && !response_has_example(resp) {
        out.push(Finding::info(
          format!("Response {} of {} has no example", code, op.label()),
          op.location_with(&["responses", code]),
        ));
      }
    }
    out
  }
}
