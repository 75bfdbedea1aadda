//! Usability category: documented error responses, plus fixed baselines.

use crate::context::{CategoryScorer, SpecContext};
use crate::document::has;
use crate::types::{Category, Finding};

const RESPONSES_BASELINE: f64 = 0.3;
const ERROR_DESCRIPTION_BONUS: f64 = 0.3;
const NAMING_BASELINE: f64 = 0.4;

pub struct UsabilityScorer;

fn is_error_code(code: &str) -> bool {
  code.starts_with('4') || code.starts_with('5')
}

impl CategoryScorer for UsabilityScorer {
  fn category(&self) -> Category {
    Category::Usability
  }

  fn score(&self, ctx: &SpecContext<'_>) -> f64 {
    let mut score = RESPONSES_BASELINE;
    let documented_errors = ctx
      .responses()
      .any(|(_, code, resp)| is_error_code(code) && has(resp, &["description"]));
    if documented_errors {
      score += ERROR_DESCRIPTION_BONUS;
    }
    score += NAMING_BASELINE;
    score.min(1.0)
  }

  fn findings(&self, ctx: &SpecContext<'_>) -> Vec<Finding> {
    ctx
      .operations
      .iter()
      .filter(|op| !op.responses().any(|(code, _)| code.starts_with('4')))
      .map(|op| {
        Finding::info(
          format!("Operation {} defines no 4xx error responses", op.label()),
          op.location_with(&["responses"]),
        )
      })
      .collect()
  }
}
