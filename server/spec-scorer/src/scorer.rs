//! Report assembly: run every category handler, weight, round, package.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tracing::{debug, info};

use crate::best_practices::BestPracticesScorer;
use crate::context::{CategoryScorer, SpecContext};
use crate::documentation::DocumentationScorer;
use crate::security::SecurityScorer;
use crate::syntax::SyntaxScorer;
use crate::types::*;
use crate::usability::UsabilityScorer;

/// The spec quality scorer. Stateless; every call builds a fresh report.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scorer;

impl Scorer {
  pub fn new() -> Self {
    Self
  }

  /// Score `doc` and stamp the report with the current time.
  pub fn analyze(&self, doc: &Value, file_name: &str) -> AnalysisReport {
    self.analyze_at(doc, file_name, Utc::now())
  }

  /// Score `doc` with an explicit timestamp (deterministic output).
  pub fn analyze_at(&self, doc: &Value, file_name: &str, now: DateTime<Utc>) -> AnalysisReport {
    let ctx = SpecContext::new(doc);
    debug!(
      file = file_name,
      version = %ctx.version.label,
      operations = ctx.operations.len(),
      "scoring spec"
    );

    let scores = Scores {
      documentation: run_category(&DocumentationScorer, &ctx),
      syntax: run_category(&SyntaxScorer, &ctx),
      best_practices: run_category(&BestPracticesScorer, &ctx),
      security: run_category(&SecurityScorer, &ctx),
      usability: run_category(&UsabilityScorer, &ctx),
    };

    let overall_score = round2(scores.iter().map(|(_, s)| s.weighted()).sum());
    let summary = FindingSummary::tally(scores.iter().flat_map(|(_, s)| &s.findings));
    let grade = Grade::from_score(overall_score);

    info!(
      file = file_name,
      overall = overall_score,
      grade = ?grade,
      findings = summary.total(),
      "spec scored"
    );

    AnalysisReport {
      analysis_id: analysis_id(doc, file_name),
      file_name: file_name.to_string(),
      spec_version: ctx.version.label,
      scores,
      overall_score,
      grade,
      summary,
      timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
  }
}

fn run_category(handler: &dyn CategoryScorer, ctx: &SpecContext<'_>) -> CategoryScore {
  let category = handler.category();
  let score = handler.score(ctx).clamp(0.0, 1.0);
  let findings = handler.findings(ctx);
  debug!(
    category = category.key(),
    score,
    findings = findings.len(),
    "category scored"
  );
  CategoryScore {
    score,
    weight: category.weight(),
    findings,
  }
}

/// Round to 2 decimals, halves away from zero.
pub fn round2(x: f64) -> f64 {
  (x * 100.0).round() / 100.0
}

/// Stable content id: hash of file name + canonical document JSON.
/// Map keys are sorted first, so key order does not change the id.
fn analysis_id(doc: &Value, file_name: &str) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(file_name.as_bytes());
  hasher.update(b"|");
  hasher.update(canonical(doc).to_string().as_bytes());
  let hex = hasher.finalize().to_hex();
  format!("spec-{}", &hex[..16])
}

/// Copy of `value` with every map's keys in sorted order.
fn canonical(value: &Value) -> Value {
  match value {
    Value::Object(map) => {
      let mut keys: Vec<&String> = map.keys().collect();
      keys.sort();
      Value::Object(
        keys
          .into_iter()
          .map(|k| (k.clone(), canonical(&map[k.as_str()])))
          .collect(),
      )
    }
    Value::Array(items) => Value::Array(items.iter().map(canonical).collect()),
    other => other.clone(),
  }
}
