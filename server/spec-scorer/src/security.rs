//! Security category: declared schemes, global requirements, HTTPS transport.

use serde_json::Value;

use crate::context::{CategoryScorer, SpecContext};
use crate::document::{has, lookup, non_empty_seq};
use crate::types::{Category, Finding};

const SCHEMES_BONUS: f64 = 0.5;
const GLOBAL_SECURITY_BONUS: f64 = 0.3;
const HTTPS_BONUS: f64 = 0.2;

pub struct SecurityScorer;

fn has_security_schemes(doc: &Value) -> bool {
  has(doc, &["securityDefinitions"]) || has(doc, &["components", "securitySchemes"])
}

fn has_global_security(doc: &Value) -> bool {
  non_empty_seq(doc, &["security"]).is_some()
}

/// `servers` decides when it has entries; otherwise a `host` defers to
/// `schemes`; otherwise HTTPS is not enforced.
pub fn enforces_https(doc: &Value) -> bool {
  if let Some(servers) = non_empty_seq(doc, &["servers"]) {
    return servers.iter().any(|server| {
      lookup(server, &["url"])
        .and_then(Value::as_str)
        .is_some_and(|url| url.starts_with("https://"))
    });
  }
  if has(doc, &["host"]) {
    return lookup(doc, &["schemes"])
      .and_then(Value::as_array)
      .is_some_and(|schemes| schemes.iter().any(|s| s.as_str() == Some("https")));
  }
  false
}

impl CategoryScorer for SecurityScorer {
  fn category(&self) -> Category {
    Category::Security
  }

  fn score(&self, ctx: &SpecContext<'_>) -> f64 {
    let mut score = 0.0;
    if has_security_schemes(ctx.doc) {
      score += SCHEMES_BONUS;
    }
    if has_global_security(ctx.doc) {
      score += GLOBAL_SECURITY_BONUS;
    }
    if enforces_https(ctx.doc) {
      score += HTTPS_BONUS;
    }
    score.min(1.0)
  }

  fn findings(&self, ctx: &SpecContext<'_>) -> Vec<Finding> {
    let mut out = Vec::new();
    if !has_security_schemes(ctx.doc) {
      out.push(Finding::warning(
        "No security schemes defined",
        ctx.version.security_schemes_path().iter().copied(),
      ));
    }
    if !enforces_https(ctx.doc) {
      out.push(Finding::warning(
        "HTTPS is not enforced",
        ctx.version.transport_path().iter().copied(),
      ));
    }
    out
  }
}
