//! Shared analysis context and the capability each category handler implements.

use serde_json::Value;

use crate::document::{self, Operation};
use crate::types::{Category, Finding};
use crate::version::SpecVersion;

/// One document prepared for scoring: version resolved and operations
/// enumerated once, so handlers don't re-walk `paths`.
pub struct SpecContext<'a> {
  pub doc: &'a Value,
  pub version: SpecVersion,
  pub operations: Vec<Operation<'a>>,
}

impl<'a> SpecContext<'a> {
  pub fn new(doc: &'a Value) -> Self {
    Self {
      doc,
      version: SpecVersion::resolve(doc),
      operations: document::operations(doc),
    }
  }

  /// Every response in traversal order: path, then method, then status code.
  pub fn responses(&self) -> impl Iterator<Item = (&Operation<'a>, &'a str, &'a Value)> + '_ {
    self
      .operations
      .iter()
      .flat_map(|op| op.responses().map(move |(code, resp)| (op, code, resp)))
  }
}

/// A category handler: score in [0, 1] plus its findings. Score and findings
/// are separate passes and must stay semantically consistent.
pub trait CategoryScorer {
  fn category(&self) -> Category;

  fn score(&self, ctx: &SpecContext<'_>) -> f64;

  fn findings(&self, ctx: &SpecContext<'_>) -> Vec<Finding>;
}
