//! API Spec Scorer — deterministic, rule-based quality scoring for
//! OpenAPI/Swagger documents.
//!
//! Takes an already-decoded document (JSON tree) plus a display name and
//! returns an `AnalysisReport`: five weighted category scores with their
//! findings, the rounded overall score, and a grade.
//!
//! Scoring is pure and total: no I/O, no shared state, and no failure mode.
//! Missing or wrong-shaped keys lower the score instead of erroring.

pub mod best_practices;
pub mod config;
pub mod context;
pub mod decode;
pub mod document;
pub mod documentation;
pub mod error;
pub mod scorer;
pub mod security;
pub mod syntax;
pub mod types;
pub mod usability;
pub mod version;

pub use config::{Config, InputFormat};
pub use context::{CategoryScorer, SpecContext};
pub use error::ScorerError;
pub use scorer::Scorer;
pub use types::{AnalysisReport, Category, CategoryScore, Finding, Severity};
pub use version::{Dialect, SpecVersion};

/// Score a decoded document (no I/O).
pub fn analyze(doc: &serde_json::Value, file_name: &str) -> AnalysisReport {
  Scorer::new().analyze(doc, file_name)
}
