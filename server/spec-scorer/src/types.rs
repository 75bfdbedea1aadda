//! Core types for the spec scorer (report JSON contract + finding model).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Info,
  Warning,
  Error,
}

// ---------------------------------------------------------------------------
// Finding
// ---------------------------------------------------------------------------

/// One reported issue, located by its path of segments inside the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
  pub severity: Severity,
  pub message: String,
  pub path: Vec<String>,
}

impl Finding {
  pub fn new<I, S>(severity: Severity, message: impl Into<String>, path: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      severity,
      message: message.into(),
      path: path.into_iter().map(Into::into).collect(),
    }
  }

  pub fn error<I, S>(message: impl Into<String>, path: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::new(Severity::Error, message, path)
  }

  pub fn warning<I, S>(message: impl Into<String>, path: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::new(Severity::Warning, message, path)
  }

  pub fn info<I, S>(message: impl Into<String>, path: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::new(Severity::Info, message, path)
  }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
  Documentation,
  Syntax,
  BestPractices,
  Security,
  Usability,
}

impl Category {
  /// All categories in report order.
  pub const ALL: [Category; 5] = [
    Self::Documentation,
    Self::Syntax,
    Self::BestPractices,
    Self::Security,
    Self::Usability,
  ];

  /// Fixed weight; the five weights sum to 1.0.
  pub fn weight(self) -> f64 {
    match self {
      Self::Documentation => 0.30,
      Self::Syntax => 0.20,
      Self::BestPractices => 0.25,
      Self::Security => 0.15,
      Self::Usability => 0.10,
    }
  }

  pub fn key(self) -> &'static str {
    match self {
      Self::Documentation => "documentation",
      Self::Syntax => "syntax",
      Self::BestPractices => "bestPractices",
      Self::Security => "security",
      Self::Usability => "usability",
    }
  }
}

/// Score for one category. `findings` is always serialized, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
  pub score: f64,
  pub weight: f64,
  pub findings: Vec<Finding>,
}

impl CategoryScore {
  pub fn weighted(&self) -> f64 {
    self.score * self.weight
  }
}

/// The five category scores, keyed by category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
  pub documentation: CategoryScore,
  pub syntax: CategoryScore,
  pub best_practices: CategoryScore,
  pub security: CategoryScore,
  pub usability: CategoryScore,
}

impl Scores {
  pub fn get(&self, category: Category) -> &CategoryScore {
    match category {
      Category::Documentation => &self.documentation,
      Category::Syntax => &self.syntax,
      Category::BestPractices => &self.best_practices,
      Category::Security => &self.security,
      Category::Usability => &self.usability,
    }
  }

  /// Iterate (category, score) pairs in report order.
  pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryScore)> {
    Category::ALL.into_iter().map(move |c| (c, self.get(c)))
  }
}

// ---------------------------------------------------------------------------
// Report (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Letter grade derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
  A,
  B,
  C,
  D,
  F,
}

impl Grade {
  pub fn from_score(score: f64) -> Self {
    if score >= 0.9 {
      Self::A
    } else if score >= 0.8 {
      Self::B
    } else if score >= 0.7 {
      Self::C
    } else if score >= 0.6 {
      Self::D
    } else {
      Self::F
    }
  }
}

/// Finding counts by severity across all categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingSummary {
  pub errors: usize,
  pub warnings: usize,
  pub info: usize,
}

impl FindingSummary {
  pub fn tally<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
    let mut out = Self::default();
    for f in findings {
      match f.severity {
        Severity::Error => out.errors += 1,
        Severity::Warning => out.warnings += 1,
        Severity::Info => out.info += 1,
      }
    }
    out
  }

  pub fn total(&self) -> usize {
    self.errors + self.warnings + self.info
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
  pub analysis_id: String,
  pub file_name: String,
  pub spec_version: String,
  pub scores: Scores,
  pub overall_score: f64,
  pub grade: Grade,
  pub summary: FindingSummary,
  pub timestamp: String,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output when a document cannot be read or decoded.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      file: None,
    }
  }

  pub fn with_file(mut self, file: impl Into<String>) -> Self {
    self.file = Some(file.into());
    self
  }
}
