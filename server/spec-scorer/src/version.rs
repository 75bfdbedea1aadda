//! Spec version resolution: display label plus the v2/v3 dialect every
//! category handler branches on.

use serde_json::Value;

use crate::document::{display_scalar, has, lookup};

/// Which family of keys the document uses for servers and security schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
  /// `securityDefinitions`, `host` + `schemes`.
  Swagger2,
  /// `components.securitySchemes`, `servers`.
  OpenApi3,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecVersion {
  pub label: String,
  pub dialect: Dialect,
}

impl SpecVersion {
  /// Label: "Swagger <swagger>" when `swagger` is set, otherwise
  /// "OpenAPI <openapi>" (with "undefined" when that is missing too).
  /// Dialect: OpenApi3 iff an `openapi` key is set. No validation happens here.
  pub fn resolve(doc: &Value) -> Self {
    let label = if has(doc, &["swagger"]) {
      format!("Swagger {}", display_scalar(lookup(doc, &["swagger"])))
    } else {
      format!("OpenAPI {}", display_scalar(lookup(doc, &["openapi"])))
    };
    let dialect = if has(doc, &["openapi"]) {
      Dialect::OpenApi3
    } else {
      Dialect::Swagger2
    };
    Self { label, dialect }
  }

  /// Document location of the security scheme definitions for this dialect.
  pub fn security_schemes_path(&self) -> &'static [&'static str] {
    match self.dialect {
      Dialect::OpenApi3 => &["components", "securitySchemes"],
      Dialect::Swagger2 => &["securityDefinitions"],
    }
  }

  /// Document location that declares transport (servers vs schemes).
  pub fn transport_path(&self) -> &'static [&'static str] {
    match self.dialect {
      Dialect::OpenApi3 => &["servers"],
      Dialect::Swagger2 => &["schemes"],
    }
  }
}
