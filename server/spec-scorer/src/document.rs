//! Permissive accessors over the decoded document tree.
//!
//! Every lookup returns `Option`; a missing key, a `null`, or a wrong-typed
//! intermediate node all read as absent. Nothing here can fail.

use serde_json::{Map, Value};

/// Follow `keys` from `root` through nested maps.
pub fn lookup<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Value> {
  let mut cur = root;
  for key in keys {
    cur = cur.as_object()?.get(*key)?;
  }
  Some(cur)
}

/// Loose presence test: absent, `null`, `false`, `0`, and `""` are missing.
/// Maps and sequences count as present even when empty.
pub fn is_truthy(value: Option<&Value>) -> bool {
  match value {
    None | Some(Value::Null) => false,
    Some(Value::Bool(b)) => *b,
    Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
    Some(Value::String(s)) => !s.is_empty(),
    Some(Value::Array(_)) | Some(Value::Object(_)) => true,
  }
}

/// `lookup` + `is_truthy`.
pub fn has(root: &Value, keys: &[&str]) -> bool {
  is_truthy(lookup(root, keys))
}

/// The map at `keys`, only if it is a map with at least one entry.
pub fn non_empty_map<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Map<String, Value>> {
  lookup(root, keys)?.as_object().filter(|m| !m.is_empty())
}

/// The sequence at `keys`, only if it is a sequence with at least one entry.
pub fn non_empty_seq<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
  lookup(root, keys)?.as_array().filter(|a| !a.is_empty())
}

/// Render a scalar the way it would read in a message ("2.0", "3.0.1", "true").
pub fn display_scalar(value: Option<&Value>) -> String {
  match value {
    None => "undefined".to_string(),
    Some(Value::Null) => "null".to_string(),
    Some(Value::String(s)) => s.clone(),
    Some(other) => other.to_string(),
  }
}

// ---------------------------------------------------------------------------
// Operation walker
// ---------------------------------------------------------------------------

/// Path-item key that holds shared parameters rather than an operation.
pub const PARAMETERS_KEY: &str = "parameters";

/// One method entry under a path, borrowed from the document.
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
  pub path: &'a str,
  pub method: &'a str,
  pub body: &'a Value,
}

impl<'a> Operation<'a> {
  /// "GET /pets"
  pub fn label(&self) -> String {
    format!("{} {}", self.method.to_uppercase(), self.path)
  }

  /// Document path segments locating this operation.
  pub fn location(&self) -> Vec<String> {
    vec!["paths".to_string(), self.path.to_string(), self.method.to_string()]
  }

  /// Location with extra trailing segments.
  pub fn location_with(&self, extra: &[&str]) -> Vec<String> {
    let mut loc = self.location();
    loc.extend(extra.iter().map(|s| s.to_string()));
    loc
  }

  pub fn has(&self, key: &str) -> bool {
    has(self.body, &[key])
  }

  pub fn has_documentation(&self) -> bool {
    self.has("description") || self.has("summary")
  }

  pub fn has_responses(&self) -> bool {
    non_empty_map(self.body, &["responses"]).is_some()
  }

  pub fn has_parameters(&self) -> bool {
    non_empty_seq(self.body, &["parameters"]).is_some()
  }

  /// (status code, response) pairs in document order. Empty when `responses` is absent or not a map.
  pub fn responses(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
    let body: &'a Value = self.body;
    lookup(body, &["responses"])
      .and_then(Value::as_object)
      .into_iter()
      .flat_map(|m| m.iter().map(|(code, resp)| (code.as_str(), resp)))
  }
}

/// Every operation in the document: paths in input order, then methods in
/// input order, skipping the `parameters` pseudo-method. Path items that are
/// not maps contribute nothing; method entries that are not maps are still
/// listed and simply read as having no fields.
pub fn operations(doc: &Value) -> Vec<Operation<'_>> {
  let Some(paths) = lookup(doc, &["paths"]).and_then(Value::as_object) else {
    return Vec::new();
  };
  let mut out = Vec::new();
  for (path, item) in paths {
    let Some(methods) = item.as_object() else {
      continue;
    };
    // Path-item fields such as `summary`, `servers` or `$ref` are listed as
    // operations too; only `parameters` is excluded.
    for (method, body) in methods {
      if method == PARAMETERS_KEY {
        continue;
      }
      out.push(Operation {
        path: path.as_str(),
        method: method.as_str(),
        body,
      });
    }
  }
  out
}

/// Response carries an `examples` or `example` entry.
pub fn response_has_example(response: &Value) -> bool {
  has(response, &["examples"]) || has(response, &["example"])
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn lookup_tolerates_wrong_shapes() {
    let doc = json!({"info": "not a map", "paths": null});
    assert!(lookup(&doc, &["info", "title"]).is_none());
    assert!(lookup(&doc, &["paths", "/x"]).is_none());
    assert!(lookup(&doc, &["missing"]).is_none());
    assert_eq!(lookup(&doc, &["info"]), Some(&json!("not a map")));
  }

  #[test]
  fn truthiness_rules() {
    assert!(!is_truthy(None));
    assert!(!is_truthy(Some(&json!(null))));
    assert!(!is_truthy(Some(&json!(""))));
    assert!(!is_truthy(Some(&json!(0))));
    assert!(!is_truthy(Some(&json!(false))));
    assert!(is_truthy(Some(&json!("x"))));
    assert!(is_truthy(Some(&json!({}))));
    assert!(is_truthy(Some(&json!([]))));
    assert!(is_truthy(Some(&json!(2.0))));
  }

  #[test]
  fn non_empty_helpers_require_shape() {
    let doc = json!({"tags": [], "security": {"a": 1}, "servers": [{"url": "x"}]});
    assert!(non_empty_seq(&doc, &["tags"]).is_none());
    assert!(non_empty_seq(&doc, &["security"]).is_none());
    assert!(non_empty_map(&doc, &["security"]).is_some());
    assert_eq!(non_empty_seq(&doc, &["servers"]).map(Vec::len), Some(1));
  }

  #[test]
  fn operations_keep_input_order_and_skip_parameters() {
    let doc = json!({
      "paths": {
        "/b": {"post": {}, "parameters": [], "get": {}},
        "/a": {"delete": {}},
        "/bad": "nope"
      }
    });
    let ops: Vec<String> = operations(&doc).iter().map(|o| o.label()).collect();
    assert_eq!(ops, vec!["POST /b", "GET /b", "DELETE /a"]);
  }

  #[test]
  fn path_item_fields_other_than_parameters_are_operations() {
    let doc = json!({"paths": {"/a": {"summary": "s", "servers": [], "get": {}}}});
    let methods: Vec<&str> = operations(&doc).iter().map(|o| o.method).collect();
    assert_eq!(methods, vec!["summary", "servers", "get"]);
  }

  #[test]
  fn responses_iterate_in_order() {
    let doc = json!({"paths": {"/x": {"get": {"responses": {"200": {}, "404": {}, "500": {}}}}}});
    let ops = operations(&doc);
    let codes: Vec<&str> = ops[0].responses().map(|(c, _)| c).collect();
    assert_eq!(codes, vec!["200", "404", "500"]);
  }

  #[test]
  fn display_scalar_renders_versions() {
    assert_eq!(display_scalar(Some(&json!("2.0"))), "2.0");
    assert_eq!(display_scalar(Some(&json!(3))), "3");
    assert_eq!(display_scalar(None), "undefined");
  }
}
