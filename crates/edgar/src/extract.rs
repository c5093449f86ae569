//! Signature and docstring extraction
//!
//! Finds `def get_*` / `def post_*` definitions whose signature fits on one
//! line, then captures the docstring that follows. Parameter names are kept
//! without annotations or defaults; starred parameters are skipped.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One documented API endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEndpoint {
  pub name: String,
  pub docstring: Option<String>,
  pub params: Vec<String>,
  pub returns: String,
}

/// Scan source text for annotated endpoint definitions
pub fn extract_endpoints(source: &str) -> Vec<ApiEndpoint> {
  let def_re =
    Regex::new(r"^\s*def\s+((?:get|post)_\w+)\s*\(([^)]*)\)\s*(?:->\s*([^:]+))?:").unwrap();
  let lines: Vec<&str> = source.lines().collect();
  let mut endpoints = Vec::new();

  for (idx, line) in lines.iter().enumerate() {
    let Some(caps) = def_re.captures(line) else {
      continue;
    };

    endpoints.push(ApiEndpoint {
      name: caps[1].to_string(),
      docstring: docstring_after(&lines, idx + 1),
      params: parameter_names(caps.get(2).map_or("", |m| m.as_str())),
      returns: caps.get(3).map_or("Any", |m| m.as_str().trim()).to_string(),
    });
  }

  endpoints
}

/// Parameter names from a signature's argument list
fn parameter_names(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|param| !param.is_empty() && !param.starts_with('*'))
    .map(|param| {
      // drop the annotation and default, keep the bare name
      let name = param.split([':', '=']).next().unwrap_or(param);
      name.trim().to_string()
    })
    .collect()
}

/// The docstring opening on the first non-blank line at or after `start`
fn docstring_after(lines: &[&str], start: usize) -> Option<String> {
  let mut idx = start;
  while idx < lines.len() && lines[idx].trim().is_empty() {
    idx += 1;
  }

  let first = lines.get(idx)?.trim();
  let delim = ["\"\"\"", "'''"].into_iter().find(|d| first.starts_with(d))?;

  // single-line docstring closes on the same line
  let body = &first[delim.len()..];
  if let Some(end) = body.find(delim) {
    return Some(body[..end].trim().to_string());
  }

  let mut parts = vec![body.trim().to_string()];
  for line in &lines[idx + 1..] {
    if let Some(end) = line.find(delim) {
      parts.push(line[..end].trim().to_string());
      let doc = parts.join("\n");
      return Some(doc.trim().to_string());
    }
    parts.push(line.trim().to_string());
  }

  // unterminated docstring reads as no docstring
  None
}
