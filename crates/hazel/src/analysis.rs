//! Complexity metrics for a single unit of source text
//!
//! All three scores come from textual scans of the raw source. The keyword
//! sets and formula constants are a fixed contract: scores must stay
//! reproducible across releases, so they are frozen even where a more
//! faithful formula exists.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::RatingBands;

/// Decision-point keywords counted toward cyclomatic complexity
const DECISION_PATTERNS: [&str; 5] =
  [r"\bif\b", r"\belif\b", r"\bfor\b", r"\bwhile\b", r"\bexcept\b"];

/// Keywords that open a block and deepen the nesting level
const BLOCK_OPENERS: [&str; 6] = ["if", "for", "while", "def", "class", "try"];

/// Keywords that continue a block at its current nesting level
const BLOCK_CONTINUATIONS: [&str; 4] = ["elif", "else", "except", "finally"];

/// Metrics computed for one version of a source unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
  pub cyclomatic_complexity: usize,
  pub cognitive_complexity: usize,
  pub maintainability_index: f64,
  pub lines_of_code: usize,
  pub avg_line_length: f64,
}

impl MetricsRecord {
  /// Rating band for this record's maintainability index
  pub fn rating(&self, bands: &RatingBands) -> MaintainabilityRating {
    MaintainabilityRating::from_index(self.maintainability_index, bands)
  }
}

/// Qualitative rating over the maintainability index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintainabilityRating {
  Excellent,
  Good,
  Fair,
  Poor,
}

impl MaintainabilityRating {
  pub fn from_index(index: f64, bands: &RatingBands) -> Self {
    if index > bands.excellent {
      Self::Excellent
    } else if index > bands.good {
      Self::Good
    } else if index > bands.fair {
      Self::Fair
    } else {
      Self::Poor
    }
  }
}

impl fmt::Display for MaintainabilityRating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Self::Excellent => "excellent",
      Self::Good => "good",
      Self::Fair => "fair",
      Self::Poor => "poor",
    };
    write!(f, "{label}")
  }
}

/// Score one unit of source text
///
/// Total over any input, including empty text: malformed or non-source
/// text simply matches few patterns and scores as simple.
pub fn analyze(source: &str) -> MetricsRecord {
  let lines_of_code = source.lines().count();
  let cyclomatic = calculate_cyclomatic_complexity(source);
  let cognitive = calculate_cognitive_complexity(source);

  MetricsRecord {
    cyclomatic_complexity: cyclomatic,
    cognitive_complexity: cognitive,
    maintainability_index: calculate_maintainability_index(lines_of_code, cyclomatic, cognitive),
    lines_of_code,
    avg_line_length: average_line_length(source, lines_of_code),
  }
}

/// Cyclomatic complexity: one plus the number of decision points
fn calculate_cyclomatic_complexity(source: &str) -> usize {
  let mut complexity = 1; // base complexity

  for pattern in DECISION_PATTERNS {
    let re = Regex::new(pattern).unwrap();
    complexity += re.find_iter(source).count();
  }

  // Boolean operators branch too, except a trailing `and`/`or`, which is
  // a line-continuation artifact rather than a decision point.
  let booleans = Regex::new(r"\b(?:and|or)\b").unwrap();
  complexity += booleans.find_iter(source).filter(|m| !at_line_end(source, m.end())).count();

  complexity
}

/// True when `pos` sits immediately before a line break or the end of input
fn at_line_end(source: &str, pos: usize) -> bool {
  let rest = source[pos..].as_bytes();
  match rest.first() {
    None => true,
    Some(b'\n') => true,
    Some(b'\r') => rest.get(1) == Some(&b'\n'),
    _ => false,
  }
}

/// Cognitive complexity: nesting-weighted count of control-flow lines
///
/// The depth tracking is line-prefix-based, not indentation-column-based:
/// it reacts to keyword ordering, and any non-empty line starting at
/// column 0 returns the scan to the top level.
fn calculate_cognitive_complexity(source: &str) -> usize {
  let mut cognitive = 0;
  let mut nesting_depth = 0;

  for line in source.lines() {
    if !line.is_empty() && !line.starts_with(char::is_whitespace) {
      nesting_depth = 0;
    }

    if first_token_is(line, &BLOCK_OPENERS) {
      nesting_depth += 1;
      cognitive += nesting_depth;
    } else if first_token_is(line, &BLOCK_CONTINUATIONS) {
      cognitive += nesting_depth;
    }
  }

  cognitive
}

/// Whether the first non-space token of `line` is one of `keywords`
fn first_token_is(line: &str, keywords: &[&str]) -> bool {
  let trimmed = line.trim_start();
  keywords.iter().any(|kw| {
    trimmed.starts_with(kw)
      && trimmed[kw.len()..].chars().next().map_or(true, |c| !c.is_alphanumeric() && c != '_')
  })
}

/// Maintainability index clamped to a 0-100 scale
fn calculate_maintainability_index(lines: usize, cyclomatic: usize, cognitive: usize) -> f64 {
  // An empty unit has no branch density to measure
  let branch_density = if lines == 0 { 0.0 } else { cyclomatic as f64 / lines as f64 };
  let length_penalty = lines as f64 / 1000.0;

  let index = 171.0 - 5.2 * branch_density - 0.23 * cognitive as f64 - 16.2 * length_penalty;
  index.clamp(0.0, 100.0)
}

/// Mean character count per line, 0 for an empty unit
pub(crate) fn average_line_length(source: &str, lines: usize) -> f64 {
  if lines == 0 {
    return 0.0;
  }
  let total: usize = source.lines().map(|line| line.chars().count()).sum();
  total as f64 / lines as f64
}
