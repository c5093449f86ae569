//! Quick structural summary of a source unit
//!
//! A rougher companion to [`crate::analysis`]: flat counts of top-level
//! definitions and decision keywords. Its keyword rule has no base value
//! and skips the line-continuation handling of the full analyzer; the two
//! rules differ on purpose and both are part of the contract.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::average_line_length;

/// Flat counts for one source unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
  pub functions: usize,
  pub classes: usize,
  pub avg_line_length: f64,
  pub complexity_score: usize,
}

/// Tally definitions and decision keywords in one pass over the text
pub fn summarize(source: &str) -> SourceSummary {
  let functions = Regex::new(r"(?m)^def\s+\w+").unwrap().find_iter(source).count();
  let classes = Regex::new(r"(?m)^class\s+\w+").unwrap().find_iter(source).count();
  let complexity_score =
    Regex::new(r"\b(?:if|elif|else|for|while|and|or)\b").unwrap().find_iter(source).count();

  SourceSummary {
    functions,
    classes,
    avg_line_length: average_line_length(source, source.lines().count()),
    complexity_score,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_counts_top_level_definitions_only() {
    let source = "def outer():\n    def inner():\n        pass\n\nclass Widget:\n    pass\n";
    let summary = summarize(source);

    assert_eq!(summary.functions, 1);
    assert_eq!(summary.classes, 1);
  }

  #[test]
  fn test_keyword_tally_has_no_base_value() {
    let summary = summarize("x = 1\n");

    assert_eq!(summary.complexity_score, 0);
  }

  #[test]
  fn test_keyword_tally_includes_else_and_trailing_operators() {
    // unlike the cyclomatic rule, `else` counts and so does a trailing `and`
    let source = "if a and\n    b:\n    pass\nelse:\n    pass\n";
    let summary = summarize(source);

    assert_eq!(summary.complexity_score, 3);
  }

  #[test]
  fn test_empty_unit() {
    let summary = summarize("");

    assert_eq!(summary.functions, 0);
    assert_eq!(summary.classes, 0);
    assert_eq!(summary.avg_line_length, 0.0);
    assert_eq!(summary.complexity_score, 0);
  }

  #[test]
  fn test_average_line_length_matches_analyzer() {
    let summary = summarize("x = 1\n");

    assert_eq!(summary.avg_line_length, 5.0);
  }
}
